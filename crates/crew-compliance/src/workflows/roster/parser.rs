use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::workflows::crew::CrewForm;

#[derive(Debug)]
pub(crate) struct RosterRow {
    pub(crate) crew_id: String,
    pub(crate) name: String,
    pub(crate) form: CrewForm,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<RosterRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for record in csv_reader.deserialize::<RosterCsvRow>() {
        let row = record?;
        rows.push(row.into_row());
    }

    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct RosterCsvRow {
    #[serde(rename = "Crew ID")]
    crew_id: String,
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(
        rename = "Duty Status",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    duty_status: Option<String>,
    #[serde(
        rename = "License Expiry",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    license_expiry: Option<String>,
    #[serde(
        rename = "Last Flight",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    last_flight: Option<String>,
    #[serde(
        rename = "Hours 90 Days",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    hours_90_days: Option<String>,
    #[serde(
        rename = "Hours 12 Months",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    hours_12_months: Option<String>,
    #[serde(
        rename = "Simulator Expiry",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    simulator_expiry: Option<String>,
    #[serde(
        rename = "CRM Expiry",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    crm_expiry: Option<String>,
    #[serde(
        rename = "Emergency Expiry",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    emergency_expiry: Option<String>,
    #[serde(
        rename = "ICAO Expiry",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    icao_expiry: Option<String>,
    #[serde(
        rename = "Medical Expiry",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    medical_expiry: Option<String>,
    #[serde(
        rename = "Passport Expiry",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    passport_expiry: Option<String>,
}

impl RosterCsvRow {
    fn into_row(self) -> RosterRow {
        RosterRow {
            crew_id: self.crew_id,
            name: self.name,
            form: CrewForm {
                duty_status: self.duty_status,
                license_expiry: self.license_expiry,
                last_flight: self.last_flight,
                hours_90_days: self.hours_90_days,
                hours_12_months: self.hours_12_months,
                simulator_training_expiry: self.simulator_expiry,
                crm_training_expiry: self.crm_expiry,
                emergency_training_expiry: self.emergency_expiry,
                icao_expiry: self.icao_expiry,
                medical_cert_expiry: self.medical_expiry,
                passport_expiry: self.passport_expiry,
            },
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
