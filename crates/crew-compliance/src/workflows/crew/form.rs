use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{CrewDocuments, CrewRecord, DutyStatus, TrainingRecord};

pub const SIMULATOR_TRAINING: &str = "simulator";
pub const CRM_TRAINING: &str = "crm";
pub const EMERGENCY_TRAINING: &str = "emergency";

/// Raw field values as typed into the crew compliance form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewForm {
    #[serde(default)]
    pub duty_status: Option<String>,
    #[serde(default)]
    pub license_expiry: Option<String>,
    #[serde(default)]
    pub last_flight: Option<String>,
    #[serde(default)]
    pub hours_90_days: Option<String>,
    #[serde(default)]
    pub hours_12_months: Option<String>,
    #[serde(default)]
    pub simulator_training_expiry: Option<String>,
    #[serde(default)]
    pub crm_training_expiry: Option<String>,
    #[serde(default)]
    pub emergency_training_expiry: Option<String>,
    #[serde(default)]
    pub icao_expiry: Option<String>,
    #[serde(default)]
    pub medical_cert_expiry: Option<String>,
    #[serde(default)]
    pub passport_expiry: Option<String>,
}

impl CrewForm {
    /// Transcribe the form into a crew record. Unparsable values become
    /// absent (or zero hours) so they surface as failed checks.
    pub fn into_record(self) -> CrewRecord {
        let mut trainings = BTreeMap::new();
        for (name, raw) in [
            (SIMULATOR_TRAINING, &self.simulator_training_expiry),
            (CRM_TRAINING, &self.crm_training_expiry),
            (EMERGENCY_TRAINING, &self.emergency_training_expiry),
        ] {
            trainings.insert(
                name.to_string(),
                TrainingRecord {
                    expiry: parse_optional_timestamp(raw.as_deref()),
                },
            );
        }

        CrewRecord {
            duty_status: self.duty_status.as_deref().and_then(DutyStatus::parse),
            license_expiry: parse_optional_timestamp(self.license_expiry.as_deref()),
            trainings,
            last_flight_date: parse_optional_timestamp(self.last_flight.as_deref()),
            flight_hours_last_90_days: parse_hours(self.hours_90_days.as_deref()),
            flight_hours_last_12_months: parse_hours(self.hours_12_months.as_deref()),
            documents: Some(CrewDocuments {
                icao_expiry: parse_optional_timestamp(self.icao_expiry.as_deref()),
                medical_cert_expiry: parse_optional_timestamp(self.medical_cert_expiry.as_deref()),
                passport_expiry: parse_optional_timestamp(self.passport_expiry.as_deref()),
            }),
        }
    }
}

/// Accepts RFC 3339 timestamps or `YYYY-MM-DD` dates (read as midnight UTC).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub(crate) fn parse_optional_timestamp(value: Option<&str>) -> Option<DateTime<Utc>> {
    value.and_then(parse_timestamp)
}

pub(crate) fn parse_hours(value: Option<&str>) -> f64 {
    value
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|hours| hours.is_finite() && *hours >= 0.0)
        .unwrap_or(0.0)
}
