use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Availability of a crew member for the duty period being scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyStatus {
    Available,
    Unavailable,
}

impl DutyStatus {
    /// Lenient parse used by form and CSV intake; unknown values map to `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "available" | "disponivel" => Some(Self::Available),
            "unavailable" | "indisponivel" => Some(Self::Unavailable),
            _ => None,
        }
    }
}

/// Validity window of a single recurrent training item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingRecord {
    #[serde(default)]
    pub expiry: Option<DateTime<Utc>>,
}

impl TrainingRecord {
    pub fn expiring(expiry: DateTime<Utc>) -> Self {
        Self {
            expiry: Some(expiry),
        }
    }

    pub fn undated() -> Self {
        Self { expiry: None }
    }
}

/// Regulatory documents checked before scheduling. The passport only matters
/// for international legs, so every field is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewDocuments {
    #[serde(default)]
    pub icao_expiry: Option<DateTime<Utc>>,
    #[serde(default)]
    pub medical_cert_expiry: Option<DateTime<Utc>>,
    #[serde(default)]
    pub passport_expiry: Option<DateTime<Utc>>,
}

impl CrewDocuments {
    /// Expiry dates that were actually supplied, in icao/medical/passport order.
    pub fn present_expiries(&self) -> impl Iterator<Item = DateTime<Utc>> + '_ {
        [
            self.icao_expiry,
            self.medical_cert_expiry,
            self.passport_expiry,
        ]
        .into_iter()
        .flatten()
    }
}

/// Snapshot of one crew member's licensing, training, and flight history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrewRecord {
    #[serde(default)]
    pub duty_status: Option<DutyStatus>,
    #[serde(default)]
    pub license_expiry: Option<DateTime<Utc>>,
    #[serde(default)]
    pub trainings: BTreeMap<String, TrainingRecord>,
    #[serde(default)]
    pub last_flight_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub flight_hours_last_90_days: f64,
    /// Collected for the roster screen but not consulted by any check.
    #[serde(default)]
    pub flight_hours_last_12_months: f64,
    #[serde(default)]
    pub documents: Option<CrewDocuments>,
}

/// The five eligibility checks, in the order reports list them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    Duty,
    License,
    Training,
    Experience,
    Documentation,
}

impl CheckKind {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Duty,
            Self::License,
            Self::Training,
            Self::Experience,
            Self::Documentation,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Duty => "Duty availability",
            Self::License => "License validity",
            Self::Training => "Training validity",
            Self::Experience => "Recent experience",
            Self::Documentation => "Documentation",
        }
    }

    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::Duty => "Crew member is not available for duty",
            Self::License => "Licenses expired or close to expiry",
            Self::Training => "Trainings expired or pending",
            Self::Experience => "Insufficient recent flight experience",
            Self::Documentation => "Documentation expired or pending",
        }
    }
}
