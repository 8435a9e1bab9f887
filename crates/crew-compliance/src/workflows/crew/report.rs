use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::eligibility::Verdict;

/// Timestamped verdict plus remediation notes for the audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub timestamp: DateTime<Utc>,
    pub verdict: Verdict,
    pub recommendations: Vec<String>,
}

impl ComplianceReport {
    pub fn is_clean(&self) -> bool {
        self.recommendations.is_empty()
    }
}

/// One recommendation per failed check, always in duty, license, training,
/// experience, documentation order.
pub fn build_report(verdict: &Verdict, now: DateTime<Utc>) -> ComplianceReport {
    let recommendations = verdict
        .details
        .failed()
        .into_iter()
        .map(|check| check.recommendation().to_string())
        .collect();

    ComplianceReport {
        timestamp: now,
        verdict: verdict.clone(),
        recommendations,
    }
}
