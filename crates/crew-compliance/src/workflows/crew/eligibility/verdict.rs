use serde::{Deserialize, Serialize};

use super::super::domain::CheckKind;

/// Pass/fail flag for each of the five checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResults {
    pub duty: bool,
    pub license: bool,
    pub training: bool,
    pub experience: bool,
    pub documentation: bool,
}

impl CheckResults {
    pub const TOTAL: usize = 5;

    pub fn get(&self, check: CheckKind) -> bool {
        match check {
            CheckKind::Duty => self.duty,
            CheckKind::License => self.license,
            CheckKind::Training => self.training,
            CheckKind::Experience => self.experience,
            CheckKind::Documentation => self.documentation,
        }
    }

    pub fn passed_count(&self) -> usize {
        CheckKind::ordered()
            .into_iter()
            .filter(|check| self.get(*check))
            .count()
    }

    /// Failed checks in report order.
    pub fn failed(&self) -> Vec<CheckKind> {
        CheckKind::ordered()
            .into_iter()
            .filter(|check| !self.get(*check))
            .collect()
    }
}

/// Aggregated eligibility outcome for one crew member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub approved: bool,
    pub passed_count: usize,
    pub total_count: usize,
    pub percent: u8,
    pub details: CheckResults,
    pub message: String,
}

impl Verdict {
    pub fn from_checks(details: CheckResults) -> Self {
        let total_count = CheckResults::TOTAL;
        let passed_count = details.passed_count();
        let approved = passed_count == total_count;
        let percent = ((passed_count * 100) as f64 / total_count as f64).round() as u8;

        let message = if approved {
            "APPROVED for scheduling".to_string()
        } else {
            format!("REJECTED - {} item(s) pending", total_count - passed_count)
        };

        Self {
            approved,
            passed_count,
            total_count,
            percent,
            details,
            message,
        }
    }
}
