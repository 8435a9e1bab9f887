use serde::Serialize;

use super::domain::CheckKind;
use super::eligibility::Verdict;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    Success,
    Danger,
}

impl AlertLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckStatusView {
    pub check: CheckKind,
    pub label: &'static str,
    pub passed: bool,
    pub status_label: &'static str,
}

/// Render-ready badge and banner data for a verdict.
#[derive(Debug, Clone, Serialize)]
pub struct ComplianceView {
    pub checks: Vec<CheckStatusView>,
    pub approved: bool,
    pub percent: u8,
    pub status_message: String,
    pub alert_level: AlertLevel,
}

impl Verdict {
    pub fn view(&self) -> ComplianceView {
        let checks = CheckKind::ordered()
            .into_iter()
            .map(|check| {
                let passed = self.details.get(check);
                CheckStatusView {
                    check,
                    label: check.label(),
                    passed,
                    status_label: if passed { "Approved" } else { "Rejected" },
                }
            })
            .collect();

        ComplianceView {
            checks,
            approved: self.approved,
            percent: self.percent,
            status_message: self.message.clone(),
            alert_level: if self.approved {
                AlertLevel::Success
            } else {
                AlertLevel::Danger
            },
        }
    }
}
