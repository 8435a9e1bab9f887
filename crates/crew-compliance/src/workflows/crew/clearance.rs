use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use super::domain::CrewRecord;
use super::eligibility::{CheckResults, EligibilityEvaluator};
use super::report::{build_report, ComplianceReport};

/// Outcome of gating a crew member before a roster assignment is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RosterClearance {
    Approved {
        message: String,
        details: CheckResults,
    },
    Rejected {
        reason: String,
        details: CheckResults,
        report: ComplianceReport,
    },
}

impl RosterClearance {
    pub fn is_approved(&self) -> bool {
        matches!(self, RosterClearance::Approved { .. })
    }

    pub fn details(&self) -> &CheckResults {
        match self {
            RosterClearance::Approved { details, .. } | RosterClearance::Rejected { details, .. } => {
                details
            }
        }
    }

    /// Treat a rejection as a hard block for scheduling code paths.
    pub fn into_result(self) -> Result<CheckResults, ClearanceError> {
        match self {
            RosterClearance::Approved { details, .. } => Ok(details),
            RosterClearance::Rejected { reason, report, .. } => {
                Err(ClearanceError::Blocked { reason, report })
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClearanceError {
    #[error("crew member blocked from roster: {reason}")]
    Blocked {
        reason: String,
        report: ComplianceReport,
    },
}

pub fn validate_for_roster(
    evaluator: &EligibilityEvaluator,
    record: &CrewRecord,
    now: DateTime<Utc>,
) -> RosterClearance {
    let verdict = evaluator.evaluate(record, now);

    if verdict.approved {
        return RosterClearance::Approved {
            message: "Crew member approved for roster".to_string(),
            details: verdict.details,
        };
    }

    let report = build_report(&verdict, now);
    warn!(
        reason = %verdict.message,
        pending = ?verdict.details.failed(),
        "crew member not cleared for roster"
    );

    RosterClearance::Rejected {
        reason: verdict.message,
        details: verdict.details,
        report,
    }
}
