//! Crew eligibility rules, compliance reporting, and the roster clearance gate.

pub mod clearance;
pub mod domain;
pub mod eligibility;
pub mod form;
pub mod report;
pub mod router;
pub mod views;

#[cfg(test)]
mod tests;

pub use clearance::{validate_for_roster, ClearanceError, RosterClearance};
pub use domain::{CheckKind, CrewDocuments, CrewRecord, DutyStatus, TrainingRecord};
pub use eligibility::{evaluate, CheckResults, EligibilityEvaluator, EligibilityPolicy, Verdict};
pub use form::{parse_timestamp, CrewForm};
pub use report::{build_report, ComplianceReport};
pub use router::{crew_router, EligibilityRequest, EligibilityResponse, RosterScreeningRequest};
pub use views::{AlertLevel, CheckStatusView, ComplianceView};
