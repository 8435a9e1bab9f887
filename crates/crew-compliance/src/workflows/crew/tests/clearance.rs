use super::common::*;
use crate::workflows::crew::{
    validate_for_roster, ClearanceError, EligibilityEvaluator, RosterClearance,
};

#[test]
fn compliant_crew_is_cleared() {
    let evaluator = EligibilityEvaluator::default();

    let clearance = validate_for_roster(&evaluator, &compliant_record(), now());

    match &clearance {
        RosterClearance::Approved { message, details } => {
            assert_eq!(message, "Crew member approved for roster");
            assert!(details.duty && details.documentation);
        }
        other => panic!("expected approval, got {other:?}"),
    }
    assert!(clearance.into_result().is_ok());
}

#[test]
fn rejected_crew_carries_reason_and_report() {
    let evaluator = EligibilityEvaluator::default();
    let mut record = compliant_record();
    record.trainings.clear();

    let clearance = validate_for_roster(&evaluator, &record, now());

    assert!(!clearance.is_approved());
    assert!(!clearance.details().training);
    match clearance.into_result() {
        Err(ClearanceError::Blocked { reason, report }) => {
            assert_eq!(reason, "REJECTED - 1 item(s) pending");
            assert_eq!(
                report.recommendations,
                vec!["Trainings expired or pending".to_string()]
            );
            assert_eq!(report.timestamp, now());
        }
        other => panic!("expected blocked clearance, got {other:?}"),
    }
}
