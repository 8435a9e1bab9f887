use super::common::*;
use crate::workflows::crew::domain::DutyStatus;
use crate::workflows::crew::{evaluate, CrewForm};

#[test]
fn compliant_form_transcribes_to_approved_record() {
    let record = compliant_form().into_record();

    assert_eq!(record.duty_status, Some(DutyStatus::Available));
    assert_eq!(record.flight_hours_last_90_days, 12.5);
    assert_eq!(record.flight_hours_last_12_months, 480.0);
    assert_eq!(record.trainings.len(), 3);
    assert!(record.trainings["emergency"].expiry.is_none());
    assert!(record.documents.is_some());

    assert!(evaluate(&record, now()).approved);
}

#[test]
fn malformed_values_are_treated_as_absent() {
    let form = CrewForm {
        duty_status: Some("on leave".to_string()),
        license_expiry: Some("31/12/2026".to_string()),
        last_flight: Some("yesterday".to_string()),
        hours_90_days: Some("many".to_string()),
        ..compliant_form()
    };

    let record = form.into_record();

    assert_eq!(record.duty_status, None);
    assert_eq!(record.license_expiry, None);
    assert_eq!(record.last_flight_date, None);
    assert_eq!(record.flight_hours_last_90_days, 0.0);

    let verdict = evaluate(&record, now());
    assert!(!verdict.details.duty);
    assert!(!verdict.details.license);
    assert!(!verdict.details.experience);
    assert!(verdict.details.training);
    assert!(verdict.details.documentation);
}

#[test]
fn empty_form_still_carries_training_entries() {
    let record = CrewForm::default().into_record();

    assert_eq!(
        record.trainings.keys().cloned().collect::<Vec<_>>(),
        vec!["crm", "emergency", "simulator"]
    );

    let verdict = evaluate(&record, now());
    assert!(verdict.details.training);
    assert!(verdict.details.documentation);
    assert_eq!(verdict.passed_count, 2);
}

#[test]
fn legacy_duty_labels_are_accepted() {
    assert_eq!(DutyStatus::parse("Disponivel"), Some(DutyStatus::Available));
    assert_eq!(DutyStatus::parse(" indisponivel "), Some(DutyStatus::Unavailable));
    assert_eq!(DutyStatus::parse("AVAILABLE"), Some(DutyStatus::Available));
    assert_eq!(DutyStatus::parse(""), None);
}
