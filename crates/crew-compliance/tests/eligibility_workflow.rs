//! End-to-end eligibility scenarios exercised through the public crate surface.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, TimeZone, Utc};
use crew_compliance::workflows::crew::{
    build_report, evaluate, validate_for_roster, CheckKind, CrewDocuments, CrewForm, CrewRecord,
    DutyStatus, EligibilityEvaluator, RosterClearance, TrainingRecord,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 3, 8, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn captain() -> CrewRecord {
    let mut trainings = BTreeMap::new();
    trainings.insert(
        "simulator".to_string(),
        TrainingRecord::expiring(now() + Duration::days(45)),
    );
    trainings.insert(
        "crm".to_string(),
        TrainingRecord::expiring(now() + Duration::days(300)),
    );

    CrewRecord {
        duty_status: Some(DutyStatus::Available),
        license_expiry: Some(now() + Duration::days(20)),
        trainings,
        last_flight_date: Some(now() - Duration::days(3)),
        flight_hours_last_90_days: 64.0,
        flight_hours_last_12_months: 720.0,
        documents: Some(CrewDocuments {
            icao_expiry: Some(now() + Duration::days(500)),
            medical_cert_expiry: Some(now() + Duration::days(60)),
            passport_expiry: Some(now() + Duration::days(1500)),
        }),
    }
}

#[test]
fn captain_with_current_credentials_is_cleared() {
    let evaluator = EligibilityEvaluator::default();

    let clearance = validate_for_roster(&evaluator, &captain(), now());

    assert!(clearance.is_approved());
}

#[test]
fn expired_passport_blocks_international_roster() {
    let mut record = captain();
    if let Some(documents) = record.documents.as_mut() {
        documents.passport_expiry = Some(now() - Duration::days(2));
    }

    let verdict = evaluate(&record, now());
    let report = build_report(&verdict, now());

    assert!(!verdict.approved);
    assert_eq!(verdict.percent, 80);
    assert_eq!(
        report.recommendations,
        vec![CheckKind::Documentation.recommendation().to_string()]
    );
}

#[test]
fn lapsed_currency_and_duty_status_are_reported_in_order() {
    let mut record = captain();
    record.last_flight_date = Some(now() - Duration::days(120));
    record.duty_status = Some(DutyStatus::Unavailable);

    let evaluator = EligibilityEvaluator::default();
    match validate_for_roster(&evaluator, &record, now()) {
        RosterClearance::Rejected { reason, report, .. } => {
            assert_eq!(reason, "REJECTED - 2 item(s) pending");
            assert_eq!(
                report.recommendations,
                vec![
                    "Crew member is not available for duty".to_string(),
                    "Insufficient recent flight experience".to_string(),
                ]
            );
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn form_and_record_paths_agree() {
    let form = CrewForm {
        duty_status: Some("available".to_string()),
        license_expiry: Some("2026-06-30".to_string()),
        last_flight: Some("2025-10-28T19:45:00Z".to_string()),
        hours_90_days: Some("3".to_string()),
        hours_12_months: Some("150".to_string()),
        simulator_training_expiry: Some("2026-04-01".to_string()),
        crm_training_expiry: None,
        emergency_training_expiry: Some("2026-01-10".to_string()),
        icao_expiry: Some("2027-01-01".to_string()),
        medical_cert_expiry: Some("2026-02-14".to_string()),
        passport_expiry: None,
    };

    let verdict = evaluate(&form.into_record(), now());

    assert!(verdict.approved, "unexpected verdict: {verdict:?}");
}

#[test]
fn verdict_round_trips_through_json() {
    let verdict = evaluate(&captain(), now());

    let value = serde_json::to_value(&verdict).expect("serialize verdict");

    assert_eq!(value["details"]["documentation"], serde_json::json!(true));
    assert_eq!(value["total_count"], serde_json::json!(5));
}
