use std::collections::BTreeMap;

use axum::response::Response;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::crew::domain::{CrewDocuments, CrewRecord, DutyStatus, TrainingRecord};
use crate::workflows::crew::CrewForm;

pub(super) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 24, 14, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn days_from_now(days: i64) -> DateTime<Utc> {
    now() + Duration::days(days)
}

pub(super) fn compliant_record() -> CrewRecord {
    let mut trainings = BTreeMap::new();
    trainings.insert(
        "simulator".to_string(),
        TrainingRecord::expiring(days_from_now(120)),
    );
    trainings.insert("crm".to_string(), TrainingRecord::expiring(days_from_now(200)));
    trainings.insert("emergency".to_string(), TrainingRecord::undated());

    CrewRecord {
        duty_status: Some(DutyStatus::Available),
        license_expiry: Some(days_from_now(365)),
        trainings,
        last_flight_date: Some(days_from_now(-10)),
        flight_hours_last_90_days: 42.5,
        flight_hours_last_12_months: 610.0,
        documents: Some(CrewDocuments {
            icao_expiry: Some(days_from_now(400)),
            medical_cert_expiry: Some(days_from_now(90)),
            passport_expiry: None,
        }),
    }
}

/// Record failing every check.
pub(super) fn lapsed_record() -> CrewRecord {
    CrewRecord {
        duty_status: Some(DutyStatus::Unavailable),
        license_expiry: Some(days_from_now(-1)),
        trainings: BTreeMap::new(),
        last_flight_date: Some(days_from_now(-100)),
        flight_hours_last_90_days: 0.0,
        flight_hours_last_12_months: 12.0,
        documents: Some(CrewDocuments {
            icao_expiry: Some(days_from_now(-1)),
            medical_cert_expiry: None,
            passport_expiry: None,
        }),
    }
}

pub(super) fn compliant_form() -> CrewForm {
    CrewForm {
        duty_status: Some("available".to_string()),
        license_expiry: Some("2026-09-24".to_string()),
        last_flight: Some("2025-09-20".to_string()),
        hours_90_days: Some("12.5".to_string()),
        hours_12_months: Some("480".to_string()),
        simulator_training_expiry: Some("2026-01-15".to_string()),
        crm_training_expiry: Some("2026-02-01".to_string()),
        emergency_training_expiry: None,
        icao_expiry: Some("2027-05-01".to_string()),
        medical_cert_expiry: Some("2026-03-10".to_string()),
        passport_expiry: Some("2030-11-30".to_string()),
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
