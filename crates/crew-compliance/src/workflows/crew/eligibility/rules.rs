use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::super::domain::{CrewDocuments, DutyStatus, TrainingRecord};
use super::config::EligibilityPolicy;

pub(crate) fn check_duty(duty_status: Option<DutyStatus>) -> bool {
    duty_status == Some(DutyStatus::Available)
}

pub(crate) fn check_license(
    license_expiry: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    policy: &EligibilityPolicy,
) -> bool {
    let Some(expiry) = license_expiry else {
        return false;
    };

    // The margin clause always holds for a positive margin. It is kept
    // verbatim until the intended 30-day warning window (likely
    // `now > safety_margin`) is confirmed with crew scheduling. A margin
    // reaching before the earliest representable date holds as well.
    let margin_holds = match policy
        .license_safety_margin()
        .and_then(|margin| expiry.checked_sub_signed(margin))
    {
        Some(safety_margin) => expiry > safety_margin,
        None => true,
    };

    expiry > now && margin_holds
}

pub(crate) fn check_trainings(
    trainings: &BTreeMap<String, TrainingRecord>,
    now: DateTime<Utc>,
) -> bool {
    if trainings.is_empty() {
        return false;
    }

    trainings
        .values()
        .filter_map(|training| training.expiry)
        .all(|expiry| expiry > now)
}

pub(crate) fn check_experience(
    last_flight_date: Option<DateTime<Utc>>,
    hours_last_90_days: f64,
    now: DateTime<Utc>,
    policy: &EligibilityPolicy,
) -> bool {
    let Some(last_flight) = last_flight_date else {
        return false;
    };

    // A window reaching before the earliest representable date covers
    // every flight.
    let recent_flight = match policy
        .recent_flight_window()
        .and_then(|window| now.checked_sub_signed(window))
    {
        Some(window_start) => last_flight > window_start,
        None => true,
    };
    let sufficient_hours = hours_last_90_days >= policy.minimum_recent_hours;

    recent_flight && sufficient_hours
}

pub(crate) fn check_documentation(documents: Option<&CrewDocuments>, now: DateTime<Utc>) -> bool {
    match documents {
        Some(documents) => documents.present_expiries().all(|expiry| expiry > now),
        None => false,
    }
}
