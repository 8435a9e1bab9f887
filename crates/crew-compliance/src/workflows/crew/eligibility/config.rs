use chrono::Duration;
use serde::{Deserialize, Serialize};

const DEFAULT_LICENSE_SAFETY_MARGIN_DAYS: i64 = 30;
const DEFAULT_RECENT_FLIGHT_WINDOW_DAYS: i64 = 90;
const DEFAULT_MINIMUM_RECENT_HOURS: f64 = 3.0;

/// Thresholds consulted by the license and experience rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EligibilityPolicy {
    pub license_safety_margin_days: i64,
    pub recent_flight_window_days: i64,
    pub minimum_recent_hours: f64,
}

impl EligibilityPolicy {
    /// Longest margin or window accepted, in days.
    pub const MAX_DAYS: i64 = 36_500;

    pub fn new(
        license_safety_margin_days: i64,
        recent_flight_window_days: i64,
        minimum_recent_hours: f64,
    ) -> Self {
        Self {
            license_safety_margin_days,
            recent_flight_window_days,
            minimum_recent_hours,
        }
        .sanitized()
    }

    /// Replace out-of-range or non-finite thresholds with the regulatory
    /// defaults. Day counts must fall in `1..=MAX_DAYS`.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();

        Self {
            license_safety_margin_days: if Self::days_in_range(self.license_safety_margin_days) {
                self.license_safety_margin_days
            } else {
                defaults.license_safety_margin_days
            },
            recent_flight_window_days: if Self::days_in_range(self.recent_flight_window_days) {
                self.recent_flight_window_days
            } else {
                defaults.recent_flight_window_days
            },
            minimum_recent_hours: if self.minimum_recent_hours.is_finite()
                && self.minimum_recent_hours >= 0.0
            {
                self.minimum_recent_hours
            } else {
                defaults.minimum_recent_hours
            },
        }
    }

    pub fn days_in_range(days: i64) -> bool {
        (1..=Self::MAX_DAYS).contains(&days)
    }

    /// `None` when the day count does not fit in a `Duration`.
    pub fn license_safety_margin(&self) -> Option<Duration> {
        Duration::try_days(self.license_safety_margin_days)
    }

    pub fn recent_flight_window(&self) -> Option<Duration> {
        Duration::try_days(self.recent_flight_window_days)
    }
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self {
            license_safety_margin_days: DEFAULT_LICENSE_SAFETY_MARGIN_DAYS,
            recent_flight_window_days: DEFAULT_RECENT_FLIGHT_WINDOW_DAYS,
            minimum_recent_hours: DEFAULT_MINIMUM_RECENT_HOURS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizing_restores_defaults_for_out_of_range_values() {
        let policy = EligibilityPolicy::new(0, 10_000_000_000, f64::NAN);

        assert_eq!(policy, EligibilityPolicy::default());
    }

    #[test]
    fn sanitizing_keeps_values_within_bounds() {
        let policy = EligibilityPolicy::new(EligibilityPolicy::MAX_DAYS, 1, 0.0);

        assert_eq!(policy.license_safety_margin_days, EligibilityPolicy::MAX_DAYS);
        assert_eq!(policy.recent_flight_window_days, 1);
        assert_eq!(policy.minimum_recent_hours, 0.0);
    }

    #[test]
    fn oversized_day_counts_have_no_duration() {
        let policy = EligibilityPolicy {
            license_safety_margin_days: i64::MAX,
            recent_flight_window_days: i64::MIN,
            minimum_recent_hours: 3.0,
        };

        assert!(policy.license_safety_margin().is_none());
        assert!(policy.recent_flight_window().is_none());
    }
}
