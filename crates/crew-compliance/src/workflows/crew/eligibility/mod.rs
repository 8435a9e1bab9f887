mod config;
mod rules;
mod verdict;

pub use config::EligibilityPolicy;
pub use verdict::{CheckResults, Verdict};

use chrono::{DateTime, Utc};
use tracing::debug;

use super::domain::CrewRecord;

/// Stateless evaluator that applies the eligibility policy to a crew record.
#[derive(Debug, Clone, Default)]
pub struct EligibilityEvaluator {
    policy: EligibilityPolicy,
}

impl EligibilityEvaluator {
    pub fn new(policy: EligibilityPolicy) -> Self {
        Self {
            policy: policy.sanitized(),
        }
    }

    pub fn policy(&self) -> &EligibilityPolicy {
        &self.policy
    }

    /// Run every check against `record` as of `now`. No check short-circuits
    /// another, so `details` is always fully populated.
    pub fn evaluate(&self, record: &CrewRecord, now: DateTime<Utc>) -> Verdict {
        let details = CheckResults {
            duty: rules::check_duty(record.duty_status),
            license: rules::check_license(record.license_expiry, now, &self.policy),
            training: rules::check_trainings(&record.trainings, now),
            experience: rules::check_experience(
                record.last_flight_date,
                record.flight_hours_last_90_days,
                now,
                &self.policy,
            ),
            documentation: rules::check_documentation(record.documents.as_ref(), now),
        };

        let verdict = Verdict::from_checks(details);
        for check in details.failed() {
            debug!(check = check.label(), "eligibility check failed");
        }
        debug!(
            passed = verdict.passed_count,
            total = verdict.total_count,
            approved = verdict.approved,
            "crew eligibility evaluated"
        );

        verdict
    }
}

/// Evaluate `record` with the default policy.
pub fn evaluate(record: &CrewRecord, now: DateTime<Utc>) -> Verdict {
    EligibilityEvaluator::default().evaluate(record, now)
}
