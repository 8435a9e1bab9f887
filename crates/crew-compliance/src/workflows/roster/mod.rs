//! Batch eligibility screening for roster exports.

mod parser;

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

use crate::workflows::crew::{build_report, ComplianceReport, EligibilityEvaluator, Verdict};

#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read roster export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Verdict and audit report for one roster row.
#[derive(Debug, Clone, Serialize)]
pub struct ScreenedCrew {
    pub crew_id: String,
    pub name: String,
    pub verdict: Verdict,
    pub report: ComplianceReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterScreening {
    pub evaluated_at: DateTime<Utc>,
    pub entries: Vec<ScreenedCrew>,
    pub approved: usize,
    pub rejected: usize,
}

impl RosterScreening {
    pub fn rejected_entries(&self) -> impl Iterator<Item = &ScreenedCrew> {
        self.entries.iter().filter(|entry| !entry.verdict.approved)
    }
}

pub struct RosterImporter<'a> {
    evaluator: &'a EligibilityEvaluator,
}

impl<'a> RosterImporter<'a> {
    pub fn new(evaluator: &'a EligibilityEvaluator) -> Self {
        Self { evaluator }
    }

    pub fn screen_path<P: AsRef<Path>>(
        &self,
        path: P,
        now: DateTime<Utc>,
    ) -> Result<RosterScreening, RosterImportError> {
        let file = File::open(path)?;
        self.screen_reader(file, now)
    }

    pub fn screen_reader<R: Read>(
        &self,
        reader: R,
        now: DateTime<Utc>,
    ) -> Result<RosterScreening, RosterImportError> {
        let rows = parser::parse_rows(reader)?;

        let entries: Vec<ScreenedCrew> = rows
            .into_iter()
            .map(|row| {
                let record = row.form.into_record();
                let verdict = self.evaluator.evaluate(&record, now);
                let report = build_report(&verdict, now);
                ScreenedCrew {
                    crew_id: row.crew_id,
                    name: row.name,
                    verdict,
                    report,
                }
            })
            .collect();

        let approved = entries.iter().filter(|entry| entry.verdict.approved).count();
        let rejected = entries.len() - approved;
        info!(approved, rejected, "roster screening complete");

        Ok(RosterScreening {
            evaluated_at: now,
            entries,
            approved,
            rejected,
        })
    }
}
