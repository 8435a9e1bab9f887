use crate::infra::parse_instant;
use chrono::{DateTime, Duration, Utc};
use clap::Args;
use crew_compliance::config::AppConfig;
use crew_compliance::error::AppError;
use crew_compliance::workflows::crew::{
    build_report, ComplianceReport, CrewForm, EligibilityEvaluator, Verdict,
};
use crew_compliance::workflows::roster::{RosterImporter, RosterScreening};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct CrewCheckArgs {
    /// Duty status (available | unavailable)
    #[arg(long)]
    pub(crate) duty_status: Option<String>,
    /// License expiry (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub(crate) license_expiry: Option<String>,
    /// Date of the most recent flight
    #[arg(long)]
    pub(crate) last_flight: Option<String>,
    /// Flight hours logged in the last 90 days
    #[arg(long)]
    pub(crate) hours_90_days: Option<String>,
    /// Flight hours logged in the last 12 months
    #[arg(long)]
    pub(crate) hours_12_months: Option<String>,
    /// Simulator training expiry
    #[arg(long)]
    pub(crate) simulator_expiry: Option<String>,
    /// CRM training expiry
    #[arg(long)]
    pub(crate) crm_expiry: Option<String>,
    /// Emergency procedures training expiry
    #[arg(long)]
    pub(crate) emergency_expiry: Option<String>,
    /// ICAO proficiency expiry
    #[arg(long)]
    pub(crate) icao_expiry: Option<String>,
    /// Medical certificate expiry
    #[arg(long)]
    pub(crate) medical_expiry: Option<String>,
    /// Passport expiry (international legs only)
    #[arg(long)]
    pub(crate) passport_expiry: Option<String>,
    /// Evaluation instant (defaults to now)
    #[arg(long, value_parser = parse_instant)]
    pub(crate) now: Option<DateTime<Utc>>,
    /// Print the verdict and report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl CrewCheckArgs {
    fn form(&self) -> CrewForm {
        CrewForm {
            duty_status: self.duty_status.clone(),
            license_expiry: self.license_expiry.clone(),
            last_flight: self.last_flight.clone(),
            hours_90_days: self.hours_90_days.clone(),
            hours_12_months: self.hours_12_months.clone(),
            simulator_training_expiry: self.simulator_expiry.clone(),
            crm_training_expiry: self.crm_expiry.clone(),
            emergency_training_expiry: self.emergency_expiry.clone(),
            icao_expiry: self.icao_expiry.clone(),
            medical_cert_expiry: self.medical_expiry.clone(),
            passport_expiry: self.passport_expiry.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct RosterArgs {
    /// Roster CSV export to screen
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Evaluation instant (defaults to now)
    #[arg(long, value_parser = parse_instant)]
    pub(crate) now: Option<DateTime<Utc>>,
    /// Print the full screening as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation instant (defaults to now)
    #[arg(long, value_parser = parse_instant)]
    pub(crate) now: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
struct CrewCheckOutput<'a> {
    verdict: &'a Verdict,
    report: &'a ComplianceReport,
}

fn configured_evaluator() -> Result<EligibilityEvaluator, AppError> {
    let config = AppConfig::load()?;
    Ok(EligibilityEvaluator::new(config.eligibility))
}

pub(crate) fn run_crew_check(args: CrewCheckArgs) -> Result<(), AppError> {
    let evaluator = configured_evaluator()?;
    let now = args.now.unwrap_or_else(Utc::now);
    let record = args.form().into_record();

    let verdict = evaluator.evaluate(&record, now);
    let report = build_report(&verdict, now);

    if args.json {
        print_json(&CrewCheckOutput {
            verdict: &verdict,
            report: &report,
        });
    } else {
        render_report(&report);
    }

    Ok(())
}

pub(crate) fn run_roster_screening(args: RosterArgs) -> Result<(), AppError> {
    let evaluator = configured_evaluator()?;
    let now = args.now.unwrap_or_else(Utc::now);

    let screening = RosterImporter::new(&evaluator).screen_path(&args.csv, now)?;

    if args.json {
        print_json(&screening);
    } else {
        render_roster(&screening);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let evaluator = configured_evaluator()?;
    let now = args.now.unwrap_or_else(Utc::now);

    println!("Crew compliance demo (evaluated {})", now.format("%Y-%m-%d %H:%M UTC"));

    for (title, verdict) in sample_verdicts(&evaluator, now) {
        println!("\n== {title}");
        match verdict {
            Some(verdict) => render_report(&build_report(&verdict, now)),
            None => println!("Skipped: sample dates fall outside the supported range"),
        }
    }

    Ok(())
}

fn sample_verdicts(
    evaluator: &EligibilityEvaluator,
    now: DateTime<Utc>,
) -> Vec<(&'static str, Option<Verdict>)> {
    [
        ("Current first officer", current_crew_form(now)),
        ("Lapsed captain", lapsed_crew_form(now)),
    ]
    .into_iter()
    .map(|(title, form)| {
        let verdict = form.map(|form| evaluator.evaluate(&form.into_record(), now));
        (title, verdict)
    })
    .collect()
}

/// `now` shifted by `days`, as a form date. `None` when it leaves chrono's range.
fn offset_date(now: DateTime<Utc>, days: i64) -> Option<String> {
    let instant = now.checked_add_signed(Duration::try_days(days)?)?;
    Some(instant.format("%Y-%m-%d").to_string())
}

fn current_crew_form(now: DateTime<Utc>) -> Option<CrewForm> {
    Some(CrewForm {
        duty_status: Some("available".to_string()),
        license_expiry: Some(offset_date(now, 240)?),
        last_flight: Some(offset_date(now, -6)?),
        hours_90_days: Some("38.5".to_string()),
        hours_12_months: Some("512".to_string()),
        simulator_training_expiry: Some(offset_date(now, 95)?),
        crm_training_expiry: Some(offset_date(now, 180)?),
        emergency_training_expiry: None,
        icao_expiry: Some(offset_date(now, 700)?),
        medical_cert_expiry: Some(offset_date(now, 120)?),
        passport_expiry: Some(offset_date(now, 1800)?),
    })
}

fn lapsed_crew_form(now: DateTime<Utc>) -> Option<CrewForm> {
    Some(CrewForm {
        duty_status: Some("available".to_string()),
        license_expiry: Some(offset_date(now, 12)?),
        last_flight: Some(offset_date(now, -140)?),
        hours_90_days: Some("1.5".to_string()),
        hours_12_months: Some("96".to_string()),
        simulator_training_expiry: Some(offset_date(now, -4)?),
        crm_training_expiry: Some(offset_date(now, 30)?),
        emergency_training_expiry: None,
        icao_expiry: Some(offset_date(now, 300)?),
        medical_cert_expiry: Some(offset_date(now, -1)?),
        passport_expiry: None,
    })
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to encode output: {err}"),
    }
}

fn render_report(report: &ComplianceReport) {
    let verdict = &report.verdict;
    let view = verdict.view();

    println!(
        "Status: {} ({}/{} checks, {}%)",
        view.status_message, verdict.passed_count, verdict.total_count, view.percent
    );
    for check in &view.checks {
        let mark = if check.passed { "+" } else { "x" };
        println!("  [{mark}] {}: {}", check.label, check.status_label);
    }

    if report.recommendations.is_empty() {
        println!("Recommendations: none");
    } else {
        println!("Recommendations");
        for recommendation in &report.recommendations {
            println!("- {recommendation}");
        }
    }
}

fn render_roster(screening: &RosterScreening) {
    println!(
        "Roster screening ({} crew, {} approved, {} rejected)",
        screening.entries.len(),
        screening.approved,
        screening.rejected
    );

    for entry in &screening.entries {
        println!(
            "- {} {} | {} | {}%",
            entry.crew_id, entry.name, entry.verdict.message, entry.verdict.percent
        );
        for recommendation in &entry.report.recommendations {
            println!("    * {recommendation}");
        }
    }
}
