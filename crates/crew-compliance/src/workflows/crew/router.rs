use std::io::Cursor;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::clearance::validate_for_roster;
use super::domain::CrewRecord;
use super::eligibility::{EligibilityEvaluator, Verdict};
use super::form::CrewForm;
use super::report::{build_report, ComplianceReport};
use super::views::ComplianceView;
use crate::error::AppError;
use crate::workflows::roster::{RosterImporter, RosterScreening};

/// Either a structured record or the raw form fields it is transcribed from.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EligibilityRequest {
    #[serde(default)]
    pub record: Option<CrewRecord>,
    #[serde(default)]
    pub form: Option<CrewForm>,
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

impl EligibilityRequest {
    fn into_parts(self) -> Option<(CrewRecord, DateTime<Utc>)> {
        let now = self.now.unwrap_or_else(Utc::now);
        let record = match (self.record, self.form) {
            (Some(record), _) => record,
            (None, Some(form)) => form.into_record(),
            (None, None) => return None,
        };
        Some((record, now))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EligibilityResponse {
    pub verdict: Verdict,
    pub report: ComplianceReport,
    pub view: ComplianceView,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterScreeningRequest {
    pub csv: String,
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

/// Router builder exposing the eligibility, clearance, and roster endpoints.
pub fn crew_router(evaluator: Arc<EligibilityEvaluator>) -> Router {
    Router::new()
        .route("/api/v1/crew/eligibility", post(eligibility_handler))
        .route("/api/v1/crew/clearance", post(clearance_handler))
        .route("/api/v1/crew/roster", post(roster_handler))
        .with_state(evaluator)
}

fn missing_record_response() -> Response {
    let payload = json!({
        "error": "request must include either `record` or `form`",
    });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}

pub(crate) async fn eligibility_handler(
    State(evaluator): State<Arc<EligibilityEvaluator>>,
    Json(request): Json<EligibilityRequest>,
) -> Response {
    let Some((record, now)) = request.into_parts() else {
        return missing_record_response();
    };

    let verdict = evaluator.evaluate(&record, now);
    let report = build_report(&verdict, now);
    let view = verdict.view();

    (
        StatusCode::OK,
        Json(EligibilityResponse {
            verdict,
            report,
            view,
        }),
    )
        .into_response()
}

pub(crate) async fn clearance_handler(
    State(evaluator): State<Arc<EligibilityEvaluator>>,
    Json(request): Json<EligibilityRequest>,
) -> Response {
    let Some((record, now)) = request.into_parts() else {
        return missing_record_response();
    };

    let clearance = validate_for_roster(&evaluator, &record, now);
    let status = if clearance.is_approved() {
        StatusCode::OK
    } else {
        StatusCode::CONFLICT
    };

    (status, Json(clearance)).into_response()
}

pub(crate) async fn roster_handler(
    State(evaluator): State<Arc<EligibilityEvaluator>>,
    Json(request): Json<RosterScreeningRequest>,
) -> Result<Json<RosterScreening>, AppError> {
    let now = request.now.unwrap_or_else(Utc::now);
    let reader = Cursor::new(request.csv.into_bytes());
    let screening = RosterImporter::new(&evaluator).screen_reader(reader, now)?;
    Ok(Json(screening))
}
