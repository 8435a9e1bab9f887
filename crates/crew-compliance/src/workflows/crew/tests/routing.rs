use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::workflows::crew::router::{clearance_handler, eligibility_handler};
use crate::workflows::crew::{crew_router, EligibilityEvaluator, EligibilityRequest};

fn evaluator() -> Arc<EligibilityEvaluator> {
    Arc::new(EligibilityEvaluator::default())
}

#[tokio::test]
async fn eligibility_handler_returns_verdict_report_and_view() {
    let request = EligibilityRequest {
        record: Some(lapsed_record()),
        form: None,
        now: Some(now()),
    };

    let response = eligibility_handler(State(evaluator()), axum::Json(request)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["verdict"]["approved"], json!(false));
    assert_eq!(body["verdict"]["percent"], json!(0));
    assert_eq!(
        body["report"]["recommendations"]
            .as_array()
            .expect("recommendations array")
            .len(),
        5
    );
    assert_eq!(body["view"]["alert_level"], json!("danger"));
}

#[tokio::test]
async fn eligibility_handler_requires_record_or_form() {
    let response =
        eligibility_handler(State(evaluator()), axum::Json(EligibilityRequest::default())).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn clearance_handler_signals_conflict_on_rejection() {
    let request = EligibilityRequest {
        record: Some(lapsed_record()),
        form: None,
        now: Some(now()),
    };

    let response = clearance_handler(State(evaluator()), axum::Json(request)).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = read_json_body(response).await;
    assert_eq!(body["outcome"], json!("rejected"));
    assert_eq!(body["reason"], json!("REJECTED - 5 item(s) pending"));
}

#[tokio::test]
async fn eligibility_route_accepts_form_payloads() {
    let router = crew_router(evaluator());
    let payload = json!({
        "form": compliant_form(),
        "now": now(),
    });

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/crew/eligibility")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&payload).expect("serialize payload"),
                ))
                .expect("build request"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["verdict"]["approved"], json!(true));
    assert_eq!(body["verdict"]["message"], json!("APPROVED for scheduling"));
    assert_eq!(body["view"]["checks"][0]["status_label"], json!("Approved"));
}

#[tokio::test]
async fn roster_route_rejects_malformed_csv() {
    let router = crew_router(evaluator());
    let payload = json!({
        "csv": "Name,Duty Status\nRita Alves,available\n",
        "now": now(),
    });

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/crew/roster")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&payload).expect("serialize payload"),
                ))
                .expect("build request"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
