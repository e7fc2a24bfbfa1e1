use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::submissions::router::{submit_handler, AnswersPayload};
use crate::submissions::DiagnosisService;

fn json_request(uri: &str, payload: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).expect("serialize")))
        .expect("request")
}

#[tokio::test]
async fn submit_handler_returns_conflict_on_duplicate() {
    let service = Arc::new(DiagnosisService::new(Arc::new(ConflictRepository), bank()));

    let response = submit_handler::<ConflictRepository>(
        State(service),
        axum::Json(request("client_1", data_answers())),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn submit_handler_returns_internal_error_on_repository_failure() {
    let service = Arc::new(DiagnosisService::new(
        Arc::new(UnavailableRepository),
        bank(),
    ));

    let response = submit_handler::<UnavailableRepository>(
        State(service),
        axum::Json(request("client_1", data_answers())),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .contains("database offline"));
}

#[tokio::test]
async fn submit_route_creates_records() {
    let (service, repository) = build_service();
    let router = router_with_service(service);

    let payload = json!({
        "clientId": "client_1",
        "marketerType": "b2b",
        "answers": data_answers(),
        "salaryInfo": { "yearsOfExperience": 4, "salary": 4200 },
    });
    let response = router
        .oneshot(json_request("/api/v1/results", &payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert!(body
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .starts_with("res-"));
    assert_eq!(body["marketerType"], json!("b2b"));
    assert!(body["result"]["marketingDna"].is_string());
    assert_eq!(repository.len(), 1);
}

#[tokio::test]
async fn diagnosis_route_rejects_empty_answers() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request("/api/v1/diagnosis", &json!({ "answers": [] })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn diagnosis_route_returns_personalized_result() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let payload = serde_json::to_value(AnswersPayload {
        answers: data_answers(),
    })
    .expect("payload");
    let response = router
        .oneshot(json_request("/api/v1/diagnosis", &payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["pattern"], json!("single_dominant"));
    assert_eq!(body["personalColors"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["tagScores"].as_object().map(|scores| scores.len()), Some(11));
}

#[tokio::test]
async fn salary_route_returns_not_found_without_peers() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let payload = json!({
        "salaryInfo": { "yearsOfExperience": 2, "salary": 3000 },
    });
    let response = router
        .oneshot(json_request("/api/v1/salary/compare", &payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn share_routes_encode_and_resolve() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .clone()
        .oneshot(json_request(
            "/api/v1/share",
            &json!({ "answers": brand_answers() }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["shareCode"], json!("NyA:Q2,Q3,Q5"));

    let response = router
        .oneshot(
            Request::get("/api/v1/share/NyA:Q2,Q3,Q5")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["shareCode"], json!("NyA:Q2,Q3,Q5"));
    assert_eq!(body["answers"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn share_route_rejects_malformed_codes() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/share/Zz:Q1,Q2")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn statistics_route_reports_totals() {
    let (service, _) = build_service();
    service
        .submit(request("client_1", data_answers()))
        .expect("submission");
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/statistics")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["total"], json!(1));
    assert!(body["questionChoiceStats"]["Q1"].is_object());
}
