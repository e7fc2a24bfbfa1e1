use crate::infra::AppState;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use marketer_dna::quiz::{MarketerType, Question};
use marketer_dna::submissions::{diagnosis_router, DiagnosisService, SubmissionRepository};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_diagnosis_routes<R>(service: Arc<DiagnosisService<R>>) -> axum::Router
where
    R: SubmissionRepository + 'static,
{
    diagnosis_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/questions/:marketer_type",
            axum::routing::get(questions_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Questions aimed at one marketer type, in bank order.
pub(crate) async fn questions_endpoint(
    Extension(state): Extension<AppState>,
    Path(marketer_type): Path<String>,
) -> Response {
    let kind = match marketer_type.parse::<MarketerType>() {
        Ok(kind) => kind,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::NOT_FOUND, Json(payload)).into_response();
        }
    };

    let questions: Vec<&Question> = state.bank.for_type(kind).collect();
    let payload = json!({
        "marketerType": kind,
        "title": kind.display_name(),
        "questions": questions,
    });
    (StatusCode::OK, Json(payload)).into_response()
}
