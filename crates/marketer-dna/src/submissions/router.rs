use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::SubmissionRequest;
use super::repository::{RepositoryError, SubmissionRepository};
use super::salary::SalaryError;
use super::service::{DiagnosisService, DiagnosisServiceError, SalaryCompareRequest};
use crate::diagnosis::Answer;

/// Body for endpoints that only need the answer sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswersPayload {
    pub answers: Vec<Answer>,
}

/// Router exposing diagnosis, submission, statistics, salary and share endpoints.
pub fn diagnosis_router<R>(service: Arc<DiagnosisService<R>>) -> Router
where
    R: SubmissionRepository + 'static,
{
    Router::new()
        .route("/api/v1/diagnosis", post(analyze_handler::<R>))
        .route("/api/v1/results", post(submit_handler::<R>))
        .route("/api/v1/statistics", get(statistics_handler::<R>))
        .route("/api/v1/salary/compare", post(salary_handler::<R>))
        .route("/api/v1/share", post(encode_share_handler::<R>))
        .route("/api/v1/share/:code", get(resolve_share_handler::<R>))
        .with_state(service)
}

pub(crate) async fn analyze_handler<R>(
    State(service): State<Arc<DiagnosisService<R>>>,
    axum::Json(payload): axum::Json<AnswersPayload>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    match service.analyze(&payload.answers) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<DiagnosisService<R>>>,
    axum::Json(request): axum::Json<SubmissionRequest>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    match service.submit(request) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn statistics_handler<R>(
    State(service): State<Arc<DiagnosisService<R>>>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    match service.statistics() {
        Ok(snapshot) => (StatusCode::OK, axum::Json(snapshot)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn salary_handler<R>(
    State(service): State<Arc<DiagnosisService<R>>>,
    axum::Json(request): axum::Json<SalaryCompareRequest>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    match service.compare_salary(request) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn encode_share_handler<R>(
    State(service): State<Arc<DiagnosisService<R>>>,
    axum::Json(payload): axum::Json<AnswersPayload>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    match service.encode_share(&payload.answers) {
        Ok(code) => {
            let payload = json!({
                "shareCode": code.encode(),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn resolve_share_handler<R>(
    State(service): State<Arc<DiagnosisService<R>>>,
    Path(code): Path<String>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    match service.resolve_share_code(&code) {
        Ok(shared) => (StatusCode::OK, axum::Json(shared)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: DiagnosisServiceError) -> Response {
    let status = match &error {
        DiagnosisServiceError::Scoring(_)
        | DiagnosisServiceError::Share(_)
        | DiagnosisServiceError::Quiz(_)
        | DiagnosisServiceError::Import(_)
        | DiagnosisServiceError::Salary(SalaryError::InvalidTrimRatio(_)) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        DiagnosisServiceError::Salary(SalaryError::InsufficientData { .. }) => {
            StatusCode::NOT_FOUND
        }
        DiagnosisServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        DiagnosisServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
