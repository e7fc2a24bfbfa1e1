use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{TimeZone, Utc};
use serde_json::Value;

use crate::diagnosis::{Answer, DiagnosisEngine, ShareCode};
use crate::quiz::QuestionBank;
use crate::submissions::domain::{
    ClientId, SalaryInfo, SubmissionId, SubmissionRecord, SubmissionRequest,
};
use crate::submissions::repository::{RepositoryError, SubmissionRepository};
use crate::submissions::{diagnosis_router, DiagnosisService};

pub(super) fn bank() -> Arc<QuestionBank> {
    Arc::new(QuestionBank::bundled().expect("bundled bank"))
}

pub(super) fn answers(code: &str) -> Vec<Answer> {
    ShareCode::decode(code)
        .expect("valid code")
        .answers(&bank())
        .expect("answers replay")
}

/// Data-heavy session: Q1 A, Q2 A, Q3 N, Q4 N.
pub(super) fn data_answers() -> Vec<Answer> {
    answers("AANN:Q1,Q2,Q3,Q4")
}

/// Brand-heavy session: Q2 N, Q3 y, Q5 A.
pub(super) fn brand_answers() -> Vec<Answer> {
    answers("NyA:Q2,Q3,Q5")
}

pub(super) fn salary(years_of_experience: u8, salary: u32) -> SalaryInfo {
    SalaryInfo {
        years_of_experience,
        salary,
    }
}

pub(super) fn request(client_id: &str, answers: Vec<Answer>) -> SubmissionRequest {
    SubmissionRequest {
        client_id: Some(client_id.to_string()),
        marketer_type: None,
        answers,
        salary_info: None,
    }
}

pub(super) fn record(
    id: &str,
    client_id: &str,
    answers: Vec<Answer>,
    salary_info: Option<SalaryInfo>,
) -> SubmissionRecord {
    let result = DiagnosisEngine::default()
        .analyze(&answers)
        .expect("non-empty answers");
    SubmissionRecord {
        id: SubmissionId(id.to_string()),
        client_id: ClientId(client_id.to_string()),
        marketer_type: None,
        answers,
        result,
        salary_info,
        created_at: Utc
            .with_ymd_and_hms(2025, 3, 1, 9, 0, 0)
            .single()
            .expect("valid timestamp"),
    }
}

pub(super) fn build_service() -> (DiagnosisService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = DiagnosisService::new(repository.clone(), bank());
    (service, repository)
}

pub(super) fn seeded_repository(records: Vec<SubmissionRecord>) -> Arc<MemoryRepository> {
    let repository = MemoryRepository::default();
    for record in records {
        repository.insert(record).expect("seed record");
    }
    Arc::new(repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<Vec<SubmissionRecord>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl SubmissionRepository for MemoryRepository {
    fn insert(&self, record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn all(&self) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        Ok(self.records.lock().expect("repository mutex poisoned").clone())
    }
}

pub(super) struct ConflictRepository;

impl SubmissionRepository for ConflictRepository {
    fn insert(&self, _record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn all(&self) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl SubmissionRepository for UnavailableRepository {
    fn insert(&self, _record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn all(&self) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn router_with_service(service: DiagnosisService<MemoryRepository>) -> axum::Router {
    diagnosis_router(Arc::new(service))
}
