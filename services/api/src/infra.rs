use marketer_dna::quiz::QuestionBank;
use marketer_dna::submissions::{RepositoryError, SubmissionRecord, SubmissionRepository};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) bank: Arc<QuestionBank>,
}

/// Process-local submission store. Records are append-only.
#[derive(Default, Clone)]
pub(crate) struct InMemorySubmissionRepository {
    records: Arc<Mutex<Vec<SubmissionRecord>>>,
}

impl InMemorySubmissionRepository {
    fn lock(&self) -> Result<MutexGuard<'_, Vec<SubmissionRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
    }
}

impl SubmissionRepository for InMemorySubmissionRepository {
    fn insert(&self, record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError> {
        let mut guard = self.lock()?;
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn all(&self) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        Ok(self.lock()?.clone())
    }

    fn with_salary(&self) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        Ok(self
            .lock()?
            .iter()
            .filter(|record| record.has_salary())
            .cloned()
            .collect())
    }
}

/// Parses `1,3,2` style choice lists (1-based) into 0-based indices.
pub(crate) fn parse_choices(raw: &str) -> Result<Vec<u8>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part.parse::<u8>() {
            Ok(choice @ 1..=4) => Ok(choice - 1),
            _ => Err(format!("'{part}' is not a choice between 1 and 4")),
        })
        .collect()
}
