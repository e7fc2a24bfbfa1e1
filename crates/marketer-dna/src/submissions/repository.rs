use super::domain::SubmissionRecord;

/// Storage abstraction so the service can be exercised without a document store.
pub trait SubmissionRepository: Send + Sync {
    fn insert(&self, record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError>;
    fn all(&self) -> Result<Vec<SubmissionRecord>, RepositoryError>;

    fn with_salary(&self) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        Ok(self
            .all()?
            .into_iter()
            .filter(SubmissionRecord::has_salary)
            .collect())
    }
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
