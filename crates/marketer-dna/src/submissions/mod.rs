//! Stored quiz submissions and the aggregates computed over them.

pub mod domain;
pub mod import;
pub mod repository;
pub mod router;
pub mod salary;
pub mod service;
pub mod statistics;

#[cfg(test)]
mod tests;

pub use domain::{
    ClientId, ExperienceGroup, SalaryInfo, SubmissionId, SubmissionRecord, SubmissionRequest,
};
pub use import::{SubmissionImportError, SubmissionImporter};
pub use repository::{RepositoryError, SubmissionRepository};
pub use router::{diagnosis_router, AnswersPayload};
pub use salary::{
    percentile, percentile_band, trimmed_average, QuestionSalary, SalaryComparison, SalaryError,
    SalaryReport, DEFAULT_TRIM_RATIO,
};
pub use service::{DiagnosisService, DiagnosisServiceError, SalaryCompareRequest, SharedResult};
pub use statistics::{calculate_percentage, ChoiceComparison, PersonaRank, StatisticsSnapshot};
