use std::io::Read;
use std::sync::Arc;

use chrono::Utc;
use rand::distr::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::domain::{ClientId, SalaryInfo, SubmissionId, SubmissionRecord, SubmissionRequest};
use super::import::{SubmissionImportError, SubmissionImporter};
use super::repository::{RepositoryError, SubmissionRepository};
use super::salary::{
    per_question_salaries, validate_trim_ratio, SalaryComparison, SalaryError, SalaryReport,
    DEFAULT_TRIM_RATIO,
};
use super::statistics::StatisticsSnapshot;
use crate::diagnosis::{
    Answer, DiagnosisEngine, PersonalizedResult, ScoringError, ShareCode, ShareCodeError,
};
use crate::quiz::{QuestionBank, QuizError};

const ID_PREFIX: &str = "res-";
const ID_LENGTH: usize = 8;

pub(crate) fn next_submission_id() -> SubmissionId {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LENGTH)
        .map(char::from)
        .collect();
    SubmissionId(format!("{ID_PREFIX}{suffix}"))
}

/// Salary comparison input. `answers` enables the per-question breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryCompareRequest {
    pub salary_info: SalaryInfo,
    #[serde(default)]
    pub answers: Vec<Answer>,
}

/// Result recovered from a share code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedResult {
    pub share_code: String,
    pub answers: Vec<Answer>,
    pub result: PersonalizedResult,
}

/// Service composing the diagnosis engine, question bank and submission store.
pub struct DiagnosisService<R> {
    repository: Arc<R>,
    engine: Arc<DiagnosisEngine>,
    bank: Arc<QuestionBank>,
    trim_ratio: f64,
}

impl<R> DiagnosisService<R>
where
    R: SubmissionRepository + 'static,
{
    pub fn new(repository: Arc<R>, bank: Arc<QuestionBank>) -> Self {
        Self {
            repository,
            engine: Arc::new(DiagnosisEngine::default()),
            bank,
            trim_ratio: DEFAULT_TRIM_RATIO,
        }
    }

    pub fn with_engine(mut self, engine: DiagnosisEngine) -> Self {
        self.engine = Arc::new(engine);
        self
    }

    pub fn with_trim_ratio(mut self, trim_ratio: f64) -> Result<Self, SalaryError> {
        validate_trim_ratio(trim_ratio)?;
        self.trim_ratio = trim_ratio;
        Ok(self)
    }

    pub fn engine(&self) -> &DiagnosisEngine {
        &self.engine
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn analyze(&self, answers: &[Answer]) -> Result<PersonalizedResult, DiagnosisServiceError> {
        Ok(self.engine.analyze(answers)?)
    }

    /// Recompute the result server-side and store the submission.
    pub fn submit(
        &self,
        request: SubmissionRequest,
    ) -> Result<SubmissionRecord, DiagnosisServiceError> {
        let result = self.engine.analyze(&request.answers)?;

        let record = SubmissionRecord {
            id: next_submission_id(),
            client_id: ClientId::or_anonymous(request.client_id),
            marketer_type: request.marketer_type,
            answers: request.answers,
            result,
            salary_info: request.salary_info,
            created_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        info!(
            submission_id = %stored.id,
            persona = %stored.result.marketing_dna,
            has_salary = stored.has_salary(),
            "stored diagnosis submission"
        );
        Ok(stored)
    }

    pub fn statistics(&self) -> Result<StatisticsSnapshot, DiagnosisServiceError> {
        let records = self.repository.all()?;
        Ok(StatisticsSnapshot::from_records(&records))
    }

    pub fn compare_salary(
        &self,
        request: SalaryCompareRequest,
    ) -> Result<SalaryReport, DiagnosisServiceError> {
        let records = self.repository.with_salary()?;
        let peers: Vec<SalaryInfo> = records
            .iter()
            .filter_map(|record| record.salary_info)
            .collect();

        let comparison = SalaryComparison::compute(request.salary_info, &peers, self.trim_ratio)?;
        let per_question = per_question_salaries(
            request.salary_info,
            &request.answers,
            &records,
            self.trim_ratio,
        );
        debug!(
            peers = comparison.total_count,
            rank = comparison.my_rank,
            "computed salary comparison"
        );

        Ok(SalaryReport {
            comparison,
            per_question,
        })
    }

    pub fn encode_share(&self, answers: &[Answer]) -> Result<ShareCode, DiagnosisServiceError> {
        Ok(self.bank.share_code_for(answers)?)
    }

    pub fn resolve_share_code(&self, raw: &str) -> Result<SharedResult, DiagnosisServiceError> {
        let code = ShareCode::decode(raw)?;
        let answers = code.answers(&self.bank)?;
        let result = self.engine.analyze(&answers)?;

        Ok(SharedResult {
            share_code: code.encode(),
            answers,
            result,
        })
    }

    /// Import historical submissions from CSV, returning how many were stored.
    pub fn import_csv<Rd: Read>(&self, reader: Rd) -> Result<usize, DiagnosisServiceError> {
        let records = SubmissionImporter::from_reader(reader, &self.bank, &self.engine)?;
        let count = records.len();
        for record in records {
            self.repository.insert(record)?;
        }
        info!(count, "imported historical submissions");
        Ok(count)
    }
}

/// Error raised by the diagnosis service.
#[derive(Debug, thiserror::Error)]
pub enum DiagnosisServiceError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Share(#[from] ShareCodeError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Salary(#[from] SalaryError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Import(#[from] SubmissionImportError),
}
