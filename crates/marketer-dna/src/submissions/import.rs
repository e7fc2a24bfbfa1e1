use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

use super::domain::{ClientId, SalaryInfo, SubmissionRecord};
use super::service::next_submission_id;
use crate::diagnosis::{DiagnosisEngine, ScoringError, ShareCode, ShareCodeError};
use crate::quiz::{MarketerType, QuestionBank, QuizError};

#[derive(Debug)]
pub enum SubmissionImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Share { line: u64, source: ShareCodeError },
    Quiz { line: u64, source: QuizError },
    Scoring { line: u64, source: ScoringError },
    InvalidRow { line: u64, reason: String },
}

impl std::fmt::Display for SubmissionImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionImportError::Io(err) => write!(f, "failed to read submission export: {}", err),
            SubmissionImportError::Csv(err) => write!(f, "invalid submission CSV data: {}", err),
            SubmissionImportError::Share { line, source } => {
                write!(f, "line {}: invalid share code: {}", line, source)
            }
            SubmissionImportError::Quiz { line, source } => {
                write!(f, "line {}: share code does not match the question bank: {}", line, source)
            }
            SubmissionImportError::Scoring { line, source } => {
                write!(f, "line {}: could not score answers: {}", line, source)
            }
            SubmissionImportError::InvalidRow { line, reason } => {
                write!(f, "line {}: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for SubmissionImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SubmissionImportError::Io(err) => Some(err),
            SubmissionImportError::Csv(err) => Some(err),
            SubmissionImportError::Share { source, .. } => Some(source),
            SubmissionImportError::Quiz { source, .. } => Some(source),
            SubmissionImportError::Scoring { source, .. } => Some(source),
            SubmissionImportError::InvalidRow { .. } => None,
        }
    }
}

impl From<std::io::Error> for SubmissionImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for SubmissionImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Hydrates historical submissions from a CSV export.
///
/// Each row carries a share code; answers are rebuilt against the question bank and the
/// result is recomputed so imported records match live submissions.
pub struct SubmissionImporter;

impl SubmissionImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        bank: &QuestionBank,
        engine: &DiagnosisEngine,
    ) -> Result<Vec<SubmissionRecord>, SubmissionImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, bank, engine)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        bank: &QuestionBank,
        engine: &DiagnosisEngine,
    ) -> Result<Vec<SubmissionRecord>, SubmissionImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for (index, row) in csv_reader.deserialize::<SubmissionRow>().enumerate() {
            let row = row?;
            // header is line 1
            let line = index as u64 + 2;
            records.push(row.into_record(line, bank, engine)?);
        }

        Ok(records)
    }
}

#[derive(Debug, Deserialize)]
struct SubmissionRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    client_id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    marketer_type: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    years_of_experience: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    salary: Option<String>,
    share_code: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    created_at: Option<String>,
}

impl SubmissionRow {
    fn into_record(
        self,
        line: u64,
        bank: &QuestionBank,
        engine: &DiagnosisEngine,
    ) -> Result<SubmissionRecord, SubmissionImportError> {
        let invalid = |reason: String| SubmissionImportError::InvalidRow { line, reason };

        let code = ShareCode::decode(&self.share_code)
            .map_err(|source| SubmissionImportError::Share { line, source })?;
        let answers = code
            .answers(bank)
            .map_err(|source| SubmissionImportError::Quiz { line, source })?;
        let result = engine
            .analyze(&answers)
            .map_err(|source| SubmissionImportError::Scoring { line, source })?;

        let marketer_type = self
            .marketer_type
            .as_deref()
            .map(str::parse::<MarketerType>)
            .transpose()
            .map_err(|err| invalid(err.to_string()))?;

        let salary_info = match (self.years_of_experience, self.salary) {
            (Some(years), Some(salary)) => Some(SalaryInfo {
                years_of_experience: years
                    .parse()
                    .map_err(|_| invalid(format!("invalid years_of_experience '{years}'")))?,
                salary: salary
                    .parse()
                    .map_err(|_| invalid(format!("invalid salary '{salary}'")))?,
            }),
            (None, None) => None,
            _ => {
                return Err(invalid(
                    "years_of_experience and salary must be provided together".to_string(),
                ))
            }
        };

        let created_at = match self.created_at.as_deref() {
            Some(raw) => parse_timestamp(raw)
                .ok_or_else(|| invalid(format!("invalid created_at '{raw}'")))?,
            None => Utc::now(),
        };

        Ok(SubmissionRecord {
            id: next_submission_id(),
            client_id: ClientId::or_anonymous(self.client_id),
            marketer_type,
            answers,
            result,
            salary_info,
            created_at,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
