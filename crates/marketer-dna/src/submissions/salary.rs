use serde::{Deserialize, Serialize};

use super::domain::{ExperienceGroup, SalaryInfo, SubmissionRecord};
use crate::diagnosis::{Answer, QuestionId};

pub const DEFAULT_TRIM_RATIO: f64 = 0.05;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SalaryError {
    #[error("no salary data for {years} years of experience")]
    InsufficientData { years: u8 },
    #[error("trim ratio {0} must be within [0, 0.5)")]
    InvalidTrimRatio(String),
}

/// Where a salary sits among peers with the same years of experience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryComparison {
    pub years_of_experience: u8,
    pub experience_group: ExperienceGroup,
    pub average_salary: u32,
    pub total_count: usize,
    pub my_rank: usize,
    pub percentile: f64,
    pub band: String,
}

impl SalaryComparison {
    /// Compares `mine` against every peer salary reported with identical years of experience.
    pub fn compute(
        mine: SalaryInfo,
        peers: &[SalaryInfo],
        trim_ratio: f64,
    ) -> Result<Self, SalaryError> {
        validate_trim_ratio(trim_ratio)?;

        let mut salaries: Vec<u32> = peers
            .iter()
            .filter(|peer| peer.years_of_experience == mine.years_of_experience)
            .map(|peer| peer.salary)
            .collect();
        if salaries.is_empty() {
            return Err(SalaryError::InsufficientData {
                years: mine.years_of_experience,
            });
        }
        salaries.sort_unstable();

        let total_count = salaries.len();
        let my_rank = salaries.iter().filter(|salary| **salary > mine.salary).count() + 1;
        let percentile = percentile(total_count, my_rank);

        Ok(Self {
            years_of_experience: mine.years_of_experience,
            experience_group: mine.experience_group(),
            average_salary: trimmed_average(&salaries, trim_ratio),
            total_count,
            my_rank,
            percentile,
            band: percentile_band(percentile).to_string(),
        })
    }
}

/// Average salary of same-group peers who picked the same option at the same position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSalary {
    pub question_id: QuestionId,
    pub tags: Vec<String>,
    pub average_salary: Option<u32>,
    pub count: usize,
}

/// Salary comparison plus the per-question breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryReport {
    pub comparison: SalaryComparison,
    pub per_question: Vec<QuestionSalary>,
}

pub fn per_question_salaries(
    mine: SalaryInfo,
    answers: &[Answer],
    records: &[SubmissionRecord],
    trim_ratio: f64,
) -> Vec<QuestionSalary> {
    let group = mine.experience_group();
    let peers: Vec<(&SalaryInfo, &[Answer])> = records
        .iter()
        .filter_map(|record| {
            record
                .salary_info
                .as_ref()
                .filter(|info| info.experience_group() == group)
                .map(|info| (info, record.answers.as_slice()))
        })
        .collect();

    answers
        .iter()
        .enumerate()
        .map(|(position, answer)| {
            let mut salaries: Vec<u32> = peers
                .iter()
                .filter(|(_, their_answers)| {
                    their_answers
                        .get(position)
                        .map(|theirs| theirs.tags == answer.tags)
                        .unwrap_or(false)
                })
                .map(|(info, _)| info.salary)
                .collect();
            salaries.sort_unstable();

            QuestionSalary {
                question_id: answer.question_id.clone(),
                tags: answer.tags.clone(),
                average_salary: (!salaries.is_empty())
                    .then(|| trimmed_average(&salaries, trim_ratio)),
                count: salaries.len(),
            }
        })
        .collect()
}

/// Rounded mean after dropping `ceil(n * ratio)` values from each end of sorted data.
///
/// Falls back to the untrimmed mean when trimming would leave nothing.
pub fn trimmed_average(sorted: &[u32], ratio: f64) -> u32 {
    if sorted.is_empty() {
        return 0;
    }

    let exclude = (sorted.len() as f64 * ratio).ceil() as usize;
    let kept = if exclude * 2 < sorted.len() {
        &sorted[exclude..sorted.len() - exclude]
    } else {
        sorted
    };

    let sum: u64 = kept.iter().map(|salary| u64::from(*salary)).sum();
    (sum as f64 / kept.len() as f64).round() as u32
}

/// `(n - rank + 1) / n * 100`, rounded to one decimal.
pub fn percentile(total: usize, rank: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = (total + 1).saturating_sub(rank) as f64 / total as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

pub fn percentile_band(percentile: f64) -> &'static str {
    if percentile >= 90.0 {
        "최상위권"
    } else if percentile >= 75.0 {
        "상위권"
    } else if percentile >= 50.0 {
        "중상위권"
    } else if percentile >= 25.0 {
        "중위권"
    } else {
        "중하위권"
    }
}

pub fn validate_trim_ratio(ratio: f64) -> Result<(), SalaryError> {
    if (0.0..0.5).contains(&ratio) {
        Ok(())
    } else {
        Err(SalaryError::InvalidTrimRatio(ratio.to_string()))
    }
}
