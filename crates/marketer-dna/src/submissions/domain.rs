use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::diagnosis::{Answer, PersonalizedResult};
use crate::quiz::MarketerType;

/// Identifier wrapper for stored submissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(pub String);

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque browser-level client identifier. Absent ids collapse to `anonymous`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(pub String);

impl ClientId {
    pub const ANONYMOUS: &'static str = "anonymous";

    pub fn anonymous() -> Self {
        Self(Self::ANONYMOUS.to_string())
    }

    pub fn or_anonymous(raw: Option<String>) -> Self {
        match raw {
            Some(id) if !id.trim().is_empty() => Self(id.trim().to_string()),
            _ => Self::anonymous(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::anonymous()
    }
}

/// Self-reported salary in units of 10,000 KRW.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryInfo {
    pub years_of_experience: u8,
    pub salary: u32,
}

impl SalaryInfo {
    pub fn experience_group(&self) -> ExperienceGroup {
        ExperienceGroup::from_years(self.years_of_experience)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceGroup {
    Junior,
    Mid,
    Senior,
    Lead,
}

impl ExperienceGroup {
    pub const fn from_years(years: u8) -> Self {
        match years {
            0..=2 => ExperienceGroup::Junior,
            3..=5 => ExperienceGroup::Mid,
            6..=10 => ExperienceGroup::Senior,
            _ => ExperienceGroup::Lead,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ExperienceGroup::Junior => "신입/주니어 (0-2년)",
            ExperienceGroup::Mid => "미드레벨 (3-5년)",
            ExperienceGroup::Senior => "시니어 (6-10년)",
            ExperienceGroup::Lead => "리드/이상 (11년+)",
        }
    }
}

/// Payload accepted when a respondent finishes the quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub marketer_type: Option<MarketerType>,
    pub answers: Vec<Answer>,
    #[serde(default)]
    pub salary_info: Option<SalaryInfo>,
}

/// Write-once stored submission with the server-computed result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub id: SubmissionId,
    pub client_id: ClientId,
    pub marketer_type: Option<MarketerType>,
    pub answers: Vec<Answer>,
    pub result: PersonalizedResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_info: Option<SalaryInfo>,
    pub created_at: DateTime<Utc>,
}

impl SubmissionRecord {
    pub fn has_salary(&self) -> bool {
        self.salary_info.is_some()
    }

    pub fn persona(&self) -> &str {
        &self.result.marketing_dna
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experience_groups_follow_year_bands() {
        assert_eq!(ExperienceGroup::from_years(0), ExperienceGroup::Junior);
        assert_eq!(ExperienceGroup::from_years(2), ExperienceGroup::Junior);
        assert_eq!(ExperienceGroup::from_years(3), ExperienceGroup::Mid);
        assert_eq!(ExperienceGroup::from_years(10), ExperienceGroup::Senior);
        assert_eq!(ExperienceGroup::from_years(11), ExperienceGroup::Lead);
    }

    #[test]
    fn blank_client_ids_become_anonymous() {
        assert_eq!(ClientId::or_anonymous(None).as_str(), "anonymous");
        assert_eq!(ClientId::or_anonymous(Some("  ".into())).as_str(), "anonymous");
        assert_eq!(ClientId::or_anonymous(Some("client_1".into())).as_str(), "client_1");
    }
}
