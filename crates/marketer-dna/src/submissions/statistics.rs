use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::domain::{ClientId, SubmissionRecord};
use crate::diagnosis::answers::choice_key;
use crate::diagnosis::QuestionId;

/// Population counts scanned from every stored submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSnapshot {
    pub persona_count: BTreeMap<String, u64>,
    pub answer_count: BTreeMap<String, u64>,
    pub unique_user_tag_count: BTreeMap<String, u64>,
    pub question_choice_stats: BTreeMap<QuestionId, BTreeMap<String, u64>>,
    pub total: u64,
}

/// Position of a persona among all personas by popularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaRank {
    pub rank: usize,
    pub count: u64,
    pub personas: usize,
}

/// How common one respondent's choice was for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceComparison {
    pub percentage: u8,
    pub total_answers: u64,
    pub my_choice_count: u64,
}

impl StatisticsSnapshot {
    pub fn from_records(records: &[SubmissionRecord]) -> Self {
        let mut snapshot = StatisticsSnapshot {
            total: records.len() as u64,
            ..StatisticsSnapshot::default()
        };
        let mut tag_clients: BTreeMap<&str, BTreeSet<&ClientId>> = BTreeMap::new();

        for record in records {
            *snapshot
                .persona_count
                .entry(record.persona().to_string())
                .or_default() += 1;

            for answer in &record.answers {
                for tag in &answer.tags {
                    *snapshot.answer_count.entry(tag.clone()).or_default() += 1;
                    tag_clients
                        .entry(tag.as_str())
                        .or_default()
                        .insert(&record.client_id);
                }

                *snapshot
                    .question_choice_stats
                    .entry(answer.question_id.clone())
                    .or_default()
                    .entry(answer.choice_key())
                    .or_default() += 1;
            }
        }

        snapshot.unique_user_tag_count = tag_clients
            .into_iter()
            .map(|(tag, clients)| (tag.to_string(), clients.len() as u64))
            .collect();

        snapshot
    }

    /// Personas ordered by count, most common first. Equal counts keep label order.
    pub fn ranked_personas(&self) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self
            .persona_count
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    pub fn most_common_persona(&self) -> Option<&str> {
        self.ranked_personas().first().map(|(label, _)| *label)
    }

    pub fn persona_rank(&self, label: &str) -> Option<PersonaRank> {
        let ranked = self.ranked_personas();
        ranked
            .iter()
            .position(|(candidate, _)| *candidate == label)
            .map(|position| PersonaRank {
                rank: position + 1,
                count: ranked[position].1,
                personas: ranked.len(),
            })
    }

    pub fn choice_share(&self, question_id: &QuestionId, tags: &[String]) -> Option<ChoiceComparison> {
        let choices = self.question_choice_stats.get(question_id)?;
        let key = choice_key(tags);

        let total_answers: u64 = choices.values().sum();
        let my_choice_count = choices.get(&key).copied().unwrap_or(0);

        Some(ChoiceComparison {
            percentage: calculate_percentage(my_choice_count, total_answers),
            total_answers,
            my_choice_count,
        })
    }
}

/// Rounded percentage, 0 when `total` is 0.
pub fn calculate_percentage(value: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    ((value as f64 / total as f64) * 100.0).round().min(100.0) as u8
}
