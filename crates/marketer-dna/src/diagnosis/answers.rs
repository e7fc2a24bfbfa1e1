use super::catalog::Tag;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a question in the quiz bank.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "쉬움")]
    Easy,
    #[serde(rename = "보통")]
    Normal,
    #[serde(rename = "어려움")]
    Hard,
}

impl Difficulty {
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "쉬움",
            Difficulty::Normal => "보통",
            Difficulty::Hard => "어려움",
        }
    }
}

/// One recorded quiz response. Tags are kept verbatim; only catalog tags are scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: QuestionId,
    pub tags: Vec<String>,
    pub difficulty: Difficulty,
}

impl Answer {
    pub fn catalog_tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.tags.iter().filter_map(|raw| Tag::from_label(raw))
    }

    /// Order-insensitive key identifying the chosen option within a question.
    pub fn choice_key(&self) -> String {
        choice_key(&self.tags)
    }
}

/// Sorted, comma-joined tags.
pub fn choice_key(tags: &[String]) -> String {
    let mut tags: Vec<&str> = tags.iter().map(String::as_str).collect();
    tags.sort_unstable();
    tags.join(",")
}

/// Catalog tag selection counts for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagTally {
    counts: [u32; Tag::COUNT],
    answers: usize,
}

impl TagTally {
    pub fn from_answers(answers: &[Answer]) -> Self {
        let mut counts = [0u32; Tag::COUNT];
        for tag in answers.iter().flat_map(Answer::catalog_tags) {
            counts[tag.index()] += 1;
        }

        Self {
            counts,
            answers: answers.len(),
        }
    }

    pub fn count(&self, tag: Tag) -> u32 {
        self.counts[tag.index()]
    }

    pub fn total_answers(&self) -> usize {
        self.answers
    }

    pub fn total_selections(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Selections of `tag` per answer.
    pub fn share(&self, tag: Tag) -> f64 {
        if self.answers == 0 {
            return 0.0;
        }
        f64::from(self.count(tag)) / self.answers as f64
    }

    /// Catalog tags ordered by count, highest first. Ties keep catalog order.
    pub fn ranked(&self) -> [Tag; Tag::COUNT] {
        let mut tags = Tag::ALL;
        tags.sort_by(|a, b| self.count(*b).cmp(&self.count(*a)));
        tags
    }

    /// Population variance of the counts across the whole catalog.
    pub fn variance(&self) -> f64 {
        let n = Tag::COUNT as f64;
        let mean = f64::from(self.total_selections()) / n;
        self.counts
            .iter()
            .map(|count| {
                let delta = f64::from(*count) - mean;
                delta * delta
            })
            .sum::<f64>()
            / n
    }
}
