mod config;
mod policy;
mod table;

pub use config::ClassifierConfig;
pub use policy::DnaPattern;
pub use table::{pair_entry, single_entry, DnaEntry, ALL_ROUND};

use super::answers::{Answer, TagTally};
use super::catalog::Tag;
use super::scoring::ScoringError;
use policy::{decide_persona, DominanceSignals};
use serde::{Deserialize, Serialize};

/// Rule-cascade classifier mapping raw tag counts to a persona.
#[derive(Debug, Clone, Default)]
pub struct PersonaClassifier {
    config: ClassifierConfig,
}

impl PersonaClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn classify(&self, answers: &[Answer]) -> Result<DnaClassification, ScoringError> {
        if answers.is_empty() {
            return Err(ScoringError::EmptyAnswers);
        }

        Ok(self.classify_tally(&TagTally::from_answers(answers)))
    }

    pub fn classify_tally(&self, tally: &TagTally) -> DnaClassification {
        let signals = DominanceSignals::from_tally(tally);
        let (entry, pattern) = decide_persona(&signals, &self.config);

        DnaClassification {
            label: entry.label.to_string(),
            colors: entry.colors.iter().map(|color| color.to_string()).collect(),
            pattern,
            primary: (signals.primary_count > 0).then_some(signals.primary),
            secondary: (signals.secondary_count > 0).then_some(signals.secondary),
        }
    }
}

/// Persona label, colors and the tags that drove the decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnaClassification {
    pub label: String,
    pub colors: Vec<String>,
    pub pattern: DnaPattern,
    pub primary: Option<Tag>,
    pub secondary: Option<Tag>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnosis::answers::{Difficulty, QuestionId};

    fn answer(tags: &[Tag]) -> Answer {
        Answer {
            question_id: QuestionId::from("Q"),
            tags: tags.iter().map(|tag| tag.label().to_string()).collect(),
            difficulty: Difficulty::Normal,
        }
    }

    fn repeat(tag: Tag, times: usize) -> Vec<Answer> {
        (0..times).map(|_| answer(&[tag])).collect()
    }

    #[test]
    fn single_dominant_tag_uses_single_table() {
        let mut answers = repeat(Tag::Emotional, 5);
        answers.extend(repeat(Tag::BrandValue, 2));
        answers.extend(repeat(Tag::RiskAverse, 1));

        let result = PersonaClassifier::default().classify(&answers).expect("classify");

        assert_eq!(result.label, "감성 스토리텔러");
        assert_eq!(result.pattern, DnaPattern::SingleDominant);
        assert_eq!(result.primary, Some(Tag::Emotional));
        assert_eq!(result.secondary, Some(Tag::BrandValue));
    }

    #[test]
    fn dual_dominant_falls_back_to_reversed_pair() {
        // customer 4, data 3 of 10 answers; only (data, customer) is tabulated
        let mut answers = repeat(Tag::CustomerExperience, 4);
        answers.extend(repeat(Tag::DataDriven, 3));
        answers.extend(repeat(Tag::Innovation, 1));
        answers.extend(repeat(Tag::TrendFocus, 1));
        answers.extend(repeat(Tag::Emotional, 1));

        let result = PersonaClassifier::default().classify(&answers).expect("classify");

        assert_eq!(result.label, "데이터 기반 고객 경험 설계자");
        assert_eq!(result.pattern, DnaPattern::DualDominant);
    }

    #[test]
    fn untabulated_pair_collapses_to_all_round() {
        let mut answers = repeat(Tag::Innovation, 3);
        answers.extend(repeat(Tag::RiskAverse, 3));
        answers.extend(repeat(Tag::Emotional, 1));

        let result = PersonaClassifier::default().classify(&answers).expect("classify");

        assert_eq!(result.label, ALL_ROUND.label);
        assert_eq!(result.pattern, DnaPattern::AllRound);
        assert_eq!(result.colors.len(), 2);
    }

    #[test]
    fn answers_without_catalog_tags_are_all_round() {
        let answers = vec![Answer {
            question_id: QuestionId::from("Q"),
            tags: vec!["기타".to_string()],
            difficulty: Difficulty::Easy,
        }];

        let result = PersonaClassifier::default().classify(&answers).expect("classify");

        assert_eq!(result.label, ALL_ROUND.label);
        assert_eq!(result.primary, None);
        assert_eq!(result.secondary, None);
    }

    #[test]
    fn empty_answers_are_rejected() {
        assert_eq!(
            PersonaClassifier::default().classify(&[]),
            Err(ScoringError::EmptyAnswers)
        );
    }

    #[test]
    fn thresholds_are_configurable() {
        let config = ClassifierConfig {
            single_dominance_ratio: 10.0,
            fallback_single_primary_count: 100,
            ..ClassifierConfig::default()
        };
        let mut answers = repeat(Tag::Emotional, 5);
        answers.extend(repeat(Tag::ContentMarketing, 2));

        let result = PersonaClassifier::new(config).classify(&answers).expect("classify");

        assert_eq!(result.label, "감성 콘텐츠 아티스트");
    }
}
