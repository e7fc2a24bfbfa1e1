use super::answers::Answer;
use super::classifier::{DnaPattern, PersonaClassifier};
use super::narrative::{
    generate_narrative, GrowthArea, MarketingStyle, RecommendedTechnologies, StrengthInsight,
};
use super::scoring::{compute_tag_scores, ScoringError, TagScoreMap};
use serde::{Deserialize, Serialize};

/// Stateless pipeline: scores, persona and narrative for one completed session.
#[derive(Debug, Clone, Default)]
pub struct DiagnosisEngine {
    classifier: PersonaClassifier,
}

impl DiagnosisEngine {
    pub fn new(classifier: PersonaClassifier) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &PersonaClassifier {
        &self.classifier
    }

    pub fn analyze(&self, answers: &[Answer]) -> Result<PersonalizedResult, ScoringError> {
        let tag_scores = compute_tag_scores(answers)?;
        let classification = self.classifier.classify(answers)?;
        let narrative = generate_narrative(&tag_scores);
        let total_score = tag_scores.values().map(|score| u32::from(score.score)).sum();

        Ok(PersonalizedResult {
            marketing_dna: classification.label,
            personal_colors: classification.colors,
            pattern: classification.pattern,
            tag_scores,
            total_score,
            top_strengths: narrative.top_strengths,
            growth_areas: narrative.growth_areas,
            recommendations: narrative.recommendations,
            marketing_style: narrative.marketing_style,
            suitable_roles: narrative.suitable_roles,
            skill_development: narrative.skill_development,
            recommended_technologies: narrative.recommended_technologies,
        })
    }
}

/// Diagnosis output. Computed once per session and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizedResult {
    pub marketing_dna: String,
    pub personal_colors: Vec<String>,
    pub pattern: DnaPattern,
    pub tag_scores: TagScoreMap,
    pub total_score: u32,
    pub top_strengths: Vec<StrengthInsight>,
    pub growth_areas: Vec<GrowthArea>,
    pub recommendations: Vec<String>,
    pub marketing_style: MarketingStyle,
    pub suitable_roles: Vec<String>,
    pub skill_development: Vec<String>,
    pub recommended_technologies: RecommendedTechnologies,
}
