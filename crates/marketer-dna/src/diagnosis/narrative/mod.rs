mod tables;
mod technology;

pub use tables::MarketingStyle;
pub use technology::{recommend_technologies, RecommendedTechnologies, TechCategory};

use super::catalog::{Level, Tag};
use super::scoring::{TagScore, TagScoreMap};
use serde::{Deserialize, Serialize};

const HIGHLIGHT_COUNT: usize = 3;
const DEEPEN_THRESHOLD: u8 = 70;
const FUNDAMENTALS_THRESHOLD: u8 = 30;
const SKILL_GAP_THRESHOLD: u8 = 40;
const LEADERSHIP_AVERAGE: f64 = 50.0;
const BROAD_BASICS_AVERAGE: f64 = 30.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthInsight {
    pub tag: Tag,
    pub score: u8,
    pub level: Level,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthArea {
    pub tag: Tag,
    pub score: u8,
    pub current_level: Level,
    pub next_level: Option<Level>,
    pub guidance: String,
}

/// Everything derived from a score distribution for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Narrative {
    pub top_strengths: Vec<StrengthInsight>,
    pub growth_areas: Vec<GrowthArea>,
    pub recommendations: Vec<String>,
    pub suitable_roles: Vec<String>,
    pub skill_development: Vec<String>,
    pub recommended_technologies: RecommendedTechnologies,
    pub marketing_style: MarketingStyle,
}

pub fn generate_narrative(scores: &TagScoreMap) -> Narrative {
    let top = top_tags(scores);
    let bottom = bottom_tags(scores);
    let leading = top.first().map(|(tag, _)| *tag);
    let top_set: Vec<Tag> = top.iter().map(|(tag, _)| *tag).collect();

    Narrative {
        top_strengths: top.iter().map(|(tag, score)| strength(*tag, score)).collect(),
        growth_areas: bottom.iter().map(|(tag, score)| growth(*tag, score)).collect(),
        recommendations: recommendations(scores, &top, &bottom),
        suitable_roles: suitable_roles(&top_set),
        skill_development: skill_development(&bottom),
        recommended_technologies: recommend_technologies(leading),
        marketing_style: MarketingStyle::for_tag(leading),
    }
}

fn top_tags(scores: &TagScoreMap) -> Vec<(Tag, TagScore)> {
    let mut ordered: Vec<(Tag, TagScore)> =
        scores.iter().map(|(tag, score)| (*tag, *score)).collect();
    ordered.sort_by(|(_, a), (_, b)| b.score.cmp(&a.score).then(a.rank.cmp(&b.rank)));
    ordered.truncate(HIGHLIGHT_COUNT);
    ordered
}

fn bottom_tags(scores: &TagScoreMap) -> Vec<(Tag, TagScore)> {
    let mut ordered: Vec<(Tag, TagScore)> =
        scores.iter().map(|(tag, score)| (*tag, *score)).collect();
    ordered.sort_by(|(_, a), (_, b)| a.score.cmp(&b.score).then(b.rank.cmp(&a.rank)));
    ordered.truncate(HIGHLIGHT_COUNT);
    ordered
}

fn strength(tag: Tag, score: &TagScore) -> StrengthInsight {
    let descriptor = tag.profile().level(score.level);
    StrengthInsight {
        tag,
        score: score.score,
        level: score.level,
        title: descriptor.name.to_string(),
        description: descriptor.description.to_string(),
    }
}

fn growth(tag: Tag, score: &TagScore) -> GrowthArea {
    let name = tag.profile().name;
    let next_level = score.level.next();
    let guidance = match next_level {
        Some(next) => format!(
            "{name} 역량을 '{}' 단계에서 '{}' 단계로 끌어올려 보세요.",
            score.level.label(),
            next.label()
        ),
        None => format!("{name} 역량은 이미 최고 수준입니다."),
    };

    GrowthArea {
        tag,
        score: score.score,
        current_level: score.level,
        next_level,
        guidance,
    }
}

fn recommendations(
    scores: &TagScoreMap,
    top: &[(Tag, TagScore)],
    bottom: &[(Tag, TagScore)],
) -> Vec<String> {
    let mut out = Vec::new();

    if let Some((tag, score)) = top.first() {
        if score.score >= DEEPEN_THRESHOLD {
            out.push(tables::deepen_expertise(*tag).to_string());
        }
    }

    if let Some((_, score)) = bottom.first() {
        if score.score < FUNDAMENTALS_THRESHOLD {
            out.push(tables::FUNDAMENTALS.to_string());
        }
    }

    if !scores.is_empty() {
        let average = scores
            .values()
            .map(|score| f64::from(score.score))
            .sum::<f64>()
            / scores.len() as f64;
        if average > LEADERSHIP_AVERAGE {
            out.push(tables::LEADERSHIP.to_string());
        } else if average < BROAD_BASICS_AVERAGE {
            out.push(tables::BROAD_BASICS.to_string());
        }
    }

    out
}

fn suitable_roles(top: &[Tag]) -> Vec<String> {
    let mut roles: Vec<String> = Vec::new();

    for (first, second, names) in tables::ROLE_COMBINATIONS {
        if top.contains(first) && top.contains(second) {
            for name in names.iter() {
                if !roles.iter().any(|existing| existing == name) {
                    roles.push(name.to_string());
                }
            }
        }
    }

    if roles.is_empty() {
        roles = tables::GENERIC_ROLES.iter().map(|name| name.to_string()).collect();
    }
    roles
}

fn skill_development(bottom: &[(Tag, TagScore)]) -> Vec<String> {
    bottom
        .iter()
        .filter(|(_, score)| score.score < SKILL_GAP_THRESHOLD)
        .flat_map(|(tag, _)| tables::skill_gaps(*tag))
        .map(str::to_string)
        .collect()
}
