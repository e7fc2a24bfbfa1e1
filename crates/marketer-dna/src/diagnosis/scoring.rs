use super::answers::{Answer, TagTally};
use super::catalog::{Level, Tag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const MIN_SCORE: f64 = 40.0;
const MAX_SCORE: f64 = 100.0;

/// Normalized result for a single tag in one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagScore {
    pub score: u8,
    pub level: Level,
    pub rank: u8,
    pub percentage: u8,
}

/// Scores for every catalog tag, iterated in catalog order.
pub type TagScoreMap = BTreeMap<Tag, TagScore>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("at least one answer is required")]
    EmptyAnswers,
}

/// Scores every catalog tag from its selection-frequency rank within the session.
pub fn compute_tag_scores(answers: &[Answer]) -> Result<TagScoreMap, ScoringError> {
    if answers.is_empty() {
        return Err(ScoringError::EmptyAnswers);
    }

    Ok(scores_from_tally(&TagTally::from_answers(answers)))
}

pub(crate) fn scores_from_tally(tally: &TagTally) -> TagScoreMap {
    let total_selections = tally.total_selections();

    tally
        .ranked()
        .into_iter()
        .enumerate()
        .map(|(position, tag)| {
            let rank = position + 1;
            let (base, range) = rank_bucket(rank);
            let raw = base + tally.share(tag) * range;
            let score = raw.clamp(MIN_SCORE, MAX_SCORE).round() as u8;

            let percentage = if total_selections == 0 {
                0
            } else {
                (f64::from(tally.count(tag)) * 100.0 / f64::from(total_selections)).round() as u8
            };

            (
                tag,
                TagScore {
                    score,
                    level: Level::from_score(score),
                    rank: rank as u8,
                    percentage,
                },
            )
        })
        .collect()
}

/// `(base, range)` for a 1-based rank.
fn rank_bucket(rank: usize) -> (f64, f64) {
    match rank {
        1 => (90.0, 10.0),
        2 => (80.0, 15.0),
        3 => (70.0, 20.0),
        4 | 5 => (60.0, 25.0),
        6 | 7 => (50.0, 25.0),
        _ => (40.0, 25.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnosis::answers::{Difficulty, QuestionId};

    fn answer(tags: &[Tag]) -> Answer {
        Answer {
            question_id: QuestionId::from("Q"),
            tags: tags.iter().map(|tag| tag.label().to_string()).collect(),
            difficulty: Difficulty::Easy,
        }
    }

    fn session() -> Vec<Answer> {
        vec![
            answer(&[Tag::DataDriven, Tag::ShortTermPerformance]),
            answer(&[Tag::DataDriven]),
            answer(&[Tag::DataDriven, Tag::CostEfficiency]),
            answer(&[Tag::ShortTermPerformance]),
            answer(&[Tag::Emotional]),
        ]
    }

    #[test]
    fn rejects_empty_answers() {
        assert_eq!(compute_tag_scores(&[]), Err(ScoringError::EmptyAnswers));
    }

    #[test]
    fn every_catalog_tag_is_scored_within_bounds() {
        let scores = compute_tag_scores(&session()).expect("scores");

        assert_eq!(scores.len(), Tag::COUNT);
        for tag in Tag::ALL {
            let score = scores.get(&tag).expect("tag present");
            assert!((40..=100).contains(&score.score), "{tag}: {}", score.score);
        }
    }

    #[test]
    fn applies_rank_buckets() {
        let scores = compute_tag_scores(&session()).expect("scores");

        // 3/5 -> 90 + 6
        let data = scores[&Tag::DataDriven];
        assert_eq!((data.rank, data.score, data.level), (1, 96, Level::Expert));
        // 2/5 -> 80 + 6
        let short_term = scores[&Tag::ShortTermPerformance];
        assert_eq!((short_term.rank, short_term.score), (2, 86));
        // emotional and cost efficiency tie; catalog order decides
        let emotional = scores[&Tag::Emotional];
        assert_eq!((emotional.rank, emotional.score), (3, 74));
        let cost = scores[&Tag::CostEfficiency];
        assert_eq!((cost.rank, cost.score), (4, 65));
        let customer = scores[&Tag::CustomerExperience];
        assert_eq!((customer.rank, customer.score), (5, 60));
        let brand = scores[&Tag::BrandValue];
        assert_eq!((brand.rank, brand.score, brand.level), (11, 40, Level::Basic));
    }

    #[test]
    fn percentage_is_share_of_selections() {
        let scores = compute_tag_scores(&session()).expect("scores");
        // 7 selections in total
        assert_eq!(scores[&Tag::DataDriven].percentage, 43);
        assert_eq!(scores[&Tag::Emotional].percentage, 14);
        assert_eq!(scores[&Tag::BrandValue].percentage, 0);
    }

    #[test]
    fn higher_counts_never_score_lower() {
        let answers = session();
        let tally = TagTally::from_answers(&answers);
        let scores = scores_from_tally(&tally);

        for a in Tag::ALL {
            for b in Tag::ALL {
                if tally.count(a) > tally.count(b) {
                    assert!(scores[&a].score >= scores[&b].score, "{a} vs {b}");
                }
            }
        }
    }

    #[test]
    fn unknown_tags_only_leave_floor_scores() {
        let answers = vec![Answer {
            question_id: QuestionId::from("Q"),
            tags: vec!["알 수 없음".to_string()],
            difficulty: Difficulty::Hard,
        }];

        let scores = compute_tag_scores(&answers).expect("scores");

        assert_eq!(scores[&Tag::DataDriven].score, 90);
        assert!(scores.values().all(|score| score.percentage == 0));
    }

    #[test]
    fn repeated_scoring_is_deterministic() {
        let answers = session();
        assert_eq!(compute_tag_scores(&answers), compute_tag_scores(&answers));
    }
}
