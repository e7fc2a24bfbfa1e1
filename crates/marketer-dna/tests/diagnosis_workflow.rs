use std::collections::HashSet;

use marketer_dna::diagnosis::classifier::{pair_entry, single_entry, ALL_ROUND};
use marketer_dna::diagnosis::{
    compute_tag_scores, Answer, DiagnosisEngine, Difficulty, DnaPattern, PersonaClassifier,
    QuestionId, ShareCode, Tag, TagTally,
};
use marketer_dna::quiz::{MarketerType, QuestionBank, QuizSession};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn answer(position: usize, tags: &[Tag]) -> Answer {
    Answer {
        question_id: QuestionId(format!("Q{}", position + 1)),
        tags: tags.iter().map(|tag| tag.label().to_string()).collect(),
        difficulty: Difficulty::Normal,
    }
}

fn single_tag_answers(tags: &[Tag]) -> Vec<Answer> {
    tags.iter()
        .enumerate()
        .map(|(position, tag)| answer(position, &[*tag]))
        .collect()
}

fn simulated_sessions(count: usize) -> Vec<Vec<Answer>> {
    let bank = QuestionBank::bundled().expect("bundled bank");
    let mut rng = StdRng::seed_from_u64(2024);

    (0..count)
        .map(|index| {
            let kind = MarketerType::ALL[index % MarketerType::ALL.len()];
            let mut session = QuizSession::start(&bank, kind, 10, &mut rng).expect("session");
            while let Some(question) = session.current_question() {
                let choice = rng.random_range(0..question.choices.len()) as u8;
                session.answer(choice, &mut rng).expect("answer");
            }
            session.answers().to_vec()
        })
        .collect()
}

#[test]
fn analysis_is_deterministic() {
    let engine = DiagnosisEngine::default();
    for answers in simulated_sessions(30) {
        let first = engine.analyze(&answers).expect("analysis");
        let second = engine.analyze(&answers).expect("analysis");
        assert_eq!(first, second);
    }
}

#[test]
fn scores_cover_catalog_within_bounds() {
    let mut answers = single_tag_answers(&[Tag::Emotional, Tag::Emotional]);
    answers.push(Answer {
        question_id: QuestionId::from("Q9"),
        tags: vec!["존재하지 않는 태그".to_string()],
        difficulty: Difficulty::Hard,
    });

    let scores = compute_tag_scores(&answers).expect("scores");

    assert_eq!(scores.len(), Tag::COUNT);
    assert!(Tag::ALL.iter().all(|tag| scores.contains_key(tag)));
    assert!(scores
        .values()
        .all(|score| (40..=100).contains(&score.score)));
}

#[test]
fn higher_counts_never_score_lower() {
    for answers in simulated_sessions(40) {
        let tally = TagTally::from_answers(&answers);
        let scores = compute_tag_scores(&answers).expect("scores");

        for a in Tag::ALL {
            for b in Tag::ALL {
                if tally.count(a) > tally.count(b) {
                    assert!(
                        scores[&a].score >= scores[&b].score,
                        "{a} ({}) scored below {b} ({})",
                        scores[&a].score,
                        scores[&b].score
                    );
                }
            }
        }
    }
}

#[test]
fn every_classification_comes_from_the_fixed_tables() {
    let mut known: HashSet<&str> = Tag::ALL
        .iter()
        .map(|tag| single_entry(*tag).label)
        .collect();
    for a in Tag::ALL {
        for b in Tag::ALL {
            if let Some(entry) = pair_entry(a, b) {
                known.insert(entry.label);
            }
        }
    }
    known.insert(ALL_ROUND.label);

    let classifier = PersonaClassifier::default();
    for answers in simulated_sessions(60) {
        let classification = classifier.classify(&answers).expect("classification");
        assert!(known.contains(classification.label.as_str()));
        assert_eq!(classification.colors.len(), 2);
        assert!(classification.colors.iter().all(|color| !color.is_empty()));
    }
}

#[test]
fn six_of_ten_data_answers_is_the_data_scientist() {
    let answers = single_tag_answers(&[
        Tag::DataDriven,
        Tag::DataDriven,
        Tag::DataDriven,
        Tag::DataDriven,
        Tag::DataDriven,
        Tag::DataDriven,
        Tag::CustomerExperience,
        Tag::CustomerExperience,
        Tag::Innovation,
        Tag::TrendFocus,
    ]);

    let result = DiagnosisEngine::default()
        .analyze(&answers)
        .expect("analysis");

    assert_eq!(result.marketing_dna, "데이터 사이언티스트 마케터");
    assert_eq!(
        result.personal_colors,
        vec![
            "생각이 머무는 안개의 짙은 그레이".to_string(),
            "신중하게 타오르는 청록의 불꽃".to_string(),
        ]
    );
    assert_eq!(result.pattern, DnaPattern::SingleDominant);
    assert_eq!(result.tag_scores[&Tag::DataDriven].rank, 1);
}

#[test]
fn four_three_split_uses_the_pair_table_in_either_order() {
    let expected = pair_entry(Tag::DataDriven, Tag::CustomerExperience).expect("tabulated pair");
    let classifier = PersonaClassifier::default();

    let data_first = single_tag_answers(&[
        Tag::DataDriven,
        Tag::DataDriven,
        Tag::DataDriven,
        Tag::DataDriven,
        Tag::CustomerExperience,
        Tag::CustomerExperience,
        Tag::CustomerExperience,
        Tag::Innovation,
        Tag::TrendFocus,
        Tag::Emotional,
    ]);
    let classification = classifier.classify(&data_first).expect("classification");
    assert_eq!(classification.label, expected.label);
    assert_eq!(classification.pattern, DnaPattern::DualDominant);

    let customer_first = single_tag_answers(&[
        Tag::CustomerExperience,
        Tag::CustomerExperience,
        Tag::CustomerExperience,
        Tag::CustomerExperience,
        Tag::DataDriven,
        Tag::DataDriven,
        Tag::DataDriven,
        Tag::Innovation,
        Tag::TrendFocus,
        Tag::Emotional,
    ]);
    let classification = classifier
        .classify(&customer_first)
        .expect("classification");
    assert_eq!(classification.label, expected.label);
    assert_eq!(classification.colors, expected.colors.map(str::to_string).to_vec());
}

#[test]
fn evenly_spread_tags_are_all_round() {
    let classifier = PersonaClassifier::default();

    let even = single_tag_answers(&Tag::ALL);
    let classification = classifier.classify(&even).expect("classification");
    assert_eq!(classification.label, "올라운드 마케팅 스트래티지스트");
    assert_eq!(classification.pattern, DnaPattern::AllRound);

    let mut nearly_even = Tag::ALL.to_vec();
    nearly_even.push(Tag::BrandValue);
    let classification = classifier
        .classify(&single_tag_answers(&nearly_even))
        .expect("classification");
    assert_eq!(classification.label, ALL_ROUND.label);
}

#[test]
fn two_tag_session_touching_every_tag_is_all_round() {
    use Tag::*;

    // nine tags picked twice, long-term strategy and brand value once
    let pairs = [
        [DataDriven, CustomerExperience],
        [Innovation, TrendFocus],
        [ShortTermPerformance, RiskAverse],
        [Emotional, ContentMarketing],
        [CostEfficiency, LongTermStrategy],
        [DataDriven, BrandValue],
        [CustomerExperience, Innovation],
        [TrendFocus, ShortTermPerformance],
        [RiskAverse, Emotional],
        [ContentMarketing, CostEfficiency],
    ];
    let answers: Vec<Answer> = pairs
        .iter()
        .enumerate()
        .map(|(position, tags)| answer(position, tags))
        .collect();

    let tally = TagTally::from_answers(&answers);
    assert!(Tag::ALL.iter().all(|tag| (1..=2).contains(&tally.count(*tag))));

    let result = DiagnosisEngine::default()
        .analyze(&answers)
        .expect("analysis");

    assert_eq!(result.marketing_dna, "올라운드 마케팅 스트래티지스트");
    assert_eq!(result.pattern, DnaPattern::AllRound);
}

#[test]
fn share_code_reproduces_indices_and_ids() {
    let ids: Vec<QuestionId> = ["Q3", "Q11", "Q7", "Q1"]
        .into_iter()
        .map(QuestionId::from)
        .collect();
    let code = ShareCode::new(vec![2, 1, 3, 0], ids.clone()).expect("valid code");

    let decoded = ShareCode::decode(&code.encode()).expect("decodes");

    assert_eq!(code.encode(), "pNyA:Q3,Q11,Q7,Q1");
    assert_eq!(decoded.choice_indices(), &[2, 1, 3, 0]);
    assert_eq!(decoded.question_ids(), ids.as_slice());
}
