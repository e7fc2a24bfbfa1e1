use super::QuizError;
use crate::diagnosis::answers::choice_key;
use crate::diagnosis::{Answer, Difficulty, QuestionId, ShareCode};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

const MAX_CHOICES: usize = 4;

/// Marketing track the respondent identifies with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketerType {
    B2c,
    B2b,
    Ecommerce,
}

impl MarketerType {
    pub const ALL: [MarketerType; 3] = [MarketerType::B2c, MarketerType::B2b, MarketerType::Ecommerce];

    pub const fn as_str(self) -> &'static str {
        match self {
            MarketerType::B2c => "b2c",
            MarketerType::B2b => "b2b",
            MarketerType::Ecommerce => "ecommerce",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            MarketerType::B2c => "B2C 전문 마케터",
            MarketerType::B2b => "B2B 전략 마케터",
            MarketerType::Ecommerce => "E-Commerce 성장 마케터",
        }
    }
}

impl fmt::Display for MarketerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown marketer type '{0}' (expected b2c, b2b or ecommerce)")]
pub struct ParseMarketerTypeError(pub String);

impl FromStr for MarketerType {
    type Err = ParseMarketerTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        MarketerType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ParseMarketerTypeError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub text: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub set: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub marketer_type: Vec<MarketerType>,
    pub question: String,
    pub choices: Vec<Choice>,
}

impl Question {
    pub fn targets(&self, kind: MarketerType) -> bool {
        self.marketer_type.contains(&kind)
    }

    pub fn choice(&self, index: u8) -> Result<&Choice, QuizError> {
        self.choices
            .get(usize::from(index))
            .ok_or_else(|| QuizError::ChoiceOutOfRange {
                question: self.id.clone(),
                index,
            })
    }

    /// Records `index` as an answer to this question.
    pub fn answer(&self, index: u8) -> Result<Answer, QuizError> {
        let choice = self.choice(index)?;
        Ok(Answer {
            question_id: self.id.clone(),
            tags: choice.tags.clone(),
            difficulty: self.difficulty,
        })
    }

    pub fn has_any_tag(&self, tags: &HashSet<&str>) -> bool {
        self.choices
            .iter()
            .flat_map(|choice| choice.tags.iter())
            .any(|tag| tags.contains(tag.as_str()))
    }
}

/// Immutable pool of quiz questions, indexed by id.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
    index: HashMap<QuestionId, usize>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        let mut index = HashMap::with_capacity(questions.len());
        for (position, question) in questions.iter().enumerate() {
            if question.choices.is_empty() || question.choices.len() > MAX_CHOICES {
                return Err(QuizError::InvalidBank(format!(
                    "question {} has {} choices",
                    question.id,
                    question.choices.len()
                )));
            }
            if index.insert(question.id.clone(), position).is_some() {
                return Err(QuizError::InvalidBank(format!(
                    "duplicate question id {}",
                    question.id
                )));
            }
        }

        Ok(Self { questions, index })
    }

    pub fn from_json(raw: &str) -> Result<Self, QuizError> {
        let questions: Vec<Question> = serde_json::from_str(raw)?;
        Self::new(questions)
    }

    /// Questions shipped with the crate.
    pub fn bundled() -> Result<Self, QuizError> {
        Self::from_json(include_str!("../../data/questions.json"))
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: &QuestionId) -> Option<&Question> {
        self.index.get(id).map(|position| &self.questions[*position])
    }

    pub fn require(&self, id: &QuestionId) -> Result<&Question, QuizError> {
        self.get(id)
            .ok_or_else(|| QuizError::UnknownQuestion(id.clone()))
    }

    pub fn for_type(&self, kind: MarketerType) -> impl Iterator<Item = &Question> + '_ {
        self.questions.iter().filter(move |question| question.targets(kind))
    }

    /// Share code for answers recorded against this bank, recovering each choice index by tags.
    pub fn share_code_for(&self, answers: &[Answer]) -> Result<ShareCode, QuizError> {
        let mut indices = Vec::with_capacity(answers.len());
        let mut ids = Vec::with_capacity(answers.len());

        for answer in answers {
            let question = self.require(&answer.question_id)?;
            let key = answer.choice_key();
            let position = question
                .choices
                .iter()
                .position(|choice| choice_key(&choice.tags) == key)
                .ok_or_else(|| QuizError::UnmatchedAnswer(answer.question_id.clone()))?;
            indices.push(position as u8);
            ids.push(answer.question_id.clone());
        }

        Ok(ShareCode::new(indices, ids)?)
    }
}

impl ShareCode {
    /// Rebuilds the recorded answers against `bank`.
    pub fn answers(&self, bank: &QuestionBank) -> Result<Vec<Answer>, QuizError> {
        self.entries()
            .map(|(id, index)| bank.require(id)?.answer(index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_BANK: &str = r#"[
        {
            "id": "Q1", "set": "A", "category": "전략", "difficulty": "쉬움",
            "marketerType": ["b2c", "ecommerce"], "question": "첫 질문",
            "choices": [
                { "text": "데이터", "tags": ["데이터 기반", "단기 성과 집착"] },
                { "text": "감성", "tags": ["감성"] }
            ]
        },
        {
            "id": "Q2", "set": "A", "category": "브랜드", "difficulty": "보통",
            "marketerType": ["b2b"], "question": "두 번째 질문",
            "choices": [
                { "text": "브랜드", "tags": ["브랜드 가치 중시"] },
                { "text": "장기", "tags": ["장기 전략", "리스크 회피"] }
            ]
        }
    ]"#;

    #[test]
    fn bundled_bank_is_valid() {
        let bank = QuestionBank::bundled().expect("bundled bank");
        assert!(bank.len() >= 10);
        for kind in MarketerType::ALL {
            assert!(bank.for_type(kind).next().is_some(), "{kind}");
        }
    }

    #[test]
    fn rejects_duplicate_ids() {
        let doubled = format!(
            "[{0},{0}]",
            serde_json::to_string(&QuestionBank::from_json(SMALL_BANK).expect("bank").questions()[0])
                .expect("serialize")
        );
        let err = QuestionBank::from_json(&doubled).expect_err("duplicate");
        assert!(matches!(err, QuizError::InvalidBank(_)));
    }

    #[test]
    fn share_code_round_trips_answers() {
        let bank = QuestionBank::from_json(SMALL_BANK).expect("bank");
        let answers = vec![
            bank.require(&QuestionId::from("Q2")).expect("q2").answer(1).expect("answer"),
            bank.require(&QuestionId::from("Q1")).expect("q1").answer(0).expect("answer"),
        ];

        let code = bank.share_code_for(&answers).expect("code");
        assert_eq!(code.encode(), "NA:Q2,Q1");
        assert_eq!(code.answers(&bank).expect("replay"), answers);
    }

    #[test]
    fn replay_reports_unknown_question_and_choice() {
        let bank = QuestionBank::from_json(SMALL_BANK).expect("bank");

        let unknown = ShareCode::decode("A:Q9").expect("code");
        assert!(matches!(
            unknown.answers(&bank),
            Err(QuizError::UnknownQuestion(id)) if id.as_str() == "Q9"
        ));

        let out_of_range = ShareCode::decode("y:Q1").expect("code");
        assert!(matches!(
            out_of_range.answers(&bank),
            Err(QuizError::ChoiceOutOfRange { index: 3, .. })
        ));
    }

    #[test]
    fn marketer_type_parses_case_insensitively() {
        assert_eq!("B2B".parse::<MarketerType>(), Ok(MarketerType::B2b));
        assert_eq!(MarketerType::Ecommerce.display_name(), "E-Commerce 성장 마케터");
        assert!("agency".parse::<MarketerType>().is_err());
    }
}
