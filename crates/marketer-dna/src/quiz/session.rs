use super::bank::{MarketerType, Question, QuestionBank};
use super::QuizError;
use crate::diagnosis::{Answer, DiagnosisEngine, PersonalizedResult, QuestionId, ShareCode};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::HashSet;

pub const DEFAULT_QUIZ_LENGTH: usize = 10;

/// Outcome of answering the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizProgress<'a> {
    Next(&'a Question),
    Complete,
}

/// One respondent's walk through the bank.
///
/// Each answer steers the next pick towards unasked questions that share a tag with anything
/// already chosen, preferring questions aimed at the respondent's marketer type.
#[derive(Debug, Clone)]
pub struct QuizSession<'a> {
    bank: &'a QuestionBank,
    marketer_type: MarketerType,
    quiz_length: usize,
    asked: Vec<&'a Question>,
    answers: Vec<Answer>,
    choice_indices: Vec<u8>,
}

impl<'a> QuizSession<'a> {
    pub fn start<R: Rng + ?Sized>(
        bank: &'a QuestionBank,
        marketer_type: MarketerType,
        quiz_length: usize,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        let openers: Vec<&Question> = bank.for_type(marketer_type).collect();
        let first = openers
            .choose(rng)
            .copied()
            .ok_or(QuizError::NoQuestions(marketer_type))?;

        Ok(Self {
            bank,
            marketer_type,
            quiz_length: quiz_length.max(1),
            asked: vec![first],
            answers: Vec::new(),
            choice_indices: Vec::new(),
        })
    }

    pub fn marketer_type(&self) -> MarketerType {
        self.marketer_type
    }

    pub fn quiz_length(&self) -> usize {
        self.quiz_length
    }

    /// The question awaiting an answer, `None` once complete.
    pub fn current_question(&self) -> Option<&'a Question> {
        if self.is_complete() {
            return None;
        }
        self.asked.last().copied()
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn asked_ids(&self) -> impl Iterator<Item = &QuestionId> + '_ {
        self.asked.iter().map(|question| &question.id)
    }

    /// `(answered, expected)` where `expected` shrinks if the bank runs dry.
    pub fn progress(&self) -> (usize, usize) {
        let expected = if self.is_complete() {
            self.answers.len()
        } else {
            self.quiz_length
        };
        (self.answers.len(), expected)
    }

    pub fn is_complete(&self) -> bool {
        !self.answers.is_empty() && self.answers.len() == self.asked.len()
    }

    pub fn answer<R: Rng + ?Sized>(
        &mut self,
        choice_index: u8,
        rng: &mut R,
    ) -> Result<QuizProgress<'a>, QuizError> {
        let question = self.current_question().ok_or(QuizError::Completed)?;
        let answer = question.answer(choice_index)?;

        self.answers.push(answer);
        self.choice_indices.push(choice_index);

        match self.pick_next(rng) {
            Some(next) => {
                self.asked.push(next);
                Ok(QuizProgress::Next(next))
            }
            None => Ok(QuizProgress::Complete),
        }
    }

    fn pick_next<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&'a Question> {
        if self.answers.len() >= self.quiz_length {
            return None;
        }

        let asked: HashSet<&QuestionId> = self.asked_ids().collect();
        let selected: HashSet<&str> = self
            .answers
            .iter()
            .flat_map(|answer| answer.tags.iter().map(String::as_str))
            .collect();

        let bank: &'a QuestionBank = self.bank;
        let unasked: Vec<&'a Question> = bank
            .questions()
            .iter()
            .filter(|question| !asked.contains(&question.id))
            .collect();

        let related: Vec<&'a Question> = unasked
            .iter()
            .copied()
            .filter(|question| question.has_any_tag(&selected))
            .collect();

        let mut candidates = if related.is_empty() { unasked } else { related };

        let targeted: Vec<&'a Question> = candidates
            .iter()
            .copied()
            .filter(|question| question.targets(self.marketer_type))
            .collect();
        if !targeted.is_empty() {
            candidates = targeted;
        }

        candidates.choose(rng).copied()
    }

    /// Share code for the answers recorded so far.
    pub fn share_code(&self) -> Result<ShareCode, QuizError> {
        let ids = self
            .asked
            .iter()
            .take(self.answers.len())
            .map(|question| question.id.clone())
            .collect();
        Ok(ShareCode::new(self.choice_indices.clone(), ids)?)
    }

    pub fn finish(&self, engine: &DiagnosisEngine) -> Result<PersonalizedResult, QuizError> {
        if !self.is_complete() {
            return Err(QuizError::Incomplete {
                answered: self.answers.len(),
                expected: self.quiz_length,
            });
        }
        Ok(engine.analyze(&self.answers)?)
    }
}
