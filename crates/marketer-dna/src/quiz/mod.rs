//! Adaptive quiz flow over the bundled question bank.

mod bank;
mod session;

pub use bank::{Choice, MarketerType, ParseMarketerTypeError, Question, QuestionBank};
pub use session::{QuizProgress, QuizSession, DEFAULT_QUIZ_LENGTH};

use crate::diagnosis::{QuestionId, ScoringError, ShareCodeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("failed to parse question bank: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid question bank: {0}")]
    InvalidBank(String),
    #[error("no questions available for {0}")]
    NoQuestions(MarketerType),
    #[error("unknown question {0}")]
    UnknownQuestion(QuestionId),
    #[error("question {question} has no choice {index}")]
    ChoiceOutOfRange { question: QuestionId, index: u8 },
    #[error("answer to {0} matches none of its choices")]
    UnmatchedAnswer(QuestionId),
    #[error("quiz is already complete")]
    Completed,
    #[error("quiz is incomplete: {answered} of {expected} answered")]
    Incomplete { answered: usize, expected: usize },
    #[error(transparent)]
    Share(#[from] ShareCodeError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}
