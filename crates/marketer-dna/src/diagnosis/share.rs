use super::answers::QuestionId;
use std::fmt;
use std::str::FromStr;

const SYMBOLS: [char; 4] = ['A', 'N', 'p', 'y'];
const SEPARATOR: char = ':';
const ID_SEPARATOR: char = ',';

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShareCodeError {
    #[error("share code is empty")]
    Empty,
    #[error("share code is missing the ':' separator")]
    MissingSeparator,
    #[error("unknown choice symbol '{0}'")]
    UnknownSymbol(char),
    #[error("choice index {0} is outside 0..=3")]
    IndexOutOfRange(u8),
    #[error("invalid question id '{0}'")]
    InvalidQuestionId(String),
    #[error("{choices} choices do not match {questions} question ids")]
    LengthMismatch { choices: usize, questions: usize },
}

/// Compact, reversible record of which choice was taken for each question.
///
/// Textual form is `<symbols>:<id>,<id>,...` where each symbol encodes a choice index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareCode {
    choice_indices: Vec<u8>,
    question_ids: Vec<QuestionId>,
}

impl ShareCode {
    pub fn new(
        choice_indices: Vec<u8>,
        question_ids: Vec<QuestionId>,
    ) -> Result<Self, ShareCodeError> {
        if choice_indices.is_empty() && question_ids.is_empty() {
            return Err(ShareCodeError::Empty);
        }
        if let Some(index) = choice_indices
            .iter()
            .copied()
            .find(|index| usize::from(*index) >= SYMBOLS.len())
        {
            return Err(ShareCodeError::IndexOutOfRange(index));
        }
        if let Some(id) = question_ids.iter().find(|id| !is_valid_id(id.as_str())) {
            return Err(ShareCodeError::InvalidQuestionId(id.to_string()));
        }
        if choice_indices.len() != question_ids.len() {
            return Err(ShareCodeError::LengthMismatch {
                choices: choice_indices.len(),
                questions: question_ids.len(),
            });
        }

        Ok(Self {
            choice_indices,
            question_ids,
        })
    }

    pub fn choice_indices(&self) -> &[u8] {
        &self.choice_indices
    }

    pub fn question_ids(&self) -> &[QuestionId] {
        &self.question_ids
    }

    /// Pairs of question id and chosen index, in answer order.
    pub fn entries(&self) -> impl Iterator<Item = (&QuestionId, u8)> + '_ {
        self.question_ids
            .iter()
            .zip(self.choice_indices.iter().copied())
    }

    pub fn encode(&self) -> String {
        self.to_string()
    }

    pub fn decode(raw: &str) -> Result<Self, ShareCodeError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ShareCodeError::Empty);
        }

        let (symbols, ids) = raw
            .split_once(SEPARATOR)
            .ok_or(ShareCodeError::MissingSeparator)?;

        let choice_indices = symbols
            .chars()
            .map(|symbol| {
                SYMBOLS
                    .iter()
                    .position(|candidate| *candidate == symbol)
                    .map(|index| index as u8)
                    .ok_or(ShareCodeError::UnknownSymbol(symbol))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let question_ids = if ids.is_empty() {
            Vec::new()
        } else {
            ids.split(ID_SEPARATOR).map(QuestionId::from).collect()
        };

        Self::new(choice_indices, question_ids)
    }
}

fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && !id.contains(SEPARATOR) && !id.contains(ID_SEPARATOR)
}

impl fmt::Display for ShareCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in &self.choice_indices {
            write!(f, "{}", SYMBOLS[usize::from(*index)])?;
        }
        write!(f, "{SEPARATOR}")?;
        for (position, id) in self.question_ids.iter().enumerate() {
            if position > 0 {
                write!(f, "{ID_SEPARATOR}")?;
            }
            f.write_str(id.as_str())?;
        }
        Ok(())
    }
}

impl FromStr for ShareCode {
    type Err = ShareCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}
