//! Scoring and persona classification core.

pub mod answers;
pub mod catalog;
pub mod classifier;
pub mod narrative;
pub mod result;
pub mod scoring;
pub mod share;

pub use answers::{Answer, Difficulty, QuestionId, TagTally};
pub use catalog::{Level, LevelDescriptor, Tag, TagProfile};
pub use classifier::{ClassifierConfig, DnaClassification, DnaPattern, PersonaClassifier};
pub use narrative::{generate_narrative, Narrative};
pub use result::{DiagnosisEngine, PersonalizedResult};
pub use scoring::{compute_tag_scores, ScoringError, TagScore, TagScoreMap};
pub use share::{ShareCode, ShareCodeError};
