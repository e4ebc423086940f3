//! Error types for answer selection and question sampling.
//!
//! Loading and parsing failures travel as `anyhow::Error` with context;
//! these enums cover the failures callers need to tell apart.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while applying a line of answer input to a question.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// A token could not be parsed as an integer.
    #[error("malformed answer input: '{token}'")]
    Malformed { token: String },

    /// A token named an answer outside `1..=available`.
    #[error("invalid answer selected: {choice} (expected 1-{available})")]
    OutOfRange { choice: i64, available: usize },
}

/// Errors raised while collecting unique questions for a topic.
#[derive(Debug, Error)]
pub enum SamplingError {
    /// The topic directory holds no question files.
    #[error("topic '{topic}' has no question files in {}", .path.display())]
    NoQuestionFiles { topic: String, path: PathBuf },

    /// Not enough distinct questions could be collected.
    #[error(
        "topic '{topic}' ran out of questions: requested {requested}, \
         collected {collected} after {attempts} draws"
    )]
    PoolExhausted {
        topic: String,
        requested: usize,
        collected: usize,
        attempts: usize,
    },

    /// A draw failed to read or parse its question file.
    #[error(transparent)]
    Source(#[from] anyhow::Error),
}

impl SamplingError {
    /// Returns `true` if the topic simply cannot supply enough questions.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, SamplingError::PoolExhausted { .. })
    }
}
