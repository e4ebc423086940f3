//! Core data model types for certdrill.
//!
//! A [`Question`] owns its [`Answer`]s. The only state that changes after a
//! question is loaded is which answers the user selected.

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use crate::error::SelectionError;

/// A possible answer to a question, remembering whether the user picked it.
#[derive(Debug, Clone)]
pub struct Answer {
    value: String,
    correct: bool,
    selected: bool,
}

impl Answer {
    pub fn new(value: impl Into<String>, correct: bool) -> Self {
        Self {
            value: value.into(),
            correct,
            selected: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_correct(&self) -> bool {
        self.correct
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Mark this answer as chosen. Selecting twice is harmless.
    pub fn select(&mut self) {
        self.selected = true;
    }
}

// Answers are compared by their text only.
impl PartialEq for Answer {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Answer {}

impl Hash for Answer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

/// A question with its answers in display order.
#[derive(Debug, Clone)]
pub struct Question {
    uuid: String,
    question: String,
    answers: Vec<Answer>,
}

impl Question {
    /// Build a question. Newlines in `text` are folded into single spaces.
    pub fn new(uuid: impl Into<String>, text: &str, answers: Vec<Answer>) -> Self {
        Self {
            uuid: uuid.into(),
            question: normalize_text(text),
            answers,
        }
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn text(&self) -> &str {
        &self.question
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Answers flagged correct, in display order.
    pub fn correct_answers(&self) -> Vec<&Answer> {
        self.answers.iter().filter(|a| a.correct).collect()
    }

    /// Answers the user selected, in display order.
    pub fn selected_answers(&self) -> Vec<&Answer> {
        self.answers.iter().filter(|a| a.selected).collect()
    }

    /// Whether the selected answers are exactly the correct ones.
    ///
    /// Order does not matter; a missing, extra or wrong pick fails.
    pub fn is_answered_correctly(&self) -> bool {
        let correct: BTreeSet<&str> = self.correct_answers().iter().map(|a| a.value()).collect();
        let selected: BTreeSet<&str> = self.selected_answers().iter().map(|a| a.value()).collect();
        correct == selected
    }

    /// Apply 1-based answer tokens such as `["1", " 3"]`.
    ///
    /// Every token is parsed and range-checked before any answer is marked,
    /// so a failing call leaves the question untouched. Returns the 0-based
    /// indices that were marked, in token order.
    pub fn select_answers<S: AsRef<str>>(
        &mut self,
        tokens: &[S],
    ) -> Result<Vec<usize>, SelectionError> {
        let indices = tokens
            .iter()
            .map(|token| self.resolve_token(token.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        for &index in &indices {
            self.answers[index].select();
        }
        Ok(indices)
    }

    fn resolve_token(&self, token: &str) -> Result<usize, SelectionError> {
        let trimmed = token.trim();
        let choice: i64 = trimmed.parse().map_err(|_| SelectionError::Malformed {
            token: trimmed.to_string(),
        })?;

        if choice < 1 || choice > self.answers.len() as i64 {
            return Err(SelectionError::OutOfRange {
                choice,
                available: self.answers.len(),
            });
        }
        Ok((choice - 1) as usize)
    }
}

// Two questions are the same question when they share a uuid.
impl PartialEq for Question {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl Eq for Question {}

fn normalize_text(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
