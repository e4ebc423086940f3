//! Topics: named question banks and the per-session question loop.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::RngCore;

use crate::console::{Console, Tone};
use crate::error::SamplingError;
use crate::model::Question;
use crate::report::{ReportWidths, Scorecard};
use crate::sampler::{sample_unique, DirectorySource, QuestionSource};

/// Separator between answer numbers on one input line.
pub const ANSWER_SEPARATOR: char = ',';

/// Shown when a line of answer input is rejected.
pub const SKIP_MESSAGE: &str = "Invalid input. Skipping...";

/// A named question bank and the questions drawn from it this session.
#[derive(Debug, Clone)]
pub struct Topic {
    name: String,
    path: PathBuf,
    questions: Vec<Question>,
}

impl Topic {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            questions: Vec::new(),
        }
    }

    /// One topic per subdirectory of `root`, named after the directory in
    /// lowercase and sorted by name.
    pub fn list_topics(root: &Path) -> Result<Vec<Topic>> {
        if !root.is_dir() {
            anyhow::bail!("data directory not found: {}", root.display());
        }

        let mut topics = Vec::new();
        for entry in std::fs::read_dir(root)
            .with_context(|| format!("failed to read data directory: {}", root.display()))?
        {
            let path = entry?.path();
            if !path.is_dir() {
                continue;
            }
            let Some(name) = path.file_name() else {
                continue;
            };
            let name = name.to_string_lossy().to_lowercase();
            topics.push(Topic::new(name, path));
        }
        topics.sort_by(|a, b| a.name.cmp(&b.name));

        tracing::debug!("found {} topics in {}", topics.len(), root.display());
        Ok(topics)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Questions collected so far, in sampling order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Draw questions from this topic's files until `target` distinct ones
    /// have been collected.
    pub fn load_topic(
        &mut self,
        target: usize,
        rng: &mut dyn RngCore,
        draw_factor: usize,
    ) -> Result<(), SamplingError> {
        let source = DirectorySource::new(&self.name, &self.path)?;
        self.load_from(&source, target, rng, draw_factor)
    }

    /// Like [`Topic::load_topic`], drawing from any [`QuestionSource`].
    pub fn load_from<S: QuestionSource + ?Sized>(
        &mut self,
        source: &S,
        target: usize,
        rng: &mut dyn RngCore,
        draw_factor: usize,
    ) -> Result<(), SamplingError> {
        sample_unique(source, &mut self.questions, target, rng, draw_factor)
    }

    /// Ask every question in turn and record the answers.
    ///
    /// Bad input for a question is reported and that question is left as
    /// it was; the loop always moves on to the next question.
    pub fn show_questions(&mut self, console: &mut dyn Console) -> io::Result<()> {
        for (i, question) in self.questions.iter_mut().enumerate() {
            console.show_question(i + 1, question)?;

            let line = console.answer_prompt()?;
            let tokens: Vec<&str> = line.split(ANSWER_SEPARATOR).collect();
            match question.select_answers(tokens.as_slice()) {
                Ok(marked) => {
                    for index in marked {
                        console.acknowledge(&question.answers()[index])?;
                    }
                }
                Err(e) => {
                    tracing::debug!(uuid = question.uuid(), "rejected answer input: {e}");
                    console.notice(SKIP_MESSAGE, Tone::Failure)?;
                }
            }
        }
        Ok(())
    }

    /// Score the session and hand the report to the console.
    pub fn show_results(
        &self,
        console: &mut dyn Console,
        widths: ReportWidths,
    ) -> io::Result<Scorecard> {
        let scorecard = Scorecard::build(&self.questions, widths);
        console.show_report(&scorecard)?;
        Ok(scorecard)
    }
}
