//! Random question draws and unique sampling.
//!
//! Sampling is draw-and-reject: each draw is uniform over the whole pool and
//! duplicates are thrown away. Rejections are capped at a multiple of the
//! pool size so an unreachable target fails instead of spinning forever.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::error::SamplingError;
use crate::model::Question;
use crate::parser::{parse_question_file, question_files};

/// Where random questions come from.
pub trait QuestionSource {
    /// Name used in log lines and errors.
    fn name(&self) -> &str;

    /// Number of question records available. Duplicated records count
    /// once per occurrence, so this bounds the distinct count from above.
    fn pool_size(&self) -> Result<usize>;

    /// Draw one question uniformly at random.
    fn draw(&self, rng: &mut dyn RngCore) -> Result<Question>;
}

/// Questions read from a topic directory.
///
/// Files are scanned once up front; files that fail to parse or hold no
/// usable record are skipped. Every draw then picks one of the remaining
/// files uniformly, re-reads it, and picks one of its usable records
/// uniformly.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    topic: String,
    files: Vec<PathBuf>,
    pool: usize,
}

impl DirectorySource {
    pub fn new(topic: &str, dir: &Path) -> Result<Self, SamplingError> {
        let mut files = Vec::new();
        let mut pool = 0;

        for path in question_files(dir)? {
            match usable_questions(&path) {
                Ok(questions) if questions.is_empty() => {
                    tracing::warn!("skipping {}: no usable questions", path.display());
                }
                Ok(questions) => {
                    pool += questions.len();
                    files.push(path);
                }
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }

        if files.is_empty() {
            return Err(SamplingError::NoQuestionFiles {
                topic: topic.to_string(),
                path: dir.to_path_buf(),
            });
        }
        tracing::debug!("topic '{}': {} files, {} questions", topic, files.len(), pool);

        Ok(Self {
            topic: topic.to_string(),
            files,
            pool,
        })
    }

    /// Files that held at least one usable question when scanned.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

/// Parse a question file, keeping the records that convert to questions.
fn usable_questions(path: &Path) -> Result<Vec<Question>> {
    let questions = parse_question_file(path)?
        .into_iter()
        .filter_map(|record| {
            let uuid = record.uuid.clone();
            match record.into_question() {
                Ok(question) => Some(question),
                Err(e) => {
                    tracing::warn!("skipping question {} in {}: {}", uuid, path.display(), e);
                    None
                }
            }
        })
        .collect();
    Ok(questions)
}

impl QuestionSource for DirectorySource {
    fn name(&self) -> &str {
        &self.topic
    }

    fn pool_size(&self) -> Result<usize> {
        Ok(self.pool)
    }

    fn draw(&self, rng: &mut dyn RngCore) -> Result<Question> {
        let file = self
            .files
            .choose(rng)
            .context("topic has no question files")?;
        let mut questions = usable_questions(file)?;
        anyhow::ensure!(
            !questions.is_empty(),
            "question file has no usable questions: {}",
            file.display()
        );
        let index = rng.gen_range(0..questions.len());
        let question = questions.swap_remove(index);
        tracing::debug!(file = %file.display(), uuid = question.uuid(), "drew question");
        Ok(question)
    }
}

/// Questions held in memory.
#[derive(Debug, Clone)]
pub struct MemorySource {
    name: String,
    questions: Vec<Question>,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            name: name.into(),
            questions,
        }
    }
}

impl QuestionSource for MemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn pool_size(&self) -> Result<usize> {
        Ok(self.questions.len())
    }

    fn draw(&self, rng: &mut dyn RngCore) -> Result<Question> {
        self.questions
            .choose(rng)
            .cloned()
            .context("no questions to draw from")
    }
}

/// Draw from `source` until `collected` holds `target` distinct questions.
///
/// Questions already in `collected` count towards the target. Fails with
/// [`SamplingError::PoolExhausted`] when `target` exceeds the pool, or when
/// more than `draw_factor * pool_size` draws were rejected as duplicates.
pub fn sample_unique<S: QuestionSource + ?Sized>(
    source: &S,
    collected: &mut Vec<Question>,
    target: usize,
    rng: &mut dyn RngCore,
    draw_factor: usize,
) -> Result<(), SamplingError> {
    if collected.len() >= target {
        return Ok(());
    }

    let pool = source.pool_size()?;
    let exhausted = |collected: usize, attempts: usize| SamplingError::PoolExhausted {
        topic: source.name().to_string(),
        requested: target,
        collected,
        attempts,
    };
    if target > pool {
        return Err(exhausted(collected.len(), 0));
    }

    let max_rejections = pool.saturating_mul(draw_factor.max(1));
    let mut attempts = 0;
    let mut rejected = 0;

    while collected.len() < target {
        let question = source.draw(rng)?;
        attempts += 1;

        if collected.contains(&question) {
            rejected += 1;
            tracing::debug!(uuid = question.uuid(), rejected, "duplicate draw rejected");
            if rejected > max_rejections {
                return Err(exhausted(collected.len(), attempts));
            }
            continue;
        }
        collected.push(question);
    }

    tracing::info!(
        "sampled {} questions from '{}' in {} draws",
        collected.len(),
        source.name(),
        attempts
    );
    Ok(())
}
