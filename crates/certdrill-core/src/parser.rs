//! YAML question file parser.
//!
//! A topic directory holds one or more `.yaml`/`.yml` files shaped like:
//!
//! ```yaml
//! questions:
//!   - uuid: 5a8f...
//!     question: Which method returns the request path?
//!     answers:
//!       - { value: getPathInfo(), correct: true }
//!       - { value: getUri(), correct: false }
//! ```
//!
//! Unknown keys are ignored so banks can carry extra metadata.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Answer, Question};

/// Intermediate YAML structure for a question file.
#[derive(Debug, Deserialize)]
struct YamlQuestionFile {
    #[serde(default)]
    questions: Vec<QuestionRecord>,
}

/// One question as stored in a question file.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRecord {
    #[serde(deserialize_with = "scalar_text")]
    pub uuid: String,
    #[serde(deserialize_with = "scalar_text")]
    pub question: String,
    #[serde(default)]
    pub answers: Vec<AnswerRecord>,
}

/// One answer as stored in a question file.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerRecord {
    #[serde(deserialize_with = "scalar_text")]
    pub value: String,
    #[serde(default)]
    pub correct: bool,
}

impl QuestionRecord {
    /// Convert into a [`Question`]. Records without answers are rejected.
    pub fn into_question(self) -> Result<Question> {
        anyhow::ensure!(
            !self.answers.is_empty(),
            "question {} has no answers",
            self.uuid
        );
        let answers = self
            .answers
            .into_iter()
            .map(|a| Answer::new(a.value, a.correct))
            .collect();
        Ok(Question::new(self.uuid, &self.question, answers))
    }
}

/// Bank authors write bare numbers and booleans as answer values; keep
/// them as text.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

fn scalar_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(s) => s,
        Scalar::Int(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
    })
}

/// Parse a single question file.
pub fn parse_question_file(path: &Path) -> Result<Vec<QuestionRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question file: {}", path.display()))?;

    parse_question_file_str(&content, path)
}

/// Parse question file content (useful for testing).
pub fn parse_question_file_str(content: &str, source_path: &Path) -> Result<Vec<QuestionRecord>> {
    let parsed: YamlQuestionFile = serde_yaml::from_str(content)
        .with_context(|| format!("failed to parse YAML: {}", source_path.display()))?;
    Ok(parsed.questions)
}

fn is_question_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext == "yaml" || ext == "yml")
}

/// List the question files of a topic directory, sorted by path.
pub fn question_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let path = entry?.path();
        if is_question_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// A warning from question bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The file the warning refers to.
    pub file: Option<PathBuf>,
    /// The question uuid (if applicable).
    pub uuid: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Counts and warnings for one topic directory.
#[derive(Debug, Clone, Default)]
pub struct TopicCheck {
    pub files: usize,
    pub records: usize,
    pub distinct: usize,
    pub warnings: Vec<ValidationWarning>,
}

/// Validate every question file in a topic directory.
///
/// Unreadable or malformed files become warnings rather than errors.
pub fn validate_topic(dir: &Path) -> Result<TopicCheck> {
    let files = question_files(dir)?;
    let mut check = TopicCheck {
        files: files.len(),
        ..Default::default()
    };

    if files.is_empty() {
        check.warnings.push(ValidationWarning {
            file: None,
            uuid: None,
            message: "no question files found".into(),
        });
        return Ok(check);
    }

    let mut seen = HashSet::new();
    for file in &files {
        let records = match parse_question_file(file) {
            Ok(records) => records,
            Err(e) => {
                check.warnings.push(ValidationWarning {
                    file: Some(file.clone()),
                    uuid: None,
                    message: format!("{e:#}"),
                });
                continue;
            }
        };

        if records.is_empty() {
            check.warnings.push(ValidationWarning {
                file: Some(file.clone()),
                uuid: None,
                message: "file contains no questions".into(),
            });
        }

        for record in &records {
            check.records += 1;
            let mut warn = |message: String| {
                check.warnings.push(ValidationWarning {
                    file: Some(file.clone()),
                    uuid: Some(record.uuid.clone()),
                    message,
                });
            };

            if !seen.insert(record.uuid.clone()) {
                warn(format!("duplicate question uuid: {}", record.uuid));
            }
            if record.question.trim().is_empty() {
                warn("question text is empty".into());
            }
            if record.answers.is_empty() {
                warn("question has no answers".into());
            } else if !record.answers.iter().any(|a| a.correct) {
                warn("question has no correct answer".into());
            }
        }
    }
    check.distinct = seen.len();

    Ok(check)
}
