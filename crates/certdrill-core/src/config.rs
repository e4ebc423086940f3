//! Drill configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "CERTDRILL_DATA_DIR";

/// Top-level certdrill configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillConfig {
    /// Directory holding one subdirectory per topic.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Banner shown above the topic list.
    #[serde(default = "default_title")]
    pub title: String,
    /// Characters of question text shown in the results table.
    #[serde(default = "default_question_width")]
    pub question_width: usize,
    /// Characters of each correct answer shown in the results table.
    #[serde(default = "default_answer_width")]
    pub answer_width: usize,
    /// Rejected draws allowed per question in the pool before giving up.
    #[serde(default = "default_draw_factor")]
    pub draw_factor: usize,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
fn default_title() -> String {
    "CERTIFICATE PRACTICE".to_string()
}
fn default_question_width() -> usize {
    75
}
fn default_answer_width() -> usize {
    35
}
fn default_draw_factor() -> usize {
    50
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            title: default_title(),
            question_width: default_question_width(),
            answer_width: default_answer_width(),
            draw_factor: default_draw_factor(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `certdrill.toml` in the current directory
/// 2. `~/.config/certdrill/config.toml`
///
/// `CERTDRILL_DATA_DIR` overrides `data_dir` from any file.
pub fn load_config_from(path: Option<&Path>) -> Result<DrillConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("certdrill.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<DrillConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => DrillConfig::default(),
    };

    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            config.data_dir = PathBuf::from(dir);
        }
    }

    anyhow::ensure!(config.question_width > 0, "question_width must be at least 1");
    anyhow::ensure!(config.answer_width > 0, "answer_width must be at least 1");
    anyhow::ensure!(config.draw_factor > 0, "draw_factor must be at least 1");

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("certdrill"))
}
