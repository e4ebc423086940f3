//! The `certdrill validate` command.

use std::path::PathBuf;

use anyhow::Result;

use certdrill_core::parser::validate_topic;
use certdrill_core::Topic;

use super::resolve_config;

pub fn execute(data_dir: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = resolve_config(data_dir, config_path)?;
    let topics = Topic::list_topics(&config.data_dir)?;

    if topics.is_empty() {
        println!("No topics found in {}", config.data_dir.display());
        return Ok(());
    }

    let mut total_warnings = 0;

    for topic in &topics {
        let check = validate_topic(topic.path())?;
        println!(
            "Topic: {} ({} files, {} questions)",
            topic.name(),
            check.files,
            check.distinct
        );

        for w in &check.warnings {
            let mut prefix = String::from(" ");
            if let Some(file) = w.file.as_ref().and_then(|f| f.file_name()) {
                prefix.push_str(&format!(" [{}]", file.to_string_lossy()));
            }
            if let Some(uuid) = &w.uuid {
                prefix.push_str(&format!(" [{uuid}]"));
            }
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += check.warnings.len();
    }

    if total_warnings == 0 {
        println!("All topics valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
