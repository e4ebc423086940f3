//! The interactive drill (no subcommand).

use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use certdrill_core::{run_session, SessionOutcome, Topic};

use super::{resolve_config, EXIT_ABORTED};
use crate::terminal::TerminalConsole;

pub fn execute(
    data_dir: Option<PathBuf>,
    config_path: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<i32> {
    let config = resolve_config(data_dir, config_path)?;

    let mut topics = Topic::list_topics(&config.data_dir)?;
    anyhow::ensure!(
        !topics.is_empty(),
        "no topics found in {}",
        config.data_dir.display()
    );

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut console = TerminalConsole::stdio();

    let outcome = run_session(&mut topics, &mut console, &mut rng, &config)
        .context("drill session failed")?;

    match outcome {
        SessionOutcome::Completed(card) => {
            tracing::info!("session finished: {}/{} correct", card.correct, card.total());
            Ok(0)
        }
        SessionOutcome::Aborted => Ok(EXIT_ABORTED),
    }
}
