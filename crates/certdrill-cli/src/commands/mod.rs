pub mod init;
pub mod run;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;

use certdrill_core::{load_config_from, DrillConfig};

/// Exit status when the user's topic or count input was unusable.
pub const EXIT_ABORTED: i32 = 2;

/// Load the config and apply the `--data-dir` override.
pub fn resolve_config(data_dir: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<DrillConfig> {
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(dir) = data_dir {
        config.data_dir = dir;
    }
    Ok(config)
}
