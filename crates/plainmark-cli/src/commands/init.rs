//! Implementation of the `plainmark init` command.

use crate::utils::print_status;
use anyhow::{Context, Result};
use plainmark_utils::{CONFIG_FILE, Config};
use std::path::Path;

/// Executes the `init` command in the current directory.
///
/// # Errors
/// Returns an error if plainmark.toml already exists or cannot be written.
pub fn execute() -> Result<()> {
    let current_dir = std::env::current_dir().with_context(|| "Failed to get current directory")?;
    execute_in(&current_dir)?;
    Ok(())
}

/// Writes a default plainmark.toml into `dir` and returns its path.
///
/// # Errors
/// Returns an error if plainmark.toml already exists in `dir` or cannot be written.
pub fn execute_in(dir: &Path) -> Result<std::path::PathBuf> {
    let config_path = dir.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("{CONFIG_FILE} already exists in {}", dir.display());
    }

    Config::default().save(&config_path)?;
    print_status("Created", &config_path.display().to_string());

    Ok(config_path)
}
