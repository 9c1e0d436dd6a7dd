//! Utility functions shared across the CLI.

use anyhow::{Context, Result};
use colored::Colorize;
use plainmark_utils::{CONFIG_FILE, Config};
use std::path::PathBuf;
use tracing::debug;

/// Finds the project root and its configuration.
///
/// Outside a project the current directory is the root and the defaults
/// apply.
///
/// # Errors
/// Returns an error if the current directory is unavailable or a
/// plainmark.toml that was found cannot be loaded.
pub fn find_project() -> Result<(Config, PathBuf)> {
    let current_dir = std::env::current_dir().with_context(|| "Failed to get current directory")?;

    match Config::locate(&current_dir) {
        Some(root) => {
            let config = Config::load(root.join(CONFIG_FILE))?;
            debug!(root = %root.display(), "loaded project configuration");
            Ok((config, root))
        }
        None => {
            debug!("no {CONFIG_FILE} found, using defaults");
            Ok((Config::default(), current_dir))
        }
    }
}

/// Prints a right-aligned status message to stderr.
pub fn print_status(status: &str, message: &str) {
    eprintln!("{:>12} {message}", status.green().bold());
}
