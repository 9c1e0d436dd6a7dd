//! Per-invocation project context.

use crate::pipeline;
use crate::utils::print_status;
use anyhow::{Context, Result};
use plainmark_utils::Config;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;

/// Runs pipelines for templates of one project.
pub struct Session {
    project_root: PathBuf,
    config: Config,
}

impl Session {
    #[must_use]
    pub fn new(project_root: PathBuf, config: Config) -> Self {
        Self {
            project_root,
            config,
        }
    }

    /// Generates code for the template at `file` from the parser output at `ast`.
    ///
    /// # Errors
    /// Returns an error if either file cannot be read or the tree is rejected.
    pub fn render(&self, file: &Path, ast: &Path) -> Result<String> {
        let markup = pipeline::read_source(file)?;
        let json = pipeline::read_source(ast)?;
        pipeline::generate_pipeline(&markup, &json, &file.display().to_string(), &self.config)
    }

    /// Where generated code for `file` goes: `out` if given, the configured
    /// output directory if writing is enabled, otherwise stdout (`None`).
    #[must_use]
    pub fn output_path(&self, file: &Path, out: Option<&Path>) -> Option<PathBuf> {
        match out {
            Some(path) => Some(path.to_path_buf()),
            None if self.config.output.write => {
                Some(self.config.output.path_for(&self.project_root, file))
            }
            None => None,
        }
    }

    /// Generates code and writes it to its output, returning the written path.
    ///
    /// # Errors
    /// Returns an error if generation fails or the output cannot be written.
    pub fn generate(&self, file: &Path, ast: &Path, out: Option<&Path>) -> Result<Option<PathBuf>> {
        let start = Instant::now();

        let code = self.render(file, ast)?;
        let written = match self.output_path(file, out) {
            Some(path) => {
                write_output(&path, &code)?;
                print_status("Generated", &path.display().to_string());
                Some(path)
            }
            None => {
                println!("{code}");
                None
            }
        };

        print_finished(file, start.elapsed());
        Ok(written)
    }

    /// Returns the traversal listing for `file`.
    ///
    /// # Errors
    /// Returns an error if either file cannot be read or the tree is rejected.
    pub fn trace(&self, file: &Path, ast: &Path) -> Result<String> {
        let markup = pipeline::read_source(file)?;
        let json = pipeline::read_source(ast)?;
        pipeline::trace_pipeline(&markup, &json, &file.display().to_string(), &self.config)
    }
}

fn write_output(path: &Path, code: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, format!("{code}\n"))
        .with_context(|| format!("Failed to write {}", path.display()))
}

fn print_finished(file: &Path, duration: Duration) {
    info!(file = %file.display(), elapsed = ?duration, "generation finished");
    print_status(
        "Finished",
        &format!("{} in {:.2}s", file.display(), duration.as_secs_f64()),
    );
}
