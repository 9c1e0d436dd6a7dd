//! Configuration file handling for Plainmark projects.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "plainmark.toml";

/// Represents the plainmark.toml configuration file.
///
/// Every table and field is optional; missing values take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub preprocess: PreprocessConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Remove comments, styles and scripts before parsing.
    pub strip_tags: bool,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self { strip_tags: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for written output, relative to the project root.
    pub dir: PathBuf,
    pub extension: String,
    /// Write generated code to `dir` when no explicit output path is given.
    pub write: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("target/plainmark"),
            extension: "ts".to_string(),
            write: false,
        }
    }
}

impl OutputConfig {
    /// Output path for the template at `input` within `project_root`.
    #[must_use]
    pub fn path_for(&self, project_root: &Path, input: &Path) -> PathBuf {
        let stem = input.file_stem().unwrap_or(input.as_os_str());
        let file_name = format!("{}.{}", stem.to_string_lossy(), self.extension);
        project_root.join(&self.dir).join(file_name)
    }
}

impl Config {
    /// Loads configuration from a plainmark.toml file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.as_ref().display()))
    }

    /// Saves configuration to a plainmark.toml file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize configuration")?;

        fs::write(path.as_ref(), contents)
            .with_context(|| format!("Failed to write {}", path.as_ref().display()))
    }

    /// Returns the nearest directory at or above `start` holding plainmark.toml.
    #[must_use]
    pub fn locate(start: impl AsRef<Path>) -> Option<PathBuf> {
        start
            .as_ref()
            .ancestors()
            .find(|dir| dir.join(CONFIG_FILE).is_file())
            .map(Path::to_path_buf)
    }
}
