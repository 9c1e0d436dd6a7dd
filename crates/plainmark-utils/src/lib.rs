//! Shared utilities for Plainmark tooling.

pub mod config;

pub use config::{CONFIG_FILE, Config, OutputConfig, PreprocessConfig};
