//! Implementation of the `plainmark generate` command.

use crate::session::Session;
use crate::utils::find_project;
use anyhow::Result;
use std::path::Path;

/// Executes the `generate` command for one template.
///
/// # Errors
/// Returns an error if the inputs cannot be read, the tree is rejected, or
/// the output cannot be written.
pub fn execute(file: &Path, ast: &Path, out: Option<&Path>) -> Result<()> {
    let (config, project_root) = find_project()?;
    let session = Session::new(project_root, config);
    session.generate(file, ast, out)?;
    Ok(())
}
