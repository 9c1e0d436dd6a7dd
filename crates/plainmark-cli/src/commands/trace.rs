//! Implementation of the `plainmark trace` command.

use crate::session::Session;
use crate::utils::find_project;
use anyhow::Result;
use std::path::Path;

/// Prints the traversal listing for one template.
///
/// # Errors
/// Returns an error if the inputs cannot be read or the tree is rejected.
pub fn execute(file: &Path, ast: &Path) -> Result<()> {
    let (config, project_root) = find_project()?;
    let session = Session::new(project_root, config);
    println!("{}", session.trace(file, ast)?);
    Ok(())
}
