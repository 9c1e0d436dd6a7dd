//! Implementation of the `plainmark strip` command.

use crate::pipeline;
use anyhow::Result;
use plainmark_ast::strip_tags;
use std::path::Path;

/// Prints the template at `file` the way the parser should receive it.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn execute(file: &Path) -> Result<()> {
    let markup = pipeline::read_source(file)?;
    print!("{}", strip_tags(&markup));
    Ok(())
}
