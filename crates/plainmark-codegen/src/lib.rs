//! Pseudocode generation for markup templates.
//!
//! This crate turns a parsed template tree into plain statements that keep
//! the template's control-flow shape and every identifier it reads, so a
//! static analyzer can check the template as ordinary code.

mod buffer;
mod generator;
mod trace;
mod visitors;

pub use buffer::{CodeBuffer, Fragment, INDENT_WIDTH};
pub use generator::{generate, generate_fragment};
pub use trace::trace;

use plainmark_ast::{Node, strip_tags, validate_spans};
use plainmark_core::Result;

/// Preprocesses `markup`, parses it with `parse` and generates code for the
/// resulting tree.
///
/// `parse` stands in for the external markup parser; it receives the
/// stripped text, and the tree it returns must index into that text.
///
/// # Errors
/// Returns the parser's error unchanged, or a span error when the tree does
/// not fit the stripped text.
pub fn generate_template_code<F>(markup: &str, parse: F) -> Result<String>
where
    F: FnOnce(&str) -> Result<Node>,
{
    let template = strip_tags(markup);
    let root = parse(&template)?;
    validate_spans(&root, &template)?;
    Ok(generate(&template, &root))
}

/// Preprocesses and parses `markup` like [`generate_template_code`] and
/// returns the traversal listing instead of code.
///
/// # Errors
/// Returns the parser's error unchanged.
pub fn print_tree<F>(markup: &str, parse: F) -> Result<String>
where
    F: FnOnce(&str) -> Result<Node>,
{
    let template = strip_tags(markup);
    let root = parse(&template)?;
    Ok(trace(&root))
}
