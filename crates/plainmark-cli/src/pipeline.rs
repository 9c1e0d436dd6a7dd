//! Generation pipeline stages.

use anyhow::{Context, Result};
use miette::NamedSource;
use plainmark_ast::{Node, parse_json, strip_tags, validate_spans};
use plainmark_codegen::{generate, trace};
use plainmark_utils::Config;
use std::path::Path;

/// Reads a template or AST file.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Applies the configured textual preprocessing.
#[must_use]
pub fn preprocess(markup: &str, config: &Config) -> String {
    if config.preprocess.strip_tags {
        strip_tags(markup)
    } else {
        markup.to_string()
    }
}

/// Loads the parser's JSON output.
///
/// # Errors
/// Returns an error if the document is not a well-formed template tree.
pub fn load_ast(json: &str, name: &str) -> Result<Node> {
    parse_json(json).map_err(|e| {
        let report = miette::Report::new(e).with_source_code(NamedSource::new(name, json.to_string()));
        eprintln!("{report:?}");
        anyhow::anyhow!("Loading the template tree failed")
    })
}

/// Checks that the tree indexes into the preprocessed template.
///
/// # Errors
/// Returns an error if a node range does not fit `template`.
pub fn validate(root: &Node, template: &str, name: &str) -> Result<()> {
    validate_spans(root, template).map_err(|e| {
        let report =
            miette::Report::new(e).with_source_code(NamedSource::new(name, template.to_string()));
        eprintln!("{report:?}");
        anyhow::anyhow!("Template tree does not match {name}")
    })
}

/// Runs the complete pipeline and returns generated code.
///
/// # Errors
/// Returns an error if any stage fails.
pub fn generate_pipeline(markup: &str, json: &str, name: &str, config: &Config) -> Result<String> {
    let template = preprocess(markup, config);
    let root = load_ast(json, name)?;
    validate(&root, &template, name)?;
    Ok(generate(&template, &root))
}

/// Runs the pipeline up to validation and returns the traversal listing.
///
/// # Errors
/// Returns an error if any stage fails.
pub fn trace_pipeline(markup: &str, json: &str, name: &str, config: &Config) -> Result<String> {
    let template = preprocess(markup, config);
    let root = load_ast(json, name)?;
    validate(&root, &template, name)?;
    Ok(trace(&root))
}
