//! Error types and result aliases for plainmark.

use crate::Span;
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Main error type for plainmark.
///
/// The transform itself never fails; these cover loading its input.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error("Malformed template AST: {0}")]
    #[diagnostic(code(plainmark::ast))]
    Ast(String),

    #[error("{0}")]
    #[diagnostic(code(plainmark::span))]
    Span(String, #[label("here")] Span),
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::from(span.start..span.end)
    }
}

/// Result type alias using the plainmark Error type.
pub type Result<T> = std::result::Result<T, Error>;
