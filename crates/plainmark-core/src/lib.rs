//! Core types and utilities for plainmark.
//!
//! This crate provides the source span type and the error type shared by the
//! AST loader, the code generator and the command-line interface.

pub mod error;
pub mod span;

pub use error::{Error, Result};
pub use span::Span;
