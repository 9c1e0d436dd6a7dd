//! Template syntax trees for plainmark.
//!
//! The markup parser is external: this crate models the tree it produces,
//! loads it from the parser's JSON output, checks its ranges against the
//! source and walks it. It also holds the textual preprocessing that runs
//! before parsing.

mod json;
pub mod node;
pub mod preprocess;
mod validate;
pub mod walk;

pub use json::parse_json;
pub use node::{Child, Node, NodeId, NodeKind, Slot};
pub use preprocess::strip_tags;
pub use validate::validate_spans;
pub use walk::{TreeVisitor, Walk, walk};
