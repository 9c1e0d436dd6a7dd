//! Checks that node ranges can be sliced out of the source text.

use crate::node::Node;
use plainmark_core::{Error, Result, Span};

/// Verifies every node range, including expression fragments, against the
/// source the tree was parsed from.
///
/// # Errors
/// Returns a labelled error for the first node whose range is out of bounds
/// or splits a UTF-8 character.
pub fn validate_spans(root: &Node, source: &str) -> Result<()> {
    if root.span.slice(source).is_none() {
        let label = Span::new(root.span.start.min(source.len()), root.span.end.min(source.len()));
        return Err(Error::Span(
            format!(
                "`{}` node range {}..{} does not fit a {}-byte source",
                root.kind,
                root.span.start,
                root.span.end,
                source.len()
            ),
            label,
        ));
    }

    root.slots
        .iter()
        .flat_map(|(_, child)| child.nodes())
        .try_for_each(|child| validate_spans(child, source))
}
