//! Source span tracking for template nodes.

use serde::{Deserialize, Serialize};

/// A half-open byte range `[start, end)` into a source buffer.
///
/// The default span is empty and slices every source, which is what nodes
/// absent from the source carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the text covered by this span, or `None` when the range is
    /// out of bounds or does not fall on character boundaries.
    #[must_use]
    pub fn slice(self, source: &str) -> Option<&str> {
        source.get(self.start..self.end)
    }
}
