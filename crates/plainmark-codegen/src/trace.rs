//! Diagnostic listing of traversal order.

use crate::buffer::INDENT_WIDTH;
use plainmark_ast::{Node, Slot, TreeVisitor, Walk, walk};

#[derive(Default)]
struct Tracer {
    lines: Vec<String>,
    depth: usize,
}

impl Tracer {
    fn push(&mut self, event: &str, node: &Node, slot: Option<&Slot>) {
        let indent = " ".repeat(self.depth * INDENT_WIDTH);
        let slot = slot.map_or("root", Slot::as_str);
        self.lines.push(format!("{indent} {event} {} ({slot})", node.kind));
    }
}

impl TreeVisitor for Tracer {
    fn enter(&mut self, node: &Node, _parent: Option<&Node>, slot: Option<&Slot>) -> Walk {
        self.push("BEGIN", node, slot);
        self.depth += 1;
        Walk::Continue
    }

    fn leave(&mut self, node: &Node, _parent: Option<&Node>, slot: Option<&Slot>) {
        self.depth = self.depth.saturating_sub(1);
        self.push("END", node, slot);
    }
}

/// Lists every node the generator would visit, with the slot it was reached
/// through, as indented `BEGIN`/`END` pairs.
pub fn trace(root: &Node) -> String {
    let mut tracer = Tracer::default();
    walk(root, &mut tracer);
    tracer.lines.join("\n")
}
