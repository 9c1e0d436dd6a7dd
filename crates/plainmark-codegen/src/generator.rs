//! Tree walk driving statement emission.

use crate::buffer::{CodeBuffer, Fragment};
use crate::visitors;
use plainmark_ast::{Node, Slot, TreeVisitor, Walk, walk};
use tracing::{debug, trace};

/// Walker state for one invocation.
struct Generator<'src> {
    buffer: CodeBuffer<'src>,
}

impl TreeVisitor for Generator<'_> {
    fn enter(&mut self, node: &Node, parent: Option<&Node>, _slot: Option<&Slot>) -> Walk {
        trace!(kind = %node.kind, start = node.span.start, level = self.buffer.level(), "enter");
        visitors::visit(&mut self.buffer, node, parent)
    }

    fn leave(&mut self, node: &Node, _parent: Option<&Node>, _slot: Option<&Slot>) {
        self.buffer.close_block(Some(node));
    }
}

/// Generates plain statements for the tree rooted at `root`.
///
/// `source` is the text the node ranges index into. Synthetic names are
/// numbered from 0, so identical input always yields identical output.
///
/// # Examples
/// ```
/// use plainmark_ast::{Node, NodeKind, Slot};
/// use plainmark_codegen::generate;
/// use plainmark_core::Span;
///
/// let source = "{count}";
/// let tag = Node::new(NodeKind::MustacheTag, Span::new(0, 7)).with_child(
///     Slot::Expression,
///     Node::new(NodeKind::from_tag("Identifier"), Span::new(1, 6)),
/// );
/// assert_eq!(generate(source, &tag), "let var$$0 = count;");
/// ```
pub fn generate(source: &str, root: &Node) -> String {
    generate_fragment(source, root, 0).text()
}

/// Generates statements for `root` with synthetic names numbered from `seed`.
///
/// Used for sub-trees whose text is spliced into an enclosing invocation; the
/// returned counter lets the caller continue numbering without reuse.
pub fn generate_fragment(source: &str, root: &Node, seed: usize) -> Fragment {
    let mut generator = Generator {
        buffer: CodeBuffer::with_seed(source, seed),
    };
    walk(root, &mut generator);

    let fragment = generator.buffer.into_fragment();
    debug!(
        root = %root.kind,
        lines = fragment.lines.len(),
        names = fragment.next_counter - seed,
        "generated template code"
    );
    fragment
}
