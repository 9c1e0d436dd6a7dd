//! Depth-first traversal over template trees.
//!
//! Implement [`TreeVisitor`] for a pass and hand it to [`walk`]. Children are
//! visited slot by slot in the order the parser emitted them. Nodes reached
//! through a fragment slot (see [`Slot::is_fragment`]) are skipped entirely:
//! they are neither entered nor left.

use crate::node::{Node, Slot};

/// Signal returned from [`TreeVisitor::enter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    /// Descend into the node's slots.
    Continue,
    /// Do not descend; `leave` is still called for the node.
    Skip,
}

/// Callbacks invoked by [`walk`].
///
/// `parent` is the structural parent and `slot` the slot the node was reached
/// through; both are `None` for the root.
pub trait TreeVisitor {
    fn enter(&mut self, _node: &Node, _parent: Option<&Node>, _slot: Option<&Slot>) -> Walk {
        Walk::Continue
    }

    fn leave(&mut self, _node: &Node, _parent: Option<&Node>, _slot: Option<&Slot>) {}
}

/// Walks the tree rooted at `root`, calling `visitor` on entry and exit.
pub fn walk<V: TreeVisitor>(root: &Node, visitor: &mut V) {
    visit(root, None, None, visitor);
}

fn visit<V: TreeVisitor>(node: &Node, parent: Option<&Node>, slot: Option<&Slot>, visitor: &mut V) {
    if visitor.enter(node, parent, slot) == Walk::Continue {
        for (child_slot, child) in &node.slots {
            if child_slot.is_fragment() {
                continue;
            }
            for child_node in child.nodes() {
                visit(child_node, Some(node), Some(child_slot), visitor);
            }
        }
    }

    visitor.leave(node, parent, slot);
}
