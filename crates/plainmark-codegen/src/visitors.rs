//! Per-construct statement emission.
//!
//! Each handler maps one node kind to the statements it contributes. Kinds
//! without a handler emit nothing and their children are still visited.

use crate::buffer::CodeBuffer;
use crate::generator::generate_fragment;
use plainmark_ast::{Node, NodeKind, Slot, Walk};

/// Placeholder element passed to directive functions.
const TARGET: &str = "document.body";

/// Before/after geometry handed to animation functions.
const ANIMATION_RECTS: &str = "{ from: { x: 0, y: 0, width: 0, height: 0 }, to: { x: 0, y: 0, width: 0, height: 0 } }";

/// Dispatches `node` to its handler.
pub(crate) fn visit(buffer: &mut CodeBuffer<'_>, node: &Node, parent: Option<&Node>) -> Walk {
    match &node.kind {
        NodeKind::InlineComponent => inline_component(buffer, node),
        NodeKind::Element => {
            if node.attributes().iter().any(|a| a.name() == "slot") {
                open_binding_scope(buffer, node);
            }
        }
        NodeKind::SlotTemplate => open_binding_scope(buffer, node),
        NodeKind::IfBlock => if_block(buffer, node, parent),
        NodeKind::ElseBlock => else_block(buffer, node, parent),
        NodeKind::EachBlock => each_block(buffer, node),
        NodeKind::AwaitBlock => return await_block(buffer, node),
        NodeKind::KeyBlock => {
            let key = expression(buffer, node);
            buffer.open_block(&format!("/*key*/ if ({key})"), Some(node));
        }
        NodeKind::MustacheTag
        | NodeKind::RawMustacheTag
        | NodeKind::AttributeShorthand
        | NodeKind::Binding
        | NodeKind::EventHandler => {
            let read = expression(buffer, node);
            buffer.declare_synthetic_variable(read);
        }
        NodeKind::Spread => {
            let spread = expression(buffer, node);
            if !spread.is_empty() {
                buffer.declare_synthetic_variable(&format!("{{ ...{spread} }}"));
            }
        }
        NodeKind::DebugTag => {
            for identifier in node.children_in(&Slot::Identifiers) {
                buffer.declare_synthetic_variable(identifier.name());
            }
        }
        NodeKind::Class => {
            // `class:name` without a value reads the variable of the same name.
            let condition = match expression(buffer, node) {
                "" => node.name(),
                condition => condition,
            };
            buffer.declare_synthetic_variable(&format!("{condition} ? '{}' : null", node.name()));
        }
        NodeKind::Action | NodeKind::Transition => {
            let call = directive_call(node.name(), &[expression(buffer, node)]);
            buffer.append(&call);
        }
        NodeKind::Animation => {
            let call = directive_call(node.name(), &[ANIMATION_RECTS, expression(buffer, node)]);
            buffer.append(&call);
        }
        _ => {}
    }

    Walk::Continue
}

fn expression<'src>(buffer: &CodeBuffer<'src>, node: &Node) -> &'src str {
    buffer.slice_expression(node.child(&Slot::Expression))
}

/// `name(document.body, args...);` with empty arguments left out.
fn directive_call(name: &str, args: &[&str]) -> String {
    let args = std::iter::once(TARGET)
        .chain(args.iter().copied().filter(|arg| !arg.is_empty()))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{name}({args});")
}

/// Names bound by the node's `let:` directives, in declaration order. A
/// directive with a pattern (`let:item={{ id }}`) binds the pattern.
fn bound_names<'a>(buffer: &CodeBuffer<'a>, node: &'a Node) -> Vec<&'a str> {
    node.let_directives()
        .map(|directive| match buffer.slice_expression(directive.child(&Slot::Expression)) {
            "" => directive.name(),
            pattern => pattern,
        })
        .collect()
}

fn open_binding_scope(buffer: &mut CodeBuffer<'_>, node: &Node) {
    let names = bound_names(buffer, node);
    if !names.is_empty() {
        buffer.open_scope(&names, Some(node));
    }
}

fn inline_component(buffer: &mut CodeBuffer<'_>, node: &Node) {
    let name = match node.name() {
        "svelte:component" => expression(buffer, node),
        name => name,
    };
    buffer.append(&format!("new {name}();"));
    open_binding_scope(buffer, node);
}

fn if_block(buffer: &mut CodeBuffer<'_>, node: &Node, parent: Option<&Node>) {
    let condition = expression(buffer, node);

    // A folded `else` leaves no frame of its own; the previous branch is
    // still the innermost block and this condition continues its chain.
    let chained = parent.is_some_and(|p| p.is(&NodeKind::ElseBlock) && !buffer.is_open(p));

    if chained {
        buffer.close_block(None);
        buffer.open_block(&format!("else if ({condition})"), Some(node));
    } else {
        buffer.open_block(&format!("if ({condition})"), Some(node));
    }
}

fn else_block(buffer: &mut CodeBuffer<'_>, node: &Node, parent: Option<&Node>) {
    let parent_kind = parent.map(|p| &p.kind);

    if parent_kind == Some(&NodeKind::IfBlock) && holds_only_if(node) {
        return;
    }

    buffer.close_block(None);
    if parent_kind == Some(&NodeKind::EachBlock) {
        // The empty-list branch also ends the guard around the loop.
        buffer.close_block(None);
    }
    buffer.open_block("else", Some(node));
}

fn holds_only_if(node: &Node) -> bool {
    matches!(node.children(), [only] if only.is(&NodeKind::IfBlock))
}

fn each_block(buffer: &mut CodeBuffer<'_>, node: &Node) {
    let iterable = expression(buffer, node);
    let pattern = buffer.slice_expression(node.child(&Slot::Context));

    if node.slot(&Slot::Else).is_some() {
        buffer.open_block(&format!("if ({iterable})"), Some(node));
    }
    buffer.open_block(&format!("for (const {pattern} of {iterable})"), Some(node));
}

/// Lays the three branches into a `try`/`await`/`catch` skeleton. Branch
/// bodies are generated separately and spliced in, so the walker must not
/// descend on its own.
fn await_block(buffer: &mut CodeBuffer<'_>, node: &Node) -> Walk {
    buffer.open_block("try", None);

    if let Some(pending) = node.child(&Slot::Pending) {
        splice_branch(buffer, pending);
    }

    let value = buffer.slice_expression(node.child(&Slot::Value));
    let promise = expression(buffer, node);
    if value.is_empty() {
        buffer.append(&format!("await {promise};"));
    } else {
        buffer.append(&format!("const {value} = await {promise};"));
    }

    if let Some(then) = node.child(&Slot::Then) {
        splice_branch(buffer, then);
    }

    buffer.close_block(None);

    match node.child(&Slot::Catch).filter(|catch| !catch.skip) {
        Some(catch) => {
            let error = buffer.slice_expression(node.child(&Slot::Error));
            let header = if error.is_empty() {
                "catch".to_string()
            } else {
                format!("catch ({error})")
            };
            buffer.open_block(&header, None);
            splice_branch(buffer, catch);
            buffer.close_block(None);
        }
        None => buffer.append("catch {}"),
    }

    Walk::Skip
}

fn splice_branch(buffer: &mut CodeBuffer<'_>, branch: &Node) {
    let fragment = generate_fragment(buffer.source(), branch, buffer.counter());
    buffer.append_fragment(&fragment);
}
