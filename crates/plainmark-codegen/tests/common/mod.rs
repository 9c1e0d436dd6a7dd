//! Common test utilities for code generation tests.
//!
//! Builds template trees by hand. Expression text is appended to a shared
//! source buffer so every expression node slices back to its own text;
//! structural nodes carry empty ranges since they are never sliced.

#![allow(dead_code)]

use plainmark_ast::{Node, NodeKind, Slot};
use plainmark_codegen::generate;
use plainmark_core::Span;

/// Source text under construction.
#[derive(Default)]
pub struct Template {
    source: String,
}

impl Template {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `text` to the source and returns an expression node over it.
    pub fn expr(&mut self, text: &str) -> Node {
        let start = self.source.len();
        self.source.push_str(text);
        let end = self.source.len();
        self.source.push(' ');
        Node::new(NodeKind::from_tag("Expression"), Span::new(start, end))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn generate(&self, root: &Node) -> String {
        generate(&self.source, root)
    }
}

pub fn node(kind: NodeKind) -> Node {
    Node::new(kind, Span::default())
}

pub fn fragment(children: Vec<Node>) -> Node {
    node(NodeKind::Fragment).with_children(Slot::Children, children)
}

pub fn text() -> Node {
    node(NodeKind::Text)
}

/// A node of `kind` reading `expression`.
pub fn reading(kind: NodeKind, expression: Node) -> Node {
    node(kind).with_child(Slot::Expression, expression)
}

pub fn mustache(expression: Node) -> Node {
    reading(NodeKind::MustacheTag, expression)
}

pub fn if_block(condition: Node, children: Vec<Node>, otherwise: Option<Node>) -> Node {
    let block = reading(NodeKind::IfBlock, condition).with_children(Slot::Children, children);
    match otherwise {
        Some(else_block) => block.with_child(Slot::Else, else_block),
        None => block,
    }
}

pub fn else_block(children: Vec<Node>) -> Node {
    node(NodeKind::ElseBlock).with_children(Slot::Children, children)
}

pub fn each_block(iterable: Node, pattern: Node, children: Vec<Node>, empty: Option<Node>) -> Node {
    let block = reading(NodeKind::EachBlock, iterable)
        .with_child(Slot::Context, pattern)
        .with_children(Slot::Children, children);
    match empty {
        Some(else_block) => block.with_child(Slot::Else, else_block),
        None => block,
    }
}

/// A `let:name` directive, optionally destructuring into `pattern`.
pub fn let_directive(name: &str, pattern: Option<Node>) -> Node {
    let directive = node(NodeKind::Let).with_name(name);
    match pattern {
        Some(pattern) => directive.with_child(Slot::Expression, pattern),
        None => directive,
    }
}

pub fn attribute(name: &str) -> Node {
    node(NodeKind::Attribute).with_name(name)
}

pub fn component(name: &str, attributes: Vec<Node>, children: Vec<Node>) -> Node {
    node(NodeKind::InlineComponent)
        .with_name(name)
        .with_children(Slot::Attributes, attributes)
        .with_children(Slot::Children, children)
}

pub fn element(name: &str, attributes: Vec<Node>, children: Vec<Node>) -> Node {
    node(NodeKind::Element)
        .with_name(name)
        .with_children(Slot::Attributes, attributes)
        .with_children(Slot::Children, children)
}

/// A named directive with an optional argument expression.
pub fn directive(kind: NodeKind, name: &str, expression: Option<Node>) -> Node {
    let directive = node(kind).with_name(name);
    match expression {
        Some(expression) => directive.with_child(Slot::Expression, expression),
        None => directive,
    }
}

/// Numeric suffixes of every `$$N` name, in output order.
pub fn synthetic_suffixes(code: &str) -> Vec<usize> {
    code.split("$$")
        .skip(1)
        .map(|rest| {
            let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
            digits.parse().unwrap()
        })
        .collect()
}

/// Whether every `{` opening a block line has a matching `}` line.
pub fn is_balanced(code: &str) -> bool {
    let opened = code.lines().filter(|line| line.ends_with(" {")).count();
    let closed = code.lines().filter(|line| line.trim() == "}").count();
    opened == closed
}
