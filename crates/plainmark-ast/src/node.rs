//! Template node definitions.
//!
//! Nodes are produced by an external markup parser and only read here. Each
//! node keeps its structural fields as an ordered list of named slots so that
//! traversal follows the order the parser emitted them in.

use plainmark_core::Span;
use std::fmt;

/// The type tag of a template node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Fragment,
    Element,
    InlineComponent,
    SlotTemplate,
    Attribute,
    Let,
    Text,
    IfBlock,
    ElseBlock,
    EachBlock,
    AwaitBlock,
    PendingBlock,
    ThenBlock,
    CatchBlock,
    KeyBlock,
    MustacheTag,
    RawMustacheTag,
    DebugTag,
    AttributeShorthand,
    Binding,
    Class,
    EventHandler,
    Action,
    Transition,
    Animation,
    Spread,
    /// Any tag without a dedicated variant, kept verbatim.
    Other(String),
}

impl NodeKind {
    /// Maps a parser type tag to a node kind.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Fragment" => Self::Fragment,
            "Element" => Self::Element,
            "InlineComponent" => Self::InlineComponent,
            "SlotTemplate" => Self::SlotTemplate,
            "Attribute" => Self::Attribute,
            "Let" => Self::Let,
            "Text" => Self::Text,
            "IfBlock" => Self::IfBlock,
            "ElseBlock" => Self::ElseBlock,
            "EachBlock" => Self::EachBlock,
            "AwaitBlock" => Self::AwaitBlock,
            "PendingBlock" => Self::PendingBlock,
            "ThenBlock" => Self::ThenBlock,
            "CatchBlock" => Self::CatchBlock,
            "KeyBlock" => Self::KeyBlock,
            "MustacheTag" => Self::MustacheTag,
            "RawMustacheTag" => Self::RawMustacheTag,
            "DebugTag" => Self::DebugTag,
            "AttributeShorthand" => Self::AttributeShorthand,
            "Binding" => Self::Binding,
            "Class" => Self::Class,
            "EventHandler" => Self::EventHandler,
            "Action" => Self::Action,
            "Transition" => Self::Transition,
            "Animation" => Self::Animation,
            "Spread" => Self::Spread,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the parser type tag for this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Fragment => "Fragment",
            Self::Element => "Element",
            Self::InlineComponent => "InlineComponent",
            Self::SlotTemplate => "SlotTemplate",
            Self::Attribute => "Attribute",
            Self::Let => "Let",
            Self::Text => "Text",
            Self::IfBlock => "IfBlock",
            Self::ElseBlock => "ElseBlock",
            Self::EachBlock => "EachBlock",
            Self::AwaitBlock => "AwaitBlock",
            Self::PendingBlock => "PendingBlock",
            Self::ThenBlock => "ThenBlock",
            Self::CatchBlock => "CatchBlock",
            Self::KeyBlock => "KeyBlock",
            Self::MustacheTag => "MustacheTag",
            Self::RawMustacheTag => "RawMustacheTag",
            Self::DebugTag => "DebugTag",
            Self::AttributeShorthand => "AttributeShorthand",
            Self::Binding => "Binding",
            Self::Class => "Class",
            Self::EventHandler => "EventHandler",
            Self::Action => "Action",
            Self::Transition => "Transition",
            Self::Animation => "Animation",
            Self::Spread => "Spread",
            Self::Other(tag) => tag.as_str(),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The structural position a child node is reached through.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Raw expression text, consumed by slicing.
    Expression,
    /// Iteration pattern of a loop, consumed by slicing.
    Context,
    Children,
    Attributes,
    Else,
    Pending,
    Then,
    Catch,
    Value,
    Error,
    Identifiers,
    Other(String),
}

impl Slot {
    /// Maps a parser field name to a slot.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "expression" => Self::Expression,
            "context" => Self::Context,
            "children" => Self::Children,
            "attributes" => Self::Attributes,
            "else" => Self::Else,
            "pending" => Self::Pending,
            "then" => Self::Then,
            "catch" => Self::Catch,
            "value" => Self::Value,
            "error" => Self::Error,
            "identifiers" => Self::Identifiers,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the parser field name for this slot.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Expression => "expression",
            Self::Context => "context",
            Self::Children => "children",
            Self::Attributes => "attributes",
            Self::Else => "else",
            Self::Pending => "pending",
            Self::Then => "then",
            Self::Catch => "catch",
            Self::Value => "value",
            Self::Error => "error",
            Self::Identifiers => "identifiers",
            Self::Other(key) => key.as_str(),
        }
    }

    /// Whether the slot holds an expression fragment rather than template
    /// structure. Fragment slots are never walked.
    #[must_use]
    pub const fn is_fragment(&self) -> bool {
        matches!(self, Self::Expression | Self::Context)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The content of a slot: a single node or an ordered sequence of nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Node(Box<Node>),
    Nodes(Vec<Node>),
}

impl Child {
    /// Returns the slot content as a slice.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        match self {
            Self::Node(node) => std::slice::from_ref(node.as_ref()),
            Self::Nodes(nodes) => nodes,
        }
    }
}

/// Identity of a node within a borrowed tree.
///
/// Derived from the node's address, so it is only meaningful while the tree
/// it was taken from is alive and not moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A node of the parsed template tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
    /// Literal name: tag name, directive name or identifier name.
    pub name: Option<String>,
    /// Set on deferred branches the parser reports as absent from the source.
    pub skip: bool,
    pub slots: Vec<(Slot, Child)>,
}

impl Node {
    #[must_use]
    pub const fn new(kind: NodeKind, span: Span) -> Self {
        Self {
            kind,
            span,
            name: None,
            skip: false,
            slots: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_skip(mut self, skip: bool) -> Self {
        self.skip = skip;
        self
    }

    /// Appends a single-node slot.
    #[must_use]
    pub fn with_child(mut self, slot: Slot, child: Node) -> Self {
        self.slots.push((slot, Child::Node(Box::new(child))));
        self
    }

    /// Appends a sequence slot.
    #[must_use]
    pub fn with_children(mut self, slot: Slot, children: Vec<Node>) -> Self {
        self.slots.push((slot, Child::Nodes(children)));
        self
    }

    #[must_use]
    pub fn id(&self) -> NodeId {
        NodeId(std::ptr::from_ref(self) as usize)
    }

    #[must_use]
    pub fn is(&self, kind: &NodeKind) -> bool {
        &self.kind == kind
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Returns the content of the first slot matching `slot`.
    #[must_use]
    pub fn slot(&self, slot: &Slot) -> Option<&Child> {
        self.slots
            .iter()
            .find(|(candidate, _)| candidate == slot)
            .map(|(_, child)| child)
    }

    /// Returns the first node held by `slot`.
    #[must_use]
    pub fn child(&self, slot: &Slot) -> Option<&Node> {
        self.slot(slot).and_then(|child| child.nodes().first())
    }

    /// Returns every node held by `slot`, or an empty slice.
    #[must_use]
    pub fn children_in(&self, slot: &Slot) -> &[Node] {
        self.slot(slot).map_or(&[], Child::nodes)
    }

    #[must_use]
    pub fn children(&self) -> &[Node] {
        self.children_in(&Slot::Children)
    }

    #[must_use]
    pub fn attributes(&self) -> &[Node] {
        self.children_in(&Slot::Attributes)
    }

    /// Iterates over `let:` directives among the node's attributes.
    pub fn let_directives(&self) -> impl Iterator<Item = &Node> {
        self.attributes()
            .iter()
            .filter(|attribute| attribute.kind == NodeKind::Let)
    }
}
