//! Output buffer and block bookkeeping for code generation.

use plainmark_ast::{Node, NodeId};

/// Columns of indentation per nesting level.
pub const INDENT_WIDTH: usize = 4;

/// One opened-then-closed block in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    /// Node that opened the block, if any.
    owner: Option<NodeId>,
}

/// Statements of one invocation together with the counter value the next
/// invocation should continue from.
///
/// Each entry is one emitted statement. An entry spans several physical lines
/// when a sliced expression does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub lines: Vec<String>,
    pub next_counter: usize,
}

impl Fragment {
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Accumulates emitted statements for one generator invocation.
///
/// The indentation level is the depth of the frame stack, so it can never go
/// negative, and every `{` emitted by [`open_block`](Self::open_block) is
/// matched by at most one `}`.
#[derive(Debug)]
pub struct CodeBuffer<'src> {
    /// Text every node range indexes into.
    source: &'src str,
    lines: Vec<String>,
    frames: Vec<Frame>,
    /// Suffix of the next synthetic name.
    counter: usize,
}

impl<'src> CodeBuffer<'src> {
    /// Creates an empty buffer over `source` with the counter at 0.
    pub fn new(source: &'src str) -> Self {
        Self::with_seed(source, 0)
    }

    /// Creates an empty buffer whose synthetic names start at `seed`.
    pub fn with_seed(source: &'src str, seed: usize) -> Self {
        Self {
            source,
            lines: Vec::new(),
            frames: Vec::new(),
            counter: seed,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Current nesting depth.
    pub fn level(&self) -> usize {
        self.frames.len()
    }

    pub fn counter(&self) -> usize {
        self.counter
    }

    pub fn indent_prefix(&self) -> String {
        " ".repeat(self.level() * INDENT_WIDTH)
    }

    /// Returns the source text covered by `node`, or `""` when there is no
    /// node or its range cannot be sliced.
    pub fn slice_expression(&self, node: Option<&Node>) -> &'src str {
        node.and_then(|n| n.span.slice(self.source))
            .unwrap_or_default()
    }

    /// Appends one indented statement. Empty text is dropped. Only the first
    /// physical line is indented, so sliced expressions stay verbatim.
    pub fn append(&mut self, text: &str) {
        if !text.is_empty() {
            let line = format!("{}{text}", self.indent_prefix());
            self.lines.push(line);
        }
    }

    /// Appends the statements of a sub-invocation at the current indentation
    /// and continues the counter after the names it used.
    pub fn append_fragment(&mut self, fragment: &Fragment) {
        for line in &fragment.lines {
            self.append(line);
        }
        self.counter = self.counter.max(fragment.next_counter);
    }

    /// Declares `let var$$N = <initializer>;`, turning a template read into a
    /// reference the analyzer can resolve. Empty initializers are dropped.
    pub fn declare_synthetic_variable(&mut self, initializer: &str) {
        if initializer.is_empty() {
            return;
        }
        let name = self.next_name("var");
        self.append(&format!("let {name} = {initializer};"));
    }

    /// Emits `<header> {` and opens a frame owned by `owner`.
    pub fn open_block(&mut self, header: &str, owner: Option<&Node>) {
        self.append(&format!("{header} {{"));
        self.frames.push(Frame {
            owner: owner.map(Node::id),
        });
    }

    /// Closes blocks, emitting one `}` per closed frame.
    ///
    /// Without an owner the innermost frame is closed, if there is one. With
    /// an owner, every frame that owner opened is closed as long as it is the
    /// innermost one; an owner whose frame is not innermost closes nothing.
    pub fn close_block(&mut self, owner: Option<&Node>) {
        match owner {
            None => {
                if self.frames.pop().is_some() {
                    self.append("}");
                }
            }
            Some(node) => {
                let id = Some(node.id());
                while self.frames.last().is_some_and(|frame| frame.owner == id) {
                    self.frames.pop();
                    self.append("}");
                }
            }
        }
    }

    /// Whether `node` owns any open frame.
    pub fn is_open(&self, node: &Node) -> bool {
        let id = Some(node.id());
        self.frames.iter().any(|frame| frame.owner == id)
    }

    /// Opens `function fn$$N(params) {`, a scope whose parameters stand for
    /// names a directive makes visible to descendant content.
    pub fn open_scope(&mut self, params: &[&str], owner: Option<&Node>) {
        let name = self.next_name("fn");
        self.open_block(&format!("function {name}({})", params.join(", ")), owner);
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    pub fn into_fragment(self) -> Fragment {
        Fragment {
            lines: self.lines,
            next_counter: self.counter,
        }
    }

    fn next_name(&mut self, prefix: &str) -> String {
        let name = format!("{prefix}$${}", self.counter);
        self.counter += 1;
        name
    }
}
