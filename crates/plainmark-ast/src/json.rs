//! Loading template trees from the parser's JSON output.

use crate::node::{Child, Node, NodeKind, Slot};
use plainmark_core::{Error, Result, Span};
use serde_json::{Map, Value};

/// Parses a JSON document produced by the markup parser into a node tree.
///
/// # Errors
/// Returns an error if the text is not JSON or does not describe a node.
pub fn parse_json(text: &str) -> Result<Node> {
    let value: Value = serde_json::from_str(text).map_err(|e| Error::Ast(e.to_string()))?;
    Node::from_json(&value)
}

impl Node {
    /// Builds a node tree from a parsed JSON value.
    ///
    /// Fields are read in document order. `type`, `start` and `end` are
    /// required, though `start` and `end` may both be `null`; `name` and
    /// `skip` are picked up when present. A field holding
    /// a typed object becomes a single-node slot and a field holding an array
    /// of typed objects becomes a sequence slot. Anything else is ignored.
    ///
    /// # Errors
    /// Returns an error if a typed object is missing its range or has an
    /// inverted one.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Object(map) if is_node(map) => node_from_object(map),
            _ => Err(Error::Ast("expected an object with a `type` tag".to_string())),
        }
    }
}

fn is_node(map: &Map<String, Value>) -> bool {
    map.get("type").is_some_and(Value::is_string)
}

fn is_node_value(value: &Value) -> bool {
    value.as_object().is_some_and(is_node)
}

fn node_from_object(map: &Map<String, Value>) -> Result<Node> {
    let tag = map.get("type").and_then(Value::as_str).unwrap_or_default();
    let mut node = Node::new(NodeKind::from_tag(tag), range(map, tag)?);

    for (key, value) in map {
        match (key.as_str(), value) {
            ("type" | "start" | "end", _) => {}
            ("name", Value::String(name)) => node.name = Some(name.clone()),
            ("skip", Value::Bool(skip)) => node.skip = *skip,
            _ => {
                if let Some(child) = child_from_json(value)? {
                    node.slots.push((Slot::from_key(key), child));
                }
            }
        }
    }

    Ok(node)
}

fn child_from_json(value: &Value) -> Result<Option<Child>> {
    match value {
        Value::Object(map) if is_node(map) => {
            Ok(Some(Child::Node(Box::new(node_from_object(map)?))))
        }
        Value::Array(items) if items.iter().all(is_node_value) => {
            let nodes = items
                .iter()
                .map(Node::from_json)
                .collect::<Result<Vec<_>>>()?;
            Ok(Some(Child::Nodes(nodes)))
        }
        _ => Ok(None),
    }
}

/// Reads `start`/`end`. Both `null` marks a node absent from the source, such
/// as a deferred branch the template leaves out, and gives an empty range.
fn range(map: &Map<String, Value>, tag: &str) -> Result<Span> {
    if map.get("start").is_some_and(Value::is_null) && map.get("end").is_some_and(Value::is_null) {
        return Ok(Span::default());
    }

    let start = offset(map, "start", tag)?;
    let end = offset(map, "end", tag)?;
    if start > end {
        return Err(Error::Ast(format!(
            "`{tag}` node has an inverted range {start}..{end}"
        )));
    }
    Ok(Span::new(start, end))
}

fn offset(map: &Map<String, Value>, field: &str, tag: &str) -> Result<usize> {
    map.get(field)
        .and_then(Value::as_u64)
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| Error::Ast(format!("`{tag}` node is missing a numeric `{field}`")))
}
