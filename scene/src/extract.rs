//! Node extractor: flattens a JSON value into a capped, ordered node list.
//!
//! DESIGN
//! ======
//! Depth-first, pre-order walk. Every emission goes through [`Walker::emit`],
//! which refuses once the cap is reached and returns `ControlFlow::Break`.
//! Recursive calls propagate the break with `?`, so the whole walk unwinds as
//! soon as the cap is hit instead of visiting the rest of the tree.
//!
//! Work is bounded independently of input size: at most [`MAX_CHILDREN`]
//! children are visited per container and nothing below [`MAX_DEPTH`] is
//! descended into.

#[cfg(test)]
#[path = "extract_test.rs"]
mod extract_test;

use std::borrow::Cow;
use std::ops::ControlFlow;

use serde_json::Value;

use crate::consts::{MAX_CHILDREN, MAX_DEPTH, MAX_WEIGHT, PREVIEW_CHARS};
use crate::node::{Node, NodeKind, display_path};

/// Flatten `value` into at most `max_nodes` display nodes.
#[must_use]
pub fn extract(value: &Value, max_nodes: usize) -> Vec<Node> {
    let mut walker = Walker { nodes: Vec::new(), max_nodes };
    if walker.walk(value, "", 0).is_break() {
        tracing::debug!(max_nodes, "node cap reached; traversal stopped");
    }
    let mut nodes = walker.nodes;
    nodes.truncate(max_nodes);
    nodes
}

struct Walker {
    nodes: Vec<Node>,
    max_nodes: usize,
}

impl Walker {
    fn emit(&mut self, node: Node) -> ControlFlow<()> {
        if self.nodes.len() >= self.max_nodes {
            return ControlFlow::Break(());
        }
        self.nodes.push(node);
        ControlFlow::Continue(())
    }

    fn walk(&mut self, value: &Value, path: &str, depth: usize) -> ControlFlow<()> {
        let name = display_path(path);

        if depth > MAX_DEPTH {
            return self.emit(Node::leaf(path, format!("{name} (…)"), NodeKind::Truncated));
        }

        match value {
            Value::Object(map) => {
                self.emit(Node::new(path, name, NodeKind::Object, weight_for(map.len())))?;
                for (key, child) in map.iter().take(MAX_CHILDREN) {
                    let child_path = if path.is_empty() { key.clone() } else { format!("{path}.{key}") };
                    self.walk(child, &child_path, depth + 1)?;
                }
                let more_path = if path.is_empty() { "__more__".to_owned() } else { format!("{path}.__more__") };
                self.emit_more(more_path, map.len())
            }
            Value::Array(items) => {
                self.emit(Node::new(path, name, NodeKind::Array, weight_for(items.len())))?;
                for (index, child) in items.iter().enumerate().take(MAX_CHILDREN) {
                    self.walk(child, &format!("{name}[{index}]"), depth + 1)?;
                }
                // Arrays key their marker off the display path, so a root array yields `root.__more__`.
                self.emit_more(format!("{name}.__more__"), items.len())
            }
            Value::String(s) => {
                self.emit(Node::leaf(path, format!("{name}: \"{}\"", preview(s)), NodeKind::String))
            }
            Value::Number(n) => self.emit(Node::leaf(path, format!("{name}: {n}"), NodeKind::Number)),
            Value::Bool(b) => self.emit(Node::leaf(path, format!("{name}: {b}"), NodeKind::Boolean)),
            Value::Null => self.emit(Node::leaf(path, format!("{name}: null"), NodeKind::Null)),
        }
    }

    /// Append a "more" marker when `total` children exceed the fan-out limit.
    fn emit_more(&mut self, path: String, total: usize) -> ControlFlow<()> {
        if total <= MAX_CHILDREN {
            return ControlFlow::Continue(());
        }
        let remaining = total - MAX_CHILDREN;
        self.emit(Node::leaf(path, format!("+{remaining} more"), NodeKind::More))
    }
}

/// Container weight: child count clamped to `1..=MAX_WEIGHT`.
fn weight_for(len: usize) -> u32 {
    u32::try_from(len).map_or(MAX_WEIGHT, |n| n.clamp(1, MAX_WEIGHT))
}

/// First [`PREVIEW_CHARS`] characters, with an ellipsis when the string is longer.
fn preview(s: &str) -> Cow<'_, str> {
    match s.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}…", &s[..cut])),
        None => Cow::Borrowed(s),
    }
}
