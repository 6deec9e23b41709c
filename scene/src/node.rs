//! Display node model.
//!
//! A [`Node`] is one flattened unit of a JSON value: a container, a scalar
//! leaf, or one of the synthetic markers the extractor emits when it stops
//! descending (depth cutoff) or stops fanning out (sibling cutoff).

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a display node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// JSON object container.
    Object,
    /// JSON array container.
    Array,
    String,
    Number,
    Boolean,
    Null,
    /// Placeholder for a subtree below the depth cutoff.
    Truncated,
    /// Placeholder for siblings past the per-container fan-out limit.
    More,
    /// Value outside the JSON domain. Never produced from `serde_json::Value`.
    Unknown,
}

impl NodeKind {
    /// Lowercase name as used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::Truncated => "truncated",
            Self::More => "more",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One visual unit extracted from a JSON value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Dotted/bracketed route from the root. Empty for the root itself.
    pub path: String,
    /// Text shown on the label plate and in the hover tooltip.
    pub label: String,
    pub kind: NodeKind,
    /// Sizing hint in `1..=6`.
    pub weight: u32,
}

impl Node {
    #[must_use]
    pub fn new(path: impl Into<String>, label: impl Into<String>, kind: NodeKind, weight: u32) -> Self {
        Self { path: path.into(), label: label.into(), kind, weight }
    }

    /// A weight-1 node, the shape of every leaf and synthetic marker.
    #[must_use]
    pub fn leaf(path: impl Into<String>, label: impl Into<String>, kind: NodeKind) -> Self {
        Self::new(path, label, kind, 1)
    }

    /// The path, or `"root"` when this node is the root.
    #[must_use]
    pub fn display_path(&self) -> &str {
        display_path(&self.path)
    }
}

/// Substitute `"root"` for the empty root path.
#[must_use]
pub fn display_path(path: &str) -> &str {
    if path.is_empty() { "root" } else { path }
}
