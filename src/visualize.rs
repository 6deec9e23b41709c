//! Visualize boundary: raw JSON text in, laid-out scene out.
//!
//! DESIGN
//! ======
//! The scene builder is total over JSON values and never fails. Everything
//! that can go wrong lives here, in front of it: the text may not parse, or
//! it may parse to a scalar, which has nothing to lay out. Both surface as a
//! single message string for the host to show.

use scene::Scene;
use serde_json::Value;

use crate::config::Config;

/// Message shown when the root value is not a container.
pub const UNSUPPORTED_ROOT_MESSAGE: &str = "Root must be a JSON object or array.";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum VisualizeError {
    /// Parser message, verbatim.
    #[error("{0}")]
    Syntax(String),
    #[error("{}", UNSUPPORTED_ROOT_MESSAGE)]
    UnsupportedRoot { found: &'static str },
}

/// Parse, guard, and lay out `text`.
///
/// # Errors
///
/// Returns [`VisualizeError::Syntax`] if `text` is not valid JSON and
/// [`VisualizeError::UnsupportedRoot`] if its root is not an object or array.
pub fn visualize(text: &str, config: &Config) -> Result<Scene, VisualizeError> {
    let value = parse(text).inspect_err(|e| tracing::warn!(error = %e, "rejected input: invalid JSON"))?;
    ensure_container_root(&value)
        .inspect_err(|e| tracing::warn!(error = %e, root = root_kind(&value), "rejected input: scalar root"))?;

    let scene = scene::build_scene(&value, config.max_nodes);
    tracing::info!(
        root = root_kind(&value),
        nodes = scene.nodes.len(),
        connectors = scene.connectors.len(),
        max_nodes = config.max_nodes,
        "scene built"
    );
    Ok(scene)
}

/// Parse JSON text.
///
/// # Errors
///
/// Returns [`VisualizeError::Syntax`] carrying the parser's message.
pub fn parse(text: &str) -> Result<Value, VisualizeError> {
    serde_json::from_str(text).map_err(|e| VisualizeError::Syntax(e.to_string()))
}

/// Accept only object and array roots.
///
/// # Errors
///
/// Returns [`VisualizeError::UnsupportedRoot`] for scalar roots.
pub fn ensure_container_root(value: &Value) -> Result<(), VisualizeError> {
    match value {
        Value::Object(_) | Value::Array(_) => Ok(()),
        Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => {
            Err(VisualizeError::UnsupportedRoot { found: root_kind(value) })
        }
    }
}

fn root_kind(value: &Value) -> &'static str {
    match value {
        Value::Object(_) => "object",
        Value::Array(_) => "array",
        Value::String(_) => "string",
        Value::Number(_) => "number",
        Value::Bool(_) => "boolean",
        Value::Null => "null",
    }
}

#[cfg(test)]
#[path = "visualize_test.rs"]
mod tests;
