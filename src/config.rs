//! Visualizer configuration parsed from environment variables.

use scene::consts::DEFAULT_MAX_NODES;

pub const MAX_NODES_ENV: &str = "JSONSCAPE_MAX_NODES";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} (expected a positive integer)")]
    InvalidMaxNodes { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Upper bound on nodes per visualization.
    pub max_nodes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_nodes: DEFAULT_MAX_NODES }
    }
}

impl Config {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `JSONSCAPE_MAX_NODES`: default 60
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let max_nodes = match std::env::var(MAX_NODES_ENV) {
            Ok(raw) => parse_max_nodes(&raw)?,
            Err(_) => DEFAULT_MAX_NODES,
        };
        Ok(Self { max_nodes })
    }

    /// Apply a command-line override on top of the environment.
    #[must_use]
    pub fn with_max_nodes(self, max_nodes: Option<usize>) -> Self {
        Self { max_nodes: max_nodes.unwrap_or(self.max_nodes) }
    }
}

/// Parse a node cap. Zero is rejected: an empty scene is never useful.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidMaxNodes`] for non-numeric or zero input.
pub fn parse_max_nodes(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidMaxNodes { var: MAX_NODES_ENV, value: raw.to_owned() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
