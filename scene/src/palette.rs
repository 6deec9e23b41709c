//! Fill colors for placed nodes.
//!
//! Containers take fixed theme colors so they read as structure regardless of
//! their hash. Every other kind takes a hue derived from its seed.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use std::fmt;

use serde::{Serialize, Serializer};

use crate::node::NodeKind;

/// Theme "primary" color, used for objects.
pub const PRIMARY: &str = "#7c5cff";

/// Theme "success" color, used for arrays.
pub const SUCCESS: &str = "#22c55e";

/// Saturation of hash-derived fills, in percent.
pub const HUE_SATURATION: u8 = 78;

/// Lightness of hash-derived fills, in percent.
pub const HUE_LIGHTNESS: u8 = 56;

/// A node's fill color. Serialized as a CSS color string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Primary,
    Success,
    /// Hue in degrees, `0..360`, at fixed saturation and lightness.
    Hue(u16),
}

impl Fill {
    /// Pick the fill for a node of `kind` with the given seed.
    #[must_use]
    pub fn for_node(kind: NodeKind, seed: u32) -> Self {
        match kind {
            NodeKind::Object => Self::Primary,
            NodeKind::Array => Self::Success,
            NodeKind::String
            | NodeKind::Number
            | NodeKind::Boolean
            | NodeKind::Null
            | NodeKind::Truncated
            | NodeKind::More
            | NodeKind::Unknown => Self::Hue(hue_for(seed)),
        }
    }

    /// CSS color string.
    #[must_use]
    pub fn css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => f.write_str(PRIMARY),
            Self::Success => f.write_str(SUCCESS),
            Self::Hue(h) => write!(f, "hsl({h} {HUE_SATURATION}% {HUE_LIGHTNESS}%)"),
        }
    }
}

impl Serialize for Fill {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn hue_for(seed: u32) -> u16 {
    u16::try_from(seed % 360).unwrap_or_default()
}
