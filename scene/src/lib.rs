//! Scene builder for the JSON constellation view.
//!
//! This crate owns the only non-trivial logic of the visualizer: flattening an
//! already-parsed JSON value into a capped list of display nodes, then placing
//! those nodes on a fixed virtual canvas with deterministic colors and sizes.
//! Everything here is pure and synchronous. Reading text, parsing it, and
//! drawing the result belong to the host application.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`node`] | Display node model and the closed [`node::NodeKind`] enum |
//! | [`extract`] | Depth-first, cap-bounded tree walk producing nodes |
//! | [`hash`] | Fixed-width FNV-1a string hash used for seeds |
//! | [`palette`] | Fill colors for placed nodes |
//! | [`layout`] | Spiral placement, sizing, connectors, and the [`layout::Scene`] bundle |
//! | [`sample`] | Default character/scene payload shown on first load |
//! | [`consts`] | Canvas size, traversal limits, and spiral constants |

pub mod consts;
pub mod extract;
pub mod hash;
pub mod layout;
pub mod node;
pub mod palette;
pub mod sample;

pub use extract::extract;
pub use layout::{Scene, build_scene, connectors, layout};
pub use node::{Node, NodeKind};
