//! Scene layout: places extracted nodes on the fixed virtual canvas.
//!
//! DESIGN
//! ======
//! Each node is placed independently from its index and its own identity, so
//! the whole layout is a pure function of the node sequence. Nodes follow a
//! widening, vertically squashed spiral around a point slightly right of and
//! below the canvas center; earlier (shallower) nodes sit closest to it.
//!
//! A per-node seed (FNV-1a of the path) drives both the hue of leaf fills and
//! a small render-time wobble. The wobble is stored alongside the base
//! position and only applied by [`PlacedNode::render_position`].
//!
//! Connectors join each node to its predecessor in sequence order. They are
//! cosmetic and carry no parent/child meaning.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;

use crate::consts::{
    CANVAS_HEIGHT, CANVAS_WIDTH, CENTER_X_FRAC, CENTER_Y_FRAC, CONNECTOR_BEND_X, CONNECTOR_BEND_Y, MAX_SIZE_BONUS,
    SIZE_PER_WEIGHT, SPIRAL_ANGLE_STEP, SPIRAL_BASE_RADIUS, SPIRAL_RADIUS_STEP, SPIRAL_Y_SQUASH, WOBBLE_DX, WOBBLE_DY,
    WOBBLE_MODULUS, WOBBLE_SPAN,
};
use crate::extract::extract;
use crate::hash::hash_string_to_int;
use crate::node::{Node, NodeKind};
use crate::palette::Fill;

/// A point on the virtual canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self { x: f64::midpoint(self.x, other.x), y: f64::midpoint(self.y, other.y) }
    }
}

/// A node with its canvas placement and styling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedNode {
    #[serde(flatten)]
    pub node: Node,
    /// Base spiral position, before wobble.
    pub position: Point,
    pub color: Fill,
    /// Diameter.
    pub size: f64,
    pub seed: u32,
    /// Render-time jitter in `-5..=5`.
    pub wobble: i32,
}

impl PlacedNode {
    /// Where the renderer draws the node: the base position shifted by the wobble.
    #[must_use]
    pub fn render_position(&self) -> Point {
        let w = f64::from(self.wobble);
        self.position.offset(WOBBLE_DX * w, WOBBLE_DY * w)
    }
}

/// A cosmetic curve from one placed node to the next.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Connector {
    pub from: usize,
    pub to: usize,
    pub start: Point,
    pub end: Point,
    /// Quadratic control point: the straight-line midpoint, bent up and right.
    pub control: Point,
}

/// Everything the renderer needs to draw one visualization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub nodes: Vec<PlacedNode>,
    pub connectors: Vec<Connector>,
}

/// Extract, place, and connect nodes for `value`.
#[must_use]
pub fn build_scene(value: &Value, max_nodes: usize) -> Scene {
    let nodes = layout(&extract(value, max_nodes));
    let connectors = connectors(&nodes);
    Scene { width: CANVAS_WIDTH, height: CANVAS_HEIGHT, nodes, connectors }
}

/// Place every node. Output has the same length and order as `nodes`.
#[must_use]
pub fn layout(nodes: &[Node]) -> Vec<PlacedNode> {
    nodes
        .iter()
        .enumerate()
        .map(|(i, node)| place(i, node))
        .collect()
}

/// Link each placed node to its predecessor.
#[must_use]
pub fn connectors(placed: &[PlacedNode]) -> Vec<Connector> {
    placed
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let start = pair[0].render_position();
            let end = pair[1].render_position();
            Connector {
                from: i,
                to: i + 1,
                start,
                end,
                control: start.midpoint(end).offset(CONNECTOR_BEND_X, CONNECTOR_BEND_Y),
            }
        })
        .collect()
}

/// Spiral center on the canvas.
#[must_use]
pub fn center() -> Point {
    Point::new(CANVAS_WIDTH * CENTER_X_FRAC, CANVAS_HEIGHT * CENTER_Y_FRAC)
}

fn place(index: usize, node: &Node) -> PlacedNode {
    #[allow(clippy::cast_precision_loss)]
    let i = index as f64;
    let angle = i * SPIRAL_ANGLE_STEP;
    let radius = SPIRAL_BASE_RADIUS + i * SPIRAL_RADIUS_STEP;
    let position = center().offset(radius * angle.cos(), SPIRAL_Y_SQUASH * radius * angle.sin());

    let seed = seed_for(index, node);
    PlacedNode {
        node: node.clone(),
        position,
        color: Fill::for_node(node.kind, seed),
        size: size_for(node.kind, node.weight),
        seed,
        wobble: wobble_for(seed),
    }
}

/// Hash of the path, falling back to the label, then to the index.
fn seed_for(index: usize, node: &Node) -> u32 {
    let key: Cow<'_, str> = if !node.path.is_empty() {
        Cow::Borrowed(&node.path)
    } else if !node.label.is_empty() {
        Cow::Borrowed(&node.label)
    } else {
        Cow::Owned(index.to_string())
    };
    hash_string_to_int(&key)
}

fn wobble_for(seed: u32) -> i32 {
    i32::try_from(seed % WOBBLE_MODULUS).unwrap_or_default() - WOBBLE_SPAN
}

fn size_for(kind: NodeKind, weight: u32) -> f64 {
    let base = match kind {
        NodeKind::Object => 64.0,
        NodeKind::Array => 58.0,
        NodeKind::String => 44.0,
        NodeKind::Number
        | NodeKind::Boolean
        | NodeKind::Null
        | NodeKind::Truncated
        | NodeKind::More
        | NodeKind::Unknown => 42.0,
    };
    base + (f64::from(weight) * SIZE_PER_WEIGHT).min(MAX_SIZE_BONUS)
}
