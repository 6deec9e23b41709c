//! Shared numeric constants for the scene crate.

// ── Canvas ──────────────────────────────────────────────────────

/// Width of the virtual canvas the renderer frames.
pub const CANVAS_WIDTH: f64 = 900.0;

/// Height of the virtual canvas the renderer frames.
pub const CANVAS_HEIGHT: f64 = 520.0;

// ── Traversal ───────────────────────────────────────────────────

/// Default upper bound on nodes emitted for one JSON value.
pub const DEFAULT_MAX_NODES: usize = 60;

/// Deepest level that is still expanded. Anything below becomes a truncated node.
pub const MAX_DEPTH: usize = 3;

/// Children visited per object or array before a "more" marker is appended.
pub const MAX_CHILDREN: usize = 10;

/// Characters of a string value shown in its label before the ellipsis.
pub const PREVIEW_CHARS: usize = 18;

/// Upper bound of the container weight hint.
pub const MAX_WEIGHT: u32 = 6;

// ── Spiral ──────────────────────────────────────────────────────

/// Angular step between consecutive nodes, in radians.
pub const SPIRAL_ANGLE_STEP: f64 = 0.62;

/// Radius of the first node.
pub const SPIRAL_BASE_RADIUS: f64 = 30.0;

/// Radius growth per node.
pub const SPIRAL_RADIUS_STEP: f64 = 7.5;

/// Vertical squash applied to the spiral.
pub const SPIRAL_Y_SQUASH: f64 = 0.75;

/// Spiral center as fractions of the canvas size.
pub const CENTER_X_FRAC: f64 = 0.55;
pub const CENTER_Y_FRAC: f64 = 0.52;

// ── Styling ─────────────────────────────────────────────────────

/// Seeds are reduced modulo this before centering, giving `-5..=5`.
pub const WOBBLE_MODULUS: u32 = 11;
pub const WOBBLE_SPAN: i32 = 5;

/// Render-time offset per unit of wobble.
pub const WOBBLE_DX: f64 = 0.6;
pub const WOBBLE_DY: f64 = -0.4;

/// Size bonus per unit of weight, and its ceiling.
pub const SIZE_PER_WEIGHT: f64 = 6.0;
pub const MAX_SIZE_BONUS: f64 = 30.0;

/// Offset of a connector's control point from the straight-line midpoint.
pub const CONNECTOR_BEND_X: f64 = 18.0;
pub const CONNECTOR_BEND_Y: f64 = -18.0;
