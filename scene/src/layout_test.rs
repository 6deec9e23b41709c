#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;
use crate::consts::DEFAULT_MAX_NODES;
use crate::sample::DEFAULT_INPUT;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn sample_nodes() -> Vec<Node> {
    let value: Value = serde_json::from_str(DEFAULT_INPUT).unwrap();
    extract(&value, DEFAULT_MAX_NODES)
}

// --- Point ---

#[test]
fn point_offset_and_midpoint() {
    let p = Point::new(1.0, 2.0).offset(3.0, -4.0);
    assert_eq!(p, Point::new(4.0, -2.0));
    assert_eq!(Point::new(0.0, 0.0).midpoint(Point::new(10.0, 4.0)), Point::new(5.0, 2.0));
}

#[test]
fn center_is_right_of_and_below_middle() {
    assert!(point_approx_eq(center(), Point::new(495.0, 270.4)));
}

// --- layout: placement ---

#[test]
fn empty_sequence_yields_empty_layout() {
    assert!(layout(&[]).is_empty());
}

#[test]
fn first_node_sits_one_base_radius_right_of_center() {
    let placed = layout(&[Node::new("", "root", NodeKind::Object, 1)]);
    assert!(point_approx_eq(placed[0].position, Point::new(525.0, 270.4)));
}

#[test]
fn second_node_follows_spiral() {
    let nodes = extract(&json!({ "a": 1 }), DEFAULT_MAX_NODES);
    let placed = layout(&nodes);
    assert!(point_approx_eq(placed[1].position, Point::new(525.520_442_124_845, 286.741_613_890_111_7)));
}

#[test]
fn layout_preserves_length_and_order() {
    let nodes = sample_nodes();
    let placed = layout(&nodes);
    assert_eq!(placed.len(), nodes.len());
    for (p, n) in placed.iter().zip(&nodes) {
        assert_eq!(&p.node, n);
    }
}

#[test]
fn layout_is_pure() {
    let nodes = sample_nodes();
    assert_eq!(layout(&nodes), layout(&nodes));
}

#[test]
fn radius_grows_along_sequence() {
    let placed = layout(&sample_nodes());
    let c = center();
    let dist = |p: Point| (p.x - c.x).hypot((p.y - c.y) / SPIRAL_Y_SQUASH);
    for pair in placed.windows(2) {
        assert!(dist(pair[1].position) > dist(pair[0].position));
    }
}

// --- layout: seed and wobble ---

#[test]
fn seed_hashes_path() {
    let placed = layout(&[Node::leaf("a", "a: 1", NodeKind::Number)]);
    assert_eq!(placed[0].seed, 3_826_002_220);
    assert_eq!(placed[0].wobble, 2);
}

#[test]
fn seed_falls_back_to_label_then_index() {
    let placed = layout(&[Node::new("", "root", NodeKind::Object, 1), Node::leaf("", "", NodeKind::Unknown)]);
    assert_eq!(placed[0].seed, hash_string_to_int("root"));
    assert_eq!(placed[0].seed, 553_455_173);
    assert_eq!(placed[1].seed, hash_string_to_int("1"));
}

#[test]
fn wobble_stays_in_range() {
    for placed in layout(&sample_nodes()) {
        assert!((-5..=5).contains(&placed.wobble), "wobble {} out of range", placed.wobble);
    }
}

#[test]
fn render_position_applies_wobble_without_moving_base() {
    let placed = layout(&[Node::new("", "root", NodeKind::Object, 1)]);
    let node = &placed[0];
    assert_eq!(node.wobble, 2);
    assert!(point_approx_eq(node.render_position(), Point::new(526.2, 269.6)));
    assert!(point_approx_eq(node.position, Point::new(525.0, 270.4)));
}

// --- layout: color and size ---

#[test]
fn containers_get_theme_fill() {
    let placed = layout(&extract(&json!({ "list": [1] }), DEFAULT_MAX_NODES));
    assert_eq!(placed[0].color, Fill::Primary);
    assert_eq!(placed[1].color, Fill::Success);
    assert_eq!(placed[2].color, Fill::Hue(53));
}

#[test]
fn leaf_hue_comes_from_seed() {
    let placed = layout(&[Node::leaf("a", "a: 1", NodeKind::Number)]);
    assert_eq!(placed[0].color, Fill::Hue(340));
}

#[test]
fn size_by_kind_and_weight() {
    let placed = layout(&[
        Node::new("o", "o", NodeKind::Object, 6),
        Node::new("a", "a", NodeKind::Array, 3),
        Node::leaf("s", "s: \"x\"", NodeKind::String),
        Node::leaf("t", "t (…)", NodeKind::Truncated),
        Node::leaf("m", "+1 more", NodeKind::More),
    ]);
    let sizes: Vec<f64> = placed.iter().map(|p| p.size).collect();
    assert_eq!(sizes, vec![94.0, 76.0, 50.0, 48.0, 48.0]);
}

#[test]
fn size_bonus_is_capped() {
    let placed = layout(&[Node::new("o", "o", NodeKind::Object, 40)]);
    assert_eq!(placed[0].size, 94.0);
}

// --- connectors ---

#[test]
fn connectors_link_sequence_neighbours() {
    let placed = layout(&sample_nodes());
    let links = connectors(&placed);
    assert_eq!(links.len(), placed.len() - 1);
    for (i, link) in links.iter().enumerate() {
        assert_eq!(link.from, i);
        assert_eq!(link.to, i + 1);
    }
}

#[test]
fn connector_control_point_is_bent_midpoint() {
    let placed = layout(&extract(&json!({ "a": 1 }), DEFAULT_MAX_NODES));
    let link = connectors(&placed)[0];
    assert!(point_approx_eq(link.start, placed[0].render_position()));
    assert!(point_approx_eq(link.end, placed[1].render_position()));
    let mid = link.start.midpoint(link.end);
    assert!(point_approx_eq(link.control, Point::new(mid.x + 18.0, mid.y - 18.0)));
}

#[test]
fn single_node_has_no_connectors() {
    let placed = layout(&[Node::new("", "root", NodeKind::Array, 1)]);
    assert!(connectors(&placed).is_empty());
}

// --- scene ---

#[test]
fn build_scene_bundles_canvas_and_nodes() {
    let scene = build_scene(&json!({}), DEFAULT_MAX_NODES);
    assert_eq!(scene.width, 900.0);
    assert_eq!(scene.height, 520.0);
    assert_eq!(scene.nodes.len(), 1);
    assert!(scene.connectors.is_empty());
}

#[test]
fn build_scene_respects_cap() {
    let value: Value = serde_json::from_str(DEFAULT_INPUT).unwrap();
    let scene = build_scene(&value, 7);
    assert_eq!(scene.nodes.len(), 7);
    assert_eq!(scene.connectors.len(), 6);
}

#[test]
fn placed_node_serializes_flat() {
    let placed = layout(&[Node::leaf("a", "a: 1", NodeKind::Number)]);
    let value = serde_json::to_value(&placed[0]).unwrap();
    assert_eq!(value["path"], "a");
    assert_eq!(value["kind"], "number");
    assert_eq!(value["color"], "hsl(340 78% 56%)");
    assert_eq!(value["seed"], 3_826_002_220_u32);
    assert!(value["position"]["x"].is_f64());
}
