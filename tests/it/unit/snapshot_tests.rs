//! Snapshot tests using the insta crate.
//!
//! Snapshot testing captures output and stores it in `.snap` files, making
//! it easy to verify and update expected values. Used here for the stable
//! lookup tables (kind names, status palette, default sizes); structural
//! renderer guarantees live in `render_tests`.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use flowcanvas::geometry::{Size, Vec2};
use flowcanvas::types::{Edge, EdgeId, Node, NodeId, NodeKind, NodeStatus};
use flowcanvas::view::{Marquee, Selection};

// ============================================================================
// Lookup Table Snapshots
// ============================================================================

#[test]
fn snapshot_node_kind_variants() {
    for kind in NodeKind::all() {
        insta::assert_json_snapshot!(format!("node_kind_{}", kind.label().to_lowercase()), kind);
    }
}

#[test]
fn snapshot_node_status_table() {
    let table: Vec<(&str, &str)> = NodeStatus::all()
        .iter()
        .map(|s| (s.label(), s.color()))
        .collect();
    insta::assert_json_snapshot!("node_status_table", table);
}

#[test]
fn snapshot_node_default_sizes() {
    let sizes: Vec<(&str, f32, f32)> = NodeKind::all()
        .iter()
        .map(|k| {
            let size = k.default_size();
            (k.label(), size.width, size.height)
        })
        .collect();
    insta::assert_json_snapshot!("node_default_sizes", sizes);
}

// ============================================================================
// Serialization Round Trips
// ============================================================================

fn sample_node() -> Node {
    Node {
        id: NodeId::from("extract-orders"),
        kind: NodeKind::Source,
        label: "Extract Orders".to_string(),
        position: Vec2::new(40.0, 120.0),
        size: Size::new(160.0, 60.0),
        status: NodeStatus::Running,
        color: Some("#2563eb".to_string()),
        icon: Some("📦".to_string()),
        locked: false,
        hidden: false,
        inputs: vec![],
        outputs: vec!["rows".to_string()],
        meta: serde_json::json!({"service": "postgres"}),
    }
}

fn sample_edge() -> Edge {
    Edge {
        id: EdgeId::from("orders-to-clean"),
        from_node: NodeId::from("extract-orders"),
        to_node: NodeId::from("clean-rows"),
        from_port: Some("rows".to_string()),
        to_port: Some("input".to_string()),
        label: Some("orders".to_string()),
        dashed: true,
        color: None,
        meta: serde_json::Value::Null,
    }
}

#[test]
fn node_serialization_round_trips() {
    let node = sample_node();
    let json = serde_json::to_string(&node).unwrap();
    let back: Node = serde_json::from_str(&json).unwrap();
    assert_eq!(back, node);
}

#[test]
fn edge_serialization_round_trips() {
    let edge = sample_edge();
    let json = serde_json::to_string(&edge).unwrap();
    let back: Edge = serde_json::from_str(&json).unwrap();
    assert_eq!(back, edge);
}

#[test]
fn node_optional_fields_default_on_deserialize() {
    // A host can supply the minimal shape; everything optional fills in.
    let json = r#"{
        "id": "n1",
        "kind": "transform",
        "label": "Clean",
        "position": {"x": 0.0, "y": 0.0},
        "size": {"width": 160.0, "height": 60.0},
        "status": "idle"
    }"#;
    let node: Node = serde_json::from_str(json).unwrap();
    assert!(!node.locked);
    assert!(!node.hidden);
    assert!(node.inputs.is_empty());
    assert!(node.color.is_none());
    assert_eq!(node.meta, serde_json::Value::Null);
}

#[test]
fn selection_serialization_round_trips() {
    let selection = Selection {
        nodes: [NodeId::from("a"), NodeId::from("b")].into_iter().collect(),
        edges: [EdgeId::from("e1")].into_iter().collect(),
        marquee: Some(Marquee {
            start: Vec2::new(1.0, 2.0),
            end: Vec2::new(3.0, 4.0),
        }),
    };
    let json = serde_json::to_string(&selection).unwrap();
    let back: Selection = serde_json::from_str(&json).unwrap();
    assert_eq!(back, selection);
}
