//! Graph store tests: mutation semantics and the no-dangling-edge invariant.

use flowcanvas::geometry::{Size, Vec2};
use flowcanvas::graph::GraphStore;
use flowcanvas::types::{EdgeDraft, NodeDraft, NodeId, NodePatch, NodeStatus};
use proptest::prelude::*;

fn node_at(id: &str, x: f32, y: f32) -> NodeDraft {
    NodeDraft {
        id: Some(NodeId::from(id)),
        position: Some(Vec2::new(x, y)),
        size: Some(Size::new(50.0, 50.0)),
        ..Default::default()
    }
}

#[test]
fn update_replaces_nested_values_wholesale() {
    let mut graph = GraphStore::new();
    let id = graph.add_node(node_at("a", 10.0, 20.0));

    // A position patch replaces the whole vector, not individual fields.
    graph.update_node(
        &id,
        NodePatch {
            position: Some(Vec2::new(99.0, 0.0)),
            ..Default::default()
        },
    );
    assert_eq!(graph.node(&id).unwrap().position, Vec2::new(99.0, 0.0));

    // Untouched fields survive.
    assert_eq!(graph.node(&id).unwrap().size, Size::new(50.0, 50.0));
}

#[test]
fn update_merges_status_and_label() {
    let mut graph = GraphStore::new();
    let id = graph.add_node(node_at("a", 0.0, 0.0));
    graph.update_node(
        &id,
        NodePatch {
            label: Some("Extract".to_string()),
            status: Some(NodeStatus::Running),
            ..Default::default()
        },
    );
    let node = graph.node(&id).unwrap();
    assert_eq!(node.label, "Extract");
    assert_eq!(node.status, NodeStatus::Running);
}

#[test]
fn removing_one_endpoint_removes_the_edge() {
    let mut graph = GraphStore::new();
    graph.add_node(node_at("a", 0.0, 0.0));
    graph.add_node(node_at("b", 100.0, 0.0));
    graph.add_edge(EdgeDraft::between("a", "b")).unwrap();

    graph.remove_nodes(&[NodeId::from("a")]);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn remove_unknown_ids_is_a_noop() {
    let mut graph = GraphStore::new();
    graph.add_node(node_at("a", 0.0, 0.0));
    assert_eq!(graph.remove_nodes(&[NodeId::from("ghost")]), 0);
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn edge_ids_are_assigned_when_missing() {
    let mut graph = GraphStore::new();
    graph.add_node(node_at("a", 0.0, 0.0));
    graph.add_node(node_at("b", 100.0, 0.0));
    let first = graph.add_edge(EdgeDraft::between("a", "b")).unwrap();
    let second = graph.add_edge(EdgeDraft::between("b", "a")).unwrap();
    assert_ne!(first, second);
}

#[test]
fn hit_test_uses_world_coordinates() {
    let mut graph = GraphStore::new();
    graph.add_node(node_at("a", 200.0, 200.0));

    assert!(graph.node_at_point(Vec2::new(225.0, 225.0)).is_some());
    assert!(graph.node_at_point(Vec2::new(199.0, 225.0)).is_none());
    // Inclusive edges
    assert!(graph.node_at_point(Vec2::new(200.0, 200.0)).is_some());
    assert!(graph.node_at_point(Vec2::new(250.0, 250.0)).is_some());
}

proptest! {
    /// After every operation in any sequence of adds and removes, each
    /// edge's endpoints still resolve to live nodes.
    #[test]
    fn no_dangling_edges_after_any_sequence(ops in proptest::collection::vec(0u8..4, 1..80)) {
        let mut graph = GraphStore::new();
        let mut counter = 0usize;

        for (step, op) in ops.iter().enumerate() {
            match op {
                0 => {
                    counter += 1;
                    graph.add_node(NodeDraft {
                        id: Some(NodeId::from(format!("n{counter}").as_str())),
                        position: Some(Vec2::new(step as f32 * 10.0, 0.0)),
                        ..Default::default()
                    });
                }
                1 => {
                    if graph.node_count() > 0 {
                        let victim = graph.nodes()[step % graph.node_count()].id.clone();
                        graph.remove_nodes(&[victim]);
                    }
                }
                2 => {
                    if graph.node_count() >= 2 {
                        let from = graph.nodes()[step % graph.node_count()].id.clone();
                        let to = graph.nodes()[(step / 2) % graph.node_count()].id.clone();
                        graph.add_edge(EdgeDraft {
                            id: None,
                            from_node: from,
                            to_node: to,
                            from_port: None,
                            to_port: None,
                            label: None,
                            dashed: None,
                            color: None,
                            meta: None,
                        });
                    }
                }
                _ => {
                    if graph.edge_count() > 0 {
                        let victim = graph.edges()[step % graph.edge_count()].id.clone();
                        graph.remove_edges(&[victim]);
                    }
                }
            }

            for edge in graph.edges() {
                prop_assert!(graph.contains_node(&edge.from_node));
                prop_assert!(graph.contains_node(&edge.to_node));
            }
        }
    }
}
