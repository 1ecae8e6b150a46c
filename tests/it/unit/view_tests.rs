//! Viewport and selection store tests through the editor surface.

use crate::helpers::TestEditorBuilder;
use flowcanvas::geometry::Vec2;
use flowcanvas::types::NodeId;
use flowcanvas::view::{Marquee, SelectionPatch, ViewportPatch};
use std::collections::BTreeSet;

#[test]
fn zoom_in_never_exceeds_max() {
    let mut editor = TestEditorBuilder::new().build();
    for _ in 0..200 {
        editor.zoom_in();
    }
    assert_eq!(editor.view.viewport.zoom, editor.config.zoom_max);
}

#[test]
fn zoom_out_never_drops_below_min() {
    let mut editor = TestEditorBuilder::new().build();
    for _ in 0..200 {
        editor.zoom_out();
    }
    assert_eq!(editor.view.viewport.zoom, editor.config.zoom_min);
}

#[test]
fn set_viewport_merges_shallowly() {
    let mut editor = TestEditorBuilder::new().build();
    editor.set_viewport(ViewportPatch {
        zoom: Some(2.0),
        offset: None,
    });
    editor.set_viewport(ViewportPatch {
        zoom: None,
        offset: Some(Vec2::new(-30.0, 40.0)),
    });
    assert_eq!(editor.view.viewport.zoom, 2.0);
    assert_eq!(editor.view.viewport.offset, Vec2::new(-30.0, 40.0));
}

#[test]
fn reset_view_restores_defaults() {
    let mut editor = TestEditorBuilder::new()
        .with_zoom(2.5)
        .with_offset(100.0, -100.0)
        .build();
    editor.reset_view();
    assert_eq!(editor.view.viewport.zoom, 1.0);
    assert_eq!(editor.view.viewport.offset, Vec2::ZERO);
}

#[test]
fn selection_is_pruned_after_remove() {
    let mut editor = TestEditorBuilder::new()
        .with_node("a", 0.0, 0.0)
        .with_node("b", 100.0, 0.0)
        .build();
    editor.set_selection(SelectionPatch {
        nodes: Some(BTreeSet::from([NodeId::from("a"), NodeId::from("b")])),
        ..Default::default()
    });

    editor.remove_nodes(&[NodeId::from("a")]);

    assert!(!editor.view.selection.nodes.contains(&NodeId::from("a")));
    assert!(editor.view.selection.nodes.contains(&NodeId::from("b")));
}

#[test]
fn clear_selection_resets_everything() {
    let mut editor = TestEditorBuilder::new().with_node("a", 0.0, 0.0).build();
    editor.set_selection(SelectionPatch {
        nodes: Some(BTreeSet::from([NodeId::from("a")])),
        marquee: Some(Some(Marquee {
            start: Vec2::ZERO,
            end: Vec2::new(10.0, 10.0),
        })),
        ..Default::default()
    });

    editor.clear_selection();

    assert!(editor.view.selection.nodes.is_empty());
    assert!(editor.view.selection.edges.is_empty());
    assert!(editor.view.selection.marquee.is_none());
}

#[test]
fn move_selected_skips_locked_nodes() {
    let mut editor = TestEditorBuilder::new()
        .with_node("free", 0.0, 0.0)
        .with_locked_node("pinned", 100.0, 100.0)
        .build();
    editor.set_selection(SelectionPatch {
        nodes: Some(BTreeSet::from([
            NodeId::from("free"),
            NodeId::from("pinned"),
        ])),
        ..Default::default()
    });

    editor.move_selected_nodes(Vec2::new(10.0, 10.0));

    let (nodes, _) = editor.graph();
    let free = nodes.iter().find(|n| n.id.as_str() == "free").unwrap();
    let pinned = nodes.iter().find(|n| n.id.as_str() == "pinned").unwrap();
    assert_eq!(free.position, Vec2::new(10.0, 10.0));
    assert_eq!(pinned.position, Vec2::new(100.0, 100.0));
}

#[test]
fn move_with_empty_selection_is_a_noop() {
    let mut editor = TestEditorBuilder::new().with_node("a", 0.0, 0.0).build();
    editor.move_selected_nodes(Vec2::new(10.0, 10.0));
    let (nodes, _) = editor.graph();
    assert_eq!(nodes[0].position, Vec2::ZERO);
}
