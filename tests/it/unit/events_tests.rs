//! Notification hook tests.

use crate::helpers::{TestEditorBuilder, announcements, drain_events};
use flowcanvas::events::{EditorEvent, Politeness};
use flowcanvas::types::{NodeDraft, NodeId};
use flowcanvas::view::SelectionPatch;
use std::collections::BTreeSet;

#[test]
fn graph_changed_fires_on_add() {
    let mut editor = TestEditorBuilder::new().build();
    editor.add_node(NodeDraft::default());
    let events = drain_events(&editor);
    assert!(events.contains(&EditorEvent::GraphChanged));
    assert_eq!(announcements(&events), vec!["Node added".to_string()]);
}

#[test]
fn selection_changed_carries_the_ids() {
    let mut editor = TestEditorBuilder::new()
        .with_node("a", 0.0, 0.0)
        .with_node("b", 100.0, 0.0)
        .build();
    editor.set_selection(SelectionPatch {
        nodes: Some(BTreeSet::from([NodeId::from("a"), NodeId::from("b")])),
        ..Default::default()
    });

    let events = drain_events(&editor);
    let selection = events
        .iter()
        .find_map(|e| match e {
            EditorEvent::SelectionChanged { nodes, .. } => Some(nodes.clone()),
            _ => None,
        })
        .expect("a SelectionChanged event");
    assert_eq!(selection, vec![NodeId::from("a"), NodeId::from("b")]);
}

#[test]
fn identical_selection_does_not_refire() {
    let mut editor = TestEditorBuilder::new().with_node("a", 0.0, 0.0).build();
    let patch = || SelectionPatch {
        nodes: Some(BTreeSet::from([NodeId::from("a")])),
        ..Default::default()
    };
    editor.set_selection(patch());
    drain_events(&editor);

    editor.set_selection(patch());
    let events = drain_events(&editor);
    assert!(
        !events
            .iter()
            .any(|e| matches!(e, EditorEvent::SelectionChanged { .. }))
    );
}

#[test]
fn viewport_changed_fires_on_zoom() {
    let mut editor = TestEditorBuilder::new().build();
    editor.zoom_in();
    assert!(drain_events(&editor).contains(&EditorEvent::ViewportChanged));
}

#[test]
fn announcements_default_to_polite() {
    let mut editor = TestEditorBuilder::new().build();
    editor.add_node(NodeDraft::default());
    let politeness = drain_events(&editor)
        .into_iter()
        .find_map(|e| match e {
            EditorEvent::Announce { politeness, .. } => Some(politeness),
            _ => None,
        })
        .unwrap();
    assert_eq!(politeness, Politeness::Polite);
}

#[test]
fn dispatch_to_listener_drains_the_queue() {
    let mut editor = TestEditorBuilder::new().build();
    editor.zoom_in();
    editor.zoom_out();

    let mut count = 0usize;
    editor.dispatch_events(&mut |_: &EditorEvent| count += 1);
    assert!(count >= 2);
    assert!(editor.events().try_recv().is_err());
}
