//! Structural renderer tests: layer order, determinism, defensiveness.

use crate::helpers::{TestEditorBuilder, screen};
use flowcanvas::config::EditorConfig;
use flowcanvas::geometry::Vec2;
use flowcanvas::render::DrawCommand;
use flowcanvas::types::{NodeId, NodePatch};
use flowcanvas::view::{Marquee, SelectionPatch};
use std::collections::BTreeSet;

fn kind_of(cmd: &DrawCommand) -> &'static str {
    match cmd {
        DrawCommand::Clear { .. } => "clear",
        DrawCommand::Line { .. } => "line",
        DrawCommand::Cubic { .. } => "cubic",
        DrawCommand::Rect { .. } => "rect",
        DrawCommand::RoundedRect { .. } => "rounded_rect",
        DrawCommand::Circle { .. } => "circle",
        DrawCommand::Polygon { .. } => "polygon",
        DrawCommand::Text { .. } => "text",
    }
}

#[test]
fn first_command_clears_the_surface() {
    let editor = TestEditorBuilder::new().with_node("a", 0.0, 0.0).build();
    let cmds = editor.render(screen());
    assert!(matches!(cmds[0], DrawCommand::Clear { .. }));
}

#[test]
fn edges_draw_before_nodes() {
    let editor = TestEditorBuilder::new()
        .with_node("a", 0.0, 0.0)
        .with_node("b", 300.0, 200.0)
        .with_edge("a", "b")
        .build();
    let cmds = editor.render(screen());

    let first_cubic = cmds.iter().position(|c| kind_of(c) == "cubic").unwrap();
    let first_node_rect = cmds
        .iter()
        .position(|c| kind_of(c) == "rounded_rect")
        .unwrap();
    assert!(first_cubic < first_node_rect);
}

#[test]
fn marquee_draws_last() {
    let mut editor = TestEditorBuilder::new().with_node("a", 0.0, 0.0).build();
    editor.set_selection(SelectionPatch {
        marquee: Some(Some(Marquee {
            start: Vec2::new(10.0, 10.0),
            end: Vec2::new(60.0, 80.0),
        })),
        ..Default::default()
    });
    let cmds = editor.render(screen());
    assert_eq!(kind_of(cmds.last().unwrap()), "rect");
}

#[test]
fn selected_node_gets_a_ring() {
    let mut editor = TestEditorBuilder::new()
        .with_sized_node("a", 100.0, 100.0, 50.0, 50.0)
        .build();
    let plain = editor.render(screen());
    editor.set_selection(SelectionPatch {
        nodes: Some(BTreeSet::from([NodeId::from("a")])),
        ..Default::default()
    });
    let selected = editor.render(screen());

    let rings = |cmds: &[DrawCommand]| {
        cmds.iter()
            .filter(|c| matches!(c, DrawCommand::RoundedRect { fill: None, .. }))
            .count()
    };
    assert_eq!(rings(&plain), 0);
    assert_eq!(rings(&selected), 1);

    // Ring sits at a 2px outset around the node body.
    let ring = selected
        .iter()
        .find_map(|c| match c {
            DrawCommand::RoundedRect {
                rect, fill: None, ..
            } => Some(*rect),
            _ => None,
        })
        .unwrap();
    assert_eq!(ring.x, 98.0);
    assert_eq!(ring.y, 98.0);
    assert_eq!(ring.width, 54.0);
    assert_eq!(ring.height, 54.0);
}

#[test]
fn connect_gesture_draws_a_rubber_band() {
    let mut editor = TestEditorBuilder::new()
        .with_sized_node("a", 0.0, 0.0, 50.0, 50.0)
        .build();
    editor.begin_connect("a", Vec2::new(200.0, 200.0));

    let cmds = editor.render(screen());
    let band = cmds
        .iter()
        .find_map(|c| match c {
            DrawCommand::Line {
                from,
                to,
                dash: Some(_),
                ..
            } => Some((*from, *to)),
            _ => None,
        })
        .expect("a dashed rubber band line");
    // From the source center to the cursor.
    assert_eq!(band.0, Vec2::new(25.0, 25.0));
    assert_eq!(band.1, Vec2::new(200.0, 200.0));
}

#[test]
fn status_badge_uses_status_color() {
    let mut editor = TestEditorBuilder::new()
        .with_sized_node("a", 0.0, 0.0, 50.0, 50.0)
        .build();
    editor.update_node(
        &NodeId::from("a"),
        NodePatch {
            status: Some(flowcanvas::types::NodeStatus::Error),
            ..Default::default()
        },
    );
    let cmds = editor.render(screen());
    assert!(cmds.iter().any(|c| matches!(
        c,
        DrawCommand::Circle { fill, .. } if fill == flowcanvas::types::NodeStatus::Error.color()
    )));
}

#[test]
fn grid_can_be_disabled() {
    let mut config = EditorConfig::default();
    config.show_grid = false;
    let editor = TestEditorBuilder::new().with_config(config).build();
    let cmds = editor.render(screen());
    assert!(
        !cmds
            .iter()
            .any(|c| matches!(c, DrawCommand::Line { dash: None, .. }))
    );
}

#[test]
fn render_does_not_mutate_state() {
    let editor = TestEditorBuilder::new()
        .with_node("a", 0.0, 0.0)
        .with_node("b", 300.0, 200.0)
        .with_edge("a", "b")
        .build();

    let before_nodes = editor.graph().0.to_vec();
    let first = editor.render(screen());
    let second = editor.render(screen());
    assert_eq!(first, second);
    assert_eq!(editor.graph().0, before_nodes.as_slice());
}

#[test]
fn viewport_scales_and_offsets_nodes() {
    let mut editor = TestEditorBuilder::new()
        .with_sized_node("a", 100.0, 50.0, 50.0, 50.0)
        .build();
    editor.set_viewport(flowcanvas::view::ViewportPatch {
        zoom: Some(2.0),
        offset: Some(Vec2::new(30.0, -10.0)),
    });

    let cmds = editor.render(screen());
    let body = cmds
        .iter()
        .find_map(|c| match c {
            DrawCommand::RoundedRect {
                rect,
                fill: Some(_),
                ..
            } => Some(*rect),
            _ => None,
        })
        .unwrap();
    assert_eq!(body.x, 230.0);
    assert_eq!(body.y, 90.0);
    assert_eq!(body.width, 100.0);
    assert_eq!(body.height, 100.0);
}
