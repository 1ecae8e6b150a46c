//! Edge layer - cubic paths between node centers, arrow heads, labels.

use super::Scene;
use super::commands::{DrawCommand, Stroke};
use crate::constants::{
    ARROW_SIZE, EDGE_COLOR, EDGE_DASH, EDGE_HIGHLIGHT_COLOR, EDGE_LABEL_FONT_SIZE,
    EDGE_LABEL_HEIGHT, EDGE_LABEL_PADDING, EDGE_WIDTH,
};
use crate::geometry::{Rect, Vec2, world_to_screen};
use crate::types::{Node, NodeId};
use std::collections::HashMap;

/// Control points of the smooth cubic between two screen points.
pub(super) fn edge_control_points(from: Vec2, to: Vec2) -> (Vec2, Vec2) {
    let dx = (to.x - from.x).abs();
    let c1 = Vec2::new(from.x + dx * 0.5, from.y);
    let c2 = Vec2::new(to.x - dx * 0.5, to.y);
    (c1, c2)
}

/// Triangle polygon for an arrow head ending at `to`, oriented along the
/// incoming direction `from -> to`.
pub(super) fn arrow_head(from: Vec2, to: Vec2) -> Vec<Vec2> {
    let angle = (to.y - from.y).atan2(to.x - from.x);
    let size = ARROW_SIZE;
    vec![
        to,
        Vec2::new(
            to.x - size * (angle - std::f32::consts::FRAC_PI_6).cos(),
            to.y - size * (angle - std::f32::consts::FRAC_PI_6).sin(),
        ),
        Vec2::new(
            to.x - size * (angle + std::f32::consts::FRAC_PI_6).cos(),
            to.y - size * (angle + std::f32::consts::FRAC_PI_6).sin(),
        ),
    ]
}

pub(super) fn push_edges(cmds: &mut Vec<DrawCommand>, scene: &Scene<'_>) {
    let nodes_by_id: HashMap<&NodeId, &Node> =
        scene.nodes.iter().map(|n| (&n.id, n)).collect();
    let zoom = scene.viewport.zoom;
    let offset = scene.viewport.offset;

    for edge in scene.edges {
        // The store guarantees both endpoints exist, but the renderer stays
        // defensive: an edge with a missing endpoint is skipped, not a fault.
        let Some(from) = nodes_by_id.get(&edge.from_node) else {
            continue;
        };
        let Some(to) = nodes_by_id.get(&edge.to_node) else {
            continue;
        };

        let start = world_to_screen(from.center(), zoom, offset);
        let end = world_to_screen(to.center(), zoom, offset);
        let (c1, c2) = edge_control_points(start, end);

        let color = if scene.selection.edges.contains(&edge.id) {
            EDGE_HIGHLIGHT_COLOR.to_string()
        } else {
            edge.color.clone().unwrap_or_else(|| EDGE_COLOR.to_string())
        };

        cmds.push(DrawCommand::Cubic {
            from: start,
            c1,
            c2,
            to: end,
            color: color.clone(),
            width: EDGE_WIDTH,
            dash: edge.dashed.then_some(EDGE_DASH),
        });

        cmds.push(DrawCommand::Polygon {
            points: arrow_head(c2, end),
            fill: color,
        });

        if let Some(label) = &edge.label {
            push_edge_label(cmds, (start + end) / 2.0, label);
        }
    }
}

fn push_edge_label(cmds: &mut Vec<DrawCommand>, mid: Vec2, label: &str) {
    // Text width is backend-dependent; approximate with the glyph advance
    // the badge font uses so the box hugs the label.
    let text_width = label.chars().count() as f32 * EDGE_LABEL_FONT_SIZE * 0.55;
    let w = text_width + EDGE_LABEL_PADDING * 2.0;
    let h = EDGE_LABEL_HEIGHT;
    let rect = Rect::new(mid.x - w / 2.0, mid.y - h / 2.0, w, h);

    cmds.push(DrawCommand::Rect {
        rect,
        fill: Some("#ffffff".to_string()),
        stroke: Some(Stroke::new("rgba(0,0,0,0.15)", 4.0)),
    });
    cmds.push(DrawCommand::Text {
        origin: Vec2::new(rect.x + EDGE_LABEL_PADDING, rect.y + 13.0),
        text: label.to_string(),
        size: EDGE_LABEL_FONT_SIZE,
        color: "#111827".to_string(),
    });
}
