//! Transient overlays - the connect rubber band and the marquee rectangle.

use super::Scene;
use super::commands::{DrawCommand, Stroke};
use crate::constants::{
    CONNECT_DASH, CONNECT_WIDTH, EDGE_HIGHLIGHT_COLOR, MARQUEE_FILL, MARQUEE_STROKE,
    MARQUEE_STROKE_WIDTH,
};
use crate::geometry::{Rect, world_to_screen};

/// Dashed line from the connect source's center to the pointer.
pub(super) fn push_rubber_band(cmds: &mut Vec<DrawCommand>, scene: &Scene<'_>) {
    let Some(gesture) = scene.connecting else {
        return;
    };
    // Source may have been removed mid-gesture by an external mutation.
    let Some(from) = scene.nodes.iter().find(|n| n.id == gesture.from_node) else {
        return;
    };

    let start = world_to_screen(from.center(), scene.viewport.zoom, scene.viewport.offset);
    cmds.push(DrawCommand::Line {
        from: start,
        to: gesture.cursor,
        color: EDGE_HIGHLIGHT_COLOR.to_string(),
        width: CONNECT_WIDTH,
        dash: Some(CONNECT_DASH),
    });
}

/// Translucent marquee rectangle, normalized across drag directions.
pub(super) fn push_marquee(cmds: &mut Vec<DrawCommand>, scene: &Scene<'_>) {
    let Some(marquee) = &scene.selection.marquee else {
        return;
    };

    cmds.push(DrawCommand::Rect {
        rect: Rect::from_corners(marquee.start, marquee.end),
        fill: Some(MARQUEE_FILL.to_string()),
        stroke: Some(Stroke::new(MARQUEE_STROKE, MARQUEE_STROKE_WIDTH)),
    });
}
