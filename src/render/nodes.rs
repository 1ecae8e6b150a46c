//! Node layer - rounded rectangles, selection/hover rings, labels, badges.

use super::Scene;
use super::commands::{DrawCommand, Stroke};
use crate::constants::{
    HOVER_STROKE, MARQUEE_STROKE, NODE_CORNER_RADIUS, NODE_FONT_SIZE, NODE_ICON_ADVANCE,
    NODE_LABEL_COLOR, NODE_PADDING, NODE_STROKE, SELECTION_RING_OUTSET, STATUS_BADGE_SIZE,
};
use crate::geometry::{Rect, Vec2, world_to_screen};

pub(super) fn push_nodes(cmds: &mut Vec<DrawCommand>, scene: &Scene<'_>) {
    let zoom = scene.viewport.zoom;
    let offset = scene.viewport.offset;

    for node in scene.nodes {
        if node.hidden {
            continue;
        }

        let origin = world_to_screen(node.position, zoom, offset);
        let rect = Rect::new(
            origin.x,
            origin.y,
            node.size.width * zoom,
            node.size.height * zoom,
        );
        let radius = NODE_CORNER_RADIUS.max(NODE_CORNER_RADIUS * zoom);

        // Node body
        cmds.push(DrawCommand::RoundedRect {
            rect,
            radius,
            fill: Some(node.fill_color().to_string()),
            stroke: Some(Stroke::new(NODE_STROKE, 1.0)),
        });

        // Selection/hover ring at a fixed screen-pixel outset
        let ring_color = if scene.selection.nodes.contains(&node.id) {
            Some(MARQUEE_STROKE)
        } else if scene.hovered_node == Some(&node.id) {
            Some(HOVER_STROKE)
        } else {
            None
        };
        if let Some(color) = ring_color {
            cmds.push(DrawCommand::RoundedRect {
                rect: Rect::new(
                    rect.x - SELECTION_RING_OUTSET,
                    rect.y - SELECTION_RING_OUTSET,
                    rect.width + SELECTION_RING_OUTSET * 2.0,
                    rect.height + SELECTION_RING_OUTSET * 2.0,
                ),
                radius,
                fill: None,
                stroke: Some(Stroke::new(color, 2.0)),
            });
        }

        // Icon and label
        let padding = NODE_PADDING * zoom;
        let font_size = NODE_FONT_SIZE.max(NODE_FONT_SIZE * zoom);
        let baseline = origin.y + 20.0 * zoom;
        let mut label_x = origin.x + padding;
        if let Some(icon) = &node.icon {
            cmds.push(DrawCommand::Text {
                origin: Vec2::new(label_x, baseline),
                text: icon.clone(),
                size: font_size,
                color: NODE_LABEL_COLOR.to_string(),
            });
            label_x += NODE_ICON_ADVANCE * zoom;
        }
        cmds.push(DrawCommand::Text {
            origin: Vec2::new(label_x, baseline),
            text: node.label.clone(),
            size: font_size,
            color: NODE_LABEL_COLOR.to_string(),
        });

        // Status badge (top right)
        cmds.push(DrawCommand::Circle {
            center: Vec2::new(rect.x + rect.width - padding, rect.y + padding),
            radius: STATUS_BADGE_SIZE * zoom / 2.0,
            fill: node.status.color().to_string(),
        });
    }
}
