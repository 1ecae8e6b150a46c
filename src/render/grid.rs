//! Background and grid layer.

use super::Scene;
use super::commands::DrawCommand;
use crate::constants::{CANVAS_BACKGROUND, GRID_COLOR};

/// Clear the surface and emit grid lines scaled and offset by the viewport.
pub(super) fn push_background(cmds: &mut Vec<DrawCommand>, scene: &Scene<'_>) {
    cmds.push(DrawCommand::Clear {
        color: CANVAS_BACKGROUND.to_string(),
    });

    if !scene.config.show_grid {
        return;
    }

    let step = scene.config.grid_size * scene.viewport.zoom;
    // A sub-pixel grid would emit an unbounded number of lines.
    if step <= 1.0 {
        return;
    }

    let width = scene.screen.width;
    let height = scene.screen.height;
    let start_x = scene.viewport.offset.x.rem_euclid(step);
    let start_y = scene.viewport.offset.y.rem_euclid(step);

    let mut x = start_x;
    while x < width {
        cmds.push(DrawCommand::Line {
            from: crate::geometry::Vec2::new(x, 0.0),
            to: crate::geometry::Vec2::new(x, height),
            color: GRID_COLOR.to_string(),
            width: 1.0,
            dash: None,
        });
        x += step;
    }

    let mut y = start_y;
    while y < height {
        cmds.push(DrawCommand::Line {
            from: crate::geometry::Vec2::new(0.0, y),
            to: crate::geometry::Vec2::new(width, y),
            color: GRID_COLOR.to_string(),
            width: 1.0,
            dash: None,
        });
        y += step;
    }
}
