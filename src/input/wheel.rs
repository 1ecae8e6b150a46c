//! Wheel event handling - zoom-to-pointer and scroll panning.

use crate::editor::Editor;
use crate::geometry::{Vec2, clamp, screen_to_world};
use crate::input::Modifiers;
use crate::view::ViewportPatch;

/// Scroll amount reported by the host, in pixels or lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelDelta {
    Pixels(Vec2),
    Lines(Vec2),
}

impl WheelDelta {
    fn to_pixels(self) -> Vec2 {
        match self {
            WheelDelta::Pixels(v) => v,
            WheelDelta::Lines(v) => v * crate::constants::WHEEL_LINE_PIXELS,
        }
    }
}

impl Editor {
    /// Handle a wheel event at screen position `cursor`.
    ///
    /// With the zoom modifier held the wheel zooms toward the cursor,
    /// keeping the world point under it fixed; otherwise it pans.
    pub fn on_wheel(&mut self, cursor: Vec2, delta: WheelDelta, modifiers: Modifiers) {
        if modifiers.control {
            let pixels = delta.to_pixels();
            let factor = if pixels.y > 0.0 {
                self.config.wheel_zoom_out
            } else {
                self.config.wheel_zoom_in
            };
            self.zoom_around(cursor, factor);
            return;
        }

        let offset = self.view.viewport.offset + delta.to_pixels();
        self.set_viewport(ViewportPatch {
            zoom: None,
            offset: Some(offset),
        });
    }

    /// Multiply the zoom by `factor`, clamped, adjusting the offset so the
    /// world point under `cursor` stays under it.
    pub fn zoom_around(&mut self, cursor: Vec2, factor: f32) {
        let viewport = self.view.viewport;
        let zoom_new = clamp(
            viewport.zoom * factor,
            self.config.zoom_min,
            self.config.zoom_max,
        );
        if zoom_new == viewport.zoom {
            return;
        }

        let world_before = screen_to_world(cursor, viewport.zoom, viewport.offset);
        let world_after = screen_to_world(cursor, zoom_new, viewport.offset);
        let offset = viewport.offset + (world_after - world_before) * zoom_new;

        self.set_viewport(ViewportPatch {
            zoom: Some(zoom_new),
            offset: Some(offset),
        });
    }
}
