//! Pointer move event handling - per-state drag updates and hover.
//!
//! ## Performance Notes
//!
//! Pointer move fires very frequently during drags (60+ times per second).
//! Each state does the minimum work for one delta: panning touches only the
//! offset, node drags batch one translate per selected node, marquee growth
//! touches only the rectangle.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::editor::Editor;
use crate::geometry::{Vec2, delta_screen_to_world, screen_to_world};
use crate::input::InputState;
use crate::profile_scope;
use crate::view::{Marquee, SelectionPatch, ViewportPatch};

impl Editor {
    /// Handle a pointer move to screen position `pos`.
    pub fn on_pointer_move(&mut self, pos: Vec2) {
        profile_scope!("handle_pointer_move");

        match self.input.clone() {
            InputState::Panning { last_pos } => {
                let delta = pos - last_pos;
                self.input = InputState::Panning { last_pos: pos };
                let offset = self.view.viewport.offset + delta;
                self.set_viewport(ViewportPatch {
                    zoom: None,
                    offset: Some(offset),
                });
            }
            InputState::DraggingNodes {
                anchor,
                pressed_at,
                moved,
            } => {
                // A press only becomes a drag once the pointer clears the
                // configured threshold; clicks never mutate the graph.
                if !moved && pos.distance(pressed_at) <= self.config.drag_threshold {
                    return;
                }
                self.input = InputState::DraggingNodes {
                    anchor: pos,
                    pressed_at,
                    moved: true,
                };
                let world_delta = delta_screen_to_world(pos - anchor, self.view.viewport.zoom);
                self.move_selected_nodes(world_delta);
            }
            InputState::Marqueeing => {
                if let Some(marquee) = self.view.selection.marquee {
                    self.set_selection(SelectionPatch {
                        marquee: Some(Some(Marquee {
                            start: marquee.start,
                            end: pos,
                        })),
                        ..Default::default()
                    });
                }
            }
            InputState::Connecting => {
                self.view.update_connect_cursor(pos);
                self.mark_dirty();
            }
            InputState::Idle => {
                self.update_hover(pos);
            }
        }
    }

    /// Track the node under the pointer for the renderer's hover ring.
    fn update_hover(&mut self, pos: Vec2) {
        let world = screen_to_world(pos, self.view.viewport.zoom, self.view.viewport.offset);
        let hovered = self.graph.node_at_point(world).map(|n| n.id.clone());
        if hovered != self.view.hovered_node {
            self.view.set_hovered(hovered);
            self.mark_dirty();
        }
    }
}
