//! Pointer up event handling - finalize marquee and connect gestures.

use crate::editor::Editor;
use crate::geometry::{Rect, Vec2, screen_to_world, world_to_screen};
use crate::input::InputState;
use crate::types::NodeId;
use crate::view::SelectionPatch;
use std::collections::BTreeSet;

impl Editor {
    /// Handle a pointer release at screen position `pos`.
    ///
    /// A release while Idle is ignored.
    pub fn on_pointer_up(&mut self, pos: Vec2) {
        match self.input.clone() {
            InputState::Panning { .. } | InputState::DraggingNodes { .. } => {
                self.input.reset();
            }
            InputState::Marqueeing => {
                self.finalize_marquee(pos);
                self.input.reset();
            }
            InputState::Connecting => {
                let world =
                    screen_to_world(pos, self.view.viewport.zoom, self.view.viewport.offset);
                match self.graph.node_at_point(world).map(|n| n.id.clone()) {
                    Some(target) => {
                        self.complete_connect(target);
                    }
                    None => self.cancel_connect(),
                }
                self.input.reset();
            }
            InputState::Idle => {}
        }
    }

    /// Select every visible node whose screen-space anchor point falls
    /// inside the marquee, then clear it and announce the count.
    fn finalize_marquee(&mut self, release: Vec2) {
        let Some(marquee) = self.view.selection.marquee else {
            return;
        };
        let rect = Rect::from_corners(marquee.start, release);
        let zoom = self.view.viewport.zoom;
        let offset = self.view.viewport.offset;

        let selected: BTreeSet<NodeId> = self
            .graph
            .nodes()
            .iter()
            .filter(|n| !n.hidden)
            .filter(|n| rect.contains(world_to_screen(n.position, zoom, offset)))
            .map(|n| n.id.clone())
            .collect();

        let count = selected.len();
        self.set_selection(SelectionPatch {
            nodes: Some(selected),
            edges: Some(BTreeSet::new()),
            marquee: Some(None),
        });
        self.announce(format!(
            "{} node{} selected",
            count,
            if count == 1 { "" } else { "s" }
        ));
    }
}
