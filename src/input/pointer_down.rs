//! Pointer down event handling - gesture entry.
//!
//! ## Performance Notes
//!
//! Pointer down is a hot path during interaction. Hit testing goes through
//! the R-tree spatial index for O(log n) lookups.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::editor::Editor;
use crate::geometry::{Vec2, screen_to_world};
use crate::input::Modifiers;
use crate::profile_scope;
use crate::types::NodeId;
use crate::view::{Marquee, SelectionPatch};
use std::collections::BTreeSet;

impl Editor {
    /// Handle a pointer press at screen position `pos`.
    ///
    /// Transitions out of Idle per the gesture rules; a press while another
    /// gesture owns the pointer is ignored.
    pub fn on_pointer_down(&mut self, pos: Vec2, modifiers: Modifiers) {
        profile_scope!("handle_pointer_down");

        if !self.input.is_idle() {
            return;
        }

        let world = screen_to_world(pos, self.view.viewport.zoom, self.view.viewport.offset);
        let hit: Option<NodeId> = self.graph.node_at_point(world).map(|n| n.id.clone());

        // Connect modifier + node: start dragging out a new edge.
        if modifiers.alt
            && let Some(node_id) = hit.clone()
        {
            self.begin_connect(node_id, pos);
            return;
        }

        if let Some(node_id) = hit {
            // Clicking an already-selected node keeps the selection for a
            // group move; anything else selects just this node.
            if !self.view.selection.nodes.contains(&node_id) {
                self.set_selection(SelectionPatch {
                    nodes: Some(BTreeSet::from([node_id])),
                    edges: Some(BTreeSet::new()),
                    marquee: None,
                });
            }
            // Lazily: no graph mutation until the first move distinguishes
            // a drag from a click.
            self.input.start_dragging(pos);
            self.mark_dirty();
            return;
        }

        // Empty canvas: marquee with the modifier, pan without.
        if modifiers.shift {
            self.clear_selection();
            self.set_selection(SelectionPatch {
                marquee: Some(Some(Marquee {
                    start: pos,
                    end: pos,
                })),
                ..Default::default()
            });
            self.input.start_marqueeing();
        } else {
            self.clear_selection();
            self.input.start_panning(pos);
        }
        self.mark_dirty();
    }
}
