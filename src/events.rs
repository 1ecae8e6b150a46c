//! Notification hooks for external collaborators.
//!
//! Mutations publish `EditorEvent`s onto a channel-backed bus; the host
//! (side-panel editor, accessibility announcer, network sync) either polls a
//! receiver or drains pending events into an `EditorListener` on its own
//! loop. The engine never blocks on delivery.

use crate::types::{EdgeId, NodeId};
use crossbeam_channel::{Receiver, Sender, unbounded};
use serde::{Deserialize, Serialize};

/// Politeness level for announcements, mirroring ARIA live-region semantics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Politeness {
    #[default]
    Polite,
    Assertive,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EditorEvent {
    /// Nodes or edges were added, removed, replaced, or mutated.
    GraphChanged,
    /// The selected id sets changed (marquee growth alone does not fire this).
    SelectionChanged {
        nodes: Vec<NodeId>,
        edges: Vec<EdgeId>,
    },
    /// Zoom or offset changed.
    ViewportChanged,
    /// Human-directed notification; the host decides how to surface it.
    Announce {
        text: String,
        politeness: Politeness,
    },
}

/// Channel-backed event bus connecting the editor to host subscribers.
#[derive(Clone)]
pub struct EventBus {
    tx: Sender<EditorEvent>,
    rx: Receiver<EditorEvent>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    pub fn sender(&self) -> Sender<EditorEvent> {
        self.tx.clone()
    }

    pub fn receiver(&self) -> Receiver<EditorEvent> {
        self.rx.clone()
    }

    pub fn publish(&self, event: EditorEvent) {
        let _ = self.tx.send(event);
    }

    /// Dispatch all pending events to a listener.
    /// This is useful for processing events in the host's UI loop.
    pub fn dispatch_to<L: EditorListener>(&self, listener: &mut L) {
        while let Ok(event) = self.rx.try_recv() {
            listener.handle_event(&event);
        }
    }
}

/// Trait for components that respond to editor events.
pub trait EditorListener {
    fn handle_event(&mut self, event: &EditorEvent);
}

impl<F: FnMut(&EditorEvent)> EditorListener for F {
    fn handle_event(&mut self, event: &EditorEvent) {
        self(event)
    }
}
