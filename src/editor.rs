//! The editor context - composition root for one diagram instance.
//!
//! `Editor` owns the graph store, the view store, the active gesture, and
//! the event bus. It is an explicit context object: no module-level mutable
//! state anywhere, so hosts can run any number of independent editors and
//! tests construct them freely.
//!
//! Every mutation is synchronous on the caller's thread, sets the dirty
//! flag, and publishes the corresponding events. Hosts that receive
//! external mutations (network sync, properties panel) must funnel them
//! through the same thread as pointer events.

use crate::config::EditorConfig;
use crate::events::{EditorEvent, EditorListener, EventBus, Politeness};
use crate::geometry::{Size, Vec2};
use crate::graph::GraphStore;
use crate::input::InputState;
use crate::render::{DrawCommand, Scene, render_scene};
use crate::types::{Edge, EdgeDraft, EdgeId, Node, NodeDraft, NodeId, NodePatch};
use crate::view::{SelectionPatch, ViewState, ViewportPatch};
use crossbeam_channel::Receiver;
use tracing::debug;

pub struct Editor {
    pub config: EditorConfig,
    pub graph: GraphStore,
    pub view: ViewState,
    pub(crate) input: InputState,
    bus: EventBus,
    dirty: bool,
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            graph: GraphStore::new(),
            view: ViewState::new(),
            input: InputState::Idle,
            bus: EventBus::new(),
            dirty: false,
        }
    }

    // ------------------------------------------------------------------
    // Host plumbing
    // ------------------------------------------------------------------

    /// Receiver end of the notification hooks; clone-cheap.
    pub fn events(&self) -> Receiver<EditorEvent> {
        self.bus.receiver()
    }

    /// Drain pending events into a listener on the host's loop.
    pub fn dispatch_events<L: EditorListener>(&self, listener: &mut L) {
        self.bus.dispatch_to(listener);
    }

    /// Whether state changed since the last `take_dirty`. Hosts coalesce
    /// rapid mutations into one render but must render once this is true.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn publish(&self, event: EditorEvent) {
        self.bus.publish(event);
    }

    pub(crate) fn announce(&self, text: impl Into<String>) {
        self.bus.publish(EditorEvent::Announce {
            text: text.into(),
            politeness: Politeness::Polite,
        });
    }

    pub(crate) fn publish_selection_changed(&self) {
        self.bus.publish(EditorEvent::SelectionChanged {
            nodes: self.view.selection.nodes.iter().cloned().collect(),
            edges: self.view.selection.edges.iter().cloned().collect(),
        });
    }

    /// Current gesture, for hosts that render cursors per state.
    pub fn input_state(&self) -> &InputState {
        &self.input
    }

    // ------------------------------------------------------------------
    // External graph interface
    // ------------------------------------------------------------------

    /// Replace the current graph wholesale, then re-validate the selection.
    pub fn load_graph(&mut self, nodes: Vec<Node>, edges: Vec<Edge>) {
        self.graph.replace(nodes, edges);
        let selection_changed = self.view.prune(&self.graph);
        // A connect gesture whose source vanished with the old graph cannot
        // complete; release the pointer ownership too.
        if self.view.connecting.is_none() && self.input.is_connecting() {
            self.input.reset();
        }
        self.mark_dirty();
        self.publish(EditorEvent::GraphChanged);
        if selection_changed {
            self.publish_selection_changed();
        }
        debug!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "graph loaded"
        );
    }

    /// Snapshot read of the current graph.
    pub fn graph(&self) -> (&[Node], &[Edge]) {
        (self.graph.nodes(), self.graph.edges())
    }

    pub fn add_node(&mut self, draft: NodeDraft) -> NodeId {
        let id = self.graph.add_node(draft);
        self.mark_dirty();
        self.publish(EditorEvent::GraphChanged);
        self.announce("Node added");
        id
    }

    /// Patch a node in place; the renderer reflects it on the next frame.
    pub fn update_node(&mut self, id: &NodeId, patch: NodePatch) {
        self.graph.update_node(id, patch);
        self.mark_dirty();
        self.publish(EditorEvent::GraphChanged);
    }

    /// Remove nodes, cascade their edges, and prune the selection.
    pub fn remove_nodes(&mut self, ids: &[NodeId]) {
        let removed = self.graph.remove_nodes(ids);
        if removed == 0 {
            return;
        }
        let selection_changed = self.view.prune(&self.graph);
        self.mark_dirty();
        self.publish(EditorEvent::GraphChanged);
        if selection_changed {
            self.publish_selection_changed();
        }
        self.announce("Node(s) removed");
    }

    pub fn add_edge(&mut self, draft: EdgeDraft) -> Option<EdgeId> {
        if !self.config.allow_self_loops && draft.from_node == draft.to_node {
            debug!(node = %draft.from_node, "self-loop edges are disabled, ignoring");
            return None;
        }
        let id = self.graph.add_edge(draft)?;
        self.mark_dirty();
        self.publish(EditorEvent::GraphChanged);
        self.announce("Edge added");
        Some(id)
    }

    pub fn remove_edges(&mut self, ids: &[EdgeId]) {
        let removed = self.graph.remove_edges(ids);
        if removed == 0 {
            return;
        }
        let selection_changed = self.view.prune(&self.graph);
        self.mark_dirty();
        self.publish(EditorEvent::GraphChanged);
        if selection_changed {
            self.publish_selection_changed();
        }
        self.announce("Edge(s) removed");
    }

    // ------------------------------------------------------------------
    // Viewport and selection interface
    // ------------------------------------------------------------------

    pub fn set_viewport(&mut self, patch: ViewportPatch) {
        self.view.set_viewport(patch, &self.config);
        self.mark_dirty();
        self.publish(EditorEvent::ViewportChanged);
    }

    pub fn set_selection(&mut self, patch: SelectionPatch) {
        let before = (
            self.view.selection.nodes.clone(),
            self.view.selection.edges.clone(),
        );
        self.view.set_selection(patch);
        self.mark_dirty();
        if before.0 != self.view.selection.nodes || before.1 != self.view.selection.edges {
            self.publish_selection_changed();
        }
    }

    pub fn clear_selection(&mut self) {
        if self.view.selection == Default::default() {
            return;
        }
        let had_ids = !self.view.selection.is_empty();
        self.view.clear_selection();
        self.mark_dirty();
        if had_ids {
            self.publish_selection_changed();
        }
    }

    pub fn zoom_in(&mut self) {
        self.view.zoom_in(&self.config);
        self.mark_dirty();
        self.publish(EditorEvent::ViewportChanged);
    }

    pub fn zoom_out(&mut self) {
        self.view.zoom_out(&self.config);
        self.mark_dirty();
        self.publish(EditorEvent::ViewportChanged);
    }

    pub fn reset_view(&mut self) {
        self.view.reset_view(&self.config);
        self.mark_dirty();
        self.publish(EditorEvent::ViewportChanged);
    }

    /// Move every selected, non-locked node by a world-space delta.
    pub fn move_selected_nodes(&mut self, delta: Vec2) {
        let ids: Vec<NodeId> = self.view.selection.nodes.iter().cloned().collect();
        let mut moved = false;
        for id in &ids {
            moved |= self.graph.translate_node(id, delta);
        }
        if moved {
            self.mark_dirty();
            self.publish(EditorEvent::GraphChanged);
        }
    }

    // ------------------------------------------------------------------
    // Connect gesture interface
    // ------------------------------------------------------------------

    /// Start an edge drag from a node. No-op when the node doesn't exist.
    pub fn begin_connect(&mut self, from_node: impl Into<NodeId>, cursor: Vec2) {
        let from_node = from_node.into();
        if !self.graph.contains_node(&from_node) {
            debug!(node = %from_node, "begin_connect on unknown node ignored");
            return;
        }
        self.view.begin_connect(from_node, cursor);
        self.input.start_connecting();
        self.mark_dirty();
    }

    /// Finish the active connect gesture on a target node. Adds exactly one
    /// edge; the gesture is cleared whether or not the edge was allowed.
    pub fn complete_connect(&mut self, to_node: impl Into<NodeId>) -> Option<EdgeId> {
        let gesture = self.view.take_connect()?;
        self.input.reset();
        self.mark_dirty();

        let to_node = to_node.into();
        if !self.config.allow_self_loops && gesture.from_node == to_node {
            debug!(node = %to_node, "self-loop edges are disabled, connect cancelled");
            return None;
        }
        let id = self
            .graph
            .add_edge(EdgeDraft::between(gesture.from_node, to_node))?;
        self.publish(EditorEvent::GraphChanged);
        self.announce("Nodes connected");
        Some(id)
    }

    /// Abort the active connect gesture without creating an edge.
    pub fn cancel_connect(&mut self) {
        if self.view.take_connect().is_some() {
            self.mark_dirty();
        }
        if self.input.is_connecting() {
            self.input.reset();
        }
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Borrowed render input for the current state.
    pub fn scene(&self, screen: Size) -> Scene<'_> {
        Scene {
            nodes: self.graph.nodes(),
            edges: self.graph.edges(),
            viewport: &self.view.viewport,
            selection: &self.view.selection,
            hovered_node: self.view.hovered_node.as_ref(),
            connecting: self.view.connecting.as_ref(),
            screen,
            config: &self.config,
        }
    }

    /// Render the current state into draw commands.
    pub fn render(&self, screen: Size) -> Vec<DrawCommand> {
        render_scene(&self.scene(screen))
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
