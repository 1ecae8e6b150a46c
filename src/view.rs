//! Viewport and selection store.
//!
//! Owns the zoom/pan state, the active selection, and the transient gesture
//! data the renderer needs (marquee bounds, connect-in-progress, hover).
//! Zoom is re-clamped into the configured bounds after every mutation.

use crate::config::EditorConfig;
use crate::constants::DEFAULT_ZOOM;
use crate::geometry::{Vec2, clamp};
use crate::graph::GraphStore;
use crate::types::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Zoom/pan state of the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Scale factor, always within the configured bounds
    pub zoom: f32,
    /// World-to-screen translation in screen pixels
    pub offset: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            offset: Vec2::ZERO,
        }
    }
}

/// Shallow-merge patch for `set_viewport`.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct ViewportPatch {
    pub zoom: Option<f32>,
    pub offset: Option<Vec2>,
}

/// Screen-space marquee rectangle, present only while the drag is active.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marquee {
    pub start: Vec2,
    pub end: Vec2,
}

/// The active selection.
///
/// Id sets are ordered (`BTreeSet`) so everything derived from a selection,
/// the renderer included, iterates deterministically.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub nodes: BTreeSet<NodeId>,
    pub edges: BTreeSet<EdgeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marquee: Option<Marquee>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// Shallow-merge patch for `set_selection`.
///
/// `marquee` uses a double `Option`: the outer level says whether the patch
/// touches the field, the inner level is the new value (`None` clears it).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SelectionPatch {
    pub nodes: Option<BTreeSet<NodeId>>,
    pub edges: Option<BTreeSet<EdgeId>>,
    pub marquee: Option<Option<Marquee>>,
}

/// An in-progress edge-creation drag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConnectGesture {
    /// Node the drag started on
    pub from_node: NodeId,
    /// Current pointer position in screen space (rubber-band endpoint)
    pub cursor: Vec2,
}

/// Viewport, selection, and transient gesture state.
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    pub viewport: Viewport,
    pub selection: Selection,
    pub connecting: Option<ConnectGesture>,
    pub hovered_node: Option<NodeId>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shallow-merge the patch, then re-clamp zoom into bounds.
    pub fn set_viewport(&mut self, patch: ViewportPatch, config: &EditorConfig) {
        if let Some(zoom) = patch.zoom {
            self.viewport.zoom = clamp(zoom, config.zoom_min, config.zoom_max);
        }
        if let Some(offset) = patch.offset {
            self.viewport.offset = offset;
        }
    }

    /// Shallow-merge node/edge/marquee selection fields.
    pub fn set_selection(&mut self, patch: SelectionPatch) {
        if let Some(nodes) = patch.nodes {
            self.selection.nodes = nodes;
        }
        if let Some(edges) = patch.edges {
            self.selection.edges = edges;
        }
        if let Some(marquee) = patch.marquee {
            self.selection.marquee = marquee;
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::default();
    }

    pub fn zoom_in(&mut self, config: &EditorConfig) {
        self.set_viewport(
            ViewportPatch {
                zoom: Some(self.viewport.zoom + config.zoom_step),
                offset: None,
            },
            config,
        );
    }

    pub fn zoom_out(&mut self, config: &EditorConfig) {
        self.set_viewport(
            ViewportPatch {
                zoom: Some(self.viewport.zoom - config.zoom_step),
                offset: None,
            },
            config,
        );
    }

    pub fn reset_view(&mut self, config: &EditorConfig) {
        self.set_viewport(
            ViewportPatch {
                zoom: Some(DEFAULT_ZOOM),
                offset: Some(Vec2::ZERO),
            },
            config,
        );
    }

    pub fn begin_connect(&mut self, from_node: NodeId, cursor: Vec2) {
        self.connecting = Some(ConnectGesture { from_node, cursor });
    }

    pub fn update_connect_cursor(&mut self, cursor: Vec2) {
        if let Some(gesture) = &mut self.connecting {
            gesture.cursor = cursor;
        }
    }

    /// Take the active connect gesture, ending it.
    pub fn take_connect(&mut self) -> Option<ConnectGesture> {
        self.connecting.take()
    }

    pub fn set_hovered(&mut self, node: Option<NodeId>) {
        self.hovered_node = node;
    }

    /// Drop selection ids, the hover, and a connect source that no longer
    /// resolve against the graph. Returns true if the selected id sets
    /// changed.
    pub fn prune(&mut self, graph: &GraphStore) -> bool {
        let nodes_before = self.selection.nodes.len();
        let edges_before = self.selection.edges.len();
        self.selection.nodes.retain(|id| graph.contains_node(id));
        self.selection
            .edges
            .retain(|id| graph.edge(id).is_some());

        if let Some(hovered) = &self.hovered_node
            && !graph.contains_node(hovered)
        {
            self.hovered_node = None;
        }
        if let Some(gesture) = &self.connecting
            && !graph.contains_node(&gesture.from_node)
        {
            self.connecting = None;
        }

        self.selection.nodes.len() != nodes_before || self.selection.edges.len() != edges_before
    }
}
