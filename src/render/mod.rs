//! Scene renderer - pure mapping from editor state to draw commands.
//!
//! `render_scene` reads the stores and produces a flat, ordered command
//! list; it never mutates state, and identical scenes produce identical
//! command lists (selection sets iterate in order, so the output is
//! deterministic and snapshot-testable).
//!
//! Draw order, back to front: background grid, edges, the connect rubber
//! band, nodes, the marquee rectangle.

mod commands;
mod edges;
mod grid;
mod nodes;
mod overlay;

pub use commands::{DrawCommand, Stroke};

use crate::config::EditorConfig;
use crate::geometry::Size;
use crate::profile_scope;
use crate::types::{Edge, Node, NodeId};
use crate::view::{ConnectGesture, Selection, Viewport};

/// Borrowed snapshot of everything the renderer reads.
pub struct Scene<'a> {
    pub nodes: &'a [Node],
    pub edges: &'a [Edge],
    pub viewport: &'a Viewport,
    pub selection: &'a Selection,
    pub hovered_node: Option<&'a NodeId>,
    pub connecting: Option<&'a ConnectGesture>,
    /// Surface size in screen pixels; bounds the grid
    pub screen: Size,
    pub config: &'a EditorConfig,
}

/// Compile a scene into draw commands.
pub fn render_scene(scene: &Scene<'_>) -> Vec<DrawCommand> {
    profile_scope!("render_scene");

    let mut cmds = Vec::with_capacity(scene.nodes.len() * 4 + scene.edges.len() * 2 + 8);
    grid::push_background(&mut cmds, scene);
    edges::push_edges(&mut cmds, scene);
    overlay::push_rubber_band(&mut cmds, scene);
    nodes::push_nodes(&mut cmds, scene);
    overlay::push_marquee(&mut cmds, scene);
    cmds
}
