//! Graph store - owns node and edge lifetime and the mutation API.
//!
//! All mutation functions are total: operations referencing an unknown id
//! are logged no-ops, never errors. The store upholds two invariants after
//! every mutation: node sizes are strictly positive, and every edge's
//! endpoints resolve to existing nodes (removal cascades, additions with
//! missing endpoints are refused).

use crate::geometry::{Rect, Vec2};
use crate::profile_scope;
use crate::spatial_index::SpatialIndex;
use crate::types::{Edge, EdgeDraft, EdgeId, Node, NodeDraft, NodeId, NodePatch};
use std::collections::HashSet;
use tracing::{debug, warn};

pub struct GraphStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    index: SpatialIndex,
}

impl GraphStore {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            index: SpatialIndex::new(),
        }
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    pub fn edge(&self, id: &EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|e| &e.id == id)
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Topmost visible node under a world-space point.
    ///
    /// The R-tree narrows the candidates; the node list resolves them in
    /// reverse insertion order so the node painted last wins, keeping hit
    /// testing consistent with render order.
    pub fn node_at_point(&self, world: Vec2) -> Option<&Node> {
        profile_scope!("hit_test_node");

        let candidates: HashSet<NodeId> =
            self.index.query_point(world.x, world.y).into_iter().collect();
        if candidates.is_empty() {
            return None;
        }

        self.nodes
            .iter()
            .rev()
            .filter(|n| !n.hidden && candidates.contains(&n.id))
            .find(|n| n.rect().contains(world))
    }

    /// Visible nodes whose bounds intersect a world-space rectangle, in
    /// insertion order.
    pub fn nodes_in_rect(&self, rect: Rect) -> Vec<&Node> {
        let candidates: HashSet<NodeId> = self
            .index
            .query_rect(rect.x, rect.y, rect.x + rect.width, rect.y + rect.height)
            .into_iter()
            .collect();

        self.nodes
            .iter()
            .filter(|n| !n.hidden && candidates.contains(&n.id))
            .collect()
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Add a node, filling unset draft fields with defaults. Returns the id.
    pub fn add_node(&mut self, draft: NodeDraft) -> NodeId {
        let id = match draft.id {
            Some(id) if !self.contains_node(&id) => id,
            Some(id) => {
                warn!(%id, "node id already in use, assigning a fresh one");
                NodeId::generate()
            }
            None => NodeId::generate(),
        };

        let kind = draft.kind.unwrap_or_default();
        let size = Self::sanitize_size(&id, kind, draft.size);
        let node = Node {
            id: id.clone(),
            kind,
            label: draft.label.unwrap_or_else(|| "Untitled".to_string()),
            position: draft.position.unwrap_or(Vec2::ZERO),
            size,
            status: draft.status.unwrap_or_default(),
            color: draft.color,
            icon: draft.icon,
            locked: draft.locked.unwrap_or(false),
            hidden: draft.hidden.unwrap_or(false),
            inputs: draft.inputs.unwrap_or_default(),
            outputs: draft.outputs.unwrap_or_default(),
            meta: draft.meta.unwrap_or(serde_json::Value::Null),
        };

        self.index.insert(id.clone(), node.position, node.size);
        self.nodes.push(node);
        debug!(%id, "node added");
        id
    }

    /// Merge a patch into an existing node. Unknown ids are a no-op; nested
    /// values (position, size) are replaced wholesale.
    pub fn update_node(&mut self, id: &NodeId, patch: NodePatch) {
        let Some(node) = self.nodes.iter_mut().find(|n| &n.id == id) else {
            debug!(%id, "update_node on unknown id ignored");
            return;
        };

        if let Some(kind) = patch.kind {
            node.kind = kind;
        }
        if let Some(label) = patch.label {
            node.label = label;
        }
        if let Some(position) = patch.position {
            node.position = position;
        }
        if let Some(size) = patch.size {
            node.size = size;
        }
        if let Some(status) = patch.status {
            node.status = status;
        }
        if let Some(color) = patch.color {
            node.color = Some(color);
        }
        if let Some(icon) = patch.icon {
            node.icon = Some(icon);
        }
        if let Some(locked) = patch.locked {
            node.locked = locked;
        }
        if let Some(hidden) = patch.hidden {
            node.hidden = hidden;
        }
        if let Some(inputs) = patch.inputs {
            node.inputs = inputs;
        }
        if let Some(outputs) = patch.outputs {
            node.outputs = outputs;
        }
        if let Some(meta) = patch.meta {
            node.meta = meta;
        }

        let kind = node.kind;
        node.size = Self::sanitize_size(id, kind, Some(node.size));
        let (position, size) = (node.position, node.size);
        self.index.update(id.clone(), position, size);
    }

    /// Translate a node by a world-space delta. Locked and unknown nodes
    /// stay put; returns whether the node moved.
    pub fn translate_node(&mut self, id: &NodeId, delta: Vec2) -> bool {
        let Some(node) = self.nodes.iter_mut().find(|n| &n.id == id) else {
            return false;
        };
        if node.locked {
            return false;
        }
        node.position += delta;
        let (position, size) = (node.position, node.size);
        self.index.update(id.clone(), position, size);
        true
    }

    /// Remove the given nodes and every edge touching them. Returns the
    /// number of nodes removed.
    pub fn remove_nodes(&mut self, ids: &[NodeId]) -> usize {
        let removed: HashSet<&NodeId> = ids.iter().filter(|id| self.contains_node(id)).collect();
        if removed.is_empty() {
            return 0;
        }

        let before = self.nodes.len();
        self.nodes.retain(|n| !removed.contains(&n.id));
        // Cascade: no edge may outlive either endpoint.
        self.edges
            .retain(|e| !removed.contains(&e.from_node) && !removed.contains(&e.to_node));
        for id in ids {
            self.index.remove(id);
        }

        let count = before - self.nodes.len();
        debug!(count, "nodes removed");
        count
    }

    /// Add an edge. Refused (returns `None`, logged) when either endpoint
    /// does not exist, which keeps the no-dangling-edge invariant intact.
    pub fn add_edge(&mut self, draft: EdgeDraft) -> Option<EdgeId> {
        if !self.contains_node(&draft.from_node) || !self.contains_node(&draft.to_node) {
            warn!(
                from = %draft.from_node,
                to = %draft.to_node,
                "edge endpoints must exist, ignoring add_edge"
            );
            return None;
        }

        let id = match draft.id {
            Some(id) if self.edge(&id).is_none() => id,
            Some(id) => {
                warn!(%id, "edge id already in use, assigning a fresh one");
                EdgeId::generate()
            }
            None => EdgeId::generate(),
        };

        self.edges.push(Edge {
            id: id.clone(),
            from_node: draft.from_node,
            to_node: draft.to_node,
            from_port: draft.from_port,
            to_port: draft.to_port,
            label: draft.label,
            dashed: draft.dashed.unwrap_or(false),
            color: draft.color,
            meta: draft.meta.unwrap_or(serde_json::Value::Null),
        });
        debug!(%id, "edge added");
        Some(id)
    }

    /// Remove the given edges. Returns the number removed.
    pub fn remove_edges(&mut self, ids: &[EdgeId]) -> usize {
        let doomed: HashSet<&EdgeId> = ids.iter().collect();
        let before = self.edges.len();
        self.edges.retain(|e| !doomed.contains(&e.id));
        before - self.edges.len()
    }

    /// Replace the whole graph. Duplicate node ids keep the first
    /// occurrence; edges whose endpoints are missing are dropped; node sizes
    /// are sanitized. The spatial index is rebuilt from scratch.
    pub fn replace(&mut self, nodes: Vec<Node>, edges: Vec<Edge>) {
        let mut seen = HashSet::new();
        self.nodes = nodes
            .into_iter()
            .filter(|n| {
                if seen.insert(n.id.clone()) {
                    true
                } else {
                    warn!(id = %n.id, "duplicate node id in loaded graph, dropping");
                    false
                }
            })
            .map(|mut n| {
                n.size = Self::sanitize_size(&n.id, n.kind, Some(n.size));
                n
            })
            .collect();

        let node_ids: HashSet<&NodeId> = self.nodes.iter().map(|n| &n.id).collect();
        let mut seen_edges = HashSet::new();
        self.edges = edges
            .into_iter()
            .filter(|e| {
                if !node_ids.contains(&e.from_node) || !node_ids.contains(&e.to_node) {
                    warn!(id = %e.id, "edge in loaded graph references a missing node, dropping");
                    return false;
                }
                if !seen_edges.insert(e.id.clone()) {
                    warn!(id = %e.id, "duplicate edge id in loaded graph, dropping");
                    return false;
                }
                true
            })
            .collect();

        self.index.rebuild(
            self.nodes
                .iter()
                .map(|n| (n.id.clone(), n.position, n.size)),
        );
    }

    fn sanitize_size(
        id: &NodeId,
        kind: crate::types::NodeKind,
        size: Option<crate::geometry::Size>,
    ) -> crate::geometry::Size {
        match size {
            Some(s)
                if s.width.is_finite()
                    && s.height.is_finite()
                    && s.width > 0.0
                    && s.height > 0.0 =>
            {
                s
            }
            Some(s) => {
                warn!(%id, width = s.width, height = s.height, "non-positive node size, using kind default");
                kind.default_size()
            }
            None => kind.default_size(),
        }
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}
