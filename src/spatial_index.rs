//! Spatial Index Module
//!
//! Provides R-tree based spatial indexing for efficient hit testing on the
//! canvas. This reduces hit testing from O(n) to O(log n) for point queries.

use crate::geometry::{Size, Vec2};
use crate::types::NodeId;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A spatial entry representing a node's world-space bounding box.
#[derive(Debug, Clone)]
pub struct SpatialEntry {
    pub node_id: NodeId,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(node_id: NodeId, position: Vec2, size: Size) -> Self {
        Self {
            node_id,
            min_x: position.x,
            min_y: position.y,
            max_x: position.x + size.width,
            max_y: position.y + size.height,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.node_id == other.node_id
    }
}

/// Spatial index over node bounds using an R-tree.
/// Provides O(log n) point queries and range queries for hit testing.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<NodeId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Build a spatial index from an iterator of node bounds.
    pub fn from_nodes<I>(nodes: I) -> Self
    where
        I: Iterator<Item = (NodeId, Vec2, Size)>,
    {
        let entries: Vec<SpatialEntry> = nodes
            .map(|(id, pos, size)| SpatialEntry::new(id, pos, size))
            .collect();

        let entries_map: HashMap<NodeId, SpatialEntry> = entries
            .iter()
            .map(|e| (e.node_id.clone(), e.clone()))
            .collect();

        Self {
            tree: RTree::bulk_load(entries),
            entries: entries_map,
        }
    }

    pub fn insert(&mut self, node_id: NodeId, position: Vec2, size: Size) {
        if let Some(old_entry) = self.entries.remove(&node_id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(node_id.clone(), position, size);
        self.tree.insert(entry.clone());
        self.entries.insert(node_id, entry);
    }

    pub fn remove(&mut self, node_id: &NodeId) -> bool {
        if let Some(entry) = self.entries.remove(node_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    pub fn update(&mut self, node_id: NodeId, position: Vec2, size: Size) {
        self.insert(node_id, position, size);
    }

    /// Query all nodes whose bounds contain the given world-space point.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<NodeId> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.node_id.clone())
            .collect()
    }

    /// Query all nodes whose bounds intersect a rectangular world region.
    pub fn query_rect(&self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Vec<NodeId> {
        let envelope = AABB::from_corners([min_x, min_y], [max_x, max_y]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.node_id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rebuild<I>(&mut self, nodes: I)
    where
        I: Iterator<Item = (NodeId, Vec2, Size)>,
    {
        let entries: Vec<SpatialEntry> = nodes
            .map(|(id, pos, size)| SpatialEntry::new(id, pos, size))
            .collect();

        self.entries = entries
            .iter()
            .map(|e| (e.node_id.clone(), e.clone()))
            .collect();
        self.tree = RTree::bulk_load(entries);
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
