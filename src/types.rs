//! Core types for the flowcanvas graph model.
//!
//! This module defines the fundamental data structures used throughout the
//! engine: nodes, edges, their ids, and the draft/patch types the mutation
//! API accepts.

use crate::constants::{
    COMPUTE_COLOR, COMPUTE_DEFAULT_SIZE, DESTINATION_COLOR, NODE_DEFAULT_SIZE, SOURCE_COLOR,
    STATUS_ERROR_COLOR, STATUS_IDLE_COLOR, STATUS_PARTIAL_COLOR, STATUS_PENDING_COLOR,
    STATUS_RUNNING_COLOR, STATUS_SUCCESS_COLOR, TRANSFORM_COLOR, TRANSFORM_DEFAULT_SIZE,
};
use crate::geometry::{Rect, Size, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a node. Engine-assigned ids are `node-<uuid>`;
/// callers may supply their own.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn generate() -> Self {
        Self(format!("node-{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Unique identifier for an edge.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub String);

impl EdgeId {
    pub fn generate() -> Self {
        Self(format!("edge-{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EdgeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EdgeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The pipeline role of a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    #[default]
    Source,
    Transform,
    Destination,
    Compute,
}

impl NodeKind {
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Source => "Source",
            NodeKind::Transform => "Transform",
            NodeKind::Destination => "Destination",
            NodeKind::Compute => "Compute",
        }
    }

    /// Default fill color for nodes of this kind, overridable per node.
    pub fn color(&self) -> &'static str {
        match self {
            NodeKind::Source => SOURCE_COLOR,
            NodeKind::Transform => TRANSFORM_COLOR,
            NodeKind::Destination => DESTINATION_COLOR,
            NodeKind::Compute => COMPUTE_COLOR,
        }
    }

    /// Default size for newly added nodes of this kind.
    pub fn default_size(&self) -> Size {
        let (w, h) = match self {
            NodeKind::Source | NodeKind::Destination => NODE_DEFAULT_SIZE,
            NodeKind::Transform => TRANSFORM_DEFAULT_SIZE,
            NodeKind::Compute => COMPUTE_DEFAULT_SIZE,
        };
        Size::new(w, h)
    }

    pub fn all() -> &'static [NodeKind] {
        &[
            NodeKind::Source,
            NodeKind::Transform,
            NodeKind::Destination,
            NodeKind::Compute,
        ]
    }
}

/// Execution status of a node.
///
/// One enumeration covering both the editor vocabulary (idle/running/
/// success/error) and the pipeline-progress vocabulary (pending/partial/
/// complete/error); `label()` is the display mapping for either.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    #[default]
    Idle,
    Pending,
    Partial,
    Running,
    Complete,
    Success,
    Error,
}

impl NodeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            NodeStatus::Idle => "Idle",
            NodeStatus::Pending => "Pending",
            NodeStatus::Partial => "Partial",
            NodeStatus::Running => "Running",
            NodeStatus::Complete => "Complete",
            NodeStatus::Success => "Success",
            NodeStatus::Error => "Error",
        }
    }

    /// Badge color for this status.
    pub fn color(&self) -> &'static str {
        match self {
            NodeStatus::Idle => STATUS_IDLE_COLOR,
            NodeStatus::Pending => STATUS_PENDING_COLOR,
            NodeStatus::Partial => STATUS_PARTIAL_COLOR,
            NodeStatus::Running => STATUS_RUNNING_COLOR,
            NodeStatus::Complete | NodeStatus::Success => STATUS_SUCCESS_COLOR,
            NodeStatus::Error => STATUS_ERROR_COLOR,
        }
    }

    pub fn all() -> &'static [NodeStatus] {
        &[
            NodeStatus::Idle,
            NodeStatus::Pending,
            NodeStatus::Partial,
            NodeStatus::Running,
            NodeStatus::Complete,
            NodeStatus::Success,
            NodeStatus::Error,
        ]
    }
}

/// A pipeline stage placed on the infinite canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for this node
    pub id: NodeId,
    /// Pipeline role
    pub kind: NodeKind,
    /// Display label
    pub label: String,
    /// Top-left corner in world coordinates
    pub position: Vec2,
    /// Size in world units; always positive
    pub size: Size,
    /// Execution status, drives the badge color
    pub status: NodeStatus,
    /// Per-node fill color override (hex string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Optional icon glyph rendered before the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Locked nodes are exempt from drag and delete
    #[serde(default)]
    pub locked: bool,
    /// Hidden nodes are exempt from hit testing and rendering
    #[serde(default)]
    pub hidden: bool,
    /// Ordered input port names
    #[serde(default)]
    pub inputs: Vec<String>,
    /// Ordered output port names
    #[serde(default)]
    pub outputs: Vec<String>,
    /// Opaque payload owned by the caller
    #[serde(default)]
    pub meta: serde_json::Value,
}

impl Node {
    /// World-space bounding rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.size.width,
            self.size.height,
        )
    }

    /// World-space center point; edges attach here.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.position.x + self.size.width / 2.0,
            self.position.y + self.size.height / 2.0,
        )
    }

    /// Effective fill color: per-node override or the kind default.
    pub fn fill_color(&self) -> &str {
        self.color.as_deref().unwrap_or_else(|| self.kind.color())
    }
}

/// A directed connection between two nodes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier for this edge
    pub id: EdgeId,
    /// Source node; must exist in the store
    pub from_node: NodeId,
    /// Target node; must exist in the store
    pub to_node: NodeId,
    /// Optional source port name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_port: Option<String>,
    /// Optional target port name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_port: Option<String>,
    /// Optional midpoint label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Dashed stroke
    #[serde(default)]
    pub dashed: bool,
    /// Per-edge stroke color override (hex string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Opaque payload owned by the caller
    #[serde(default)]
    pub meta: serde_json::Value,
}

/// Partial node used by `add_node`; unset fields get defaults.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NodeDraft {
    pub id: Option<NodeId>,
    pub kind: Option<NodeKind>,
    pub label: Option<String>,
    pub position: Option<Vec2>,
    pub size: Option<Size>,
    pub status: Option<NodeStatus>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub locked: Option<bool>,
    pub hidden: Option<bool>,
    pub inputs: Option<Vec<String>>,
    pub outputs: Option<Vec<String>>,
    pub meta: Option<serde_json::Value>,
}

/// Field-wise patch used by `update_node`.
///
/// Set fields replace the node's values wholesale; nested values
/// (`position`, `size`) are never deep-merged, so the last writer wins per
/// sub-object during drag updates.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NodePatch {
    pub kind: Option<NodeKind>,
    pub label: Option<String>,
    pub position: Option<Vec2>,
    pub size: Option<Size>,
    pub status: Option<NodeStatus>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub locked: Option<bool>,
    pub hidden: Option<bool>,
    pub inputs: Option<Vec<String>>,
    pub outputs: Option<Vec<String>>,
    pub meta: Option<serde_json::Value>,
}

/// Partial edge used by `add_edge`; endpoints are required, the rest gets
/// defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EdgeDraft {
    pub id: Option<EdgeId>,
    pub from_node: NodeId,
    pub to_node: NodeId,
    #[serde(default)]
    pub from_port: Option<String>,
    #[serde(default)]
    pub to_port: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub dashed: Option<bool>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

impl EdgeDraft {
    /// Minimal draft connecting two nodes.
    pub fn between(from_node: impl Into<NodeId>, to_node: impl Into<NodeId>) -> Self {
        Self {
            id: None,
            from_node: from_node.into(),
            to_node: to_node.into(),
            from_port: None,
            to_port: None,
            label: None,
            dashed: None,
            color: None,
            meta: None,
        }
    }
}
