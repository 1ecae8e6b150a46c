//! Backend-agnostic draw commands.
//!
//! The renderer compiles scene state into a flat command list; the host
//! replays it against whatever surface it owns (bitmap canvas, vector
//! layer, test recorder). Commands are plain serializable data, which is
//! what makes snapshot-testing the renderer possible.

use crate::geometry::{Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Stroke style for outlined commands.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: String,
    pub width: f32,
}

impl Stroke {
    pub fn new(color: impl Into<String>, width: f32) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }
}

/// One drawing operation, in screen coordinates.
///
/// Colors are CSS color strings (`#rrggbb` or `rgba(...)`), matching what
/// the graph types themselves carry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Fill the whole surface with a color.
    Clear { color: String },
    /// Straight line segment.
    Line {
        from: Vec2,
        to: Vec2,
        color: String,
        width: f32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dash: Option<[f32; 2]>,
    },
    /// Cubic bezier from `from` to `to`.
    Cubic {
        from: Vec2,
        c1: Vec2,
        c2: Vec2,
        to: Vec2,
        color: String,
        width: f32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dash: Option<[f32; 2]>,
    },
    /// Axis-aligned rectangle.
    Rect {
        rect: Rect,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fill: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stroke: Option<Stroke>,
    },
    /// Rectangle with rounded corners.
    RoundedRect {
        rect: Rect,
        radius: f32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fill: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stroke: Option<Stroke>,
    },
    /// Filled circle.
    Circle {
        center: Vec2,
        radius: f32,
        fill: String,
    },
    /// Filled polygon (arrow heads).
    Polygon { points: Vec<Vec2>, fill: String },
    /// Text run; `origin` is the baseline start.
    Text {
        origin: Vec2,
        text: String,
        size: f32,
        color: String,
    },
}
