//! Coordinate conversion and containment math for canvas interactions.
//!
//! This module provides the centralized conversion functions used by hit
//! testing, gesture handling, and rendering, so the screen/world formulas
//! exist in exactly one place. All functions are pure and total over finite
//! float inputs.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Sub};

/// A point or delta in screen or world space.
///
/// Which space a value lives in is determined by context; values are never
/// mixed across spaces without an explicit conversion below.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point in the same space.
    pub fn distance(self, other: Vec2) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;

    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

/// A width/height pair in world units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle with a top-left origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Normalized rectangle spanned by two corners in any drag direction.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    /// Inclusive bounds test.
    #[inline]
    pub fn contains(&self, pt: Vec2) -> bool {
        pt.x >= self.x
            && pt.x <= self.x + self.width
            && pt.y >= self.y
            && pt.y <= self.y + self.height
    }
}

/// Convert a screen position to a world position.
#[inline]
pub fn screen_to_world(pt: Vec2, zoom: f32, offset: Vec2) -> Vec2 {
    (pt - offset) / zoom
}

/// Convert a world position to a screen position.
#[inline]
pub fn world_to_screen(pt: Vec2, zoom: f32, offset: Vec2) -> Vec2 {
    pt * zoom + offset
}

/// Convert a delta from screen to world units (for drag operations).
#[inline]
pub fn delta_screen_to_world(delta: Vec2, zoom: f32) -> Vec2 {
    delta / zoom
}

/// Convert a delta from world to screen units.
#[inline]
pub fn delta_world_to_screen(delta: Vec2, zoom: f32) -> Vec2 {
    delta * zoom
}

/// Saturating clamp of `v` into `[min, max]`.
#[inline]
pub fn clamp(v: f32, min: f32, max: f32) -> f32 {
    v.max(min).min(max)
}

/// Test a point against the axis-aligned rectangle spanned by corners `a`
/// and `b`, regardless of drag direction.
#[inline]
pub fn point_in_marquee(pt: Vec2, a: Vec2, b: Vec2) -> bool {
    Rect::from_corners(a, b).contains(pt)
}
