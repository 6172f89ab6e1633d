//! 2D vector helpers
//!
//! Thin layer over `glam::Vec2` spelling out the exact conventions the
//! collision code relies on. All functions take and return values; nothing
//! is mutated in place.

use glam::Vec2;

/// Euclidean length
#[inline]
pub fn magnitude(v: Vec2) -> f32 {
    (v.x * v.x + v.y * v.y).sqrt()
}

#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f32 {
    a.x * b.x + a.y * b.y
}

/// Rotate counter-clockwise by `angle` radians (right-handed axes).
///
/// On a y-down canvas the same angle reads as clockwise on screen.
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(c * v.x - s * v.y, s * v.x + c * v.y)
}

/// Scale to unit length. A zero vector is returned unchanged instead of
/// turning into NaN.
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    let len = magnitude(v);
    if len > 0.0 { v / len } else { v }
}

/// Edge normal `(dy, -dx)` of an edge vector
#[inline]
pub fn perpendicular(edge: Vec2) -> Vec2 {
    Vec2::new(edge.y, -edge.x)
}
