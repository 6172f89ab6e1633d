//! Oriented square geometry
//!
//! An oriented box is defined by:
//! - center: position in arena coordinates
//! - half_extent: half the side length
//! - angle: rotation in radians about the center
//!
//! Corners and axes are derived on demand, never stored.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::vector::{normalize, perpendicular, rotate};

/// Local corner offsets in unit half-extents: top-left, top-right,
/// bottom-right, bottom-left (y grows downward on the canvas).
const LOCAL_CORNERS: [Vec2; 4] = [
    Vec2::new(-1.0, -1.0),
    Vec2::new(1.0, -1.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(-1.0, 1.0),
];

/// A rotated square
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientedBox {
    pub center: Vec2,
    pub half_extent: f32,
    /// Rotation angle (radians)
    pub angle: f32,
}

impl OrientedBox {
    pub fn new(center: Vec2, half_extent: f32, angle: f32) -> Self {
        Self {
            center,
            half_extent,
            angle,
        }
    }

    /// World-space corners, always in the same winding order
    pub fn corners(&self) -> [Vec2; 4] {
        LOCAL_CORNERS.map(|c| rotate(c * self.half_extent, self.angle) + self.center)
    }

    /// Edge `i` runs from corner `i` to corner `i + 1` (wrapping)
    fn edge(corners: &[Vec2; 4], i: usize) -> Vec2 {
        corners[i] - corners[(i + 1) % 4]
    }

    /// The two unit axes of the box.
    ///
    /// Only the first two edges are used; the other two are parallel to them.
    /// A degenerate box (zero half extent) yields zero axes.
    pub fn axes(&self) -> [Vec2; 2] {
        let corners = self.corners();
        [0, 1].map(|i| normalize(perpendicular(Self::edge(&corners, i))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::FRAC_PI_4;

    #[test]
    fn test_axis_aligned_corners() {
        let obb = OrientedBox::new(Vec2::new(100.0, 50.0), 10.0, 0.0);
        let c = obb.corners();
        assert_eq!(c[0], Vec2::new(90.0, 40.0));
        assert_eq!(c[1], Vec2::new(110.0, 40.0));
        assert_eq!(c[2], Vec2::new(110.0, 60.0));
        assert_eq!(c[3], Vec2::new(90.0, 60.0));
    }

    #[test]
    fn test_axis_aligned_axes() {
        let axes = OrientedBox::new(Vec2::ZERO, 5.0, 0.0).axes();
        assert_eq!(axes[0], Vec2::new(0.0, 1.0));
        assert_eq!(axes[1], Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_rotated_corners_stay_on_circle() {
        let obb = OrientedBox::new(Vec2::new(3.0, -2.0), 4.0, FRAC_PI_4);
        let expected = 4.0 * std::f32::consts::SQRT_2;
        for corner in obb.corners() {
            assert!(((corner - obb.center).length() - expected).abs() < 1e-4);
        }
        // A 45° square has its first corner straight above the center
        let top = obb.corners()[0] - obb.center;
        assert!(top.x.abs() < 1e-4);
    }

    #[test]
    fn test_degenerate_box_axes_are_zero() {
        let axes = OrientedBox::new(Vec2::new(1.0, 1.0), 0.0, 0.3).axes();
        assert_eq!(axes, [Vec2::ZERO, Vec2::ZERO]);
    }

    proptest! {
        #[test]
        fn prop_axes_are_orthonormal(angle in -10.0f32..10.0, half in 0.5f32..200.0) {
            let axes = OrientedBox::new(Vec2::new(300.0, 300.0), half, angle).axes();
            prop_assert!((axes[0].length() - 1.0).abs() < 1e-4);
            prop_assert!((axes[1].length() - 1.0).abs() < 1e-4);
            prop_assert!(axes[0].dot(axes[1]).abs() < 1e-4);
        }
    }
}
