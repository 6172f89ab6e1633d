//! Separating Axis Theorem test for oriented squares
//!
//! Two convex shapes are disjoint iff their projections are disjoint on at
//! least one candidate axis. For a pair of boxes the candidates are the two
//! edge normals of each box.

use glam::Vec2;

use super::obb::OrientedBox;
use super::vector::dot;

/// Result of a SAT test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatResult {
    /// Whether the shapes overlap
    pub colliding: bool,
    /// Smallest translation moving the first shape out of the second.
    /// Zero when not colliding.
    pub push: Vec2,
}

impl SatResult {
    pub fn miss() -> Self {
        Self {
            colliding: false,
            push: Vec2::ZERO,
        }
    }
}

/// Projection interval of a shape on an axis
#[derive(Debug, Clone, Copy)]
struct Projection {
    min: f32,
    max: f32,
}

fn project(vertices: &[Vec2; 4], axis: Vec2) -> Projection {
    vertices.iter().fold(
        Projection {
            min: f32::INFINITY,
            max: f32::NEG_INFINITY,
        },
        |p, &v| {
            let d = dot(v, axis);
            Projection {
                min: p.min.min(d),
                max: p.max.max(d),
            }
        },
    )
}

/// Test `a` against `b`.
///
/// On overlap the push vector points from `b` toward `a`, so adding it to
/// `a`'s position separates the shapes along the axis of least penetration.
pub fn sat_test(a: &OrientedBox, b: &OrientedBox) -> SatResult {
    let a_vertices = a.corners();
    let b_vertices = b.corners();
    let a_to_b = b.center - a.center;

    let mut best_overlap = f32::INFINITY;
    let mut push = Vec2::ZERO;
    let mut tested = 0;

    for axis in a.axes().into_iter().chain(b.axes()) {
        // Degenerate edges give no information
        if axis == Vec2::ZERO {
            continue;
        }
        tested += 1;

        // Orient every axis from b toward a
        let axis = if dot(a_to_b, axis) > 0.0 { -axis } else { axis };

        let pa = project(&a_vertices, axis);
        let pb = project(&b_vertices, axis);

        // Separating axis found
        if pb.max <= pa.min || pa.max <= pb.min {
            return SatResult::miss();
        }

        let overlap = (pa.max.min(pb.max) - pa.min.max(pb.min)).abs();
        if overlap < best_overlap {
            best_overlap = overlap;
            push = axis * overlap;
        }
    }

    if tested == 0 {
        return SatResult::miss();
    }

    SatResult {
        colliding: true,
        push,
    }
}
