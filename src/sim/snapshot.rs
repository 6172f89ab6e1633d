//! Per-frame render snapshot
//!
//! The only state that crosses from the simulation to the renderer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Position, rotation and size of one square
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    /// Rotation (radians) to apply before drawing the square centered at (x, y)
    pub angle: f32,
    pub half_extent: f32,
}

impl Pose {
    pub fn new(pos: Vec2, angle: f32, half_extent: f32) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            angle,
            half_extent,
        }
    }
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub player: Pose,
    /// Live enemies in spawn order
    pub enemies: Vec<Pose>,
    pub score: u64,
}
