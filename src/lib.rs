//! Square Dodge - A square arena survival game
//!
//! Core modules:
//! - `sim`: Per-frame simulation (vectors, oriented boxes, SAT, entities, tick)
//! - `settings`: Arena configuration loaded from JSON
//!
//! Rendering and keyboard wiring live outside the crate. They talk to the
//! core through [`sim::TickInput`] and [`sim::FrameSnapshot`].

pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
///
/// Geometry is expressed as fractions of the arena side length so the game
/// scales with whatever canvas the front end provides.
pub mod consts {
    /// Default arena side length (pixels)
    pub const DEFAULT_ARENA_SIZE: f32 = 600.0;

    /// Playable margin along each border (fraction of arena size)
    pub const MARGIN_RATIO: f32 = 0.15;
    /// Width of the spawn exclusion band (fraction of the margin)
    pub const SAFE_BAND_RATIO: f32 = 0.30;

    /// Player side length (fraction of arena size)
    pub const PLAYER_SIZE_RATIO: f32 = 1.0 / 15.0;
    /// Player speed (arena sizes per second)
    pub const PLAYER_SPEED_RATIO: f32 = 0.60;

    /// Minimum enemy side length (fraction of arena size)
    pub const ENEMY_MIN_SIZE_RATIO: f32 = 0.03;
    /// Random extra enemy side length (fraction of arena size)
    pub const ENEMY_SIZE_SPREAD_RATIO: f32 = 0.08;
    /// Enemy charge speed (arena sizes per second)
    pub const ENEMY_SPEED_RATIO: f32 = 0.80;
    /// Aiming time before an enemy charges (ms)
    pub const ENEMY_COUNTDOWN_MS: f32 = 3000.0;

    /// How far past the border an enemy must travel to be removed
    pub const EXIT_MARGIN_RATIO: f32 = 0.10;
    /// Enemies closer than this to the player run the SAT test
    pub const COLLISION_RANGE_RATIO: f32 = 0.10;
    /// Overshoot applied to the SAT push so penetration is fully resolved
    pub const PUSH_OVERSHOOT: f32 = 1.05;

    /// Chance of spawning one enemy, rolled once per frame
    pub const SPAWN_CHANCE: f32 = 0.03;
    /// Largest elapsed time a single step will simulate (ms)
    pub const MAX_STEP_MS: f32 = 100.0;
}

/// Heading of a direction vector in radians, as fed to the canvas rotation.
///
/// A zero vector yields 0, matching `atan2(0, 0)`.
#[inline]
pub fn heading_angle(dir: Vec2) -> f32 {
    dir.y.atan2(dir.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_heading_angle() {
        assert_eq!(heading_angle(Vec2::ZERO), 0.0);
        assert!((heading_angle(Vec2::new(0.0, 1.0)) - FRAC_PI_2).abs() < 1e-6);
        assert!((heading_angle(Vec2::new(-1.0, 0.0)).abs() - std::f32::consts::PI).abs() < 1e-6);
    }
}
