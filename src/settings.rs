//! Game settings
//!
//! Loaded from a JSON file by the native runner. Any field left out of the
//! file takes its default value.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Arena and pacing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Side length of the square arena (pixels)
    pub arena_size: f32,
    /// Probability of one enemy spawning, rolled once per frame.
    /// Not scaled by elapsed time, so faster displays spawn more often.
    pub spawn_chance: f32,
    /// Largest elapsed time a single step will simulate (ms)
    pub max_step_ms: f32,
    /// How long a fresh enemy aims before charging (ms)
    pub enemy_countdown_ms: f32,
    /// RNG seed for spawns
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_size: DEFAULT_ARENA_SIZE,
            spawn_chance: SPAWN_CHANCE,
            max_step_ms: MAX_STEP_MS,
            enemy_countdown_ms: ENEMY_COUNTDOWN_MS,
            seed: 0,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.arena_size.is_finite() || self.arena_size <= 0.0 {
            return Err(invalid("arena_size", "must be a positive number"));
        }
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return Err(invalid("spawn_chance", "must be within [0, 1]"));
        }
        if !self.max_step_ms.is_finite() || self.max_step_ms <= 0.0 {
            return Err(invalid("max_step_ms", "must be a positive number"));
        }
        if !self.enemy_countdown_ms.is_finite() || self.enemy_countdown_ms < 0.0 {
            return Err(invalid("enemy_countdown_ms", "must not be negative"));
        }
        Ok(())
    }

    // === Derived arena geometry ===

    /// Distance from each border to the edge of the player's area
    pub fn margin(&self) -> f32 {
        self.arena_size * MARGIN_RATIO
    }

    /// Width of the band excluded from spawning on both sides of the margin
    pub fn safe_band(&self) -> f32 {
        self.margin() * SAFE_BAND_RATIO
    }

    /// How far outside the arena an enemy travels before it is removed
    pub fn exit_margin(&self) -> f32 {
        self.arena_size * EXIT_MARGIN_RATIO
    }

    /// Enemy-to-player distance under which collisions are tested
    pub fn collision_range(&self) -> f32 {
        self.arena_size * COLLISION_RANGE_RATIO
    }

    pub fn player_half_extent(&self) -> f32 {
        self.arena_size * PLAYER_SIZE_RATIO / 2.0
    }

    /// Player speed (pixels per second)
    pub fn player_speed(&self) -> f32 {
        self.arena_size * PLAYER_SPEED_RATIO
    }

    /// Enemy speed (pixels per second)
    pub fn enemy_speed(&self) -> f32 {
        self.arena_size * ENEMY_SPEED_RATIO
    }

    /// Enemy side length for a uniform sample `u` in `[0, 1)`
    pub fn enemy_side(&self, u: f32) -> f32 {
        (u * self.arena_size * ENEMY_SIZE_SPREAD_RATIO + self.arena_size * ENEMY_MIN_SIZE_RATIO)
            .floor()
    }
}

fn invalid(field: &'static str, reason: &str) -> SettingsError {
    SettingsError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let s = Settings::default();
        assert!((s.margin() - 90.0).abs() < 1e-4);
        assert!((s.safe_band() - 27.0).abs() < 1e-4);
        assert!((s.exit_margin() - 60.0).abs() < 1e-4);
        assert!((s.collision_range() - 60.0).abs() < 1e-4);
        assert!((s.player_half_extent() - 20.0).abs() < 1e-4);
        assert!((s.player_speed() - 360.0).abs() < 1e-3);
        assert!((s.enemy_speed() - 480.0).abs() < 1e-3);
    }

    #[test]
    fn test_enemy_side_range() {
        let s = Settings::default();
        assert_eq!(s.enemy_side(0.0), 18.0);
        assert_eq!(s.enemy_side(0.5), 42.0);
        assert!(s.enemy_side(0.9999) <= 65.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s = Settings::from_json(r#"{ "arena_size": 800.0, "seed": 7 }"#).unwrap();
        assert_eq!(s.arena_size, 800.0);
        assert_eq!(s.seed, 7);
        assert_eq!(s.spawn_chance, SPAWN_CHANCE);
        assert_eq!(s.max_step_ms, MAX_STEP_MS);
    }

    #[test]
    fn test_json_roundtrip() {
        let s = Settings {
            seed: 42,
            ..Default::default()
        };
        let json = s.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), s);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = Settings::from_json(r#"{ "spawn_chance": 1.5 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "spawn_chance", .. }));

        let err = Settings::from_json(r#"{ "arena_size": -1.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "arena_size", .. }));

        let err = Settings::from_json(r#"{ "max_step_ms": 0.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "max_step_ms", .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Settings::from_json("{ arena_size: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Settings::load("/nonexistent/square-dodge.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
