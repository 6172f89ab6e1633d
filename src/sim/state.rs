//! Game state and entity types
//!
//! Everything a frame step reads or mutates lives in [`GameState`]. A state
//! built from the same settings and fed the same inputs evolves identically.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::obb::OrientedBox;
use super::snapshot::{FrameSnapshot, Pose};
use super::vector::normalize;
use crate::heading_angle;
use crate::settings::Settings;

/// Something that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new enemy entered the arena
    EnemySpawned { id: u32 },
    /// An enemy finished aiming and started its charge
    EnemyCharged { id: u32 },
    /// An enemy left the arena and was removed (score +1)
    EnemyEscaped { id: u32 },
    /// The player was shoved out of an enemy
    PlayerPushed { push: Vec2 },
}

/// The player-controlled square
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub half_extent: f32,
    /// Pixels per second
    pub speed: f32,
    /// Unit movement direction, zero when no key is held
    pub direction: Vec2,
}

impl Player {
    /// Create the player at the arena center
    pub fn new(settings: &Settings) -> Self {
        Self {
            pos: Vec2::splat(settings.arena_size / 2.0),
            half_extent: settings.player_half_extent(),
            speed: settings.player_speed(),
            direction: Vec2::ZERO,
        }
    }

    /// Orientation follows the current movement direction
    pub fn angle(&self) -> f32 {
        heading_angle(self.direction)
    }

    pub fn as_box(&self) -> OrientedBox {
        OrientedBox::new(self.pos, self.half_extent, self.angle())
    }

    /// Keep the player inside `[margin, size - margin]` on both axes
    pub fn clamp_to(&mut self, settings: &Settings) {
        let margin = settings.margin();
        let lo = Vec2::splat(margin);
        let hi = Vec2::splat(settings.arena_size - margin);
        self.pos = self.pos.max(lo).min(hi);
    }
}

/// Enemy lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EnemyPhase {
    /// Tracking the player until the countdown runs out
    Preparing { countdown_ms: f32 },
    /// Charging along the frozen target direction
    Attacking,
}

/// A homing enemy square
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub half_extent: f32,
    /// Pixels per second
    pub speed: f32,
    pub phase: EnemyPhase,
    /// Unit vector from the player to this enemy. The enemy charges along
    /// its negation, so it heads toward where the player was.
    pub target: Vec2,
    /// Push from this frame's collision test, zero when not colliding
    pub push: Vec2,
}

impl Enemy {
    pub fn new(id: u32, pos: Vec2, half_extent: f32, settings: &Settings) -> Self {
        Self {
            id,
            pos,
            half_extent,
            speed: settings.enemy_speed(),
            phase: EnemyPhase::Preparing {
                countdown_ms: settings.enemy_countdown_ms,
            },
            target: Vec2::X,
            push: Vec2::ZERO,
        }
    }

    pub fn is_preparing(&self) -> bool {
        matches!(self.phase, EnemyPhase::Preparing { .. })
    }

    /// Re-aim at the player. Keeps the previous aim if both are on the
    /// same spot.
    pub fn aim_at(&mut self, player_pos: Vec2) {
        let dir = normalize(self.pos - player_pos);
        if dir != Vec2::ZERO {
            self.target = dir;
        }
    }

    /// Orientation follows the aim direction
    pub fn angle(&self) -> f32 {
        heading_angle(self.target)
    }

    pub fn as_box(&self) -> OrientedBox {
        OrientedBox::new(self.pos, self.half_extent, self.angle())
    }

    /// Advance the aiming countdown. Returns true on the frame the enemy
    /// switches to attacking; the aim computed here is kept from then on.
    pub fn prepare(&mut self, player_pos: Vec2, elapsed_ms: f32) -> bool {
        let EnemyPhase::Preparing { countdown_ms } = &mut self.phase else {
            return false;
        };
        *countdown_ms -= elapsed_ms;
        let expired = *countdown_ms < 0.0;
        self.aim_at(player_pos);
        if expired {
            self.phase = EnemyPhase::Attacking;
        }
        expired
    }

    /// Move back along the frozen target vector
    pub fn charge(&mut self, elapsed_ms: f32) {
        if self.phase == EnemyPhase::Attacking {
            self.pos -= self.target * (self.speed / 1000.0) * elapsed_ms;
        }
    }

    /// Whether the enemy is past the arena border by more than the exit margin
    pub fn has_escaped(&self, settings: &Settings) -> bool {
        let outside = settings.exit_margin();
        let far = settings.arena_size + outside;
        self.pos.x < -outside || self.pos.y < -outside || self.pos.x > far || self.pos.y > far
    }
}

/// Whether a spawn candidate falls in the excluded zone: the area around the
/// player's start (the playfield widened by the safe band) or the thin band
/// along the outer border.
pub fn in_spawn_exclusion(p: Vec2, settings: &Settings) -> bool {
    let size = settings.arena_size;
    let margin = settings.margin();
    let a = settings.safe_band();

    let interior = p.x > margin - a
        && p.y > margin - a
        && p.x < size - margin + a
        && p.y < size - margin + a;
    let border = p.x < a || p.y < a || p.x > size - a || p.y > size - a;
    interior || border
}

/// Rejection-sample a spawn position. Terminates because the accepted ring
/// has positive area for any valid arena.
pub fn sample_spawn_point(rng: &mut impl Rng, settings: &Settings) -> Vec2 {
    let extent = settings.arena_size + 1.0;
    loop {
        let p = Vec2::new(rng.random::<f32>() * extent, rng.random::<f32>() * extent);
        if !in_spawn_exclusion(p, settings) {
            return p;
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    pub player: Player,
    /// Live enemies in spawn order
    pub enemies: Vec<Enemy>,
    /// Enemies that escaped the arena
    pub score: u64,
    /// Frames stepped so far
    pub frames: u64,
    /// Simulated time so far (ms, after clamping)
    pub time_ms: f64,
    rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Start a game with the player at the arena center and no enemies
    pub fn new(settings: Settings) -> Self {
        let rng = Pcg32::seed_from_u64(settings.seed);
        Self {
            player: Player::new(&settings),
            settings,
            enemies: Vec::new(),
            score: 0,
            frames: 0,
            time_ms: 0.0,
            rng,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Roll the per-frame spawn chance
    pub(crate) fn roll_spawn(&mut self) -> bool {
        self.rng.random::<f32>() < self.settings.spawn_chance
    }

    /// Spawn one enemy at a random position outside the exclusion zone
    pub fn spawn_enemy(&mut self) -> u32 {
        let pos = sample_spawn_point(&mut self.rng, &self.settings);
        let side = self.settings.enemy_side(self.rng.random::<f32>());
        self.spawn_enemy_at(pos, side / 2.0)
    }

    /// Spawn one enemy at an explicit position, already aimed at the player
    pub fn spawn_enemy_at(&mut self, pos: Vec2, half_extent: f32) -> u32 {
        let id = self.next_entity_id();
        let mut enemy = Enemy::new(id, pos, half_extent, &self.settings);
        enemy.aim_at(self.player.pos);
        log::debug!("Enemy {id} spawned at ({:.1}, {:.1})", pos.x, pos.y);
        self.enemies.push(enemy);
        id
    }

    pub fn enemy(&self, id: u32) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            player: Pose::new(self.player.pos, self.player.angle(), self.player.half_extent),
            enemies: self
                .enemies
                .iter()
                .map(|e| Pose::new(e.pos, e.angle(), e.half_extent))
                .collect(),
            score: self.score,
        }
    }
}
