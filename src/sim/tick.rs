//! Per-frame simulation step
//!
//! One call to [`tick`] per animation frame: move the player, advance every
//! enemy, then roll for a spawn.

use glam::Vec2;

use super::sat::sat_test;
use super::state::{EnemyPhase, GameEvent, GameState};
use super::vector::normalize;
use crate::consts::PUSH_OVERSHOOT;

/// Pressed-direction snapshot for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    /// Unit movement direction. Opposite keys cancel out; nothing held
    /// gives zero.
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        normalize(dir)
    }
}

/// Turns animation-frame timestamps into elapsed times
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_timestamp: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed ms since the previous timestamp. The first frame has no
    /// predecessor and yields 0.
    pub fn advance(&mut self, timestamp_ms: f64) -> f32 {
        let elapsed = self.last_timestamp.map_or(0.0, |prev| timestamp_ms - prev);
        self.last_timestamp = Some(timestamp_ms);
        elapsed as f32
    }

    /// Forget the last timestamp (e.g. after the loop was suspended)
    pub fn reset(&mut self) {
        self.last_timestamp = None;
    }
}

/// Clamp an elapsed time to `[0, max_step_ms]`. NaN counts as 0.
pub fn clamp_elapsed(elapsed_ms: f32, max_step_ms: f32) -> f32 {
    if elapsed_ms.is_nan() || elapsed_ms < 0.0 {
        return 0.0;
    }
    if elapsed_ms > max_step_ms {
        log::warn!("Frame took {elapsed_ms:.1} ms, simulating {max_step_ms:.1} ms");
        return max_step_ms;
    }
    elapsed_ms
}

/// Advance the game by one frame of `elapsed_ms` milliseconds
pub fn tick(state: &mut GameState, input: &TickInput, elapsed_ms: f32) -> Vec<GameEvent> {
    let dt = clamp_elapsed(elapsed_ms, state.settings.max_step_ms);
    let mut events = Vec::new();

    state.frames += 1;
    state.time_ms += f64::from(dt);

    update_player(state, input, dt);
    update_enemies(state, dt, &mut events);

    // One roll per frame regardless of dt
    if state.roll_spawn() {
        let id = state.spawn_enemy();
        events.push(GameEvent::EnemySpawned { id });
    }

    events
}

fn update_player(state: &mut GameState, input: &TickInput, dt: f32) {
    let player = &mut state.player;
    player.direction = input.direction();
    player.pos += player.direction * (player.speed / 1000.0) * dt;
    // Walls are soft: clamp rather than end the game
    player.clamp_to(&state.settings);
}

fn update_enemies(state: &mut GameState, dt: f32, events: &mut Vec<GameEvent>) {
    let settings = &state.settings;
    let player = &mut state.player;
    let collision_range = settings.collision_range();

    // Removal happens after the loop so every enemy is visited exactly once
    let mut escaped = Vec::new();

    for enemy in &mut state.enemies {
        match enemy.phase {
            EnemyPhase::Preparing { .. } => {
                if enemy.prepare(player.pos, dt) {
                    log::debug!(
                        "Enemy {} charging along ({:.2}, {:.2})",
                        enemy.id,
                        -enemy.target.x,
                        -enemy.target.y
                    );
                    events.push(GameEvent::EnemyCharged { id: enemy.id });
                }
            }
            EnemyPhase::Attacking => {
                enemy.charge(dt);
                enemy.push = Vec2::ZERO;

                if enemy.has_escaped(settings) {
                    escaped.push(enemy.id);
                    continue;
                }

                if enemy.pos.distance(player.pos) < collision_range {
                    let result = sat_test(&player.as_box(), &enemy.as_box());
                    if result.colliding {
                        log::trace!("Enemy {} pushes player by {:?}", enemy.id, result.push);
                        enemy.push = result.push;
                        player.pos += result.push * PUSH_OVERSHOOT;
                        player.clamp_to(settings);
                        events.push(GameEvent::PlayerPushed { push: result.push });
                    }
                }
            }
        }
    }

    if escaped.is_empty() {
        return;
    }
    state.enemies.retain(|e| !escaped.contains(&e.id));
    for id in escaped {
        state.score += 1;
        log::debug!("Enemy {id} escaped, score {}", state.score);
        events.push(GameEvent::EnemyEscaped { id });
    }
}
