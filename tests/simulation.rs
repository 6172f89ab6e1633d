//! End-to-end runs through the public simulation API

use glam::Vec2;
use square_dodge::Settings;
use square_dodge::sim::{EnemyPhase, FrameClock, GameEvent, GameState, TickInput, tick};

fn run(settings: Settings, frames: u64) -> (GameState, Vec<GameEvent>) {
    let mut state = GameState::new(settings);
    let mut clock = FrameClock::new();
    let mut events = Vec::new();
    for frame in 0..frames {
        let input = match (frame / 30) % 4 {
            0 => TickInput { up: true, left: true, ..Default::default() },
            1 => TickInput { right: true, ..Default::default() },
            2 => TickInput { down: true, ..Default::default() },
            _ => TickInput::default(),
        };
        let elapsed = clock.advance(frame as f64 * 1000.0 / 60.0);
        events.extend(tick(&mut state, &input, elapsed));
    }
    (state, events)
}

#[test]
fn long_session_keeps_invariants() {
    let settings = Settings {
        seed: 2024,
        ..Default::default()
    };
    let margin = settings.margin();
    let size = settings.arena_size;
    let (state, events) = run(settings, 60 * 120);

    let p = state.player.pos;
    assert!(p.x >= margin && p.x <= size - margin);
    assert!(p.y >= margin && p.y <= size - margin);

    let escaped = events
        .iter()
        .filter(|e| matches!(e, GameEvent::EnemyEscaped { .. }))
        .count() as u64;
    let spawned = events
        .iter()
        .filter(|e| matches!(e, GameEvent::EnemySpawned { .. }))
        .count();
    assert_eq!(state.score, escaped);
    assert_eq!(spawned, state.enemies.len() + escaped as usize);
    assert!(spawned > 0);

    let snap = state.snapshot();
    assert_eq!(snap.enemies.len(), state.enemies.len());
    assert!(snap.enemies.iter().all(|e| e.x.is_finite() && e.y.is_finite() && e.angle.is_finite()));
    assert!(snap.player.x.is_finite() && snap.player.angle.is_finite());
}

#[test]
fn same_seed_same_game() {
    let settings = Settings {
        seed: 7,
        spawn_chance: 0.1,
        ..Default::default()
    };
    let (a, ea) = run(settings.clone(), 1200);
    let (b, eb) = run(settings, 1200);
    assert_eq!(ea, eb);
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn charging_enemy_flies_through_and_scores() {
    let settings = Settings {
        spawn_chance: 0.0,
        ..Default::default()
    };
    let mut state = GameState::new(settings);
    // Left of the player, level with it
    let id = state.spawn_enemy_at(Vec2::new(40.0, 200.0), 10.0);
    state.player.pos = Vec2::new(300.0, 450.0);

    let mut escaped_at = None;
    for frame in 0..400 {
        let events = tick(&mut state, &TickInput::default(), 16.0);
        if events.contains(&GameEvent::EnemyEscaped { id }) {
            escaped_at = Some(frame);
            break;
        }
        if let Some(enemy) = state.enemy(id) {
            if enemy.phase == EnemyPhase::Attacking {
                // Charge moves toward the player's position at charge time
                assert!(enemy.target.x < 0.0 && enemy.target.y < 0.0);
            }
        }
    }
    assert!(escaped_at.is_some());
    assert_eq!(state.score, 1);
    assert!(state.enemy(id).is_none());
}

#[test]
fn snapshot_serializes_to_json() {
    let mut state = GameState::new(Settings::default());
    state.spawn_enemy_at(Vec2::new(40.0, 40.0), 9.0);
    let json = serde_json::to_string(&state.snapshot()).unwrap();
    assert!(json.contains("\"score\":0"));
    assert!(json.contains("\"half_extent\":9.0"));
}
