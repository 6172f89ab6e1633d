//! Square Dodge entry point
//!
//! The native binary runs a headless session: the simulation is driven by a
//! synthetic 60 Hz clock and a scripted input pattern, and the final render
//! snapshot is printed as JSON.
//!
//! Usage: `square-dodge [settings.json] [frames]`

use square_dodge::Settings;
use square_dodge::sim::{FrameClock, GameEvent, GameState, TickInput, tick};

/// Default session length (one minute at 60 Hz)
const DEFAULT_FRAMES: u64 = 3600;
/// Synthetic display refresh interval (ms)
const REFRESH_MS: f64 = 1000.0 / 60.0;
/// Frames spent on each leg of the scripted input
const LEG_FRAMES: u64 = 45;

/// Scripted input: circle the arena clockwise
fn scripted_input(frame: u64) -> TickInput {
    match (frame / LEG_FRAMES) % 4 {
        0 => TickInput { up: true, ..Default::default() },
        1 => TickInput { right: true, ..Default::default() },
        2 => TickInput { down: true, ..Default::default() },
        _ => TickInput { left: true, ..Default::default() },
    }
}

fn load_settings(path: Option<&str>) -> Settings {
    let Some(path) = path else {
        log::info!("Using default settings");
        return Settings::default();
    };
    match Settings::load(path) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{e}; using default settings");
            Settings::default()
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let settings = load_settings(args.first().map(String::as_str));
    let frames = match args.get(1).map(|s| s.parse::<u64>()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::error!("Invalid frame count: {e}; running {DEFAULT_FRAMES} frames");
            DEFAULT_FRAMES
        }
        None => DEFAULT_FRAMES,
    };

    log::info!(
        "Square Dodge (headless) starting: arena {} px, seed {}, {frames} frames",
        settings.arena_size,
        settings.seed
    );

    let mut state = GameState::new(settings);
    let mut clock = FrameClock::new();
    let mut spawned = 0u64;
    let mut pushes = 0u64;

    for frame in 0..frames {
        let elapsed = clock.advance(frame as f64 * REFRESH_MS);
        for event in tick(&mut state, &scripted_input(frame), elapsed) {
            match event {
                GameEvent::EnemySpawned { .. } => spawned += 1,
                GameEvent::PlayerPushed { .. } => pushes += 1,
                GameEvent::EnemyCharged { .. } | GameEvent::EnemyEscaped { .. } => {}
            }
        }
    }

    log::info!(
        "Session over after {:.1} s: score {}, {spawned} spawned, {} alive, {pushes} pushes",
        state.time_ms / 1000.0,
        state.score,
        state.enemies.len()
    );

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to encode snapshot: {e}"),
    }
}
