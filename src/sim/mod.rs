//! Frame simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Elapsed time comes in, new state comes out
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod obb;
pub mod sat;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod vector;

pub use obb::OrientedBox;
pub use sat::{SatResult, sat_test};
pub use snapshot::{FrameSnapshot, Pose};
pub use state::{
    Enemy, EnemyPhase, GameEvent, GameState, Player, in_spawn_exclusion, sample_spawn_point,
};
pub use tick::{FrameClock, TickInput, clamp_elapsed, tick};
