//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - State changes only through `advance`, `jump`, `restart`
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use clock::FrameClock;
pub use collision::{Aabb, check_collision, obstacle_box, player_box};
pub use snapshot::Snapshot;
pub use state::{
    GameEvent, GamePhase, MAX_PENDING_EVENTS, SimulationState, obstacle_speed_at, size_level_at,
    speed_level_at,
};
pub use tick::{Command, JumpKind, advance, apply_command, jump, restart, sanitize_dt};
