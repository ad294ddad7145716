//! Dash Runner - A single-screen arcade runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, scoring, difficulty, collisions)
//! - `input`: Raw input events to simulation commands
//! - `game`: Frame driver tying clock, input and simulation together
//! - `settings`: Data-driven configuration
//! - `highscores`: Session leaderboard

pub mod error;
pub mod game;
pub mod highscores;
pub mod input;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use game::Game;
pub use highscores::HighScores;
pub use settings::{Settings, TimestepMode};

/// Game configuration constants
///
/// All positions and sizes are normalized world units (0-1), origin top-left,
/// Y grows downward.
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest dt a single `advance` will integrate
    pub const MAX_STEP_DT: f32 = 0.05;
    /// Largest real frame delta fed into the clock
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Ground line (player feet rest here)
    pub const GROUND_Y: f32 = 0.9;
    /// Player horizontal center (fixed)
    pub const PLAYER_X: f32 = 0.2;
    /// Distance from ground that still counts as standing
    pub const GROUNDED_EPSILON: f32 = 0.005;

    /// Downward acceleration (fraction/s²)
    pub const GRAVITY: f32 = 5.0;
    /// Single-press jump velocity (negative = up)
    pub const SHORT_JUMP_VELOCITY: f32 = -2.0;
    /// Double-press jump velocity
    pub const HIGH_JUMP_VELOCITY: f32 = -3.2;

    /// Player hitbox at size level 0
    pub const PLAYER_BASE_WIDTH: f32 = 0.05;
    pub const PLAYER_BASE_HEIGHT: f32 = 0.08;
    /// Growth per size level (multiplicative on the base size)
    pub const PLAYER_GROWTH_PER_LEVEL: f32 = 0.1;
    /// Cap on the player growth multiplier
    pub const PLAYER_MAX_GROWTH: f32 = 2.0;
    /// Seconds of survival per size level
    pub const SIZE_LEVEL_SECONDS: f32 = 15.0;

    /// Obstacle spawn position (just off the right edge)
    pub const OBSTACLE_SPAWN_X: f32 = 1.2;
    /// Obstacle size at scale 1.0
    pub const OBSTACLE_BASE_WIDTH: f32 = 0.06;
    pub const OBSTACLE_BASE_HEIGHT: f32 = 0.08;
    /// Per-spawn random scale range (inclusive)
    pub const OBSTACLE_SCALE_MIN: f32 = 0.7;
    pub const OBSTACLE_SCALE_MAX: f32 = 1.5;

    /// Obstacle speed at speed level 0 (fraction/s)
    pub const BASE_OBSTACLE_SPEED: f32 = 0.5;
    /// Speed bonus per speed level (fraction of base)
    pub const SPEED_STEP: f32 = 0.1;
    /// Seconds of survival per speed level
    pub const SPEED_LEVEL_SECONDS: f32 = 10.0;

    /// Two space presses within this window trigger a high jump
    pub const DOUBLE_PRESS_WINDOW_MS: u64 = 250;
}
