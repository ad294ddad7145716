//! Simulation tick and command handlers
//!
//! `advance` moves the world forward by `dt`; `jump` and `restart` are the
//! only other ways gameplay state changes. Input is turned into a `Command`
//! and handed to `apply_command`.

use serde::{Deserialize, Serialize};

use super::check_collision;
use super::state::{
    GameEvent, GamePhase, SimulationState, obstacle_speed_at, size_level_at, speed_level_at,
};
use crate::consts::*;

/// Jump magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JumpKind {
    #[default]
    Short,
    High,
}

impl JumpKind {
    /// Initial vertical velocity (negative = up)
    pub fn velocity(self) -> f32 {
        match self {
            JumpKind::Short => SHORT_JUMP_VELOCITY,
            JumpKind::High => HIGH_JUMP_VELOCITY,
        }
    }
}

/// A discrete command consumed by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Jump(JumpKind),
    Restart,
}

/// Clamp `dt` into [0, MAX_STEP_DT]; NaN and negatives become 0
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_nan() {
        log::warn!("NaN dt ignored");
        return 0.0;
    }
    if dt.is_infinite() {
        log::warn!("Infinite dt clamped");
    }
    dt.clamp(0.0, MAX_STEP_DT)
}

/// Advance the simulation by `dt` seconds
pub fn advance(state: &mut SimulationState, dt: f32) {
    if state.is_game_over() {
        return;
    }
    let dt = sanitize_dt(dt);

    // Time and score
    let prev_speed_level = speed_level_at(state.elapsed_seconds);
    state.elapsed_seconds += dt;
    state.score = state.elapsed_seconds.floor() as u32;

    // Growth (recomputed, not incremented)
    let size_level = size_level_at(state.elapsed_seconds);
    if size_level > state.size_level {
        log::debug!("Size level {} at {:.2}s", size_level, state.elapsed_seconds);
        state.push_event(GameEvent::SizeLevelUp { level: size_level });
    }
    state.size_level = size_level;

    // Physics
    state.player_velocity += GRAVITY * dt;
    state.player_y += state.player_velocity * dt;
    if state.player_y > GROUND_Y {
        state.player_y = GROUND_Y;
        state.player_velocity = 0.0;
    }

    // Obstacle
    let speed_level = speed_level_at(state.elapsed_seconds);
    if speed_level > prev_speed_level {
        log::debug!("Speed level {} at {:.2}s", speed_level, state.elapsed_seconds);
        state.push_event(GameEvent::SpeedLevelUp { level: speed_level });
    }
    state.obstacle_x -= obstacle_speed_at(state.elapsed_seconds) * dt;

    // Respawn once fully off the left edge
    if state.obstacle_x + state.obstacle_width() < 0.0 {
        state.obstacle_x = OBSTACLE_SPAWN_X;
        state.obstacle_scale = state.sample_obstacle_scale();
        log::debug!("Obstacle respawned with scale {:.3}", state.obstacle_scale);
        state.push_event(GameEvent::ObstacleRespawned {
            scale: state.obstacle_scale,
        });
    }

    if check_collision(state) {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over after {:.2}s, score {}",
            state.elapsed_seconds,
            state.score
        );
        state.push_event(GameEvent::GameOver { score: state.score });
    }
}

/// Start a jump if the player is standing; returns whether it took effect
pub fn jump(state: &mut SimulationState, velocity: f32) -> bool {
    if state.is_game_over() || !state.is_grounded() {
        return false;
    }
    state.player_velocity = velocity;
    state.push_event(GameEvent::Jumped { velocity });
    true
}

/// Reset to a fresh run, keeping the RNG stream going
pub fn restart(state: &mut SimulationState) {
    state.player_y = GROUND_Y;
    state.player_velocity = 0.0;
    state.obstacle_x = OBSTACLE_SPAWN_X;
    state.elapsed_seconds = 0.0;
    state.score = 0;
    state.phase = GamePhase::Running;
    state.size_level = 0;
    state.last_space_down_ms = None;
    state.obstacle_scale = state.sample_obstacle_scale();
    state.push_event(GameEvent::Restarted);
    log::info!("Run restarted");
}

/// Apply a command: jumps are ignored once the run is over
pub fn apply_command(state: &mut SimulationState, command: Command) {
    match command {
        Command::Jump(kind) => {
            jump(state, kind.velocity());
        }
        Command::Restart => restart(state),
    }
}
