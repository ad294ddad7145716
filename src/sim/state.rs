//! Simulation state and core types
//!
//! Everything the runner needs to advance deterministically lives here.
//! Difficulty (size, speed) is derived from `elapsed_seconds`, never stored
//! as an accumulator.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Running,
    /// Player hit the obstacle; frozen until restart
    GameOver,
}

/// Things that happened during a tick, for sound/flash effects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Obstacle wrapped back to the spawn point with a new scale
    ObstacleRespawned { scale: f32 },
    /// Player grew to a new size level
    SizeLevelUp { level: u32 },
    /// Obstacle speed tier increased
    SpeedLevelUp { level: u32 },
    /// Player jumped with the given velocity
    Jumped { velocity: f32 },
    /// Run ended with the final score
    GameOver { score: u32 },
    /// State was reset
    Restarted,
}

/// Complete simulation state (deterministic for a given seed and input)
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Player feet position (GROUND_Y when standing)
    pub player_y: f32,
    /// Vertical speed, positive = falling
    pub player_velocity: f32,
    /// Obstacle left edge
    pub obstacle_x: f32,
    /// Survival time since last reset
    pub elapsed_seconds: f32,
    /// floor(elapsed_seconds)
    pub score: u32,
    /// Current phase
    pub phase: GamePhase,
    /// Player growth tier
    pub size_level: u32,
    /// Per-spawn obstacle size multiplier
    pub obstacle_scale: f32,
    /// Timestamp of the previous space-down event
    pub last_space_down_ms: Option<u64>,
    /// Events raised since the last drain, oldest first.
    ///
    /// `Game::frame` drains these every frame. Callers driving `advance`
    /// directly should call `drain_events`; at most `MAX_PENDING_EVENTS`
    /// are kept, older ones are discarded.
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl SimulationState {
    /// Create a new state with the given seed
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            player_y: GROUND_Y,
            player_velocity: 0.0,
            obstacle_x: OBSTACLE_SPAWN_X,
            elapsed_seconds: 0.0,
            score: 0,
            phase: GamePhase::Running,
            size_level: 0,
            obstacle_scale: 1.0,
            last_space_down_ms: None,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        };
        state.obstacle_scale = state.sample_obstacle_scale();
        state
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Player standing on (or within epsilon of) the ground
    #[inline]
    pub fn is_grounded(&self) -> bool {
        (self.player_y - GROUND_Y).abs() < GROUNDED_EPSILON
    }

    /// Draw a fresh obstacle scale in [OBSTACLE_SCALE_MIN, OBSTACLE_SCALE_MAX]
    pub fn sample_obstacle_scale(&mut self) -> f32 {
        self.rng.random_range(OBSTACLE_SCALE_MIN..=OBSTACLE_SCALE_MAX)
    }

    /// Current player hitbox width
    pub fn player_width(&self) -> f32 {
        PLAYER_BASE_WIDTH * growth_multiplier(self.size_level)
    }

    /// Current player hitbox height
    pub fn player_height(&self) -> f32 {
        PLAYER_BASE_HEIGHT * growth_multiplier(self.size_level)
    }

    /// Current obstacle width
    pub fn obstacle_width(&self) -> f32 {
        OBSTACLE_BASE_WIDTH * self.obstacle_scale
    }

    /// Current obstacle height
    pub fn obstacle_height(&self) -> f32 {
        OBSTACLE_BASE_HEIGHT * self.obstacle_scale
    }

    /// Obstacle horizontal speed for the current survival time
    pub fn obstacle_speed(&self) -> f32 {
        obstacle_speed_at(self.elapsed_seconds)
    }

    /// Record a space-down at `now_ms`; returns true if it completes a double press.
    ///
    /// The timestamp is overwritten regardless of the outcome, so a triple
    /// press reports a double press on both the second and third event.
    pub fn register_space_down(&mut self, now_ms: u64, window_ms: u64) -> bool {
        let is_double = self
            .last_space_down_ms
            .is_some_and(|prev| now_ms.saturating_sub(prev) <= window_ms);
        self.last_space_down_ms = Some(now_ms);
        is_double
    }

    /// Queue an event, discarding the oldest once the buffer is full
    pub fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Undrained events kept per state
pub const MAX_PENDING_EVENTS: usize = 256;

/// floor(elapsed / SIZE_LEVEL_SECONDS)
pub fn size_level_at(elapsed_seconds: f32) -> u32 {
    (elapsed_seconds / SIZE_LEVEL_SECONDS).floor() as u32
}

/// floor(elapsed / SPEED_LEVEL_SECONDS)
pub fn speed_level_at(elapsed_seconds: f32) -> u32 {
    (elapsed_seconds / SPEED_LEVEL_SECONDS).floor() as u32
}

/// 0.5 * (1 + 0.1 * speed_level)
pub fn obstacle_speed_at(elapsed_seconds: f32) -> f32 {
    BASE_OBSTACLE_SPEED * (1.0 + SPEED_STEP * speed_level_at(elapsed_seconds) as f32)
}

fn growth_multiplier(size_level: u32) -> f32 {
    (1.0 + PLAYER_GROWTH_PER_LEVEL * size_level as f32).min(PLAYER_MAX_GROWTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = SimulationState::new(7);
        assert_eq!(state.player_y, GROUND_Y);
        assert_eq!(state.obstacle_x, OBSTACLE_SPAWN_X);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Running);
        assert!(state.is_grounded());
        assert!((OBSTACLE_SCALE_MIN..=OBSTACLE_SCALE_MAX).contains(&state.obstacle_scale));
    }

    #[test]
    fn test_speed_levels() {
        assert!((obstacle_speed_at(0.0) - 0.5).abs() < 1e-6);
        assert!((obstacle_speed_at(9.99) - 0.5).abs() < 1e-6);
        assert!((obstacle_speed_at(10.0) - 0.55).abs() < 1e-6);
        assert!((obstacle_speed_at(25.0) - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_player_growth_caps() {
        let mut state = SimulationState::new(1);
        state.size_level = 3;
        assert!((state.player_width() - PLAYER_BASE_WIDTH * 1.3).abs() < 1e-6);
        state.size_level = 50;
        assert!((state.player_height() - PLAYER_BASE_HEIGHT * PLAYER_MAX_GROWTH).abs() < 1e-6);
    }

    #[test]
    fn test_double_press_window() {
        let mut state = SimulationState::new(1);
        assert!(!state.register_space_down(1_000, 250));
        assert!(state.register_space_down(1_250, 250));
        assert!(!state.register_space_down(1_501, 250));
        assert_eq!(state.last_space_down_ms, Some(1_501));
    }

    #[test]
    fn test_event_buffer_is_bounded() {
        let mut state = SimulationState::new(1);
        for level in 0..1_000 {
            state.push_event(GameEvent::SizeLevelUp { level });
        }
        assert_eq!(state.events.len(), MAX_PENDING_EVENTS);
        assert_eq!(state.events[0], GameEvent::SizeLevelUp { level: 744 });
        assert_eq!(state.drain_events().len(), MAX_PENDING_EVENTS);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_same_seed_same_scales() {
        let mut a = SimulationState::new(42);
        let mut b = SimulationState::new(42);
        assert_eq!(a.obstacle_scale, b.obstacle_scale);
        for _ in 0..10 {
            assert_eq!(a.sample_obstacle_scale(), b.sample_obstacle_scale());
        }
    }
}
