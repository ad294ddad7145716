//! Read-only view of the simulation for the presentation layer

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{SimulationState, speed_level_at};
use crate::consts::*;

/// Everything a renderer needs, in normalized world units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player_x: f32,
    pub player_y: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub obstacle_x: f32,
    pub obstacle_width: f32,
    pub obstacle_height: f32,
    pub ground_y: f32,
    pub score: u32,
    pub is_game_over: bool,
    pub elapsed_seconds: f32,
    pub size_level: u32,
    pub speed_level: u32,
}

impl Snapshot {
    pub fn capture(state: &SimulationState) -> Self {
        Self {
            player_x: PLAYER_X,
            player_y: state.player_y,
            player_width: state.player_width(),
            player_height: state.player_height(),
            obstacle_x: state.obstacle_x,
            obstacle_width: state.obstacle_width(),
            obstacle_height: state.obstacle_height(),
            ground_y: GROUND_Y,
            score: state.score,
            is_game_over: state.is_game_over(),
            elapsed_seconds: state.elapsed_seconds,
            size_level: state.size_level,
            speed_level: speed_level_at(state.elapsed_seconds),
        }
    }

    /// Map a world point to pixels (`pixel = fraction * dimension`)
    #[inline]
    pub fn to_pixels(world: Vec2, screen: Vec2) -> Vec2 {
        world * screen
    }

    /// Top-left corner of the player sprite in world units
    pub fn player_top_left(&self) -> Vec2 {
        Vec2::new(
            self.player_x - self.player_width / 2.0,
            self.player_y - self.player_height,
        )
    }

    /// Top-left corner of the obstacle sprite in world units
    pub fn obstacle_top_left(&self) -> Vec2 {
        Vec2::new(self.obstacle_x, self.ground_y - self.obstacle_height)
    }
}

impl From<&SimulationState> for Snapshot {
    fn from(state: &SimulationState) -> Self {
        Self::capture(state)
    }
}
