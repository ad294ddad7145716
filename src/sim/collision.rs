//! Collision detection between the player and the obstacle
//!
//! Both are axis-aligned boxes in world units. Overlap is strict: boxes that
//! only share an edge do not collide.

use glam::Vec2;

use super::state::SimulationState;
use crate::consts::*;

/// Axis-aligned box, `min` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box from left/top/right/bottom edges
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(Vec2::new(left, top), Vec2::new(right, bottom))
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Strict overlap on both axes
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x
            && self.min.x < other.max.x
            && self.max.y > other.min.y
            && self.min.y < other.max.y
    }
}

/// Player hitbox: centered on PLAYER_X, feet at `player_y`
pub fn player_box(state: &SimulationState) -> Aabb {
    let half_w = state.player_width() / 2.0;
    Aabb::from_edges(
        PLAYER_X - half_w,
        state.player_y - state.player_height(),
        PLAYER_X + half_w,
        state.player_y,
    )
}

/// Obstacle hitbox: left edge at `obstacle_x`, sitting on the ground
pub fn obstacle_box(state: &SimulationState) -> Aabb {
    Aabb::from_edges(
        state.obstacle_x,
        GROUND_Y - state.obstacle_height(),
        state.obstacle_x + state.obstacle_width(),
        GROUND_Y,
    )
}

/// Whether the player currently touches the obstacle
pub fn check_collision(state: &SimulationState) -> bool {
    player_box(state).overlaps(&obstacle_box(state))
}
