//! Actor and arena state
//!
//! All state that survives between frames lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The playable rectangle, origin at the bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Finite, positive width and height
    pub fn is_valid(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Upper corner of the arena
    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Check if a point lies inside the arena (borders included)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }
}

impl From<(f32, f32)> for Arena {
    fn from((width, height): (f32, f32)) -> Self {
        Self::new(width, height)
    }
}

/// The single moving actor (the player sprite)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ActorState {
    pub pos: Vec2,
    pub vel: Vec2,
    pub accel: Vec2,
    /// Smoothed orientation (radians, unwrapped, may leave [-π, π))
    pub angle: f32,
    /// Heading seen on the last frame rotation was updated
    pub previous_angle: f32,
}

impl ActorState {
    /// Actor at rest at the given position
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            ..Default::default()
        }
    }

    /// Actor at rest at the scene's spawn point for a sprite of the given size
    pub fn centered(arena: Arena, sprite_size: Vec2) -> Self {
        Self::at((arena.max() - sprite_size) / 2.0)
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}
