//! TrigBlaster - accelerometer-driven sprite motion
//!
//! Core modules:
//! - `sim`: Per-frame motion integration (filtering, physics, borders, heading)
//! - `tuning`: Data-driven motion constants and border policy
//! - `platform`: Host-facing traits (accelerometer, sprite handle, frame driver)

pub mod platform;
pub mod sim;
pub mod tuning;

pub use sim::{ActorState, Arena, BorderPolicy, Simulation};
pub use tuning::{RotationTuning, Tuning, TuningError};

use std::f32::consts::PI;

/// Default tuning constants
pub mod consts {
    /// Acceleration at full tilt (points/s²)
    pub const MAX_PLAYER_ACCELERATION: f32 = 200.0;
    /// Per-axis speed cap (points/s)
    pub const MAX_PLAYER_SPEED: f32 = 150.0;
    /// Fraction of speed kept after hitting a border
    pub const BORDER_COLLISION_DAMPING: f32 = 0.4;
    /// Weight of the newest accelerometer sample
    pub const ACCELEROMETER_FILTER_FACTOR: f32 = 0.75;
    /// Weight of the target heading per frame
    pub const ROTATION_BLEND_FACTOR: f32 = 0.2;
    /// Minimum speed before the sprite turns to face its heading
    pub const ROTATION_THRESHOLD: f32 = 40.0;
    /// Smallest step ever taken (seconds)
    pub const MIN_FRAME_DT: f32 = 1.0 / 30.0;
    /// Largest step the frame clock hands out (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Sprite artwork faces up; heading 0 points right
    pub const SPRITE_FACING_OFFSET: f32 = super::DEGREES_TO_RADIANS * 90.0;
}

pub const DEGREES_TO_RADIANS: f32 = PI / 180.0;
pub const RADIANS_TO_DEGREES: f32 = 180.0 / PI;

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Direction of travel for a velocity vector (atan2, range (-π, π])
#[inline]
pub fn heading(velocity: glam::Vec2) -> f32 {
    velocity.y.atan2(velocity.x)
}
