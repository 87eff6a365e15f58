//! Accelerometer low-pass filter
//!
//! Raw tilt readings are jittery. An exponential moving average keeps most of
//! the newest sample while smoothing out spikes, and the smoothed reading is
//! then mapped onto arena axes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Smoothed accelerometer reading carried between frames
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub filtered: Vec2,
}

impl FilterState {
    /// Fold a raw sample into the running average and return the new value
    pub fn push(&mut self, raw: Vec2, factor: f32) -> Vec2 {
        self.filtered = filter(raw, self.filtered, factor);
        self.filtered
    }
}

/// Exponential moving average, applied per axis
#[inline]
pub fn filter(raw: Vec2, previous: Vec2, factor: f32) -> Vec2 {
    raw * factor + previous * (1.0 - factor)
}

/// Map filtered device axes onto arena acceleration
///
/// The device is held rotated relative to the screen: device Y drives arena X
/// (inverted) and device X drives arena Y.
#[inline]
pub fn acceleration_from_filtered(filtered: Vec2, max_accel: f32) -> Vec2 {
    Vec2::new(filtered.y * -max_accel, filtered.x * max_accel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_filter_weights_newest_sample() {
        let out = filter(Vec2::new(1.0, -1.0), Vec2::ZERO, 0.75);
        assert!((out.x - 0.75).abs() < 1e-6);
        assert!((out.y + 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_filter_converges_geometrically() {
        let raw = Vec2::new(0.4, -0.8);
        let mut state = FilterState::default();
        let mut last_err = (raw - state.filtered).length();

        for _ in 0..12 {
            state.push(raw, ACCELEROMETER_FILTER_FACTOR);
            let err = (raw - state.filtered).length();
            assert!((err - last_err * (1.0 - ACCELEROMETER_FILTER_FACTOR)).abs() < 1e-5);
            last_err = err;
        }
        assert!(last_err < 1e-6);
    }

    #[test]
    fn test_axis_cross_mapping() {
        // Device tilted along its X axis pushes the actor along arena Y
        let accel = acceleration_from_filtered(Vec2::new(0.5, 0.0), MAX_PLAYER_ACCELERATION);
        assert_eq!(accel, Vec2::new(0.0, 100.0));

        // Device tilted along its Y axis pushes the actor along -X
        let accel = acceleration_from_filtered(Vec2::new(0.0, 0.5), MAX_PLAYER_ACCELERATION);
        assert_eq!(accel, Vec2::new(-100.0, 0.0));
    }
}
