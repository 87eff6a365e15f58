//! Seeded stand-in accelerometer for headless runs

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::Accelerometer;

/// Fixed tilt plus uniform jitter, reproducible from a seed
#[derive(Debug, Clone)]
pub struct SyntheticAccelerometer {
    rng: Pcg32,
    tilt: Vec2,
    jitter: f32,
    available: bool,
    active: bool,
}

impl SyntheticAccelerometer {
    /// A non-finite `jitter` is treated as no jitter
    pub fn new(seed: u64, tilt: Vec2, jitter: f32) -> Self {
        let jitter = if jitter.is_finite() { jitter.abs() } else { 0.0 };
        Self {
            rng: Pcg32::seed_from_u64(seed),
            tilt,
            jitter,
            available: true,
            active: false,
        }
    }

    /// A device that reports itself missing
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new(0, Vec2::ZERO, 0.0)
        }
    }

    /// Change the held tilt (e.g. scripted input)
    pub fn set_tilt(&mut self, tilt: Vec2) {
        self.tilt = tilt;
    }

    pub fn tilt(&self) -> Vec2 {
        self.tilt
    }
}

impl Accelerometer for SyntheticAccelerometer {
    fn is_available(&self) -> bool {
        self.available
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn start_updates(&mut self) {
        self.active = self.available;
    }

    fn stop_updates(&mut self) {
        self.active = false;
    }

    fn latest(&mut self) -> Option<Vec2> {
        if !self.active {
            return None;
        }
        if self.jitter == 0.0 {
            return Some(self.tilt);
        }
        let noise = Vec2::new(
            self.rng.random_range(-self.jitter..=self.jitter),
            self.rng.random_range(-self.jitter..=self.jitter),
        );
        Some(self.tilt + noise)
    }
}
