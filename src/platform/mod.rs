//! Platform abstraction layer
//!
//! The host engine owns the real device and the rendered sprite. This module
//! describes what the simulation needs from it:
//! - Accelerometer sampling
//! - A sprite transform to write back
//! - A frame driver tying both to a [`Simulation`]

pub mod synthetic;

pub use synthetic::SyntheticAccelerometer;

use glam::Vec2;

use crate::sim::{ActorState, Arena, Simulation};

/// A 2-axis accelerometer owned by the host
pub trait Accelerometer {
    /// Whether the hardware exists at all
    fn is_available(&self) -> bool;
    /// Whether updates are currently being delivered
    fn is_active(&self) -> bool;
    fn start_updates(&mut self);
    fn stop_updates(&mut self);
    /// Latest raw reading, or `None` if nothing is available this frame
    fn latest(&mut self) -> Option<Vec2>;
}

/// The rendered sprite's transform
pub trait SpriteHandle {
    fn set_position(&mut self, pos: Vec2);
    fn set_rotation(&mut self, radians: f32);
}

/// Plain sprite transform for hosts that copy values out each frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpriteTransform {
    pub position: Vec2,
    pub rotation: f32,
}

impl SpriteHandle for SpriteTransform {
    fn set_position(&mut self, pos: Vec2) {
        self.position = pos;
    }

    fn set_rotation(&mut self, radians: f32) {
        self.rotation = radians;
    }
}

/// Runs a [`Simulation`] against a host accelerometer and sprite
///
/// Monitoring stops when the driver is dropped.
pub struct FrameDriver<A: Accelerometer, S: SpriteHandle> {
    sim: Simulation,
    accelerometer: A,
    sprite: S,
}

impl<A: Accelerometer, S: SpriteHandle> FrameDriver<A, S> {
    pub fn new(sim: Simulation, accelerometer: A, sprite: S) -> Self {
        Self {
            sim,
            accelerometer,
            sprite,
        }
    }

    /// Ask the device for updates, if it has any to give
    pub fn start_monitoring(&mut self) {
        if self.accelerometer.is_available() {
            self.accelerometer.start_updates();
            log::info!("accelerometer updates on...");
        } else {
            log::warn!("accelerometer unavailable, actor will not be driven by tilt");
        }
    }

    pub fn stop_monitoring(&mut self) {
        if self.accelerometer.is_available() && self.accelerometer.is_active() {
            self.accelerometer.stop_updates();
            self.sim.clear_sensor_sample();
            log::info!("accelerometer updates off...");
        }
    }

    /// Advance one frame and write the result to the sprite
    pub fn frame(&mut self, timestamp: f64, arena: Arena) -> ActorState {
        self.sim.set_arena(arena);

        let sample = self.accelerometer.latest();
        let actor = self.sim.advance(timestamp, sample);
        self.sprite.set_position(actor.pos);
        if let Some(rotation) = self.sim.sprite_rotation() {
            self.sprite.set_rotation(rotation);
        }
        actor
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn sprite(&self) -> &S {
        &self.sprite
    }

    pub fn accelerometer(&self) -> &A {
        &self.accelerometer
    }
}

impl<A: Accelerometer, S: SpriteHandle> Drop for FrameDriver<A, S> {
    fn drop(&mut self) {
        self.stop_monitoring();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::consts::SPRITE_FACING_OFFSET;

    /// Device that replays a fixed reading once started
    struct FixedTilt {
        available: bool,
        active: bool,
        reading: Vec2,
    }

    impl Accelerometer for FixedTilt {
        fn is_available(&self) -> bool {
            self.available
        }

        fn is_active(&self) -> bool {
            self.active
        }

        fn start_updates(&mut self) {
            self.active = true;
        }

        fn stop_updates(&mut self) {
            self.active = false;
        }

        fn latest(&mut self) -> Option<Vec2> {
            self.active.then_some(self.reading)
        }
    }

    /// Active device that only sometimes has a fresh reading
    struct Intermittent {
        readings: Vec<Option<Vec2>>,
        active: bool,
    }

    impl Accelerometer for Intermittent {
        fn is_available(&self) -> bool {
            true
        }

        fn is_active(&self) -> bool {
            self.active
        }

        fn start_updates(&mut self) {
            self.active = true;
        }

        fn stop_updates(&mut self) {
            self.active = false;
        }

        fn latest(&mut self) -> Option<Vec2> {
            if self.readings.is_empty() {
                None
            } else {
                self.readings.remove(0)
            }
        }
    }

    fn driver(available: bool) -> FrameDriver<FixedTilt, SpriteTransform> {
        let arena = Arena::new(320.0, 480.0);
        let sim = Simulation::new(arena, Tuning::bounce())
            .with_actor(ActorState::at(Vec2::new(160.0, 240.0)));
        let device = FixedTilt {
            available,
            active: false,
            reading: Vec2::new(0.6, 0.0),
        };
        FrameDriver::new(sim, device, SpriteTransform::default())
    }

    #[test]
    fn test_frames_write_sprite_transform() {
        let mut driver = driver(true);
        driver.start_monitoring();
        assert!(driver.accelerometer().is_active());

        let arena = Arena::new(320.0, 480.0);
        let mut actor = ActorState::default();
        for i in 0..90 {
            actor = driver.frame(i as f64 / 30.0, arena);
        }

        // Device X tilt drives the actor up the arena
        assert!(actor.pos.y > 240.0);
        assert_eq!(driver.sprite().position, actor.pos);
        let expected = actor.angle - SPRITE_FACING_OFFSET;
        assert!((driver.sprite().rotation - expected).abs() < 1e-6);
    }

    #[test]
    fn test_tick_without_reading_changes_nothing() {
        let mut driver = FrameDriver::new(
            Simulation::new(Arena::new(320.0, 480.0), Tuning::clamp())
                .with_actor(ActorState::at(Vec2::new(160.0, 240.0))),
            Intermittent {
                readings: vec![Some(Vec2::new(1.0, 0.0)), None, None],
                active: false,
            },
            SpriteTransform::default(),
        );
        driver.start_monitoring();

        let arena = Arena::new(320.0, 480.0);
        driver.frame(0.0, arena);
        let filtered = driver.simulation().filter().filtered;
        let accel = driver.simulation().actor().accel;
        assert!((filtered.x - 0.75).abs() < 1e-6);

        for i in 1..3 {
            driver.frame(i as f64 / 30.0, arena);
            assert!(driver.accelerometer().is_active());
            assert_eq!(driver.simulation().filter().filtered, filtered);
            assert_eq!(driver.simulation().actor().accel, accel);
        }
    }

    #[test]
    fn test_unavailable_device_leaves_actor_at_rest() {
        let mut driver = driver(false);
        driver.start_monitoring();
        assert!(!driver.accelerometer().is_active());

        let arena = Arena::new(320.0, 480.0);
        for i in 0..60 {
            driver.frame(i as f64 / 60.0, arena);
        }
        assert_eq!(driver.simulation().position(), Vec2::new(160.0, 240.0));
    }

    #[test]
    fn test_stop_freezes_acceleration() {
        let mut driver = driver(true);
        driver.start_monitoring();
        let arena = Arena::new(320.0, 480.0);
        driver.frame(0.0, arena);
        let accel = driver.simulation().actor().accel;

        driver.stop_monitoring();
        assert!(!driver.accelerometer().is_active());
        driver.frame(1.0 / 30.0, arena);
        assert_eq!(driver.simulation().actor().accel, accel);
    }

    #[test]
    fn test_resize_is_applied_each_frame() {
        let mut driver = driver(false);
        driver.frame(0.0, Arena::new(100.0, 100.0));
        assert_eq!(driver.simulation().arena(), Arena::new(100.0, 100.0));
        assert_eq!(driver.sprite().position, Vec2::new(100.0, 100.0));
    }
}
