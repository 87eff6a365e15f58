//! Session object owning all motion state
//!
//! The host constructs one [`Simulation`] per session, forwards accelerometer
//! samples and frame timestamps, then reads back the sprite transform.

use glam::Vec2;

use super::border::BorderHit;
use super::filter::{FilterState, acceleration_from_filtered};
use super::orientation::sprite_rotation;
use super::state::{ActorState, Arena};
use super::tick::{FrameClock, integrate};
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct Simulation {
    actor: ActorState,
    filter: FilterState,
    arena: Arena,
    tuning: Tuning,
    clock: FrameClock,
    /// Most recent raw accelerometer reading, reused until replaced
    latest_sample: Option<Vec2>,
    last_hit: BorderHit,
    frames: u64,
}

impl Simulation {
    /// New session with the actor at rest at the origin
    pub fn new(arena: Arena, tuning: Tuning) -> Self {
        Self {
            actor: ActorState::default(),
            filter: FilterState::default(),
            arena,
            tuning,
            clock: FrameClock::new(),
            latest_sample: None,
            last_hit: BorderHit::default(),
            frames: 0,
        }
    }

    /// Replace the starting actor state
    pub fn with_actor(mut self, actor: ActorState) -> Self {
        self.actor = actor;
        self
    }

    /// Record a raw accelerometer reading for the next frame
    pub fn on_sensor_sample(&mut self, x: f32, y: f32) {
        self.latest_sample = Some(Vec2::new(x, y));
    }

    /// Drop the held reading (monitoring stopped); acceleration stays frozen
    pub fn clear_sensor_sample(&mut self) {
        self.latest_sample = None;
    }

    /// Advance one frame using the host's monotonic timestamp (seconds)
    ///
    /// Re-filters the reading held by [`Simulation::on_sensor_sample`].
    pub fn on_frame(&mut self, timestamp: f64) -> ActorState {
        self.advance(timestamp, self.latest_sample)
    }

    /// Advance one frame at `timestamp` with this tick's reading only
    ///
    /// `None` leaves the filter and acceleration untouched, whatever was held.
    pub fn advance(&mut self, timestamp: f64, raw: Option<Vec2>) -> ActorState {
        let dt = self
            .clock
            .advance(timestamp, self.tuning.min_dt, self.tuning.max_dt);
        self.step(dt, raw)
    }

    /// Advance one frame of `dt` seconds with an optional raw reading
    pub fn step(&mut self, dt: f32, raw: Option<Vec2>) -> ActorState {
        if let Some(raw) = raw {
            let filtered = self.filter.push(raw, self.tuning.filter_factor);
            self.actor.accel = acceleration_from_filtered(filtered, self.tuning.max_accel);
        }

        self.last_hit = integrate(&mut self.actor, self.arena, &self.tuning, dt);
        self.frames += 1;
        self.actor
    }

    /// Resize the arena; the actor is pulled inside on the next frame
    pub fn set_arena(&mut self, arena: Arena) {
        if arena != self.arena {
            log::debug!("arena resized to {}x{}", arena.width, arena.height);
            self.arena = arena;
        }
    }

    /// Forget timing history (after the host pauses)
    pub fn reset_clock(&mut self) {
        self.clock.reset();
    }

    pub fn actor(&self) -> &ActorState {
        &self.actor
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn position(&self) -> Vec2 {
        self.actor.pos
    }

    /// Rotation to apply to the sprite, if heading smoothing is enabled
    pub fn sprite_rotation(&self) -> Option<f32> {
        self.tuning
            .rotation
            .as_ref()
            .map(|_| sprite_rotation(self.actor.angle))
    }

    /// Borders touched during the last frame
    pub fn last_hit(&self) -> BorderHit {
        self.last_hit
    }

    /// Frames advanced so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
