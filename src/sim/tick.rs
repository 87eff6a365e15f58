//! Per-frame integration
//!
//! Explicit Euler: acceleration into velocity, velocity into position, then
//! the border policy on the candidate position.

use super::border::{BorderHit, resolve_border};
use super::orientation::update_orientation;
use super::state::{ActorState, Arena};
use crate::tuning::Tuning;

/// Advance the actor by one step of `dt` seconds
///
/// `dt` is raised to `tuning.min_dt` but never lowered: a huge step is only
/// contained by the arena clamp. Callers driven by wall-clock time should go
/// through [`FrameClock`], which applies `tuning.max_dt`.
pub fn integrate(actor: &mut ActorState, arena: Arena, tuning: &Tuning, dt: f32) -> BorderHit {
    let dt = dt.max(tuning.min_dt);

    actor.vel += actor.accel * dt;
    actor.vel = actor.vel.clamp(
        glam::Vec2::splat(-tuning.max_speed),
        glam::Vec2::splat(tuning.max_speed),
    );

    let mut candidate = actor.pos + actor.vel * dt;
    let hit = resolve_border(
        &mut candidate,
        &mut actor.vel,
        &mut actor.accel,
        arena,
        tuning.border,
    );
    if hit.any() {
        log::debug!(
            "border hit (vertical: {}, horizontal: {}) at ({:.1}, {:.1})",
            hit.vertical,
            hit.horizontal,
            candidate.x,
            candidate.y
        );
    }

    log::trace!("new position: ({}, {})", candidate.x, candidate.y);
    actor.pos = candidate;

    if let Some(rotation) = &tuning.rotation {
        update_orientation(actor, rotation);
    }

    hit
}

/// Turns monotonic frame timestamps into step lengths
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_time: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step length for a frame at `time` (seconds)
    ///
    /// The first frame has nothing to measure against and gets `min_dt`.
    pub fn advance(&mut self, time: f64, min_dt: f32, max_dt: Option<f32>) -> f32 {
        let elapsed = match self.last_time {
            Some(last) => (time - last) as f32,
            None => min_dt,
        };
        self.last_time = Some(time);

        let dt = elapsed.max(min_dt);
        match max_dt {
            Some(max) => dt.min(max),
            None => dt,
        }
    }

    /// Forget the last timestamp (e.g. after the host resumes)
    pub fn reset(&mut self) {
        self.last_time = None;
    }

    pub fn last_time(&self) -> Option<f64> {
        self.last_time
    }
}
