//! Heading smoothing
//!
//! The sprite turns to face its direction of travel. atan2 wraps at ±π, so
//! the running angle is shifted by a full turn whenever the heading crosses
//! that seam; otherwise blending would spin the sprite the long way round.

use std::f32::consts::{PI, TAU};

use super::state::ActorState;
use crate::consts::SPRITE_FACING_OFFSET;
use crate::heading;
use crate::tuning::RotationTuning;

/// Blend the actor's orientation toward its heading
///
/// Returns false (leaving the orientation frozen) when the actor is too slow
/// for its heading to be meaningful.
pub fn update_orientation(actor: &mut ActorState, rotation: &RotationTuning) -> bool {
    if actor.speed() <= rotation.threshold {
        return false;
    }

    let target = heading(actor.vel);

    if target - actor.previous_angle > PI {
        actor.angle += TAU;
    } else if actor.previous_angle - target > PI {
        actor.angle -= TAU;
    }

    actor.previous_angle = target;
    actor.angle = target * rotation.blend + actor.angle * (1.0 - rotation.blend);
    true
}

/// Rotation to hand the renderer for a given orientation
#[inline]
pub fn sprite_rotation(angle: f32) -> f32 {
    angle - SPRITE_FACING_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEGREES_TO_RADIANS, normalize_angle};
    use glam::Vec2;

    fn rotation() -> RotationTuning {
        RotationTuning {
            blend: 0.2,
            threshold: 40.0,
        }
    }

    fn moving_at(degrees: f32, speed: f32) -> Vec2 {
        let a = degrees * DEGREES_TO_RADIANS;
        Vec2::new(a.cos(), a.sin()) * speed
    }

    #[test]
    fn test_slow_actor_keeps_orientation() {
        let mut actor = ActorState {
            vel: Vec2::new(30.0, 0.0),
            angle: 1.0,
            previous_angle: 0.5,
            ..Default::default()
        };

        assert!(!update_orientation(&mut actor, &rotation()));
        assert_eq!(actor.angle, 1.0);
        assert_eq!(actor.previous_angle, 0.5);
    }

    #[test]
    fn test_blends_toward_heading() {
        let mut actor = ActorState {
            vel: Vec2::new(0.0, 100.0),
            ..Default::default()
        };

        assert!(update_orientation(&mut actor, &rotation()));
        assert!((actor.previous_angle - PI / 2.0).abs() < 1e-5);
        assert!((actor.angle - PI / 2.0 * 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_wrap_across_pi_does_not_spin() {
        let mut actor = ActorState::default();
        let rot = rotation();

        // Settle facing 179°
        actor.vel = moving_at(179.0, 100.0);
        for _ in 0..200 {
            update_orientation(&mut actor, &rot);
        }
        let settled = actor.angle;
        assert!((settled - 179.0 * DEGREES_TO_RADIANS).abs() < 1e-3);

        // Cross the seam to -179°: true change is 2°. The running angle is
        // shifted by a whole turn, so compare what the renderer sees.
        actor.vel = moving_at(-179.0, 100.0);
        update_orientation(&mut actor, &rot);
        let delta = normalize_angle(actor.angle - settled);
        assert!(delta > 0.0);
        assert!(delta <= 2.0 * DEGREES_TO_RADIANS * rot.blend + 1e-3);
    }

    #[test]
    fn test_wrap_back_the_other_way() {
        let mut actor = ActorState::default();
        let rot = rotation();

        actor.vel = moving_at(-179.0, 100.0);
        for _ in 0..200 {
            update_orientation(&mut actor, &rot);
        }
        let settled = actor.angle;

        actor.vel = moving_at(179.0, 100.0);
        update_orientation(&mut actor, &rot);
        let delta = normalize_angle(actor.angle - settled);
        assert!(delta < 0.0);
        assert!(delta.abs() <= 2.0 * DEGREES_TO_RADIANS * rot.blend + 1e-3);
    }

    #[test]
    fn test_sprite_rotation_offset() {
        assert!((sprite_rotation(PI / 2.0)).abs() < 1e-6);
        assert!((sprite_rotation(0.0) + PI / 2.0).abs() < 1e-6);
    }
}
