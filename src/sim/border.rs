//! Arena border handling
//!
//! The candidate position is always clamped into the arena. What happens to
//! the motion on contact depends on the [`BorderPolicy`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Arena;

/// Reaction to the actor reaching an arena border
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BorderPolicy {
    /// Inelastic bounce: the axis that hit is reversed, both axes keep
    /// `damping` of their velocity and acceleration
    Bounce { damping: f32 },
    /// Stop at the wall with no change to velocity
    Clamp,
}

impl Default for BorderPolicy {
    fn default() -> Self {
        BorderPolicy::Bounce {
            damping: crate::consts::BORDER_COLLISION_DAMPING,
        }
    }
}

/// Which borders were touched this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderHit {
    /// Left or right wall (x out of range)
    pub vertical: bool,
    /// Bottom or top wall (y out of range)
    pub horizontal: bool,
}

impl BorderHit {
    #[inline]
    pub fn any(&self) -> bool {
        self.vertical || self.horizontal
    }

    #[inline]
    pub fn corner(&self) -> bool {
        self.vertical && self.horizontal
    }
}

/// Clamp one coordinate into [0, max], reporting whether it was outside
#[inline]
fn clamp_axis(value: &mut f32, max: f32) -> bool {
    if *value < 0.0 {
        *value = 0.0;
        true
    } else if *value > max {
        *value = max;
        true
    } else {
        false
    }
}

/// Reverse and damp one axis, damp the other
#[inline]
fn bounce(v: Vec2, reversed_x: bool, damping: f32) -> Vec2 {
    if reversed_x {
        Vec2::new(-v.x * damping, v.y * damping)
    } else {
        Vec2::new(v.x * damping, -v.y * damping)
    }
}

/// Clamp a candidate position to the arena and apply the border policy
///
/// `candidate` is clamped in place. Under [`BorderPolicy::Bounce`] the
/// velocity and acceleration are reflected per hit axis; a corner hit applies
/// both axis rules, which commute.
pub fn resolve_border(
    candidate: &mut Vec2,
    vel: &mut Vec2,
    accel: &mut Vec2,
    arena: Arena,
    policy: BorderPolicy,
) -> BorderHit {
    let hit = BorderHit {
        vertical: clamp_axis(&mut candidate.x, arena.width),
        horizontal: clamp_axis(&mut candidate.y, arena.height),
    };

    if let BorderPolicy::Bounce { damping } = policy {
        if hit.vertical {
            *accel = bounce(*accel, true, damping);
            *vel = bounce(*vel, true, damping);
        }
        if hit.horizontal {
            *accel = bounce(*accel, false, damping);
            *vel = bounce(*vel, false, damping);
        }
    }

    hit
}
