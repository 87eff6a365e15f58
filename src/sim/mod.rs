//! Per-frame motion simulation
//!
//! Everything that moves the actor lives here. This module must stay pure:
//! - No rendering or platform dependencies
//! - No I/O, no background work
//! - State only changes inside a frame step

pub mod border;
pub mod filter;
pub mod orientation;
pub mod simulation;
pub mod state;
pub mod tick;

pub use border::{BorderHit, BorderPolicy, resolve_border};
pub use filter::{FilterState, acceleration_from_filtered, filter};
pub use orientation::{sprite_rotation, update_orientation};
pub use simulation::Simulation;
pub use state::{ActorState, Arena};
pub use tick::{FrameClock, integrate};
