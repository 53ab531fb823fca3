//! Simulation module
//!
//! The whole animation is one step per frame:
//! - advance each axis by `vel * dt`
//! - reflect an axis instead of moving when its edge would leave the surface
//! - repaint background and square

pub mod state;
pub mod tick;

pub use state::{MotionState, create_state};
pub use tick::{Axis, step_axis, update_state};
