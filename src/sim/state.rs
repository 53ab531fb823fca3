//! Motion state for the bouncing square
//!
//! One instance lives for the whole animation. The host owns it and hands it
//! to `update_state` every frame.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Position and velocity of the bouncing object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionState {
    /// Center of the object, in surface pixels
    pub pos: DVec2,
    /// Pixels per second; only its signs change after creation
    pub vel: DVec2,
}

impl MotionState {
    /// Object touching the top-left corner, moving down-right
    pub fn new() -> Self {
        Self {
            pos: DVec2::splat(RADIUS),
            vel: DVec2::splat(FIXED_SPEED),
        }
    }

    /// Top-left corner of the drawn square
    pub fn top_left(&self) -> DVec2 {
        self.pos - DVec2::splat(RADIUS)
    }

    /// Side length of the drawn square
    pub fn size(&self) -> f64 {
        RADIUS * 2.0
    }
}

impl Default for MotionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Initial state for a fresh animation
pub fn create_state() -> MotionState {
    MotionState::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_state() {
        let state = create_state();
        assert_eq!(state.pos, DVec2::new(RADIUS, RADIUS));
        assert_eq!(state.vel, DVec2::new(FIXED_SPEED, FIXED_SPEED));
        assert!(FIXED_SPEED > 0.0);
        assert_eq!(state, MotionState::default());
    }

    #[test]
    fn test_square_geometry() {
        let state = create_state();
        assert_eq!(state.top_left(), DVec2::ZERO);
        assert_eq!(state.size(), 2.0 * RADIUS);
    }
}
