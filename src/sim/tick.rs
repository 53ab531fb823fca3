//! Per-frame update
//!
//! Advances the motion state by the host-supplied delta, then repaints.

use super::state::MotionState;
use crate::consts::*;
use crate::surface::Surface;

/// What an axis did during one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Coordinate advanced, velocity kept
    Moving,
    /// Coordinate held, velocity negated
    Reflecting,
}

/// Step one axis of length `axis_len`.
///
/// When the candidate position would put an edge before 0 or on/after
/// `axis_len`, the coordinate is left where it is and the velocity flips.
/// No clamping to the wall.
pub fn step_axis(pos: &mut f64, vel: &mut f64, dt: f64, axis_len: f64) -> Axis {
    let candidate = *pos + *vel * dt;
    if candidate - RADIUS < 0.0 || candidate + RADIUS >= axis_len {
        *vel = -*vel;
        Axis::Reflecting
    } else {
        *pos = candidate;
        Axis::Moving
    }
}

/// Advance the animation by `dt` seconds and repaint `surface`.
///
/// Axes are resolved independently, X then Y, against the surface size read
/// at call time. Drawing is always issued, even for `dt == 0`.
pub fn update_state<S: Surface + ?Sized>(surface: &mut S, state: &mut MotionState, dt: f64) {
    let (width, height) = (surface.width(), surface.height());

    if step_axis(&mut state.pos.x, &mut state.vel.x, dt, width) == Axis::Reflecting {
        log::trace!("x reflect at {:.1} (vel now {:.1})", state.pos.x, state.vel.x);
    }
    if step_axis(&mut state.pos.y, &mut state.vel.y, dt, height) == Axis::Reflecting {
        log::trace!("y reflect at {:.1} (vel now {:.1})", state.pos.y, state.vel.y);
    }

    surface.fill_all(BACKGROUND);

    // Drawn as a square, not a circle
    let corner = state.top_left();
    let size = state.size();
    surface.fill_rect(corner.x, corner.y, size, size, FOREGROUND);
}
