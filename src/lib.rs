//! DVD Bounce - the classic bouncing screensaver square
//!
//! Core modules:
//! - `sim`: Motion state and the per-frame update/render step
//! - `surface`: Drawing surface abstraction plus software surfaces
//! - `color`: RGB colors for fills
//! - `platform`: Browser/native host helpers (frame timing, canvas surface)

pub mod color;
pub mod platform;
pub mod sim;
pub mod surface;

pub use color::Color;
pub use sim::{MotionState, create_state, update_state};
pub use surface::{DrawCommand, PixelSurface, RecordingSurface, Surface};

/// Animation constants
pub mod consts {
    use crate::color::Color;

    /// Half the side of the bouncing square, in pixels
    pub const RADIUS: f64 = 100.0;
    /// Starting speed on both axes (pixels per second)
    pub const FIXED_SPEED: f64 = 200.0;

    /// Background fill (#181818)
    pub const BACKGROUND: Color = Color::rgb(0x18, 0x18, 0x18);
    /// Square fill
    pub const FOREGROUND: Color = Color::rgb(0xff, 0x00, 0x00);

    /// Delta used for the very first frame, before a previous timestamp exists
    pub const FIRST_FRAME_DT: f64 = 1.0 / 60.0;
    /// Largest delta handed to the updater in one frame (tab switches etc.)
    pub const MAX_FRAME_DT: f64 = 0.1;
}
