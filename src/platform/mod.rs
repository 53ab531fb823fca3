//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame timing (timestamps -> deltas)
//! - Drawing surface (2D canvas on web)

#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::consts::{FIRST_FRAME_DT, MAX_FRAME_DT};

/// Number of frames in the FPS window
const FPS_WINDOW: usize = 60;

/// Turns per-frame host timestamps (milliseconds) into update deltas (seconds)
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_time: Option<f64>,
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    frames_seen: usize,
    fps: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_time: None,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            frames_seen: 0,
            fps: 0,
        }
    }

    /// Record a frame timestamp and return the delta to simulate
    pub fn tick(&mut self, time_ms: f64) -> f64 {
        let dt = match self.last_time {
            Some(last) => ((time_ms - last) / 1000.0).clamp(0.0, MAX_FRAME_DT),
            None => FIRST_FRAME_DT,
        };
        if self.last_time.is_none_or(|last| time_ms >= last) {
            self.last_time = Some(time_ms);
        }
        self.track_fps(time_ms);
        dt
    }

    /// Frames per second over the last `FPS_WINDOW` frames (0 until the window fills)
    pub fn fps(&self) -> u32 {
        self.fps
    }

    fn track_fps(&mut self, time_ms: f64) {
        // Oldest entry is the one about to be overwritten
        let oldest = self.frame_times[self.frame_index];
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        self.frames_seen += 1;

        if self.frames_seen > FPS_WINDOW {
            let elapsed = time_ms - oldest;
            if elapsed > 0.0 {
                self.fps = (FPS_WINDOW as f64 * 1000.0 / elapsed).round() as u32;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_uses_default_dt() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(12345.0), FIRST_FRAME_DT);
    }

    #[test]
    fn test_delta_in_seconds() {
        let mut clock = FrameClock::new();
        clock.tick(1000.0);
        assert!((clock.tick(1050.0) - 0.05).abs() < 1e-9);
        assert!((clock.tick(1066.0) - 0.016).abs() < 1e-9);
    }

    #[test]
    fn test_delta_clamped() {
        let mut clock = FrameClock::new();
        clock.tick(0.0);
        // Tab was hidden for 5 seconds
        assert_eq!(clock.tick(5000.0), MAX_FRAME_DT);
        // Time went backwards
        assert_eq!(clock.tick(4000.0), 0.0);
        // Still measured from the latest good timestamp
        assert!((clock.tick(5020.0) - 0.02).abs() < 1e-9);
    }

    #[test]
    fn test_fps_estimate() {
        let mut clock = FrameClock::new();
        for i in 0..=FPS_WINDOW {
            clock.tick(i as f64 * 20.0);
        }
        assert_eq!(clock.fps(), 50);
    }

    #[test]
    fn test_fps_zero_until_window_full() {
        let mut clock = FrameClock::new();
        for i in 0..10 {
            clock.tick(i as f64 * 16.0);
        }
        assert_eq!(clock.fps(), 0);
    }
}
