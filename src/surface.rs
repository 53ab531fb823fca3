//! Drawing surface abstraction
//!
//! The updater only needs to know the surface size and how to fill it, so
//! anything with those capabilities can host the animation:
//! - `RecordingSurface`: remembers draw calls (tests, headless inspection)
//! - `PixelSurface`: software framebuffer (native host)
//! - `platform::web::CanvasSurface`: browser 2D canvas (wasm32)

use crate::color::Color;

/// Minimal capability set the animation draws through
pub trait Surface {
    /// Current width in pixels
    fn width(&self) -> f64;
    /// Current height in pixels
    fn height(&self) -> f64;
    /// Fill the whole surface with one color
    fn fill_all(&mut self, color: Color);
    /// Fill an axis-aligned rectangle given its top-left corner and size
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color);
}

/// A single recorded draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    FillAll(Color),
    FillRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: Color,
    },
}

/// Fixed-size surface that records draw calls in order
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub width: f64,
    pub height: f64,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn fill_all(&mut self, color: Color) {
        self.commands.push(DrawCommand::FillAll(color));
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h, color });
    }
}

/// Software framebuffer, row-major, (0, 0) is the top-left pixel
#[derive(Debug, Clone)]
pub struct PixelSurface {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl PixelSurface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::default(); width * height],
        }
    }

    /// Color at a pixel, `None` when out of bounds
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Number of pixels currently holding `color`
    pub fn count(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    /// Round a span to whole pixels and clip it to `0..limit`
    fn clip_span(start: f64, len: f64, limit: usize) -> Option<(usize, usize)> {
        if len.is_nan() || len <= 0.0 {
            return None;
        }
        let lo = start.round().max(0.0);
        let hi = (start + len).round().min(limit as f64);
        if hi <= lo {
            return None;
        }
        Some((lo as usize, hi as usize))
    }
}

impl Surface for PixelSurface {
    fn width(&self) -> f64 {
        self.width as f64
    }

    fn height(&self) -> f64 {
        self.height as f64
    }

    fn fill_all(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        let Some((x0, x1)) = Self::clip_span(x, w, self.width) else {
            return;
        };
        let Some((y0, y1)) = Self::clip_span(y, h, self.height) else {
            return;
        };
        for row in self.pixels.chunks_exact_mut(self.width).take(y1).skip(y0) {
            row[x0..x1].fill(color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);

    #[test]
    fn test_recording_order() {
        let mut surface = RecordingSurface::new(10.0, 20.0);
        surface.fill_all(Color::BLACK);
        surface.fill_rect(1.0, 2.0, 3.0, 4.0, RED);
        assert_eq!(surface.width(), 10.0);
        assert_eq!(surface.height(), 20.0);
        assert_eq!(
            surface.commands,
            vec![
                DrawCommand::FillAll(Color::BLACK),
                DrawCommand::FillRect {
                    x: 1.0,
                    y: 2.0,
                    w: 3.0,
                    h: 4.0,
                    color: RED
                },
            ]
        );
    }

    #[test]
    fn test_pixel_fill_rect() {
        let mut surface = PixelSurface::new(8, 8);
        surface.fill_rect(2.0, 3.0, 2.0, 2.0, RED);
        assert_eq!(surface.count(RED), 4);
        assert_eq!(surface.pixel(2, 3), Some(RED));
        assert_eq!(surface.pixel(3, 4), Some(RED));
        assert_eq!(surface.pixel(4, 4), Some(Color::BLACK));
        assert_eq!(surface.pixel(2, 5), Some(Color::BLACK));
        assert_eq!(surface.pixel(8, 0), None);
    }

    #[test]
    fn test_pixel_fill_rect_rounds_subpixel_edges() {
        let mut surface = PixelSurface::new(8, 8);
        // 0.6..2.4 rounds to 1..2
        surface.fill_rect(0.6, 0.0, 1.8, 1.0, RED);
        assert_eq!(surface.count(RED), 1);
        assert_eq!(surface.pixel(1, 0), Some(RED));
    }

    #[test]
    fn test_pixel_fill_rect_clips() {
        let mut surface = PixelSurface::new(4, 4);
        surface.fill_rect(-2.0, -2.0, 4.0, 10.0, RED);
        // columns 0..2, rows 0..4
        assert_eq!(surface.count(RED), 8);

        let mut surface = PixelSurface::new(4, 4);
        surface.fill_rect(10.0, 0.0, 2.0, 2.0, RED);
        surface.fill_rect(0.0, 0.0, -2.0, 2.0, RED);
        surface.fill_rect(0.0, 0.0, 2.0, 0.0, RED);
        assert_eq!(surface.count(RED), 0);
    }

    #[test]
    fn test_pixel_fill_all() {
        let mut surface = PixelSurface::new(3, 2);
        surface.fill_rect(0.0, 0.0, 1.0, 1.0, RED);
        surface.fill_all(Color::rgb(1, 2, 3));
        assert_eq!(surface.count(Color::rgb(1, 2, 3)), 6);
        assert_eq!(surface.count(RED), 0);
    }
}
