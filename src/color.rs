//! Fill colors

use serde::{Deserialize, Serialize};

/// Opaque RGB color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS color string usable as a canvas `fillStyle`
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BACKGROUND, FOREGROUND};

    #[test]
    fn test_css_hex() {
        assert_eq!(BACKGROUND.to_css(), "#181818");
        assert_eq!(FOREGROUND.to_css(), "#ff0000");
        assert_eq!(Color::rgb(1, 0xab, 0x0c).to_css(), "#01ab0c");
    }
}
