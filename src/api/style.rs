use serde::{Deserialize, Serialize};

/// RGBA color for grid lines and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue, alpha: 255 }
    }

    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self { red, green, blue, alpha }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// Line style of one grid precision: color and stroke width.
///
/// A width of zero marks the style as partial; resolution falls back to
/// the grid's base width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridStyle {
    pub color: Color,
    pub width: f64,
}

impl GridStyle {
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }

    /// Color-only style; the width falls back when resolved.
    pub fn color_only(color: Color) -> Self {
        Self { color, width: 0.0 }
    }
}

impl Default for GridStyle {
    fn default() -> Self {
        Self { color: Color::BLACK, width: 1.0 }
    }
}
