// src/color.rs

//! Color definitions and attribute byte management

/// The 16-color text-mode palette (4-bit color codes)
#[allow(dead_code)]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    Pink = 13,
    Yellow = 14,
    White = 15,
}

/// Attribute byte combining foreground and background colors.
///
/// The foreground occupies the low nibble, the background the high one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCode(u8);

impl ColorCode {
    /// Default color scheme (white on black)
    pub const DEFAULT: Self = Self::new(Color::White, Color::Black);

    /// Create a new color code from foreground and background colors
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self((bg as u8) << 4 | (fg as u8))
    }

    /// Get the raw attribute byte
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Info color scheme (light cyan on black)
    pub const fn info() -> Self {
        Self::new(Color::LightCyan, Color::Black)
    }

    /// Warning color scheme (yellow on black)
    pub const fn warning() -> Self {
        Self::new(Color::Yellow, Color::Black)
    }

    /// Error color scheme (light red on black)
    pub const fn error() -> Self {
        Self::new(Color::LightRed, Color::Black)
    }

    /// Panic color scheme (white on red)
    pub const fn panic() -> Self {
        Self::new(Color::White, Color::Red)
    }
}

impl Default for ColorCode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_code_encoding() {
        let color = ColorCode::new(Color::White, Color::Red);
        assert_eq!(color.as_u8(), 0x4F);
    }

    #[test]
    fn test_default_is_white_on_black() {
        assert_eq!(ColorCode::DEFAULT.as_u8(), 0x0F);
        assert_eq!(ColorCode::default(), ColorCode::DEFAULT);
    }

    #[test]
    fn test_foreground_in_low_nibble() {
        let color = ColorCode::new(Color::Yellow, Color::Blue);
        assert_eq!(color.as_u8() & 0x0F, Color::Yellow as u8);
        assert_eq!(color.as_u8() >> 4, Color::Blue as u8);
    }
}
