//! Pixel write modes for monochrome displays
//!
//! The SSD1306 stores one bit per pixel. A set bit lights the pixel (unless
//! the display is inverted with [`Display::invert`](crate::Display::invert)).
//! [`Color`] describes what a drawing operation does to that bit:
//!
//! | Color   | Effect on bit | Whole-byte write |
//! |---------|---------------|------------------|
//! | Black   | clear         | `0x00`           |
//! | White   | set           | `0xFF`           |
//! | Inverse | flip          | `!byte`          |
//!
//! Inverse is a write operation only; reading a pixel back yields on or off.
//!
//! ## Example
//!
//! ```
//! use ssd1306::Color;
//!
//! let mut byte = 0b0000_0101u8;
//! Color::White.apply(&mut byte, 0b0000_0010);
//! assert_eq!(byte, 0b0000_0111);
//! Color::Inverse.apply(&mut byte, 0b0000_0011);
//! assert_eq!(byte, 0b0000_0100);
//! ```

/// Pixel write mode
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Color {
    /// Clear the pixel (off)
    Black,
    /// Set the pixel (on)
    White,
    /// Flip the pixel
    Inverse,
}

impl Color {
    /// Apply this color to the bits of `byte` selected by `mask`
    #[inline]
    pub fn apply(self, byte: &mut u8, mask: u8) {
        match self {
            Self::White => *byte |= mask,
            Self::Black => *byte &= !mask,
            Self::Inverse => *byte ^= mask,
        }
    }

    /// Apply this color to all eight bits of `byte`
    ///
    /// Black and White overwrite the byte; Inverse depends on its prior content.
    #[inline]
    pub fn fill(self, byte: &mut u8) {
        *byte = match self {
            Self::White => 0xFF,
            Self::Black => 0x00,
            Self::Inverse => !*byte,
        };
    }
}

impl From<bool> for Color {
    fn from(on: bool) -> Self {
        if on { Self::White } else { Self::Black }
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        Self::from(color.is_on())
    }
}
