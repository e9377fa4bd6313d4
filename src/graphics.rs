//! Graphics support via embedded-graphics
//!
//! [`FrameBuffer`] and [`Display`] implement
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) with
//! [`BinaryColor`]: `On` sets a pixel, `Off` clears it. Coordinates are
//! logical, so the current rotation applies. Solid fills go through the fast
//! horizontal run instead of per-pixel writes.
//!
//! Drawing never talks to the panel; call [`Display::flush`] afterwards.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! use ssd1306::{Config, Display, I2cInterface, I2C_ADDRESS};
//! # use core::convert::Infallible;
//! # use embedded_hal::i2c::{ErrorType, I2c, Operation};
//! # struct MockI2c;
//! # impl ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! let interface = I2cInterface::new(MockI2c, I2C_ADDRESS);
//! let mut display = match Display::new(interface, Config::size_128x32(), [0u8; 512]) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//!
//! let _ = Rectangle::new(Point::new(0, 0), Size::new(128, 32))
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
//!     .draw(&mut display);
//!
//! let _ = Circle::new(Point::new(100, 4), 24)
//!     .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
//!     .draw(&mut display);
//!
//! let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
//! let _ = Text::new("Hello", Point::new(4, 18), style).draw(&mut display);
//!
//! let _ = display.flush();
//! ```

use core::convert::Infallible;

use embedded_graphics_core::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{Dimensions as _, OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
    primitives::Rectangle,
};
use embedded_hal::digital::OutputPin;

use crate::color::Color;
use crate::display::Display;
use crate::framebuffer::FrameBuffer;
use crate::interface::DisplayInterface;

impl<B> DrawTarget for FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.set_pixel(x, y, color.into());
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.size.width == 0 || area.size.height == 0 {
            return Ok(());
        }

        let color = Color::from(color);
        let Point { x, y } = area.top_left;
        let len = area.size.width as i32;
        for row in y..y + area.size.height as i32 {
            self.draw_fast_hline(x, row, len, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.is_on());
        Ok(())
    }
}

impl<B> OriginDimensions for FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        let rotated = self.rotated_dimensions();
        Size::new(u32::from(rotated.width), u32::from(rotated.height))
    }
}

impl<I, B, RST> DrawTarget for Display<I, B, RST>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
    RST: OutputPin,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.framebuffer_mut().draw_iter(pixels)
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.framebuffer_mut().fill_solid(area, color)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        DrawTarget::clear(self.framebuffer_mut(), color)
    }
}

impl<I, B, RST> OriginDimensions for Display<I, B, RST>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
    RST: OutputPin,
{
    fn size(&self) -> Size {
        self.framebuffer().size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Dimensions, Rotation};
    use alloc::vec;
    use alloc::vec::Vec;
    use embedded_graphics::{
        prelude::*,
        primitives::{Line, PrimitiveStyle},
    };

    fn framebuffer(rotation: Rotation) -> FrameBuffer<Vec<u8>> {
        let dims = Dimensions::new(32, 16).unwrap();
        let mut fb = FrameBuffer::new(dims, vec![0u8; dims.buffer_size()]).unwrap();
        fb.set_rotation(rotation);
        fb
    }

    #[derive(Debug)]
    struct NullInterface;

    impl DisplayInterface for NullInterface {
        type Error = Infallible;

        fn begin(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }

        fn send_command(&mut self, _command: u8) -> Result<(), Self::Error> {
            Ok(())
        }

        fn send_data(&mut self, _data: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn test_size_follows_rotation() {
        assert_eq!(framebuffer(Rotation::Rotate0).size(), Size::new(32, 16));
        assert_eq!(framebuffer(Rotation::Rotate270).size(), Size::new(16, 32));
    }

    #[test]
    fn test_fill_solid_matches_pixel_drawing() {
        for rotation in [
            Rotation::Rotate0,
            Rotation::Rotate90,
            Rotation::Rotate180,
            Rotation::Rotate270,
        ] {
            let mut fast = framebuffer(rotation);
            let mut slow = framebuffer(rotation);
            let area = Rectangle::new(Point::new(-3, 2), Size::new(12, 40));

            fast.fill_solid(&area, BinaryColor::On).unwrap();
            slow.draw_iter(area.points().map(|p| Pixel(p, BinaryColor::On))).unwrap();

            assert_eq!(fast.as_bytes(), slow.as_bytes(), "{rotation:?}");
            assert!(fast.as_bytes().iter().any(|b| *b != 0));
        }
    }

    #[test]
    fn test_fill_solid_outside_is_noop() {
        let mut fb = framebuffer(Rotation::Rotate0);
        let area = Rectangle::new(Point::new(40, 0), Size::new(5, 5));
        fb.fill_solid(&area, BinaryColor::On).unwrap();
        assert!(fb.as_bytes().iter().all(|b| *b == 0));
    }

    #[test]
    fn test_off_clears_pixels() {
        let mut fb = framebuffer(Rotation::Rotate0);
        DrawTarget::clear(&mut fb, BinaryColor::On).unwrap();
        assert!(fb.as_bytes().iter().all(|b| *b == 0xFF));

        Line::new(Point::new(0, 0), Point::new(31, 0))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::Off, 1))
            .draw(&mut fb)
            .unwrap();
        assert!(fb.as_bytes()[..32].iter().all(|b| *b == 0xFE));
        assert_eq!(fb.pixel(5, 0), Some(false));
        assert_eq!(fb.pixel(5, 1), Some(true));
    }

    #[test]
    fn test_display_draws_into_framebuffer() {
        let mut display =
            Display::new(NullInterface, Config::size_128x32(), vec![0u8; 512]).unwrap();
        assert_eq!(OriginDimensions::size(&display), Size::new(128, 32));

        Pixel(Point::new(127, 31), BinaryColor::On)
            .draw(&mut display)
            .unwrap();
        assert_eq!(display.framebuffer().as_bytes()[511], 0x80);

        DrawTarget::clear(&mut display, BinaryColor::Off).unwrap();
        assert!(display.framebuffer().as_bytes().iter().all(|b| *b == 0));
    }
}
