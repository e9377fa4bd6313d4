//! SSD1306 OLED Display Driver
//!
//! A driver for SSD1306 monochrome OLED controllers driving panels up to
//! 128x64 pixels, over hardware SPI, bit-banged SPI or I2C.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - 128x64, 128x32 and 96x16 presets, or custom dimensions
//! - Rotation in quarter turns
//! - Fast horizontal and vertical line drawing
//! - Hardware scrolling, dimming and inversion
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use ssd1306::{Color, Config, Display, SpiInterface, VccMode};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = SpiInterface::new(spi, dc);
//! let mut display = match Display::new(interface, Config::size_128x64(), [0u8; 1024]) {
//!     Ok(display) => display.with_reset(rst),
//!     Err(_) => return,
//! };
//!
//! if display.begin(VccMode::SwitchCap, true, &mut delay).is_err() {
//!     return;
//! }
//!
//! display.clear();
//! display.draw_fast_hline(0, 0, 128, Color::White);
//! display.draw_fast_vline(0, 0, 64, Color::White);
//! let _ = display.flush();
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Pixel write modes
pub mod color;
/// SSD1306 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Packed 1-bit-per-pixel frame buffer
pub mod framebuffer;
/// Hardware interface abstraction
pub mod interface;
/// Coordinate rotation utilities
pub mod rotation;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::Color;
pub use config::{Builder, Config, Dimensions, MAX_COLUMNS, MAX_ROWS, Rotation, VccMode};
pub use display::{Display, State};
pub use error::{BuilderError, Error};
pub use framebuffer::FrameBuffer;
pub use interface::{
    BitBangInterface, BusClock, DisplayInterface, FixedClock, I2C_ADDRESS, I2C_ADDRESS_ALTERNATE,
    I2C_CONTROL_COMMAND, I2C_CONTROL_DATA, I2C_MAX_DATA_CHUNK, I2cInterface, InterfaceError, NoPin,
    SpiInterface,
};
