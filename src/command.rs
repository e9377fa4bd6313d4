//! SSD1306 command definitions
//!
//! This module defines the command bytes understood by the SSD1306 OLED
//! controller. Parameters of multi-byte commands are sent as further command
//! bytes, not as display data: over SPI they go out with DC low, over I2C
//! each one is framed with a [`crate::interface::I2C_CONTROL_COMMAND`] byte.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1306::{command, DisplayInterface, I2cInterface};
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
//! let mut interface = I2cInterface::new(MockI2c, ssd1306::I2C_ADDRESS);
//!
//! // Set contrast to 0x7F
//! let _ = interface.send_command(command::SET_CONTRAST);
//! let _ = interface.send_command(0x7F);
//! ```

// Fundamental commands

/// Set contrast control (0x81)
///
/// Followed by one byte, 0x00..=0xFF.
pub const SET_CONTRAST: u8 = 0x81;

/// Resume to RAM content display (0xA4)
///
/// Output follows the display RAM.
pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;

/// Entire display on (0xA5)
///
/// Output ignores the display RAM and lights every pixel.
pub const DISPLAY_ALL_ON: u8 = 0xA5;

/// Normal display (0xA6)
///
/// A set RAM bit lights the pixel.
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Inverse display (0xA7)
///
/// A cleared RAM bit lights the pixel.
pub const INVERT_DISPLAY: u8 = 0xA7;

/// Display off, sleep mode (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on, normal mode (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

// Scrolling commands

/// Continuous right horizontal scroll setup (0x26)
///
/// Followed by: dummy 0x00, start page, frame interval, end page, 0x00, 0xFF.
pub const RIGHT_HORIZONTAL_SCROLL: u8 = 0x26;

/// Continuous left horizontal scroll setup (0x27)
///
/// Same parameters as [`RIGHT_HORIZONTAL_SCROLL`].
pub const LEFT_HORIZONTAL_SCROLL: u8 = 0x27;

/// Continuous vertical and right horizontal scroll setup (0x29)
///
/// Followed by: dummy 0x00, start page, frame interval, end page, vertical offset.
pub const VERTICAL_AND_RIGHT_HORIZONTAL_SCROLL: u8 = 0x29;

/// Continuous vertical and left horizontal scroll setup (0x2A)
pub const VERTICAL_AND_LEFT_HORIZONTAL_SCROLL: u8 = 0x2A;

/// Deactivate scroll (0x2E)
///
/// RAM must be rewritten after deactivating a running scroll.
pub const DEACTIVATE_SCROLL: u8 = 0x2E;

/// Activate scroll (0x2F)
///
/// Starts the scroll configured by the last scroll setup command.
pub const ACTIVATE_SCROLL: u8 = 0x2F;

/// Set vertical scroll area (0xA3)
///
/// Followed by: number of fixed top rows, number of scrolling rows.
pub const SET_VERTICAL_SCROLL_AREA: u8 = 0xA3;

// Addressing commands

/// Set lower column start address for page addressing mode (0x00..=0x0F)
pub const SET_LOW_COLUMN: u8 = 0x00;

/// Set higher column start address for page addressing mode (0x10..=0x1F)
pub const SET_HIGH_COLUMN: u8 = 0x10;

/// Set memory addressing mode (0x20)
///
/// Followed by one byte: 0x00 horizontal, 0x01 vertical, 0x02 page.
pub const MEMORY_MODE: u8 = 0x20;

/// Horizontal addressing mode, used with [`MEMORY_MODE`]
pub const MEMORY_MODE_HORIZONTAL: u8 = 0x00;

/// Set column address window (0x21)
///
/// Followed by: start column, end column.
pub const COLUMN_ADDR: u8 = 0x21;

/// Set page address window (0x22)
///
/// Followed by: start page, end page. A page is one 8-row band.
pub const PAGE_ADDR: u8 = 0x22;

// Hardware configuration commands

/// Set display start line (0x40..=0x7F)
///
/// The start line is OR-ed into the low 6 bits.
pub const SET_START_LINE: u8 = 0x40;

/// Set segment re-map (0xA0 / 0xA1)
///
/// OR with 0x01 to map column 127 to SEG0.
pub const SEG_REMAP: u8 = 0xA0;

/// Set multiplex ratio (0xA8)
///
/// Followed by one byte: number of rows minus one.
pub const SET_MULTIPLEX: u8 = 0xA8;

/// COM output scan direction, normal (0xC0)
pub const COM_SCAN_INC: u8 = 0xC0;

/// COM output scan direction, remapped (0xC8)
pub const COM_SCAN_DEC: u8 = 0xC8;

/// Set display offset (0xD3)
///
/// Followed by one byte: vertical shift by COM.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Set COM pins hardware configuration (0xDA)
///
/// Followed by one byte; panel specific, see [`crate::Config::com_pins`].
pub const SET_COM_PINS: u8 = 0xDA;

// Timing and driving scheme commands

/// Set display clock divide ratio / oscillator frequency (0xD5)
pub const SET_DISPLAY_CLOCK_DIV: u8 = 0xD5;

/// Set pre-charge period (0xD9)
pub const SET_PRECHARGE: u8 = 0xD9;

/// Set VCOMH deselect level (0xDB)
pub const SET_VCOM_DETECT: u8 = 0xDB;

// Charge pump

/// Charge pump setting (0x8D)
///
/// Followed by one byte: 0x14 enables the internal pump, 0x10 disables it.
pub const CHARGE_PUMP: u8 = 0x8D;

/// Charge pump enabled, used when the panel runs from the internal supply
pub const CHARGE_PUMP_ENABLE: u8 = 0x14;

/// Charge pump disabled, used with an external VCC supply
pub const CHARGE_PUMP_DISABLE: u8 = 0x10;
