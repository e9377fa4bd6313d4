//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and its three
//! implementations, one per physical link to the SSD1306:
//!
//! - [`SpiInterface`]: 4-wire SPI through an [`SpiDevice`] plus a DC pin
//! - [`BitBangInterface`]: 4-wire SPI shifted out manually on GPIO pins
//! - [`I2cInterface`]: 2-wire I2C with control-byte framing
//!
//! The interface is chosen by type when the [`Display`](crate::Display) is
//! built and stays fixed for its lifetime.
//!
//! ## Hardware Requirements
//!
//! SPI needs MOSI, SCK, CS and a **DC** (data/command select) output. I2C needs
//! SDA and SCL; the controller answers at [`I2C_ADDRESS`] or
//! [`I2C_ADDRESS_ALTERNATE`] depending on its SA0 strap. The optional reset
//! line belongs to the display, not to the interface.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use ssd1306::{DisplayInterface, SpiInterface};
//! # use core::convert::Infallible;
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
//! // Create interface with SPI device and DC pin
//! let mut interface = SpiInterface::new(MockSpi, MockPin);
//!
//! // Send command
//! let _ = interface.send_command(0xAF); // Display on
//!
//! // Send data
//! let _ = interface.send_data(&[0xFF, 0x00, 0xFF]);
//! ```

use core::convert::Infallible;
use core::fmt::Debug;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Default 7-bit I2C address (SA0 low)
pub const I2C_ADDRESS: u8 = 0x3C;

/// Alternate 7-bit I2C address (SA0 high)
pub const I2C_ADDRESS_ALTERNATE: u8 = 0x3D;

/// I2C control byte announcing a command (Co = 0, D/C# = 0)
pub const I2C_CONTROL_COMMAND: u8 = 0x00;

/// I2C control byte announcing display data (Co = 0, D/C# = 1)
pub const I2C_CONTROL_DATA: u8 = 0x40;

/// Maximum display data bytes in one I2C transaction
///
/// Bursts are split into transactions of at most this many payload bytes.
pub const I2C_MAX_DATA_CHUNK: usize = 16;

/// Trait for hardware interface to SSD1306 controller
///
/// This trait abstracts over the physical link, allowing the
/// [`Display`](crate::display::Display) to work with SPI or I2C.
///
/// ## Implementing
///
/// For most cases, use one of the provided interfaces. Implement this trait on
/// your own type for other links (e.g. a parallel bus or a DMA-backed SPI).
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Prepare the link before the first transfer
    ///
    /// Called once by [`Display::begin`](crate::Display::begin).
    ///
    /// # Errors
    ///
    /// Returns an error if bus or GPIO setup fails.
    fn begin(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Send a single command byte to the controller
    ///
    /// # Errors
    ///
    /// Returns an error if bus or GPIO communication fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send display data bytes to the controller
    ///
    /// # Arguments
    ///
    /// * `data` - Slice of bytes to write to display RAM
    ///
    /// # Errors
    ///
    /// Returns an error if bus or GPIO communication fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over bus and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<BusErr, PinErr> {
    /// SPI or I2C bus error
    Bus(BusErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<BusErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<BusErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "Bus error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<BusErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<BusErr, PinErr> {}

/// 4-wire SPI interface using a hardware [`SpiDevice`]
///
/// The SPI device owns chip select, so every command byte and every data
/// burst is a single transaction with CS asserted throughout.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`] (low=command, high=data)
#[derive(Debug)]
pub struct SpiInterface<SPI, DC> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
}

impl<SPI, DC> SpiInterface<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    /// Create a new SPI interface
    pub fn new(spi: SPI, dc: DC) -> Self {
        Self { spi, dc }
    }

    /// Give the SPI device and DC pin back
    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }
}

impl<SPI, DC> DisplayInterface for SpiInterface<SPI, DC>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin,
    DC::Error: Debug,
{
    type Error = InterfaceError<SPI::Error, DC::Error>;

    fn begin(&mut self) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)
    }

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Bus)?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(data).map_err(InterfaceError::Bus)?;
        Ok(())
    }
}

/// 4-wire SPI interface driven entirely from GPIO pins
///
/// For boards without a free SPI peripheral. Bytes are shifted out MSB first;
/// MOSI is set while SCLK is low and latched on the rising edge (SPI mode 0).
///
/// ## Type Parameters
///
/// All pins implement [`OutputPin`] with a common error type.
#[derive(Debug)]
pub struct BitBangInterface<MOSI, SCLK, DC, CS> {
    /// Serial data out
    mosi: MOSI,
    /// Serial clock
    sclk: SCLK,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Chip select (active low)
    cs: CS,
}

impl<MOSI, SCLK, DC, CS, PinErr> BitBangInterface<MOSI, SCLK, DC, CS>
where
    MOSI: OutputPin<Error = PinErr>,
    SCLK: OutputPin<Error = PinErr>,
    DC: OutputPin<Error = PinErr>,
    CS: OutputPin<Error = PinErr>,
{
    /// Create a new bit-banged interface
    pub fn new(mosi: MOSI, sclk: SCLK, dc: DC, cs: CS) -> Self {
        Self { mosi, sclk, dc, cs }
    }

    /// Give the pins back
    pub fn release(self) -> (MOSI, SCLK, DC, CS) {
        (self.mosi, self.sclk, self.dc, self.cs)
    }

    fn write_byte(&mut self, byte: u8) -> InterfaceResult<(), PinErr> {
        let mut bit = 0x80u8;
        while bit != 0 {
            self.sclk.set_low()?;
            if byte & bit != 0 {
                self.mosi.set_high()?;
            } else {
                self.mosi.set_low()?;
            }
            self.sclk.set_high()?;
            bit >>= 1;
        }
        Ok(())
    }

    /// Select DC, assert CS for the whole transfer, release CS
    fn transfer(&mut self, data_mode: bool, bytes: &[u8]) -> InterfaceResult<(), PinErr> {
        self.cs.set_high()?;
        if data_mode {
            self.dc.set_high()?;
        } else {
            self.dc.set_low()?;
        }
        self.cs.set_low()?;
        for &byte in bytes {
            self.write_byte(byte)?;
        }
        self.cs.set_high()
    }
}

impl<MOSI, SCLK, DC, CS, PinErr> DisplayInterface for BitBangInterface<MOSI, SCLK, DC, CS>
where
    MOSI: OutputPin<Error = PinErr>,
    SCLK: OutputPin<Error = PinErr>,
    DC: OutputPin<Error = PinErr>,
    CS: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<Infallible, PinErr>;

    fn begin(&mut self) -> InterfaceResult<(), Self::Error> {
        self.cs.set_high().map_err(InterfaceError::Pin)?;
        self.sclk.set_low().map_err(InterfaceError::Pin)
    }

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.transfer(false, &[command]).map_err(InterfaceError::Pin)
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.transfer(true, data).map_err(InterfaceError::Pin)
    }
}

/// Control over the I2C bus clock while a data burst is sent
///
/// [`I2cInterface`] raises the bus to its fastest rate for the duration of
/// [`send_data`](DisplayInterface::send_data) and puts the previous rate back
/// afterwards. The default [`FixedClock`] leaves the bus untouched.
pub trait BusClock {
    /// Switch to the fastest supported rate, returning the rate in effect before
    fn boost(&mut self) -> u32;

    /// Restore a rate previously returned by [`boost`](Self::boost)
    fn restore(&mut self, previous: u32);
}

/// A bus clock that is never changed
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedClock;

impl BusClock for FixedClock {
    fn boost(&mut self) -> u32 {
        0
    }

    fn restore(&mut self, _previous: u32) {}
}

/// 2-wire I2C interface
///
/// Every command is its own transaction `[0x00, command]`. Display data is sent
/// in transactions of at most [`I2C_MAX_DATA_CHUNK`] bytes, each prefixed with
/// `0x40`.
///
/// ## Type Parameters
///
/// * `I2C` - Bus implementing [`I2c`]
/// * `CLK` - Optional [`BusClock`] used to speed up data bursts
#[derive(Debug)]
pub struct I2cInterface<I2C, CLK = FixedClock> {
    /// I2C bus
    i2c: I2C,
    /// 7-bit device address
    address: u8,
    /// Bus clock control for data bursts
    clock: CLK,
}

impl<I2C> I2cInterface<I2C, FixedClock>
where
    I2C: I2c,
{
    /// Create a new I2C interface talking to `address`
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            clock: FixedClock,
        }
    }
}

impl<I2C, CLK> I2cInterface<I2C, CLK>
where
    I2C: I2c,
    CLK: BusClock,
{
    /// Attach a bus clock control used during data bursts
    pub fn with_clock<C: BusClock>(self, clock: C) -> I2cInterface<I2C, C> {
        I2cInterface {
            i2c: self.i2c,
            address: self.address,
            clock,
        }
    }

    /// 7-bit device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give the bus and clock control back
    pub fn release(self) -> (I2C, CLK) {
        (self.i2c, self.clock)
    }

    fn write_chunks(&mut self, data: &[u8]) -> InterfaceResult<(), I2C::Error> {
        let mut frame = [0u8; I2C_MAX_DATA_CHUNK + 1];
        frame[0] = I2C_CONTROL_DATA;
        for chunk in data.chunks(I2C_MAX_DATA_CHUNK) {
            frame[1..=chunk.len()].copy_from_slice(chunk);
            self.i2c.write(self.address, &frame[..=chunk.len()])?;
        }
        Ok(())
    }
}

impl<I2C, CLK> DisplayInterface for I2cInterface<I2C, CLK>
where
    I2C: I2c,
    CLK: BusClock,
{
    type Error = InterfaceError<I2C::Error, Infallible>;

    fn begin(&mut self) -> InterfaceResult<(), Self::Error> {
        log::debug!("i2c interface at address {:#04x}", self.address);
        Ok(())
    }

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.i2c
            .write(self.address, &[I2C_CONTROL_COMMAND, command])
            .map_err(InterfaceError::Bus)
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        let previous = self.clock.boost();
        let result = self.write_chunks(data);
        self.clock.restore(previous);
        result.map_err(InterfaceError::Bus)
    }
}

/// Placeholder for an output pin that is not wired
///
/// Used as the default reset pin of [`Display`](crate::Display). Every
/// operation succeeds without effect.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPin;

impl embedded_hal::digital::ErrorType for NoPin {
    type Error = Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> InterfaceResult<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> InterfaceResult<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use embedded_hal::digital::ErrorType;
    use embedded_hal::spi::ErrorType as SpiErrorType;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Pin(&'static str, bool),
        Spi(Vec<u8>),
    }

    /// Shared log so pins and bus record into one timeline
    type Log = RefCell<Vec<Event>>;

    struct MockPin<'a> {
        name: &'static str,
        log: &'a Log,
    }

    impl ErrorType for MockPin<'_> {
        type Error = Infallible;
    }

    impl OutputPin for MockPin<'_> {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Event::Pin(self.name, false));
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Event::Pin(self.name, true));
            Ok(())
        }
    }

    struct MockSpi<'a> {
        log: &'a Log,
    }

    impl SpiErrorType for MockSpi<'_> {
        type Error = Infallible;
    }

    impl SpiDevice for MockSpi<'_> {
        fn transaction(
            &mut self,
            operations: &mut [embedded_hal::spi::Operation<'_, u8>],
        ) -> Result<(), Self::Error> {
            for op in operations {
                if let embedded_hal::spi::Operation::Write(bytes) = op {
                    self.log.borrow_mut().push(Event::Spi(bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockI2c {
        writes: Vec<(u8, Vec<u8>)>,
    }

    impl embedded_hal::i2c::ErrorType for MockI2c {
        type Error = Infallible;
    }

    impl I2c for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [embedded_hal::i2c::Operation<'_>],
        ) -> Result<(), Self::Error> {
            for op in operations {
                if let embedded_hal::i2c::Operation::Write(bytes) = op {
                    self.writes.push((address, bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockClock {
        rate: u32,
        history: Vec<u32>,
    }

    impl BusClock for &mut MockClock {
        fn boost(&mut self) -> u32 {
            let previous = self.rate;
            self.rate = 400_000;
            self.history.push(self.rate);
            previous
        }

        fn restore(&mut self, previous: u32) {
            self.rate = previous;
            self.history.push(previous);
        }
    }

    #[test]
    fn test_spi_command_and_data_select_dc() {
        let log = Log::default();
        let mut interface = SpiInterface::new(
            MockSpi { log: &log },
            MockPin {
                name: "dc",
                log: &log,
            },
        );
        interface.send_command(0xAE).unwrap();
        interface.send_data(&[1, 2, 3]).unwrap();
        assert_eq!(
            log.into_inner(),
            vec![
                Event::Pin("dc", false),
                Event::Spi(vec![0xAE]),
                Event::Pin("dc", true),
                Event::Spi(vec![1, 2, 3]),
            ]
        );
    }

    #[test]
    fn test_bitbang_command_shifts_msb_first() {
        let log = Log::default();
        let pin = |name| MockPin { name, log: &log };
        let mut interface = BitBangInterface::new(pin("mosi"), pin("sclk"), pin("dc"), pin("cs"));
        interface.send_command(0b1010_0000).unwrap();

        let events = log.into_inner();
        assert_eq!(
            &events[..3],
            &[
                Event::Pin("cs", true),
                Event::Pin("dc", false),
                Event::Pin("cs", false)
            ]
        );
        assert_eq!(events.last(), Some(&Event::Pin("cs", true)));

        let bits: Vec<bool> = events
            .iter()
            .filter_map(|e| match e {
                Event::Pin("mosi", level) => Some(*level),
                _ => None,
            })
            .collect();
        assert_eq!(bits, vec![true, false, true, false, false, false, false, false]);

        let clock_edges = events
            .iter()
            .filter(|e| matches!(e, Event::Pin("sclk", true)))
            .count();
        assert_eq!(clock_edges, 8);
    }

    #[test]
    fn test_bitbang_data_keeps_cs_asserted_for_burst() {
        let log = Log::default();
        let pin = |name| MockPin { name, log: &log };
        let mut interface = BitBangInterface::new(pin("mosi"), pin("sclk"), pin("dc"), pin("cs"));
        interface.send_data(&[0xFF, 0x00, 0x81]).unwrap();

        let cs: Vec<bool> = log
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Pin("cs", level) => Some(*level),
                _ => None,
            })
            .collect();
        assert_eq!(cs, vec![true, false, true]);
        assert!(log.borrow().contains(&Event::Pin("dc", true)));

        let clock_edges = log
            .borrow()
            .iter()
            .filter(|e| matches!(e, Event::Pin("sclk", true)))
            .count();
        assert_eq!(clock_edges, 24);
    }

    #[test]
    fn test_i2c_command_framing() {
        let mut interface = I2cInterface::new(MockI2c::default(), I2C_ADDRESS_ALTERNATE);
        interface.send_command(0x81).unwrap();
        interface.send_command(0x7F).unwrap();
        let (i2c, _) = interface.release();
        assert_eq!(
            i2c.writes,
            vec![(0x3D, vec![0x00, 0x81]), (0x3D, vec![0x00, 0x7F])]
        );
    }

    #[test]
    fn test_i2c_data_split_into_sixteen_byte_transactions() {
        let mut interface = I2cInterface::new(MockI2c::default(), I2C_ADDRESS);
        let data: Vec<u8> = (0..17).collect();
        interface.send_data(&data).unwrap();
        let (i2c, _) = interface.release();

        assert_eq!(i2c.writes.len(), 2);
        let (address, first) = &i2c.writes[0];
        assert_eq!(*address, 0x3C);
        assert_eq!(first[0], I2C_CONTROL_DATA);
        assert_eq!(&first[1..], &data[..16]);
        assert_eq!(i2c.writes[1].1, vec![I2C_CONTROL_DATA, 16]);
    }

    #[test]
    fn test_i2c_data_exact_multiple_has_no_empty_tail() {
        let mut interface = I2cInterface::new(MockI2c::default(), I2C_ADDRESS);
        interface.send_data(&[0xAA; 32]).unwrap();
        let (i2c, _) = interface.release();
        assert_eq!(i2c.writes.len(), 2);
        assert!(i2c.writes.iter().all(|(_, w)| w.len() == 17));
    }

    #[test]
    fn test_i2c_data_boosts_and_restores_clock() {
        let mut clock = MockClock {
            rate: 100_000,
            history: Vec::new(),
        };
        {
            let mut interface =
                I2cInterface::new(MockI2c::default(), I2C_ADDRESS).with_clock(&mut clock);
            interface.send_command(0xAF).unwrap();
            interface.send_data(&[0; 4]).unwrap();
        }
        assert_eq!(clock.rate, 100_000);
        assert_eq!(clock.history, vec![400_000, 100_000]);
    }
}
