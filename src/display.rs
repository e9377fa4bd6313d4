//! Core display operations

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::color::Color;
use crate::command::{
    ACTIVATE_SCROLL, CHARGE_PUMP, COLUMN_ADDR, COM_SCAN_DEC, DEACTIVATE_SCROLL,
    DISPLAY_ALL_ON_RESUME, DISPLAY_OFF, DISPLAY_ON, INVERT_DISPLAY, LEFT_HORIZONTAL_SCROLL,
    MEMORY_MODE, MEMORY_MODE_HORIZONTAL, NORMAL_DISPLAY, PAGE_ADDR, RIGHT_HORIZONTAL_SCROLL,
    SEG_REMAP, SET_COM_PINS, SET_CONTRAST, SET_DISPLAY_CLOCK_DIV, SET_DISPLAY_OFFSET,
    SET_MULTIPLEX, SET_PRECHARGE, SET_START_LINE, SET_VCOM_DETECT, SET_VERTICAL_SCROLL_AREA,
    VERTICAL_AND_LEFT_HORIZONTAL_SCROLL, VERTICAL_AND_RIGHT_HORIZONTAL_SCROLL,
};
use crate::config::{BuilderError, Config, Dimensions, Rotation, VccMode};
use crate::error::Error;
use crate::framebuffer::FrameBuffer;
use crate::interface::{DisplayInterface, NoPin};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Lifecycle of the controller as seen by the driver
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum State {
    /// [`Display::begin`] has not been called
    #[default]
    Uninitialized,
    /// [`Display::begin`] is running or failed part way
    Initializing,
    /// The init sequence completed
    Ready,
}

/// Direction of a horizontal scroll
#[derive(Clone, Copy, Debug, PartialEq)]
enum Scroll {
    Right,
    Left,
}

/// SSD1306 display driver
///
/// Owns the interface, the frame buffer and the optional reset pin. Drawing
/// only touches the frame buffer; [`flush`](Self::flush) pushes the whole
/// buffer to the panel.
///
/// ## Type Parameters
///
/// * `I` - Hardware interface, see [`DisplayInterface`]
/// * `B` - Frame buffer storage, see [`FrameBuffer`]
/// * `RST` - Reset pin, [`NoPin`] when the line is not wired
pub struct Display<I, B, RST = NoPin>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Off-screen image of the display RAM
    framebuffer: FrameBuffer<B>,
    /// Optional reset line
    reset: Option<RST>,
    /// Supply mode chosen in `begin`
    vcc: VccMode,
    /// Driver lifecycle
    state: State,
}

impl<I, B> Display<I, B, NoPin>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a new Display instance
    ///
    /// `buffer` becomes the frame buffer and must be exactly
    /// `config.dimensions.buffer_size()` bytes. Its contents are kept.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimensions` if `config.dimensions` breaks the
    /// controller limits, or `Error::BufferSize` if the buffer length is wrong.
    pub fn new(interface: I, config: Config, buffer: B) -> Result<Self, Error<I>> {
        let mut framebuffer =
            FrameBuffer::new(config.dimensions, buffer).map_err(|e| match e {
                BuilderError::BufferSize { required, provided } => {
                    Error::BufferSize { required, provided }
                }
                BuilderError::MissingDimensions => Error::InvalidDimensions {
                    width: config.dimensions.width,
                    height: config.dimensions.height,
                },
                BuilderError::InvalidDimensions { width, height } => {
                    Error::InvalidDimensions { width, height }
                }
            })?;
        framebuffer.set_rotation(config.rotation);
        Ok(Self {
            interface,
            config,
            framebuffer,
            reset: None,
            vcc: VccMode::default(),
            state: State::Uninitialized,
        })
    }

    /// Attach a reset pin, pulsed by [`begin`](Display::begin)
    pub fn with_reset<RST: OutputPin>(self, reset: RST) -> Display<I, B, RST> {
        Display {
            interface: self.interface,
            config: self.config,
            framebuffer: self.framebuffer,
            reset: Some(reset),
            vcc: self.vcc,
            state: self.state,
        }
    }
}

impl<I, B, RST> Display<I, B, RST>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
    RST: OutputPin,
{
    /// Reset and initialize the controller
    ///
    /// When `reset` is true and a reset pin is attached, the panel is pulsed
    /// first. The panel is switched on at the end of the sequence; the display
    /// RAM is not cleared, so call [`flush`](Self::flush) to show the frame
    /// buffer.
    ///
    /// # Errors
    ///
    /// Returns `Error::Interface` on the first failing transfer. The state
    /// then stays [`State::Initializing`].
    pub fn begin<D: DelayNs>(
        &mut self,
        vcc: VccMode,
        reset: bool,
        delay: &mut D,
    ) -> DisplayResult<I> {
        self.state = State::Initializing;
        self.vcc = vcc;

        if reset {
            self.hardware_reset(delay);
        }

        self.interface.begin().map_err(Error::Interface)?;
        self.init()?;

        self.state = State::Ready;
        log::debug!(
            "ssd1306 {}x{} ready ({:?})",
            self.config.dimensions.width,
            self.config.dimensions.height,
            vcc
        );
        Ok(())
    }

    /// Pulse the reset line; pin errors are ignored
    fn hardware_reset<D: DelayNs>(&mut self, delay: &mut D) {
        let Some(pin) = self.reset.as_mut() else {
            return;
        };
        log::debug!("ssd1306 hardware reset");
        let _ = pin.set_high();
        delay.delay_ms(1);
        let _ = pin.set_low();
        delay.delay_ms(10);
        let _ = pin.set_high();
    }

    fn init(&mut self) -> DisplayResult<I> {
        let vcc = self.vcc;
        let rows = self.config.dimensions.height;

        self.send_command(DISPLAY_OFF)?;
        self.send_commands(&[SET_DISPLAY_CLOCK_DIV, self.config.clock_div])?;
        self.send_commands(&[SET_MULTIPLEX, (rows - 1) as u8])?;
        self.send_commands(&[SET_DISPLAY_OFFSET, 0x00])?;
        self.send_command(SET_START_LINE)?;
        self.send_commands(&[CHARGE_PUMP, vcc.charge_pump()])?;
        self.send_commands(&[MEMORY_MODE, MEMORY_MODE_HORIZONTAL])?;
        // Column 127 mapped to SEG0, COM scan from COM[N-1]
        self.send_command(SEG_REMAP | 0x01)?;
        self.send_command(COM_SCAN_DEC)?;
        self.send_commands(&[SET_COM_PINS, self.config.com_pins])?;
        self.send_commands(&[SET_CONTRAST, self.config.contrast_for(vcc)])?;
        self.send_commands(&[SET_PRECHARGE, vcc.precharge()])?;
        self.send_commands(&[SET_VCOM_DETECT, self.config.vcom_detect])?;
        self.send_command(DISPLAY_ALL_ON_RESUME)?;
        self.send_command(NORMAL_DISPLAY)?;
        self.send_command(DEACTIVATE_SCROLL)?;
        self.send_command(DISPLAY_ON)
    }

    /// Send the whole frame buffer to display RAM
    ///
    /// Sets the column window to `0..width` and the page window to
    /// `0..height / 8`, then streams every byte of the buffer.
    pub fn flush(&mut self) -> DisplayResult<I> {
        if self.state != State::Ready {
            log::warn!("ssd1306 flush while {:?}", self.state);
        }
        let dims = self.config.dimensions;
        self.send_commands(&[COLUMN_ADDR, 0, (dims.width - 1) as u8])?;
        self.send_commands(&[PAGE_ADDR, 0, (dims.pages() - 1) as u8])?;

        log::trace!("ssd1306 flush {} bytes", dims.buffer_size());
        self.interface
            .send_data(self.framebuffer.as_bytes())
            .map_err(Error::Interface)
    }

    /// Invert the panel output (0xA7) or restore normal output (0xA6)
    ///
    /// The frame buffer is not touched.
    pub fn invert(&mut self, inverted: bool) -> DisplayResult<I> {
        self.send_command(if inverted {
            INVERT_DISPLAY
        } else {
            NORMAL_DISPLAY
        })
    }

    /// Drop the contrast to zero, or restore the supply default
    ///
    /// Undimming restores 0x9F (external VCC) or 0xCF (charge pump), not a
    /// value set with [`set_contrast`](Self::set_contrast).
    pub fn dim(&mut self, dimmed: bool) -> DisplayResult<I> {
        let contrast = if dimmed {
            0
        } else {
            self.vcc.undimmed_contrast()
        };
        self.set_contrast(contrast)
    }

    /// Set the contrast level
    pub fn set_contrast(&mut self, contrast: u8) -> DisplayResult<I> {
        self.send_commands(&[SET_CONTRAST, contrast])
    }

    /// Switch the panel on (0xAF) or into sleep (0xAE)
    pub fn set_display_on(&mut self, on: bool) -> DisplayResult<I> {
        self.send_command(if on { DISPLAY_ON } else { DISPLAY_OFF })
    }

    /// Scroll pages `start..=stop` to the right continuously
    pub fn start_scroll_right(&mut self, start: u8, stop: u8) -> DisplayResult<I> {
        self.start_scroll(Scroll::Right, start, stop)
    }

    /// Scroll pages `start..=stop` to the left continuously
    pub fn start_scroll_left(&mut self, start: u8, stop: u8) -> DisplayResult<I> {
        self.start_scroll(Scroll::Left, start, stop)
    }

    /// Scroll pages `start..=stop` diagonally up and to the right
    pub fn start_scroll_diag_right(&mut self, start: u8, stop: u8) -> DisplayResult<I> {
        self.start_scroll_diag(Scroll::Right, start, stop)
    }

    /// Scroll pages `start..=stop` diagonally up and to the left
    pub fn start_scroll_diag_left(&mut self, start: u8, stop: u8) -> DisplayResult<I> {
        self.start_scroll_diag(Scroll::Left, start, stop)
    }

    /// Stop any active scroll
    ///
    /// The display RAM must be rewritten with [`flush`](Self::flush) afterwards.
    pub fn stop_scroll(&mut self) -> DisplayResult<I> {
        self.send_command(DEACTIVATE_SCROLL)
    }

    fn start_scroll(&mut self, direction: Scroll, start: u8, stop: u8) -> DisplayResult<I> {
        let command = match direction {
            Scroll::Right => RIGHT_HORIZONTAL_SCROLL,
            Scroll::Left => LEFT_HORIZONTAL_SCROLL,
        };
        self.send_commands(&[command, 0x00, start, 0x00, stop, 0x00, 0xFF, ACTIVATE_SCROLL])
    }

    fn start_scroll_diag(&mut self, direction: Scroll, start: u8, stop: u8) -> DisplayResult<I> {
        let command = match direction {
            Scroll::Right => VERTICAL_AND_RIGHT_HORIZONTAL_SCROLL,
            Scroll::Left => VERTICAL_AND_LEFT_HORIZONTAL_SCROLL,
        };
        let rows = self.config.dimensions.height as u8;
        self.send_commands(&[SET_VERTICAL_SCROLL_AREA, 0x00, rows])?;
        self.send_commands(&[command, 0x00, start, 0x00, stop, 0x01, ACTIVATE_SCROLL])
    }

    /// Send a raw command byte
    ///
    /// Parameters of multi-byte commands are sent with further calls.
    pub fn command(&mut self, command: u8) -> DisplayResult<I> {
        self.send_command(command)
    }

    /// Zero the frame buffer; nothing is sent
    pub fn clear(&mut self) {
        self.framebuffer.clear();
    }

    /// Set, clear or flip one logical pixel
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.framebuffer.set_pixel(x, y, color);
    }

    /// Read one logical pixel back from the frame buffer
    pub fn pixel(&self, x: i32, y: i32) -> Option<bool> {
        self.framebuffer.pixel(x, y)
    }

    /// Draw a horizontal run of `len` pixels starting at `(x, y)`
    pub fn draw_fast_hline(&mut self, x: i32, y: i32, len: i32, color: Color) {
        self.framebuffer.draw_fast_hline(x, y, len, color);
    }

    /// Draw a vertical run of `len` pixels starting at `(x, y)`
    pub fn draw_fast_vline(&mut self, x: i32, y: i32, len: i32, color: Color) {
        self.framebuffer.draw_fast_vline(x, y, len, color);
    }

    /// Get the frame buffer
    pub fn framebuffer(&self) -> &FrameBuffer<B> {
        &self.framebuffer
    }

    /// Get the frame buffer mutably
    pub fn framebuffer_mut(&mut self) -> &mut FrameBuffer<B> {
        &mut self.framebuffer
    }

    /// Change the rotation used by later drawing
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.framebuffer.set_rotation(rotation);
    }

    /// Current rotation
    pub fn rotation(&self) -> Rotation {
        self.framebuffer.rotation()
    }

    /// Logical dimensions under the current rotation
    pub fn size(&self) -> Dimensions {
        self.framebuffer.rotated_dimensions()
    }

    /// Get the display configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current lifecycle state
    pub fn state(&self) -> State {
        self.state
    }

    /// Give back the interface, the buffer storage and the reset pin
    pub fn release(self) -> (I, B, Option<RST>) {
        (self.interface, self.framebuffer.release(), self.reset)
    }

    fn send_command(&mut self, command: u8) -> DisplayResult<I> {
        self.interface
            .send_command(command)
            .map_err(Error::Interface)
    }

    /// Send a command followed by its parameters, one command byte each
    fn send_commands(&mut self, commands: &[u8]) -> DisplayResult<I> {
        for &command in commands {
            self.send_command(command)?;
        }
        Ok(())
    }
}
