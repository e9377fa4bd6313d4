//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_ROWS};

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Number of columns (width in pixels, corresponds to segment outputs)
    pub width: u16,
    /// Number of rows (height in pixels, corresponds to common outputs)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width == 0 or width > MAX_COLUMNS
    /// - height == 0 or height > MAX_ROWS
    /// - height % 8 != 0 (rows are packed into 8-row pages)
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_COLUMNS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if height == 0 || height > MAX_ROWS || height % 8 != 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Calculate required buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        (self.width as usize * self.height as usize) / 8
    }

    /// Number of 8-row pages
    pub fn pages(&self) -> u16 {
        self.height / 8
    }
}

/// Display rotation relative to native orientation
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

impl Rotation {
    /// Build a rotation from a count of quarter turns; only the low two bits are used
    pub fn from_quarter_turns(turns: u8) -> Self {
        match turns & 0x03 {
            0 => Self::Rotate0,
            1 => Self::Rotate90,
            2 => Self::Rotate180,
            _ => Self::Rotate270,
        }
    }

    /// Number of clockwise quarter turns (0..=3)
    pub fn quarter_turns(self) -> u8 {
        match self {
            Self::Rotate0 => 0,
            Self::Rotate90 => 1,
            Self::Rotate180 => 2,
            Self::Rotate270 => 3,
        }
    }

    /// Whether logical width and height are swapped
    pub fn is_transposed(self) -> bool {
        matches!(self, Self::Rotate90 | Self::Rotate270)
    }
}

/// Power supply driving the panel
///
/// Selects the charge pump setting, the contrast taken from the [`Config`],
/// the pre-charge period, and the undimmed contrast used by
/// [`Display::dim`](crate::Display::dim).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(u8)]
pub enum VccMode {
    /// VCC supplied externally, charge pump disabled
    External = 0x01,
    /// VCC generated by the internal switched-capacitor charge pump
    #[default]
    SwitchCap = 0x02,
}

impl VccMode {
    /// Charge pump setting byte for this supply
    pub fn charge_pump(self) -> u8 {
        match self {
            Self::External => crate::command::CHARGE_PUMP_DISABLE,
            Self::SwitchCap => crate::command::CHARGE_PUMP_ENABLE,
        }
    }

    /// Pre-charge period byte for this supply
    pub fn precharge(self) -> u8 {
        match self {
            Self::External => 0x22,
            Self::SwitchCap => 0xF1,
        }
    }

    /// Contrast restored when leaving dim mode
    pub fn undimmed_contrast(self) -> u8 {
        match self {
            Self::External => 0x9F,
            Self::SwitchCap => 0xCF,
        }
    }
}

/// Display configuration
///
/// This struct holds the per-panel tuning values for the SSD1306 controller.
/// Use one of the size presets or [`Builder`] to create a Config.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Initial display rotation
    pub rotation: Rotation,
    /// COM pins hardware configuration byte (command 0xDA)
    pub com_pins: u8,
    /// Contrast used when VCC is supplied externally
    pub contrast_external: u8,
    /// Contrast used with the internal charge pump
    pub contrast_internal: u8,
    /// Display clock divide ratio / oscillator frequency (command 0xD5)
    pub clock_div: u8,
    /// VCOMH deselect level (command 0xDB)
    pub vcom_detect: u8,
}

impl Config {
    /// 128x64 panel
    pub fn size_128x64() -> Self {
        Self::preset(128, 64, 0x12, 0x9F, 0xCF)
    }

    /// 128x32 panel
    pub fn size_128x32() -> Self {
        Self::preset(128, 32, 0x02, 0x8F, 0x8F)
    }

    /// 96x16 panel
    pub fn size_96x16() -> Self {
        Self::preset(96, 16, 0x02, 0x10, 0xAF)
    }

    fn preset(
        width: u16,
        height: u16,
        com_pins: u8,
        contrast_external: u8,
        contrast_internal: u8,
    ) -> Self {
        Self {
            dimensions: Dimensions { width, height },
            rotation: Rotation::Rotate0,
            com_pins,
            contrast_external,
            contrast_internal,
            clock_div: DEFAULT_CLOCK_DIV,
            vcom_detect: DEFAULT_VCOM_DETECT,
        }
    }

    /// Get the rotated dimensions based on rotation setting
    pub fn rotated_dimensions(&self) -> Dimensions {
        if self.rotation.is_transposed() {
            Dimensions {
                width: self.dimensions.height,
                height: self.dimensions.width,
            }
        } else {
            self.dimensions
        }
    }

    /// Contrast selected by the supply mode
    pub fn contrast_for(&self, vcc: VccMode) -> u8 {
        match vcc {
            VccMode::External => self.contrast_external,
            VccMode::SwitchCap => self.contrast_internal,
        }
    }
}

/// Suggested oscillator setting from the datasheet
const DEFAULT_CLOCK_DIV: u8 = 0x80;
/// ~0.77 x VCC
const DEFAULT_VCOM_DETECT: u8 = 0x40;

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use ssd1306::{Builder, Dimensions, Rotation};
///
/// let dims = match Dimensions::new(64, 48) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new()
///     .dimensions(dims)
///     .com_pins(0x12)
///     .rotation(Rotation::Rotate180)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.dimensions.height, 48);
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    /// Initial display rotation
    rotation: Rotation,
    /// COM pins hardware configuration byte
    com_pins: u8,
    /// Contrast with external VCC
    contrast_external: u8,
    /// Contrast with internal charge pump
    contrast_internal: u8,
    /// Clock divide ratio / oscillator frequency
    clock_div: u8,
    /// VCOMH deselect level
    vcom_detect: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            rotation: Rotation::Rotate0,
            // Alternative COM pin layout, used by most 64-row panels
            com_pins: 0x12,
            contrast_external: 0x9F,
            contrast_internal: 0xCF,
            clock_div: DEFAULT_CLOCK_DIV,
            vcom_detect: DEFAULT_VCOM_DETECT,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set initial display rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set COM pins hardware configuration
    pub fn com_pins(mut self, value: u8) -> Self {
        self.com_pins = value;
        self
    }

    /// Set contrast used with external VCC
    pub fn contrast_external(mut self, value: u8) -> Self {
        self.contrast_external = value;
        self
    }

    /// Set contrast used with the internal charge pump
    pub fn contrast_internal(mut self, value: u8) -> Self {
        self.contrast_internal = value;
        self
    }

    /// Set display clock divide ratio / oscillator frequency
    pub fn clock_div(mut self, value: u8) -> Self {
        self.clock_div = value;
        self
    }

    /// Set VCOMH deselect level
    pub fn vcom_detect(mut self, value: u8) -> Self {
        self.vcom_detect = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set
    pub fn build(self) -> Result<Config, BuilderError> {
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            rotation: self.rotation,
            com_pins: self.com_pins,
            contrast_external: self.contrast_external,
            contrast_internal: self.contrast_internal,
            clock_div: self.clock_div,
            vcom_detect: self.vcom_detect,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_reject_partial_page() {
        assert!(matches!(
            Dimensions::new(128, 20),
            Err(BuilderError::InvalidDimensions {
                width: 128,
                height: 20
            })
        ));
    }

    #[test]
    fn test_dimensions_reject_zero_and_oversize() {
        assert!(Dimensions::new(0, 8).is_err());
        assert!(Dimensions::new(8, 0).is_err());
        assert!(Dimensions::new(129, 64).is_err());
        assert!(Dimensions::new(128, 72).is_err());
    }

    #[test]
    fn test_dimensions_buffer_size() {
        let dims = Dimensions::new(128, 64).unwrap();
        assert_eq!(dims.buffer_size(), 1024);
        assert_eq!(dims.pages(), 8);
        assert_eq!(Dimensions::new(17, 8).unwrap().buffer_size(), 17);
    }

    #[test]
    fn test_presets_match_panel_tuning() {
        let c = Config::size_128x64();
        assert_eq!((c.com_pins, c.contrast_external, c.contrast_internal), (0x12, 0x9F, 0xCF));
        let c = Config::size_128x32();
        assert_eq!((c.com_pins, c.contrast_external, c.contrast_internal), (0x02, 0x8F, 0x8F));
        let c = Config::size_96x16();
        assert_eq!(c.dimensions, Dimensions::new(96, 16).unwrap());
        assert_eq!(c.contrast_for(VccMode::External), 0x10);
        assert_eq!(c.contrast_for(VccMode::SwitchCap), 0xAF);
    }

    #[test]
    fn test_builder_requires_dimensions() {
        assert_eq!(Builder::new().build(), Err(BuilderError::MissingDimensions));
    }

    #[test]
    fn test_rotated_dimensions() {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 32).unwrap())
            .rotation(Rotation::Rotate270)
            .build()
            .unwrap();
        assert_eq!(config.rotated_dimensions(), Dimensions { width: 32, height: 128 });
    }

    #[test]
    fn test_rotation_quarter_turns_wrap() {
        assert_eq!(Rotation::from_quarter_turns(5), Rotation::Rotate90);
        assert_eq!(Rotation::Rotate270.quarter_turns(), 3);
    }
}
