//! Packed 1-bit-per-pixel frame buffer
//!
//! [`FrameBuffer`] keeps the image that [`Display::flush`](crate::Display::flush)
//! sends to the controller. The layout matches the SSD1306 horizontal
//! addressing mode: byte `x + (y / 8) * width` holds column `x` of page
//! `y / 8`, and bit `y & 7` of that byte is row `y`.
//!
//! All drawing takes logical coordinates. The current [`Rotation`] maps them
//! to the physical buffer; anything that lands outside it is silently dropped.
//!
//! ## Example
//!
//! ```
//! use ssd1306::{Color, Dimensions, FrameBuffer, Rotation};
//!
//! let dims = match Dimensions::new(128, 32) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let mut fb = match FrameBuffer::new(dims, [0u8; 512]) {
//!     Ok(fb) => fb,
//!     Err(_) => return,
//! };
//!
//! fb.set_rotation(Rotation::Rotate180);
//! fb.set_pixel(0, 0, Color::White);
//! assert_eq!(fb.pixel(0, 0), Some(true));
//! // Logical origin is the last physical byte under 180°
//! assert_eq!(fb.as_bytes()[511], 0x80);
//!
//! fb.draw_fast_hline(0, 10, 20, Color::White);
//! fb.clear();
//! assert!(fb.as_bytes().iter().all(|b| *b == 0));
//! ```

use crate::color::Color;
use crate::config::{BuilderError, Dimensions, Rotation};
use crate::rotation::{Axis, buffer_position, map_point, map_run};

/// Partial-byte mask for the first page of a vertical run, indexed by the
/// number of rows from the start row to the bottom of that page
const LEADING_MASK: [u8; 8] = [0x00, 0x80, 0xC0, 0xE0, 0xF0, 0xF8, 0xFC, 0xFE];

/// Partial-byte mask for the last page of a vertical run, indexed by the
/// number of rows it covers from the top of that page
const TRAILING_MASK: [u8; 8] = [0x00, 0x01, 0x03, 0x07, 0x0F, 0x1F, 0x3F, 0x7F];

/// In-memory image of the display RAM
///
/// ## Type Parameters
///
/// * `B` - Storage, e.g. `[u8; N]`, `&mut [u8]` or `Vec<u8>`. Its length must be
///   exactly `dimensions.buffer_size()` bytes.
pub struct FrameBuffer<B> {
    /// Packed pixel storage
    buffer: B,
    /// Physical panel dimensions
    dimensions: Dimensions,
    /// Rotation applied to every logical coordinate
    rotation: Rotation,
}

impl<B> FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Wrap `buffer` as the frame buffer of a `dimensions` sized panel
    ///
    /// The buffer contents are kept as they are.
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if `dimensions` breaks the
    /// limits checked by [`Dimensions::new`], or `BuilderError::BufferSize` if
    /// the buffer length differs from `dimensions.buffer_size()`.
    pub fn new(dimensions: Dimensions, buffer: B) -> Result<Self, BuilderError> {
        let dimensions = Dimensions::new(dimensions.width, dimensions.height)?;
        let required = dimensions.buffer_size();
        let provided = buffer.as_ref().len();
        if provided != required {
            return Err(BuilderError::BufferSize { required, provided });
        }
        Ok(Self {
            buffer,
            dimensions,
            rotation: Rotation::Rotate0,
        })
    }

    /// Physical panel dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Logical dimensions under the current rotation
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

    /// Current rotation
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Change the rotation used by subsequent drawing calls
    ///
    /// Existing buffer content is not moved.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    /// Raw packed bytes, in the order they are sent to the controller
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_ref()
    }

    /// Mutable access to the raw packed bytes
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.buffer.as_mut()
    }

    /// Give the storage back
    pub fn release(self) -> B {
        self.buffer
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.buffer.as_mut().fill(0x00);
    }

    /// Turn every pixel on or off
    pub fn fill(&mut self, on: bool) {
        self.buffer.as_mut().fill(if on { 0xFF } else { 0x00 });
    }

    fn width(&self) -> i32 {
        i32::from(self.dimensions.width)
    }

    fn height(&self) -> i32 {
        i32::from(self.dimensions.height)
    }

    /// Locate a logical pixel in the buffer
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        let (px, py) = map_point(x, y, self.width(), self.height(), self.rotation);
        if px < 0 || px >= self.width() || py < 0 || py >= self.height() {
            return None;
        }
        Some(buffer_position(
            px as u32,
            py as u32,
            u32::from(self.dimensions.width),
        ))
    }

    /// Set, clear or flip a single pixel
    ///
    /// Does nothing if the pixel is off-screen.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some((index, mask)) = self.locate(x, y) {
            color.apply(&mut self.buffer.as_mut()[index], mask);
        }
    }

    /// Read a pixel back, `None` if off-screen
    pub fn pixel(&self, x: i32, y: i32) -> Option<bool> {
        self.locate(x, y)
            .map(|(index, mask)| self.buffer.as_ref()[index] & mask != 0)
    }

    /// Draw `len` pixels to the right of `(x, y)`
    ///
    /// Produces the same buffer as `len` calls to [`set_pixel`](Self::set_pixel)
    /// at `(x + i, y)`.
    pub fn draw_fast_hline(&mut self, x: i32, y: i32, len: i32, color: Color) {
        self.draw_run(x, y, len, Axis::Horizontal, color);
    }

    /// Draw `len` pixels downwards from `(x, y)`
    ///
    /// Produces the same buffer as `len` calls to [`set_pixel`](Self::set_pixel)
    /// at `(x, y + i)`.
    pub fn draw_fast_vline(&mut self, x: i32, y: i32, len: i32, color: Color) {
        self.draw_run(x, y, len, Axis::Vertical, color);
    }

    fn draw_run(&mut self, x: i32, y: i32, len: i32, axis: Axis, color: Color) {
        // Clip in logical space so mapping only sees on-screen coordinates
        let logical = self.rotated_dimensions();
        let (width, height) = (i32::from(logical.width), i32::from(logical.height));
        let (x, y, len) = match axis {
            Axis::Horizontal => {
                if y < 0 || y >= height {
                    return;
                }
                let (x, len) = clip(x, len, width);
                (x, y, len)
            }
            Axis::Vertical => {
                if x < 0 || x >= width {
                    return;
                }
                let (y, len) = clip(y, len, height);
                (x, y, len)
            }
        };
        if len <= 0 {
            return;
        }

        let run = map_run(
            x,
            y,
            len,
            axis,
            self.width(),
            self.height(),
            self.rotation,
        );
        match run.axis {
            Axis::Horizontal => self.physical_hline(run.x, run.y, run.len, color),
            Axis::Vertical => self.physical_vline(run.x, run.y, run.len, color),
        }
    }

    /// Horizontal run in physical coordinates: one bit in consecutive bytes
    fn physical_hline(&mut self, x: i32, y: i32, len: i32, color: Color) {
        let width = self.width();
        if y < 0 || y >= self.height() {
            return;
        }

        let (x, len) = clip(x, len, width);
        if len <= 0 {
            return;
        }

        let (start, mask) = buffer_position(x as u32, y as u32, width as u32);
        let row = &mut self.buffer.as_mut()[start..start + len as usize];
        for byte in row {
            color.apply(byte, mask);
        }
    }

    /// Vertical run in physical coordinates: partial leading byte, whole
    /// bytes, partial trailing byte
    fn physical_vline(&mut self, x: i32, y: i32, len: i32, color: Color) {
        if x < 0 || x >= self.width() {
            return;
        }

        let (y, len) = clip(y, len, self.height());
        if len <= 0 {
            return;
        }

        let stride = usize::from(self.dimensions.width);
        let buffer = self.buffer.as_mut();
        let (mut index, _) = buffer_position(x as u32, y as u32, stride as u32);
        let mut remaining = len as usize;

        let offset = (y & 7) as usize;
        if offset != 0 {
            // rows left in this page below the start row
            let span = 8 - offset;
            let mut mask = LEADING_MASK[span];
            if remaining < span {
                mask &= 0xFF >> (span - remaining);
            }
            color.apply(&mut buffer[index], mask);

            if remaining <= span {
                return;
            }
            remaining -= span;
            index += stride;
        }

        while remaining >= 8 {
            color.fill(&mut buffer[index]);
            remaining -= 8;
            index += stride;
        }

        if remaining > 0 {
            color.apply(&mut buffer[index], TRAILING_MASK[remaining]);
        }
    }
}

/// Clip a run starting at `start` with `len` pixels to `0..extent`
fn clip(start: i32, len: i32, extent: i32) -> (i32, i32) {
    let (start, mut len) = if start < 0 {
        (0, len.saturating_add(start))
    } else {
        (start, len)
    };
    if start.saturating_add(len) > extent {
        len = extent - start;
    }
    (start, len)
}
