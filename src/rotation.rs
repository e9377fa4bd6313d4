//! Coordinate rotation utilities
//!
//! This module maps logical (rotated) coordinates onto the physical frame
//! buffer of the SSD1306.
//!
//! The controller stores pixels in vertical bytes: each byte covers one column
//! of an 8-row page, with the top row in bit 0. Rotation is applied to the
//! point first; the resulting physical coordinate then selects a byte and a
//! bit within it.
//!
//! ## Rotation Modes
//!
//! - **Rotate0**: Native orientation
//! - **Rotate90**: 90° clockwise, width and height swapped
//! - **Rotate180**: 180° rotation, origin at bottom-right
//! - **Rotate270**: 270° clockwise (or 90° counter-clockwise)
//!
//! ## Example
//!
//! ```
//! use ssd1306::{rotation::{buffer_position, map_point}, Rotation};
//!
//! // On a 128x64 panel rotated by 90°, the logical origin is the top-right column
//! let (x, y) = map_point(0, 0, 128, 64, Rotation::Rotate90);
//! assert_eq!((x, y), (127, 0));
//!
//! // Pixel (127, 0) is the last byte of the first page, bit 0
//! let (index, mask) = buffer_position(127, 0, 128);
//! assert_eq!(index, 127);
//! assert_eq!(mask, 0x01);
//! ```

use crate::config::Rotation;

/// Orientation of a run of pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Axis {
    /// Along a page, one bit per byte
    Horizontal,
    /// Across pages, up to eight bits per byte
    Vertical,
}

impl Axis {
    fn swapped(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// A straight run of pixels in physical coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Run {
    /// Physical start column
    pub x: i32,
    /// Physical start row
    pub y: i32,
    /// Number of pixels, may be zero or negative before clipping
    pub len: i32,
    /// Direction of the run in the physical buffer
    pub axis: Axis,
}

/// Map a logical point to physical coordinates
///
/// `width` and `height` are the native (unrotated) panel dimensions. The result
/// is not bounds-checked.
///
/// # Example
///
/// ```
/// use ssd1306::{rotation::map_point, Rotation};
///
/// assert_eq!(map_point(0, 0, 128, 64, Rotation::Rotate180), (127, 63));
/// assert_eq!(map_point(0, 0, 128, 64, Rotation::Rotate270), (0, 63));
/// ```
pub fn map_point(x: i32, y: i32, width: i32, height: i32, rotation: Rotation) -> (i32, i32) {
    match rotation {
        Rotation::Rotate0 => (x, y),
        Rotation::Rotate90 => (flip(y, width), x),
        Rotation::Rotate180 => (flip(x, width), flip(y, height)),
        Rotation::Rotate270 => (y, flip(x, height)),
    }
}

/// `extent - v - 1`, saturating so far out-of-range input stays out of range
fn flip(v: i32, extent: i32) -> i32 {
    extent.saturating_sub(v).saturating_sub(1)
}

/// Map a logical run to a physical run
///
/// The start point is rotated like [`map_point`]. Under 90° and 270° the axis
/// swaps. When rotation reverses the run direction, the start is moved back by
/// `len - 1` so the run still extends towards increasing physical coordinates
/// and covers exactly the pixels of the logical run.
///
/// The arithmetic saturates, so the result is only exact for runs already
/// clipped to the logical panel, as [`FrameBuffer`](crate::FrameBuffer) does.
pub fn map_run(
    x: i32,
    y: i32,
    len: i32,
    axis: Axis,
    width: i32,
    height: i32,
    rotation: Rotation,
) -> Run {
    let (px, py) = map_point(x, y, width, height, rotation);
    let back = len.saturating_sub(1);
    let (px, py) = match (rotation, axis) {
        (Rotation::Rotate0, _)
        | (Rotation::Rotate90, Axis::Horizontal)
        | (Rotation::Rotate270, Axis::Vertical) => (px, py),
        (Rotation::Rotate90, Axis::Vertical) | (Rotation::Rotate180, Axis::Horizontal) => {
            (px.saturating_sub(back), py)
        }
        (Rotation::Rotate180, Axis::Vertical) | (Rotation::Rotate270, Axis::Horizontal) => {
            (px, py.saturating_sub(back))
        }
    };
    let axis = if rotation.is_transposed() {
        axis.swapped()
    } else {
        axis
    };
    Run {
        x: px,
        y: py,
        len,
        axis,
    }
}

/// Get buffer index and bit mask of a physical pixel
///
/// Byte `x + (y / 8) * width` holds column `x` of page `y / 8`; the row within
/// the page selects bit `y & 7`.
pub fn buffer_position(x: u32, y: u32, width: u32) -> (usize, u8) {
    let index = (x + (y / 8) * width) as usize;
    let mask = 1u8 << (y & 7);
    (index, mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate0_identity() {
        assert_eq!(map_point(5, 9, 128, 64, Rotation::Rotate0), (5, 9));
    }

    #[test]
    fn test_rotate90() {
        // (x, y) -> (W - y - 1, x)
        assert_eq!(map_point(3, 10, 128, 64, Rotation::Rotate90), (117, 3));
    }

    #[test]
    fn test_rotate180() {
        assert_eq!(map_point(3, 10, 128, 64, Rotation::Rotate180), (124, 53));
    }

    #[test]
    fn test_rotate270() {
        // (x, y) -> (y, H - x - 1)
        assert_eq!(map_point(3, 10, 128, 64, Rotation::Rotate270), (10, 60));
    }

    #[test]
    fn test_buffer_position() {
        assert_eq!(buffer_position(0, 0, 128), (0, 0x01));
        assert_eq!(buffer_position(0, 7, 128), (0, 0x80));
        assert_eq!(buffer_position(0, 8, 128), (128, 0x01));
        assert_eq!(buffer_position(127, 63, 128), (1023, 0x80));
    }

    #[test]
    fn test_run_rotate180_horizontal_shifts_start() {
        // logical x 10..=13 on row 0 -> physical x 114..=117 on row 63
        let run = map_run(10, 0, 4, Axis::Horizontal, 128, 64, Rotation::Rotate180);
        assert_eq!(
            run,
            Run {
                x: 114,
                y: 63,
                len: 4,
                axis: Axis::Horizontal
            }
        );
    }

    #[test]
    fn test_run_transposed_swaps_axis() {
        let run = map_run(0, 0, 5, Axis::Horizontal, 128, 64, Rotation::Rotate90);
        assert_eq!(run.axis, Axis::Vertical);
        assert_eq!((run.x, run.y), (127, 0));

        let run = map_run(0, 0, 5, Axis::Horizontal, 128, 64, Rotation::Rotate270);
        assert_eq!(run.axis, Axis::Vertical);
        assert_eq!((run.x, run.y), (0, 59));

        let run = map_run(0, 0, 5, Axis::Vertical, 128, 64, Rotation::Rotate90);
        assert_eq!(run.axis, Axis::Horizontal);
        assert_eq!((run.x, run.y), (123, 0));
    }
}
