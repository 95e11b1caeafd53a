//! In-memory RGB frame buffer the renderer draws into.
//!
//! [`Bitmap`] implements the `embedded-graphics` [`DrawTarget`] trait, so
//! every primitive, font and clipping adapter from that crate can draw into
//! it. The transport reads the finished frame through
//! [`Bitmap::as_bytes()`].

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;

use embedded_graphics::{pixelcolor::Rgb888, prelude::*};

use crate::error::DisplayError;

/// Bytes per pixel in the frame buffer (R, G, B).
pub const BYTES_PER_PIXEL: usize = 3;

/// Fixed-size RGB888 frame buffer, row-major, top-left origin.
///
/// # Example
///
/// ```
/// use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::{PrimitiveStyle, Rectangle}};
/// use surfacekit_display::Bitmap;
///
/// let mut bitmap = Bitmap::new(16, 8).unwrap();
/// Rectangle::new(Point::new(2, 2), Size::new(4, 4))
///     .into_styled(PrimitiveStyle::with_fill(Rgb888::RED))
///     .draw(&mut bitmap)
///     .ok();
/// assert_eq!(bitmap.pixel(3, 3), Some(Rgb888::RED));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Allocate a black frame of `width` × `height` pixels.
    ///
    /// Returns [`DisplayError::InvalidGeometry`] if either side is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, DisplayError> {
        if width == 0 || height == 0 {
            return Err(DisplayError::InvalidGeometry);
        }
        Ok(Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGB888 bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Colour at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb888> {
        let idx = self.offset(Point::new(x, y))?;
        Some(Rgb888::new(
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
        ))
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Rgb888) {
        for px in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&[color.r(), color.g(), color.b()]);
        }
    }

    fn offset(&self, point: Point) -> Option<usize> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        let (x, y) = (point.x as u32, point.y as u32);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }
}

impl OriginDimensions for Bitmap {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Bitmap {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            // Out-of-frame pixels are dropped, as on a hardware framebuffer.
            if let Some(idx) = self.offset(point) {
                self.pixels[idx] = color.r();
                self.pixels[idx + 1] = color.g();
                self.pixels[idx + 2] = color.b();
            }
        }
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_zero_dimensions() {
        assert_eq!(Bitmap::new(0, 10), Err(DisplayError::InvalidGeometry));
        assert_eq!(Bitmap::new(10, 0), Err(DisplayError::InvalidGeometry));
    }

    #[test]
    fn new_frame_is_black() {
        let b = Bitmap::new(4, 2).unwrap();
        assert_eq!(b.as_bytes().len(), 4 * 2 * 3);
        assert!(b.as_bytes().iter().all(|&v| v == 0));
        assert_eq!(b.size(), Size::new(4, 2));
    }

    #[test]
    fn pixel_outside_frame_is_none() {
        let b = Bitmap::new(4, 2).unwrap();
        assert_eq!(b.pixel(-1, 0), None);
        assert_eq!(b.pixel(4, 0), None);
        assert_eq!(b.pixel(0, 2), None);
        assert_eq!(b.pixel(3, 1), Some(Rgb888::BLACK));
    }

    #[test]
    fn draw_iter_drops_out_of_frame_pixels() {
        let mut b = Bitmap::new(4, 2).unwrap();
        b.draw_iter([
            Pixel(Point::new(1, 1), Rgb888::GREEN),
            Pixel(Point::new(9, 9), Rgb888::RED),
            Pixel(Point::new(-3, 0), Rgb888::RED),
        ])
        .unwrap();
        assert_eq!(b.pixel(1, 1), Some(Rgb888::GREEN));
        assert_eq!(b.pixel(0, 0), Some(Rgb888::BLACK));
    }

    #[test]
    fn fill_sets_all_pixels() {
        let mut b = Bitmap::new(3, 3).unwrap();
        b.fill(Rgb888::new(1, 2, 3));
        assert_eq!(b.as_bytes()[..3], [1, 2, 3]);
        assert_eq!(b.pixel(2, 2), Some(Rgb888::new(1, 2, 3)));
    }
}
