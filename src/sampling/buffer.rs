//! Borrowed RGBA pixel buffer

use image::RgbaImage;

use crate::{AnalysisError, Result};

/// Number of bytes per RGBA pixel
pub const CHANNELS: usize = 4;

/// Read-only view over `width × height` RGBA pixels (8 bits per channel)
///
/// The buffer borrows the caller's bytes for its lifetime, so the pipeline
/// can neither mutate nor keep the image beyond a call.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> PixelBuffer<'a> {
    /// Wrap a row-major RGBA byte slice
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if either dimension is zero or
    /// the slice length is not `width * height * 4`.
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Result<Self> {
        if width == 0 {
            return Err(AnalysisError::invalid_input("width", width));
        }
        if height == 0 {
            return Err(AnalysisError::invalid_input("height", height));
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or_else(|| AnalysisError::invalid_input("dimensions", format!("{width}x{height}")))?;
        if data.len() != expected {
            return Err(AnalysisError::invalid_input(
                "buffer length",
                format!("{} (expected {} for {}x{} RGBA)", data.len(), expected, width, height),
            ));
        }
        Ok(Self { data, width, height })
    }

    /// Borrow a decoded `image` RGBA buffer
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` for an empty image.
    pub fn from_rgba_image(image: &'a RgbaImage) -> Result<Self> {
        Self::new(image.as_raw(), image.width(), image.height())
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA channels of the pixel at `(x, y)`, or `None` outside the buffer
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * CHANNELS;
        let px = self.data.get(offset..offset + CHANNELS)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// RGBA pixels of row `y` between columns `x0` (inclusive) and `x1` (exclusive)
    ///
    /// Columns are clipped to the buffer; rows outside the buffer are empty.
    pub fn row_span(&self, y: u32, x0: u32, x1: u32) -> impl Iterator<Item = [u8; 4]> + 'a {
        let data: &'a [u8] = self.data;
        let x1 = x1.min(self.width);
        let span = if y < self.height && x0 < x1 {
            let row = y as usize * self.width as usize;
            &data[(row + x0 as usize) * CHANNELS..(row + x1 as usize) * CHANNELS]
        } else {
            &data[..0]
        };
        span.chunks_exact(CHANNELS).map(|px| [px[0], px[1], px[2], px[3]])
    }
}
