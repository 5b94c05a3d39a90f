//! Image file loading for callers that start from a file on disk
//!
//! The analysis core only ever sees a [`PixelBuffer`](crate::PixelBuffer).
//! This module is a convenience for decoding a photo with the `image` crate
//! and scaling it to the working size used for analysis.
//!
//! Orientation correction is the caller's job; images are used as decoded.

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};
use tracing::debug;

use crate::constants::acquisition::MAX_ANALYSIS_SIDE;
use crate::error::{AnalysisError, Result};

/// Decode an image file into a `DynamicImage`
///
/// The format is guessed from the file contents, falling back to the
/// extension.
///
/// # Errors
///
/// Returns `AnalysisError::ImageLoadError` if the file cannot be opened or decoded.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path).map_err(|e| {
        AnalysisError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;

    let reader = reader.with_guessed_format().map_err(|e| {
        AnalysisError::image_load(format!("Failed to read image header: {}", path.display()), e)
    })?;

    reader.decode().map_err(|e| {
        AnalysisError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })
}

/// Scale an image so its longer side is at most `max_side` and convert to RGBA8
///
/// Images already within bounds are converted without resampling.
pub fn prepare_for_analysis(image: &DynamicImage, max_side: u32) -> RgbaImage {
    let (width, height) = (image.width(), image.height());
    let longest = width.max(height);
    if longest <= max_side || longest == 0 {
        return image.to_rgba8();
    }

    let scale = f64::from(max_side) / f64::from(longest);
    let target_w = ((f64::from(width) * scale).floor() as u32).max(1);
    let target_h = ((f64::from(height) * scale).floor() as u32).max(1);
    debug!(width, height, target_w, target_h, "downscaling for analysis");

    image
        .resize_exact(target_w, target_h, FilterType::Triangle)
        .to_rgba8()
}

/// Load an image file and prepare it at the standard analysis size
pub fn load_for_analysis(path: &Path) -> Result<RgbaImage> {
    let image = load_image(path)?;
    Ok(prepare_for_analysis(&image, MAX_ANALYSIS_SIDE))
}

/// Check if a file extension names a format the `image` crate can decode
pub fn is_supported_extension(ext: &str) -> bool {
    ImageFormat::from_extension(ext)
        .map(|format| format.reading_enabled())
        .unwrap_or(false)
}
