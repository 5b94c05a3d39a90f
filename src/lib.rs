//! # Skin Season
//!
//! A Rust crate for estimating skin tone from a face photo and matching it to
//! a seasonal color palette.
//!
//! The analysis is a deterministic heuristic:
//! - Sample two cheek patches at fixed proportions of the image
//! - Reject transparent, lip-like and hair/shadow-like pixels
//! - Average the remaining pixels and convert to HSL
//! - Classify temperature (hue) and depth (lightness) into a season
//! - Look up the season's palette and styling guidance
//!
//! No face detection is performed and no image is stored or transmitted.
//!
//! ## Example
//!
//! ```rust
//! use skin_season::{analyze, PixelBuffer, SeasonLabel};
//!
//! let pixels = [220u8, 180, 150, 255].repeat(100 * 100);
//! let buffer = PixelBuffer::new(&pixels, 100, 100)?;
//! let result = analyze(&buffer)?;
//!
//! assert_eq!(result.classification.season, SeasonLabel::SpringLight);
//! println!("Preview: {}", result.preview_color.css());
//! # Ok::<(), skin_season::AnalysisError>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod classification;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod image_loader;
pub mod pipeline;
pub mod sampling;

pub use catalog::{Palette, PaletteCatalog, StyleGuidance};
pub use classification::{Depth, SeasonLabel, Temperature, ToneClassification, ToneClassifier};
pub use color::{ColorConverter, Hsl, Rgb};
pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
pub use pipeline::AnalysisPipeline;
pub use sampling::{PixelBuffer, RegionSampler};

/// Complete analysis result: tone classification plus matching catalog entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Averaged skin color, its HSL form, temperature, depth and season
    pub classification: ToneClassification,
    /// Five-color palette for the season
    pub palette: Palette,
    /// Styling suggestions for the season
    pub guidance: StyleGuidance,
    /// First palette color, used as a display swatch
    pub preview_color: Rgb,
}

/// Analyze a face photo with the default heuristics
///
/// This is the main entry point for skin-tone analysis.
///
/// # Errors
///
/// Returns `AnalysisError::InsufficientSample` if no pixel in the sample
/// patches looks like skin.
pub fn analyze(buffer: &PixelBuffer<'_>) -> Result<AnalysisResult> {
    AnalysisPipeline::new().analyze(buffer)
}

/// Analyze a raw row-major RGBA byte slice
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` for zero dimensions or a slice whose
/// length is not `width * height * 4`, and `AnalysisError::InsufficientSample`
/// as for [`analyze`].
pub fn analyze_rgba(data: &[u8], width: u32, height: u32) -> Result<AnalysisResult> {
    analyze(&PixelBuffer::new(data, width, height)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_result_serialization() {
        let pixels = [40u8, 50, 90, 255].repeat(100 * 100);
        let result = analyze_rgba(&pixels, 100, 100).unwrap();

        let json = serde_json::to_string(&result).unwrap();
        let deserialized: AnalysisResult = serde_json::from_str(&json).unwrap();

        assert_eq!(result, deserialized);
        assert!(json.contains("\"Winter Cool Deep\""));
    }

    #[test]
    fn test_analyze_rgba_rejects_bad_dimensions() {
        let pixels = [220u8, 180, 150, 255].repeat(10);
        assert!(matches!(
            analyze_rgba(&pixels, 0, 10),
            Err(AnalysisError::InvalidInput { .. })
        ));
        assert!(matches!(
            analyze_rgba(&pixels, 5, 5),
            Err(AnalysisError::InvalidInput { .. })
        ));
    }
}
