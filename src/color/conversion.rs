//! RGB ↔ HSL conversion
//!
//! The forward conversion is the standard six-piece hue split evaluated in
//! `f64` and rounded to integer degrees and percentages. It is a pure
//! function, so the same `Rgb` always yields a bit-identical `Hsl`.
//! It does not go through `palette::Hsl::from_color`, whose different
//! operation order lands on the other side of a rounding step for tens of
//! thousands of inputs (e.g. rgb(0, 13, 40) gives hue 221 instead of 220),
//! which would move colors across the classification cusps.
//!
//! The inverse goes through the `palette` crate and is used to check that
//! the integer quantisation keeps colors recoverable.

use palette::{encoding, FromColor, Hsl as PaletteHsl, Srgb};

use super::model::{Hsl, Rgb};
use crate::Result;

/// Converter between 8-bit RGB and integer HSL
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter;

impl ColorConverter {
    /// Create a new color converter
    pub fn new() -> Self {
        Self
    }

    /// Convert RGB (0-255 per channel) to HSL
    ///
    /// # Arguments
    ///
    /// * `rgb` - averaged skin color
    ///
    /// # Returns
    ///
    /// Hue in whole degrees, saturation and lightness in whole percent.
    /// Achromatic input (all channels equal) yields hue 0 and saturation 0.
    /// A hue that rounds up to 360 wraps to 0.
    pub fn rgb_to_hsl(&self, rgb: Rgb) -> Hsl {
        let r = f64::from(rgb.r) / 255.0;
        let g = f64::from(rgb.g) / 255.0;
        let b = f64::from(rgb.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let delta = max - min;
            let s = if l > 0.5 {
                delta / (2.0 - max - min)
            } else {
                delta / (max + min)
            };
            let sector = if max == r {
                (g - b) / delta + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / delta + 2.0
            } else {
                (r - g) / delta + 4.0
            };
            (sector / 6.0, s)
        };

        Hsl::from_rounded(
            (h * 360.0).round() as u16,
            (s * 100.0).round() as u8,
            (l * 100.0).round() as u8,
        )
    }

    /// Convert HSL back to 8-bit RGB
    ///
    /// Because `Hsl` stores whole degrees and percentages, the result can
    /// differ from the color that produced the `Hsl` by a small amount per
    /// channel. Grays round-trip within ±1.
    pub fn hsl_to_rgb(&self, hsl: Hsl) -> Rgb {
        let source = PaletteHsl::<encoding::Srgb, f64>::new(
            f64::from(hsl.hue()),
            f64::from(hsl.saturation()) / 100.0,
            f64::from(hsl.lightness()) / 100.0,
        );
        let srgb: Srgb<u8> = Srgb::<f64>::from_color(source).into_format();
        Rgb::new(srgb.red, srgb.green, srgb.blue)
    }

    /// Convert wide integer channels to HSL, rejecting values outside 0..=255
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` for an out-of-range channel.
    pub fn channels_to_hsl(&self, r: i64, g: i64, b: i64) -> Result<Hsl> {
        Ok(self.rgb_to_hsl(Rgb::try_from_channels(r, g, b)?))
    }
}
