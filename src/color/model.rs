//! Color value types shared by every pipeline stage

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{AnalysisError, Result};

/// 8-bit RGB color
///
/// Within the pipeline this is always a derived value (an average over many
/// pixels or a catalog entry), never a single raw pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }

    /// Create a color from wide integer channels, rejecting anything outside 0..=255
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` naming the first offending channel.
    pub fn try_from_channels(r: i64, g: i64, b: i64) -> Result<Self> {
        let channel = |name: &str, value: i64| {
            u8::try_from(value).map_err(|_| AnalysisError::invalid_input(name, value))
        };
        Ok(Self {
            r: channel("red", r)?,
            g: channel("green", g)?,
            b: channel("blue", b)?,
        })
    }

    /// Parse a hexadecimal color string (`#RRGGBB` or `RRGGBB`)
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if the string is not six hex digits.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AnalysisError::invalid_input("hex", hex));
        }
        let packed =
            u32::from_str_radix(digits, 16).map_err(|_| AnalysisError::invalid_input("hex", hex))?;
        Ok(Self::from_u32(packed))
    }

    /// Upper-case `#RRGGBB` representation
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// CSS functional notation, e.g. `rgb(255, 215, 168)`
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// HSL color with integer components
///
/// Hue is in degrees `[0, 360)`, saturation and lightness are percentages
/// `[0, 100]`. The ranges are enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "HslParts")]
pub struct Hsl {
    h: u16,
    s: u8,
    l: u8,
}

#[derive(Deserialize)]
struct HslParts {
    h: u16,
    s: u8,
    l: u8,
}

impl TryFrom<HslParts> for Hsl {
    type Error = AnalysisError;

    fn try_from(parts: HslParts) -> Result<Self> {
        Hsl::new(parts.h, parts.s, parts.l)
    }
}

impl Hsl {
    /// Create an HSL value, validating every component
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if hue is 360 or more, or if
    /// saturation or lightness exceed 100.
    pub fn new(h: u16, s: u8, l: u8) -> Result<Self> {
        if h >= 360 {
            return Err(AnalysisError::invalid_input("hue", h));
        }
        if s > 100 {
            return Err(AnalysisError::invalid_input("saturation", s));
        }
        if l > 100 {
            return Err(AnalysisError::invalid_input("lightness", l));
        }
        Ok(Self { h, s, l })
    }

    /// Build from freshly rounded components: hue wraps at 360, S and L cap at 100
    pub(crate) fn from_rounded(h: u16, s: u8, l: u8) -> Self {
        Self {
            h: h % 360,
            s: s.min(100),
            l: l.min(100),
        }
    }

    /// Hue in degrees
    pub fn hue(&self) -> u16 {
        self.h
    }

    /// Saturation in percent
    pub fn saturation(&self) -> u8 {
        self.s
    }

    /// Lightness in percent
    pub fn lightness(&self) -> u8 {
        self.l
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u32_unpacks_channels() {
        assert_eq!(Rgb::from_u32(0xFFD7A8), Rgb::new(0xFF, 0xD7, 0xA8));
        assert_eq!(Rgb::from_u32(0x000000), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(Rgb::new(255, 0, 0).to_hex(), "#FF0000");
        assert_eq!(Rgb::new(0x2D, 0x3A, 0x6B).to_string(), "#2D3A6B");
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Rgb::from_hex("#E07A5F").unwrap(), Rgb::new(0xE0, 0x7A, 0x5F));
        assert_eq!(Rgb::from_hex("e07a5f").unwrap(), Rgb::new(0xE0, 0x7A, 0x5F));
    }

    #[test]
    fn test_hex_parsing_invalid() {
        assert!(Rgb::from_hex("#FF").is_err());
        assert!(Rgb::from_hex("#GGGGGG").is_err());
        assert!(Rgb::from_hex("#+12345").is_err());
    }

    #[test]
    fn test_css_notation() {
        assert_eq!(Rgb::new(255, 215, 168).css(), "rgb(255, 215, 168)");
    }

    #[test]
    fn test_channel_range_enforced() {
        assert_eq!(Rgb::try_from_channels(0, 128, 255).unwrap(), Rgb::new(0, 128, 255));
        match Rgb::try_from_channels(10, 256, 0) {
            Err(AnalysisError::InvalidInput { parameter, value }) => {
                assert_eq!(parameter, "green");
                assert_eq!(value, "256");
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
        assert!(Rgb::try_from_channels(-1, 0, 0).is_err());
    }

    #[test]
    fn test_hsl_ranges_enforced() {
        assert!(Hsl::new(359, 100, 100).is_ok());
        assert!(Hsl::new(360, 0, 0).is_err());
        assert!(Hsl::new(0, 101, 0).is_err());
        assert!(Hsl::new(0, 0, 101).is_err());
    }

    #[test]
    fn test_hsl_deserialize_validates() {
        let ok: Hsl = serde_json::from_str(r#"{"h":26,"s":55,"l":73}"#).unwrap();
        assert_eq!((ok.hue(), ok.saturation(), ok.lightness()), (26, 55, 73));

        let bad = serde_json::from_str::<Hsl>(r#"{"h":400,"s":55,"l":73}"#);
        assert!(bad.is_err());
    }
}
