//! Compiled-in palette and styling catalog
//!
//! Both tables are keyed by [`SeasonLabel`] through exhaustive matches, so
//! every label, including synthesized ones, resolves to a non-empty record.

pub mod guidance;
pub mod palette;

pub use guidance::{default_guidance, StyleGuidance};
pub use palette::{Palette, DEFAULT_PALETTE};

use crate::classification::SeasonLabel;

/// Lookup facade over the palette and guidance tables
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteCatalog;

impl PaletteCatalog {
    /// Create a catalog over the compiled-in tables
    pub fn new() -> Self {
        Self
    }

    /// Five-color palette for `season`
    ///
    /// # Example
    ///
    /// ```
    /// use skin_season::{PaletteCatalog, SeasonLabel};
    ///
    /// let palette = PaletteCatalog::new().palette_for(&SeasonLabel::SpringLight);
    /// assert_eq!(palette.preview().to_hex(), "#FFD7A8");
    /// ```
    pub fn palette_for(&self, season: &SeasonLabel) -> Palette {
        palette::palette_for(season)
    }

    /// Styling guidance for `season`
    pub fn guidance_for(&self, season: &SeasonLabel) -> StyleGuidance {
        guidance::guidance_for(season)
    }
}
