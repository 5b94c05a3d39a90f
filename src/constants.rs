//! Heuristic constants for skin-tone sampling and classification
//!
//! These values define the default behavior of the pipeline. Changing any of
//! them changes which season a given photo lands in, so results are only
//! reproducible while they stay fixed.

/// Patch placement on the pixel grid
///
/// Patches approximate left/right cheek location on a centered, front-facing
/// portrait. No face detection is involved.
pub mod sampling {
    /// Horizontal patch centers as a fraction of image width (left, right cheek)
    pub const PATCH_X_RATIOS: [f64; 2] = [0.33, 0.66];

    /// Vertical patch center as a fraction of image height
    pub const PATCH_Y_RATIO: f64 = 0.60;

    /// Patch edge length as a fraction of the shorter image dimension
    pub const PATCH_SIZE_RATIO: f64 = 0.08;

    /// Smallest allowed patch edge length in pixels
    pub const MIN_PATCH_SIZE: u32 = 20;
}

/// Per-pixel rejection rules applied inside each patch
pub mod filtering {
    /// Pixels with alpha below this are treated as background
    pub const MIN_ALPHA: u8 = 200;

    /// Likely lip: red strictly above this...
    pub const LIP_MIN_RED: u8 = 200;
    /// ...with green strictly below this...
    pub const LIP_MAX_GREEN: u8 = 80;
    /// ...and blue strictly below this
    pub const LIP_MAX_BLUE: u8 = 80;

    /// Likely hair or shadow: every channel strictly below this
    pub const SHADOW_MAX_CHANNEL: u8 = 30;
}

/// Temperature and depth cusps
///
/// All hue comparisons are strict, so the cusp values themselves classify as
/// Neutral.
pub mod classification {
    /// Hue strictly below this is warm
    pub const WARM_HUE_BELOW: u16 = 30;
    /// Hue strictly above this is warm
    pub const WARM_HUE_ABOVE: u16 = 330;
    /// Cool band lower bound (exclusive)
    pub const COOL_HUE_MIN: u16 = 210;
    /// Cool band upper bound (exclusive)
    pub const COOL_HUE_MAX: u16 = 300;

    /// Lightness at or above this is Light
    pub const LIGHT_MIN_LIGHTNESS: u8 = 70;
    /// Lightness at or below this is Deep
    pub const DEEP_MAX_LIGHTNESS: u8 = 30;
}

/// Image acquisition helpers
pub mod acquisition {
    /// Longest side an image is scaled down to before analysis
    pub const MAX_ANALYSIS_SIDE: u32 = 640;
}

/// Catalog shape
pub mod catalog {
    /// Number of colors in every palette
    pub const PALETTE_SIZE: usize = 5;
}
