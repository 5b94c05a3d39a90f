//! Color value types and color-space conversion
//!
//! `Rgb` and `Hsl` are the values passed between pipeline stages;
//! `ColorConverter` maps between them.

pub mod conversion;
pub mod model;

pub use conversion::ColorConverter;
pub use model::{Hsl, Rgb};
