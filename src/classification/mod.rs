//! Tone classification
//!
//! Maps an HSL skin color to a temperature, a depth and a seasonal label.

pub mod season;
pub mod tone;

pub use season::{SeasonEntry, SeasonLabel, DEFAULT_SEASON_TABLE};
pub use tone::{Depth, Temperature, ToneClassification, ToneClassifier};
