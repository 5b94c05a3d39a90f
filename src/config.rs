//! Configuration structures for the skin-tone analysis pipeline.
//!
//! Every heuristic the pipeline applies is a field here, grouped by stage:
//! patch placement, per-pixel filtering and tone classification. The
//! [`Default`] configuration reproduces the reference behavior exactly.
//!
//! # Configuration Loading
//!
//! ```no_run
//! use skin_season::AnalysisConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = AnalysisConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = AnalysisConfig::default();
//! # Ok::<(), skin_season::AnalysisError>(())
//! ```
//!
//! # Configuration Sections
//!
//! - [`SamplingConfig`]: where patches go and how large they are
//! - [`PixelFilterConfig`]: which pixels are rejected as non-skin
//! - [`ClassificationConfig`]: hue and lightness cusps

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{classification, filtering, sampling};
use crate::{AnalysisError, Result};

/// Complete pipeline configuration.
///
/// Can be serialized to/from JSON for reproducible runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AnalysisConfig {
    /// Patch placement
    pub sampling: SamplingConfig,

    /// Per-pixel rejection rules
    pub pixel_filter: PixelFilterConfig,

    /// Temperature and depth thresholds
    pub classification: ClassificationConfig,
}

/// Patch placement parameters.
///
/// Each anchor is the center of one square patch, expressed as a fraction of
/// image width and height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Patch centers
    pub anchors: Vec<PatchAnchor>,

    /// Patch edge as a fraction of the shorter image dimension
    pub patch_size_ratio: f64,

    /// Minimum patch edge in pixels
    pub min_patch_size: u32,
}

/// Relative patch center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatchAnchor {
    pub x_ratio: f64,
    pub y_ratio: f64,
}

/// Per-pixel rejection thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixelFilterConfig {
    /// Pixels with alpha below this are skipped as background
    pub min_alpha: u8,

    /// Saturated-red rule for lips
    pub lip: LipRule,

    /// Pixels with every channel below this are skipped as hair or shadow
    pub shadow_max_channel: u8,
}

/// A pixel is lip-like when red > `min_red`, green < `max_green` and blue < `max_blue`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LipRule {
    pub min_red: u8,
    pub max_green: u8,
    pub max_blue: u8,
}

/// Tone classification thresholds.
///
/// Hue bounds are exclusive; lightness bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationConfig {
    pub warm_hue_below: u16,
    pub warm_hue_above: u16,
    pub cool_hue_min: u16,
    pub cool_hue_max: u16,
    pub light_min_lightness: u8,
    pub deep_max_lightness: u8,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            anchors: sampling::PATCH_X_RATIOS
                .iter()
                .map(|&x_ratio| PatchAnchor {
                    x_ratio,
                    y_ratio: sampling::PATCH_Y_RATIO,
                })
                .collect(),
            patch_size_ratio: sampling::PATCH_SIZE_RATIO,
            min_patch_size: sampling::MIN_PATCH_SIZE,
        }
    }
}

impl Default for PixelFilterConfig {
    fn default() -> Self {
        Self {
            min_alpha: filtering::MIN_ALPHA,
            lip: LipRule {
                min_red: filtering::LIP_MIN_RED,
                max_green: filtering::LIP_MAX_GREEN,
                max_blue: filtering::LIP_MAX_BLUE,
            },
            shadow_max_channel: filtering::SHADOW_MAX_CHANNEL,
        }
    }
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            warm_hue_below: classification::WARM_HUE_BELOW,
            warm_hue_above: classification::WARM_HUE_ABOVE,
            cool_hue_min: classification::COOL_HUE_MIN,
            cool_hue_max: classification::COOL_HUE_MAX,
            light_min_lightness: classification::LIGHT_MIN_LIGHTNESS,
            deep_max_lightness: classification::DEEP_MAX_LIGHTNESS,
        }
    }
}

impl AnalysisConfig {
    /// Check every section for out-of-range or contradictory values
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        self.sampling.validate()?;
        self.classification.validate()
    }

    /// Parse configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AnalysisError::config("invalid configuration JSON", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AnalysisError::config(format!("cannot read {}", path.display()), e))?;
        Self::from_json_str(&content)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AnalysisError::config("cannot serialize configuration", e))?;
        std::fs::write(path, json)
            .map_err(|e| AnalysisError::config(format!("cannot write {}", path.display()), e))
    }
}

impl SamplingConfig {
    fn validate(&self) -> Result<()> {
        if self.anchors.is_empty() {
            return Err(AnalysisError::invalid_input("sampling.anchors", "[]"));
        }
        for anchor in &self.anchors {
            if !(0.0..=1.0).contains(&anchor.x_ratio) {
                return Err(AnalysisError::invalid_input("sampling.anchors.x_ratio", anchor.x_ratio));
            }
            if !(0.0..=1.0).contains(&anchor.y_ratio) {
                return Err(AnalysisError::invalid_input("sampling.anchors.y_ratio", anchor.y_ratio));
            }
        }
        if !(0.0..=1.0).contains(&self.patch_size_ratio) {
            return Err(AnalysisError::invalid_input(
                "sampling.patch_size_ratio",
                self.patch_size_ratio,
            ));
        }
        if self.min_patch_size == 0 {
            return Err(AnalysisError::invalid_input("sampling.min_patch_size", 0));
        }
        Ok(())
    }
}

impl ClassificationConfig {
    fn validate(&self) -> Result<()> {
        if self.warm_hue_above >= 360 {
            return Err(AnalysisError::invalid_input(
                "classification.warm_hue_above",
                self.warm_hue_above,
            ));
        }
        if self.cool_hue_min >= self.cool_hue_max {
            return Err(AnalysisError::invalid_input(
                "classification.cool_hue_min",
                format!("{} (must be below cool_hue_max {})", self.cool_hue_min, self.cool_hue_max),
            ));
        }
        // Bands must not overlap: warm_below <= cool_min < cool_max <= warm_above
        if self.warm_hue_below > self.cool_hue_min {
            return Err(AnalysisError::invalid_input(
                "classification.warm_hue_below",
                format!(
                    "{} (must not exceed cool_hue_min {})",
                    self.warm_hue_below, self.cool_hue_min
                ),
            ));
        }
        if self.cool_hue_max > self.warm_hue_above {
            return Err(AnalysisError::invalid_input(
                "classification.cool_hue_max",
                format!(
                    "{} (must not exceed warm_hue_above {})",
                    self.cool_hue_max, self.warm_hue_above
                ),
            ));
        }
        if self.light_min_lightness > 100 {
            return Err(AnalysisError::invalid_input(
                "classification.light_min_lightness",
                self.light_min_lightness,
            ));
        }
        if self.deep_max_lightness >= self.light_min_lightness {
            return Err(AnalysisError::invalid_input(
                "classification.deep_max_lightness",
                format!(
                    "{} (must be below light_min_lightness {})",
                    self.deep_max_lightness, self.light_min_lightness
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_heuristics() {
        let config = AnalysisConfig::default();
        assert_eq!(config.sampling.anchors.len(), 2);
        assert_eq!(config.sampling.anchors[0].x_ratio, 0.33);
        assert_eq!(config.sampling.anchors[1].x_ratio, 0.66);
        assert!(config.sampling.anchors.iter().all(|a| a.y_ratio == 0.60));
        assert_eq!(config.sampling.patch_size_ratio, 0.08);
        assert_eq!(config.sampling.min_patch_size, 20);
        assert_eq!(config.pixel_filter.min_alpha, 200);
        assert_eq!(config.pixel_filter.shadow_max_channel, 30);
        assert_eq!(config.classification.cool_hue_min, 210);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = AnalysisConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(AnalysisConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_file_roundtrip() {
        let path = std::env::temp_dir().join(format!(
            "skin_season_config_{}.json",
            std::process::id()
        ));
        let mut config = AnalysisConfig::default();
        config.sampling.min_patch_size = 32;
        config.to_json_file(&path).unwrap();
        let loaded = AnalysisConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = AnalysisConfig::from_json_file(Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(AnalysisError::ConfigError { .. })));
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let result = AnalysisConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(AnalysisError::ConfigError { .. })));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = AnalysisConfig::default();
        config.sampling.anchors.clear();
        assert!(config.validate().is_err());

        let mut config = AnalysisConfig::default();
        config.sampling.anchors[0].x_ratio = 1.5;
        assert!(config.validate().is_err());

        let mut config = AnalysisConfig::default();
        config.sampling.min_patch_size = 0;
        assert!(config.validate().is_err());

        let mut config = AnalysisConfig::default();
        config.classification.cool_hue_min = 300;
        assert!(config.validate().is_err());

        let mut config = AnalysisConfig::default();
        config.classification.deep_max_lightness = 70;
        assert!(matches!(
            config.validate(),
            Err(AnalysisError::InvalidInput { .. })
        ));

        let mut config = AnalysisConfig::default();
        config.classification.light_min_lightness = 101;
        match config.validate() {
            Err(AnalysisError::InvalidInput { parameter, .. }) => {
                assert_eq!(parameter, "classification.light_min_lightness")
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_rejects_overlapping_hue_bands() {
        // Warm band swallowing the whole cool band
        let mut config = AnalysisConfig::default();
        config.classification.warm_hue_below = 359;
        config.classification.cool_hue_min = 10;
        config.classification.cool_hue_max = 20;
        match config.validate() {
            Err(AnalysisError::InvalidInput { parameter, .. }) => {
                assert_eq!(parameter, "classification.warm_hue_below")
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }

        let mut config = AnalysisConfig::default();
        config.classification.cool_hue_max = 340;
        match config.validate() {
            Err(AnalysisError::InvalidInput { parameter, .. }) => {
                assert_eq!(parameter, "classification.cool_hue_max")
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }

        // Touching bands are allowed
        let mut config = AnalysisConfig::default();
        config.classification.warm_hue_below = 210;
        config.classification.cool_hue_max = 330;
        assert!(config.validate().is_ok());
    }
}
