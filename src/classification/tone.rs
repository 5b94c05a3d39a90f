//! Temperature and depth classification
//!
//! Temperature comes from hue, depth from lightness. Hue comparisons are
//! strict, so the cusp values 30°, 210°, 300° and 330° are all Neutral.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::season::{SeasonEntry, SeasonLabel, DEFAULT_SEASON_TABLE};
use crate::color::{Hsl, Rgb};
use crate::config::ClassificationConfig;
use crate::AnalysisError;

/// Perceptual undertone derived from hue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Temperature {
    Warm,
    Cool,
    Neutral,
}

/// Perceptual depth derived from lightness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Depth {
    Light,
    Medium,
    Deep,
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Temperature::Warm => "Warm",
            Temperature::Cool => "Cool",
            Temperature::Neutral => "Neutral",
        })
    }
}

impl FromStr for Temperature {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Warm" => Ok(Temperature::Warm),
            "Cool" => Ok(Temperature::Cool),
            "Neutral" => Ok(Temperature::Neutral),
            _ => Err(AnalysisError::invalid_input("temperature", s)),
        }
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Depth::Light => "Light",
            Depth::Medium => "Medium",
            Depth::Deep => "Deep",
        })
    }
}

impl FromStr for Depth {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Light" => Ok(Depth::Light),
            "Medium" => Ok(Depth::Medium),
            "Deep" => Ok(Depth::Deep),
            _ => Err(AnalysisError::invalid_input("depth", s)),
        }
    }
}

/// Full classification of an averaged skin color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneClassification {
    pub average_rgb: Rgb,
    pub hsl: Hsl,
    pub temperature: Temperature,
    pub depth: Depth,
    pub season: SeasonLabel,
}

/// Maps HSL to temperature, depth and season
#[derive(Debug, Clone)]
pub struct ToneClassifier {
    thresholds: ClassificationConfig,
    season_table: Vec<SeasonEntry>,
}

impl Default for ToneClassifier {
    fn default() -> Self {
        Self::new(ClassificationConfig::default())
    }
}

impl ToneClassifier {
    /// Create a classifier using the reference season table
    pub fn new(thresholds: ClassificationConfig) -> Self {
        Self {
            thresholds,
            season_table: DEFAULT_SEASON_TABLE.to_vec(),
        }
    }

    /// Replace the season table
    ///
    /// Pairs missing from `table` classify to a synthesized label.
    pub fn with_season_table(mut self, table: Vec<SeasonEntry>) -> Self {
        self.season_table = table;
        self
    }

    /// Classify undertone from hue
    ///
    /// # Arguments
    ///
    /// * `hsl` - color to classify; only the hue is read
    ///
    /// # Returns
    ///
    /// `Warm` outside the warm cusps, `Cool` strictly inside the cool band,
    /// `Neutral` for everything else including the cusps themselves.
    ///
    /// # Example
    ///
    /// ```
    /// use skin_season::{Hsl, Temperature, ToneClassifier};
    ///
    /// let classifier = ToneClassifier::default();
    /// let hsl = Hsl::new(30, 50, 50)?;
    /// assert_eq!(classifier.temperature(hsl), Temperature::Neutral);
    /// # Ok::<(), skin_season::AnalysisError>(())
    /// ```
    pub fn temperature(&self, hsl: Hsl) -> Temperature {
        let t = &self.thresholds;
        let hue = hsl.hue();
        if hue < t.warm_hue_below || hue > t.warm_hue_above {
            Temperature::Warm
        } else if hue > t.cool_hue_min && hue < t.cool_hue_max {
            Temperature::Cool
        } else {
            Temperature::Neutral
        }
    }

    /// Classify depth from lightness; both lightness cusps are inclusive
    pub fn depth(&self, hsl: Hsl) -> Depth {
        let lightness = hsl.lightness();
        if lightness >= self.thresholds.light_min_lightness {
            Depth::Light
        } else if lightness <= self.thresholds.deep_max_lightness {
            Depth::Deep
        } else {
            Depth::Medium
        }
    }

    /// Season for a tone pair, synthesized when the table has no row for it
    pub fn season(&self, temperature: Temperature, depth: Depth) -> SeasonLabel {
        SeasonLabel::lookup(&self.season_table, temperature, depth)
    }

    /// Classify an HSL value; never fails
    pub fn classify(&self, hsl: Hsl) -> (Temperature, Depth, SeasonLabel) {
        let temperature = self.temperature(hsl);
        let depth = self.depth(hsl);
        let season = self.season(temperature, depth);
        debug!(%hsl, %temperature, %depth, %season, "classified tone");
        (temperature, depth, season)
    }

    /// Classify and package together with the color it came from
    pub fn classify_color(&self, average_rgb: Rgb, hsl: Hsl) -> ToneClassification {
        let (temperature, depth, season) = self.classify(hsl);
        ToneClassification {
            average_rgb,
            hsl,
            temperature,
            depth,
            season,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hue(h: u16) -> Hsl {
        Hsl::new(h, 50, 50).unwrap()
    }

    fn lightness(l: u8) -> Hsl {
        Hsl::new(20, 50, l).unwrap()
    }

    #[test]
    fn test_temperature_bands() {
        let classifier = ToneClassifier::default();
        assert_eq!(classifier.temperature(hue(0)), Temperature::Warm);
        assert_eq!(classifier.temperature(hue(29)), Temperature::Warm);
        assert_eq!(classifier.temperature(hue(331)), Temperature::Warm);
        assert_eq!(classifier.temperature(hue(359)), Temperature::Warm);
        assert_eq!(classifier.temperature(hue(211)), Temperature::Cool);
        assert_eq!(classifier.temperature(hue(299)), Temperature::Cool);
        assert_eq!(classifier.temperature(hue(120)), Temperature::Neutral);
        assert_eq!(classifier.temperature(hue(315)), Temperature::Neutral);
    }

    #[test]
    fn test_temperature_cusps_are_neutral() {
        let classifier = ToneClassifier::default();
        for cusp in [30, 210, 300, 330] {
            assert_eq!(
                classifier.temperature(hue(cusp)),
                Temperature::Neutral,
                "hue {} must be neutral",
                cusp
            );
        }
    }

    #[test]
    fn test_depth_boundaries() {
        let classifier = ToneClassifier::default();
        assert_eq!(classifier.depth(lightness(70)), Depth::Light);
        assert_eq!(classifier.depth(lightness(100)), Depth::Light);
        assert_eq!(classifier.depth(lightness(30)), Depth::Deep);
        assert_eq!(classifier.depth(lightness(0)), Depth::Deep);
        for l in 31..=69 {
            assert_eq!(classifier.depth(lightness(l)), Depth::Medium);
        }
    }

    #[test]
    fn test_classify_reference_colors() {
        let classifier = ToneClassifier::default();
        assert_eq!(
            classifier.classify(Hsl::new(26, 50, 73).unwrap()),
            (Temperature::Warm, Depth::Light, SeasonLabel::SpringLight)
        );
        assert_eq!(
            classifier.classify(Hsl::new(228, 38, 25).unwrap()),
            (Temperature::Cool, Depth::Deep, SeasonLabel::WinterCoolDeep)
        );
        assert_eq!(
            classifier.classify(Hsl::new(23, 42, 63).unwrap()),
            (Temperature::Warm, Depth::Medium, SeasonLabel::SpringWarmSoft)
        );
    }

    #[test]
    fn test_custom_table_falls_back_to_synthesized_label() {
        let classifier = ToneClassifier::default().with_season_table(Vec::new());
        let (_, _, season) = classifier.classify(Hsl::new(23, 42, 63).unwrap());
        assert_eq!(season.to_string(), "Warm Medium");
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = ClassificationConfig {
            light_min_lightness: 60,
            ..ClassificationConfig::default()
        };
        let classifier = ToneClassifier::new(thresholds);
        assert_eq!(classifier.depth(lightness(63)), Depth::Light);
    }

    #[test]
    fn test_names_parse_back() {
        for t in [Temperature::Warm, Temperature::Cool, Temperature::Neutral] {
            assert_eq!(t.to_string().parse::<Temperature>().unwrap(), t);
        }
        for d in [Depth::Light, Depth::Medium, Depth::Deep] {
            assert_eq!(d.to_string().parse::<Depth>().unwrap(), d);
        }
        assert!("warm".parse::<Temperature>().is_err());
    }
}
