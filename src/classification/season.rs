//! Season labels and the (temperature, depth) → season table

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::tone::{Depth, Temperature};
use crate::AnalysisError;

/// Seasonal color category
///
/// Nine curated labels plus a synthesized label for any
/// (temperature, depth) pair the season table does not cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SeasonLabel {
    SpringLight,
    SpringWarmSoft,
    AutumnWarmDeep,
    SummerCoolLight,
    SummerCoolSoft,
    WinterCoolDeep,
    NeutralLight,
    NeutralSoft,
    NeutralDeep,
    /// Fallback named "<Temperature> <Depth>", e.g. "Warm Medium"
    Synthesized {
        temperature: Temperature,
        depth: Depth,
    },
}

/// One row of a season table
pub type SeasonEntry = ((Temperature, Depth), SeasonLabel);

/// Reference season table
///
/// `Warm/Medium` and `Cool/Medium` reuse the soft spring and summer labels
/// instead of getting their own names.
pub const DEFAULT_SEASON_TABLE: [SeasonEntry; 9] = [
    ((Temperature::Warm, Depth::Light), SeasonLabel::SpringLight),
    ((Temperature::Warm, Depth::Medium), SeasonLabel::SpringWarmSoft),
    ((Temperature::Warm, Depth::Deep), SeasonLabel::AutumnWarmDeep),
    ((Temperature::Cool, Depth::Light), SeasonLabel::SummerCoolLight),
    ((Temperature::Cool, Depth::Medium), SeasonLabel::SummerCoolSoft),
    ((Temperature::Cool, Depth::Deep), SeasonLabel::WinterCoolDeep),
    ((Temperature::Neutral, Depth::Light), SeasonLabel::NeutralLight),
    ((Temperature::Neutral, Depth::Medium), SeasonLabel::NeutralSoft),
    ((Temperature::Neutral, Depth::Deep), SeasonLabel::NeutralDeep),
];

impl SeasonLabel {
    /// All curated labels, in catalog order
    pub const CURATED: [SeasonLabel; 9] = [
        SeasonLabel::SpringLight,
        SeasonLabel::SpringWarmSoft,
        SeasonLabel::AutumnWarmDeep,
        SeasonLabel::SummerCoolLight,
        SeasonLabel::SummerCoolSoft,
        SeasonLabel::WinterCoolDeep,
        SeasonLabel::NeutralLight,
        SeasonLabel::NeutralSoft,
        SeasonLabel::NeutralDeep,
    ];

    /// Look up a pair in `table`, synthesizing a label on a miss
    pub fn lookup(table: &[SeasonEntry], temperature: Temperature, depth: Depth) -> Self {
        table
            .iter()
            .find(|(key, _)| *key == (temperature, depth))
            .map(|(_, label)| *label)
            .unwrap_or(SeasonLabel::Synthesized { temperature, depth })
    }

    /// Look up a pair in the reference table
    pub fn for_tone(temperature: Temperature, depth: Depth) -> Self {
        Self::lookup(&DEFAULT_SEASON_TABLE, temperature, depth)
    }

    /// True for the nine named seasons, false for synthesized fallbacks
    pub fn is_curated(&self) -> bool {
        !matches!(self, SeasonLabel::Synthesized { .. })
    }

    /// Display name of a curated label
    fn curated_name(&self) -> Option<&'static str> {
        let name = match self {
            SeasonLabel::SpringLight => "Spring Light",
            SeasonLabel::SpringWarmSoft => "Spring Warm Soft",
            SeasonLabel::AutumnWarmDeep => "Autumn Warm Deep",
            SeasonLabel::SummerCoolLight => "Summer Cool Light",
            SeasonLabel::SummerCoolSoft => "Summer Cool Soft",
            SeasonLabel::WinterCoolDeep => "Winter Cool Deep",
            SeasonLabel::NeutralLight => "Neutral Light",
            SeasonLabel::NeutralSoft => "Neutral Soft",
            SeasonLabel::NeutralDeep => "Neutral Deep",
            SeasonLabel::Synthesized { .. } => return None,
        };
        Some(name)
    }
}

impl fmt::Display for SeasonLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeasonLabel::Synthesized { temperature, depth } => {
                write!(f, "{} {}", temperature, depth)
            }
            curated => f.write_str(curated.curated_name().unwrap_or_default()),
        }
    }
}

impl FromStr for SeasonLabel {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(label) = Self::CURATED
            .iter()
            .find(|label| label.curated_name() == Some(s))
        {
            return Ok(*label);
        }
        let mut words = s.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some(temperature), Some(depth), None) => Ok(SeasonLabel::Synthesized {
                temperature: temperature.parse()?,
                depth: depth.parse()?,
            }),
            _ => Err(AnalysisError::invalid_input("season", s)),
        }
    }
}

impl TryFrom<String> for SeasonLabel {
    type Error = AnalysisError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SeasonLabel> for String {
    fn from(label: SeasonLabel) -> Self {
        label.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_table_covers_every_pair() {
        for temperature in [Temperature::Warm, Temperature::Cool, Temperature::Neutral] {
            for depth in [Depth::Light, Depth::Medium, Depth::Deep] {
                assert!(SeasonLabel::for_tone(temperature, depth).is_curated());
            }
        }
    }

    #[test]
    fn test_medium_pairs_reuse_soft_labels() {
        assert_eq!(
            SeasonLabel::for_tone(Temperature::Warm, Depth::Medium),
            SeasonLabel::SpringWarmSoft
        );
        assert_eq!(
            SeasonLabel::for_tone(Temperature::Cool, Depth::Medium),
            SeasonLabel::SummerCoolSoft
        );
    }

    #[test]
    fn test_missing_pair_is_synthesized() {
        let partial = &DEFAULT_SEASON_TABLE[..1];
        let label = SeasonLabel::lookup(partial, Temperature::Warm, Depth::Medium);
        assert_eq!(
            label,
            SeasonLabel::Synthesized {
                temperature: Temperature::Warm,
                depth: Depth::Medium
            }
        );
        assert_eq!(label.to_string(), "Warm Medium");
        assert!(!label.is_curated());
    }

    #[test]
    fn test_display_and_parse() {
        for label in SeasonLabel::CURATED {
            assert_eq!(label.to_string().parse::<SeasonLabel>().unwrap(), label);
        }
        assert_eq!(SeasonLabel::WinterCoolDeep.to_string(), "Winter Cool Deep");
        assert_eq!(
            "Cool Light".parse::<SeasonLabel>().unwrap(),
            SeasonLabel::Synthesized {
                temperature: Temperature::Cool,
                depth: Depth::Light
            }
        );
        assert!("Autumn".parse::<SeasonLabel>().is_err());
        assert!("Hot Medium".parse::<SeasonLabel>().is_err());
    }

    #[test]
    fn test_serializes_as_display_name() {
        let json = serde_json::to_string(&SeasonLabel::SpringLight).unwrap();
        assert_eq!(json, "\"Spring Light\"");
        let back: SeasonLabel = serde_json::from_str("\"Neutral Soft\"").unwrap();
        assert_eq!(back, SeasonLabel::NeutralSoft);
    }
}
