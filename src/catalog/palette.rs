//! Season → five-color palette table

use serde::{Deserialize, Serialize};

use crate::classification::SeasonLabel;
use crate::color::Rgb;
use crate::constants::catalog::PALETTE_SIZE;

/// Ordered five-color palette for one season
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub colors: [Rgb; PALETTE_SIZE],
}

impl Palette {
    const fn from_packed(packed: [u32; PALETTE_SIZE]) -> Self {
        Self {
            colors: [
                Rgb::from_u32(packed[0]),
                Rgb::from_u32(packed[1]),
                Rgb::from_u32(packed[2]),
                Rgb::from_u32(packed[3]),
                Rgb::from_u32(packed[4]),
            ],
        }
    }

    /// Representative swatch: the first palette entry
    pub fn preview(&self) -> Rgb {
        self.colors[0]
    }

    /// `#RRGGBB` codes in palette order
    pub fn hex_codes(&self) -> Vec<String> {
        self.colors.iter().map(Rgb::to_hex).collect()
    }
}

const SPRING_LIGHT: Palette =
    Palette::from_packed([0xFFD7A8, 0xFFB870, 0xFFC86B, 0xF2A65A, 0xE07A5F]);
const SPRING_WARM_SOFT: Palette =
    Palette::from_packed([0xE8B478, 0xDFA06E, 0xB57E4F, 0xF1C27D, 0xF7D9AE]);
const AUTUMN_WARM_DEEP: Palette =
    Palette::from_packed([0x7B3F00, 0xA75D28, 0xC07D59, 0x8C5A3C, 0x4E342E]);
const SUMMER_COOL_LIGHT: Palette =
    Palette::from_packed([0xCFE8FF, 0xA7C7E7, 0xB5C3D6, 0x9CC9E3, 0x8FAECF]);
const SUMMER_COOL_SOFT: Palette =
    Palette::from_packed([0x9FB3C8, 0x7991A8, 0x6D8AA6, 0x88A2B8, 0xB2C1CD]);
const WINTER_COOL_DEEP: Palette =
    Palette::from_packed([0x2D3A6B, 0x1E2A4A, 0x3F4C85, 0x0F172A, 0x64748B]);
const NEUTRAL_LIGHT: Palette =
    Palette::from_packed([0xF7EDE2, 0xEDE7E3, 0xE1DCD9, 0xF5F5F4, 0xE2E8F0]);
const NEUTRAL_SOFT: Palette =
    Palette::from_packed([0xC7C7C7, 0xB8B8B8, 0xA5A5A5, 0xD1D5DB, 0x94A3B8]);
const NEUTRAL_DEEP: Palette =
    Palette::from_packed([0x3B3B3B, 0x2F2F2F, 0x4B5563, 0x111827, 0x1F2937]);

/// Neutral grays used for any season without a curated palette
pub const DEFAULT_PALETTE: Palette =
    Palette::from_packed([0xE2E8F0, 0xCBD5E1, 0x94A3B8, 0x64748B, 0x475569]);

/// Palette for a season; synthesized labels get [`DEFAULT_PALETTE`]
pub fn palette_for(season: &SeasonLabel) -> Palette {
    match season {
        SeasonLabel::SpringLight => SPRING_LIGHT,
        SeasonLabel::SpringWarmSoft => SPRING_WARM_SOFT,
        SeasonLabel::AutumnWarmDeep => AUTUMN_WARM_DEEP,
        SeasonLabel::SummerCoolLight => SUMMER_COOL_LIGHT,
        SeasonLabel::SummerCoolSoft => SUMMER_COOL_SOFT,
        SeasonLabel::WinterCoolDeep => WINTER_COOL_DEEP,
        SeasonLabel::NeutralLight => NEUTRAL_LIGHT,
        SeasonLabel::NeutralSoft => NEUTRAL_SOFT,
        SeasonLabel::NeutralDeep => NEUTRAL_DEEP,
        SeasonLabel::Synthesized { .. } => DEFAULT_PALETTE,
    }
}
