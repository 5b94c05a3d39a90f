//! Season → styling guidance table

use serde::{Deserialize, Serialize};

use crate::classification::SeasonLabel;

/// Styling suggestions for one season
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleGuidance {
    pub top_colors: Vec<String>,
    pub recommended_outfits: Vec<String>,
    pub fabrics: Vec<String>,
    pub message: String,
}

/// Outfit suggestions shared by every season
pub const COMMON_OUTFITS: [&str; 3] = ["Casual smart", "Minimal street", "Office-ready"];

struct GuidanceEntry {
    top_colors: [&'static str; 5],
    fabrics: [&'static str; 2],
    message: &'static str,
}

impl GuidanceEntry {
    fn to_guidance(&self) -> StyleGuidance {
        StyleGuidance {
            top_colors: self.top_colors.iter().map(|s| s.to_string()).collect(),
            recommended_outfits: COMMON_OUTFITS.iter().map(|s| s.to_string()).collect(),
            fabrics: self.fabrics.iter().map(|s| s.to_string()).collect(),
            message: self.message.to_string(),
        }
    }
}

const SPRING_LIGHT: GuidanceEntry = GuidanceEntry {
    top_colors: ["Peach", "Warm beige", "Coral", "Camel", "Soft teal"],
    fabrics: ["Cotton", "Light linen"],
    message: "Airy warm hues make you glow.",
};

const SPRING_WARM_SOFT: GuidanceEntry = GuidanceEntry {
    top_colors: ["Apricot", "Terracotta", "Warm olive", "Honey", "Cream"],
    fabrics: ["Linen", "Chambray"],
    message: "Soft warm earth tones flatter you.",
};

const AUTUMN_WARM_DEEP: GuidanceEntry = GuidanceEntry {
    top_colors: ["Rust", "Olive", "Mustard", "Chocolate", "Teal"],
    fabrics: ["Denim", "Linen"],
    message: "Rich earthy colors complement depth.",
};

const SUMMER_COOL_LIGHT: GuidanceEntry = GuidanceEntry {
    top_colors: ["Powder blue", "Lavender", "Cool pink", "Mint", "Ice gray"],
    fabrics: ["Poplin", "Seersucker"],
    message: "Light cool pastels keep it fresh.",
};

const SUMMER_COOL_SOFT: GuidanceEntry = GuidanceEntry {
    top_colors: ["Dusty blue", "Mauve", "Soft plum", "Steel", "Sage"],
    fabrics: ["Cotton", "Light wool"],
    message: "Soft cool shades add harmony.",
};

const WINTER_COOL_DEEP: GuidanceEntry = GuidanceEntry {
    top_colors: ["Navy", "Charcoal", "Cobalt", "Burgundy", "Black"],
    fabrics: ["Merino", "Sateen"],
    message: "Bold high-contrast colors pop.",
};

const NEUTRAL_LIGHT: GuidanceEntry = GuidanceEntry {
    top_colors: ["Ivory", "Soft taupe", "Blush", "Sage", "Dove gray"],
    fabrics: ["Cotton", "Linen"],
    message: "Soft light neutrals keep you luminous.",
};

const NEUTRAL_SOFT: GuidanceEntry = GuidanceEntry {
    top_colors: ["Mushroom", "Stone", "Muted teal", "Dusty rose", "Slate"],
    fabrics: ["Jersey", "Cotton"],
    message: "Muted mid-tones balance a blended undertone.",
};

const NEUTRAL_DEEP: GuidanceEntry = GuidanceEntry {
    top_colors: ["Espresso", "Charcoal", "Forest green", "Plum", "Ink navy"],
    fabrics: ["Wool", "Denim"],
    message: "Deep grounded neutrals give quiet contrast.",
};

const DEFAULT_GUIDANCE: GuidanceEntry = GuidanceEntry {
    top_colors: ["Soft white", "Stone", "Slate", "Gray blue", "Charcoal"],
    fabrics: ["Cotton", "Linen"],
    message: "Balance comfort with tones that enhance your undertone.",
};

/// Generic guidance used for any season without a curated record
pub fn default_guidance() -> StyleGuidance {
    DEFAULT_GUIDANCE.to_guidance()
}

/// Guidance for a season; synthesized labels get [`default_guidance`]
pub fn guidance_for(season: &SeasonLabel) -> StyleGuidance {
    let entry = match season {
        SeasonLabel::SpringLight => &SPRING_LIGHT,
        SeasonLabel::SpringWarmSoft => &SPRING_WARM_SOFT,
        SeasonLabel::AutumnWarmDeep => &AUTUMN_WARM_DEEP,
        SeasonLabel::SummerCoolLight => &SUMMER_COOL_LIGHT,
        SeasonLabel::SummerCoolSoft => &SUMMER_COOL_SOFT,
        SeasonLabel::WinterCoolDeep => &WINTER_COOL_DEEP,
        SeasonLabel::NeutralLight => &NEUTRAL_LIGHT,
        SeasonLabel::NeutralSoft => &NEUTRAL_SOFT,
        SeasonLabel::NeutralDeep => &NEUTRAL_DEEP,
        SeasonLabel::Synthesized { .. } => &DEFAULT_GUIDANCE,
    };
    entry.to_guidance()
}
