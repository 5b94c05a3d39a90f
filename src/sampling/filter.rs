//! Per-pixel skin filtering
//!
//! Each pixel is judged on its own; rules are checked in a fixed order and
//! the first match decides the verdict.

use crate::config::PixelFilterConfig;

/// Outcome of judging one pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelVerdict {
    /// Counts toward the skin average
    Retained,
    /// Alpha below threshold; background or padding
    Transparent,
    /// Saturated red, most likely lips
    LikelyLip,
    /// Very dark, most likely hair or shadow
    LikelyShadow,
}

/// Applies the configured rejection rules to RGBA pixels
#[derive(Debug, Clone)]
pub struct PixelFilter {
    config: PixelFilterConfig,
}

impl Default for PixelFilter {
    fn default() -> Self {
        Self::new(PixelFilterConfig::default())
    }
}

impl PixelFilter {
    /// Create a filter with the given thresholds
    pub fn new(config: PixelFilterConfig) -> Self {
        Self { config }
    }

    /// Judge a single `[r, g, b, a]` pixel
    pub fn evaluate(&self, [r, g, b, a]: [u8; 4]) -> PixelVerdict {
        let lip = &self.config.lip;
        let dark = self.config.shadow_max_channel;

        if a < self.config.min_alpha {
            PixelVerdict::Transparent
        } else if r > lip.min_red && g < lip.max_green && b < lip.max_blue {
            PixelVerdict::LikelyLip
        } else if r < dark && g < dark && b < dark {
            PixelVerdict::LikelyShadow
        } else {
            PixelVerdict::Retained
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_threshold() {
        let filter = PixelFilter::default();
        assert_eq!(filter.evaluate([200, 150, 120, 199]), PixelVerdict::Transparent);
        assert_eq!(filter.evaluate([200, 150, 120, 200]), PixelVerdict::Retained);
        assert_eq!(filter.evaluate([200, 150, 120, 0]), PixelVerdict::Transparent);
    }

    #[test]
    fn test_lip_rule_is_strict() {
        let filter = PixelFilter::default();
        assert_eq!(filter.evaluate([201, 79, 79, 255]), PixelVerdict::LikelyLip);
        assert_eq!(filter.evaluate([200, 40, 40, 255]), PixelVerdict::Retained);
        assert_eq!(filter.evaluate([230, 80, 40, 255]), PixelVerdict::Retained);
        assert_eq!(filter.evaluate([230, 40, 80, 255]), PixelVerdict::Retained);
    }

    #[test]
    fn test_shadow_rule_is_strict() {
        let filter = PixelFilter::default();
        assert_eq!(filter.evaluate([29, 29, 29, 255]), PixelVerdict::LikelyShadow);
        assert_eq!(filter.evaluate([0, 0, 0, 255]), PixelVerdict::LikelyShadow);
        assert_eq!(filter.evaluate([30, 10, 10, 255]), PixelVerdict::Retained);
    }

    #[test]
    fn test_transparency_checked_first() {
        let filter = PixelFilter::default();
        assert_eq!(filter.evaluate([250, 10, 10, 100]), PixelVerdict::Transparent);
        assert_eq!(filter.evaluate([5, 5, 5, 100]), PixelVerdict::Transparent);
    }
}
