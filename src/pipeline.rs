//! End-to-end skin-tone analysis
//!
//! Runs sampling, conversion, classification and catalog lookup in order
//! and packages the result. The pipeline holds only configuration, so one
//! instance can serve any number of threads.

use tracing::{debug, warn};

use crate::catalog::PaletteCatalog;
use crate::classification::ToneClassifier;
use crate::color::ColorConverter;
use crate::config::AnalysisConfig;
use crate::sampling::{PixelBuffer, RegionSampler};
use crate::{AnalysisError, AnalysisResult, Result};

/// Configured analysis pipeline
#[derive(Debug, Clone)]
pub struct AnalysisPipeline {
    sampler: RegionSampler,
    converter: ColorConverter,
    classifier: ToneClassifier,
    catalog: PaletteCatalog,
}

impl Default for AnalysisPipeline {
    fn default() -> Self {
        Self::from_parts(AnalysisConfig::default())
    }
}

impl AnalysisPipeline {
    /// Create a pipeline with the reference heuristics
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline from a configuration
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if the configuration fails validation.
    pub fn with_config(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config))
    }

    fn from_parts(config: AnalysisConfig) -> Self {
        Self {
            sampler: RegionSampler::new(config.sampling, config.pixel_filter),
            converter: ColorConverter::new(),
            classifier: ToneClassifier::new(config.classification),
            catalog: PaletteCatalog::new(),
        }
    }

    /// Replace the tone classifier, e.g. to use a custom season table
    pub fn with_classifier(mut self, classifier: ToneClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Analyze a face photo
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InsufficientSample` when every sampled pixel
    /// is rejected; the caller should ask for a clearer photo.
    pub fn analyze(&self, buffer: &PixelBuffer<'_>) -> Result<AnalysisResult> {
        debug!(width = buffer.width(), height = buffer.height(), "starting tone analysis");

        let summary = self.sampler.sample_with_summary(buffer);
        let Some(average_rgb) = summary.average else {
            warn!(examined = summary.examined(), "no reliable skin pixels in sample patches");
            return Err(AnalysisError::InsufficientSample {
                examined: summary.examined(),
                transparent: summary.transparent,
                lip: summary.lip,
                shadow: summary.shadow,
            });
        };

        let hsl = self.converter.rgb_to_hsl(average_rgb);
        let classification = self.classifier.classify_color(average_rgb, hsl);
        let palette = self.catalog.palette_for(&classification.season);
        let guidance = self.catalog.guidance_for(&classification.season);
        let preview_color = palette.preview();

        debug!(
            rgb = %average_rgb,
            %hsl,
            season = %classification.season,
            "tone analysis complete"
        );

        Ok(AnalysisResult {
            classification,
            palette,
            guidance,
            preview_color,
        })
    }
}
