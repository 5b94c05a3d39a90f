//! Skin color estimation from cheek patches
//!
//! Places the configured patches, drops pixels that look like background,
//! lips or hair, and averages everything that survives into a single color.

use tracing::debug;

use super::buffer::PixelBuffer;
use super::filter::{PixelFilter, PixelVerdict};
use super::patch::{place_patches, Patch};
use crate::color::Rgb;
use crate::config::{PixelFilterConfig, SamplingConfig};

/// Pixel accounting for one sampling pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SampleSummary {
    /// Rounded mean of retained pixels, `None` when nothing was retained
    pub average: Option<Rgb>,
    pub retained: usize,
    pub transparent: usize,
    pub lip: usize,
    pub shadow: usize,
}

impl SampleSummary {
    /// Total pixels examined across all patches
    pub fn examined(&self) -> usize {
        self.retained + self.transparent + self.lip + self.shadow
    }
}

#[derive(Default)]
struct ChannelSums {
    r: u64,
    g: u64,
    b: u64,
}

/// Region sampler implementing fixed-proportion patch sampling
#[derive(Debug, Clone)]
pub struct RegionSampler {
    sampling: SamplingConfig,
    filter: PixelFilter,
}

impl Default for RegionSampler {
    fn default() -> Self {
        Self::new(SamplingConfig::default(), PixelFilterConfig::default())
    }
}

impl RegionSampler {
    /// Create a sampler with explicit placement and filter settings
    pub fn new(sampling: SamplingConfig, pixel_filter: PixelFilterConfig) -> Self {
        Self {
            sampling,
            filter: PixelFilter::new(pixel_filter),
        }
    }

    /// Patches this sampler would read for the given buffer
    pub fn patches(&self, buffer: &PixelBuffer<'_>) -> Vec<Patch> {
        place_patches(buffer.width(), buffer.height(), &self.sampling)
    }

    /// Average skin color, or `None` if no pixel survives filtering
    pub fn sample(&self, buffer: &PixelBuffer<'_>) -> Option<Rgb> {
        self.sample_with_summary(buffer).average
    }

    /// Average skin color together with per-verdict pixel counts
    ///
    /// Overlapping patches are read independently, so shared pixels count
    /// once per patch.
    pub fn sample_with_summary(&self, buffer: &PixelBuffer<'_>) -> SampleSummary {
        let mut summary = SampleSummary::default();
        let mut sums = ChannelSums::default();

        for patch in self.patches(buffer) {
            debug!(
                x = patch.x,
                y = patch.y,
                width = patch.width,
                height = patch.height,
                "sampling patch"
            );
            for y in patch.y..patch.y + patch.height {
                for pixel in buffer.row_span(y, patch.x, patch.x + patch.width) {
                    match self.filter.evaluate(pixel) {
                        PixelVerdict::Retained => {
                            sums.r += u64::from(pixel[0]);
                            sums.g += u64::from(pixel[1]);
                            sums.b += u64::from(pixel[2]);
                            summary.retained += 1;
                        }
                        PixelVerdict::Transparent => summary.transparent += 1,
                        PixelVerdict::LikelyLip => summary.lip += 1,
                        PixelVerdict::LikelyShadow => summary.shadow += 1,
                    }
                }
            }
        }

        summary.average = rounded_mean(&sums, summary.retained);
        debug!(
            retained = summary.retained,
            transparent = summary.transparent,
            lip = summary.lip,
            shadow = summary.shadow,
            average = ?summary.average,
            "skin sample complete"
        );
        summary
    }
}

/// Per-channel mean rounded half up
fn rounded_mean(sums: &ChannelSums, count: usize) -> Option<Rgb> {
    if count == 0 {
        return None;
    }
    let n = count as u64;
    let mean = |sum: u64| ((sum + n / 2) / n).min(255) as u8;
    Some(Rgb::new(mean(sums.r), mean(sums.g), mean(sums.b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
        rgba.repeat((width * height) as usize)
    }

    #[test]
    fn test_transparent_buffer_has_no_sample() {
        let data = uniform(100, 100, [200, 150, 120, 0]);
        let buffer = PixelBuffer::new(&data, 100, 100).unwrap();
        let summary = RegionSampler::default().sample_with_summary(&buffer);
        assert_eq!(summary.average, None);
        assert_eq!(summary.transparent, 800);
        assert_eq!(summary.examined(), 800);
    }

    #[test]
    fn test_uniform_skin_returns_exact_color() {
        let data = uniform(100, 100, [200, 150, 120, 255]);
        let buffer = PixelBuffer::new(&data, 100, 100).unwrap();
        let sampler = RegionSampler::default();
        assert_eq!(sampler.sample(&buffer), Some(Rgb::new(200, 150, 120)));
        assert_eq!(sampler.sample_with_summary(&buffer).retained, 800);
    }

    #[test]
    fn test_lips_and_shadow_are_excluded_from_average() {
        // Skin everywhere, lip red in the left patch's top rows, hair black
        // in the right patch's top rows.
        let (w, h) = (100u32, 100u32);
        let mut data = uniform(w, h, [210, 160, 130, 255]);
        for y in 50..55u32 {
            for x in 23..43u32 {
                let i = ((y * w + x) * 4) as usize;
                data[i..i + 4].copy_from_slice(&[220, 40, 50, 255]);
            }
            for x in 56..76u32 {
                let i = ((y * w + x) * 4) as usize;
                data[i..i + 4].copy_from_slice(&[10, 10, 12, 255]);
            }
        }
        let buffer = PixelBuffer::new(&data, w, h).unwrap();
        let summary = RegionSampler::default().sample_with_summary(&buffer);
        assert_eq!(summary.lip, 100);
        assert_eq!(summary.shadow, 100);
        assert_eq!(summary.retained, 600);
        assert_eq!(summary.average, Some(Rgb::new(210, 160, 130)));
    }

    #[test]
    fn test_average_rounds_half_up() {
        // Left patch one color, right patch another; mean lands on .5
        let (w, h) = (100u32, 100u32);
        let mut data = uniform(w, h, [100, 100, 100, 255]);
        for y in 0..h {
            for x in 50..w {
                let i = ((y * w + x) * 4) as usize;
                data[i..i + 4].copy_from_slice(&[101, 102, 103, 255]);
            }
        }
        let buffer = PixelBuffer::new(&data, w, h).unwrap();
        let average = RegionSampler::default().sample(&buffer);
        // r: 100.5 -> 101, g: 101, b: 101.5 -> 102
        assert_eq!(average, Some(Rgb::new(101, 101, 102)));
    }

    #[test]
    fn test_tiny_image_is_sampled_whole() {
        let data = uniform(4, 4, [180, 140, 120, 255]);
        let buffer = PixelBuffer::new(&data, 4, 4).unwrap();
        let summary = RegionSampler::default().sample_with_summary(&buffer);
        assert_eq!(summary.retained, 32);
        assert_eq!(summary.average, Some(Rgb::new(180, 140, 120)));
    }
}
