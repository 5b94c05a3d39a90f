//! Square sample patch placement
//!
//! Patches sit at fixed proportional positions; there is no face detection.

use crate::config::SamplingConfig;

/// A square sample region, already clamped to the image
///
/// `width`/`height` equal the nominal patch size unless the image itself is
/// smaller than one patch, in which case the patch covers the whole axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Patch {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Patch {
    /// Number of pixels covered
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Edge length of every patch for an image of the given size
pub fn patch_size(width: u32, height: u32, config: &SamplingConfig) -> u32 {
    let shorter = f64::from(width.min(height));
    let scaled = (shorter * config.patch_size_ratio).floor() as u32;
    scaled.max(config.min_patch_size)
}

/// Place one patch per configured anchor
///
/// Each patch is centered on its anchor, then shifted so it lies fully
/// inside the image.
pub fn place_patches(width: u32, height: u32, config: &SamplingConfig) -> Vec<Patch> {
    let size = patch_size(width, height, config);
    let half = size / 2;

    config
        .anchors
        .iter()
        .map(|anchor| {
            let cx = (f64::from(width) * anchor.x_ratio).floor() as u32;
            let cy = (f64::from(height) * anchor.y_ratio).floor() as u32;
            let x = clamp_origin(cx, half, size, width);
            let y = clamp_origin(cy, half, size, height);
            Patch {
                x,
                y,
                width: size.min(width - x),
                height: size.min(height - y),
            }
        })
        .collect()
}

fn clamp_origin(center: u32, half: u32, size: u32, extent: u32) -> u32 {
    center
        .saturating_sub(half)
        .min(extent.saturating_sub(size))
}
