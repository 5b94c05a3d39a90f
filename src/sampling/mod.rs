//! Skin region sampling
//!
//! This module turns a borrowed RGBA buffer into one averaged skin color:
//! it places cheek patches, rejects non-skin pixels and averages the rest.

pub mod buffer;
pub mod filter;
pub mod patch;
pub mod sampler;

pub use buffer::PixelBuffer;
pub use filter::{PixelFilter, PixelVerdict};
pub use patch::Patch;
pub use sampler::{RegionSampler, SampleSummary};
