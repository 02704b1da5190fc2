//! Map renderers: biome colors, elevation and moisture fields.

use std::fmt;
use std::str::FromStr;

use super::image::{DebugImage, to_rgba8};
use crate::blend::clamped_mix;
use crate::sampler::{SamplePoint, TerrainSampler};
use crate::viewport::Viewport;

const DRY: [f32; 3] = [0.93, 0.86, 0.70];
const WET: [f32; 3] = [0.05, 0.25, 0.75];

/// Which field a debug map shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DebugLayer {
    /// Final shaded biome colors.
    Biome,
    /// Elevation as a grayscale ramp.
    Elevation,
    /// Moisture from sand to deep blue.
    Moisture,
}

impl DebugLayer {
    pub const ALL: [DebugLayer; 3] = [DebugLayer::Biome, DebugLayer::Elevation, DebugLayer::Moisture];

    pub fn name(self) -> &'static str {
        match self {
            DebugLayer::Biome => "biome",
            DebugLayer::Elevation => "elevation",
            DebugLayer::Moisture => "moisture",
        }
    }

    /// Pixel color for one sample.
    pub fn color(self, sample: &SamplePoint) -> [u8; 4] {
        match self {
            DebugLayer::Biome => to_rgba8(sample.color),
            DebugLayer::Elevation => to_rgba8([sample.elevation; 3]),
            DebugLayer::Moisture => to_rgba8(clamped_mix(DRY, WET, sample.moisture)),
        }
    }
}

impl fmt::Display for DebugLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognised layer name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown debug layer {0:?} (expected biome, elevation or moisture)")]
pub struct UnknownLayer(pub String);

impl FromStr for DebugLayer {
    type Err = UnknownLayer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DebugLayer::ALL
            .into_iter()
            .find(|layer| layer.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownLayer(s.to_string()))
    }
}

/// Render already-computed samples laid out row-major over `viewport`.
///
/// Missing samples (a short slice) leave their pixels black.
pub fn render_samples(samples: &[SamplePoint], viewport: &Viewport, layer: DebugLayer) -> DebugImage {
    let mut image = DebugImage::new(viewport.width, viewport.height);
    for (pixel, sample) in image.pixels.chunks_exact_mut(4).zip(samples) {
        pixel.copy_from_slice(&layer.color(sample));
    }
    image
}

/// Sample `viewport` and render one layer.
pub fn render_layer(sampler: &TerrainSampler, viewport: &Viewport, layer: DebugLayer) -> DebugImage {
    let samples = sampler.sample_grid(viewport);
    render_samples(&samples, viewport, layer)
}

/// Biome color map of `viewport`.
pub fn render_biome_map(sampler: &TerrainSampler, viewport: &Viewport) -> DebugImage {
    render_layer(sampler, viewport, DebugLayer::Biome)
}

/// Grayscale elevation map of `viewport`: black at 0, white at 1.
pub fn render_elevation_map(sampler: &TerrainSampler, viewport: &Viewport) -> DebugImage {
    render_layer(sampler, viewport, DebugLayer::Elevation)
}

/// Moisture map of `viewport`.
pub fn render_moisture_map(sampler: &TerrainSampler, viewport: &Viewport) -> DebugImage {
    render_layer(sampler, viewport, DebugLayer::Moisture)
}
