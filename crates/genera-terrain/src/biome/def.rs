//! Biome definition: the occupancy range and color of one biome entry.

use serde::{Deserialize, Serialize};

use super::{BiomeTableError, BiomeType};

/// One biome entry in a [`BiomeTable`](super::BiomeTable).
///
/// Several entries may share a [`BiomeType`] (e.g. grassland in two elevation
/// bands); the table position, not the type, identifies an entry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Biome {
    /// Kind tag for this entry.
    pub biome_type: BiomeType,
    /// Core color in linear RGB, each component in `[0, 1]`.
    pub color: [f32; 3],
    /// Elevation (0-1) above which this biome sits.
    pub min_elevation: f32,
    /// Elevation (0-1) below which this biome sits.
    pub max_elevation: f32,
    /// Highest moisture (0-1) this biome claims; wetter samples belong to
    /// another biome of the band.
    pub max_moisture: f32,
    /// Width of the transition zone centered on each boundary of this biome.
    pub blend_range: f32,
}

impl Biome {
    /// Create a biome entry.
    pub fn new(
        biome_type: BiomeType,
        color: [f32; 3],
        min_elevation: f32,
        max_elevation: f32,
        max_moisture: f32,
        blend_range: f32,
    ) -> Self {
        Self {
            biome_type,
            color,
            min_elevation,
            max_elevation,
            max_moisture,
            blend_range,
        }
    }

    /// Whether this biome claims the sample outright (ignoring blend zones).
    pub fn claims(&self, elevation: f32, moisture: f32) -> bool {
        elevation >= self.min_elevation
            && elevation <= self.max_elevation
            && moisture <= self.max_moisture
    }

    pub(crate) fn validate(&self, index: usize) -> Result<(), BiomeTableError> {
        let unit = |v: f32| v.is_finite() && (0.0..=1.0).contains(&v);

        if !unit(self.min_elevation) || !unit(self.max_elevation) || !unit(self.max_moisture) {
            return Err(BiomeTableError::OutOfRange {
                index,
                biome_type: self.biome_type,
            });
        }
        if self.min_elevation > self.max_elevation {
            return Err(BiomeTableError::InvertedElevation {
                index,
                min: self.min_elevation,
                max: self.max_elevation,
            });
        }
        if !self.blend_range.is_finite() || self.blend_range < 0.0 {
            return Err(BiomeTableError::InvalidBlendRange {
                index,
                blend_range: self.blend_range,
            });
        }
        if !self.color.iter().all(|c| unit(*c)) {
            return Err(BiomeTableError::InvalidColor {
                index,
                color: self.color,
            });
        }
        Ok(())
    }
}
