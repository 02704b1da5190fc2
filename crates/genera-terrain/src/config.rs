//! Immutable terrain configuration and the elevation/moisture derivation.

use genera_noise::{FbmParams, FbmParamsError};
use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::biome::{BiomeTable, ColorWeights};
use crate::blend::ClampBounds;
use crate::gpu::{FbmGpu, TerrainConfigGpu};

/// Errors raised while validating terrain parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TerrainConfigError {
    /// The declared biome count disagrees with the table.
    #[error("config declares {num_biomes} biomes but the table has {table_len}")]
    BiomeCountMismatch {
        /// Declared count.
        num_biomes: i32,
        /// Actual table length.
        table_len: usize,
    },
    /// A scalar that must be strictly positive was not.
    #[error("{field} must be finite and positive, got {value}")]
    NonPositive {
        /// Name of the offending field.
        field: &'static str,
        /// Offending value.
        value: f32,
    },
    /// A scalar was NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// Offending value.
        value: f32,
    },
    /// A color weight was negative or not finite.
    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidColorWeight {
        /// Name of the offending field.
        field: &'static str,
        /// Offending value.
        value: f32,
    },
    /// A generator could not be rebuilt (e.g. with a new seed).
    #[error("invalid {which} generator")]
    Generator {
        /// `"elevation"` or `"moisture"`.
        which: &'static str,
        #[source]
        source: FbmParamsError,
    },
}

/// Unvalidated terrain scalars and generator parameters.
///
/// This is the editable form (presets, UI). Turn it into a [`TerrainConfig`]
/// with [`TerrainConfig::for_table`] before sampling.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    /// How much elevation lightens the final color.
    pub elevation_color_weight: f32,
    /// How much moisture deepens the final color.
    pub moisture_color_weight: f32,
    /// Multiplier from world coordinates to noise coordinates.
    pub global_scalar: f32,
    /// Subtracted from raw elevation before clamping; raises the sea.
    pub sea_level_offset: f32,
    /// Exponent applied to elevation; higher values give flatter lowlands
    /// and sharper peaks.
    pub elevation_distribution: f32,
    /// Added to raw moisture before clamping.
    pub aridness: f32,
    /// Exponent applied to moisture.
    pub moisture_distribution: f32,
    pub elevation_generator: FbmParams,
    pub moisture_generator: FbmParams,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            elevation_color_weight: 0.0,
            moisture_color_weight: 0.0,
            global_scalar: 0.03,
            sea_level_offset: 0.35,
            elevation_distribution: 0.6,
            aridness: 0.1,
            moisture_distribution: 0.9,
            elevation_generator: default_elevation_generator(),
            moisture_generator: default_moisture_generator(),
        }
    }
}

fn default_elevation_generator() -> FbmParams {
    FbmParams::new(11, 0.55, 0.01, 1.0, 0).unwrap_or_default()
}

fn default_moisture_generator() -> FbmParams {
    FbmParams::new(9, 0.6, 0.03, 2.0, 0).unwrap_or_default()
}

impl TerrainParams {
    /// Copy with both generators reseeded.
    pub fn with_seed(self, seed: u32) -> Result<Self, TerrainConfigError> {
        let elevation_generator = self
            .elevation_generator
            .with_seed(seed)
            .map_err(|source| TerrainConfigError::Generator {
                which: "elevation",
                source,
            })?;
        let moisture_generator = self
            .moisture_generator
            .with_seed(seed)
            .map_err(|source| TerrainConfigError::Generator {
                which: "moisture",
                source,
            })?;
        Ok(Self {
            elevation_generator,
            moisture_generator,
            ..self
        })
    }

    fn validate(&self) -> Result<(), TerrainConfigError> {
        let positive = [
            ("global_scalar", self.global_scalar),
            ("elevation_distribution", self.elevation_distribution),
            ("moisture_distribution", self.moisture_distribution),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(TerrainConfigError::NonPositive { field, value });
            }
        }

        let finite = [
            ("sea_level_offset", self.sea_level_offset),
            ("aridness", self.aridness),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(TerrainConfigError::NonFinite { field, value });
            }
        }

        let weights = [
            ("elevation_color_weight", self.elevation_color_weight),
            ("moisture_color_weight", self.moisture_color_weight),
        ];
        for (field, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(TerrainConfigError::InvalidColorWeight { field, value });
            }
        }
        Ok(())
    }
}

/// Validated, read-only terrain configuration shared by every evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainConfig {
    num_biomes: i32,
    params: TerrainParams,
}

impl TerrainConfig {
    /// Validate `params` and pair them with a declared biome count.
    ///
    /// # Errors
    ///
    /// Fails if `num_biomes` differs from `table.len()` or any scalar is out
    /// of range.
    pub fn new(
        num_biomes: i32,
        params: TerrainParams,
        table: &BiomeTable,
    ) -> Result<Self, TerrainConfigError> {
        if usize::try_from(num_biomes).ok() != Some(table.len()) {
            return Err(TerrainConfigError::BiomeCountMismatch {
                num_biomes,
                table_len: table.len(),
            });
        }
        params.validate()?;
        Ok(Self { num_biomes, params })
    }

    /// Validate `params` for use with `table`.
    pub fn for_table(params: TerrainParams, table: &BiomeTable) -> Result<Self, TerrainConfigError> {
        let num_biomes = i32::try_from(table.len()).unwrap_or(i32::MAX);
        Self::new(num_biomes, params, table)
    }

    pub fn num_biomes(&self) -> i32 {
        self.num_biomes
    }

    /// The validated parameters.
    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    pub fn global_scalar(&self) -> f32 {
        self.params.global_scalar
    }

    pub fn sea_level_offset(&self) -> f32 {
        self.params.sea_level_offset
    }

    pub fn elevation_distribution(&self) -> f32 {
        self.params.elevation_distribution
    }

    pub fn aridness(&self) -> f32 {
        self.params.aridness
    }

    pub fn moisture_distribution(&self) -> f32 {
        self.params.moisture_distribution
    }

    pub fn elevation_generator(&self) -> &FbmParams {
        &self.params.elevation_generator
    }

    pub fn moisture_generator(&self) -> &FbmParams {
        &self.params.moisture_generator
    }

    /// Color shading weights.
    pub fn color_weights(&self) -> ColorWeights {
        ColorWeights::new(
            self.params.elevation_color_weight,
            self.params.moisture_color_weight,
        )
    }

    /// Scale a world position into noise space (shared by both generators).
    pub fn world_to_noise(&self, point: DVec2) -> DVec2 {
        point * f64::from(self.params.global_scalar)
    }

    /// `clamp(raw - sea_level_offset, 0, 1) ^ elevation_distribution`.
    pub fn derive_elevation(&self, raw: f64) -> f32 {
        remap(
            raw as f32 - self.params.sea_level_offset,
            self.params.elevation_distribution,
        )
    }

    /// `clamp(raw + aridness, 0, 1) ^ moisture_distribution`.
    pub fn derive_moisture(&self, raw: f64) -> f32 {
        remap(
            raw as f32 + self.params.aridness,
            self.params.moisture_distribution,
        )
    }

    /// Uniform buffer contents.
    pub fn to_gpu(&self) -> TerrainConfigGpu {
        let p = &self.params;
        TerrainConfigGpu {
            num_biomes: self.num_biomes,
            elevation_color_weight: p.elevation_color_weight,
            moisture_color_weight: p.moisture_color_weight,
            global_scalar: p.global_scalar,
            sea_level_offset: p.sea_level_offset,
            elevation_distribution: p.elevation_distribution,
            aridness: p.aridness,
            moisture_distribution: p.moisture_distribution,
            elevation_generator: FbmGpu::from(&p.elevation_generator),
            moisture_generator: FbmGpu::from(&p.moisture_generator),
        }
    }
}

#[inline]
fn remap(shifted: f32, exponent: f32) -> f32 {
    ClampBounds::UNIT.clamp(ClampBounds::UNIT.clamp(shifted).powf(exponent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biome::default_biomes;

    fn table() -> BiomeTable {
        BiomeTable::new(default_biomes()).unwrap()
    }

    #[test]
    fn test_default_params_are_valid() {
        let config = TerrainConfig::for_table(TerrainParams::default(), &table()).unwrap();
        assert_eq!(config.num_biomes(), 18);
        assert_eq!(config.elevation_generator().octaves(), 11);
        assert_eq!(config.moisture_generator().compression(), 2.0);
    }

    #[test]
    fn test_biome_count_must_match() {
        let err = TerrainConfig::new(3, TerrainParams::default(), &table()).unwrap_err();
        assert_eq!(
            err,
            TerrainConfigError::BiomeCountMismatch {
                num_biomes: 3,
                table_len: 18
            }
        );
        assert!(TerrainConfig::new(-1, TerrainParams::default(), &table()).is_err());
    }

    #[test]
    fn test_invalid_scalars_rejected() {
        let table = table();
        let cases = [
            TerrainParams {
                global_scalar: 0.0,
                ..Default::default()
            },
            TerrainParams {
                elevation_distribution: -1.0,
                ..Default::default()
            },
            TerrainParams {
                moisture_distribution: f32::NAN,
                ..Default::default()
            },
            TerrainParams {
                aridness: f32::INFINITY,
                ..Default::default()
            },
            TerrainParams {
                elevation_color_weight: -0.1,
                ..Default::default()
            },
        ];
        for params in cases {
            assert!(
                TerrainConfig::for_table(params, &table).is_err(),
                "accepted invalid params {params:?}"
            );
        }
    }

    #[test]
    fn test_derive_elevation_clamps_then_powers() {
        let params = TerrainParams {
            sea_level_offset: 0.2,
            elevation_distribution: 2.0,
            ..Default::default()
        };
        let config = TerrainConfig::for_table(params, &table()).unwrap();
        assert_eq!(config.derive_elevation(0.1), 0.0);
        assert!((config.derive_elevation(0.7) - 0.25).abs() < 1e-6);
        assert_eq!(config.derive_elevation(1.5), 1.0);
        assert_eq!(config.derive_elevation(f64::NAN), 0.0);
    }

    #[test]
    fn test_derive_moisture_adds_aridness() {
        let params = TerrainParams {
            aridness: 0.25,
            moisture_distribution: 1.0,
            ..Default::default()
        };
        let config = TerrainConfig::for_table(params, &table()).unwrap();
        assert!((config.derive_moisture(0.5) - 0.75).abs() < 1e-6);
        assert_eq!(config.derive_moisture(0.9), 1.0);
        assert_eq!(config.derive_moisture(-0.5), 0.0);
    }

    #[test]
    fn test_derived_values_stay_in_unit_range() {
        let config = TerrainConfig::for_table(TerrainParams::default(), &table()).unwrap();
        for i in -20..=40 {
            let raw = f64::from(i) * 0.05;
            let e = config.derive_elevation(raw);
            let m = config.derive_moisture(raw);
            assert!((0.0..=1.0).contains(&e), "elevation {e} from raw {raw}");
            assert!((0.0..=1.0).contains(&m), "moisture {m} from raw {raw}");
        }
    }

    #[test]
    fn test_world_to_noise_scales_once() {
        let config = TerrainConfig::for_table(TerrainParams::default(), &table()).unwrap();
        let p = config.world_to_noise(DVec2::new(100.0, -50.0));
        let s = f64::from(0.03_f32);
        assert_eq!(p, DVec2::new(100.0 * s, -50.0 * s));
    }

    #[test]
    fn test_with_seed_reseeds_both_generators() {
        let params = TerrainParams::default().with_seed(1234).unwrap();
        assert_eq!(params.elevation_generator.seed(), 1234);
        assert_eq!(params.moisture_generator.seed(), 1234);
        assert!(matches!(
            TerrainParams::default().with_seed(5000),
            Err(TerrainConfigError::Generator {
                which: "elevation",
                ..
            })
        ));
    }

    #[test]
    fn test_gpu_layout_mirrors_config() {
        let config = TerrainConfig::for_table(TerrainParams::default(), &table()).unwrap();
        let gpu = config.to_gpu();
        assert_eq!(gpu.num_biomes, 18);
        assert_eq!(gpu.global_scalar, 0.03);
        assert_eq!(gpu.elevation_generator.octaves, 11);
        assert_eq!(gpu.moisture_generator.octaves, 9);
        assert_eq!(bytemuck::bytes_of(&gpu).len(), 72);
    }

    #[test]
    fn test_params_ron_round_trip() {
        let params = TerrainParams::default().with_seed(7).unwrap();
        let text = ron::to_string(&params).unwrap();
        let back: TerrainParams = ron::from_str(&text).unwrap();
        assert_eq!(back, params);
    }
}
