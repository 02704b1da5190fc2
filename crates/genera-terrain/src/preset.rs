//! Named terrain presets and their on-disk store.
//!
//! A preset bundles every editable terrain value with a seed string and the
//! biome list. Presets are stored one per file as `<preset_id>.ron`.

use std::path::{Path, PathBuf};

use genera_noise::{FbmParams, SEED_RANGE};
use serde::{Deserialize, Serialize};

use crate::biome::{Biome, BiomeTable, BiomeTableError, default_biomes};
use crate::config::{TerrainConfig, TerrainConfigError, TerrainParams};
use crate::sampler::TerrainSampler;

const PRESET_EXTENSION: &str = "ron";

/// Errors from building, loading, or saving presets.
#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    /// Reading a preset file or directory failed.
    #[error("failed to read preset {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Writing a preset file or creating the directory failed.
    #[error("failed to write preset {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A preset file was not valid RON for a preset.
    #[error("failed to parse preset {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    /// Serializing a preset failed.
    #[error("failed to serialize preset: {0}")]
    Serialize(#[source] ron::Error),
    /// No preset with the given id exists in the store.
    #[error("no preset with id {0:?}")]
    NotFound(String),
    /// The id cannot be used as a file name.
    #[error("invalid preset id {0:?}")]
    InvalidId(String),
    /// The biome list is invalid.
    #[error("invalid biome table: {0}")]
    Biomes(#[from] BiomeTableError),
    /// The terrain scalars are invalid.
    #[error("invalid terrain parameters: {0}")]
    Config(#[from] TerrainConfigError),
}

/// Deterministically reduce a seed string to a generator seed in
/// `[0, SEED_RANGE)`.
pub fn seed_from_str(seed: &str) -> u32 {
    let hash = seed.chars().fold(83_761_u32, |acc, c| {
        acc.wrapping_shl(5).wrapping_add(acc).wrapping_add(c as u32)
    });
    hash % SEED_RANGE
}

/// A complete, named set of terrain settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerrainPreset {
    /// Display name.
    pub preset_name: String,
    /// Stable identifier; also the file stem.
    pub preset_id: String,
    /// Seed string; hashed with [`seed_from_str`] and applied to both generators.
    pub seed: String,
    pub global_scalar: f32,
    pub sea_level_offset: f32,
    pub elevation_distribution: f32,
    pub aridness: f32,
    pub moisture_distribution: f32,
    pub elevation_fbm: FbmParams,
    pub moisture_fbm: FbmParams,
    pub elevation_color_weight: f32,
    pub moisture_color_weight: f32,
    pub biomes: Vec<Biome>,
}

impl Default for TerrainPreset {
    fn default() -> Self {
        let params = TerrainParams::default();
        Self {
            preset_name: "Default Settings".to_string(),
            preset_id: "defaultSettings".to_string(),
            seed: "puppy".to_string(),
            global_scalar: params.global_scalar,
            sea_level_offset: params.sea_level_offset,
            elevation_distribution: params.elevation_distribution,
            aridness: params.aridness,
            moisture_distribution: params.moisture_distribution,
            elevation_fbm: params.elevation_generator,
            moisture_fbm: params.moisture_generator,
            elevation_color_weight: params.elevation_color_weight,
            moisture_color_weight: params.moisture_color_weight,
            biomes: default_biomes(),
        }
    }
}

impl TerrainPreset {
    /// Generator seed derived from the seed string.
    pub fn seed_value(&self) -> u32 {
        seed_from_str(&self.seed)
    }

    /// Terrain parameters with both generators reseeded from the seed string.
    pub fn params(&self) -> Result<TerrainParams, TerrainConfigError> {
        TerrainParams {
            elevation_color_weight: self.elevation_color_weight,
            moisture_color_weight: self.moisture_color_weight,
            global_scalar: self.global_scalar,
            sea_level_offset: self.sea_level_offset,
            elevation_distribution: self.elevation_distribution,
            aridness: self.aridness,
            moisture_distribution: self.moisture_distribution,
            elevation_generator: self.elevation_fbm,
            moisture_generator: self.moisture_fbm,
        }
        .with_seed(self.seed_value())
    }

    /// Validate everything, including table coverage, and build the
    /// configuration and table.
    pub fn build(&self) -> Result<(TerrainConfig, BiomeTable), PresetError> {
        let table = BiomeTable::new(self.biomes.clone())?;
        table.verify_coverage()?;
        let config = TerrainConfig::for_table(self.params()?, &table)?;
        Ok((config, table))
    }

    /// Build a ready-to-use sampler.
    pub fn sampler(&self) -> Result<TerrainSampler, PresetError> {
        let (config, table) = self.build()?;
        Ok(TerrainSampler::new(config, table)?)
    }
}

/// A directory of preset files.
#[derive(Clone, Debug)]
pub struct PresetStore {
    dir: PathBuf,
}

impl PresetStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path for a preset id.
    pub fn path_for(&self, preset_id: &str) -> Result<PathBuf, PresetError> {
        let valid = !preset_id.is_empty()
            && !preset_id.starts_with('.')
            && !preset_id.contains(['/', '\\']);
        if !valid {
            return Err(PresetError::InvalidId(preset_id.to_string()));
        }
        Ok(self.dir.join(format!("{preset_id}.{PRESET_EXTENSION}")))
    }

    /// Write a preset, creating the directory if needed. Returns the file path.
    pub fn save(&self, preset: &TerrainPreset) -> Result<PathBuf, PresetError> {
        let path = self.path_for(&preset.preset_id)?;
        std::fs::create_dir_all(&self.dir).map_err(|source| PresetError::Write {
            path: self.dir.clone(),
            source,
        })?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(preset, pretty).map_err(PresetError::Serialize)?;
        std::fs::write(&path, serialized).map_err(|source| PresetError::Write {
            path: path.clone(),
            source,
        })?;
        log::info!("Saved preset {:?} to {}", preset.preset_name, path.display());
        Ok(path)
    }

    /// Load one preset by id.
    pub fn load(&self, preset_id: &str) -> Result<TerrainPreset, PresetError> {
        let path = self.path_for(preset_id)?;
        if !path.exists() {
            return Err(PresetError::NotFound(preset_id.to_string()));
        }
        read_preset(&path)
    }

    /// Load every valid preset in the directory, sorted by name.
    ///
    /// Files that fail to parse or validate are skipped with a warning. A
    /// missing directory yields an empty list.
    pub fn load_all(&self) -> Result<Vec<TerrainPreset>, PresetError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let entries = std::fs::read_dir(&self.dir).map_err(|source| PresetError::Read {
            path: self.dir.clone(),
            source,
        })?;

        let mut presets = Vec::new();
        for entry in entries {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(err) => {
                    log::warn!("Skipping unreadable entry in {}: {err}", self.dir.display());
                    continue;
                }
            };
            if path.extension().and_then(|e| e.to_str()) != Some(PRESET_EXTENSION) {
                continue;
            }
            match read_preset(&path).and_then(|p| p.build().map(|_| p)) {
                Ok(preset) => presets.push(preset),
                Err(err) => log::warn!("Skipping preset {}: {err}", path.display()),
            }
        }
        presets.sort_by(|a, b| a.preset_name.cmp(&b.preset_name));
        log::debug!("Loaded {} presets from {}", presets.len(), self.dir.display());
        Ok(presets)
    }

    /// Make sure the directory and the default preset file exist, then
    /// return the default preset as stored.
    pub fn ensure_default(&self) -> Result<TerrainPreset, PresetError> {
        let default = TerrainPreset::default();
        let path = self.path_for(&default.preset_id)?;
        if path.exists() {
            return read_preset(&path);
        }
        self.save(&default)?;
        log::info!("Created default preset at {}", path.display());
        Ok(default)
    }
}

fn read_preset(path: &Path) -> Result<TerrainPreset, PresetError> {
    let contents = std::fs::read_to_string(path).map_err(|source| PresetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&contents).map_err(|source| PresetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
