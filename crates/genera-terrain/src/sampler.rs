//! Per-point terrain evaluation and parallel grid generation.

use genera_noise::FbmSampler;
use glam::DVec2;
use rayon::prelude::*;

use crate::biome::BiomeTable;
use crate::chunk::{Chunk, ChunkMesh};
use crate::config::{TerrainConfig, TerrainConfigError};
use crate::gpu::GridVertex;
use crate::viewport::Viewport;

/// Everything computed for one world position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePoint {
    pub position: DVec2,
    /// Derived elevation in `[0, 1]`.
    pub elevation: f32,
    /// Derived moisture in `[0, 1]`.
    pub moisture: f32,
    /// Final shaded color.
    pub color: [f32; 3],
    /// Table index of the dominant biome.
    pub biome: usize,
}

/// Evaluates terrain for a fixed configuration and biome table.
///
/// Holds no mutable state; share it by reference across threads.
pub struct TerrainSampler {
    config: TerrainConfig,
    table: BiomeTable,
    elevation: FbmSampler,
    moisture: FbmSampler,
}

impl TerrainSampler {
    /// Pair a configuration with the table it was validated against.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainConfigError::BiomeCountMismatch`] if the config was
    /// built for a table of a different length.
    pub fn new(config: TerrainConfig, table: BiomeTable) -> Result<Self, TerrainConfigError> {
        if usize::try_from(config.num_biomes()).ok() != Some(table.len()) {
            return Err(TerrainConfigError::BiomeCountMismatch {
                num_biomes: config.num_biomes(),
                table_len: table.len(),
            });
        }
        log::debug!(
            "terrain sampler ready: {} biomes, elevation seed {}, moisture seed {}",
            table.len(),
            config.elevation_generator().seed(),
            config.moisture_generator().seed()
        );
        Ok(Self {
            elevation: FbmSampler::new(*config.elevation_generator()),
            moisture: FbmSampler::new(*config.moisture_generator()),
            config,
            table,
        })
    }

    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    pub fn table(&self) -> &BiomeTable {
        &self.table
    }

    /// Evaluate one world position.
    pub fn sample(&self, position: DVec2) -> SamplePoint {
        let p = self.config.world_to_noise(position);
        let elevation = self.config.derive_elevation(self.elevation.sample(p));
        let moisture = self.config.derive_moisture(self.moisture.sample(p));
        let class = self.table.classify_detailed(elevation, moisture);
        let color = self
            .config
            .color_weights()
            .shade(class.color, elevation, moisture);
        SamplePoint {
            position,
            elevation,
            moisture,
            color,
            biome: class.biome,
        }
    }

    /// One sample per viewport pixel, row-major, evaluated in parallel.
    pub fn sample_grid(&self, viewport: &Viewport) -> Vec<SamplePoint> {
        let width = viewport.width.max(1) as usize;
        (0..viewport.pixel_count())
            .into_par_iter()
            .map(|i| {
                let px = (i % width) as u32;
                let py = (i / width) as u32;
                self.sample(viewport.pixel_to_world(px, py))
            })
            .collect()
    }

    /// Colored vertex grid spanning one chunk, edges included, so meshes of
    /// neighbouring chunks share their border vertices.
    ///
    /// `resolution` is clamped to at least 2.
    pub fn generate_chunk(&self, chunk: Chunk, chunk_size: f64, resolution: u32) -> ChunkMesh {
        let resolution = resolution.max(2);
        let n = resolution as usize;
        let origin = chunk.origin(chunk_size);
        let step = chunk_size / f64::from(resolution - 1);

        let vertices = (0..n * n)
            .into_par_iter()
            .map(|i| {
                let local = DVec2::new((i % n) as f64, (i / n) as f64) * step;
                let position = origin + local;
                let sample = self.sample(position);
                GridVertex::new([position.x as f32, position.y as f32], sample.color)
            })
            .collect();

        ChunkMesh {
            chunk,
            resolution,
            vertices,
        }
    }
}

static_assertions::assert_impl_all!(TerrainSampler: Send, Sync);
