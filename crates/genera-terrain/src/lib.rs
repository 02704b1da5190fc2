//! Procedural terrain: biome classification, color blending, and terrain
//! evaluation over fractal noise.
//!
//! A [`TerrainSampler`] turns a world position into elevation and moisture
//! via two [`FbmSampler`](genera_noise::FbmSampler)s, classifies the pair
//! against a [`BiomeTable`], and shades the blended color. Presets bundle
//! every setting and persist as RON.

mod blend;
mod chunk;
mod config;
mod preset;
mod sampler;
mod viewport;

pub mod biome;
pub mod debug_viz;
pub mod gpu;

pub use biome::{
    Biome, BiomeTable, BiomeTableError, BiomeType, Classification, ColorWeights, default_biomes,
};
pub use blend::{Blend, BlendError, ClampBounds, clamped_mix, clamped_mix_within, splat};
pub use chunk::{Chunk, ChunkMesh, ChunkRegion};
pub use config::{TerrainConfig, TerrainConfigError, TerrainParams};
pub use preset::{PresetError, PresetStore, TerrainPreset, seed_from_str};
pub use sampler::{SamplePoint, TerrainSampler};
pub use viewport::Viewport;
