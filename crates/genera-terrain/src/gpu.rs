//! Plain-old-data buffer layouts shared with the renderer.
//!
//! Every struct is `#[repr(C)]` with 4-byte scalar fields only, so the byte
//! layout matches the shader-side declarations field for field. Sizes are
//! pinned at compile time.

use bytemuck::{Pod, Zeroable};
use genera_noise::FbmParams;

use crate::biome::Biome;

/// Binding slots of the terrain shader buffers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ShaderIndex {
    /// Vertex buffer.
    Vertices = 0,
    /// Viewport uniform.
    Viewport = 1,
    /// Terrain configuration uniform.
    ConfigData = 2,
    /// Biome table storage buffer.
    BiomeData = 3,
}

impl ShaderIndex {
    /// Binding slot number.
    pub fn slot(self) -> u32 {
        self as u32
    }
}

/// FBM parameters as laid out in the configuration buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct FbmGpu {
    pub octaves: i32,
    pub persistence: f32,
    pub scale: f32,
    pub compression: f32,
    pub seed: u32,
}

static_assertions::assert_eq_size!(FbmGpu, [u8; 20]);

impl From<&FbmParams> for FbmGpu {
    fn from(params: &FbmParams) -> Self {
        Self {
            octaves: params.octaves(),
            persistence: params.persistence(),
            scale: params.scale(),
            compression: params.compression(),
            seed: params.seed(),
        }
    }
}

/// Terrain configuration uniform: eight scalars followed by both generators.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct TerrainConfigGpu {
    pub num_biomes: i32,
    pub elevation_color_weight: f32,
    pub moisture_color_weight: f32,
    pub global_scalar: f32,
    pub sea_level_offset: f32,
    pub elevation_distribution: f32,
    pub aridness: f32,
    pub moisture_distribution: f32,
    pub elevation_generator: FbmGpu,
    pub moisture_generator: FbmGpu,
}

static_assertions::assert_eq_size!(TerrainConfigGpu, [u8; 72]);

/// One biome table entry in the biome storage buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct BiomeGpu {
    /// Linear RGB.
    pub color: [f32; 3],
    /// [`BiomeType`](crate::BiomeType) code.
    pub biome_type: u32,
    pub min_elevation: f32,
    pub max_elevation: f32,
    pub max_moisture: f32,
    pub blend_range: f32,
}

static_assertions::assert_eq_size!(BiomeGpu, [u8; 32]);

impl From<&Biome> for BiomeGpu {
    fn from(biome: &Biome) -> Self {
        Self {
            color: biome.color,
            biome_type: biome.biome_type.code(),
            min_elevation: biome.min_elevation,
            max_elevation: biome.max_elevation,
            max_moisture: biome.max_moisture,
            blend_range: biome.blend_range,
        }
    }
}

/// Bare 2D position for the full-screen terrain quad.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct TerrainVertex {
    pub position: [f32; 2],
}

static_assertions::assert_eq_size!(TerrainVertex, [u8; 8]);

impl TerrainVertex {
    /// Two triangles covering clip space.
    pub const FULLSCREEN_QUAD: [TerrainVertex; 6] = [
        TerrainVertex { position: [-1.0, -1.0] },
        TerrainVertex { position: [1.0, -1.0] },
        TerrainVertex { position: [1.0, 1.0] },
        TerrainVertex { position: [-1.0, -1.0] },
        TerrainVertex { position: [1.0, 1.0] },
        TerrainVertex { position: [-1.0, 1.0] },
    ];
}

/// Pre-colored vertex produced by CPU-side chunk generation.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct GridVertex {
    /// World-space position.
    pub position: [f32; 2],
    /// Linear RGBA.
    pub color: [f32; 4],
}

static_assertions::assert_eq_size!(GridVertex, [u8; 24]);

impl GridVertex {
    /// Opaque vertex from an RGB color.
    pub fn new(position: [f32; 2], color: [f32; 3]) -> Self {
        Self {
            position,
            color: [color[0], color[1], color[2], 1.0],
        }
    }
}

/// Viewport uniform. See [`Viewport`](crate::Viewport).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ViewportGpu {
    /// World position of the top-left pixel.
    pub origin: [f32; 2],
    /// Size in pixels.
    pub size: [f32; 2],
    /// World units per pixel on each axis.
    pub scale_factor: [f32; 2],
}

static_assertions::assert_eq_size!(ViewportGpu, [u8; 24]);
