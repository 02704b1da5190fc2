//! Terrain debug visualization: 2D images of generated maps.
//!
//! Provides [`DebugImage`] and renderers for biome, elevation, and moisture
//! maps over a [`Viewport`](crate::Viewport). Images can be written as PNG
//! for offline inspection.

mod image;
mod renderers;

pub use self::image::{DebugImage, DebugImageError, to_rgba8};
pub use renderers::{
    DebugLayer, UnknownLayer, render_biome_map, render_elevation_map, render_layer,
    render_moisture_map, render_samples,
};
