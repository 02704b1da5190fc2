//! Deterministic 2D noise and fractal Brownian motion for terrain generation.
//!
//! [`NoiseField`] is a stateless simplex noise primitive; [`FbmSampler`] layers
//! octaves of it according to validated [`FbmParams`] and produces values in
//! `[0, 1]`. Seeds never reach the noise primitive itself: each seed maps to a
//! fixed coordinate offset so distinct seeds sample decorrelated regions of the
//! same field.

mod fbm;
mod field;
mod params;

pub use fbm::{FbmBounds, FbmSampler, LACUNARITY, SEED_OFFSET_EXTENT, fbm, seed_offset};
pub use field::NoiseField;
pub use params::{FbmParams, FbmParamsError, SEED_RANGE};
