//! Multi-octave fractal Brownian motion (fBm) over [`NoiseField`].
//!
//! Each octave doubles the frequency and multiplies the amplitude by the
//! persistence. The weighted sum is normalized by the total amplitude, mapped
//! from `[-1, 1]` to `[0, 1]` and finally power-remapped by the compression
//! exponent.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::field::NoiseField;
use crate::params::{FbmParams, FbmParamsError};

/// Frequency multiplier between successive octaves.
pub const LACUNARITY: f64 = 2.0;

/// Seed offsets are drawn from `[-SEED_OFFSET_EXTENT, SEED_OFFSET_EXTENT)` on
/// each axis, in noise-space units.
pub const SEED_OFFSET_EXTENT: f64 = 8192.0;

/// Map a seed to its noise-space offset.
///
/// The same seed always yields the same offset, on every platform.
pub fn seed_offset(seed: u32) -> DVec2 {
    let mut rng = ChaCha8Rng::seed_from_u64(u64::from(seed));
    let x = rng.random_range(-SEED_OFFSET_EXTENT..SEED_OFFSET_EXTENT);
    let y = rng.random_range(-SEED_OFFSET_EXTENT..SEED_OFFSET_EXTENT);
    DVec2::new(x, y)
}

/// Output window for [`FbmSampler::sample_bounded`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FbmBounds {
    lower: f64,
    upper: f64,
}

impl FbmBounds {
    /// Build a window; `lower` must not exceed `upper` and both must be finite.
    pub fn new(lower: f64, upper: f64) -> Result<Self, FbmParamsError> {
        if !lower.is_finite() || !upper.is_finite() || lower > upper {
            return Err(FbmParamsError::InvalidBounds { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Lower bound.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound.
    pub fn upper(&self) -> f64 {
        self.upper
    }
}

/// Evaluates fBm for one parameter set.
///
/// Construction derives the seed offset once; sampling is then a pure
/// function of the input point, so one sampler can be shared across threads.
#[derive(Clone, Debug)]
pub struct FbmSampler {
    noise: NoiseField,
    params: FbmParams,
    offset: DVec2,
}

impl FbmSampler {
    /// Create a sampler for `params`.
    pub fn new(params: FbmParams) -> Self {
        Self {
            noise: NoiseField::new(),
            params,
            offset: seed_offset(params.seed()),
        }
    }

    /// Sample the fractal field at `point`, returning a value in `[0, 1]`.
    pub fn sample(&self, point: DVec2) -> f64 {
        let persistence = f64::from(self.params.persistence());
        let mut frequency = f64::from(self.params.scale());
        let mut amplitude = 1.0;
        let mut sum = 0.0;
        let mut total = 0.0;

        for _ in 0..self.params.octaves() {
            sum += amplitude * self.noise.sample(point * frequency + self.offset);
            total += amplitude;

            frequency *= LACUNARITY;
            amplitude *= persistence;
        }

        let raw = if total > 0.0 { sum / total } else { 0.0 };
        let normalized = ((raw + 1.0) * 0.5).clamp(0.0, 1.0);
        let compressed = normalized.powf(f64::from(self.params.compression()));

        if compressed.is_finite() {
            compressed.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Sample and remap linearly into `bounds`.
    ///
    /// Monotonic in [`FbmSampler::sample`]; rounding artifacts are clamped to
    /// the window.
    pub fn sample_bounded(&self, point: DVec2, bounds: FbmBounds) -> f64 {
        let value = self.sample(point);
        let mapped = bounds.lower + (bounds.upper - bounds.lower) * value;
        mapped.clamp(bounds.lower, bounds.upper)
    }

    /// The parameters this sampler was built from.
    pub fn params(&self) -> &FbmParams {
        &self.params
    }

    /// Noise-space offset derived from the seed.
    pub fn offset(&self) -> DVec2 {
        self.offset
    }
}

/// One-shot fBm evaluation. Prefer an [`FbmSampler`] for repeated sampling.
pub fn fbm(point: DVec2, params: &FbmParams) -> f64 {
    FbmSampler::new(*params).sample(point)
}
