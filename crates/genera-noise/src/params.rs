//! Fractal Brownian motion parameters, validated at construction.

use serde::{Deserialize, Serialize};

/// Seeds must lie in `[0, SEED_RANGE)`.
pub const SEED_RANGE: u32 = 4096;

/// Errors produced when constructing [`FbmParams`] or bounds for them.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum FbmParamsError {
    /// Fewer than one octave was requested.
    #[error("octaves must be at least 1, got {0}")]
    InvalidOctaves(i32),
    /// Scale was zero, negative, or not finite.
    #[error("scale must be finite and positive, got {0}")]
    InvalidScale(f32),
    /// Compression was zero, negative, or not finite.
    #[error("compression must be finite and positive, got {0}")]
    InvalidCompression(f32),
    /// Persistence was negative or not finite.
    #[error("persistence must be finite and non-negative, got {0}")]
    InvalidPersistence(f32),
    /// Seed was outside `[0, SEED_RANGE)`.
    #[error("seed must be below {SEED_RANGE}, got {0}")]
    SeedOutOfRange(u32),
    /// Output bounds were inverted or not finite.
    #[error("invalid output bounds [{lower}, {upper}]")]
    InvalidBounds {
        /// Requested lower bound.
        lower: f64,
        /// Requested upper bound.
        upper: f64,
    },
}

/// Configuration for one fractal noise generator (elevation or moisture).
///
/// Fields are private so that every instance has passed validation; use
/// [`FbmParams::new`] or deserialize (which validates as well).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFbmParams", into = "RawFbmParams")]
pub struct FbmParams {
    octaves: i32,
    persistence: f32,
    scale: f32,
    compression: f32,
    seed: u32,
}

/// Unvalidated serde mirror of [`FbmParams`].
#[derive(Clone, Copy, Serialize, Deserialize)]
struct RawFbmParams {
    octaves: i32,
    persistence: f32,
    scale: f32,
    compression: f32,
    seed: u32,
}

impl FbmParams {
    /// Validate and build a parameter set.
    ///
    /// # Errors
    ///
    /// Returns an [`FbmParamsError`] naming the first offending field.
    pub fn new(
        octaves: i32,
        persistence: f32,
        scale: f32,
        compression: f32,
        seed: u32,
    ) -> Result<Self, FbmParamsError> {
        if octaves < 1 {
            return Err(FbmParamsError::InvalidOctaves(octaves));
        }
        if !persistence.is_finite() || persistence < 0.0 {
            return Err(FbmParamsError::InvalidPersistence(persistence));
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(FbmParamsError::InvalidScale(scale));
        }
        if !compression.is_finite() || compression <= 0.0 {
            return Err(FbmParamsError::InvalidCompression(compression));
        }
        if seed >= SEED_RANGE {
            return Err(FbmParamsError::SeedOutOfRange(seed));
        }
        Ok(Self {
            octaves,
            persistence,
            scale,
            compression,
            seed,
        })
    }

    /// Copy of these parameters with a different seed.
    pub fn with_seed(self, seed: u32) -> Result<Self, FbmParamsError> {
        Self::new(
            self.octaves,
            self.persistence,
            self.scale,
            self.compression,
            seed,
        )
    }

    /// Number of octaves composited.
    pub fn octaves(&self) -> i32 {
        self.octaves
    }

    /// Amplitude multiplier applied per octave.
    pub fn persistence(&self) -> f32 {
        self.persistence
    }

    /// Frequency of the first octave.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Power-remap exponent applied to the normalized output.
    pub fn compression(&self) -> f32 {
        self.compression
    }

    /// Seed selecting the coordinate offset.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Sum of all octave amplitudes (the normalization total).
    pub fn max_amplitude(&self) -> f64 {
        let persistence = f64::from(self.persistence);
        let mut sum = 0.0;
        let mut amp = 1.0;
        for _ in 0..self.octaves {
            sum += amp;
            amp *= persistence;
        }
        sum
    }
}

impl Default for FbmParams {
    fn default() -> Self {
        Self {
            octaves: 6,
            persistence: 0.5,
            scale: 0.01,
            compression: 1.0,
            seed: 0,
        }
    }
}

impl TryFrom<RawFbmParams> for FbmParams {
    type Error = FbmParamsError;

    fn try_from(raw: RawFbmParams) -> Result<Self, Self::Error> {
        Self::new(
            raw.octaves,
            raw.persistence,
            raw.scale,
            raw.compression,
            raw.seed,
        )
    }
}

impl From<FbmParams> for RawFbmParams {
    fn from(params: FbmParams) -> Self {
        Self {
            octaves: params.octaves,
            persistence: params.persistence,
            scale: params.scale,
            compression: params.compression,
            seed: params.seed,
        }
    }
}
