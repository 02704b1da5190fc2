//! Stateless 2D simplex noise.

use glam::DVec2;
use noise::{NoiseFn, Simplex};

/// Permutation seed for the gradient table. Fixed: field seeding is done by
/// offsetting coordinates, never by reshuffling gradients.
const PERMUTATION_SEED: u32 = 0x0047_454e;

/// Deterministic simplex noise over the plane, with output in `[-1, 1]`.
///
/// All math is done in `f64`, so coordinates spanning tens of thousands of
/// units keep full sub-unit precision.
#[derive(Clone, Debug)]
pub struct NoiseField {
    simplex: Simplex,
}

impl NoiseField {
    /// Create the noise field. Every instance produces the same values.
    pub fn new() -> Self {
        Self {
            simplex: Simplex::new(PERMUTATION_SEED),
        }
    }

    /// Sample the field at `point`.
    ///
    /// Non-finite coordinates yield `0.0`, the center of the output range.
    pub fn sample(&self, point: DVec2) -> f64 {
        if !point.is_finite() {
            return 0.0;
        }
        let value = self.simplex.get([point.x, point.y]);
        if value.is_finite() {
            value.clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }
}

impl Default for NoiseField {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseFn<f64, 2> for NoiseField {
    fn get(&self, point: [f64; 2]) -> f64 {
        self.sample(DVec2::from_array(point))
    }
}
