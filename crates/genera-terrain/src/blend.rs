//! Clamped linear interpolation over scalars and fixed-size color vectors.
//!
//! One operation covers every scalar/vector combination: a scalar is a
//! one-wide vector, and mixing a scalar into a color is done by splatting it
//! first (see [`splat`]).

use glam::Vec3;

/// Errors for invalid clamp bounds.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum BlendError {
    /// A bound was NaN or infinite.
    #[error("clamp bounds must be finite, got [{min}, {max}]")]
    NonFinite {
        /// Requested minimum.
        min: f32,
        /// Requested maximum.
        max: f32,
    },
    /// The minimum exceeded the maximum.
    #[error("clamp minimum {min} exceeds maximum {max}")]
    Inverted {
        /// Requested minimum.
        min: f32,
        /// Requested maximum.
        max: f32,
    },
}

/// Validated `[min, max]` window that blend results are clamped into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampBounds {
    min: f32,
    max: f32,
}

impl ClampBounds {
    /// The default `[0, 1]` window.
    pub const UNIT: Self = Self { min: 0.0, max: 1.0 };

    /// Build a window. Inverted bounds are rejected, never swapped.
    pub fn new(min: f32, max: f32) -> Result<Self, BlendError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(BlendError::NonFinite { min, max });
        }
        if min > max {
            return Err(BlendError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Clamp one component. NaN collapses to the lower bound.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }
}

impl Default for ClampBounds {
    fn default() -> Self {
        Self::UNIT
    }
}

/// A value that can be linearly mixed component-wise and clamped.
pub trait Blend: Copy {
    /// `self + (target - self) * amount`, each component clamped to `bounds`.
    fn mix_clamped(self, target: Self, amount: f32, bounds: ClampBounds) -> Self;
}

impl Blend for f32 {
    #[inline]
    fn mix_clamped(self, target: Self, amount: f32, bounds: ClampBounds) -> Self {
        bounds.clamp(self + (target - self) * amount)
    }
}

impl<const N: usize> Blend for [f32; N] {
    #[inline]
    fn mix_clamped(self, target: Self, amount: f32, bounds: ClampBounds) -> Self {
        std::array::from_fn(|i| self[i].mix_clamped(target[i], amount, bounds))
    }
}

impl Blend for Vec3 {
    #[inline]
    fn mix_clamped(self, target: Self, amount: f32, bounds: ClampBounds) -> Self {
        Vec3::from_array(
            self.to_array()
                .mix_clamped(target.to_array(), amount, bounds),
        )
    }
}

/// Mix `base` toward `target` by `amount`, clamping to `[0, 1]`.
#[inline]
pub fn clamped_mix<T: Blend>(base: T, target: T, amount: f32) -> T {
    base.mix_clamped(target, amount, ClampBounds::UNIT)
}

/// Mix `base` toward `target` by `amount`, clamping to `bounds`.
#[inline]
pub fn clamped_mix_within<T: Blend>(base: T, target: T, amount: f32, bounds: ClampBounds) -> T {
    base.mix_clamped(target, amount, bounds)
}

/// Broadcast a scalar to an `N`-wide vector.
#[inline]
pub fn splat<const N: usize>(value: f32) -> [f32; N] {
    [value; N]
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [f32; 3] = [1.0, 0.0, 0.0];
    const BLUE: [f32; 3] = [0.0, 0.0, 1.0];

    #[test]
    fn test_scalar_mix() {
        assert!((clamped_mix(0.2_f32, 0.6, 0.5) - 0.4).abs() < 1e-6);
        assert_eq!(clamped_mix(0.2_f32, 0.6, 0.0), 0.2);
        assert!((clamped_mix(0.2_f32, 0.6, 1.0) - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_color_mix_is_component_wise() {
        assert_eq!(clamped_mix(RED, BLUE, 0.5), [0.5, 0.0, 0.5]);
        assert_eq!(clamped_mix(RED, BLUE, 0.25), [0.75, 0.0, 0.25]);
    }

    #[test]
    fn test_out_of_range_amount_stays_within_bounds() {
        let bounds = ClampBounds::new(0.1, 0.9).unwrap();
        for amount in [-10.0, -1.0, -0.01, 1.01, 2.0, 50.0] {
            let mixed = clamped_mix_within(RED, BLUE, amount, bounds);
            for c in mixed {
                assert!((0.1..=0.9).contains(&c), "component {c} escaped bounds");
            }
        }
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let once = clamped_mix([0.3, 0.8, 0.5], [1.0, 1.0, 0.0], 3.0);
        let twice = clamped_mix(once, once, 0.7);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_scalar_into_color_via_splat() {
        let mixed = clamped_mix(splat::<3>(0.0), [1.0, 0.5, 0.25], 0.5);
        assert_eq!(mixed, [0.5, 0.25, 0.125]);
        let toward_gray = clamped_mix([1.0, 0.0, 0.0], splat(0.5), 1.0);
        assert_eq!(toward_gray, [0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_vec3_matches_array() {
        let a = Vec3::new(0.1, 0.2, 0.3);
        let b = Vec3::new(0.9, 0.4, 0.0);
        let v = clamped_mix(a, b, 0.3);
        let arr = clamped_mix(a.to_array(), b.to_array(), 0.3);
        assert_eq!(v.to_array(), arr);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        assert_eq!(
            ClampBounds::new(1.0, 0.0),
            Err(BlendError::Inverted { min: 1.0, max: 0.0 })
        );
        assert!(ClampBounds::new(f32::NAN, 1.0).is_err());
        assert!(ClampBounds::new(0.0, f32::INFINITY).is_err());
    }

    #[test]
    fn test_nan_collapses_to_min_and_infinity_clamps() {
        assert_eq!(clamped_mix(0.5_f32, 0.7, f32::NAN), 0.0);
        assert_eq!(clamped_mix(0.5_f32, f32::INFINITY, 0.5), 1.0);
        assert_eq!(clamped_mix(0.5_f32, f32::NEG_INFINITY, 0.5), 0.0);
    }
}
