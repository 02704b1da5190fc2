//! Pixel-to-world mapping for the visible map region.

use glam::DVec2;

use crate::gpu::ViewportGpu;

/// A rectangular window onto the world, measured in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// World position of the top-left corner.
    pub origin: DVec2,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// World units covered by one pixel.
    pub units_per_pixel: f64,
}

impl Viewport {
    /// Create a viewport. A non-positive or non-finite `units_per_pixel`
    /// falls back to 1.
    pub fn new(origin: DVec2, width: u32, height: u32, units_per_pixel: f64) -> Self {
        let units_per_pixel = if units_per_pixel.is_finite() && units_per_pixel > 0.0 {
            units_per_pixel
        } else {
            1.0
        };
        Self {
            origin,
            width,
            height,
            units_per_pixel,
        }
    }

    /// World position of the center of pixel `(px, py)`.
    pub fn pixel_to_world(&self, px: u32, py: u32) -> DVec2 {
        self.origin + (DVec2::new(f64::from(px), f64::from(py)) + 0.5) * self.units_per_pixel
    }

    /// World-space extent covered by the whole viewport.
    pub fn world_size(&self) -> DVec2 {
        DVec2::new(f64::from(self.width), f64::from(self.height)) * self.units_per_pixel
    }

    /// Number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Uniform buffer contents.
    pub fn to_gpu(&self) -> ViewportGpu {
        let scale = self.units_per_pixel as f32;
        ViewportGpu {
            origin: [self.origin.x as f32, self.origin.y as f32],
            size: [self.width as f32, self.height as f32],
            scale_factor: [scale, scale],
        }
    }
}
