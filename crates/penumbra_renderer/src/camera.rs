//! Pinhole camera for primary ray generation.

use penumbra_math::{DVec3, Ray};

/// Pinhole camera looking down +Z with +Y up.
///
/// The canvas sits at `canvas_distance()` in front of the camera and has one
/// world unit per pixel, so the field of view follows from the resolution.
#[derive(Debug, Clone)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
    origin: DVec3,
}

impl Camera {
    /// Create a new camera at the world origin.
    pub fn new() -> Self {
        Self {
            image_width: 800,
            image_height: 450,
            origin: DVec3::ZERO,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set camera position.
    pub fn with_origin(mut self, origin: DVec3) -> Self {
        self.origin = origin;
        self
    }

    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Distance from the camera to the canvas: `(width + height) / 2`.
    pub fn canvas_distance(&self) -> f64 {
        (f64::from(self.image_width) + f64::from(self.image_height)) / 2.0
    }

    /// Generate the normalized primary ray through sub-pixel offset
    /// `(dx, dy)` of pixel `(i, j)`.
    ///
    /// Pixel coordinates are centered on the image middle and `j` grows
    /// downwards, so the canvas y is negated.
    pub fn get_ray(&self, i: u32, j: u32, dx: f64, dy: f64) -> Ray {
        let x = f64::from(i) - f64::from(self.image_width / 2) + dx;
        let y = f64::from(j) - f64::from(self.image_height / 2) + dy;

        let canvas_point = DVec3::new(x, -y, self.canvas_distance());
        // The canvas is at least half a unit away, so this never degenerates
        Ray::new(self.origin, canvas_point.normalize())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
