//! Surface material shared by every primitive.

use penumbra_math::{normalize, Color, DVec3};
use rand::{Rng, RngCore};

/// Material attributes of a primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base color, channels on a 0..255 scale
    pub color: Color,
    /// Phong exponent, 0 disables the specular term
    pub specular: u32,
    /// Mirror weight in [0, 1]; `None` means the surface never reflects
    pub reflectivity: Option<f64>,
    /// Radius of the random perturbation applied to reflected rays
    pub glossiness: f64,
}

impl Material {
    /// Create a diffuse, non-reflective material.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            specular: 0,
            reflectivity: None,
            glossiness: 0.0,
        }
    }

    /// Set the specular exponent.
    pub fn with_specular(mut self, exponent: u32) -> Self {
        self.specular = exponent;
        self
    }

    /// Make the surface reflective.
    ///
    /// - `reflectivity`: 0.0 = diffuse only, 1.0 = perfect mirror
    ///
    /// A negative value marks the surface as never reflecting.
    pub fn with_reflectivity(mut self, reflectivity: f64) -> Self {
        self.reflectivity = (reflectivity >= 0.0).then_some(reflectivity.min(1.0));
        self
    }

    /// Set the glossy jitter radius for reflected rays.
    pub fn with_glossiness(mut self, glossiness: f64) -> Self {
        self.glossiness = glossiness.max(0.0);
        self
    }

    /// Perturb a mirror direction by a random unit vector scaled by the
    /// glossiness, returning a unit direction.
    ///
    /// Falls back to the unperturbed mirror direction when the jitter cancels
    /// it out.
    pub fn glossy_reflection(&self, mirror: DVec3, epsilon: f64, rng: &mut dyn RngCore) -> DVec3 {
        let mirror = normalize(mirror, epsilon).unwrap_or(mirror);
        if self.glossiness <= 0.0 {
            return mirror;
        }

        let jittered = mirror + self.glossiness * random_unit_vector(rng);
        normalize(jittered, epsilon).unwrap_or(mirror)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(Color::splat(255.0))
    }
}

/// Generate a random unit vector on the unit sphere.
pub fn random_unit_vector(rng: &mut dyn RngCore) -> DVec3 {
    // Use rejection sampling for uniform distribution on sphere
    loop {
        let v = DVec3::new(
            rng.gen::<f64>() * 2.0 - 1.0,
            rng.gen::<f64>() * 2.0 - 1.0,
            rng.gen::<f64>() * 2.0 - 1.0,
        );
        let len_sq = v.length_squared();
        if len_sq > 1e-6 && len_sq <= 1.0 {
            return v / len_sq.sqrt();
        }
    }
}
