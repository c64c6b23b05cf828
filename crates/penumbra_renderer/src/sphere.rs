//! Sphere primitive for ray tracing.

use crate::{hittable::Hittable, Material};
use penumbra_math::{DVec3, Ray};

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: DVec3,
    radius: f64,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: DVec3, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    pub fn center(&self) -> DVec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Hittable for Sphere {
    /// Solves `|origin + t*direction - center|^2 = radius^2` and returns the
    /// smaller root, even when it lies behind the origin.
    fn intersect(&self, ray: &Ray, _epsilon: f64) -> Option<f64> {
        let to_center = ray.origin() - self.center;

        let c1 = ray.direction().dot(ray.direction());
        let c2 = 2.0 * to_center.dot(ray.direction());
        let c3 = to_center.dot(to_center) - self.radius * self.radius;

        let discriminant = c2 * c2 - 4.0 * c1 * c3;
        if discriminant < 0.0 || c1 == 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let t1 = (-c2 - sqrtd) / (2.0 * c1);
        let t2 = (-c2 + sqrtd) / (2.0 * c1);

        Some(t1.min(t2))
    }

    fn normal_at(&self, point: DVec3) -> DVec3 {
        point - self.center
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
