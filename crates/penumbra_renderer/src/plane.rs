//! Infinite one-sided plane.

use crate::{hittable::Hittable, Material};
use penumbra_math::{normalize, DVec3, Ray, DEFAULT_EPSILON};

/// The set of points `p` with `dot(p, normal) + distance = 0`.
///
/// Only the side the normal points to is visible; rays arriving from behind
/// pass through.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    normal: DVec3,
    distance: f64,
    material: Material,
}

impl Plane {
    /// Create a plane from a normal and signed distance.
    ///
    /// The normal is normalized here; a degenerate normal falls back to +Y.
    pub fn new(normal: DVec3, distance: f64, material: Material) -> Self {
        let normal = normalize(normal, DEFAULT_EPSILON).unwrap_or(DVec3::Y);
        Self {
            normal,
            distance,
            material,
        }
    }

    /// Create the plane through `point` facing `normal`.
    pub fn through_point(point: DVec3, normal: DVec3, material: Material) -> Self {
        let normal = normalize(normal, DEFAULT_EPSILON).unwrap_or(DVec3::Y);
        Self::new(normal, -point.dot(normal), material)
    }

    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }
}

impl Hittable for Plane {
    fn intersect(&self, ray: &Ray, epsilon: f64) -> Option<f64> {
        let denominator = ray.direction().dot(self.normal);

        // Parallel, or approaching from behind
        if denominator > -epsilon {
            return None;
        }

        Some(-(self.distance + ray.origin().dot(self.normal)) / denominator)
    }

    fn normal_at(&self, _point: DVec3) -> DVec3 {
        self.normal
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
