//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use crate::{hittable::Hittable, Material};
use penumbra_math::{DVec3, Ray};

/// A triangle primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    /// Vertices
    v0: DVec3,
    v1: DVec3,
    v2: DVec3,
    /// Face normal `(v1 - v0) x (v2 - v0)`, not normalized
    normal: DVec3,
    material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// Counter-clockwise winding, as seen from the front, gives the front
    /// normal.
    pub fn new(v0: DVec3, v1: DVec3, v2: DVec3, material: Material) -> Self {
        let normal = (v1 - v0).cross(v2 - v0);
        Self {
            v0,
            v1,
            v2,
            normal,
            material,
        }
    }
}

impl Hittable for Triangle {
    /// Möller-Trumbore ray-triangle intersection algorithm.
    fn intersect(&self, ray: &Ray, epsilon: f64) -> Option<f64> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.direction().cross(edge2);
        let det = edge1.dot(h);

        // Ray is parallel to triangle
        if det.abs() < epsilon {
            return None;
        }

        let f = 1.0 / det;
        let s = ray.origin() - self.v0;
        let u = f * s.dot(h);

        // Check if intersection is outside triangle (u parameter)
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction().dot(q);

        // Check if intersection is outside triangle (v parameter)
        if !(0.0..=1.0).contains(&v) || u + v > 1.0 {
            return None;
        }

        Some(f * edge2.dot(q))
    }

    fn normal_at(&self, _point: DVec3) -> DVec3 {
        self.normal
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
