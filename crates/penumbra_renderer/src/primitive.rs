//! Closed set of scene shapes.

use crate::{hittable::Hittable, Material, Plane, Sphere, Triangle};
use penumbra_math::{DVec3, Ray};

/// Any shape that can be placed in a scene.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
}

impl Hittable for Primitive {
    #[inline]
    fn intersect(&self, ray: &Ray, epsilon: f64) -> Option<f64> {
        match self {
            Primitive::Sphere(s) => s.intersect(ray, epsilon),
            Primitive::Plane(p) => p.intersect(ray, epsilon),
            Primitive::Triangle(t) => t.intersect(ray, epsilon),
        }
    }

    #[inline]
    fn normal_at(&self, point: DVec3) -> DVec3 {
        match self {
            Primitive::Sphere(s) => s.normal_at(point),
            Primitive::Plane(p) => p.normal_at(point),
            Primitive::Triangle(t) => t.normal_at(point),
        }
    }

    #[inline]
    fn material(&self) -> &Material {
        match self {
            Primitive::Sphere(s) => s.material(),
            Primitive::Plane(p) => p.material(),
            Primitive::Triangle(t) => t.material(),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}

impl From<Triangle> for Primitive {
    fn from(triangle: Triangle) -> Self {
        Primitive::Triangle(triangle)
    }
}
