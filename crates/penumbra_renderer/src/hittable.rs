//! Hittable trait and the nearest-hit query.

use crate::{Material, Primitive};
use penumbra_math::{DVec3, Interval, Ray};

/// Trait for shapes that can be hit by rays.
pub trait Hittable {
    /// Intersect a ray with this shape.
    ///
    /// Returns the ray parameter of the hit, or `None` on a miss. The value is
    /// not filtered against any window; that is the caller's job.
    fn intersect(&self, ray: &Ray, epsilon: f64) -> Option<f64>;

    /// Outward surface normal at `point`, not necessarily unit length.
    fn normal_at(&self, point: DVec3) -> DVec3;

    /// Material of the surface.
    fn material(&self) -> &Material;
}

/// The closest primitive along a ray.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub primitive: &'a Primitive,
    /// Parameter t where the intersection occurs
    pub t: f64,
}

/// Find the closest primitive hit by `ray` inside `ray_t`.
///
/// A candidate is accepted only when it lies more than `epsilon` inside the
/// window and more than `epsilon` in front of the best hit so far, so a ray
/// leaving a surface does not find that surface again.
pub fn nearest_hit<'a>(
    objects: &'a [Primitive],
    ray: &Ray,
    ray_t: Interval,
    epsilon: f64,
) -> Option<Hit<'a>> {
    let mut closest: Option<Hit<'a>> = None;
    let mut closest_so_far = ray_t.max;

    for object in objects {
        let Some(t) = object.intersect(ray, epsilon) else {
            continue;
        };

        if ray_t.with_max(closest_so_far).surrounds_by(t, epsilon) {
            closest_so_far = t;
            closest = Some(Hit { primitive: object, t });
        }
    }

    closest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Plane, Sphere};
    use penumbra_math::DEFAULT_EPSILON;

    fn grey() -> Material {
        Material::new(Color::splat(128.0))
    }

    #[test]
    fn test_nearest_hit_picks_closest() {
        let objects: Vec<Primitive> = vec![
            Sphere::new(DVec3::new(0.0, 0.0, 20.0), 1.0, grey()).into(),
            Sphere::new(DVec3::new(0.0, 0.0, 10.0), 1.0, grey()).into(),
            Sphere::new(DVec3::new(0.0, 0.0, 30.0), 1.0, grey()).into(),
        ];
        let ray = Ray::new(DVec3::ZERO, DVec3::Z);

        let hit = nearest_hit(&objects, &ray, Interval::FORWARD, DEFAULT_EPSILON).unwrap();
        assert!((hit.t - 9.0).abs() < 1e-9);
        assert!(std::ptr::eq(hit.primitive, &objects[1]));
    }

    #[test]
    fn test_nearest_hit_none() {
        let objects: Vec<Primitive> = vec![Sphere::new(DVec3::new(0.0, 5.0, 10.0), 1.0, grey()).into()];
        let ray = Ray::new(DVec3::ZERO, DVec3::Z);

        assert!(nearest_hit(&objects, &ray, Interval::FORWARD, DEFAULT_EPSILON).is_none());
        assert!(nearest_hit(&[], &ray, Interval::FORWARD, DEFAULT_EPSILON).is_none());
    }

    #[test]
    fn test_nearest_hit_respects_window() {
        let objects: Vec<Primitive> = vec![Sphere::new(DVec3::new(0.0, 0.0, 10.0), 1.0, grey()).into()];
        let ray = Ray::new(DVec3::ZERO, DVec3::Z);

        // Hit at t=9 lies beyond tMax
        assert!(nearest_hit(&objects, &ray, Interval::new(0.0, 5.0), DEFAULT_EPSILON).is_none());
        // Hit at t=9 lies before tMin; the far root is never considered
        assert!(nearest_hit(&objects, &ray, Interval::new(9.5, 100.0), DEFAULT_EPSILON).is_none());
    }

    #[test]
    fn test_nearest_hit_keeps_first_of_near_ties() {
        let eps = DEFAULT_EPSILON;
        // Hits at t = 9 + eps/2 and t = 9, less than eps apart
        let objects: Vec<Primitive> = vec![
            Sphere::new(DVec3::new(0.0, 0.0, 10.0 + eps / 2.0), 1.0, grey()).into(),
            Sphere::new(DVec3::new(0.0, 0.0, 10.0), 1.0, grey()).into(),
        ];
        let ray = Ray::new(DVec3::ZERO, DVec3::Z);

        let hit = nearest_hit(&objects, &ray, Interval::FORWARD, eps).unwrap();
        assert!(std::ptr::eq(hit.primitive, &objects[0]));

        // A hit closer by more than eps replaces the best
        let objects: Vec<Primitive> = vec![
            Sphere::new(DVec3::new(0.0, 0.0, 10.0 + 2.0 * eps), 1.0, grey()).into(),
            Sphere::new(DVec3::new(0.0, 0.0, 10.0), 1.0, grey()).into(),
        ];
        let hit = nearest_hit(&objects, &ray, Interval::FORWARD, eps).unwrap();
        assert!(std::ptr::eq(hit.primitive, &objects[1]));
    }

    #[test]
    fn test_nearest_hit_rejects_hit_within_eps_of_max() {
        let eps = DEFAULT_EPSILON;
        let objects: Vec<Primitive> = vec![Sphere::new(DVec3::new(0.0, 0.0, 10.0), 1.0, grey()).into()];
        let ray = Ray::new(DVec3::ZERO, DVec3::Z);

        // Hit at t=9 sits eps/2 below tMax
        assert!(nearest_hit(&objects, &ray, Interval::new(0.0, 9.0 + eps / 2.0), eps).is_none());
        assert!(nearest_hit(&objects, &ray, Interval::new(0.0, 9.0 + 2.0 * eps), eps).is_some());
    }

    #[test]
    fn test_nearest_hit_ignores_origin_surface() {
        // Ray leaving the top of a floor does not see the floor again
        let floor: Primitive = Plane::new(DVec3::Y, 0.0, grey()).into();
        let sphere: Primitive = Sphere::new(DVec3::ZERO, 1.0, grey()).into();
        let objects = vec![floor, sphere];

        // Starts exactly on the sphere surface, heading out
        let ray = Ray::new(DVec3::new(0.0, 1.0, 0.0), DVec3::new(0.0, 1.0, 0.0));
        assert!(nearest_hit(&objects, &ray, Interval::FORWARD, DEFAULT_EPSILON).is_none());
    }
}
