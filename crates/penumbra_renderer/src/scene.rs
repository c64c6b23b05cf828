//! The fixed set of primitives and the light that illuminates them.

use crate::{hittable::nearest_hit, AreaLight, Hit, Primitive};
use penumbra_math::{Interval, Ray};

/// An immutable scene: an ordered list of primitives and one area light.
#[derive(Debug, Clone)]
pub struct Scene {
    objects: Vec<Primitive>,
    light: AreaLight,
}

impl Scene {
    /// Build a scene. The primitives cannot be changed afterwards.
    pub fn new(objects: Vec<Primitive>, light: AreaLight) -> Self {
        log::debug!(
            "Scene built: {} primitives, {} light samples",
            objects.len(),
            light.samples().len()
        );
        Self { objects, light }
    }

    pub fn objects(&self) -> &[Primitive] {
        &self.objects
    }

    pub fn light(&self) -> &AreaLight {
        &self.light
    }

    /// Get the number of primitives.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene has no primitives.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Closest primitive along `ray` inside `ray_t`.
    #[inline]
    pub fn hit(&self, ray: &Ray, ray_t: Interval, epsilon: f64) -> Option<Hit<'_>> {
        nearest_hit(&self.objects, ray, ray_t, epsilon)
    }
}
