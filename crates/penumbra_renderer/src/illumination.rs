//! Diffuse and specular light arriving at a surface point.
//!
//! Every light sample is shadow-tested on its own. Geometry that hides some
//! samples but not others produces partial lighting, which is where the soft
//! shadow edges come from.

use crate::{Material, Scene};
use penumbra_math::{normalize, reflect, DVec3, Interval, Ray};

/// Ceiling on the summed light intensity, applied before the ambient term.
pub const MAX_LIGHT_INTENSITY: f64 = 0.8;

/// Compute the light intensity at `point`.
///
/// - `normal`: unit surface normal
/// - `view`: unit vector from the surface back toward the ray origin
pub fn compute_lighting(
    scene: &Scene,
    point: DVec3,
    normal: DVec3,
    view: DVec3,
    material: &Material,
    epsilon: f64,
) -> f64 {
    let light = scene.light();
    let sample_intensity = light.sample_intensity();
    let shadow_t = Interval::new(epsilon, f64::INFINITY);
    let mut intensity = 0.0;

    for &sample in light.samples() {
        // A sample sitting on the surface has no direction
        let Some(light_dir) = normalize(sample - point, epsilon) else {
            continue;
        };

        if scene.hit(&Ray::new(point, light_dir), shadow_t, epsilon).is_some() {
            continue;
        }

        let n = normal.dot(light_dir);
        if n > epsilon {
            intensity += sample_intensity * n / (normal.length() * light_dir.length());
        }

        if material.specular != 0 {
            let reflection = reflect(light_dir, normal);
            let r = reflection.dot(view);
            if r > 0.0 {
                let cos = r / (reflection.length() * view.length());
                intensity += sample_intensity * cos.powf(f64::from(material.specular));
            }
        }
    }

    intensity.min(MAX_LIGHT_INTENSITY)
}
