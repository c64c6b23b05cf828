//! Core Whitted-style renderer.
//!
//! Implements recursive ray tracing with:
//! - Local illumination from a sampled area light (soft shadows)
//! - Glossy reflections averaged over several jittered rays per hit
//! - Anti-aliasing via a regular sub-pixel grid

use crate::{compute_lighting, Camera, Hittable, ImageBuffer, RenderError, Rgb, Scene};
use penumbra_math::{clamp_color, normalize, reflect, Color, Interval, Ray, BLACK, DEFAULT_EPSILON};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::time::Instant;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Ambient light intensity added to every lit surface
    pub ambient: f64,
    /// Maximum number of reflection bounces
    pub max_depth: u32,
    /// Sub-pixel grid step for anti-aliasing (0.25 = 4x4 samples)
    pub anti_alias_step: f64,
    /// Reflection rays cast per reflective hit
    pub glossy_rays: u32,
    /// Color returned when a ray doesn't hit anything
    pub background: Color,
    /// Tolerance for intersection windows and parallel tests
    pub epsilon: f64,
    /// Seed for glossy jitter
    pub seed: u64,
    /// Side length of parallel render buckets in pixels
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            ambient: 0.2,
            max_depth: 3,
            anti_alias_step: 0.25,
            glossy_rays: 3,
            background: BLACK,
            epsilon: DEFAULT_EPSILON,
            seed: 0,
            bucket_size: crate::DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RenderConfig {
    pub fn with_ambient(mut self, ambient: f64) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_anti_alias_step(mut self, step: f64) -> Self {
        self.anti_alias_step = step;
        self
    }

    pub fn with_glossy_rays(mut self, rays: u32) -> Self {
        self.glossy_rays = rays;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_bucket_size(mut self, size: u32) -> Self {
        self.bucket_size = size;
        self
    }

    /// Check that the configuration can drive a render.
    pub fn validate(&self) -> Result<(), RenderError> {
        let invalid = |msg: String| Err(RenderError::InvalidConfig(msg));

        if !(self.anti_alias_step > 0.0 && self.anti_alias_step <= 1.0) {
            return invalid(format!(
                "anti-aliasing step must be in (0, 1], got {}",
                self.anti_alias_step
            ));
        }
        if !(self.ambient >= 0.0 && self.ambient.is_finite()) {
            return invalid(format!("ambient intensity must be non-negative, got {}", self.ambient));
        }
        if !(self.epsilon > 0.0 && self.epsilon.is_finite()) {
            return invalid(format!("epsilon must be positive, got {}", self.epsilon));
        }
        if self.glossy_rays == 0 {
            return invalid("at least one glossy ray per reflective hit is required".into());
        }
        if self.bucket_size == 0 {
            return invalid("bucket size must be positive".into());
        }
        Ok(())
    }
}

/// Compute the color seen by a ray.
///
/// Local lighting is blended with the average of `config.glossy_rays`
/// reflected rays, each traced with `depth - 1`. The blend is rounded and
/// clamped to [0, 255]; surfaces that never reflect, or hits at depth 0,
/// return their local color as is.
pub fn ray_color(ray: &Ray, scene: &Scene, depth: u32, config: &RenderConfig, rng: &mut dyn RngCore) -> Color {
    let eps = config.epsilon;

    let Some(hit) = scene.hit(ray, Interval::FORWARD, eps) else {
        return config.background;
    };

    let point = ray.at(hit.t);
    let material = hit.primitive.material();

    // No usable normal: ambient only, and nothing to reflect about
    let Some(normal) = normalize(hit.primitive.normal_at(point), eps) else {
        return material.color * config.ambient;
    };
    let view = normalize(-ray.direction(), eps).unwrap_or(-ray.direction());

    let lighting = compute_lighting(scene, point, normal, view, material, eps);
    let local = material.color * (lighting + config.ambient);

    let reflectivity = match material.reflectivity {
        Some(r) if depth > 0 => r,
        _ => return local,
    };

    let mut reflected = Color::ZERO;
    if reflectivity != 0.0 {
        let mirror = reflect(view, normal);
        for _ in 0..config.glossy_rays {
            let direction = material.glossy_reflection(mirror, eps, rng);
            reflected += ray_color(&Ray::new(point, direction), scene, depth - 1, config, rng);
        }
        reflected /= f64::from(config.glossy_rays.max(1));
    }

    clamp_color((local * (1.0 - reflectivity) + reflected * reflectivity).round())
}

/// Sub-samples per axis and the weight of each sample for a grid step.
///
/// The count is `round(1 / step)`, at least 1, so the weights always sum to 1.
pub fn subsample_grid(step: f64) -> (u32, f64) {
    let per_axis = (1.0 / step).round().max(1.0) as u32;
    let offset_step = 1.0 / f64::from(per_axis);
    (per_axis, offset_step)
}

/// Random generator for one pixel, derived from the render seed.
///
/// Each pixel gets its own stream so the image does not depend on the order
/// in which pixels are rendered.
pub fn pixel_rng(seed: u64, pixel_index: usize) -> StdRng {
    let mixed = seed ^ (pixel_index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    StdRng::seed_from_u64(mixed)
}

/// Render a single pixel with grid supersampling.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    i: u32,
    j: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Rgb {
    let (per_axis, offset_step) = subsample_grid(config.anti_alias_step);
    let weight = offset_step * offset_step;
    let mut pixel_color = Color::ZERO;

    for sy in 0..per_axis {
        for sx in 0..per_axis {
            let dx = f64::from(sx) * offset_step;
            let dy = f64::from(sy) * offset_step;
            let ray = camera.get_ray(i, j, dx, dy);
            pixel_color += ray_color(&ray, scene, config.max_depth, config, rng) * weight;
        }
    }

    Rgb::from_color(pixel_color)
}

pub(crate) fn validate(camera: &Camera, config: &RenderConfig) -> Result<(), RenderError> {
    if camera.image_width == 0 || camera.image_height == 0 {
        return Err(RenderError::InvalidConfig(format!(
            "image must not be empty, got {}x{}",
            camera.image_width, camera.image_height
        )));
    }
    config.validate()
}

pub(crate) fn log_render_start(camera: &Camera, config: &RenderConfig, scene: &Scene) {
    if scene.is_empty() {
        log::warn!("Scene has no primitives; every pixel will show the background");
    }
    let (per_axis, _) = subsample_grid(config.anti_alias_step);
    log::info!(
        "Rendering {}x{}: {} primitives, {} sub-samples/pixel, depth {}, {} glossy rays",
        camera.image_width,
        camera.image_height,
        scene.len(),
        per_axis * per_axis,
        config.max_depth,
        config.glossy_rays
    );
}

/// Render the entire scene to an image buffer.
///
/// Pixels are visited in raster order on the calling thread.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> Result<ImageBuffer, RenderError> {
    validate(camera, config)?;
    log_render_start(camera, config, scene);

    let start = Instant::now();
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);
    let progress_step = (camera.image_height / 10).max(1);

    for j in 0..camera.image_height {
        for i in 0..camera.image_width {
            let index = image.index(i, j);
            let mut rng = pixel_rng(config.seed, index);
            let color = render_pixel(camera, scene, i, j, config, &mut rng);
            image.set_index(index, color);
        }

        if (j + 1) % progress_step == 0 {
            log::info!("{}% ({} of {} rows)", (j + 1) * 100 / camera.image_height, j + 1, camera.image_height);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}
