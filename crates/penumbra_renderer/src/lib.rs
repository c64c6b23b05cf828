//! Penumbra renderer - recursive Whitted-style ray tracing on the CPU.
//!
//! A small fixed scene of spheres, planes and triangles is lit by a segment
//! light that is discretized into point samples. Each sample is shadow-tested
//! on its own, which turns hard occlusion into soft penumbrae. Reflective
//! surfaces spawn a handful of jittered mirror rays per hit, bounded by a
//! depth budget, and every pixel is supersampled on a regular sub-pixel grid.

mod bucket;
mod camera;
mod error;
mod hittable;
mod illumination;
mod image_buffer;
mod light;
mod material;
mod plane;
mod primitive;
mod renderer;
mod scene;
mod sphere;
mod triangle;

pub use bucket::{generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use error::RenderError;
pub use hittable::{nearest_hit, Hit, Hittable};
pub use illumination::{compute_lighting, MAX_LIGHT_INTENSITY};
pub use image_buffer::{ImageBuffer, Rgb};
pub use light::AreaLight;
pub use material::{random_unit_vector, Material};
pub use plane::Plane;
pub use primitive::Primitive;
pub use renderer::{pixel_rng, ray_color, render, render_pixel, subsample_grid, RenderConfig};
pub use scene::Scene;
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export the math types the public API is written in
pub use penumbra_math::{Color, DVec3, Interval, Ray};
