//! Errors raised at the renderer's fallible boundaries.
//!
//! Intersection and shading never fail; only configuration, image sizing and
//! image I/O do.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid render configuration: {0}")]
    InvalidConfig(String),

    #[error("image is {width}x{height} but {actual} pixels were supplied")]
    PixelCount {
        width: u32,
        height: u32,
        actual: usize,
    },

    #[error("malformed PPM: {0}")]
    Ppm(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),
}
