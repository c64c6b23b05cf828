//! Row-major pixel grid and its serialized forms.
//!
//! The text format is plain PPM (`P3`): the tag, `width height`, the maximum
//! channel value `255`, then one `R G B` line per pixel from the top row down.

use crate::RenderError;
use penumbra_math::{Color, CHANNEL_MAX};
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

const PPM_MAGIC: &str = "P3";
const PPM_MAX_VALUE: u32 = 255;

/// An 8-bit RGB pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Truncate a color to integer channels, saturating at 0 and 255.
    pub fn from_color(color: Color) -> Self {
        let channel = |c: f64| c.clamp(0.0, CHANNEL_MAX) as u8;
        Self::new(channel(color.x), channel(color.y), channel(color.z))
    }
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgb>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with white.
    ///
    /// Every pixel is overwritten by a completed render.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::WHITE; width as usize * height as usize],
        }
    }

    /// Wrap existing row-major pixels.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self, RenderError> {
        if pixels.len() != width as usize * height as usize {
            return Err(RenderError::PixelCount {
                width,
                height,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Row-major offset of pixel (x, y).
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Rgb) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Set the pixel at a row-major offset.
    pub fn set_index(&mut self, index: usize, color: Rgb) {
        self.pixels[index] = color;
    }

    /// Write the image as plain-text PPM.
    pub fn write_ppm<W: Write>(&self, writer: &mut W) -> Result<(), RenderError> {
        writeln!(writer, "{PPM_MAGIC}")?;
        writeln!(writer, "{} {}", self.width, self.height)?;
        writeln!(writer, "{PPM_MAX_VALUE}")?;

        for p in &self.pixels {
            writeln!(writer, "{} {} {}", p.r, p.g, p.b)?;
        }

        Ok(())
    }

    /// Parse a plain-text PPM as written by [`ImageBuffer::write_ppm`].
    ///
    /// Tokens may be separated by any whitespace.
    pub fn read_ppm<R: BufRead>(reader: R) -> Result<Self, RenderError> {
        let mut text = String::new();
        for line in reader.lines() {
            text.push_str(&line?);
            text.push('\n');
        }

        let mut tokens = text.split_whitespace();

        match tokens.next() {
            Some(PPM_MAGIC) => {}
            Some(other) => return Err(RenderError::Ppm(format!("expected magic P3, found {other:?}"))),
            None => return Err(RenderError::Ppm("empty input".into())),
        }

        let mut header = |name: &str| -> Result<u32, RenderError> {
            let token = tokens
                .next()
                .ok_or_else(|| RenderError::Ppm(format!("missing {name}")))?;
            token
                .parse()
                .map_err(|_| RenderError::Ppm(format!("invalid {name} {token:?}")))
        };

        let width = header("width")?;
        let height = header("height")?;
        let max_value = header("maximum value")?;
        if max_value != PPM_MAX_VALUE {
            return Err(RenderError::Ppm(format!(
                "unsupported maximum value {max_value}, expected {PPM_MAX_VALUE}"
            )));
        }

        let count = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| RenderError::Ppm(format!("image size {width}x{height} is too large")))?;
        // A pixel takes at least five bytes of text
        let mut pixels = Vec::with_capacity(count.min(text.len() / 5));
        for index in 0..count {
            let mut channel = || -> Result<u8, RenderError> {
                let token = tokens
                    .next()
                    .ok_or_else(|| RenderError::Ppm(format!("pixel {index} is missing channels")))?;
                token
                    .parse()
                    .map_err(|_| RenderError::Ppm(format!("pixel {index} has invalid channel {token:?}")))
            };
            let (r, g, b) = (channel()?, channel()?, channel()?);
            pixels.push(Rgb::new(r, g, b));
        }

        if let Some(extra) = tokens.next() {
            return Err(RenderError::Ppm(format!("unexpected trailing data {extra:?}")));
        }

        Self::from_pixels(width, height, pixels)
    }

    /// Save as plain-text PPM.
    pub fn save_ppm<P: AsRef<Path>>(&self, path: P) -> Result<(), RenderError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_ppm(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Convert to RGB bytes (for display or saving).
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for p in &self.pixels {
            bytes.extend_from_slice(&[p.r, p.g, p.b]);
        }
        bytes
    }

    /// Save as PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), RenderError> {
        let image = image::RgbImage::from_raw(self.width, self.height, self.to_rgb8()).ok_or(
            RenderError::PixelCount {
                width: self.width,
                height: self.height,
                actual: self.pixels.len(),
            },
        )?;
        image.save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample_image() -> ImageBuffer {
        let pixels = vec![
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(1, 2, 3),
            Rgb::new(128, 64, 32),
            Rgb::BLACK,
        ];
        ImageBuffer::from_pixels(3, 2, pixels).unwrap()
    }

    #[test]
    fn test_new_is_white() {
        let image = ImageBuffer::new(4, 3);
        assert_eq!(image.pixels.len(), 12);
        assert!(image.pixels.iter().all(|p| *p == Rgb::WHITE));
    }

    #[test]
    fn test_row_major_indexing() {
        let mut image = ImageBuffer::new(4, 3);
        image.set(1, 2, Rgb::BLACK);
        assert_eq!(image.index(1, 2), 9);
        assert_eq!(image.pixels[9], Rgb::BLACK);

        image.set_index(3, Rgb::new(9, 9, 9));
        assert_eq!(image.get(3, 0), Rgb::new(9, 9, 9));
    }

    #[test]
    fn test_rgb_from_color_truncates_and_saturates() {
        let c = Rgb::from_color(Color::new(12.99, 300.0, -5.0));
        assert_eq!(c, Rgb::new(12, 255, 0));
    }

    #[test]
    fn test_write_ppm_layout() {
        let mut out = Vec::new();
        sample_image().write_ppm(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3 + 6);
        assert_eq!(lines[0], "P3");
        assert_eq!(lines[1], "3 2");
        assert_eq!(lines[2], "255");
        assert_eq!(lines[3], "255 0 0");
        assert_eq!(lines[8], "0 0 0");
    }

    #[test]
    fn test_ppm_round_trip() {
        let image = sample_image();
        let mut out = Vec::new();
        image.write_ppm(&mut out).unwrap();

        let parsed = ImageBuffer::read_ppm(Cursor::new(out)).unwrap();
        assert_eq!(parsed, image);
    }

    #[test]
    fn test_read_ppm_whitespace_tolerant() {
        let text = "P3 2 1\n255 10 20 30\n  40 50\t60\n";
        let parsed = ImageBuffer::read_ppm(Cursor::new(text)).unwrap();
        assert_eq!(parsed.pixels, vec![Rgb::new(10, 20, 30), Rgb::new(40, 50, 60)]);
    }

    #[test]
    fn test_read_ppm_errors() {
        let cases = [
            "",
            "P6\n1 1\n255\n0 0 0\n",
            "P3\nx 1\n255\n0 0 0\n",
            "P3\n1 1\n65535\n0 0 0\n",
            "P3\n2 1\n255\n0 0 0\n",
            "P3\n1 1\n255\n0 256 0\n",
            "P3\n1 1\n255\n0 0 0 7\n",
        ];

        for case in cases {
            let result = ImageBuffer::read_ppm(Cursor::new(case));
            assert!(matches!(result, Err(RenderError::Ppm(_))), "{case:?} -> {result:?}");
        }
    }

    #[test]
    fn test_read_ppm_huge_header_is_an_error() {
        let text = "P3\n4000000000 4000000000\n255\n0 0 0\n";
        let result = ImageBuffer::read_ppm(Cursor::new(text));
        assert!(matches!(result, Err(RenderError::Ppm(_))), "{result:?}");
    }

    #[test]
    fn test_from_pixels_size_mismatch() {
        let result = ImageBuffer::from_pixels(2, 2, vec![Rgb::BLACK; 3]);
        assert!(matches!(result, Err(RenderError::PixelCount { actual: 3, .. })));
    }

    #[test]
    fn test_save_files() {
        let dir = std::env::temp_dir();
        let ppm = dir.join(format!("penumbra_test_{}.ppm", std::process::id()));
        let png = dir.join(format!("penumbra_test_{}.png", std::process::id()));

        let image = sample_image();
        image.save_ppm(&ppm).unwrap();
        image.save_png(&png).unwrap();

        let reread = ImageBuffer::read_ppm(std::io::BufReader::new(File::open(&ppm).unwrap())).unwrap();
        assert_eq!(reread, image);
        assert!(std::fs::metadata(&png).unwrap().len() > 0);

        let _ = std::fs::remove_file(ppm);
        let _ = std::fs::remove_file(png);
    }
}
