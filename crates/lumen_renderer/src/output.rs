//! Image output: tone mapping and file writers.
//!
//! Binary PPM (P6) is written by hand; every other format goes through the
//! `image` crate, picked from the file extension.

use crate::{Color, ImageBuffer};
use image::RgbImage;
use lumen_math::Interval;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Pixel buffer does not match a {width}x{height} image")]
    BufferSize { width: u32, height: u32 },
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Channel values are clamped below 1 so `256 * x` stays within a byte.
const INTENSITY: Interval = Interval::new(0.0, 0.999);

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Average `samples` summed linear samples and quantize to 8-bit sRGB-ish.
pub fn color_to_rgb(sum: Color, samples: u32) -> [u8; 3] {
    let average = sum / samples.max(1) as f32;
    let quantize = |c: f32| (256.0 * INTENSITY.clamp(linear_to_gamma(c))) as u8;
    [quantize(average.x), quantize(average.y), quantize(average.z)]
}

/// Write `image` as binary PPM (P6), top row first.
pub fn write_ppm<W: Write>(image: &ImageBuffer, mut writer: W) -> std::io::Result<()> {
    write!(writer, "P6\n{} {}\n255\n", image.width, image.height)?;
    writer.write_all(&image.to_rgb8())?;
    writer.flush()
}

/// Save `image` to `path`. `.ppm` is written as P6; other extensions are
/// encoded by the `image` crate.
pub fn save_image(image: &ImageBuffer, path: impl AsRef<Path>) -> OutputResult<()> {
    let path = path.as_ref();
    let is_ppm = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        let file = File::create(path)?;
        write_ppm(image, BufWriter::new(file))?;
    } else {
        let rgb = RgbImage::from_raw(image.width, image.height, image.to_rgb8()).ok_or(
            OutputError::BufferSize {
                width: image.width,
                height: image.height,
            },
        )?;
        rgb.save(path)?;
    }

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}
