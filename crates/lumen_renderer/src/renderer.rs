//! Core path tracing driver.
//!
//! Samples each pixel many times through the camera and integrator, and
//! spreads row bands across the rayon thread pool.

use crate::band::{generate_bands, render_band};
use crate::config::ConfigResult;
use crate::integrator::ray_color;
use crate::output::color_to_rgb;
use crate::{Camera, Color, RenderConfig, Scene};
use lumen_math::sampling::gen_f32;
use rand::RngCore;
use rayon::prelude::*;

/// Sum `samples_per_pixel` radiance samples for pixel `(i, j)`.
///
/// `j` counts rows from the bottom of the viewport. Each sample is jittered
/// within the pixel. The result is the raw linear sum, not the average.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    i: u32,
    j: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let s = (i as f32 + gen_f32(rng)) / (config.image_width - 1) as f32;
        let t = (j as f32 + gen_f32(rng)) / (config.image_height - 1) as f32;
        let ray = camera.get_ray(s, t, rng);
        pixel_color += ray_color(&ray, scene, config.max_depth, rng);
    }

    pixel_color
}

/// Accumulated linear radiance per pixel, top row first.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    /// Samples summed into every pixel
    pub samples_per_pixel: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32, samples_per_pixel: u32) -> Self {
        Self {
            width,
            height,
            samples_per_pixel,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel sum at (x, y), y = 0 being the top row.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel sum at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Gamma-corrected 8-bit RGB triples, top row first.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color, self.samples_per_pixel));
        }
        bytes
    }
}

/// Render the entire scene.
///
/// Bands run in parallel on the current rayon pool; the call returns once
/// every band has finished.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> ConfigResult<ImageBuffer> {
    config.validate()?;

    let bands = generate_bands(config.image_height, config.band_height);
    log::info!(
        "Rendering {}x{} @ {} spp, depth {}, {} bands",
        config.image_width,
        config.image_height,
        config.samples_per_pixel,
        config.max_depth,
        bands.len()
    );

    let mut image = ImageBuffer::new(
        config.image_width,
        config.image_height,
        config.samples_per_pixel,
    );
    let band_len = config.band_height as usize * config.image_width as usize;

    image
        .pixels
        .par_chunks_mut(band_len)
        .zip(bands.par_iter())
        .for_each(|(pixels, band)| render_band(band, camera, scene, config, pixels));

    Ok(image)
}
