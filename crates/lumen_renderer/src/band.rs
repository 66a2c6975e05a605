//! Row-band work partitioning.
//!
//! The image is cut into horizontal bands of whole rows. Each band is one
//! unit of parallel work: it owns an exclusive slice of the output buffer
//! and its own RNG, so no two workers ever touch the same pixel or share
//! generator state.

use crate::renderer::render_pixel;
use crate::{Camera, Color, RenderConfig, Scene};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::ops::Range;

/// A run of consecutive output rows, counted from the top of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBand {
    /// First output row (0 = top)
    pub y: u32,
    /// Number of rows in the band
    pub height: u32,
    /// Position of this band in top-to-bottom order
    pub index: usize,
}

impl RowBand {
    pub fn new(y: u32, height: u32, index: usize) -> Self {
        Self { y, height, index }
    }

    /// Output rows covered by this band.
    pub fn rows(&self) -> Range<u32> {
        self.y..self.y + self.height
    }

    /// Get the total number of pixels in this band.
    pub fn pixel_count(&self, image_width: u32) -> usize {
        self.height as usize * image_width as usize
    }
}

/// Split `image_height` rows into bands of `band_height` rows.
///
/// Every row belongs to exactly one band; only the last band may be short.
pub fn generate_bands(image_height: u32, band_height: u32) -> Vec<RowBand> {
    let band_height = band_height.max(1);
    let mut bands = Vec::new();

    let mut y = 0;
    while y < image_height {
        let height = band_height.min(image_height - y);
        bands.push(RowBand::new(y, height, bands.len()));
        y += band_height;
    }

    bands
}

/// Seed for a band's private generator.
///
/// Mixes the band index into the base seed so neighbouring bands draw
/// uncorrelated streams while a given seed always renders the same image.
pub fn band_seed(base_seed: u64, index: usize) -> u64 {
    base_seed ^ (index as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Render one band into `pixels`, its row-major slice of the image.
///
/// Stores the per-pixel linear sum of all samples.
pub fn render_band(
    band: &RowBand,
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    pixels: &mut [Color],
) {
    debug_assert_eq!(pixels.len(), band.pixel_count(config.image_width));

    let mut rng = StdRng::seed_from_u64(band_seed(config.seed, band.index));
    let width = config.image_width as usize;

    for (y, row) in band.rows().zip(pixels.chunks_mut(width)) {
        // Viewport row 0 is the bottom of the image
        let j = config.image_height - 1 - y;
        for (i, pixel) in row.iter_mut().enumerate() {
            *pixel = render_pixel(camera, scene, i as u32, j, config, &mut rng);
        }
    }

    log::debug!("Band {} (rows {:?}) done", band.index, band.rows());
}
