//! Command line arguments.

use clap::Parser;
use lumen_renderer::{SceneConfig, Settings};
use std::path::PathBuf;

/// Render a scene of spheres with a Monte Carlo path tracer.
#[derive(Parser, Debug)]
#[command(name = "lumen", version, about)]
pub struct Args {
    /// JSON settings file (render, camera and scene sections)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output image; `.ppm` is written as binary P6, other extensions by format
    #[arg(short, long, default_value = "output.ppm")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Samples per pixel
    #[arg(short, long)]
    pub samples: Option<u32>,

    /// Maximum bounces per path
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Render the random demo scene with this many small spheres
    #[arg(long)]
    pub spheres: Option<usize>,

    /// Base RNG seed for scene generation and sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Worker threads (defaults to one per core)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,
}

impl Args {
    /// Override `settings` with whatever was given on the command line.
    pub fn apply(&self, settings: &mut Settings) {
        let render = &mut settings.render;
        if let Some(width) = self.width {
            render.image_width = width;
        }
        if let Some(height) = self.height {
            render.image_height = height;
        }
        if let Some(samples) = self.samples {
            render.samples_per_pixel = samples;
        }
        if let Some(max_depth) = self.max_depth {
            render.max_depth = max_depth;
        }
        if let Some(seed) = self.seed {
            render.seed = seed;
        }
        if let Some(num_spheres) = self.spheres {
            settings.scene = SceneConfig::Random { num_spheres };
        }
    }
}
