use anyhow::{Context, Result};
use clap::Parser;
use lumen_renderer::{render, save_image, Settings};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

mod args;

use args::Args;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    args.apply(&mut settings);
    settings.render.validate().context("Invalid render settings")?;

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure worker threads")?;
    }
    log::info!("Using {} worker threads", rayon::current_num_threads());

    let start = Instant::now();
    let mut scene_rng = StdRng::seed_from_u64(settings.render.seed);
    let scene = settings
        .scene
        .build(&mut scene_rng)
        .context("Failed to build scene")?;
    log::info!(
        "Scene built in {:?}: {} objects, {} materials",
        start.elapsed(),
        scene.object_count(),
        scene.material_count()
    );

    let camera = settings.camera();

    let start = Instant::now();
    let image = render(&camera, &scene, &settings.render).context("Render failed")?;
    log::info!("Rendered in {:?}", start.elapsed());

    save_image(&image, &args.output)
        .with_context(|| format!("Failed to save image to {}", args.output.display()))?;

    Ok(())
}
