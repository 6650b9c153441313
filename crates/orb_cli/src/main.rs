use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use orb_math::{Point3, Vec3};
use orb_renderer::{render, save_png, scene_rng, Camera, RenderConfig, SceneKind};
use std::time::Instant;

mod cli;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(LevelFilter::from(args.log_level))
        .parse_default_env()
        .init();

    let mut config = RenderConfig::new(
        args.width,
        args.aspect_ratio,
        args.samples_per_pixel,
        args.max_depth,
    )
    .context("Invalid render settings")?;
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let camera = Camera::builder()
        .with_position(Point3::new(13.0, 2.0, 3.0), Point3::ZERO, Vec3::Y)
        .with_lens(args.vfov, args.aperture, args.focus_dist)
        .with_aspect_ratio(config.aspect_ratio())
        .build()
        .context("Invalid camera settings")?;

    let start = Instant::now();
    let scene = SceneKind::from(args.scene);
    let world = scene
        .build(&mut scene_rng(args.seed))
        .context("Invalid scene")?;
    log::info!("Scene built in {:?} ({} objects)", start.elapsed(), world.len());

    let image = render(&camera, &world, &config).context("Render failed")?;

    save_png(&image, &args.output)
        .with_context(|| format!("Failed to write {}", args.output))?;

    log::info!("Done");
    Ok(())
}
