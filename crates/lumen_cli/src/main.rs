mod args;
mod seed;

use anyhow::{Context, Result};
use clap::Parser;
use lumen_renderer::{output, render, RenderConfig, SceneFile, XorShift64};

use crate::args::Args;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = RenderConfig {
        width: args.dimensions.width,
        height: args.dimensions.height,
        samples_per_pixel: args.samples_per_pixel,
        max_depth: args.max_depth,
    };

    let setup = match &args.scene_file {
        Some(path) => {
            log::info!("Loading scene from {}", path.display());
            SceneFile::load(path)
                .and_then(|file| file.build(config.aspect_ratio()))
                .with_context(|| format!("Failed to load scene file {}", path.display()))?
        }
        None => {
            log::info!("Using built-in scene {:?}", args.scene);
            args.scene.build(config.aspect_ratio())
        }
    };

    let seed = args.seed.unwrap_or_else(seed::seed_from_clock);
    log::info!("Seed {}", seed);
    let mut rng = XorShift64::new(seed);

    let image = render(&setup.camera, &setup.scene, &setup.skybox, &config, &mut rng);

    output::save(&image, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    Ok(())
}
