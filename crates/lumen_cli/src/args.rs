use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use lumen_renderer::{integrator, scenes, SceneSetup, DEFAULT_SAMPLES_PER_PIXEL};

#[derive(Parser, Debug)]
#[command(name = "lumen", about = "Offline Monte Carlo path tracer")]
pub struct Args {
    #[arg(long, value_enum, default_value_t, conflicts_with = "scene_file")]
    /// Built-in scene to render
    pub scene: AvailableScene,

    #[arg(long)]
    /// JSON scene description, replaces the built-in scene
    pub scene_file: Option<PathBuf>,

    #[arg(short, long, default_value = "100x50")]
    /// Image dimension in format `width`x`height`
    pub dimensions: Dimensions,

    #[arg(
        long = "spp",
        default_value_t = DEFAULT_SAMPLES_PER_PIXEL,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    /// Samples per pixel
    pub samples_per_pixel: u32,

    #[arg(long, default_value_t = integrator::DEFAULT_MAX_DEPTH)]
    /// Maximum number of bounces per path
    pub max_depth: u32,

    #[arg(long)]
    /// Seed for all the random draws. Defaults to the current time of day (HHMMSS).
    /// Given a seed, the output is deterministic.
    pub seed: Option<u64>,

    #[arg(short, long, default_value = "render.ppm")]
    /// Output file; `.ppm` writes a plain-text pixel map, other extensions use the image encoders
    pub output: PathBuf,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AvailableScene {
    #[default]
    Spheres,
    CornellBox,
}

impl AvailableScene {
    pub fn build(self, aspect_ratio: f32) -> SceneSetup {
        match self {
            AvailableScene::Spheres => scenes::spheres(),
            AvailableScene::CornellBox => scenes::cornell_box(aspect_ratio),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl FromStr for Dimensions {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((a, b)) = s.split_once('x') else {
            return Err(anyhow::anyhow!("Incorrect format, expected `width`x`height`"));
        };
        let width: u32 = a.trim().parse()?;
        let height: u32 = b.trim().parse()?;
        if width == 0 || height == 0 {
            return Err(anyhow::anyhow!("Dimensions must be non-zero, got {width}x{height}"));
        }

        Ok(Dimensions { width, height })
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_parse() {
        let d: Dimensions = "320x240".parse().unwrap();
        assert_eq!(d, Dimensions { width: 320, height: 240 });
        assert_eq!(d.to_string(), "320x240");

        assert!("320".parse::<Dimensions>().is_err());
        assert!("0x10".parse::<Dimensions>().is_err());
        assert!("axb".parse::<Dimensions>().is_err());
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["lumen"]).unwrap();
        assert_eq!(args.scene, AvailableScene::Spheres);
        assert_eq!(args.dimensions, Dimensions { width: 100, height: 50 });
        assert_eq!(args.samples_per_pixel, 20);
        assert_eq!(args.max_depth, 50);
        assert_eq!(args.seed, None);
        assert_eq!(args.output, PathBuf::from("render.ppm"));
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "lumen",
            "--scene",
            "cornell-box",
            "-d",
            "64x64",
            "--spp",
            "8",
            "--max-depth",
            "5",
            "--seed",
            "7",
            "-o",
            "box.png",
        ])
        .unwrap();
        assert_eq!(args.scene, AvailableScene::CornellBox);
        assert_eq!(args.dimensions, Dimensions { width: 64, height: 64 });
        assert_eq!(args.samples_per_pixel, 8);
        assert_eq!(args.max_depth, 5);
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.output, PathBuf::from("box.png"));
    }

    #[test]
    fn test_zero_samples_rejected() {
        assert!(Args::try_parse_from(["lumen", "--spp", "0"]).is_err());
        assert!(Args::try_parse_from(["lumen", "--spp", "1"]).is_ok());
    }

    #[test]
    fn test_scene_conflicts_with_scene_file() {
        let result =
            Args::try_parse_from(["lumen", "--scene", "cornell-box", "--scene-file", "box.json"]);
        assert_eq!(result.unwrap_err().kind(), clap::error::ErrorKind::ArgumentConflict);

        let args = Args::try_parse_from(["lumen", "--scene-file", "box.json"]).unwrap();
        assert_eq!(args.scene_file, Some(PathBuf::from("box.json")));
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
