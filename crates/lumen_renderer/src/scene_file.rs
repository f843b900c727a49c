//! JSON scene descriptions.
//!
//! A scene file names a camera, an optional sky and a list of primitives:
//!
//! ```json
//! {
//!   "camera": { "look_from": [0, 0, 0], "look_at": [0, 0, -1], "vfov": 90 },
//!   "sky": { "kind": "solid", "color": [0.5, 0.7, 1.0] },
//!   "primitives": [
//!     { "kind": "sphere", "center": [0, 0, -1], "radius": 0.5,
//!       "material": { "type": "lambertian", "albedo": [0.1, 0.2, 0.5] } }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use crate::{Camera, Color, Primitive, Scene, SceneSetup, Skybox, SkyboxError};
use lumen_math::Vec3;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur during scene file loading.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid scene description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Skybox error: {0}")]
    Sky(#[from] SkyboxError),
}

/// Result type for scene loading operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// How the camera is placed.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CameraDesc {
    /// Positioned by eye, target and vertical field of view (degrees).
    /// The aspect ratio comes from the output image.
    LookAt {
        look_from: Vec3,
        look_at: Vec3,
        #[serde(default = "default_vup")]
        vup: Vec3,
        vfov: f32,
    },
    /// Explicit viewport basis.
    Basis(Camera),
}

fn default_vup() -> Vec3 {
    Vec3::Y
}

impl CameraDesc {
    pub fn build(&self, aspect_ratio: f32) -> Camera {
        match *self {
            CameraDesc::LookAt {
                look_from,
                look_at,
                vup,
                vfov,
            } => Camera::look_at(look_from, look_at, vup, vfov, aspect_ratio),
            CameraDesc::Basis(camera) => camera,
        }
    }
}

/// The background.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkyDesc {
    Gradient {
        #[serde(default = "default_sky_width")]
        width: usize,
        #[serde(default = "default_sky_height")]
        height: usize,
        top: Color,
        bottom: Color,
    },
    Solid {
        color: Color,
    },
    /// Equirectangular image; relative paths resolve against the scene file.
    Image {
        path: PathBuf,
    },
}

fn default_sky_width() -> usize {
    Skybox::DEFAULT_WIDTH
}

fn default_sky_height() -> usize {
    Skybox::DEFAULT_HEIGHT
}

impl Default for SkyDesc {
    fn default() -> Self {
        SkyDesc::Gradient {
            width: Skybox::DEFAULT_WIDTH,
            height: Skybox::DEFAULT_HEIGHT,
            top: Color::ONE,
            bottom: Color::new(0.5, 0.7, 1.0),
        }
    }
}

/// A parsed scene file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SceneFile {
    pub camera: CameraDesc,
    #[serde(default)]
    pub sky: SkyDesc,
    #[serde(default)]
    pub primitives: Vec<Primitive>,
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl SceneFile {
    /// Parse a scene description. Relative sky image paths stay relative to
    /// the working directory.
    pub fn from_json(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a scene file.
    pub fn load(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let mut file = Self::from_json(&json)?;
        file.base_dir = path.parent().map(Path::to_path_buf);

        log::debug!(
            "Loaded scene file {} with {} primitives",
            path.display(),
            file.primitives.len()
        );
        Ok(file)
    }

    /// Build the scene, camera and sky for an image of the given aspect.
    pub fn build(&self, aspect_ratio: f32) -> SceneResult<SceneSetup> {
        if self.primitives.is_empty() {
            log::warn!("Scene file has no primitives, only the sky will render");
        }

        let skybox = match &self.sky {
            SkyDesc::Gradient {
                width,
                height,
                top,
                bottom,
            } => Skybox::vertical_gradient(*width, *height, *top, *bottom),
            SkyDesc::Solid { color } => Skybox::solid(*color),
            SkyDesc::Image { path } => Skybox::from_image(self.resolve(path))?,
        };

        Ok(SceneSetup {
            scene: self.primitives.iter().copied().collect::<Scene>(),
            skybox,
            camera: self.camera.build(aspect_ratio),
        })
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}
