//! Environment lookup for rays that escape the scene.
//!
//! The skybox is a grid of colors addressed by ray direction through an
//! equirectangular (latitude/longitude) mapping.

use std::f32::consts::PI;
use std::path::Path;

use crate::Color;
use lumen_math::Vec3;
use thiserror::Error;

/// Errors that can occur while building a skybox.
#[derive(Error, Debug)]
pub enum SkyboxError {
    #[error("Skybox must be at least 1x1, got {width}x{height}")]
    Empty { width: usize, height: usize },

    #[error("Expected {expected} texels for the skybox, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Image decoding error: {0}")]
    Image(#[from] image::ImageError),
}

pub type SkyboxResult<T> = Result<T, SkyboxError>;

/// A fixed-size grid of background colors, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Skybox {
    width: usize,
    height: usize,
    texels: Vec<Color>,
}

impl Skybox {
    /// Width of the default sky grid.
    pub const DEFAULT_WIDTH: usize = 100;
    /// Height of the default sky grid.
    pub const DEFAULT_HEIGHT: usize = 50;

    /// Create a skybox from row-major texels.
    pub fn new(width: usize, height: usize, texels: Vec<Color>) -> SkyboxResult<Self> {
        if width == 0 || height == 0 {
            return Err(SkyboxError::Empty { width, height });
        }
        if texels.len() != width * height {
            return Err(SkyboxError::SizeMismatch {
                expected: width * height,
                actual: texels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            texels,
        })
    }

    /// A 1x1 skybox of a single color.
    pub fn solid(color: Color) -> Self {
        Self {
            width: 1,
            height: 1,
            texels: vec![color],
        }
    }

    /// Rows blend linearly from `top` (row 0) to `bottom` (last row).
    ///
    /// Zero extents are raised to 1.
    pub fn vertical_gradient(width: usize, height: usize, top: Color, bottom: Color) -> Self {
        let width = width.max(1);
        let height = height.max(1);

        let mut texels = Vec::with_capacity(width * height);
        for row in 0..height {
            let v = if height > 1 {
                row as f32 / (height - 1) as f32
            } else {
                0.0
            };
            let color = (1.0 - v) * top + v * bottom;
            texels.extend(std::iter::repeat(color).take(width));
        }

        Self {
            width,
            height,
            texels,
        }
    }

    /// The default white to light-blue sky.
    pub fn default_sky() -> Self {
        Self::vertical_gradient(
            Self::DEFAULT_WIDTH,
            Self::DEFAULT_HEIGHT,
            Color::ONE,
            Color::new(0.5, 0.7, 1.0),
        )
    }

    /// Load an equirectangular image as a skybox.
    ///
    /// 8-bit channels are rescaled to [0, 1]; no sRGB decoding is applied.
    pub fn from_image(path: impl AsRef<Path>) -> SkyboxResult<Self> {
        let path = path.as_ref();
        let img = image::open(path)?.into_rgb32f();
        let (width, height) = (img.width() as usize, img.height() as usize);
        log::debug!("Loaded {}x{} skybox from {}", width, height, path.display());

        let texels = img
            .pixels()
            .map(|p| Color::new(p.0[0], p.0[1], p.0[2]))
            .collect();

        Self::new(width, height, texels)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Color at `(row, col)`. Panics when out of range.
    pub fn get(&self, row: usize, col: usize) -> Color {
        assert!(row < self.height && col < self.width, "skybox index out of range");
        self.texels[row * self.width + col]
    }

    /// Grid cell `(row, col)` seen along a unit direction.
    ///
    /// `u = 0.5 + atan2(z, x) / 2pi`, `v = 0.5 - asin(y) / pi`, each scaled by
    /// the extent minus one and truncated.
    pub fn cell_for(&self, direction: Vec3) -> (usize, usize) {
        let u = 0.5 + direction.z.atan2(direction.x) / (2.0 * PI);
        let v = 0.5 - direction.y.clamp(-1.0, 1.0).asin() / PI;

        let col = (u * (self.width - 1) as f32) as usize;
        let row = (v * (self.height - 1) as f32) as usize;
        (row.min(self.height - 1), col.min(self.width - 1))
    }

    /// Background color seen along a unit direction.
    pub fn sample(&self, direction: Vec3) -> Color {
        let (row, col) = self.cell_for(direction);
        self.get(row, col)
    }
}

impl Default for Skybox {
    fn default() -> Self {
        Self::default_sky()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Each texel encodes its own coordinates.
    fn coordinate_sky(width: usize, height: usize) -> Skybox {
        let texels = (0..height)
            .flat_map(|row| (0..width).map(move |col| Color::new(col as f32, row as f32, 0.0)))
            .collect();
        Skybox::new(width, height, texels).unwrap()
    }

    #[test]
    fn test_new_validates_size() {
        assert!(matches!(
            Skybox::new(2, 2, vec![Color::ZERO; 3]),
            Err(SkyboxError::SizeMismatch {
                expected: 4,
                actual: 3
            })
        ));
        assert!(matches!(
            Skybox::new(0, 5, Vec::new()),
            Err(SkyboxError::Empty { .. })
        ));
    }

    #[test]
    fn test_plus_x_samples_midpoint_column() {
        let sky = coordinate_sky(100, 50);

        // atan2(0, 1) = 0 so u = 0.5; asin(0) = 0 so v = 0.5
        let (row, col) = sky.cell_for(Vec3::X);
        assert_eq!(col, (0.5 * 99.0) as usize);
        assert_eq!(row, (0.5 * 49.0) as usize);
        assert_eq!(sky.sample(Vec3::X), Color::new(49.0, 24.0, 0.0));
    }

    #[test]
    fn test_poles() {
        let sky = coordinate_sky(8, 5);
        assert_eq!(sky.cell_for(Vec3::Y).0, 0);
        assert_eq!(sky.cell_for(-Vec3::Y).0, 4);
    }

    #[test]
    fn test_slightly_denormalized_direction_stays_in_range() {
        let sky = coordinate_sky(8, 5);
        let (row, col) = sky.cell_for(Vec3::new(0.0, 1.000_001, 0.0));
        assert_eq!(row, 0);
        assert!(col < 8);
    }

    #[test]
    fn test_vertical_gradient() {
        let top = Color::ONE;
        let bottom = Color::new(0.5, 0.7, 1.0);
        let sky = Skybox::vertical_gradient(4, 3, top, bottom);

        assert_eq!(sky.get(0, 3), top);
        assert_eq!(sky.get(2, 0), bottom);
        assert!((sky.get(1, 2) - Color::new(0.75, 0.85, 1.0)).length() < 1e-6);
    }

    #[test]
    fn test_solid_sky_everywhere() {
        let sky = Skybox::solid(Color::new(0.1, 0.2, 0.3));
        for dir in [Vec3::X, -Vec3::X, Vec3::Y, -Vec3::Y, Vec3::Z, Vec3::new(1.0, 1.0, 1.0).normalize()] {
            assert_eq!(sky.sample(dir), Color::new(0.1, 0.2, 0.3));
        }
    }

    #[test]
    fn test_from_image() {
        let path = std::env::temp_dir().join(format!("lumen_sky_{}.png", std::process::id()));
        let mut img = image::RgbImage::new(3, 2);
        img.put_pixel(2, 1, image::Rgb([255, 0, 51]));
        img.save(&path).unwrap();

        let sky = Skybox::from_image(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!((sky.width(), sky.height()), (3, 2));
        assert!((sky.get(1, 2) - Color::new(1.0, 0.0, 0.2)).length() < 1e-5);
        assert_eq!(sky.get(0, 0), Color::ZERO);
    }

    #[test]
    fn test_from_image_missing_file() {
        assert!(matches!(
            Skybox::from_image("/nonexistent/lumen/sky.png"),
            Err(SkyboxError::Image(_))
        ));
    }
}
