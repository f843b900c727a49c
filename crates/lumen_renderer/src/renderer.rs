//! Per-pixel sampling loop.
//!
//! Every pixel averages several jittered camera rays. One generator threads
//! through the whole image, so the result depends on the seed and on the
//! visitation order (columns outer, rows inner, then samples, then bounces).

use std::time::Instant;

use crate::{gen_f32, integrator, Camera, Color, Hittable, Skybox};
use rand::RngCore;

/// Default samples per pixel.
pub const DEFAULT_SAMPLES_PER_PIXEL: u32 = 20;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 50,
            samples_per_pixel: DEFAULT_SAMPLES_PER_PIXEL,
            max_depth: integrator::DEFAULT_MAX_DEPTH,
        }
    }
}

impl RenderConfig {
    /// Width over height of the output.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Linear color raster. Row 0 is the bottom of the image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Render a single pixel with multi-sampling.
///
/// Zero samples gives black rather than a 0/0 average.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    skybox: &Skybox,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    if config.samples_per_pixel == 0 {
        return Color::ZERO;
    }

    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let u = (x as f32 + gen_f32(rng)) / config.width as f32;
        let v = (y as f32 + gen_f32(rng)) / config.height as f32;
        let ray = camera.get_ray(u, v);
        pixel_color += integrator::ray_color(&ray, world, skybox, config.max_depth, rng);
    }

    // Average the samples
    pixel_color / config.samples_per_pixel as f32
}

/// Render the entire scene to an image buffer.
///
/// All pixels share `rng`. A caller splitting the image across workers would
/// give each pixel its own stream with [`XorShift64::for_pixel`] instead.
///
/// [`XorShift64::for_pixel`]: crate::XorShift64::for_pixel
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    skybox: &Skybox,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> ImageBuffer {
    if (camera.aspect_ratio() - config.aspect_ratio()).abs() > 1e-3 {
        log::warn!(
            "Camera aspect {:.3} does not match image aspect {:.3}, output will be stretched",
            camera.aspect_ratio(),
            config.aspect_ratio()
        );
    }

    if config.samples_per_pixel == 0 {
        log::warn!("Zero samples per pixel, the image will be black");
    }

    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}",
        config.width,
        config.height,
        config.samples_per_pixel,
        config.max_depth
    );
    let start = Instant::now();

    let mut image = ImageBuffer::new(config.width, config.height);

    for x in 0..config.width {
        for y in 0..config.height {
            let color = render_pixel(camera, world, skybox, x, y, config, rng);
            image.set(x, y, color);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}
