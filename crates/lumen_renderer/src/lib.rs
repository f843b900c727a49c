//! Lumen Renderer - CPU Path Tracing
//!
//! A small Monte Carlo path tracer: spheres and parallelograms with diffuse,
//! metal, glass and emissive materials, lit by a skybox and by whatever
//! emitters the paths happen to hit.
//!
//! Rendering is single-threaded and deterministic for a given seed.
//!
//! # Example
//!
//! ```no_run
//! use lumen_renderer::{output, render, scenes, RenderConfig, XorShift64};
//!
//! let setup = scenes::spheres();
//! let config = RenderConfig::default();
//! let mut rng = XorShift64::new(42);
//! let image = render(&setup.camera, &setup.scene, &setup.skybox, &config, &mut rng);
//! output::save(&image, "render.ppm")?;
//! # Ok::<(), lumen_renderer::output::OutputError>(())
//! ```

mod camera;
mod hittable;
pub mod integrator;
mod material;
pub mod output;
mod rectangle;
mod renderer;
mod rng;
mod scene;
pub mod scene_file;
pub mod scenes;
mod skybox;
mod sphere;

pub use camera::Camera;
pub use hittable::{HitRecord, Hittable};
pub use integrator::ray_color;
pub use material::{random_in_unit_sphere, Material, ScatterResult};
pub use rectangle::Rectangle;
pub use renderer::{render, render_pixel, ImageBuffer, RenderConfig, DEFAULT_SAMPLES_PER_PIXEL};
pub use rng::{gen_f32, XorShift64};
pub use scene::{Primitive, Scene, SceneSetup};
pub use scene_file::{SceneError, SceneFile};
pub use skybox::{Skybox, SkyboxError};
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Color, Interval, Ray, Vec3};
