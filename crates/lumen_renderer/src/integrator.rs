//! Iterative path tracing.

use crate::{Color, Hittable, Ray, Skybox};
use lumen_math::Interval;
use rand::RngCore;

/// Lower bound of the hit range, keeps bounced rays off their own surface.
pub const SHADOW_EPSILON: f32 = 0.001;

/// Default maximum number of bounces per path.
pub const DEFAULT_MAX_DEPTH: u32 = 50;

/// Estimate the radiance arriving along `ray`.
///
/// Follows the path for at most `max_depth` bounces. Emission is added at
/// every hit, weighted by the attenuation gathered so far. The path ends when
/// a material stops scattering or the ray escapes to the skybox; running out
/// of bounces returns what was gathered, with no compensation for the
/// missing energy.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    skybox: &Skybox,
    max_depth: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let hit_range = Interval::new(SHADOW_EPSILON, f32::INFINITY);

    let mut attenuation = Color::ONE;
    let mut color = Color::ZERO;
    let mut ray = *ray;

    for _ in 0..max_depth {
        let Some(rec) = world.hit(&ray, hit_range) else {
            color += attenuation * skybox.sample(ray.direction());
            break;
        };

        color += attenuation * rec.material.emit();

        match rec.material.scatter(&ray, &rec, rng) {
            Some(result) => {
                attenuation *= result.attenuation;
                ray = result.scattered;
            }
            None => break,
        }
    }

    color
}
