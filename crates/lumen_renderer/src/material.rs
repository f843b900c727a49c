//! Surface materials: emission and scattering.

use crate::{gen_f32, hittable::HitRecord, Color, Ray};
use lumen_math::Vec3;
use rand::RngCore;
use serde::Deserialize;

/// Result of a scattering event that continues the path.
#[derive(Debug, Clone, Copy)]
pub struct ScatterResult {
    /// Color filter applied to everything gathered further along the path
    pub attenuation: Color,
    /// The outgoing ray
    pub scattered: Ray,
}

/// How light interacts with a surface.
///
/// A closed set; `emit` and `scatter` match on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Material {
    /// Diffuse surface.
    Lambertian { albedo: Color },
    /// Mirror-like surface. `fuzz` is nominally in [0, 1] but not clamped.
    Metal { albedo: Color, fuzz: f32 },
    /// Non-absorbing refractive medium (1.5 for glass).
    Dielectric { refractive_index: f32 },
    /// Light source.
    Emissive { radiance: Color },
}

impl Material {
    /// Light emitted by the surface. Zero for everything but `Emissive`.
    pub fn emit(&self) -> Color {
        match self {
            Material::Emissive { radiance } => *radiance,
            Material::Lambertian { .. } | Material::Metal { .. } | Material::Dielectric { .. } => {
                Color::ZERO
            }
        }
    }

    /// Scatter an incoming ray.
    ///
    /// Returns `None` when the path stops here (absorbed, or a light source).
    pub fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        match *self {
            Material::Lambertian { albedo } => {
                let normal = rec.normal.normalize();
                let mut direction = normal + random_in_unit_sphere(rng);

                // Catch degenerate scatter direction
                if direction.length_squared() < 1e-8 {
                    direction = normal;
                }

                Some(ScatterResult {
                    attenuation: albedo,
                    scattered: Ray::new(rec.point, direction),
                })
            }
            Material::Metal { albedo, fuzz } => {
                let normal = rec.normal.normalize();
                let reflected = reflect(ray_in.direction(), normal);
                let scattered = Ray::new(rec.point, reflected + fuzz * random_in_unit_sphere(rng));

                // Fuzz can push the ray below the surface, absorb it then
                if scattered.direction().dot(normal) > 0.0 {
                    Some(ScatterResult {
                        attenuation: albedo,
                        scattered,
                    })
                } else {
                    None
                }
            }
            Material::Dielectric { refractive_index } => {
                let direction = ray_in.direction();
                let incidence = direction.dot(rec.normal);

                // Leaving the medium when travelling along the normal
                let (normal, eta, cosine) = if incidence > 0.0 {
                    (-rec.normal, refractive_index, refractive_index * incidence)
                } else {
                    (rec.normal, 1.0 / refractive_index, -incidence)
                };

                let refracted = refract(direction, normal, eta);
                let reflect_prob = match refracted {
                    Some(_) => schlick(cosine, refractive_index),
                    None => 1.0,
                };

                // Drawn even under total internal reflection
                let draw = gen_f32(rng);
                let outgoing = match refracted {
                    Some(refracted) if draw >= reflect_prob => refracted,
                    _ => reflect(direction, rec.normal),
                };

                Some(ScatterResult {
                    attenuation: Color::ONE,
                    scattered: Ray::new(rec.point, outgoing),
                })
            }
            Material::Emissive { .. } => None,
        }
    }
}

/// Reflect a vector about a normal.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through a surface, or `None` on total internal
/// reflection.
#[inline]
fn refract(v: Vec3, n: Vec3, eta: f32) -> Option<Vec3> {
    let cos_i = v.dot(n);
    let cos_t_sq = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    (cos_t_sq > 0.0).then(|| eta * (v - cos_i * n) - cos_t_sq.sqrt() * n)
}

/// Schlick's approximation for reflectance
fn schlick(cosine: f32, refractive_index: f32) -> f32 {
    let r0 = ((1.0 - refractive_index) / (1.0 + refractive_index)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

/// Uniform point strictly inside the unit sphere, by rejection sampling.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(
            gen_f32(rng) * 2.0 - 1.0,
            gen_f32(rng) * 2.0 - 1.0,
            gen_f32(rng) * 2.0 - 1.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}
