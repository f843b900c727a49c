//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    Material, Ray,
};
use lumen_math::{Interval, Vec3};
use serde::Deserialize;

/// A sphere primitive.
///
/// The radius may be negative: the surface is the same, but the reported
/// normal points inward. Nesting a negative sphere inside a positive one with
/// the same dielectric makes a hollow glass shell.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere. The radius is kept as given, sign included.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let b = 2.0 * ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Nearest root first, then the far one
        let root = [(-b - sqrtd) / (2.0 * a), (-b + sqrtd) / (2.0 * a)]
            .into_iter()
            .find(|&t| ray_t.surrounds(t))?;

        let point = ray.at(root);
        Some(HitRecord {
            t: root,
            point,
            normal: (point - self.center) / self.radius,
            material: self.material,
        })
    }
}
