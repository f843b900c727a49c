//! Parallelogram primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    Material, Ray,
};
use lumen_math::{Interval, Vec3};
use serde::Deserialize;

/// Rays closer than this to parallel with the plane are treated as misses.
const PARALLEL_EPSILON: f32 = 1e-6;

/// A parallelogram spanned by edges `u` and `v` from `origin`.
///
/// The unit normal and squared edge lengths are derived once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "RectangleDesc")]
pub struct Rectangle {
    origin: Vec3,
    u: Vec3,
    v: Vec3,
    normal: Vec3,
    u_len_sq: f32,
    v_len_sq: f32,
    material: Material,
}

/// Serialized form of a [`Rectangle`], without the derived fields.
#[derive(Debug, Clone, Copy, Deserialize)]
struct RectangleDesc {
    origin: Vec3,
    u: Vec3,
    v: Vec3,
    material: Material,
}

impl From<RectangleDesc> for Rectangle {
    fn from(desc: RectangleDesc) -> Self {
        Rectangle::new(desc.origin, desc.u, desc.v, desc.material)
    }
}

impl Rectangle {
    /// Create a new rectangle. Degenerate (parallel) edges are not rejected.
    pub fn new(origin: Vec3, u: Vec3, v: Vec3, material: Material) -> Self {
        Self {
            origin,
            u,
            v,
            normal: u.cross(v).normalize(),
            u_len_sq: u.length_squared(),
            v_len_sq: v.length_squared(),
            material,
        }
    }

    /// Unit normal, `normalize(u x v)`.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn material(&self) -> Material {
        self.material
    }
}

impl Hittable for Rectangle {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let denom = ray.direction().dot(self.normal);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.origin - ray.origin()).dot(self.normal) / denom;
        if !ray_t.contains(t) {
            return None;
        }

        let point = ray.at(t);
        let hit_vec = point - self.origin;

        // Unnormalized projections against squared edge lengths
        let u_proj = hit_vec.dot(self.u);
        let v_proj = hit_vec.dot(self.v);
        if !Interval::new(0.0, self.u_len_sq).contains(u_proj)
            || !Interval::new(0.0, self.v_len_sq).contains(v_proj)
        {
            return None;
        }

        Some(HitRecord {
            t,
            point,
            normal: if denom < 0.0 { self.normal } else { -self.normal },
            material: self.material,
        })
    }
}
