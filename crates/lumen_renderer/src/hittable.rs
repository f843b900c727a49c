//! Hittable trait and HitRecord for ray-object intersection.

use crate::{Material, Ray};
use lumen_math::{Interval, Vec3};

/// Record of a ray-object intersection.
///
/// Produced by value for a single query and consumed right away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Surface normal at the intersection.
    ///
    /// Spheres report `(point - center) / radius`, so a negative radius flips
    /// it inward. Rectangles report the plane normal facing the ray's side.
    pub normal: Vec3,
    /// Material of the primitive that was hit
    pub material: Material,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable {
    /// Test if a ray hits this object within the given interval.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord>;
}
