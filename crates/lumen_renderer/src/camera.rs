//! Camera for ray generation.

use crate::Ray;
use lumen_math::Vec3;
use serde::Deserialize;

/// A pinhole camera described by its viewport.
///
/// Screen coordinates `(u, v)` in [0, 1] map to
/// `lower_left_corner + u * horizontal + v * vertical`, with `v = 0` at the
/// bottom of the image.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Camera {
    pub lower_left_corner: Vec3,
    pub horizontal: Vec3,
    pub vertical: Vec3,
    pub origin: Vec3,
}

impl Camera {
    /// Create a camera from an explicit viewport basis.
    pub fn new(lower_left_corner: Vec3, horizontal: Vec3, vertical: Vec3, origin: Vec3) -> Self {
        Self {
            lower_left_corner,
            horizontal,
            vertical,
            origin,
        }
    }

    /// Build a camera looking from `look_from` towards `look_at`.
    ///
    /// - `vfov`: vertical field of view in degrees
    /// - `aspect_ratio`: viewport width over height
    pub fn look_at(look_from: Vec3, look_at: Vec3, vup: Vec3, vfov: f32, aspect_ratio: f32) -> Self {
        let h = (vfov.to_radians() / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = aspect_ratio * viewport_height;

        // Camera basis vectors
        let w = (look_from - look_at).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        Self {
            lower_left_corner: look_from
                - (viewport_width / 2.0) * u
                - (viewport_height / 2.0) * v
                - w,
            horizontal: viewport_width * u,
            vertical: viewport_height * v,
            origin: look_from,
        }
    }

    /// Ray through screen coordinates `(u, v)`.
    #[inline]
    pub fn get_ray(&self, u: f32, v: f32) -> Ray {
        Ray::new(
            self.origin,
            self.lower_left_corner + u * self.horizontal + v * self.vertical - self.origin,
        )
    }

    /// Width over height of the viewport.
    pub fn aspect_ratio(&self) -> f32 {
        self.horizontal.length() / self.vertical.length()
    }
}
