//! Scene primitives and the closest-hit query.

use crate::{
    hittable::{HitRecord, Hittable},
    Camera, Ray, Rectangle, Skybox, Sphere,
};
use lumen_math::Interval;
use serde::Deserialize;

/// Any geometric primitive the renderer can intersect.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Sphere(Sphere),
    Rectangle(Rectangle),
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Rectangle> for Primitive {
    fn from(rect: Rectangle) -> Self {
        Primitive::Rectangle(rect)
    }
}

impl Hittable for Primitive {
    #[inline]
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        match self {
            Primitive::Sphere(sphere) => sphere.hit(ray, ray_t),
            Primitive::Rectangle(rect) => rect.hit(ray, ray_t),
        }
    }
}

/// An ordered list of primitives, filled once and then only read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a primitive to the scene.
    pub fn add(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    /// All primitives, in insertion order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Get the number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

impl FromIterator<Primitive> for Scene {
    fn from_iter<I: IntoIterator<Item = Primitive>>(iter: I) -> Self {
        Self {
            primitives: iter.into_iter().collect(),
        }
    }
}

impl Hittable for Scene {
    /// Closest hit over all primitives.
    ///
    /// The upper bound shrinks to each accepted hit. Spheres reject `t` equal
    /// to that bound, so on a tie the earlier primitive wins; rectangles
    /// accept it, so a later rectangle at exactly the same `t` replaces it.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest = None;
        let mut range = ray_t;

        for primitive in &self.primitives {
            if let Some(rec) = primitive.hit(ray, range) {
                range = range.with_max(rec.t);
                closest = Some(rec);
            }
        }

        closest
    }
}

/// Everything a render needs besides its settings.
#[derive(Debug, Clone)]
pub struct SceneSetup {
    pub scene: Scene,
    pub skybox: Skybox,
    pub camera: Camera,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Material};
    use lumen_math::Vec3;

    const RANGE: Interval = Interval {
        min: 0.001,
        max: f32::INFINITY,
    };

    fn lambertian(r: f32) -> Material {
        Material::Lambertian {
            albedo: Color::new(r, 0.0, 0.0),
        }
    }

    #[test]
    fn test_closest_hit_independent_of_order() {
        let near = Primitive::from(Sphere::new(Vec3::new(0.0, 0.0, -2.0), 0.75, lambertian(1.0)));
        let far = Primitive::from(Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, lambertian(0.5)));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        for scene in [Scene::from_iter([near, far]), Scene::from_iter([far, near])] {
            let rec = scene.hit(&ray, RANGE).expect("both spheres are on the ray");
            assert!((rec.t - 1.25).abs() < 1e-5);
            assert_eq!(rec.material, lambertian(1.0));
        }
    }

    #[test]
    fn test_mixed_primitives() {
        let mut scene = Scene::new();
        scene.add(Rectangle::new(
            Vec3::new(-1.0, -1.0, -5.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
            lambertian(0.2),
        ));
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -3.0), 0.5, lambertian(0.9)));
        assert_eq!(scene.len(), 2);

        let center = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = scene.hit(&center, RANGE).unwrap();
        assert_eq!(rec.material, lambertian(0.9));

        let offset = Ray::new(Vec3::new(0.8, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        let rec = scene.hit(&offset, RANGE).unwrap();
        assert_eq!(rec.material, lambertian(0.2));
        assert!((rec.t - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_tie_breaking() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        // Coincident spheres: the open range rejects the second at the same t
        let spheres = Scene::from_iter([
            Primitive::from(Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, lambertian(0.1))),
            Primitive::from(Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, lambertian(0.2))),
        ]);
        assert_eq!(spheres.hit(&ray, RANGE).unwrap().material, lambertian(0.1));

        // Coincident rectangles: the closed range accepts the second
        let quad = |m| {
            Primitive::from(Rectangle::new(
                Vec3::new(-1.0, -1.0, -2.0),
                Vec3::new(2.0, 0.0, 0.0),
                Vec3::new(0.0, 2.0, 0.0),
                m,
            ))
        };
        let quads = Scene::from_iter([quad(lambertian(0.1)), quad(lambertian(0.2))]);
        assert_eq!(quads.hit(&ray, RANGE).unwrap().material, lambertian(0.2));
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert!(scene.hit(&Ray::new(Vec3::ZERO, Vec3::X), RANGE).is_none());
    }

    #[test]
    fn test_primitive_from_json() {
        let json = r#"[
            { "kind": "sphere", "center": [0, 0, -1], "radius": -0.45,
              "material": { "type": "dielectric", "refractive_index": 1.5 } },
            { "kind": "rectangle", "origin": [0, 0, 0], "u": [1, 0, 0], "v": [0, 1, 0],
              "material": { "type": "emissive", "radiance": [15, 15, 15] } }
        ]"#;
        let primitives: Vec<Primitive> = serde_json::from_str(json).unwrap();

        match primitives[0] {
            Primitive::Sphere(sphere) => assert_eq!(sphere.radius, -0.45),
            other => panic!("expected a sphere, got {other:?}"),
        }
        match primitives[1] {
            Primitive::Rectangle(rect) => {
                assert_eq!(rect.normal(), Vec3::Z);
                assert_eq!(rect.material().emit(), Color::splat(15.0));
            }
            other => panic!("expected a rectangle, got {other:?}"),
        }
    }
}
