//! Built-in scenes.

use crate::{Camera, Color, Material, Rectangle, Scene, SceneSetup, Skybox, Sphere};
use lumen_math::Vec3;

/// Four spheres over a grey floor under the default sky.
///
/// A blue diffuse sphere, a gold mirror and a hollow glass ball (an outer
/// sphere plus a negative-radius inner one). The viewport has a 2:1 aspect.
pub fn spheres() -> SceneSetup {
    let glass = Material::Dielectric {
        refractive_index: 1.5,
    };

    let mut scene = Scene::new();
    scene.add(Sphere::new(
        Vec3::new(0.0, 0.0, -1.0),
        0.5,
        Material::Lambertian {
            albedo: Color::new(0.1, 0.2, 0.5),
        },
    ));
    scene.add(Rectangle::new(
        Vec3::new(-2.0, -0.5, -3.0),
        Vec3::new(4.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 4.0),
        Material::Lambertian {
            albedo: Color::new(0.5, 0.5, 0.5),
        },
    ));
    scene.add(Sphere::new(
        Vec3::new(1.0, 0.0, -1.0),
        0.5,
        Material::Metal {
            albedo: Color::new(0.8, 0.6, 0.2),
            fuzz: 0.0,
        },
    ));
    scene.add(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), 0.5, glass));
    scene.add(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), -0.45, glass));

    let camera = Camera::new(
        Vec3::new(-2.0, -1.0, -1.0),
        Vec3::new(4.0, 0.0, 0.0),
        Vec3::new(0.0, 2.0, 0.0),
        Vec3::ZERO,
    );

    log::debug!("Built spheres scene with {} primitives", scene.len());
    SceneSetup {
        scene,
        skybox: Skybox::default_sky(),
        camera,
    }
}

/// The Cornell box: red and green side walls, a ceiling light, a mirror
/// sphere and a glass sphere, against a black background.
pub fn cornell_box(aspect_ratio: f32) -> SceneSetup {
    let red = Material::Lambertian {
        albedo: Color::new(0.65, 0.05, 0.05),
    };
    let green = Material::Lambertian {
        albedo: Color::new(0.12, 0.45, 0.15),
    };
    let white = Material::Lambertian {
        albedo: Color::splat(0.73),
    };
    let light = Material::Emissive {
        radiance: Color::splat(15.0),
    };

    let (x0, x1) = (0.0, 555.0);
    let (y0, y1) = (0.0, 555.0);
    let (z0, z1) = (0.0, 555.0);
    let light_size = 130.0;
    let light_pad = (x1 - light_size) / 2.0;

    let height = Vec3::new(0.0, y1 - y0, 0.0);
    let width = Vec3::new(x1 - x0, 0.0, 0.0);
    let depth = Vec3::new(0.0, 0.0, z1 - z0);

    let mut scene = Scene::new();
    scene.add(Rectangle::new(Vec3::new(x1, y0, z0), height, depth, green));
    scene.add(Rectangle::new(Vec3::new(x0, y0, z0), height, depth, red));
    // floor, ceiling and back wall
    scene.add(Rectangle::new(Vec3::new(x0, y0, z0), width, depth, white));
    scene.add(Rectangle::new(Vec3::new(x0, y1, z0), width, depth, white));
    scene.add(Rectangle::new(Vec3::new(x0, y0, z1), width, height, white));
    // Just under the ceiling so it does not share its plane
    scene.add(Rectangle::new(
        Vec3::new(x0 + light_pad, y1 - 1.0, z0 + light_pad),
        Vec3::new(light_size, 0.0, 0.0),
        Vec3::new(0.0, 0.0, light_size),
        light,
    ));
    scene.add(Sphere::new(
        Vec3::new(190.0, 90.0, 190.0),
        90.0,
        Material::Metal {
            albedo: Color::new(0.8, 0.85, 0.88),
            fuzz: 0.0,
        },
    ));
    scene.add(Sphere::new(
        Vec3::new(370.0, 90.0, 370.0),
        90.0,
        Material::Dielectric {
            refractive_index: 1.5,
        },
    ));

    let camera = Camera::look_at(
        Vec3::new(278.0, 278.0, -800.0),
        Vec3::new(278.0, 278.0, 0.0),
        Vec3::Y,
        40.0,
        aspect_ratio,
    );

    log::debug!("Built Cornell box with {} primitives", scene.len());
    SceneSetup {
        scene,
        skybox: Skybox::solid(Color::ZERO),
        camera,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Hittable, Ray};
    use lumen_math::Interval;

    const RANGE: Interval = Interval {
        min: 0.001,
        max: f32::INFINITY,
    };

    #[test]
    fn test_spheres_scene() {
        let setup = spheres();
        assert_eq!(setup.scene.len(), 5);
        assert!((setup.camera.aspect_ratio() - 2.0).abs() < 1e-6);

        // Straight ahead is the blue sphere
        let rec = setup
            .scene
            .hit(&setup.camera.get_ray(0.5, 0.5), RANGE)
            .unwrap();
        assert_eq!(
            rec.material,
            Material::Lambertian {
                albedo: Color::new(0.1, 0.2, 0.5)
            }
        );

        // Straight down is the floor, facing up
        let rec = setup
            .scene
            .hit(&Ray::new(Vec3::ZERO, -Vec3::Y), RANGE)
            .unwrap();
        assert!((rec.t - 0.5).abs() < 1e-6);
        assert!((rec.normal - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_cornell_box_light_faces_down() {
        let setup = cornell_box(1.0);
        assert_eq!(setup.scene.len(), 8);

        let rec = setup
            .scene
            .hit(&Ray::new(Vec3::new(278.0, 300.0, 278.0), Vec3::Y), RANGE)
            .expect("the light is straight above the box center");
        assert_eq!(rec.material.emit(), Color::splat(15.0));
        assert!((rec.normal - -Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_cornell_box_is_closed_behind_the_spheres() {
        let setup = cornell_box(1.0);
        let center = setup.camera.get_ray(0.5, 0.5);
        assert!(setup.scene.hit(&center, RANGE).is_some());
    }
}
