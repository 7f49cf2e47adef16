use super::Scene;
use crate::camera::{Camera, CameraConfig};
use crate::materials::lambertian::Lambertian;
use crate::materials::MaterialRef;
use crate::objects::sphere::Sphere;
use crate::objects::HittableObjects;
use crate::textures::noise::NoiseTexture;
use crate::types::color::Color;
use na::{Point3, Vector3};
use rand::rngs::SmallRng;
use std::sync::Arc;

/// A marble-textured sphere resting on a marble-textured ground.
pub struct PerlinSpheres;

impl Scene for PerlinSpheres {
    fn build_camera() -> Camera {
        Camera::new(CameraConfig {
            aspect_ratio: 16.0 / 9.0,
            image_width: 400,
            samples_per_pixel: 100,
            max_depth: 50,
            background: Color::new(0.70, 0.80, 1.00),
            vfov: 20.0,
            look_from: Point3::new(13.0, 2.0, 3.0),
            look_at: Point3::new(0.0, 0.0, 0.0),
            vup: Vector3::new(0.0, 1.0, 0.0),
            defocus_angle: 0.0,
            focus_distance: 10.0,
            seed: 0,
        })
    }

    fn build_world(rng: &mut SmallRng) -> HittableObjects {
        let marble = Arc::new(NoiseTexture::new(rng, 4.0));
        let surface: MaterialRef = Arc::new(Lambertian::new_textured(marble));

        let mut world = HittableObjects::new();
        world.add(Arc::new(Sphere::new(
            Point3::new(0.0, -1000.0, 0.0),
            1000.0,
            surface.clone(),
        )));
        world.add(Arc::new(Sphere::new(
            Point3::new(0.0, 2.0, 0.0),
            2.0,
            surface,
        )));

        world
    }
}
