use super::Scene;
use crate::camera::{Camera, CameraConfig};
use crate::materials::lambertian::Lambertian;
use crate::materials::light::DiffuseLight;
use crate::materials::MaterialRef;
use crate::objects::quad::Quad;
use crate::objects::sphere::Sphere;
use crate::objects::HittableObjects;
use crate::textures::noise::NoiseTexture;
use crate::types::color::{Color, ColorOps};
use na::{Point3, Vector3};
use rand::rngs::SmallRng;
use std::sync::Arc;

/// Marble spheres lit only by a rectangular lamp and an overhead emissive
/// sphere against a black sky.
pub struct SimpleLight;

impl Scene for SimpleLight {
    fn build_camera() -> Camera {
        Camera::new(CameraConfig {
            aspect_ratio: 16.0 / 9.0,
            image_width: 400,
            samples_per_pixel: 200,
            max_depth: 50,
            background: Color::zeros(),
            vfov: 20.0,
            look_from: Point3::new(26.0, 3.0, 6.0),
            look_at: Point3::new(0.0, 2.0, 0.0),
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

        let lamp = DiffuseLight::shared(Color::gray(4.0));
        world.add(Arc::new(Sphere::new(
            Point3::new(0.0, 7.0, 0.0),
            2.0,
            lamp.clone(),
        )));
        world.add(Arc::new(Quad::new(
            Point3::new(3.0, 1.0, -2.0),
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(0.0, 2.0, 0.0),
            lamp,
        )));

        world
    }
}
