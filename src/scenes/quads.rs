use super::Scene;
use crate::camera::{Camera, CameraConfig};
use crate::materials::lambertian::Lambertian;
use crate::objects::quad::Quad;
use crate::objects::HittableObjects;
use crate::types::color::Color;
use na::{Point3, Vector3};
use rand::rngs::SmallRng;
use std::sync::Arc;

/// Five coloured quads boxing in the view: left, back, right, top, bottom.
pub struct Quads;

impl Scene for Quads {
    fn build_camera() -> Camera {
        Camera::new(CameraConfig {
            aspect_ratio: 1.0,
            image_width: 400,
            samples_per_pixel: 100,
            max_depth: 50,
            background: Color::new(0.70, 0.80, 1.00),
            vfov: 80.0,
            look_from: Point3::new(0.0, 0.0, 9.0),
            look_at: Point3::new(0.0, 0.0, 0.0),
            vup: Vector3::new(0.0, 1.0, 0.0),
            defocus_angle: 0.0,
            focus_distance: 10.0,
            seed: 0,
        })
    }

    fn build_world(_rng: &mut SmallRng) -> HittableObjects {
        let mut world = HittableObjects::new();

        world.add(Arc::new(Quad::new(
            Point3::new(-3.0, -2.0, 5.0),
            Vector3::new(0.0, 0.0, -4.0),
            Vector3::new(0.0, 4.0, 0.0),
            Lambertian::shared(Color::new(1.0, 0.2, 0.2)),
        )));
        world.add(Arc::new(Quad::new(
            Point3::new(-2.0, -2.0, 0.0),
            Vector3::new(4.0, 0.0, 0.0),
            Vector3::new(0.0, 4.0, 0.0),
            Lambertian::shared(Color::new(0.2, 1.0, 0.2)),
        )));
        world.add(Arc::new(Quad::new(
            Point3::new(3.0, -2.0, 1.0),
            Vector3::new(0.0, 0.0, 4.0),
            Vector3::new(0.0, 4.0, 0.0),
            Lambertian::shared(Color::new(0.2, 0.2, 1.0)),
        )));
        world.add(Arc::new(Quad::new(
            Point3::new(-2.0, 3.0, 1.0),
            Vector3::new(4.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 4.0),
            Lambertian::shared(Color::new(1.0, 0.5, 0.0)),
        )));
        world.add(Arc::new(Quad::new(
            Point3::new(-2.0, -3.0, 5.0),
            Vector3::new(4.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, -4.0),
            Lambertian::shared(Color::new(0.2, 0.8, 0.8)),
        )));

        world
    }
}
