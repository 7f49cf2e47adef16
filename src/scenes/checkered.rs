use super::Scene;
use crate::camera::{Camera, CameraConfig};
use crate::materials::lambertian::Lambertian;
use crate::materials::MaterialRef;
use crate::objects::sphere::Sphere;
use crate::objects::HittableObjects;
use crate::textures::Checkered;
use crate::types::color::{Color, ColorOps};
use na::{Point3, Vector3};
use rand::rngs::SmallRng;
use std::sync::Arc;

/// Two large spheres sharing one checkered surface, nearly touching at the
/// origin.
pub struct CheckeredSpheres;

impl Scene for CheckeredSpheres {
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

    fn build_world(_rng: &mut SmallRng) -> HittableObjects {
        let checker = Arc::new(Checkered::new_solid(
            0.32,
            Color::new(0.9, 0.1, 0.1),
            Color::gray(0.9),
        ));
        let surface: MaterialRef = Arc::new(Lambertian::new_textured(checker));

        let mut world = HittableObjects::new();
        world.add(Arc::new(Sphere::new(
            Point3::new(0.0, -10.0, 0.0),
            10.0,
            surface.clone(),
        )));
        world.add(Arc::new(Sphere::new(
            Point3::new(0.0, 10.0, 0.0),
            10.0,
            surface,
        )));

        world
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::Hittable;
    use rand::SeedableRng;

    #[test]
    fn two_spheres_span_the_vertical_axis() {
        let mut rng = SmallRng::seed_from_u64(0);
        let world = CheckeredSpheres::build_world(&mut rng);
        assert_eq!(world.len(), 2);

        let bbox = world.bounding_box();
        assert!(bbox.y.contains(-20.0) && bbox.y.contains(20.0));
    }
}
