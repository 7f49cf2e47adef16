use super::Scene;
use crate::camera::{Camera, CameraConfig};
use crate::materials::lambertian::Lambertian;
use crate::objects::sphere::Sphere;
use crate::objects::HittableObjects;
use crate::textures::image::ImageTexture;
use crate::types::color::Color;
use na::{Point3, Vector3};
use rand::rngs::SmallRng;
use std::sync::Arc;

/// A single image-mapped globe.
pub struct Earth;

impl Scene for Earth {
    fn build_camera() -> Camera {
        Camera::new(CameraConfig {
            aspect_ratio: 16.0 / 9.0,
            image_width: 400,
            samples_per_pixel: 100,
            max_depth: 50,
            background: Color::new(0.70, 0.80, 1.00),
            vfov: 20.0,
            look_from: Point3::new(0.0, 0.0, 12.0),
            look_at: Point3::new(0.0, 0.0, 0.0),
            vup: Vector3::new(0.0, 1.0, 0.0),
            defocus_angle: 0.0,
            focus_distance: 10.0,
            seed: 0,
        })
    }

    fn build_world(_rng: &mut SmallRng) -> HittableObjects {
        let earth_texture = Arc::new(ImageTexture::load("assets/earthmap.jpg"));

        HittableObjects::with_object(Arc::new(Sphere::new(
            Point3::new(0.0, 0.0, 0.0),
            2.0,
            Arc::new(Lambertian::new_textured(earth_texture)),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::Hittable;
    use rand::SeedableRng;

    #[test]
    fn globe_is_the_only_object() {
        let mut rng = SmallRng::seed_from_u64(0);
        let world = Earth::build_world(&mut rng);
        assert_eq!(world.len(), 1);

        let bbox = world.bounding_box();
        assert!(bbox.x.contains(-2.0) && bbox.x.contains(2.0));
    }
}
