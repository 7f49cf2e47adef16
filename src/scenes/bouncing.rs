use super::Scene;
use crate::bvh::BvhNode;
use crate::camera::{Camera, CameraConfig};
use crate::materials::dielectric::Dielectric;
use crate::materials::lambertian::Lambertian;
use crate::materials::metal::Metal;
use crate::objects::sphere::Sphere;
use crate::objects::HittableObjects;
use crate::textures::Checkered;
use crate::types::color::{Color, ColorOps};
use na::{Point3, Vector3};
use rand::rngs::SmallRng;
use rand::Rng;
use std::sync::Arc;

/// Field of small random spheres over a checkered ground, some bouncing
/// upward during the shutter, seen with a slight defocus blur.
pub struct BouncingSpheres;

fn random_color(rng: &mut SmallRng) -> Color {
    Color::new(
        rng.gen_range(0.0..1.0),
        rng.gen_range(0.0..1.0),
        rng.gen_range(0.0..1.0),
    )
}

fn random_color_range(rng: &mut SmallRng, min: f64, max: f64) -> Color {
    Color::new(
        rng.gen_range(min..max),
        rng.gen_range(min..max),
        rng.gen_range(min..max),
    )
}

impl Scene for BouncingSpheres {
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
            defocus_angle: 0.6,
            focus_distance: 10.0,
            seed: 0,
        })
    }

    fn build_world(rng: &mut SmallRng) -> HittableObjects {
        let mut world = HittableObjects::new();

        let checker = Arc::new(Checkered::new_solid(
            0.32,
            Color::new(0.2, 0.3, 0.1),
            Color::gray(0.9),
        ));
        world.add(Arc::new(Sphere::new(
            Point3::new(0.0, -1000.0, 0.0),
            1000.0,
            Arc::new(Lambertian::new_textured(checker)),
        )));

        for a in -11..11 {
            for b in -11..11 {
                let choose_mat: f64 = rng.gen_range(0.0..1.0);
                let center = Point3::new(
                    a as f64 + 0.9 * rng.gen_range(0.0..1.0),
                    0.2,
                    b as f64 + 0.9 * rng.gen_range(0.0..1.0),
                );

                if (center - Point3::new(4.0, 0.2, 0.0)).norm() <= 0.9 {
                    continue;
                }

                if choose_mat < 0.8 {
                    let albedo = random_color(rng).component_mul(&random_color(rng));
                    let center2 = center + Vector3::new(0.0, rng.gen_range(0.0..0.5), 0.0);
                    world.add(Arc::new(Sphere::new_moving(
                        center,
                        center2,
                        0.2,
                        Lambertian::shared(albedo),
                    )));
                } else if choose_mat < 0.95 {
                    let albedo = random_color_range(rng, 0.5, 1.0);
                    let fuzz = rng.gen_range(0.0..0.5);
                    world.add(Arc::new(Sphere::new(
                        center,
                        0.2,
                        Metal::shared(albedo, fuzz),
                    )));
                } else {
                    world.add(Arc::new(Sphere::new(center, 0.2, Dielectric::shared(1.5))));
                }
            }
        }

        world.add(Arc::new(Sphere::new(
            Point3::new(0.0, 1.0, 0.0),
            1.0,
            Dielectric::shared(1.5),
        )));
        world.add(Arc::new(Sphere::new(
            Point3::new(-4.0, 1.0, 0.0),
            1.0,
            Lambertian::shared(Color::new(0.4, 0.2, 0.1)),
        )));
        world.add(Arc::new(Sphere::new(
            Point3::new(4.0, 1.0, 0.0),
            1.0,
            Metal::shared(Color::new(0.7, 0.6, 0.5), 0.0),
        )));

        HittableObjects::with_object(Arc::new(BvhNode::from_objects(rng, &world)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::Hittable;
    use rand::SeedableRng;

    #[test]
    fn world_builds_under_a_bvh() {
        let mut rng = SmallRng::seed_from_u64(17);
        let world = BouncingSpheres::build_world(&mut rng);
        // Everything is wrapped into one BVH root.
        assert_eq!(world.len(), 1);
        assert!(world.bounding_box().x.size() > 0.0);
    }

    #[test]
    fn same_seed_builds_same_world() {
        let mut rng_a = SmallRng::seed_from_u64(17);
        let mut rng_b = SmallRng::seed_from_u64(17);
        let a = BouncingSpheres::build_world(&mut rng_a);
        let b = BouncingSpheres::build_world(&mut rng_b);
        assert_eq!(a.bounding_box().x.min, b.bounding_box().x.min);
        assert_eq!(a.bounding_box().z.max, b.bounding_box().z.max);
    }
}
