use super::Scene;
use crate::bvh::BvhNode;
use crate::camera::{Camera, CameraConfig};
use crate::materials::dielectric::Dielectric;
use crate::materials::lambertian::Lambertian;
use crate::materials::light::DiffuseLight;
use crate::materials::metal::Metal;
use crate::objects::instance::{RotateY, Translate};
use crate::objects::medium::ConstantMedium;
use crate::objects::quad::Quad;
use crate::objects::sphere::Sphere;
use crate::objects::HittableObjects;
use crate::textures::image::ImageTexture;
use crate::textures::noise::NoiseTexture;
use crate::types::color::{Color, ColorOps};
use na::{Point3, Vector3};
use rand::rngs::SmallRng;
use rand::Rng;
use std::sync::Arc;

/// Everything at once: a ground of random boxes under a BVH, a moving
/// sphere, glass and brushed metal, two participating media, an image-mapped
/// globe, marble noise, and a rotated cluster of a thousand small spheres.
pub struct Showcase;

impl Scene for Showcase {
    fn build_camera() -> Camera {
        Camera::new(CameraConfig {
            aspect_ratio: 1.0,
            image_width: 400,
            samples_per_pixel: 250,
            max_depth: 40,
            background: Color::zeros(),
            vfov: 40.0,
            look_from: Point3::new(478.0, 278.0, -600.0),
            look_at: Point3::new(278.0, 278.0, 0.0),
            vup: Vector3::new(0.0, 1.0, 0.0),
            defocus_angle: 0.0,
            focus_distance: 10.0,
            seed: 0,
        })
    }

    fn build_world(rng: &mut SmallRng) -> HittableObjects {
        let mut world = HittableObjects::new();

        // Uneven ground made of boxes, collapsed into its own BVH.
        let ground = Lambertian::shared(Color::new(0.48, 0.83, 0.53));
        let mut boxes = HittableObjects::new();
        let boxes_per_side = 20;
        for i in 0..boxes_per_side {
            for j in 0..boxes_per_side {
                let w = 100.0;
                let x0 = -1000.0 + i as f64 * w;
                let z0 = -1000.0 + j as f64 * w;
                let x1 = x0 + w;
                let y1 = rng.gen_range(1.0..101.0);
                let z1 = z0 + w;

                boxes.extend(&Quad::new_box(
                    &Point3::new(x0, 0.0, z0),
                    &Point3::new(x1, y1, z1),
                    ground.clone(),
                ));
            }
        }
        world.add(Arc::new(BvhNode::from_objects(rng, &boxes)));

        world.add(Arc::new(Quad::new(
            Point3::new(123.0, 554.0, 147.0),
            Vector3::new(300.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 265.0),
            DiffuseLight::shared(Color::gray(7.0)),
        )));

        let center1 = Point3::new(400.0, 400.0, 200.0);
        let center2 = center1 + Vector3::new(30.0, 0.0, 0.0);
        world.add(Arc::new(Sphere::new_moving(
            center1,
            center2,
            50.0,
            Lambertian::shared(Color::new(0.7, 0.3, 0.1)),
        )));

        world.add(Arc::new(Sphere::new(
            Point3::new(260.0, 150.0, 45.0),
            50.0,
            Dielectric::shared(1.5),
        )));
        world.add(Arc::new(Sphere::new(
            Point3::new(0.0, 150.0, 145.0),
            50.0,
            Metal::shared(Color::new(0.8, 0.8, 0.9), 1.0),
        )));

        // Glass ball filled with a blue haze.
        let boundary = Arc::new(Sphere::new(
            Point3::new(360.0, 150.0, 145.0),
            70.0,
            Dielectric::shared(1.5),
        ));
        world.add(boundary.clone());
        world.add(Arc::new(ConstantMedium::new(
            boundary,
            0.2,
            Color::new(0.2, 0.4, 0.9),
        )));

        // Whole-scene mist.
        let mist_boundary = Arc::new(Sphere::new(
            Point3::new(0.0, 0.0, 0.0),
            5000.0,
            Dielectric::shared(1.5),
        ));
        world.add(Arc::new(ConstantMedium::new(
            mist_boundary,
            1e-4,
            Color::new(1.0, 1.0, 1.0),
        )));

        let globe_texture = Arc::new(ImageTexture::load("assets/earthmap.jpg"));
        world.add(Arc::new(Sphere::new(
            Point3::new(400.0, 200.0, 400.0),
            100.0,
            Arc::new(Lambertian::new_textured(globe_texture)),
        )));

        let marble = Arc::new(NoiseTexture::new(rng, 0.2));
        world.add(Arc::new(Sphere::new(
            Point3::new(220.0, 280.0, 300.0),
            80.0,
            Arc::new(Lambertian::new_textured(marble)),
        )));

        // Cluster of small spheres, rotated and lifted as a block.
        let white = Lambertian::shared(Color::gray(0.73));
        let mut cluster = HittableObjects::new();
        for _ in 0..1000 {
            let center = Point3::new(
                rng.gen_range(0.0..165.0),
                rng.gen_range(0.0..165.0),
                rng.gen_range(0.0..165.0),
            );
            cluster.add(Arc::new(Sphere::new(center, 10.0, white.clone())));
        }
        let cluster_bvh = Arc::new(BvhNode::from_objects(rng, &cluster));
        world.add(Arc::new(Translate::new(
            Arc::new(RotateY::new(cluster_bvh, 15.0)),
            Vector3::new(-100.0, 270.0, 395.0),
        )));

        world
    }
}
