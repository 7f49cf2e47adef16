use super::cornell::{add_walls, rotated_box, standard_materials};
use super::Scene;
use crate::camera::{Camera, CameraConfig};
use crate::materials::light::DiffuseLight;
use crate::objects::medium::ConstantMedium;
use crate::objects::quad::Quad;
use crate::objects::HittableObjects;
use crate::types::color::{Color, ColorOps};
use na::{Point3, Vector3};
use rand::rngs::SmallRng;
use std::sync::Arc;

/// Cornell box variant with the two boxes replaced by volumes of smoke,
/// one dark and one light, under a dimmer, larger ceiling light.
pub struct CornellSmoke;

impl Scene for CornellSmoke {
    fn build_camera() -> Camera {
        Camera::new(CameraConfig {
            aspect_ratio: 1.0,
            image_width: 600,
            samples_per_pixel: 600,
            max_depth: 50,
            background: Color::zeros(),
            vfov: 40.0,
            look_from: Point3::new(278.0, 278.0, -800.0),
            look_at: Point3::new(278.0, 278.0, 0.0),
            vup: Vector3::new(0.0, 1.0, 0.0),
            defocus_angle: 0.0,
            focus_distance: 10.0,
            seed: 0,
        })
    }

    fn build_world(_rng: &mut SmallRng) -> HittableObjects {
        let mut materials = standard_materials();
        materials.create_material("wide light", DiffuseLight::new(Color::gray(7.0)));

        let mut world = HittableObjects::new();
        add_walls(&mut world, &materials);
        world.add(Arc::new(Quad::new(
            Point3::new(113.0, 554.0, 127.0),
            Vector3::new(330.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 305.0),
            materials.get("wide light"),
        )));

        let box1 = rotated_box(
            Point3::new(165.0, 330.0, 165.0),
            15.0,
            Vector3::new(265.0, 0.0, 295.0),
            &materials,
        );
        let box2 = rotated_box(
            Point3::new(165.0, 165.0, 165.0),
            -18.0,
            Vector3::new(130.0, 0.0, 65.0),
            &materials,
        );

        world.add(Arc::new(ConstantMedium::new(box1, 0.01, Color::zeros())));
        world.add(Arc::new(ConstantMedium::new(
            box2,
            0.01,
            Color::new(1.0, 1.0, 1.0),
        )));

        world
    }
}
