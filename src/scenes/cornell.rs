use super::Scene;
use crate::camera::{Camera, CameraConfig};
use crate::materials::lambertian::Lambertian;
use crate::materials::light::DiffuseLight;
use crate::materials::MaterialRegistry;
use crate::objects::instance::{RotateY, Translate};
use crate::objects::quad::Quad;
use crate::objects::HittableObjects;
use crate::types::color::{Color, ColorOps};
use na::{Point3, Vector3};
use rand::rngs::SmallRng;
use std::sync::Arc;

/// The classic Cornell box: five walls, a ceiling light, and two rotated
/// boxes.
pub struct Cornell;

pub(super) fn standard_materials() -> MaterialRegistry {
    let mut materials = MaterialRegistry::new();
    materials.create_material("red", Lambertian::new(Color::new(0.65, 0.05, 0.05)));
    materials.create_material("white", Lambertian::new(Color::gray(0.73)));
    materials.create_material("green", Lambertian::new(Color::new(0.12, 0.45, 0.15)));
    materials.create_material("light", DiffuseLight::new(Color::gray(15.0)));
    materials
}

pub(super) fn add_walls(world: &mut HittableObjects, materials: &MaterialRegistry) {
    world.add(Arc::new(Quad::new(
        Point3::new(555.0, 0.0, 0.0),
        Vector3::new(0.0, 555.0, 0.0),
        Vector3::new(0.0, 0.0, 555.0),
        materials.get("green"),
    )));
    world.add(Arc::new(Quad::new(
        Point3::new(0.0, 0.0, 0.0),
        Vector3::new(0.0, 555.0, 0.0),
        Vector3::new(0.0, 0.0, 555.0),
        materials.get("red"),
    )));
    world.add(Arc::new(Quad::new(
        Point3::new(0.0, 0.0, 0.0),
        Vector3::new(555.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, 555.0),
        materials.get("white"),
    )));
    world.add(Arc::new(Quad::new(
        Point3::new(555.0, 555.0, 555.0),
        Vector3::new(-555.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, -555.0),
        materials.get("white"),
    )));
    world.add(Arc::new(Quad::new(
        Point3::new(0.0, 0.0, 555.0),
        Vector3::new(555.0, 0.0, 0.0),
        Vector3::new(0.0, 555.0, 0.0),
        materials.get("white"),
    )));
}

pub(super) fn rotated_box(
    extent: Point3<f64>,
    degrees: f64,
    offset: Vector3<f64>,
    materials: &MaterialRegistry,
) -> Arc<Translate> {
    let sides = Quad::new_box(&Point3::new(0.0, 0.0, 0.0), &extent, materials.get("white"));
    let rotated = Arc::new(RotateY::new(Arc::new(sides), degrees));
    Arc::new(Translate::new(rotated, offset))
}

impl Scene for Cornell {
    fn build_camera() -> Camera {
        Camera::new(CameraConfig {
            aspect_ratio: 1.0,
            image_width: 600,
            samples_per_pixel: 200,
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
        let materials = standard_materials();
        let mut world = HittableObjects::new();

        add_walls(&mut world, &materials);
        world.add(Arc::new(Quad::new(
            Point3::new(343.0, 554.0, 332.0),
            Vector3::new(-130.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, -105.0),
            materials.get("light"),
        )));

        world.add(rotated_box(
            Point3::new(165.0, 330.0, 165.0),
            15.0,
            Vector3::new(265.0, 0.0, 295.0),
            &materials,
        ));
        world.add(rotated_box(
            Point3::new(165.0, 165.0, 165.0),
            -18.0,
            Vector3::new(130.0, 0.0, 65.0),
            &materials,
        ));

        world
    }
}
