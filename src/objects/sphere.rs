use crate::bvh::Aabb;
use crate::materials::MaterialRef;
use crate::objects::{HitRecord, Hittable};
use crate::types::interval::Interval;
use crate::types::ray::Ray;
use na::{Point3, Vector3};
use std::f64::consts::PI;

/// Sphere, stationary or moving linearly over the shutter interval.
pub struct Sphere {
    center1: Point3<f64>,
    center_vec: Vector3<f64>,
    is_moving: bool,
    radius: f64,
    material: MaterialRef,
    bbox: Aabb,
}

impl Sphere {
    pub fn new(center: Point3<f64>, radius: f64, material: MaterialRef) -> Self {
        let radius = radius.max(0.0);
        let rvec = Vector3::new(radius, radius, radius);
        let bbox = Aabb::from_points(&(center - rvec), &(center + rvec));

        Self {
            center1: center,
            center_vec: Vector3::zeros(),
            is_moving: false,
            radius,
            material,
            bbox,
        }
    }

    /// Center sweeps from `center1` at time 0 to `center2` at time 1.
    pub fn new_moving(
        center1: Point3<f64>,
        center2: Point3<f64>,
        radius: f64,
        material: MaterialRef,
    ) -> Self {
        let radius = radius.max(0.0);
        let rvec = Vector3::new(radius, radius, radius);
        // The box must contain the sphere at every shutter time, so take
        // the union of the endpoint boxes.
        let box1 = Aabb::from_points(&(center1 - rvec), &(center1 + rvec));
        let box2 = Aabb::from_points(&(center2 - rvec), &(center2 + rvec));

        Self {
            center1,
            center_vec: center2 - center1,
            is_moving: true,
            radius,
            material,
            bbox: box1.merge(&box2),
        }
    }

    fn center_at(&self, time: f64) -> Point3<f64> {
        if self.is_moving {
            self.center1 + time * self.center_vec
        } else {
            self.center1
        }
    }

    /// Spherical texture coordinates from the unit outward normal.
    fn uv(normal: &Vector3<f64>) -> (f64, f64) {
        let theta = (-normal.y).acos();
        let phi = (-normal.z).atan2(normal.x) + PI;

        (phi / (2.0 * PI), theta / PI)
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        // A degenerate sphere has no surface; without this guard a ray
        // through the center grazes the point and the normal divides by
        // a zero radius.
        if self.radius <= 0.0 {
            return None;
        }

        let center = self.center_at(ray.time);
        let oc: Vector3<f64> = center - ray.origin;
        let a = ray.direction.norm_squared();
        let h = ray.direction.dot(&oc);
        let c = oc.norm_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_disc = discriminant.sqrt();

        // Prefer the nearer root, falling back to the farther one.
        let mut root = (h - sqrt_disc) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrt_disc) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let p = ray.at(root);
        let outward_normal = (p - center) / self.radius;
        let (u, v) = Self::uv(&outward_normal);

        Some(HitRecord::new(
            ray,
            p,
            outward_normal,
            root,
            u,
            v,
            self.material.clone(),
        ))
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}
