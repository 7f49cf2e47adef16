pub mod instance;
pub mod medium;
pub mod quad;
pub mod sphere;

use crate::bvh::Aabb;
use crate::materials::MaterialRef;
use crate::types::interval::Interval;
use crate::types::ray::Ray;
use na::{Point3, Vector3};
use std::sync::Arc;

pub type ObjectRef = Arc<dyn Hittable + Send + Sync>;

#[derive(Clone)]
pub struct HitRecord {
    p: Point3<f64>,
    normal: Vector3<f64>,
    t: f64,
    u: f64,
    v: f64,
    front_face: bool,
    material: MaterialRef,
}

impl HitRecord {
    /// `outward_normal` must be unit length; the constructor flips it to
    /// oppose the incoming ray and records which face was struck.
    pub fn new(
        ray: &Ray,
        p: Point3<f64>,
        outward_normal: Vector3<f64>,
        t: f64,
        u: f64,
        v: f64,
        material: MaterialRef,
    ) -> Self {
        let mut rec = Self {
            p,
            normal: outward_normal,
            t,
            u,
            v,
            front_face: false,
            material,
        };
        rec.set_face_normal(ray, outward_normal);
        rec
    }

    pub fn p(&self) -> Point3<f64> {
        self.p
    }

    pub fn normal(&self) -> Vector3<f64> {
        self.normal
    }

    pub fn t(&self) -> f64 {
        self.t
    }

    pub fn u(&self) -> f64 {
        self.u
    }

    pub fn v(&self) -> f64 {
        self.v
    }

    pub fn front_face(&self) -> bool {
        self.front_face
    }

    pub fn material(&self) -> MaterialRef {
        self.material.clone()
    }

    /// Used by geometric wrappers to move the hit back into world space.
    pub(crate) fn translate(&mut self, offset: &Vector3<f64>) {
        self.p += offset;
    }

    pub(crate) fn set_point_and_normal(&mut self, p: Point3<f64>, normal: Vector3<f64>) {
        self.p = p;
        self.normal = normal;
    }

    fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vector3<f64>) {
        self.front_face = ray.direction.dot(&outward_normal) < 0.0;
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

pub trait Hittable {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord>;
    fn bounding_box(&self) -> Aabb;
}

/// Flat list of shared objects. Doubles as the brute-force intersector and
/// the input to `BvhNode::from_objects`.
pub struct HittableObjects {
    objs: Vec<ObjectRef>,
    bbox: Aabb,
}

impl HittableObjects {
    pub fn new() -> Self {
        Self {
            objs: Vec::new(),
            bbox: Aabb::EMPTY,
        }
    }

    pub fn with_object(obj: ObjectRef) -> Self {
        let mut list = Self::new();
        list.add(obj);
        list
    }

    pub fn add(&mut self, obj: ObjectRef) {
        self.bbox = self.bbox.merge(&obj.bounding_box());
        self.objs.push(obj);
    }

    /// Absorb every object of another list, sharing the children.
    pub fn extend(&mut self, other: &HittableObjects) {
        for obj in &other.objs {
            self.add(obj.clone());
        }
    }

    pub fn clear(&mut self) {
        self.objs.clear();
        self.bbox = Aabb::EMPTY;
    }

    pub fn len(&self) -> usize {
        self.objs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objs.is_empty()
    }

    pub fn objs_clone(&self) -> Vec<ObjectRef> {
        self.objs.clone()
    }
}

impl Default for HittableObjects {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for HittableObjects {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut rec: Option<HitRecord> = None;
        let mut closest_so_far = ray_t.max;

        for obj in &self.objs {
            if let Some(hit) = obj.hit(ray, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = hit.t();
                rec = Some(hit);
            }
        }
        rec
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}
