use crate::bvh::Aabb;
use crate::objects::{HitRecord, Hittable, ObjectRef};
use crate::types::interval::Interval;
use crate::types::ray::Ray;
use na::{Point3, Vector3};

/// Moves a wrapped object by offsetting the ray into object space and the
/// resulting hit point back out.
pub struct Translate {
    object: ObjectRef,
    offset: Vector3<f64>,
    bbox: Aabb,
}

impl Translate {
    pub fn new(object: ObjectRef, offset: Vector3<f64>) -> Self {
        let child = object.bounding_box();
        let bbox = Aabb::new(
            Interval::new(child.x.min + offset.x, child.x.max + offset.x),
            Interval::new(child.y.min + offset.y, child.y.max + offset.y),
            Interval::new(child.z.min + offset.z, child.z.max + offset.z),
        );

        Self {
            object,
            offset,
            bbox,
        }
    }
}

impl Hittable for Translate {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let offset_ray = Ray::new(ray.origin - self.offset, ray.direction, ray.time);

        let mut rec = self.object.hit(&offset_ray, ray_t)?;
        rec.translate(&self.offset);

        Some(rec)
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}

/// Rotation about the y axis. The inverse transform is the transpose of the
/// forward rotation and is applied identically to points and normals.
pub struct RotateY {
    object: ObjectRef,
    sin_theta: f64,
    cos_theta: f64,
    bbox: Aabb,
}

impl RotateY {
    pub fn new(object: ObjectRef, degrees: f64) -> Self {
        let radians = degrees.to_radians();
        let sin_theta = radians.sin();
        let cos_theta = radians.cos();

        // Conservative box: rotate all 8 corners of the child's box and
        // take axis-wise extrema.
        let child = object.bounding_box();
        let mut min = Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
        let mut max = Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);

        for i in 0..2 {
            for j in 0..2 {
                for k in 0..2 {
                    let x = if i == 0 { child.x.min } else { child.x.max };
                    let y = if j == 0 { child.y.min } else { child.y.max };
                    let z = if k == 0 { child.z.min } else { child.z.max };

                    let new_x = cos_theta * x + sin_theta * z;
                    let new_z = -sin_theta * x + cos_theta * z;

                    min.x = min.x.min(new_x);
                    max.x = max.x.max(new_x);
                    min.y = min.y.min(y);
                    max.y = max.y.max(y);
                    min.z = min.z.min(new_z);
                    max.z = max.z.max(new_z);
                }
            }
        }

        Self {
            object,
            sin_theta,
            cos_theta,
            bbox: Aabb::from_points(&min, &max),
        }
    }

    fn to_object(&self, v: &Vector3<f64>) -> Vector3<f64> {
        Vector3::new(
            self.cos_theta * v.x - self.sin_theta * v.z,
            v.y,
            self.sin_theta * v.x + self.cos_theta * v.z,
        )
    }

    fn to_world(&self, v: &Vector3<f64>) -> Vector3<f64> {
        Vector3::new(
            self.cos_theta * v.x + self.sin_theta * v.z,
            v.y,
            -self.sin_theta * v.x + self.cos_theta * v.z,
        )
    }
}

impl Hittable for RotateY {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let origin = Point3::from(self.to_object(&ray.origin.coords));
        let direction = self.to_object(&ray.direction);
        let rotated = Ray::new(origin, direction, ray.time);

        let mut rec = self.object.hit(&rotated, ray_t)?;

        let p = Point3::from(self.to_world(&rec.p().coords));
        let normal = self.to_world(&rec.normal());
        rec.set_point_and_normal(p, normal);

        Some(rec)
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}
