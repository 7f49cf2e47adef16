use crate::objects::{HitRecord, Hittable, HittableObjects, ObjectRef};
use crate::types::interval::Interval;
use crate::types::ray::Ray;
use na::Point3;
use rand::Rng;
use std::cmp::Ordering;
use std::sync::Arc;

/// Axis-aligned bounding box stored as one interval per axis.
#[derive(Clone, Copy, Debug, Default)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    pub const EMPTY: Aabb = Aabb {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };

    pub fn new(x: Interval, y: Interval, z: Interval) -> Self {
        let mut bbox = Self { x, y, z };
        bbox.pad_to_minimums();
        bbox
    }

    /// Box spanning two opposite corners, in either coordinate order.
    pub fn from_points(a: &Point3<f64>, b: &Point3<f64>) -> Self {
        let span = |i: usize| {
            if a[i] <= b[i] {
                Interval::new(a[i], b[i])
            } else {
                Interval::new(b[i], a[i])
            }
        };

        let mut bbox = Self {
            x: span(0),
            y: span(1),
            z: span(2),
        };
        bbox.pad_to_minimums();
        bbox
    }

    /// Exact union of two boxes. Merging never re-pads.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            x: Interval::from_pair(&self.x, &other.x),
            y: Interval::from_pair(&self.y, &other.y),
            z: Interval::from_pair(&self.z, &other.z),
        }
    }

    pub fn axis_interval(&self, axis: usize) -> &Interval {
        match axis {
            1 => &self.y,
            2 => &self.z,
            _ => &self.x,
        }
    }

    /// Index of the widest axis. Ties between x and y fall through to z.
    pub fn longest_axis(&self) -> usize {
        if self.x.size() > self.y.size() {
            if self.x.size() > self.z.size() {
                0
            } else {
                2
            }
        } else if self.y.size() > self.z.size() {
            1
        } else {
            2
        }
    }

    /// Slab test. A zero direction component divides to an IEEE infinity,
    /// which orders correctly against the slab bounds.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> bool {
        let mut ray_t = ray_t;

        for axis in 0..3 {
            let ax = self.axis_interval(axis);
            let adinv = 1.0 / ray.direction[axis];

            let t0 = (ax.min - ray.origin[axis]) * adinv;
            let t1 = (ax.max - ray.origin[axis]) * adinv;

            if t0 < t1 {
                if t0 > ray_t.min {
                    ray_t.min = t0;
                }
                if t1 < ray_t.max {
                    ray_t.max = t1;
                }
            } else {
                if t1 > ray_t.min {
                    ray_t.min = t1;
                }
                if t0 < ray_t.max {
                    ray_t.max = t0;
                }
            }

            if ray_t.max <= ray_t.min {
                return false;
            }
        }
        true
    }

    // Flat primitives (quads) produce zero-thickness boxes that the slab
    // test can miss. Widen any axis thinner than the threshold.
    fn pad_to_minimums(&mut self) {
        let delta = 1e-3;
        if self.x.size() < delta {
            self.x = self.x.expand(delta);
        }
        if self.y.size() < delta {
            self.y = self.y.expand(delta);
        }
        if self.z.size() < delta {
            self.z = self.z.expand(delta);
        }
    }
}

/// Binary bounding-volume hierarchy over shared hittables.
///
/// Construction sorts a working copy of the object list along a randomly
/// chosen axis per node and splits at the midpoint. The tree is immutable
/// once built.
pub struct BvhNode {
    left: ObjectRef,
    right: ObjectRef,
    bbox: Aabb,
}

impl BvhNode {
    pub fn from_objects(rng: &mut impl Rng, objects: &HittableObjects) -> Self {
        // Work on a clone so the caller's list order is untouched.
        let mut objects = objects.objs_clone();
        let len = objects.len();

        log::debug!("Building BVH over {} objects", len);
        Self::build(rng, &mut objects, 0, len)
    }

    fn box_compare(a: &ObjectRef, b: &ObjectRef, axis: usize) -> Ordering {
        let a_min = a.bounding_box().axis_interval(axis).min;
        let b_min = b.bounding_box().axis_interval(axis).min;
        a_min.partial_cmp(&b_min).unwrap_or(Ordering::Equal)
    }

    fn build(rng: &mut impl Rng, objects: &mut Vec<ObjectRef>, start: usize, end: usize) -> Self {
        let axis: usize = rng.gen_range(0..3);

        let span = end - start;
        let (left, right) = match span {
            // A single object fills both slots; traversal probes it twice
            // rather than special-casing a one-child node.
            1 => (objects[start].clone(), objects[start].clone()),
            2 => (objects[start].clone(), objects[start + 1].clone()),
            _ => {
                objects[start..end].sort_by(|a, b| Self::box_compare(a, b, axis));

                let mid = start + span / 2;
                let left =
                    Arc::new(Self::build(rng, objects, start, mid)) as ObjectRef;
                let right = Arc::new(Self::build(rng, objects, mid, end)) as ObjectRef;

                (left, right)
            }
        };

        let bbox = left.bounding_box().merge(&right.bounding_box());

        Self { left, right, bbox }
    }
}

impl Hittable for BvhNode {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        if !self.bbox.hit(ray, ray_t) {
            return None;
        }

        let hit_left = self.left.hit(ray, ray_t);
        // Anything in the right subtree only matters if it is closer than
        // the hit already found on the left.
        let right_t = Interval::new(ray_t.min, hit_left.as_ref().map_or(ray_t.max, |h| h.t()));
        let hit_right = self.right.hit(ray, right_t);

        hit_right.or(hit_left)
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::lambertian::Lambertian;
    use crate::objects::sphere::Sphere;
    use crate::types::color::{Color, ColorOps};
    use na::Vector3;
    use rand::{rngs::SmallRng, SeedableRng};

    fn unit_box() -> Aabb {
        Aabb::from_points(&Point3::new(0.0, 0.0, 0.0), &Point3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn ray_through_interior_hits() {
        let bbox = unit_box();
        let ray = Ray::new(
            Point3::new(0.5, 0.5, -2.0),
            Vector3::new(0.0, 0.0, 1.0),
            0.0,
        );
        assert!(bbox.hit(&ray, Interval::new(0.0, f64::INFINITY)));
    }

    #[test]
    fn parallel_ray_outside_slab_misses() {
        let bbox = unit_box();
        // Direction has a zero x component; origin is outside the x slab.
        let ray = Ray::new(
            Point3::new(5.0, 0.5, -2.0),
            Vector3::new(0.0, 0.0, 1.0),
            0.0,
        );
        assert!(!bbox.hit(&ray, Interval::new(0.0, f64::INFINITY)));
    }

    #[test]
    fn parallel_ray_inside_slab_hits() {
        let bbox = unit_box();
        let ray = Ray::new(
            Point3::new(0.5, 0.5, -2.0),
            Vector3::new(0.0, 0.0, 1.0),
            0.0,
        );
        assert!(bbox.hit(&ray, Interval::UNIVERSE));
    }

    #[test]
    fn ray_behind_box_misses_forward_interval() {
        let bbox = unit_box();
        let ray = Ray::new(
            Point3::new(0.5, 0.5, 5.0),
            Vector3::new(0.0, 0.0, 1.0),
            0.0,
        );
        assert!(!bbox.hit(&ray, Interval::new(0.0, f64::INFINITY)));
    }

    #[test]
    fn corner_constructor_orders_extrema() {
        let bbox = Aabb::from_points(&Point3::new(4.0, -1.0, 2.0), &Point3::new(1.0, 3.0, -2.0));
        assert_eq!(bbox.x.min, 1.0);
        assert_eq!(bbox.x.max, 4.0);
        assert_eq!(bbox.y.min, -1.0);
        assert_eq!(bbox.z.max, 2.0);
    }

    #[test]
    fn flat_boxes_are_padded() {
        let bbox = Aabb::from_points(&Point3::new(0.0, 0.0, 0.0), &Point3::new(1.0, 0.0, 1.0));
        assert!(bbox.y.size() >= 1e-3);
    }

    #[test]
    fn merge_does_not_pad() {
        let a = Aabb::from_points(&Point3::new(0.0, 0.0, 0.0), &Point3::new(1.0, 1.0, 1.0));
        let b = Aabb::from_points(&Point3::new(2.0, 0.0, 0.0), &Point3::new(3.0, 1.0, 1.0));
        let merged = a.merge(&b);
        assert_eq!(merged.x.min, a.x.min);
        assert_eq!(merged.x.max, b.x.max);
        assert_eq!(merged.y.min, a.y.min);
    }

    #[test]
    fn longest_axis_tie_breaks_to_z() {
        let bbox = Aabb::new(
            Interval::new(0.0, 1.0),
            Interval::new(0.0, 1.0),
            Interval::new(0.0, 1.0),
        );
        assert_eq!(bbox.longest_axis(), 2);

        let bbox = Aabb::new(
            Interval::new(0.0, 5.0),
            Interval::new(0.0, 1.0),
            Interval::new(0.0, 1.0),
        );
        assert_eq!(bbox.longest_axis(), 0);

        let bbox = Aabb::new(
            Interval::new(0.0, 1.0),
            Interval::new(0.0, 5.0),
            Interval::new(0.0, 1.0),
        );
        assert_eq!(bbox.longest_axis(), 1);
    }

    #[test]
    fn bvh_matches_linear_scan() {
        let mut rng = SmallRng::seed_from_u64(42);
        let material = Lambertian::shared(Color::gray(0.5));

        for _ in 0..100 {
            let mut world = HittableObjects::new();
            let count = rng.gen_range(1..=50);
            for _ in 0..count {
                let center = Point3::new(
                    rng.gen_range(-10.0..10.0),
                    rng.gen_range(-10.0..10.0),
                    rng.gen_range(-10.0..10.0),
                );
                let radius = rng.gen_range(0.1..2.0);
                world.add(Arc::new(Sphere::new(center, radius, material.clone())));
            }

            let bvh = BvhNode::from_objects(&mut rng, &world);

            for _ in 0..20 {
                let origin = Point3::new(
                    rng.gen_range(-15.0..15.0),
                    rng.gen_range(-15.0..15.0),
                    rng.gen_range(-15.0..15.0),
                );
                let direction = Vector3::new(
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                );
                if direction.norm_squared() < 1e-12 {
                    continue;
                }
                let ray = Ray::new(origin, direction, 0.0);
                let ray_t = Interval::new(1e-3, f64::INFINITY);

                let brute = world.hit(&ray, ray_t);
                let fast = bvh.hit(&ray, ray_t);

                match (brute, fast) {
                    (Some(a), Some(b)) => assert!((a.t() - b.t()).abs() < 1e-9),
                    (None, None) => {}
                    (a, b) => panic!(
                        "BVH disagrees with linear scan: brute={:?} bvh={:?}",
                        a.map(|r| r.t()),
                        b.map(|r| r.t())
                    ),
                }
            }
        }
    }

    #[test]
    fn bvh_box_is_union_of_children() {
        let mut rng = SmallRng::seed_from_u64(3);
        let material = Lambertian::shared(Color::gray(0.5));
        let mut world = HittableObjects::new();
        world.add(Arc::new(Sphere::new(
            Point3::new(-2.0, 0.0, 0.0),
            1.0,
            material.clone(),
        )));
        world.add(Arc::new(Sphere::new(
            Point3::new(3.0, 1.0, -1.0),
            0.5,
            material,
        )));

        let bvh = BvhNode::from_objects(&mut rng, &world);
        let bbox = bvh.bounding_box();
        assert_eq!(bbox.x.min, -3.0);
        assert_eq!(bbox.x.max, 3.5);
        assert_eq!(bbox.y.max, 1.5);
    }
}
