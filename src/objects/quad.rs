use crate::bvh::Aabb;
use crate::materials::MaterialRef;
use crate::objects::{HitRecord, Hittable, HittableObjects};
use crate::types::interval::Interval;
use crate::types::ray::Ray;
use na::{Point3, Vector3};
use std::sync::Arc;

/// Parallelogram spanned by `u` and `v` from the corner `origin`.
pub struct Quad {
    origin: Point3<f64>,
    u: Vector3<f64>,
    v: Vector3<f64>,
    // w = n / (n . n) maps a planar hit offset to (alpha, beta) coordinates.
    w: Vector3<f64>,
    normal: Vector3<f64>,
    d: f64,
    material: MaterialRef,
    bbox: Aabb,
}

impl Quad {
    pub fn new(
        origin: Point3<f64>,
        u: Vector3<f64>,
        v: Vector3<f64>,
        material: MaterialRef,
    ) -> Self {
        let n = u.cross(&v);
        let normal = n.normalize();
        let d = normal.dot(&origin.coords);
        let w = n / n.dot(&n);

        let bbox_diag1 = Aabb::from_points(&origin, &(origin + u + v));
        let bbox_diag2 = Aabb::from_points(&(origin + u), &(origin + v));
        let bbox = bbox_diag1.merge(&bbox_diag2);

        Self {
            origin,
            u,
            v,
            w,
            normal,
            d,
            material,
            bbox,
        }
    }

    /// Axis-aligned box built from six quads sharing one material.
    pub fn new_box(a: &Point3<f64>, b: &Point3<f64>, material: MaterialRef) -> HittableObjects {
        let mut sides = HittableObjects::new();

        let min = Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z));
        let max = Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z));

        let dx = Vector3::new(max.x - min.x, 0.0, 0.0);
        let dy = Vector3::new(0.0, max.y - min.y, 0.0);
        let dz = Vector3::new(0.0, 0.0, max.z - min.z);

        // front
        sides.add(Arc::new(Quad::new(
            Point3::new(min.x, min.y, max.z),
            dx,
            dy,
            material.clone(),
        )));
        // right
        sides.add(Arc::new(Quad::new(
            Point3::new(max.x, min.y, max.z),
            -dz,
            dy,
            material.clone(),
        )));
        // back
        sides.add(Arc::new(Quad::new(
            Point3::new(max.x, min.y, min.z),
            -dx,
            dy,
            material.clone(),
        )));
        // left
        sides.add(Arc::new(Quad::new(
            Point3::new(min.x, min.y, min.z),
            dz,
            dy,
            material.clone(),
        )));
        // top
        sides.add(Arc::new(Quad::new(
            Point3::new(min.x, max.y, max.z),
            dx,
            -dz,
            material.clone(),
        )));
        // bottom
        sides.add(Arc::new(Quad::new(
            Point3::new(min.x, min.y, min.z),
            dx,
            dz,
            material,
        )));

        sides
    }

    /// A true quadrilateral accepts plane coordinates in the unit square.
    /// Other planar shapes would substitute their own membership test.
    fn is_interior(alpha: f64, beta: f64) -> bool {
        let unit = Interval::new(0.0, 1.0);
        unit.contains(alpha) && unit.contains(beta)
    }
}

impl Hittable for Quad {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let denom = self.normal.dot(&ray.direction);

        // Parallel rays never cross the plane.
        if denom.abs() < 1e-8 {
            return None;
        }

        let t = (self.d - self.normal.dot(&ray.origin.coords)) / denom;
        if !ray_t.contains(t) {
            return None;
        }

        let intersection = ray.at(t);
        let planar_hit = intersection - self.origin;
        let alpha = self.w.dot(&planar_hit.cross(&self.v));
        let beta = self.w.dot(&self.u.cross(&planar_hit));

        if !Self::is_interior(alpha, beta) {
            return None;
        }

        Some(HitRecord::new(
            ray,
            intersection,
            self.normal,
            t,
            alpha,
            beta,
            self.material.clone(),
        ))
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::lambertian::Lambertian;
    use crate::types::color::{Color, ColorOps};
    use approx::assert_relative_eq;

    fn unit_quad() -> Quad {
        // Unit square in the z = 0 plane.
        Quad::new(
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Lambertian::shared(Color::gray(0.5)),
        )
    }

    #[test]
    fn perpendicular_ray_hits_with_uv() {
        let quad = unit_quad();
        let ray = Ray::new(
            Point3::new(0.25, 0.75, 1.0),
            Vector3::new(0.0, 0.0, -1.0),
            0.0,
        );
        let rec = quad
            .hit(&ray, Interval::new(0.001, f64::INFINITY))
            .expect("ray aimed at quad interior");
        assert_relative_eq!(rec.t(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(rec.u(), 0.25, epsilon = 1e-12);
        assert_relative_eq!(rec.v(), 0.75, epsilon = 1e-12);
    }

    #[test]
    fn parallel_ray_misses() {
        let quad = unit_quad();
        let ray = Ray::new(
            Point3::new(0.5, 0.5, 1.0),
            Vector3::new(1.0, 0.0, 0.0),
            0.0,
        );
        assert!(quad.hit(&ray, Interval::new(0.001, f64::INFINITY)).is_none());
    }

    #[test]
    fn plane_hit_outside_quad_misses() {
        let quad = unit_quad();
        let ray = Ray::new(
            Point3::new(2.0, 2.0, 1.0),
            Vector3::new(0.0, 0.0, -1.0),
            0.0,
        );
        assert!(quad.hit(&ray, Interval::new(0.001, f64::INFINITY)).is_none());
    }

    #[test]
    fn box_has_six_sides_and_right_extent() {
        let material = Lambertian::shared(Color::gray(0.5));
        let sides = Quad::new_box(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 2.0, 3.0),
            material,
        );
        assert_eq!(sides.len(), 6);

        let bbox = sides.bounding_box();
        assert!(bbox.x.contains(0.0) && bbox.x.contains(1.0));
        assert!(bbox.y.contains(0.0) && bbox.y.contains(2.0));
        assert!(bbox.z.contains(0.0) && bbox.z.contains(3.0));
    }

    #[test]
    fn box_blocks_rays_from_every_side() {
        use crate::objects::Hittable;

        let material = Lambertian::shared(Color::gray(0.5));
        let sides = Quad::new_box(
            &Point3::new(-1.0, -1.0, -1.0),
            &Point3::new(1.0, 1.0, 1.0),
            material,
        );

        for direction in [
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, -1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(0.0, 0.0, -1.0),
        ] {
            let origin = Point3::origin() - 5.0 * direction;
            let ray = Ray::new(origin, direction, 0.0);
            let rec = sides
                .hit(&ray, Interval::new(0.001, f64::INFINITY))
                .expect("axis ray must enter the box");
            assert_relative_eq!(rec.t(), 4.0, epsilon = 1e-12);
        }
    }
}
