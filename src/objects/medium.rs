use crate::bvh::Aabb;
use crate::materials::isotropic::Isotropic;
use crate::materials::MaterialRef;
use crate::objects::{HitRecord, Hittable, ObjectRef};
use crate::textures::TextureRef;
use crate::types::color::Color;
use crate::types::interval::Interval;
use crate::types::ray::Ray;
use na::Vector3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Constant-density participating medium bounded by a convex surface.
///
/// The boundary must report both an entry and an exit intersection for any
/// ray crossing it. A scatter event is sampled along the interior segment
/// with free-flight distance `-ln(U) / density`.
pub struct ConstantMedium {
    boundary: ObjectRef,
    neg_inv_density: f64,
    phase_function: MaterialRef,
    salt: u64,
}

impl ConstantMedium {
    pub fn new(boundary: ObjectRef, density: f64, albedo: Color) -> Self {
        let salt = Self::boundary_salt(&boundary);
        Self {
            boundary,
            neg_inv_density: -1.0 / density,
            phase_function: Isotropic::shared(albedo),
            salt,
        }
    }

    pub fn new_textured(boundary: ObjectRef, density: f64, texture: TextureRef) -> Self {
        let salt = Self::boundary_salt(&boundary);
        Self {
            boundary,
            neg_inv_density: -1.0 / density,
            phase_function: Arc::new(Isotropic::new_textured(texture)),
            salt,
        }
    }

    // Decorrelates media that see the same ray, without carrying an RNG
    // through the hit path.
    fn boundary_salt(boundary: &ObjectRef) -> u64 {
        let bbox = boundary.bounding_box();
        let mut h: u64 = 0xa076_1d64_78bd_642f;
        for v in [
            bbox.x.min, bbox.y.min, bbox.z.min, bbox.x.max, bbox.y.max, bbox.z.max,
        ] {
            h = (h ^ v.to_bits()).wrapping_mul(0x9e37_79b9_7f4a_7c15);
        }
        h
    }

    /// Free-flight entropy derived from the ray itself. Every camera sample
    /// carries a fresh jitter and shutter time, so rays are distinct and a
    /// fixed camera seed reproduces the image exactly.
    fn flight_rng(&self, ray: &Ray) -> SmallRng {
        let mut h = self.salt;
        for v in [
            ray.origin.x,
            ray.origin.y,
            ray.origin.z,
            ray.direction.x,
            ray.direction.y,
            ray.direction.z,
            ray.time,
        ] {
            h = (h ^ v.to_bits()).wrapping_mul(0x9e37_79b9_7f4a_7c15);
        }
        SmallRng::seed_from_u64(h)
    }
}

impl Hittable for ConstantMedium {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        // Entry and exit over the whole line, so rays starting inside the
        // boundary still see the exit.
        let rec1 = self.boundary.hit(ray, Interval::UNIVERSE)?;
        let rec2 = self
            .boundary
            .hit(ray, Interval::new(rec1.t() + 1e-4, f64::INFINITY))?;

        let mut t_enter = rec1.t().max(ray_t.min);
        let t_exit = rec2.t().min(ray_t.max);

        if t_enter >= t_exit {
            return None;
        }
        if t_enter < 0.0 {
            t_enter = 0.0;
        }

        let ray_length = ray.direction.norm();
        let distance_inside = (t_exit - t_enter) * ray_length;
        let hit_distance =
            self.neg_inv_density * self.flight_rng(ray).gen_range(0.0_f64..1.0).ln();

        if hit_distance > distance_inside {
            return None;
        }

        let t = t_enter + hit_distance / ray_length;

        // Normal and face flag are arbitrary; isotropic scattering has no
        // surface orientation.
        Some(HitRecord::new(
            ray,
            ray.at(t),
            Vector3::new(1.0, 0.0, 0.0),
            t,
            0.0,
            0.0,
            self.phase_function.clone(),
        ))
    }

    fn bounding_box(&self) -> Aabb {
        self.boundary.bounding_box()
    }
}
