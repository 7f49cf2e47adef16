use crate::materials::{reflect, refract, Material, MaterialRef};
use crate::objects::HitRecord;
use crate::types::color::Color;
use crate::types::ray::Ray;
use rand::rngs::SmallRng;
use rand::Rng;
use std::sync::Arc;

/// Clear refractive material (glass, water, diamond).
pub struct Dielectric {
    refraction_index: f64,
}

impl Dielectric {
    pub fn new(refraction_index: f64) -> Self {
        Self { refraction_index }
    }

    pub fn shared(refraction_index: f64) -> MaterialRef {
        Arc::new(Self::new(refraction_index))
    }

    /// Schlick's approximation of the Fresnel reflectance.
    fn reflectance(cosine: f64, refraction_index: f64) -> f64 {
        let r0 = (1.0 - refraction_index) / (1.0 + refraction_index);
        let r0 = r0 * r0;
        r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
    }
}

impl Material for Dielectric {
    fn scatter(&self, rng: &mut SmallRng, ray_in: &Ray, rec: &HitRecord) -> Option<(Color, Ray)> {
        // Glass attenuates nothing.
        let attenuation = Color::new(1.0, 1.0, 1.0);

        let ri = if rec.front_face() {
            1.0 / self.refraction_index
        } else {
            self.refraction_index
        };

        let unit_direction = ray_in.direction.normalize();
        let cos_theta = (-unit_direction).dot(&rec.normal()).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        // Total internal reflection leaves no refracted branch to choose.
        let cannot_refract = ri * sin_theta > 1.0;
        let direction =
            if cannot_refract || Self::reflectance(cos_theta, ri) > rng.gen_range(0.0..1.0) {
                reflect(&unit_direction, &rec.normal())
            } else {
                refract(&unit_direction, &rec.normal(), ri)
            };

        Some((attenuation, Ray::new(rec.p(), direction, ray_in.time)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::lambertian::Lambertian;
    use crate::types::color::ColorOps;
    use crate::objects::sphere::Sphere;
    use crate::objects::Hittable;
    use crate::types::interval::Interval;
    use approx::assert_relative_eq;
    use na::{Point3, Vector3};
    use rand::SeedableRng;

    #[test]
    fn head_on_ray_passes_straight_through() {
        let material = Dielectric::new(1.5);
        let sphere = Sphere::new(
            Point3::new(0.0, 0.0, -3.0),
            1.0,
            Lambertian::shared(Color::gray(0.5)),
        );
        let ray = Ray::new(Point3::origin(), Vector3::new(0.0, 0.0, -1.0), 0.0);
        let rec = sphere.hit(&ray, Interval::new(0.001, f64::INFINITY)).unwrap();
        let mut rng = SmallRng::seed_from_u64(9);

        // Schlick at normal incidence for glass is ~4%, so refraction
        // dominates; head-on refraction does not bend.
        let mut refracted = 0;
        for _ in 0..500 {
            let (attenuation, scattered) = material.scatter(&mut rng, &ray, &rec).unwrap();
            assert_eq!(attenuation, Color::new(1.0, 1.0, 1.0));
            if scattered.direction.z < 0.0 {
                refracted += 1;
                assert_relative_eq!(scattered.direction.x, 0.0, epsilon = 1e-12);
                assert_relative_eq!(scattered.direction.y, 0.0, epsilon = 1e-12);
            }
        }
        assert!(refracted > 400);
    }

    #[test]
    fn past_critical_angle_always_reflects_internally() {
        use crate::objects::quad::Quad;

        let material = Dielectric::new(1.5);
        // Glass-air boundary in the z = 0 plane, approached from behind
        // (inside the glass) at 60 degrees; critical angle is ~41.8.
        let quad = Quad::new(
            Point3::new(-5.0, -5.0, 0.0),
            Vector3::new(10.0, 0.0, 0.0),
            Vector3::new(0.0, 10.0, 0.0),
            Lambertian::shared(Color::gray(0.5)),
        );
        let direction = Vector3::new(3.0_f64.sqrt() / 2.0, 0.0, 0.5);
        let ray = Ray::new(Point3::new(0.0, 0.0, -1.0), direction, 0.0);
        let rec = quad.hit(&ray, Interval::new(0.001, f64::INFINITY)).unwrap();
        assert!(!rec.front_face());

        let mut rng = SmallRng::seed_from_u64(9);
        for _ in 0..100 {
            let (_, scattered) = material.scatter(&mut rng, &ray, &rec).unwrap();
            // Total internal reflection folds the ray back below the plane.
            assert!(scattered.direction.z < 0.0);
        }
    }

    #[test]
    fn schlick_reflectance_bounds() {
        assert_relative_eq!(
            Dielectric::reflectance(1.0, 1.5),
            ((1.0 - 1.5_f64) / 2.5).powi(2),
            epsilon = 1e-12
        );
        assert_relative_eq!(Dielectric::reflectance(0.0, 1.5), 1.0, epsilon = 1e-12);
    }
}
