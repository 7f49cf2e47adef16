use crate::materials::{Material, MaterialRef};
use crate::objects::HitRecord;
use crate::textures::{Solid, TextureRef};
use crate::types::color::Color;
use crate::types::ray::Ray;
use crate::types::sampler::SphereSampler;
use rand::rngs::SmallRng;
use std::sync::Arc;

/// Diffuse surface scattering about the normal with a cosine-ish lobe.
pub struct Lambertian {
    texture: TextureRef,
}

impl Lambertian {
    pub fn new(albedo: Color) -> Self {
        Self {
            texture: Arc::new(Solid::new(albedo)),
        }
    }

    pub fn new_textured(texture: TextureRef) -> Self {
        Self { texture }
    }

    pub fn shared(albedo: Color) -> MaterialRef {
        Arc::new(Self::new(albedo))
    }
}

impl Material for Lambertian {
    fn scatter(&self, rng: &mut SmallRng, ray_in: &Ray, rec: &HitRecord) -> Option<(Color, Ray)> {
        let sampler = SphereSampler::unit();
        let mut scatter_direction = rec.normal() + sampler.sample_unit(rng);

        // A sampled vector nearly opposite the normal cancels to zero.
        if scatter_direction.norm_squared() < 1e-16 {
            scatter_direction = rec.normal();
        }

        let scattered = Ray::new(rec.p(), scatter_direction, ray_in.time);
        let attenuation = self.texture.value(rec.u(), rec.v(), &rec.p());

        Some((attenuation, scattered))
    }
}
