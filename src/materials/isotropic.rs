use crate::materials::{Material, MaterialRef};
use crate::objects::HitRecord;
use crate::textures::{Solid, TextureRef};
use crate::types::color::Color;
use crate::types::ray::Ray;
use crate::types::sampler::SphereSampler;
use rand::rngs::SmallRng;
use std::sync::Arc;

/// Uniform phase function for participating media: scatters equally in all
/// directions regardless of incidence.
pub struct Isotropic {
    texture: TextureRef,
}

impl Isotropic {
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

impl Material for Isotropic {
    fn scatter(&self, rng: &mut SmallRng, ray_in: &Ray, rec: &HitRecord) -> Option<(Color, Ray)> {
        let sampler = SphereSampler::unit();
        let scattered = Ray::new(rec.p(), sampler.sample_unit(rng), ray_in.time);
        let attenuation = self.texture.value(rec.u(), rec.v(), &rec.p());

        Some((attenuation, scattered))
    }
}
