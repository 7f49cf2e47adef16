pub mod dielectric;
pub mod isotropic;
pub mod lambertian;
pub mod light;
pub mod metal;

use crate::objects::HitRecord;
use crate::types::color::ColorOps;
use crate::types::{color::Color, ray::Ray};
use na::{Point3, Vector3};
use rand::rngs::SmallRng;
use std::collections::BTreeMap;
use std::sync::Arc;

pub type MaterialRef = Arc<dyn Material + Send + Sync>;

pub fn reflect(v: &Vector3<f64>, n: &Vector3<f64>) -> Vector3<f64> {
    v - 2.0 * v.dot(n) * n
}

pub fn refract(uv: &Vector3<f64>, n: &Vector3<f64>, etai_over_etat: f64) -> Vector3<f64> {
    let cos_theta = (-uv.dot(n)).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.norm_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

pub trait Material {
    /// Attenuation and scattered ray, or `None` when the ray is absorbed.
    fn scatter(&self, rng: &mut SmallRng, ray_in: &Ray, rec: &HitRecord) -> Option<(Color, Ray)>;

    /// Radiance emitted at the hit point. Non-emissive by default.
    fn emitted(&self, _u: f64, _v: f64, _p: &Point3<f64>) -> Color {
        Color::zeros()
    }
}

/// Named shared materials for scene construction. A missing name logs an
/// error and falls back to a mid-gray diffuse so the render can proceed.
pub struct MaterialRegistry {
    materials: BTreeMap<String, MaterialRef>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self {
            materials: BTreeMap::new(),
        }
    }

    pub fn add_material(&mut self, name: &str, material: MaterialRef) {
        self.materials.insert(name.to_string(), material);
    }

    pub fn create_material(&mut self, name: &str, material: impl Material + Send + Sync + 'static) {
        self.add_material(name, Arc::new(material));
    }

    pub fn get(&self, name: &str) -> MaterialRef {
        match self.materials.get(name) {
            Some(material) => material.clone(),
            None => {
                log::error!("Material not found: {}", name);
                lambertian::Lambertian::shared(Color::gray(0.5))
            }
        }
    }
}

impl Default for MaterialRegistry {
    fn default() -> Self {
        Self::new()
    }
}
