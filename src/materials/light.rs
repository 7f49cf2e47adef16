use crate::materials::{Material, MaterialRef};
use crate::objects::HitRecord;
use crate::textures::{Solid, TextureRef};
use crate::types::color::Color;
use crate::types::ray::Ray;
use na::Point3;
use rand::rngs::SmallRng;
use std::sync::Arc;

/// Emitter. Absorbs every incoming ray and radiates its texture's colour
/// from both faces.
pub struct DiffuseLight {
    texture: TextureRef,
}

impl DiffuseLight {
    pub fn new(emit: Color) -> Self {
        Self {
            texture: Arc::new(Solid::new(emit)),
        }
    }

    pub fn new_textured(texture: TextureRef) -> Self {
        Self { texture }
    }

    pub fn shared(emit: Color) -> MaterialRef {
        Arc::new(Self::new(emit))
    }
}

impl Material for DiffuseLight {
    fn scatter(&self, _rng: &mut SmallRng, _ray_in: &Ray, _rec: &HitRecord) -> Option<(Color, Ray)> {
        None
    }

    fn emitted(&self, u: f64, v: f64, p: &Point3<f64>) -> Color {
        self.texture.value(u, v, p)
    }
}
