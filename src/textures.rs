pub mod image;
pub mod noise;

use crate::types::color::Color;
use na::Point3;
use std::collections::BTreeMap;
use std::sync::Arc;

pub type TextureRef = Arc<dyn Texture + Send + Sync>;

/// Pure colour function of surface coordinates and the hit point.
pub trait Texture {
    fn value(&self, u: f64, v: f64, p: &Point3<f64>) -> Color;
}

pub struct TextureRegistry {
    textures: BTreeMap<String, TextureRef>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            textures: BTreeMap::new(),
        }
    }

    pub fn add_texture(&mut self, name: &str, texture: TextureRef) {
        self.textures.insert(name.to_string(), texture);
    }

    pub fn create_texture(&mut self, name: &str, texture: impl Texture + Send + Sync + 'static) {
        self.add_texture(name, Arc::new(texture));
    }

    pub fn get(&self, name: &str) -> TextureRef {
        match self.textures.get(name) {
            Some(texture) => texture.clone(),
            None => {
                log::error!("Texture not found: {}", name);
                Arc::new(Solid::new(Color::new(0.5, 0.5, 0.5)))
            }
        }
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Solid {
    albedo: Color,
}

impl Solid {
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Texture for Solid {
    fn value(&self, _u: f64, _v: f64, _p: &Point3<f64>) -> Color {
        self.albedo
    }
}

/// Spatial checkerboard: parity of the per-axis floor of the scaled hit
/// point, independent of surface parameterization.
pub struct Checkered {
    inv_scale: f64,
    even: TextureRef,
    odd: TextureRef,
}

impl Checkered {
    pub fn new(scale: f64, even: TextureRef, odd: TextureRef) -> Self {
        Self {
            inv_scale: 1.0 / scale,
            even,
            odd,
        }
    }

    pub fn new_solid(scale: f64, even: Color, odd: Color) -> Self {
        Self::new(scale, Arc::new(Solid::new(even)), Arc::new(Solid::new(odd)))
    }
}

impl Texture for Checkered {
    fn value(&self, u: f64, v: f64, p: &Point3<f64>) -> Color {
        let x_int = (self.inv_scale * p.x).floor() as i64;
        let y_int = (self.inv_scale * p.y).floor() as i64;
        let z_int = (self.inv_scale * p.z).floor() as i64;

        if (x_int + y_int + z_int) % 2 == 0 {
            self.even.value(u, v, p)
        } else {
            self.odd.value(u, v, p)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_ignores_coordinates() {
        let texture = Solid::new(Color::new(0.1, 0.2, 0.3));
        assert_eq!(
            texture.value(0.0, 0.0, &Point3::origin()),
            texture.value(0.9, 0.3, &Point3::new(100.0, -5.0, 2.0))
        );
    }

    #[test]
    fn checker_alternates_between_cells() {
        let even = Color::new(1.0, 1.0, 1.0);
        let odd = Color::new(0.0, 0.0, 0.0);
        let texture = Checkered::new_solid(1.0, even, odd);

        assert_eq!(texture.value(0.0, 0.0, &Point3::new(0.5, 0.5, 0.5)), even);
        assert_eq!(texture.value(0.0, 0.0, &Point3::new(1.5, 0.5, 0.5)), odd);
    }

    #[test]
    fn checker_repeats_with_full_period() {
        let even = Color::new(1.0, 1.0, 1.0);
        let odd = Color::new(0.0, 0.0, 0.0);
        let scale = 0.25;
        let texture = Checkered::new_solid(scale, even, odd);

        // One full period along x is two cells of width `scale`.
        let at_origin = texture.value(0.0, 0.0, &Point3::origin());
        let one_period = texture.value(0.0, 0.0, &Point3::new(2.0 * scale, 0.0, 0.0));
        assert_eq!(at_origin, one_period);
    }

    #[test]
    fn registry_lookup_and_fallback() {
        let mut registry = TextureRegistry::new();
        registry.create_texture("ink", Solid::new(Color::new(0.0, 0.0, 0.0)));

        let ink = registry.get("ink");
        assert_eq!(ink.value(0.0, 0.0, &Point3::origin()), Color::new(0.0, 0.0, 0.0));

        // Missing name yields the mid-gray fallback, not a panic.
        let missing = registry.get("missing");
        assert_eq!(
            missing.value(0.0, 0.0, &Point3::origin()),
            Color::new(0.5, 0.5, 0.5)
        );
    }
}
