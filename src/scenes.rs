pub mod bouncing;
pub mod checkered;
pub mod cornell;
pub mod cornell_smoke;
pub mod earth;
pub mod perlin;
pub mod quads;
pub mod showcase;
pub mod simple_light;

use crate::camera::Camera;
use crate::objects::HittableObjects;
use rand::rngs::SmallRng;

/// A renderable setup: world geometry plus a matching camera. Scene
/// builders draw all construction-time randomness from the caller's
/// generator so a seed reproduces the exact same world.
pub trait Scene {
    fn build_camera() -> Camera;
    fn build_world(rng: &mut SmallRng) -> HittableObjects;
}
