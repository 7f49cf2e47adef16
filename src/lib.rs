//! Monte-Carlo path tracer: BVH-accelerated scene intersection, physically
//! motivated materials, textures, participating media, and a defocus/motion
//! blur camera.

pub mod bvh;
pub mod camera;
pub mod export;
pub mod materials;
pub mod objects;
pub mod scenes;
pub mod textures;
pub mod types;
