pub mod color;
pub mod interval;
pub mod ray;
pub mod sampler;
