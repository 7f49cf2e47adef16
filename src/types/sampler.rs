use na::Vector3;
use rand::Rng;

pub trait Sampler<T> {
    fn sample(&self, rng: &mut impl Rng) -> T;
}

/// Uniform jitter over a square, used for pixel-footprint sampling.
pub struct SquareSampler {
    center: (f64, f64),
    apothem: f64,
}

impl SquareSampler {
    pub fn new(center: (f64, f64), apothem: f64) -> Self {
        Self { center, apothem }
    }

    pub fn unit() -> Self {
        Self::new((0.0, 0.0), 0.5)
    }
}

impl Sampler<(f64, f64)> for SquareSampler {
    fn sample(&self, rng: &mut impl Rng) -> (f64, f64) {
        let x = rng.gen_range(self.center.0 - self.apothem..self.center.0 + self.apothem);
        let y = rng.gen_range(self.center.1 - self.apothem..self.center.1 + self.apothem);

        (x, y)
    }
}

/// Rejection-sampled disk, used for the defocus aperture.
pub struct DiskSampler {
    radius: f64,
}

impl DiskSampler {
    pub fn unit() -> Self {
        Self { radius: 1.0 }
    }
}

impl Sampler<(f64, f64)> for DiskSampler {
    fn sample(&self, rng: &mut impl Rng) -> (f64, f64) {
        loop {
            let x = rng.gen_range(-self.radius..self.radius);
            let y = rng.gen_range(-self.radius..self.radius);

            if x * x + y * y < self.radius * self.radius {
                return (x, y);
            }
        }
    }
}

/// Rejection-sampled ball; `sample` returns a point inside, `sample_unit`
/// a direction on the surface.
pub struct SphereSampler {
    radius: f64,
}

impl SphereSampler {
    pub fn unit() -> Self {
        Self { radius: 1.0 }
    }

    pub fn sample_unit(&self, rng: &mut impl Rng) -> Vector3<f64> {
        loop {
            let p = self.sample(rng);
            let len_sq = p.norm_squared();
            // Reject points too close to the origin before normalizing.
            if len_sq > 1e-160 {
                return p / len_sq.sqrt();
            }
        }
    }

    pub fn sample_on_hemisphere(&self, rng: &mut impl Rng, normal: &Vector3<f64>) -> Vector3<f64> {
        let sample = self.sample_unit(rng);

        if normal.dot(&sample) > 0.0 {
            sample
        } else {
            -sample
        }
    }
}

impl Sampler<Vector3<f64>> for SphereSampler {
    fn sample(&self, rng: &mut impl Rng) -> Vector3<f64> {
        loop {
            let x = rng.gen_range(-1.0..1.0);
            let y = rng.gen_range(-1.0..1.0);
            let z = rng.gen_range(-1.0..1.0);

            let sample = Vector3::new(x, y, z);
            if sample.norm_squared() < 1.0 {
                return sample * self.radius;
            }
        }
    }
}
