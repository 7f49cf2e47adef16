use crate::textures::Texture;
use crate::types::color::Color;
use na::{Point3, Vector3};
use rand::Rng;

const POINT_COUNT: usize = 256;

/// Gradient-lattice Perlin noise with per-axis permutation tables.
pub struct Perlin {
    rand_vec: Vec<Vector3<f64>>,
    perm_x: Vec<usize>,
    perm_y: Vec<usize>,
    perm_z: Vec<usize>,
}

impl Perlin {
    pub fn new(rng: &mut impl Rng) -> Self {
        let rand_vec = (0..POINT_COUNT)
            .map(|_| {
                Vector3::new(
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                )
                .normalize()
            })
            .collect();

        Self {
            rand_vec,
            perm_x: Self::generate_perm(rng),
            perm_y: Self::generate_perm(rng),
            perm_z: Self::generate_perm(rng),
        }
    }

    /// Smoothed gradient noise in [-1, 1].
    pub fn noise(&self, p: &Point3<f64>) -> f64 {
        let u = p.x - p.x.floor();
        let v = p.y - p.y.floor();
        let w = p.z - p.z.floor();

        let i = p.x.floor() as i64;
        let j = p.y.floor() as i64;
        let k = p.z.floor() as i64;

        let mut c = [[[Vector3::zeros(); 2]; 2]; 2];
        for (di, plane) in c.iter_mut().enumerate() {
            for (dj, row) in plane.iter_mut().enumerate() {
                for (dk, cell) in row.iter_mut().enumerate() {
                    let idx = self.perm_x[((i + di as i64) & 255) as usize]
                        ^ self.perm_y[((j + dj as i64) & 255) as usize]
                        ^ self.perm_z[((k + dk as i64) & 255) as usize];
                    *cell = self.rand_vec[idx];
                }
            }
        }

        Self::trilinear_interp(&c, u, v, w)
    }

    /// Sum of octaves of |noise| with halving weight and doubling frequency.
    pub fn turbulence(&self, p: &Point3<f64>, depth: u32) -> f64 {
        let mut accum = 0.0;
        let mut temp_p = *p;
        let mut weight = 1.0;

        for _ in 0..depth {
            accum += weight * self.noise(&temp_p);
            weight *= 0.5;
            temp_p = temp_p * 2.0;
        }

        accum.abs()
    }

    fn trilinear_interp(c: &[[[Vector3<f64>; 2]; 2]; 2], u: f64, v: f64, w: f64) -> f64 {
        // Hermitian smoothing removes the lattice artifacts of raw
        // trilinear blending.
        let uu = u * u * (3.0 - 2.0 * u);
        let vv = v * v * (3.0 - 2.0 * v);
        let ww = w * w * (3.0 - 2.0 * w);

        let mut accum = 0.0;
        for (i, plane) in c.iter().enumerate() {
            for (j, row) in plane.iter().enumerate() {
                for (k, cell) in row.iter().enumerate() {
                    let (fi, fj, fk) = (i as f64, j as f64, k as f64);
                    let weight = Vector3::new(u - fi, v - fj, w - fk);
                    accum += (fi * uu + (1.0 - fi) * (1.0 - uu))
                        * (fj * vv + (1.0 - fj) * (1.0 - vv))
                        * (fk * ww + (1.0 - fk) * (1.0 - ww))
                        * cell.dot(&weight);
                }
            }
        }
        accum
    }

    fn generate_perm(rng: &mut impl Rng) -> Vec<usize> {
        let mut p: Vec<usize> = (0..POINT_COUNT).collect();

        // Fisher-Yates.
        for i in (1..POINT_COUNT).rev() {
            let target = rng.gen_range(0..=i);
            p.swap(i, target);
        }
        p
    }
}

/// Marble-like turbulence texture.
pub struct NoiseTexture {
    noise: Perlin,
    scale: f64,
}

impl NoiseTexture {
    pub fn new(rng: &mut impl Rng, scale: f64) -> Self {
        Self {
            noise: Perlin::new(rng),
            scale,
        }
    }
}

impl Texture for NoiseTexture {
    fn value(&self, _u: f64, _v: f64, p: &Point3<f64>) -> Color {
        let scaled = Point3::from(p.coords * self.scale);
        Color::new(1.0, 1.0, 1.0) * self.noise.turbulence(&scaled, 7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn noise_is_deterministic_given_seed() {
        let mut rng_a = SmallRng::seed_from_u64(21);
        let mut rng_b = SmallRng::seed_from_u64(21);
        let perlin_a = Perlin::new(&mut rng_a);
        let perlin_b = Perlin::new(&mut rng_b);

        let p = Point3::new(1.3, -2.7, 0.4);
        assert_eq!(perlin_a.noise(&p), perlin_b.noise(&p));
    }

    #[test]
    fn noise_stays_in_gradient_range() {
        let mut rng = SmallRng::seed_from_u64(21);
        let perlin = Perlin::new(&mut rng);

        for i in 0..500 {
            let p = Point3::new(i as f64 * 0.37, i as f64 * -0.11, i as f64 * 0.59);
            let n = perlin.noise(&p);
            assert!((-1.0..=1.0).contains(&n), "noise out of range: {}", n);
        }
    }

    #[test]
    fn turbulence_is_non_negative() {
        let mut rng = SmallRng::seed_from_u64(21);
        let perlin = Perlin::new(&mut rng);

        for i in 0..500 {
            let p = Point3::new(i as f64 * 0.13, i as f64 * 0.29, i as f64 * -0.41);
            assert!(perlin.turbulence(&p, 7) >= 0.0);
        }
    }

    #[test]
    fn texture_channels_are_equal_and_bounded() {
        let mut rng = SmallRng::seed_from_u64(21);
        let texture = NoiseTexture::new(&mut rng, 4.0);

        let c = texture.value(0.0, 0.0, &Point3::new(0.3, 1.7, -0.2));
        assert_eq!(c.x, c.y);
        assert_eq!(c.y, c.z);
        assert!(c.x >= 0.0 && c.x <= 2.0);
    }
}
