use crate::objects::Hittable;
use crate::types::color::{Color, ColorOps};
use crate::types::interval::Interval;
use crate::types::ray::Ray;
use crate::types::sampler::{DiskSampler, Sampler, SquareSampler};
use image::{ImageBuffer, RgbImage};
use indicatif::{ProgressBar, ProgressStyle};
use na::{Point3, Vector3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::cmp;

/// User-facing camera settings; everything else is derived at render time.
pub struct CameraConfig {
    pub aspect_ratio: f64,
    pub image_width: u32,
    pub samples_per_pixel: u32,
    pub max_depth: u32,
    pub background: Color,
    pub vfov: f64,
    pub look_from: Point3<f64>,
    pub look_at: Point3<f64>,
    pub vup: Vector3<f64>,
    pub defocus_angle: f64,
    pub focus_distance: f64,
    pub seed: u64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 1.0,
            image_width: 100,
            samples_per_pixel: 10,
            max_depth: 10,
            background: Color::zeros(),
            vfov: 90.0,
            look_from: Point3::new(0.0, 0.0, 0.0),
            look_at: Point3::new(0.0, 0.0, -1.0),
            vup: Vector3::new(0.0, 1.0, 0.0),
            defocus_angle: 0.0,
            focus_distance: 10.0,
            seed: 0,
        }
    }
}

pub struct Camera {
    image_width: u32,
    image_height: u32,
    samples_per_pixel: u32,
    pixel_samples_scale: f64,
    max_depth: u32,
    background: Color,
    center: Point3<f64>,
    pixel00: Point3<f64>,
    pixel_du: Vector3<f64>,
    pixel_dv: Vector3<f64>,
    defocus_angle: f64,
    defocus_disk_u: Vector3<f64>,
    defocus_disk_v: Vector3<f64>,
    seed: u64,
}

impl Camera {
    pub fn new(config: CameraConfig) -> Self {
        let image_height = cmp::max(
            1,
            (config.image_width as f64 / config.aspect_ratio) as u32,
        );
        // Zero samples would divide the accumulator by zero.
        let samples_per_pixel = config.samples_per_pixel.max(1);
        let pixel_samples_scale = 1.0 / samples_per_pixel as f64;

        let center = config.look_from;

        let theta = config.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h * config.focus_distance;
        let viewport_width =
            viewport_height * (config.image_width as f64 / image_height as f64);

        // Orthonormal camera frame.
        let w = (config.look_from - config.look_at).normalize();
        let u = config.vup.cross(&w).normalize();
        let v = w.cross(&u);

        let viewport_u = viewport_width * u;
        let viewport_v = viewport_height * -v;
        let pixel_du = viewport_u / config.image_width as f64;
        let pixel_dv = viewport_v / image_height as f64;

        let viewport_upper_left =
            center - config.focus_distance * w - viewport_u / 2.0 - viewport_v / 2.0;
        let pixel00 = viewport_upper_left + 0.5 * (pixel_du + pixel_dv);

        let defocus_radius =
            config.focus_distance * (config.defocus_angle / 2.0).to_radians().tan();
        let defocus_disk_u = u * defocus_radius;
        let defocus_disk_v = v * defocus_radius;

        Self {
            image_width: config.image_width,
            image_height,
            samples_per_pixel,
            pixel_samples_scale,
            max_depth: config.max_depth,
            background: config.background,
            center,
            pixel00,
            pixel_du,
            pixel_dv,
            defocus_angle: config.defocus_angle,
            defocus_disk_u,
            defocus_disk_v,
            seed: config.seed,
        }
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Render the world into an RGB buffer. Pixels are independent, so they
    /// are distributed across threads; each derives its own generator from
    /// the camera seed, keeping output stable for a given seed.
    pub fn render(&self, world: &(dyn Hittable + Send + Sync)) -> RgbImage {
        let mut buffer: RgbImage = ImageBuffer::new(self.image_width, self.image_height);

        let progress = ProgressBar::new(self.image_width as u64 * self.image_height as u64);
        progress.set_style(
            ProgressStyle::with_template("{wide_bar} {percent}% [{elapsed_precise}]")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        buffer.par_enumerate_pixels_mut().for_each(|(x, y, pixel)| {
            let pixel_index = y as u64 * self.image_width as u64 + x as u64;
            let mut rng = SmallRng::seed_from_u64(self.seed ^ pixel_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));

            *pixel = self.render_pixel(&mut rng, world, x, y).to_rgb();
            progress.inc(1);
        });

        progress.finish_and_clear();
        buffer
    }

    fn render_pixel(
        &self,
        rng: &mut SmallRng,
        world: &(dyn Hittable + Send + Sync),
        x: u32,
        y: u32,
    ) -> Color {
        let color: Color = (0..self.samples_per_pixel)
            .map(|_| {
                let ray = self.get_ray(rng, x, y);
                self.ray_color(rng, &ray, self.max_depth, world)
            })
            .sum();
        color * self.pixel_samples_scale
    }

    /// Primary ray through a jittered point in pixel (x, y), leaving from a
    /// point on the defocus disk and carrying a fresh shutter time.
    fn get_ray(&self, rng: &mut SmallRng, x: u32, y: u32) -> Ray {
        let sampler = SquareSampler::unit();
        let (offset_x, offset_y) = sampler.sample(rng);
        let pixel_sample = self.pixel00
            + (x as f64 + offset_x) * self.pixel_du
            + (y as f64 + offset_y) * self.pixel_dv;

        let origin = if self.defocus_angle > 0.0 {
            self.defocus_disk_sample(rng)
        } else {
            self.center
        };
        let direction = pixel_sample - origin;
        let time = rng.gen_range(0.0..1.0);

        Ray::new(origin, direction, time)
    }

    fn defocus_disk_sample(&self, rng: &mut SmallRng) -> Point3<f64> {
        let sampler = DiskSampler::unit();
        let (px, py) = sampler.sample(rng);
        self.center + px * self.defocus_disk_u + py * self.defocus_disk_v
    }

    fn ray_color(
        &self,
        rng: &mut SmallRng,
        ray: &Ray,
        depth: u32,
        world: &(dyn Hittable + Send + Sync),
    ) -> Color {
        // Bounce budget exhausted: no more light is gathered.
        if depth == 0 {
            return Color::zeros();
        }

        // The 0.001 lower bound stops rays re-hitting their own origin.
        let Some(rec) = world.hit(ray, Interval::new(0.001, f64::INFINITY)) else {
            return self.background;
        };

        let material = rec.material();
        let emitted = material.emitted(rec.u(), rec.v(), &rec.p());

        let Some((attenuation, scattered)) = material.scatter(rng, ray, &rec) else {
            return emitted;
        };

        let scattered_color = self.ray_color(rng, &scattered, depth - 1, world);
        emitted + attenuation.component_mul(&scattered_color)
    }
}
