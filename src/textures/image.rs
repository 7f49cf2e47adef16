use crate::textures::Texture;
use crate::types::color::Color;
use image::RgbImage;
use na::Point3;

/// Image-mapped texture. A failed load falls back to solid cyan so the
/// missing asset is obvious in the render.
pub struct ImageTexture {
    image: Option<RgbImage>,
}

impl ImageTexture {
    pub fn new(image: Option<RgbImage>) -> Self {
        Self { image }
    }

    pub fn load(path: &str) -> Self {
        Self {
            image: match image::open(path) {
                Ok(image) => Some(image.to_rgb8()),
                Err(e) => {
                    log::error!("Failed to load texture image '{}': {}", path, e);
                    None
                }
            },
        }
    }
}

impl Texture for ImageTexture {
    fn value(&self, u: f64, v: f64, _p: &Point3<f64>) -> Color {
        let Some(image) = &self.image else {
            return Color::new(0.0, 1.0, 1.0);
        };
        if image.width() == 0 || image.height() == 0 {
            return Color::new(0.0, 1.0, 1.0);
        }

        let u = u.clamp(0.0, 1.0);
        // Flip v to image row order.
        let v = 1.0 - v.clamp(0.0, 1.0);

        let i = ((u * image.width() as f64) as u32).min(image.width() - 1);
        let j = ((v * image.height() as f64) as u32).min(image.height() - 1);

        let pixel = image.get_pixel(i, j);
        let scale = 1.0 / 255.0;
        Color::new(
            scale * pixel[0] as f64,
            scale * pixel[1] as f64,
            scale * pixel[2] as f64,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn missing_image_is_cyan() {
        let texture = ImageTexture::new(None);
        assert_eq!(
            texture.value(0.5, 0.5, &Point3::origin()),
            Color::new(0.0, 1.0, 1.0)
        );
    }

    #[test]
    fn samples_follow_uv_with_flipped_v() {
        let mut image = RgbImage::new(2, 2);
        image.put_pixel(0, 0, Rgb([255, 0, 0])); // top-left
        image.put_pixel(1, 0, Rgb([0, 255, 0]));
        image.put_pixel(0, 1, Rgb([0, 0, 255])); // bottom-left
        image.put_pixel(1, 1, Rgb([255, 255, 255]));

        let texture = ImageTexture::new(Some(image));

        // v = 1 is the top row in texture space.
        assert_eq!(
            texture.value(0.0, 1.0, &Point3::origin()),
            Color::new(1.0, 0.0, 0.0)
        );
        assert_eq!(
            texture.value(0.0, 0.0, &Point3::origin()),
            Color::new(0.0, 0.0, 1.0)
        );
    }

    #[test]
    fn uv_out_of_range_clamps() {
        let mut image = RgbImage::new(1, 1);
        image.put_pixel(0, 0, Rgb([255, 0, 0]));
        let texture = ImageTexture::new(Some(image));
        assert_eq!(
            texture.value(5.0, -3.0, &Point3::origin()),
            Color::new(1.0, 0.0, 0.0)
        );
    }
}
