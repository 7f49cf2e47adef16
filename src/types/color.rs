use image::Rgb;

pub type Color = na::Vector3<f64>;

pub trait ColorOps {
    fn gray(val: f64) -> Color;
    fn to_rgb(&self) -> Rgb<u8>;
}

/// Gamma-2 transfer: sqrt for positive components, zero otherwise.
fn linear_to_gamma(component: f64) -> f64 {
    if component > 0.0 {
        component.sqrt()
    } else {
        0.0
    }
}

impl ColorOps for Color {
    fn gray(val: f64) -> Color {
        Color::new(val, val, val)
    }

    fn to_rgb(&self) -> Rgb<u8> {
        let r = linear_to_gamma(self.x);
        let g = linear_to_gamma(self.y);
        let b = linear_to_gamma(self.z);

        // Clamp below 1.0 so the byte value never overflows to 256.
        Rgb([
            (256.0 * r.clamp(0.0, 0.999)) as u8,
            (256.0 * g.clamp(0.0, 0.999)) as u8,
            (256.0 * b.clamp(0.0, 0.999)) as u8,
        ])
    }
}
