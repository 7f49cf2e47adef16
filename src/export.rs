use image::RgbImage;
use std::io::Write;

/// Write a rendered buffer as plain-text PPM (P3): header, then one
/// "R G B" record per pixel in row-major order.
pub fn write_ppm(buffer: &RgbImage, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "P3")?;
    writeln!(out, "{} {}", buffer.width(), buffer.height())?;
    writeln!(out, "255")?;

    for pixel in buffer.pixels() {
        writeln!(out, "{} {} {}", pixel[0], pixel[1], pixel[2])?;
    }

    Ok(())
}
