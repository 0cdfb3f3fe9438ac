// Copyright @yucwang 2026

use crate::math::constants::Float;

// Write PNG Image to file, clamping each channel to [0, 1] before the
// 8-bit conversion.
pub fn write_png_to_file(image: &std::vec::Vec<(Float, Float, Float)>,
                         width: usize,
                         height: usize,
                         file_path: &str) {
    log::info!("Starting writing png image: {}.", file_path);

    let mut buffer = image::RgbImage::new(width as u32, height as u32);
    for y in 0..height {
        for x in 0..width {
            let (r, g, b) = image[y * width + x];
            buffer.put_pixel(x as u32, y as u32, image::Rgb([
                (r.clamp(0.0, 1.0) * 255.0) as u8,
                (g.clamp(0.0, 1.0) * 255.0) as u8,
                (b.clamp(0.0, 1.0) * 255.0) as u8,
            ]));
        }
    }

    match buffer.save(file_path) {
        Ok(()) => println!("PNG written to: {}.", file_path),
        Err(e) => println!("PNG written error: {}.", e.to_string())
    }
}
