use glam::DVec2;
use image::{GrayImage, Luma};
use noiser::NoiseField;
use noiser::utils::pixel_centers;
use std::path::Path;

// Values are expected in [0, 1], the default range
fn save_grayscale(grid: &[Vec<f64>], filename: &str) {
    let height = grid.len();
    let width = grid[0].len();
    let mut img = GrayImage::new(width as u32, height as u32);
    for (y, row) in grid.iter().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            let gray = (v.clamp(0.0, 1.0) * 255.0).round() as u8;
            img.put_pixel(x as u32, y as u32, Luma([gray]));
        }
    }
    img.save(Path::new(filename)).unwrap();
    println!("Saved {}", filename);
}

fn main() {
    let size = 256;
    let area = DVec2::new(size as f64, size as f64);
    let points = pixel_centers(area, size, size);

    // One lattice, several octave counts
    let mut field = NoiseField::with_seed(area, 32.0, 42);
    for octaves in [1, 2, 4, 6] {
        field.set_octaves(octaves);
        let values = field.generate_noise(&points);
        save_grayscale(&values, &format!("gradient_noise_{}oct.png", octaves));
    }

    // Raw blend without the smoothstep stage
    field.set_octaves(4);
    field.set_shaping(|v| v);
    save_grayscale(&field.generate_noise(&points), "gradient_noise_linear.png");
}
