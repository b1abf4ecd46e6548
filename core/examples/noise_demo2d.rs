use glam::DVec2;
use noiser::NoiseField;
use noiser::utils::pixel_centers;

fn main() {
    // 80×40 area, chunks of roughly 20, seed 2025
    let mut field = NoiseField::with_seed(DVec2::new(80.0, 40.0), 20.0, 2025);
    field.set_value_range(-1.0, 1.0);
    field.set_octaves(3);

    let values = field.generate_noise(&pixel_centers(field.area_size(), 16, 8));

    // Print the whole 16×8 grid
    for row in &values {
        for v in row {
            print!("{:>6.3} ", v);
        }
        println!();
    }
}
