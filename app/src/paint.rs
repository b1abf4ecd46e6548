use image::{Rgb, RgbImage};
use noiser::utils::same_shape;
use noiser::{AffineMap, Grid};
use palette::{Gradient, LinSrgb};

const WATER: [u8; 3] = [0x00, 0x20, 0xB0];
const LAND: [u8; 3] = [0x00, 0xA0, 0x00];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintMode {
    // Red for positive values, blue for negative, fading to white at zero
    Values,
    // Two colours split at a water level
    Terrain { threshold: f64 },
    // Deep water to snow colour ramp
    Gradient,
}

pub type ColorGrid = Grid<[u8; 3]>;

// Colour grid with the same shape as `values`, filled black
pub fn blank_like(values: &[Vec<f64>]) -> ColorGrid {
    values.iter().map(|row| vec![[0; 3]; row.len()]).collect()
}

fn assert_same_shape(colors: &ColorGrid, values: &[Vec<f64>]) {
    assert!(
        same_shape(colors, values),
        "colour grid and value grid differ in shape"
    );
}

// `range` is the value range the noise was normalized to
pub fn paint(colors: &mut ColorGrid, values: &[Vec<f64>], mode: PaintMode, range: (f64, f64)) {
    match mode {
        PaintMode::Values => paint_values(colors, values, range),
        PaintMode::Terrain { threshold } => paint_terrain(colors, values, threshold),
        PaintMode::Gradient => paint_gradient(colors, values, range),
    }
}

pub fn paint_values(colors: &mut ColorGrid, values: &[Vec<f64>], range: (f64, f64)) {
    assert_same_shape(colors, values);
    let signed = AffineMap::fit(range.0, range.1, -1.0, 1.0);
    for (color_row, value_row) in colors.iter_mut().zip(values) {
        for (color, &v) in color_row.iter_mut().zip(value_row) {
            let v = signed.apply(v).clamp(-1.0, 1.0);
            let fade = ((1.0 - v.abs()) * 255.0) as u8;
            *color = if v > 0.0 {
                [0xFF, fade, fade]
            } else {
                [fade, fade, 0xFF]
            };
        }
    }
}

pub fn paint_terrain(colors: &mut ColorGrid, values: &[Vec<f64>], threshold: f64) {
    assert_same_shape(colors, values);
    for (color_row, value_row) in colors.iter_mut().zip(values) {
        for (color, &v) in color_row.iter_mut().zip(value_row) {
            *color = if v < threshold { WATER } else { LAND };
        }
    }
}

pub fn paint_gradient(colors: &mut ColorGrid, values: &[Vec<f64>], range: (f64, f64)) {
    assert_same_shape(colors, values);
    let gradient = Gradient::with_domain(vec![
        (0.00, LinSrgb::new(0.0, 0.0, 0.5)), // deep blue
        (0.30, LinSrgb::new(0.8, 0.8, 0.5)), // sand
        (0.50, LinSrgb::new(0.1, 0.6, 0.2)), // green
        (0.75, LinSrgb::new(0.5, 0.4, 0.3)), // rock
        (1.00, LinSrgb::new(1.0, 1.0, 1.0)), // snow
    ]);
    let unit = AffineMap::fit(range.0, range.1, 0.0, 1.0);
    for (color_row, value_row) in colors.iter_mut().zip(values) {
        for (color, &v) in color_row.iter_mut().zip(value_row) {
            let t = unit.apply(v).clamp(0.0, 1.0) as f32;
            let col: LinSrgb = gradient.get(t);
            let rgb = col.into_format::<u8>();
            *color = [rgb.red, rgb.green, rgb.blue];
        }
    }
}

// Rows become image rows; short rows are padded with black
pub fn to_image(colors: &ColorGrid) -> RgbImage {
    let height = colors.len();
    let width = colors.iter().map(Vec::len).max().unwrap_or(0);
    let mut img = RgbImage::new(width as u32, height as u32);
    for (y, row) in colors.iter().enumerate() {
        for (x, &c) in row.iter().enumerate() {
            img.put_pixel(x as u32, y as u32, Rgb(c));
        }
    }
    img
}
