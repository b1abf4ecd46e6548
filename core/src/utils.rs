use glam::DVec2;

use crate::NoiseGenerator;

// Row-major grid, access as `grid[row][col]`.
// Rows are allowed to have different lengths.
pub type Grid<T> = Vec<Vec<T>>;

// Flatten a grid (row-major) into a single Vec
// For turning a result grid into an image buffer
pub fn flatten2<T: Copy>(grid: &[Vec<T>]) -> Vec<T> {
    grid.iter().flat_map(|row| row.iter().copied()).collect()
}

// True when both grids have the same row count and row lengths
pub fn same_shape<A, B>(a: &[Vec<A>], b: &[Vec<B>]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(ra, rb)| ra.len() == rb.len())
}

// `rows` rows of `cols` sample points at pixel centres covering `area`
pub fn pixel_centers(area: DVec2, cols: usize, rows: usize) -> Grid<DVec2> {
    let step = area / DVec2::new(cols as f64, rows as f64);
    (0..rows)
        .map(|y| {
            (0..cols)
                .map(|x| (DVec2::new(x as f64, y as f64) + 0.5) * step)
                .collect()
        })
        .collect()
}

// Smallest and largest value, None when the grid holds no values
pub fn value_bounds(grid: &[Vec<f64>]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for row in grid {
        for &v in row {
            min = min.min(v);
            max = max.max(v);
        }
    }
    (min <= max).then_some((min, max))
}

// Raw samples of any generator over a point grid, no normalization
pub fn sample_grid<N: NoiseGenerator + ?Sized>(generator: &N, points: &[Vec<DVec2>]) -> Grid<f64> {
    points
        .iter()
        .map(|row| row.iter().map(|p| generator.get2(p.x, p.y)).collect())
        .collect()
}
