use std::f64::consts::PI;

use glam::{DVec2, UVec2};
use log::debug;
use rand::Rng;

// Grid of unit gradient vectors pinned at the corners of the chunks
// that tile the area. There is one more corner than chunk along each axis,
// so the far corners of the last chunk are always present.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientLattice {
    area_size: DVec2,
    chunk_count: UVec2,
    chunk_size: DVec2,
    // gradients[i][j] is the corner at (i * chunk_size.x, j * chunk_size.y)
    gradients: Vec<Vec<DVec2>>,
}

impl GradientLattice {
    // Random gradients, angle uniform in [-pi, pi)
    pub fn random<R: Rng + ?Sized>(area_size: DVec2, chunk_side: f64, rng: &mut R) -> Self {
        Self::build(area_size, chunk_side, || {
            let theta = rng.gen_range(-PI..PI);
            DVec2::new(theta.cos(), theta.sin())
        })
    }

    // Every corner carries the same gradient (normalized)
    // Such a lattice produces a flat field
    pub fn uniform(area_size: DVec2, chunk_side: f64, gradient: DVec2) -> Self {
        let Some(unit) = gradient.try_normalize() else {
            panic!("gradient must be a finite non-zero vector, got {}", gradient);
        };
        Self::build(area_size, chunk_side, || unit)
    }

    // chunk_side is only a proposal: the chunk count per axis is rounded
    // so that a whole number of chunks covers the area exactly
    fn build(area_size: DVec2, chunk_side: f64, mut next: impl FnMut() -> DVec2) -> Self {
        assert!(
            area_size.is_finite() && area_size.x > 0.0 && area_size.y > 0.0,
            "area size must be positive, got {}",
            area_size
        );
        assert!(
            chunk_side.is_finite() && chunk_side > 0.0,
            "chunk side must be positive, got {}",
            chunk_side
        );

        let counts = (area_size / chunk_side).round().max(DVec2::ONE);
        assert!(
            counts.max_element() <= u32::MAX as f64,
            "chunk count {} does not fit in u32",
            counts
        );
        let chunk_size = area_size / counts;
        let chunk_count = counts.as_uvec2();

        let columns = chunk_count.x as usize + 1;
        let rows = chunk_count.y as usize + 1;
        let mut gradients = Vec::with_capacity(columns);
        for _ in 0..columns {
            gradients.push((0..rows).map(|_| next()).collect());
        }

        debug!(
            "gradient lattice {}x{} over area {} (chunk {}, proposed {})",
            columns, rows, area_size, chunk_size, chunk_side
        );

        Self {
            area_size,
            chunk_count,
            chunk_size,
            gradients,
        }
    }

    pub fn area_size(&self) -> DVec2 {
        self.area_size
    }

    pub fn chunk_size(&self) -> DVec2 {
        self.chunk_size
    }

    pub fn chunk_count(&self) -> UVec2 {
        self.chunk_count
    }

    // Number of corners along (x, y)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.gradients.len(), self.gradients[0].len())
    }

    #[inline]
    pub fn gradient(&self, i: usize, j: usize) -> DVec2 {
        self.gradients[i][j]
    }

    pub fn gradients(&self) -> &[Vec<DVec2>] {
        &self.gradients
    }

    // Chunk containing a point already wrapped into [0, area).
    // Clamped to the last chunk so i + 1 and j + 1 stay inside the lattice
    // even when division rounds up at the far edge.
    #[inline]
    pub fn locate(&self, point: DVec2) -> (usize, usize) {
        let chunk = (point / self.chunk_size).floor();
        let i = (chunk.x.max(0.0) as usize).min(self.chunk_count.x as usize - 1);
        let j = (chunk.y.max(0.0) as usize).min(self.chunk_count.y as usize - 1);
        (i, j)
    }
}

#[cfg(test)]
mod tests {
    use glam::{DVec2, UVec2};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::GradientLattice;

    #[test]
    fn lattice_chunk_geometry() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let l = GradientLattice::random(DVec2::new(80.0, 40.0), 20.0, &mut rng);
        assert_eq!(l.chunk_count(), UVec2::new(4, 2));
        assert_eq!(l.chunk_size(), DVec2::new(20.0, 20.0));
        assert_eq!(l.dimensions(), (5, 3));
    }

    #[test]
    fn lattice_rounds_proposed_chunk() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        // 100 / 30 = 3.33 -> 3 chunks of 33.3; 10 / 30 rounds to 0 -> clamped to 1
        let l = GradientLattice::random(DVec2::new(100.0, 10.0), 30.0, &mut rng);
        assert_eq!(l.chunk_count(), UVec2::new(3, 1));
        assert!((l.chunk_size().x - 100.0 / 3.0).abs() < 1e-12);
        assert_eq!(l.chunk_size().y, 10.0);
        assert_eq!(l.dimensions(), (4, 2));
        // Chunks tile the area exactly
        let covered = l.chunk_size() * l.chunk_count().as_dvec2();
        assert!((covered - l.area_size()).abs().max_element() < 1e-9);
    }

    #[test]
    fn lattice_gradients_are_unit() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let l = GradientLattice::random(DVec2::new(64.0, 48.0), 4.0, &mut rng);
        for column in l.gradients() {
            for g in column {
                assert!((g.length() - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn lattice_same_seed_same_gradients() {
        let a = GradientLattice::random(
            DVec2::new(30.0, 30.0),
            5.0,
            &mut ChaCha8Rng::seed_from_u64(77),
        );
        let b = GradientLattice::random(
            DVec2::new(30.0, 30.0),
            5.0,
            &mut ChaCha8Rng::seed_from_u64(77),
        );
        let c = GradientLattice::random(
            DVec2::new(30.0, 30.0),
            5.0,
            &mut ChaCha8Rng::seed_from_u64(78),
        );
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn lattice_uniform_normalizes() {
        let l = GradientLattice::uniform(DVec2::new(10.0, 10.0), 5.0, DVec2::new(3.0, 4.0));
        for column in l.gradients() {
            for g in column {
                assert!((*g - DVec2::new(0.6, 0.8)).length() < 1e-12);
            }
        }
    }

    #[test]
    fn lattice_locate_stays_in_bounds() {
        let l = GradientLattice::uniform(DVec2::new(80.0, 40.0), 20.0, DVec2::X);
        assert_eq!(l.locate(DVec2::new(0.0, 0.0)), (0, 0));
        assert_eq!(l.locate(DVec2::new(20.0, 19.999)), (1, 0));
        assert_eq!(l.locate(DVec2::new(79.999, 39.999)), (3, 1));
        // The far edge itself still resolves to the last chunk
        assert_eq!(l.locate(DVec2::new(80.0, 40.0)), (3, 1));
    }

    #[test]
    #[should_panic]
    fn lattice_rejects_zero_area() {
        let _ = GradientLattice::uniform(DVec2::new(0.0, 10.0), 1.0, DVec2::X);
    }

    #[test]
    #[should_panic]
    fn lattice_rejects_negative_chunk() {
        let _ = GradientLattice::uniform(DVec2::new(10.0, 10.0), -1.0, DVec2::X);
    }

    #[test]
    #[should_panic(expected = "does not fit in u32")]
    fn lattice_rejects_too_many_chunks() {
        let _ = GradientLattice::uniform(DVec2::new(1e10, 10.0), 1.0, DVec2::X);
    }

    #[test]
    #[should_panic]
    fn lattice_rejects_zero_gradient() {
        let _ = GradientLattice::uniform(DVec2::new(10.0, 10.0), 1.0, DVec2::ZERO);
    }
}
