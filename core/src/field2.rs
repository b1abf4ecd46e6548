use glam::{DVec2, UVec2};
use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::NoiseGenerator;
use crate::affine::AffineMap;
use crate::config::NoiseConfig;
use crate::error::ConfigError;
use crate::lattice2::GradientLattice;
use crate::shaping::Shaping;
use crate::utils::Grid;

// 2D gradient noise over a bounded, wrapping area.
//
// The area is cut into chunks and every chunk corner holds a random unit
// gradient. A point is evaluated from the four gradients of its chunk,
// blended bilinearly. Unlike textbook Perlin noise the blend weight is the raw
// fractional offset inside the chunk, with no fade curve.
//
// Batch evaluation sums octaves, rescales the whole batch so its extremes hit
// the configured value range and runs every value through the shaping curve.
// A batch whose raw span is within rounding error counts as flat and
// collapses to a single value.
//
// Cloning copies the lattice, so a clone keeps producing the same noise
// while the source field is reconfigured.
#[derive(Debug, Clone)]
pub struct NoiseField {
    lattice: GradientLattice,
    config: NoiseConfig,
}

impl NoiseField {
    // Lattice seeded from OS entropy
    pub fn new(area_size: DVec2, chunk_side: f64) -> Self {
        let mut rng = ChaCha8Rng::from_entropy();
        Self::with_rng(area_size, chunk_side, &mut rng)
    }

    // Reproducible lattice
    pub fn with_seed(area_size: DVec2, chunk_side: f64, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_rng(area_size, chunk_side, &mut rng)
    }

    pub fn with_rng<R: Rng + ?Sized>(area_size: DVec2, chunk_side: f64, rng: &mut R) -> Self {
        Self::from_lattice(GradientLattice::random(area_size, chunk_side, rng))
    }

    pub fn from_lattice(lattice: GradientLattice) -> Self {
        Self {
            lattice,
            config: NoiseConfig::default(),
        }
    }

    pub fn lattice(&self) -> &GradientLattice {
        &self.lattice
    }

    pub fn config(&self) -> &NoiseConfig {
        &self.config
    }

    pub fn area_size(&self) -> DVec2 {
        self.lattice.area_size()
    }

    pub fn chunk_size(&self) -> DVec2 {
        self.lattice.chunk_size()
    }

    pub fn chunk_count(&self) -> UVec2 {
        self.lattice.chunk_count()
    }

    // Ignored unless lower < upper
    pub fn set_value_range(&mut self, lower: f64, upper: f64) {
        self.config.set_value_range(lower, upper);
    }

    pub fn try_set_value_range(&mut self, lower: f64, upper: f64) -> Result<(), ConfigError> {
        self.config.try_set_value_range(lower, upper)
    }

    // Ignored unless positive
    pub fn set_octaves(&mut self, octaves: i32) {
        self.config.set_octaves(octaves);
    }

    pub fn try_set_octaves(&mut self, octaves: i32) -> Result<(), ConfigError> {
        self.config.try_set_octaves(octaves)
    }

    // Ignored unless greater than 1
    pub fn set_lacunarity(&mut self, lacunarity: f64) {
        self.config.set_lacunarity(lacunarity);
    }

    pub fn try_set_lacunarity(&mut self, lacunarity: f64) -> Result<(), ConfigError> {
        self.config.try_set_lacunarity(lacunarity)
    }

    // Ignored unless strictly between 0 and 1
    pub fn set_persistence(&mut self, persistence: f64) {
        self.config.set_persistence(persistence);
    }

    pub fn try_set_persistence(&mut self, persistence: f64) -> Result<(), ConfigError> {
        self.config.try_set_persistence(persistence)
    }

    // The curve should map the value range onto itself, keep both endpoints,
    // increase, and be flat at the endpoints. The caller is responsible for
    // all of that; the output is never clamped.
    pub fn set_shaping<F>(&mut self, shaping: F)
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.config.set_shaping(Shaping::custom(shaping));
    }

    pub fn set_shaping_curve(&mut self, shaping: Shaping) {
        self.config.set_shaping(shaping);
    }

    pub fn reset_shaping(&mut self) {
        self.config.set_shaping(Shaping::Smoothstep);
    }

    // Single octave at `point`; the area repeats in both directions
    pub fn noise(&self, point: DVec2) -> f64 {
        let area = self.lattice.area_size();
        let size = self.lattice.chunk_size();
        let p = DVec2::new(wrap(point.x, area.x), wrap(point.y, area.y));
        let (i, j) = self.lattice.locate(p);

        // Chunk edges
        let x1 = i as f64 * size.x;
        let x2 = x1 + size.x;
        let y1 = j as f64 * size.y;
        let y2 = y1 + size.y;

        // Corner to point, in chunk units
        let offset1 = DVec2::new((p.x - x1) / size.x, (p.y - y1) / size.y);
        let offset2 = DVec2::new((p.x - x2) / size.x, (p.y - y1) / size.y);
        let offset3 = DVec2::new((p.x - x1) / size.x, (p.y - y2) / size.y);
        let offset4 = DVec2::new((p.x - x2) / size.x, (p.y - y2) / size.y);

        let product1 = offset1.dot(self.lattice.gradient(i, j));
        let product2 = offset2.dot(self.lattice.gradient(i + 1, j));
        let product3 = offset3.dot(self.lattice.gradient(i, j + 1));
        let product4 = offset4.dot(self.lattice.gradient(i + 1, j + 1));

        let horizontal1 = lerp(product1, product2, offset1.x);
        let horizontal2 = lerp(product3, product4, offset1.x);
        lerp(horizontal1, horizontal2, offset1.y)
    }

    // Unnormalized sum over all configured octaves
    pub fn octave_sum(&self, point: DVec2) -> f64 {
        let lacunarity = self.config.lacunarity();
        let persistence = self.config.persistence();

        let mut total = self.noise(point);
        let mut frequency = lacunarity;
        let mut amplitude = persistence;
        for _ in 1..self.config.octaves() {
            total += amplitude * self.noise(point * frequency);
            frequency *= lacunarity;
            amplitude *= persistence;
        }
        total
    }

    // Shaped noise for every point; the result has the shape of `points`.
    // Rows may differ in length.
    pub fn generate_noise(&self, points: &[Vec<DVec2>]) -> Grid<f64> {
        let mut values = Vec::new();
        self.generate_noise_into(points, &mut values);
        values
    }

    // Same as generate_noise but writes into `values`, which is cleared first
    pub fn generate_noise_into(&self, points: &[Vec<DVec2>], values: &mut Grid<f64>) {
        let mut minimum = f64::INFINITY;
        let mut maximum = f64::NEG_INFINITY;

        values.clear();
        values.reserve(points.len());
        for row in points {
            let raw: Vec<f64> = row
                .iter()
                .map(|&p| {
                    let v = self.octave_sum(p);
                    minimum = minimum.min(v);
                    maximum = maximum.max(v);
                    v
                })
                .collect();
            values.push(raw);
        }

        if let Some(scaler) = self.scaler(minimum, maximum) {
            for row in values.iter_mut() {
                for v in row.iter_mut() {
                    *v = self.config.shape(scaler.apply(*v));
                }
            }
        }
    }

    // generate_noise with rows spread over the rayon pool.
    // Output is identical to the sequential version.
    pub fn par_generate_noise(&self, points: &[Vec<DVec2>]) -> Grid<f64> {
        let mut values: Grid<f64> = points
            .par_iter()
            .map(|row| row.iter().map(|&p| self.octave_sum(p)).collect::<Vec<f64>>())
            .collect();

        let (minimum, maximum) = values
            .par_iter()
            .map(|row| {
                row.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                    (lo.min(v), hi.max(v))
                })
            })
            .reduce(
                || (f64::INFINITY, f64::NEG_INFINITY),
                |a, b| (a.0.min(b.0), a.1.max(b.1)),
            );

        if let Some(scaler) = self.scaler(minimum, maximum) {
            let config = &self.config;
            values.par_iter_mut().for_each(|row| {
                for v in row.iter_mut() {
                    *v = config.shape(scaler.apply(*v));
                }
            });
        }
        values
    }

    // Map from the batch extremes onto the value range, None for an empty batch.
    // A span within rounding error of the blend is treated as a flat field and
    // takes the constant-input branch of AffineMap::fit. Without this a lattice
    // of identical gradients would stretch ~1e-16 residues over the full range.
    fn scaler(&self, minimum: f64, maximum: f64) -> Option<AffineMap> {
        if minimum > maximum {
            return None;
        }
        let (lower, upper) = self.config.value_range();
        if maximum - minimum <= self.flat_tolerance() {
            debug!(
                "raw noise span [{}, {}] is flat, collapsing onto [{}, {}]",
                minimum, maximum, lower, upper
            );
            return Some(AffineMap::fit(minimum, minimum, lower, upper));
        }
        debug!(
            "normalizing raw noise [{}, {}] onto [{}, {}]",
            minimum, maximum, lower, upper
        );
        Some(AffineMap::fit(minimum, maximum, lower, upper))
    }

    // Rounding residue bound for octave_sum: a few ulps of the unit-scale
    // corner products, weighted by the summed octave amplitudes
    fn flat_tolerance(&self) -> f64 {
        let persistence = self.config.persistence();
        let mut amplitude = 1.0;
        let mut total = 0.0;
        for _ in 0..self.config.octaves() {
            total += amplitude;
            amplitude *= persistence;
        }
        FLAT_ULPS * f64::EPSILON * total
    }
}

impl NoiseGenerator for NoiseField {
    fn get2(&self, x: f64, y: f64) -> f64 {
        self.noise(DVec2::new(x, y))
    }
}

// Raw spans up to this many ulps (per unit of octave amplitude) count as flat
const FLAT_ULPS: f64 = 64.0;

// Floored modulo into [0, extent)
// A tiny negative input can round up to `extent` itself, which is folded to 0
#[inline]
fn wrap(v: f64, extent: f64) -> f64 {
    let r = v.rem_euclid(extent);
    if r < extent { r } else { 0.0 }
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}
