// noiser: 2D gradient noise over a bounded, wrapping area
// lattice, single-octave evaluation, octave sum, normalization and shaping
pub mod affine;
pub mod config;
pub mod error;
pub mod field2;
pub mod lattice2;
pub mod shaping;
pub mod utils;

pub use affine::AffineMap;
pub use config::NoiseConfig;
pub use error::ConfigError;
pub use field2::NoiseField;
pub use lattice2::GradientLattice;
pub use shaping::Shaping;
pub use utils::{Grid, flatten2};

// Anything that can be sampled at a 2D point
pub trait NoiseGenerator {
    fn get2(&self, x: f64, y: f64) -> f64;
}
