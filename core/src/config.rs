use log::trace;

use crate::error::ConfigError;
use crate::shaping::Shaping;

// Parameters of the octave sum and the output stage
#[derive(Debug, Clone)]
pub struct NoiseConfig {
    lower: f64,
    upper: f64,
    octaves: u32,
    persistence: f64, // amplitude factor between successive octaves
    lacunarity: f64,  // frequency factor between successive octaves
    shaping: Shaping,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            lower: 0.0,
            upper: 1.0,
            octaves: 1,
            persistence: 0.5,
            lacunarity: 2.0,
            shaping: Shaping::Smoothstep,
        }
    }
}

impl NoiseConfig {
    pub fn value_range(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    pub fn persistence(&self) -> f64 {
        self.persistence
    }

    pub fn lacunarity(&self) -> f64 {
        self.lacunarity
    }

    pub fn shaping(&self) -> &Shaping {
        &self.shaping
    }

    // The comparisons are written so that NaN is rejected too
    pub fn try_set_value_range(&mut self, lower: f64, upper: f64) -> Result<(), ConfigError> {
        if lower < upper {
            self.lower = lower;
            self.upper = upper;
            Ok(())
        } else {
            Err(ConfigError::EmptyRange { lower, upper })
        }
    }

    pub fn try_set_octaves(&mut self, octaves: i32) -> Result<(), ConfigError> {
        if octaves > 0 {
            self.octaves = octaves as u32;
            Ok(())
        } else {
            Err(ConfigError::NonPositiveOctaves(octaves))
        }
    }

    pub fn try_set_lacunarity(&mut self, lacunarity: f64) -> Result<(), ConfigError> {
        if lacunarity > 1.0 {
            self.lacunarity = lacunarity;
            Ok(())
        } else {
            Err(ConfigError::LacunarityTooSmall(lacunarity))
        }
    }

    pub fn try_set_persistence(&mut self, persistence: f64) -> Result<(), ConfigError> {
        if persistence > 0.0 && persistence < 1.0 {
            self.persistence = persistence;
            Ok(())
        } else {
            Err(ConfigError::PersistenceOutOfRange(persistence))
        }
    }

    pub fn set_shaping(&mut self, shaping: Shaping) {
        self.shaping = shaping;
    }

    // Silent variants: a refused value keeps the previous one
    pub fn set_value_range(&mut self, lower: f64, upper: f64) {
        ignore(self.try_set_value_range(lower, upper));
    }

    pub fn set_octaves(&mut self, octaves: i32) {
        ignore(self.try_set_octaves(octaves));
    }

    pub fn set_lacunarity(&mut self, lacunarity: f64) {
        ignore(self.try_set_lacunarity(lacunarity));
    }

    pub fn set_persistence(&mut self, persistence: f64) {
        ignore(self.try_set_persistence(persistence));
    }

    // Output of the normalization stage for one value
    #[inline]
    pub(crate) fn shape(&self, value: f64) -> f64 {
        self.shaping.apply(value, self.lower, self.upper)
    }
}

fn ignore(result: Result<(), ConfigError>) {
    if let Err(err) = result {
        trace!("ignoring noise config value: {}", err);
    }
}
