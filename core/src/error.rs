use thiserror::Error;

// Reasons a configuration value was refused.
// The plain setters on NoiseField swallow these; the try_ setters return them.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("value range [{lower}, {upper}] is empty: lower must be below upper")]
    EmptyRange { lower: f64, upper: f64 },

    #[error("octave count must be positive, got {0}")]
    NonPositiveOctaves(i32),

    #[error("lacunarity must be greater than 1, got {0}")]
    LacunarityTooSmall(f64),

    #[error("persistence must lie strictly between 0 and 1, got {0}")]
    PersistenceOutOfRange(f64),
}
