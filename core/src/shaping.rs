use std::fmt;
use std::sync::Arc;

// Caller supplied curve, shared with rayon workers during batch evaluation
pub type ShapingFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

// Cubic Hermite curve 3t^2 - 2t^3 on [0, 1]
// Zero slope at both ends, fixes 0 and 1
#[inline]
pub fn smoothstep(t: f64) -> f64 {
    (3.0 - 2.0 * t) * t * t
}

// Quintic curve 6t^5 - 15t^4 + 10t^3 on [0, 1]
// First and second derivatives vanish at both ends
#[inline]
pub fn smootherstep(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

// Final curve applied to every normalized noise value.
// A custom curve is expected to map [lower, upper] onto itself, fix both
// endpoints, be increasing and have zero slope at the endpoints.
// None of that is checked.
#[derive(Clone, Default)]
pub enum Shaping {
    // smoothstep applied to the value rescaled to [0, 1] within the
    // configured range, then scaled back into the range
    #[default]
    Smoothstep,
    Custom(ShapingFn),
}

impl Shaping {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Shaping::Custom(Arc::new(f))
    }

    // Leaves normalized values untouched
    pub fn identity() -> Self {
        Self::custom(|v| v)
    }

    // Quintic curve stretched over [-1, 1], for a value range of (-1, 1)
    pub fn signed_smootherstep() -> Self {
        Self::custom(|v| {
            let t = 0.5 * v + 0.5;
            2.0 * smootherstep(t) - 1.0
        })
    }

    // `lower < upper` is guaranteed by NoiseConfig
    #[inline]
    pub fn apply(&self, value: f64, lower: f64, upper: f64) -> f64 {
        match self {
            Shaping::Smoothstep => {
                let width = upper - lower;
                // Affine rounding can overshoot the range by an ulp
                let t = ((value - lower) / width).clamp(0.0, 1.0);
                (lower + width * smoothstep(t)).clamp(lower, upper)
            }
            Shaping::Custom(f) => f(value),
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Shaping::Smoothstep)
    }
}

impl fmt::Debug for Shaping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shaping::Smoothstep => f.write_str("Smoothstep"),
            Shaping::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
