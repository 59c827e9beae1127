/// Ratio between the Glicko scale and the internal Glicko-2 scale.
pub const GLICKO2_GRADIENT: f64 = 173.7178;

/// Rating on the Glicko scale that maps to a mean of `0.0` on the internal
/// scale.
pub const GLICKO2_INTERCEPT: f64 = 1500.0;

/// A rating as seen by the outside world, on the Glicko scale.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ExternalRating {
    /// Number indicating playing strength. Higher is better.
    pub rating: f64,
    /// Uncertainty in the rating. A range from rating minus twice the deviation
    /// to rating plus twice the deviation approximately represents a 95%
    /// confidence interval.
    pub deviation: f64,
    /// Number indicating the degree of expected fluctuation in the rating.
    /// Volatility is the same on both scales.
    pub volatility: f64,
}

/// Affine map between the Glicko scale and the internal scale used by the
/// update formulas.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Scale {
    gradient: f64,
    intercept: f64,
}

impl Default for Scale {
    fn default() -> Scale {
        Scale::GLICKO2
    }
}

impl Scale {
    pub const GLICKO2: Scale = Scale {
        gradient: GLICKO2_GRADIENT,
        intercept: GLICKO2_INTERCEPT,
    };

    pub fn new(gradient: f64, intercept: f64) -> Scale {
        assert!(gradient.is_finite() && gradient > 0.0);
        assert!(intercept.is_finite());
        Scale {
            gradient,
            intercept,
        }
    }

    pub fn gradient(&self) -> f64 {
        self.gradient
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    #[inline]
    pub fn to_internal_mean(&self, rating: f64) -> f64 {
        (rating - self.intercept) / self.gradient
    }

    #[inline]
    pub fn to_internal_deviation(&self, deviation: f64) -> f64 {
        deviation / self.gradient
    }

    #[inline]
    pub fn to_external_rating(&self, mean: f64) -> f64 {
        mean * self.gradient + self.intercept
    }

    #[inline]
    pub fn to_external_deviation(&self, deviation: f64) -> f64 {
        deviation * self.gradient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glicko2_scale() {
        let scale = Scale::default();
        assert_eq!(scale.to_internal_mean(1500.0), 0.0);
        assert!((scale.to_internal_mean(1400.0) - -0.5756).abs() < 0.0001);
        assert!((scale.to_internal_deviation(200.0) - 1.1513).abs() < 0.0001);
        assert!((scale.to_internal_deviation(300.0) - 1.7269).abs() < 0.0001);
    }

    #[test]
    fn test_custom_scale() {
        let scale = Scale::new(100.0, 1000.0);
        assert_eq!(scale.to_internal_mean(1200.0), 2.0);
        assert_eq!(scale.to_external_rating(-1.0), 900.0);
        assert_eq!(scale.to_external_deviation(0.5), 50.0);
    }

    #[test]
    #[should_panic]
    fn test_zero_gradient() {
        Scale::new(0.0, 1500.0);
    }
}
