use crate::{
    root_finder::IllinoisSolver,
    scale::{ExternalRating, Scale},
    Rating,
};

#[derive(Debug, Clone)]
pub struct RatingSystemBuilder {
    scale: Scale,

    default_rating: f64,
    default_volatility: f64,

    max_deviation: f64,

    tau: f64,

    tolerance: f64,
    max_iterations: u32,
}

impl Default for RatingSystemBuilder {
    fn default() -> RatingSystemBuilder {
        RatingSystemBuilder::new()
    }
}

impl RatingSystemBuilder {
    pub fn new() -> RatingSystemBuilder {
        RatingSystemBuilder {
            scale: Scale::GLICKO2,

            default_rating: 1500.0,
            default_volatility: 0.06,

            max_deviation: 350.0,

            tau: 0.5,

            tolerance: 1e-7,
            max_iterations: 1000,
        }
    }

    pub fn scale(&mut self, scale: Scale) -> &mut Self {
        self.scale = scale;
        self
    }

    pub fn default_rating(&mut self, default_rating: f64) -> &mut Self {
        assert!(default_rating.is_finite());
        self.default_rating = default_rating;
        self
    }

    pub fn default_volatility(&mut self, default_volatility: f64) -> &mut Self {
        assert!(default_volatility.is_finite() && default_volatility > 0.0);
        self.default_volatility = default_volatility;
        self
    }

    /// Deviation of unrated subjects, and upper bound for the deviation of
    /// everyone else. On the external scale.
    pub fn max_deviation(&mut self, max_deviation: f64) -> &mut Self {
        assert!(max_deviation.is_finite() && max_deviation > 0.0);
        self.max_deviation = max_deviation;
        self
    }

    /// Constrains the change in volatility over time. Reasonable choices are
    /// between `0.3` and `1.2`.
    pub fn tau(&mut self, tau: f64) -> &mut Self {
        assert!(tau.is_finite() && tau > 0.0);
        self.tau = tau;
        self
    }

    pub fn tolerance(&mut self, tolerance: f64) -> &mut Self {
        assert!(tolerance > 0.0);
        self.tolerance = tolerance;
        self
    }

    pub fn max_iterations(&mut self, max_iterations: u32) -> &mut Self {
        assert!(max_iterations > 0);
        self.max_iterations = max_iterations;
        self
    }

    pub fn build(&self) -> RatingSystem {
        RatingSystem {
            scale: self.scale,

            default_rating: self.default_rating,
            default_volatility: self.default_volatility,

            max_deviation: self.max_deviation,

            tau: self.tau,

            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        }
    }
}

/// Parameters shared by every update in a sequence of rating periods.
#[derive(Debug, Clone)]
pub struct RatingSystem {
    scale: Scale,

    default_rating: f64,
    default_volatility: f64,

    max_deviation: f64,

    tau: f64,

    tolerance: f64,
    max_iterations: u32,
}

impl Default for RatingSystem {
    fn default() -> RatingSystem {
        RatingSystem::new()
    }
}

impl RatingSystem {
    pub fn builder() -> RatingSystemBuilder {
        RatingSystemBuilder::default()
    }

    pub fn new() -> RatingSystem {
        RatingSystem::builder().build()
    }

    /// Rating of a subject that has not played any games yet.
    pub fn new_rating(&self) -> Rating {
        Rating::new_unchecked(
            self.scale.to_internal_mean(self.default_rating),
            self.max_internal_deviation(),
            self.default_volatility,
        )
    }

    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    pub fn default_rating(&self) -> f64 {
        self.default_rating
    }

    pub fn default_volatility(&self) -> f64 {
        self.default_volatility
    }

    pub fn max_deviation(&self) -> f64 {
        self.max_deviation
    }

    pub(crate) fn max_internal_deviation(&self) -> f64 {
        self.scale.to_internal_deviation(self.max_deviation)
    }

    pub fn tau(&self) -> f64 {
        self.tau
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub(crate) fn solver(&self) -> IllinoisSolver {
        IllinoisSolver::new(self.tolerance, self.max_iterations)
    }

    pub fn to_external(&self, rating: &Rating) -> ExternalRating {
        rating.to_external_with_scale(&self.scale)
    }
}
