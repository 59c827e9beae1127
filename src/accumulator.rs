use tracing::{trace, warn};

use crate::{
    rating::expected_score, root_finder::ConvergenceError, Rating, RatingSystem, Score,
};

/// Running totals for a single subject over the course of one rating period.
///
/// Every game against an opponent contributes a constant amount of state, so
/// nothing about the opponents is retained.
#[derive(Debug, Clone)]
pub struct Accumulator {
    rating: Rating,
    inverse_variance_sum: f64,
    delta_sum: f64,
    games: usize,
}

impl Accumulator {
    pub fn new(rating: Rating) -> Accumulator {
        Accumulator {
            rating,
            inverse_variance_sum: 0.0,
            delta_sum: 0.0,
            games: 0,
        }
    }

    /// Rating of the subject at the start of the period.
    pub fn rating(&self) -> &Rating {
        &self.rating
    }

    /// Number of pairwise outcomes recorded so far.
    pub fn games(&self) -> usize {
        self.games
    }

    /// Records the outcome of a game against an opponent, with the score
    /// from the perspective of the subject.
    pub fn add(&mut self, opponent: &Rating, score: Score) {
        let g = opponent.gravity();
        let e = expected_score(self.rating.mean(), opponent);
        self.inverse_variance_sum += g * g * e * (1.0 - e);
        self.delta_sum += g * (score.value() - e);
        self.games += 1;
    }

    /// Estimated variance of the rating based only on game outcomes, or
    /// `None` if no informative games were recorded.
    pub fn variance(&self) -> Option<f64> {
        (self.inverse_variance_sum > 0.0).then(|| self.inverse_variance_sum.recip())
    }

    /// Estimated improvement in rating, comparing the pre-period rating to
    /// the performance based only on game outcomes.
    pub fn delta(&self) -> Option<f64> {
        self.variance().map(|v| self.delta_sum * v)
    }

    /// Resolves the period into the rating at the start of the next period.
    pub fn rate(&self, rating_system: &RatingSystem) -> Result<Rating, ConvergenceError> {
        self.rate_with_tau(rating_system, rating_system.tau())
    }

    pub fn rate_with_tau(
        &self,
        rating_system: &RatingSystem,
        tau: f64,
    ) -> Result<Rating, ConvergenceError> {
        let max_deviation = rating_system.max_internal_deviation();
        let phi_sq = self.rating.deviation().powi(2);

        let Some(v) = self.variance() else {
            let deviation = (phi_sq + self.rating.volatility().powi(2))
                .sqrt()
                .min(max_deviation);
            return Ok(Rating::new_unchecked(
                self.rating.mean(),
                deviation,
                self.rating.volatility(),
            ));
        };

        let volatility = self.volatility(rating_system, tau, v)?;

        let pre_deviation = (phi_sq + volatility * volatility).sqrt().min(max_deviation);
        let deviation = 1.0 / (1.0 / (pre_deviation * pre_deviation) + 1.0 / v).sqrt();
        let mean = self.rating.mean() + deviation * deviation * self.delta_sum;

        if !mean.is_finite() || !deviation.is_finite() || deviation <= 0.0 {
            return Err(ConvergenceError::NonFinite);
        }

        Ok(Rating::new_unchecked(mean, deviation, volatility))
    }

    fn volatility(
        &self,
        rating_system: &RatingSystem,
        tau: f64,
        v: f64,
    ) -> Result<f64, ConvergenceError> {
        let delta = self.delta_sum * v;
        let delta_sq = delta * delta;
        let phi_sq = self.rating.deviation().powi(2);
        let a = self.rating.volatility().powi(2).ln();
        let tau_sq = tau * tau;

        let f = |x: f64| {
            let exp_x = x.exp();
            let denom = phi_sq + v + exp_x;
            exp_x * (delta_sq - phi_sq - v - exp_x) / (2.0 * denom * denom) - (x - a) / tau_sq
        };

        let b = if delta_sq > phi_sq + v {
            (delta_sq - phi_sq - v).ln()
        } else {
            lower_bracket(&f, a, tau, rating_system.max_iterations())?
        };

        let root = rating_system.solver().solve(f, a, b).inspect_err(|err| {
            warn!(%err, a, b, "volatility did not converge");
        })?;
        let volatility = (root / 2.0).exp();
        trace!(volatility, "solved volatility");

        if volatility.is_finite() && volatility > 0.0 {
            Ok(volatility)
        } else {
            Err(ConvergenceError::NonFinite)
        }
    }
}

/// Steps down from `a` in multiples of `tau` until `f` is no longer negative.
fn lower_bracket<F>(f: F, a: f64, tau: f64, max_steps: u32) -> Result<f64, ConvergenceError>
where
    F: Fn(f64) -> f64,
{
    for k in 1..=max_steps {
        let x = a - f64::from(k) * tau;
        let fx = f(x);
        if fx.is_nan() {
            return Err(ConvergenceError::NonFinite);
        }
        if fx >= 0.0 {
            return Ok(x);
        }
    }
    warn!(steps = max_steps, "volatility bracket not found");
    Err(ConvergenceError::Bracket { steps: max_steps })
}
