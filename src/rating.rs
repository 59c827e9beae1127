use std::f64::consts::PI;

use thiserror::Error;

use crate::{
    scale::{ExternalRating, Scale},
    Score,
};

/// Error when constructing a [`Rating`] from values that do not describe a
/// normal distribution.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
#[error("invalid rating (mean {mean}, deviation {deviation}, volatility {volatility})")]
pub struct InvalidRating {
    pub mean: f64,
    pub deviation: f64,
    pub volatility: f64,
}

/// Skill estimate of a single subject on the internal Glicko-2 scale.
///
/// Ratings are plain values. Updates always produce a new rating.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rating {
    mean: f64,
    deviation: f64,
    volatility: f64,
    gravity: f64,
}

impl Rating {
    /// Creates a rating from values on the internal scale.
    ///
    /// # Errors
    ///
    /// The deviation and volatility must be positive, and all components must
    /// be finite.
    pub fn new(mean: f64, deviation: f64, volatility: f64) -> Result<Rating, InvalidRating> {
        if mean.is_finite()
            && deviation.is_finite()
            && deviation > 0.0
            && volatility.is_finite()
            && volatility > 0.0
        {
            Ok(Rating::new_unchecked(mean, deviation, volatility))
        } else {
            Err(InvalidRating {
                mean,
                deviation,
                volatility,
            })
        }
    }

    pub(crate) fn new_unchecked(mean: f64, deviation: f64, volatility: f64) -> Rating {
        Rating {
            mean,
            deviation,
            volatility,
            gravity: gravity(deviation),
        }
    }

    /// Creates a rating from values on the Glicko scale, using the standard
    /// conversion.
    pub fn from_external(
        rating: f64,
        deviation: f64,
        volatility: f64,
    ) -> Result<Rating, InvalidRating> {
        Rating::from_external_with_scale(
            &Scale::GLICKO2,
            ExternalRating {
                rating,
                deviation,
                volatility,
            },
        )
    }

    pub fn from_external_with_scale(
        scale: &Scale,
        external: ExternalRating,
    ) -> Result<Rating, InvalidRating> {
        Rating::new(
            scale.to_internal_mean(external.rating),
            scale.to_internal_deviation(external.deviation),
            external.volatility,
        )
    }

    /// Converts back to the Glicko scale, returning rating and deviation.
    pub fn to_external(&self) -> (f64, f64) {
        let ExternalRating {
            rating, deviation, ..
        } = self.to_external_with_scale(&Scale::GLICKO2);
        (rating, deviation)
    }

    pub fn to_external_with_scale(&self, scale: &Scale) -> ExternalRating {
        ExternalRating {
            rating: scale.to_external_rating(self.mean),
            deviation: scale.to_external_deviation(self.deviation),
            volatility: self.volatility,
        }
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn deviation(&self) -> f64 {
        self.deviation
    }

    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Weight `g(φ)` that discounts games against this rating by its
    /// uncertainty. Decreases as the deviation grows.
    #[inline]
    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Expected score of `self` in a game against `other`.
    ///
    /// The logistic curve is scaled by the gravity of the *opponent*, so the
    /// expectations of two subjects against each other do not generally sum
    /// to one.
    #[inline]
    pub fn expected_score(&self, other: &Rating) -> Score {
        Score(expected_score(self.mean, other))
    }
}

fn gravity(deviation: f64) -> f64 {
    1.0 / (1.0 + 3.0 * deviation * deviation / (PI * PI)).sqrt()
}

#[inline]
pub(crate) fn expected_score(mean: f64, opponent: &Rating) -> f64 {
    1.0 / (1.0 + (-opponent.gravity * (mean - opponent.mean)).exp())
}
