use std::{cell::RefCell, fmt, hash::Hash, rc::Rc};

use crate::{
    error::{Error, Result},
    scale::{ExternalRating, Scale},
    Accumulator, InvalidRating, Rating, RatingSystem, Score,
};

/// Read and write access to a rating stored outside of this crate, on the
/// Glicko scale.
///
/// Values are read once when a [`Player`] is seeded, and written back only
/// when [`Player::commit()`] is called.
pub trait RatingSeed {
    /// Identity of the subject. Must be unique within a rating period.
    type Id: Eq + Hash + Clone + fmt::Debug;

    fn id(&self) -> Self::Id;

    fn rating(&self) -> f64;
    fn deviation(&self) -> f64;
    fn volatility(&self) -> f64;

    fn set_rating(&mut self, rating: f64);
    fn set_deviation(&mut self, deviation: f64);
    fn set_volatility(&mut self, volatility: f64);
}

impl<S: RatingSeed> RatingSeed for Rc<RefCell<S>> {
    type Id = S::Id;

    fn id(&self) -> S::Id {
        self.borrow().id()
    }

    fn rating(&self) -> f64 {
        self.borrow().rating()
    }

    fn deviation(&self) -> f64 {
        self.borrow().deviation()
    }

    fn volatility(&self) -> f64 {
        self.borrow().volatility()
    }

    fn set_rating(&mut self, rating: f64) {
        self.borrow_mut().set_rating(rating);
    }

    fn set_deviation(&mut self, deviation: f64) {
        self.borrow_mut().set_deviation(deviation);
    }

    fn set_volatility(&mut self, volatility: f64) {
        self.borrow_mut().set_volatility(volatility);
    }
}

/// A subject together with its current rating.
#[derive(Debug, Clone)]
pub struct Player<T> {
    seed: T,
    rating: Rating,
    scale: Scale,
}

impl<T: RatingSeed> Player<T> {
    /// Reads the initial rating from the seed.
    pub fn from_seed(seed: T, rating_system: &RatingSystem) -> Result<Player<T>, InvalidRating> {
        let scale = *rating_system.scale();
        let rating = Rating::from_external_with_scale(
            &scale,
            ExternalRating {
                rating: seed.rating(),
                deviation: seed.deviation(),
                volatility: seed.volatility(),
            },
        )?;
        Ok(Player {
            seed,
            rating,
            scale,
        })
    }

    /// Writes the current rating back to the seed.
    pub fn commit(&mut self) {
        let ExternalRating {
            rating,
            deviation,
            volatility,
        } = self.rating.to_external_with_scale(&self.scale);
        self.seed.set_rating(rating);
        self.seed.set_deviation(deviation);
        self.seed.set_volatility(volatility);
    }
}

impl<T> Player<T> {
    pub fn new(seed: T, rating: Rating, rating_system: &RatingSystem) -> Player<T> {
        Player {
            seed,
            rating,
            scale: *rating_system.scale(),
        }
    }

    pub fn rating(&self) -> &Rating {
        &self.rating
    }

    pub fn seed(&self) -> &T {
        &self.seed
    }

    pub(crate) fn scale(&self) -> &Scale {
        &self.scale
    }

    pub fn into_seed(self) -> T {
        self.seed
    }

    /// Rating on the external scale, without writing it to the seed.
    pub fn external_rating(&self) -> ExternalRating {
        self.rating.to_external_with_scale(&self.scale)
    }

    pub(crate) fn with_rating(self, rating: Rating) -> Player<T> {
        Player { rating, ..self }
    }

    /// Computes the next player after playing against each of the
    /// `opponents`, with the corresponding `scores` from the perspective of
    /// this player. Leaves `self` untouched.
    pub fn generate_next(
        &self,
        opponents: &[Rating],
        scores: &[Score],
        rating_system: &RatingSystem,
    ) -> Result<Player<T>>
    where
        T: Clone,
    {
        if opponents.len() != scores.len() {
            return Err(Error::MismatchedInput {
                participants: opponents.len(),
                ranks: scores.len(),
            });
        }

        let mut acc = Accumulator::new(self.rating);
        for (opponent, &score) in opponents.iter().zip(scores) {
            acc.add(opponent, score);
        }

        Ok(self.clone().with_rating(acc.rate(rating_system)?))
    }
}
