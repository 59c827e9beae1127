#[cfg(feature = "rayon")]
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{
    error::{Error, Result},
    Accumulator, Player, Rating, RatingSeed, RatingSystem, Score,
};

/// A batch of games that are rated together.
///
/// All games in a period are evaluated against the ratings at the start of
/// the period, so the order in which they are recorded does not matter.
/// A period should be long enough that the average subject plays somewhere
/// between 5 and 10 games.
#[derive(Debug, Clone)]
pub struct RatingPeriod<T: RatingSeed> {
    rating_system: RatingSystem,
    players: Vec<Player<T>>,
    index: FxHashMap<T::Id, usize>,
    accumulators: Vec<Accumulator>,
}

impl<T: RatingSeed> RatingPeriod<T> {
    /// Assembles a period from existing players.
    ///
    /// # Errors
    ///
    /// Every identity must be unique, and every player must have been
    /// created with the scale of `rating_system`, so that [`Self::commit()`]
    /// writes ratings back on the scale they were read from.
    pub fn new(rating_system: RatingSystem, players: Vec<Player<T>>) -> Result<RatingPeriod<T>> {
        let mut index = FxHashMap::default();
        index.reserve(players.len());
        for (i, player) in players.iter().enumerate() {
            let id = player.seed().id();
            if player.scale() != rating_system.scale() {
                return Err(Error::MismatchedScale(format!("{id:?}")));
            }
            if index.contains_key(&id) {
                return Err(Error::DuplicateSubject(format!("{id:?}")));
            }
            index.insert(id, i);
        }

        let accumulators = players
            .iter()
            .map(|player| Accumulator::new(*player.rating()))
            .collect();

        Ok(RatingPeriod {
            rating_system,
            players,
            index,
            accumulators,
        })
    }

    /// Seeds a player from each of the given objects.
    pub fn from_seeds<I>(rating_system: RatingSystem, seeds: I) -> Result<RatingPeriod<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let players = seeds
            .into_iter()
            .map(|seed| Player::from_seed(seed, &rating_system))
            .collect::<Result<Vec<_>, _>>()?;
        RatingPeriod::new(rating_system, players)
    }

    pub fn rating_system(&self) -> &RatingSystem {
        &self.rating_system
    }

    pub fn players(&self) -> &[Player<T>] {
        &self.players
    }

    pub fn player(&self, id: &T::Id) -> Option<&Player<T>> {
        self.index.get(id).map(|&i| &self.players[i])
    }

    /// Number of pairwise outcomes recorded for the subject so far.
    pub fn games(&self, id: &T::Id) -> Option<usize> {
        self.index.get(id).map(|&i| self.accumulators[i].games())
    }

    /// Records a game between any number of participants, where a lower rank
    /// is better and equal ranks are draws. Each participant is scored
    /// against every other participant.
    ///
    /// Nothing is recorded if the input is rejected.
    pub fn game(&mut self, participants: &[T::Id], ranks: &[u32]) -> Result<()> {
        if participants.len() != ranks.len() {
            return Err(Error::MismatchedInput {
                participants: participants.len(),
                ranks: ranks.len(),
            });
        }

        let indexes = participants
            .iter()
            .map(|id| {
                self.index
                    .get(id)
                    .copied()
                    .ok_or_else(|| Error::UnknownSubject(format!("{id:?}")))
            })
            .collect::<Result<Vec<_>>>()?;

        for (n, i) in indexes.iter().enumerate() {
            if indexes[..n].contains(i) {
                return Err(Error::DuplicateSubject(format!("{:?}", participants[n])));
            }
        }

        for (n, (&i, &rank)) in indexes.iter().zip(ranks).enumerate() {
            for (&j, &other_rank) in indexes[n + 1..].iter().zip(&ranks[n + 1..]) {
                let first: Rating = *self.players[i].rating();
                let second: Rating = *self.players[j].rating();
                let score = Score::from_ranks(rank, other_rank);
                self.accumulators[i].add(&second, score);
                self.accumulators[j].add(&first, score.opposite());
            }
        }

        Ok(())
    }

    /// Computes the next rating period, with the volatility-change constant
    /// of the rating system. The current period is left untouched.
    pub fn generate_next(&self) -> Result<RatingPeriod<T>>
    where
        T: Clone,
    {
        self.generate_next_with_tau(self.rating_system.tau())
    }

    /// Computes the next rating period with an explicit volatility-change
    /// constant.
    ///
    /// # Panics
    ///
    /// Panics if `tau` is not a positive finite number.
    pub fn generate_next_with_tau(&self, tau: f64) -> Result<RatingPeriod<T>>
    where
        T: Clone,
    {
        assert!(tau.is_finite() && tau > 0.0);

        let rating_system = &self.rating_system;

        #[cfg(feature = "rayon")]
        let accumulators = self.accumulators.par_iter();
        #[cfg(not(feature = "rayon"))]
        let accumulators = self.accumulators.iter();

        let ratings = accumulators
            .map(|acc| acc.rate_with_tau(rating_system, tau))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            subjects = self.players.len(),
            active = self.accumulators.iter().filter(|acc| acc.games() > 0).count(),
            "rated period"
        );

        let players = self
            .players
            .iter()
            .cloned()
            .zip(ratings)
            .map(|(player, rating)| player.with_rating(rating))
            .collect();

        Ok(RatingPeriod::fresh(
            self.rating_system.clone(),
            players,
            self.index.clone(),
        ))
    }

    fn fresh(
        rating_system: RatingSystem,
        players: Vec<Player<T>>,
        index: FxHashMap<T::Id, usize>,
    ) -> RatingPeriod<T> {
        let accumulators = players
            .iter()
            .map(|player| Accumulator::new(*player.rating()))
            .collect();
        RatingPeriod {
            rating_system,
            players,
            index,
            accumulators,
        }
    }

    /// Writes the rating of every player back to its seed.
    pub fn commit(&mut self) {
        for player in &mut self.players {
            player.commit();
        }
    }
}
