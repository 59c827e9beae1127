//! Glicko-2 ratings, updated in bulk at the end of rating periods.
//!
//! Subjects are seeded from any object that implements [`RatingSeed`].
//! Games with any number of participants are recorded in a
//! [`RatingPeriod`], and [`RatingPeriod::generate_next()`] produces a new
//! period with updated ratings. Ratings are written back to the seeds only on
//! an explicit [`RatingPeriod::commit()`] or [`Player::commit()`].
//!
//! See [Glickman's paper](http://www.glicko.net/glicko/glicko2.pdf) for the
//! underlying model.
//!
//! # Example
//!
//! ```
//! use glicko2_rater::{RatingPeriod, RatingSeed, RatingSystem};
//!
//! #[derive(Debug, Clone)]
//! struct Member {
//!     name: &'static str,
//!     rating: f64,
//!     deviation: f64,
//!     volatility: f64,
//! }
//!
//! impl RatingSeed for Member {
//!     type Id = &'static str;
//!
//!     fn id(&self) -> &'static str { self.name }
//!     fn rating(&self) -> f64 { self.rating }
//!     fn deviation(&self) -> f64 { self.deviation }
//!     fn volatility(&self) -> f64 { self.volatility }
//!     fn set_rating(&mut self, rating: f64) { self.rating = rating }
//!     fn set_deviation(&mut self, deviation: f64) { self.deviation = deviation }
//!     fn set_volatility(&mut self, volatility: f64) { self.volatility = volatility }
//! }
//!
//! let mut period = RatingPeriod::from_seeds(
//!     RatingSystem::new(),
//!     [
//!         Member { name: "alice", rating: 1500.0, deviation: 200.0, volatility: 0.06 },
//!         Member { name: "bob", rating: 1400.0, deviation: 30.0, volatility: 0.06 },
//!     ],
//! )?;
//!
//! period.game(&["alice", "bob"], &[1, 2])?;
//!
//! let next = period.generate_next()?;
//! assert!(next.player(&"alice").unwrap().external_rating().rating > 1500.0);
//! # Ok::<_, glicko2_rater::Error>(())
//! ```

mod accumulator;
mod error;
mod player;
mod rating;
mod rating_period;
mod rating_system;
mod root_finder;
mod scale;
mod score;

pub use accumulator::Accumulator;
pub use error::{Error, Result};
pub use player::{Player, RatingSeed};
pub use rating::{InvalidRating, Rating};
pub use rating_period::RatingPeriod;
pub use rating_system::{RatingSystem, RatingSystemBuilder};
pub use root_finder::{ConvergenceError, IllinoisSolver};
pub use scale::{ExternalRating, Scale, GLICKO2_GRADIENT, GLICKO2_INTERCEPT};
pub use score::Score;
