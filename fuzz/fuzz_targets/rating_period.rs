#![no_main]

use arbitrary::Arbitrary;
use glicko2_rater::{RatingPeriod, RatingSeed, RatingSystem};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug, Clone)]
struct ArbitrarySeed {
    rating: f64,
    deviation: f64,
    volatility: f64,
}

#[derive(Debug, Clone)]
struct Seed {
    id: usize,
    rating: f64,
    deviation: f64,
    volatility: f64,
}

impl Seed {
    fn clamped(id: usize, seed: ArbitrarySeed) -> Option<Seed> {
        if seed.rating.is_nan() || seed.deviation.is_nan() || seed.volatility.is_nan() {
            None
        } else {
            Some(Seed {
                id,
                rating: seed.rating.clamp(-10000.0, 10000.0),
                deviation: seed.deviation.clamp(1.0, 1000.0),
                volatility: seed.volatility.clamp(0.001, 1.0),
            })
        }
    }
}

impl RatingSeed for Seed {
    type Id = usize;

    fn id(&self) -> usize {
        self.id
    }

    fn rating(&self) -> f64 {
        self.rating
    }

    fn deviation(&self) -> f64 {
        self.deviation
    }

    fn volatility(&self) -> f64 {
        self.volatility
    }

    fn set_rating(&mut self, rating: f64) {
        self.rating = rating;
    }

    fn set_deviation(&mut self, deviation: f64) {
        self.deviation = deviation;
    }

    fn set_volatility(&mut self, volatility: f64) {
        self.volatility = volatility;
    }
}

#[derive(Arbitrary, Debug)]
struct Game {
    participants: Vec<u8>,
    ranks: Vec<u8>,
}

#[derive(Arbitrary, Debug)]
struct Input {
    seeds: Vec<ArbitrarySeed>,
    games: Vec<Game>,
    tau: f64,
}

fuzz_target!(|input: Input| {
    let Some(seeds) = input
        .seeds
        .into_iter()
        .take(16)
        .enumerate()
        .map(|(id, seed)| Seed::clamped(id, seed))
        .collect::<Option<Vec<_>>>()
    else {
        return;
    };
    if input.tau.is_nan() {
        return;
    }

    let mut period = RatingPeriod::from_seeds(RatingSystem::new(), seeds).unwrap();
    for game in input.games {
        let participants: Vec<usize> = game.participants.iter().map(|&p| usize::from(p)).collect();
        let ranks: Vec<u32> = game.ranks.iter().map(|&r| u32::from(r)).collect();
        // Unknown or repeated participants are rejected, never recorded.
        let _ = period.game(&participants, &ranks);
    }

    let mut next = period
        .generate_next_with_tau(input.tau.clamp(0.01, 10.0))
        .expect("clamped inputs converge");
    next.commit();
    for player in next.players() {
        let seed = player.seed();
        assert!(!seed.rating.is_nan());
        assert!(seed.deviation > 0.0);
        assert!(seed.volatility > 0.0);
    }
});
