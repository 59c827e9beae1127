use glicko2_rater::{Error, Rating, RatingPeriod, RatingSeed, RatingSystem};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Member {
    id: u32,
    rating: f64,
    deviation: f64,
    volatility: f64,
}

impl Member {
    fn new(id: u32, rating: f64, deviation: f64) -> Member {
        Member {
            id,
            rating,
            deviation,
            volatility: 0.06,
        }
    }
}

impl RatingSeed for Member {
    type Id = u32;

    fn id(&self) -> u32 {
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

fn members() -> Vec<Member> {
    vec![
        Member::new(0, 1500.0, 200.0),
        Member::new(1, 1400.0, 30.0),
        Member::new(2, 1550.0, 100.0),
        Member::new(3, 1700.0, 300.0),
    ]
}

#[test]
fn test_glickman_example() {
    let mut period = RatingPeriod::from_seeds(RatingSystem::new(), members()).unwrap();
    period.game(&[0, 1], &[1, 2]).unwrap();
    period.game(&[0, 2], &[2, 1]).unwrap();
    period.game(&[0, 3], &[2, 1]).unwrap();

    let mut next = period.generate_next_with_tau(0.5).unwrap();
    next.commit();

    let player = next.player(&0).unwrap().seed();
    assert!((player.rating - 1464.06).abs() < 0.01);
    assert!((player.deviation - 151.52).abs() < 0.01);
    assert!((player.volatility - 0.05999).abs() < 0.00001);
}

#[test]
fn test_consecutive_periods() {
    let mut period = RatingPeriod::from_seeds(RatingSystem::new(), members()).unwrap();
    for _ in 0..10 {
        period.game(&[0, 1, 2, 3], &[1, 2, 3, 4]).unwrap();
        period = period.generate_next().unwrap();
    }
    let rating = |id| period.player(&id).unwrap().external_rating();
    assert!(rating(0).rating > rating(1).rating);
    assert!(rating(1).rating > rating(2).rating);
    assert!(rating(2).rating > rating(3).rating);
    assert!(rating(3).deviation < 300.0);
}

#[test]
fn test_inactive_deviation_is_capped() {
    let mut period = RatingPeriod::from_seeds(
        RatingSystem::builder().default_volatility(0.06).build(),
        [Member::new(0, 1500.0, 340.0)],
    )
    .unwrap();
    for _ in 0..100 {
        period = period.generate_next().unwrap();
    }
    let rating = period.player(&0).unwrap().external_rating();
    assert!((rating.deviation - 350.0).abs() < 1e-9);
    assert!((rating.rating - 1500.0).abs() < 1e-9);
}

#[test]
fn test_duplicate_identity() {
    let mut seeds = members();
    seeds.push(Member::new(2, 1200.0, 50.0));
    assert!(matches!(
        RatingPeriod::from_seeds(RatingSystem::new(), seeds),
        Err(Error::DuplicateSubject(_))
    ));
}

#[test]
fn test_invalid_seed() {
    assert!(matches!(
        RatingPeriod::from_seeds(RatingSystem::new(), [Member::new(0, 1500.0, -1.0)]),
        Err(Error::InvalidRating(_))
    ));
}

fn game_strategy() -> impl Strategy<Value = (Vec<u32>, Vec<u32>)> {
    proptest::sample::subsequence(vec![0u32, 1, 2, 3], 2..=4)
        .prop_shuffle()
        .prop_flat_map(|participants| {
            let n = participants.len();
            (Just(participants), proptest::collection::vec(1u32..=4, n))
        })
}

proptest! {
    #[test]
    fn test_scale_round_trip(rating in -5000.0f64..5000.0, deviation in 0.1f64..1000.0) {
        let (back_rating, back_deviation) = Rating::from_external(rating, deviation, 0.06)
            .unwrap()
            .to_external();
        prop_assert!((back_rating - rating).abs() < 1e-9);
        prop_assert!((back_deviation - deviation).abs() < 1e-9);
    }

    #[test]
    fn test_order_insensitive(
        (games, shuffled) in proptest::collection::vec(game_strategy(), 1..20)
            .prop_flat_map(|games| (Just(games.clone()), Just(games).prop_shuffle()))
    ) {
        let mut first = RatingPeriod::from_seeds(RatingSystem::new(), members()).unwrap();
        for (participants, ranks) in &games {
            first.game(participants, ranks).unwrap();
        }
        let mut second = RatingPeriod::from_seeds(RatingSystem::new(), members()).unwrap();
        for (participants, ranks) in &shuffled {
            second.game(participants, ranks).unwrap();
        }

        let first = first.generate_next().unwrap();
        let second = second.generate_next().unwrap();
        for (a, b) in first.players().iter().zip(second.players()) {
            prop_assert!((a.rating().mean() - b.rating().mean()).abs() < 1e-7);
            prop_assert!((a.rating().deviation() - b.rating().deviation()).abs() < 1e-7);
            prop_assert!((a.rating().volatility() - b.rating().volatility()).abs() < 1e-7);
        }
    }
}
