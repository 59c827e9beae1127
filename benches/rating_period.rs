//! Benchmarks for recording and resolving rating periods

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glicko2_rater::{RatingPeriod, RatingSeed, RatingSystem};

#[derive(Debug, Clone)]
struct BenchSeed {
    id: usize,
    rating: f64,
    deviation: f64,
    volatility: f64,
}

impl RatingSeed for BenchSeed {
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

fn seeds(n: usize) -> Vec<BenchSeed> {
    (0..n)
        .map(|id| BenchSeed {
            id,
            rating: 1200.0 + (id * 37 % 600) as f64,
            deviation: 50.0 + (id * 13 % 300) as f64,
            volatility: 0.06,
        })
        .collect()
}

fn bench_generate_next(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_next");

    for games in [100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(games), &games, |b, &games| {
            let players = 100;
            b.iter(|| {
                let mut period = RatingPeriod::from_seeds(RatingSystem::new(), seeds(players))
                    .expect("valid seeds");
                for i in 0..games {
                    let first = i % players;
                    let second = (i * 7 + 1) % players;
                    if first != second {
                        period
                            .game(&[first, second], &[1 + (i % 2) as u32, 1])
                            .expect("known players");
                    }
                }
                black_box(period.generate_next().expect("converges"))
            });
        });
    }

    group.finish();
}

fn bench_multi_way_game(c: &mut Criterion) {
    let mut period =
        RatingPeriod::from_seeds(RatingSystem::new(), seeds(8)).expect("valid seeds");
    let participants: Vec<usize> = (0..8).collect();
    let ranks: Vec<u32> = (1..=8).collect();

    c.bench_function("game_8_participants", |b| {
        b.iter(|| {
            period
                .game(black_box(&participants), black_box(&ranks))
                .expect("known players")
        })
    });
}

criterion_group!(benches, bench_generate_next, bench_multi_way_game);
criterion_main!(benches);
