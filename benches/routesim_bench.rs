//! Criterion benchmarks for route generation and the scoring strategies.
//!
//! Uses the default synthetic network so results measure pure engine
//! overhead.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use routesim::sim::{RouteGenerator, SimConfig};
use routesim::strategy::{FuzzyRanking, StochasticSearch, WeightedRanking};

fn bench_generation(c: &mut Criterion) {
    let generator = RouteGenerator::new(SimConfig::default());
    let mut group = c.benchmark_group("generation");

    for count in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("routes", count), &count, |b, &count| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| black_box(generator.routes("A", "J", count, &mut rng)));
        });
    }

    group.finish();
}

fn bench_strategies(c: &mut Criterion) {
    let generator = RouteGenerator::new(SimConfig::default());
    let mut rng = StdRng::seed_from_u64(42);
    let routes = generator.routes("A", "J", 100, &mut rng);

    let mut group = c.benchmark_group("strategies");

    group.bench_function("weighted_ranking_100", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        let ranking = WeightedRanking::new(&mut rng);
        b.iter(|| black_box(ranking.rank_routes(&routes)));
    });

    group.bench_function("fuzzy_ranking_100", |b| {
        let mut rng = StdRng::seed_from_u64(2);
        b.iter(|| black_box(FuzzyRanking::new().rank_routes(&routes, &mut rng)));
    });

    for iterations in [50, 500] {
        group.bench_with_input(
            BenchmarkId::new("stochastic_search", iterations),
            &iterations,
            |b, &iterations| {
                let mut rng = StdRng::seed_from_u64(3);
                let search = StochasticSearch::new(iterations);
                b.iter(|| black_box(search.optimize(&routes, &mut rng)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_generation, bench_strategies);
criterion_main!(benches);
