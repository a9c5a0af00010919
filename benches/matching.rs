//! Benchmarks for the stable matching engine.
//!
//! ## Expectations
//!
//! | Metric                  | Expectation               |
//! |-------------------------|---------------------------|
//! | Proposals per run       | at most n^2               |
//! | Random n=100 run        | well under a millisecond  |
//! | Identical-lists n run   | ~n^2/2 proposals          |
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- solve
//!
//! # Run with verbose output
//! cargo bench -- --verbose
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main,
    BatchSize, BenchmarkId, Criterion, Throughput,
};
use std::time::Duration;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use stable_match::{MatchingEngine, PreferenceTable};

// ============================================================================
// HELPER FUNCTIONS - Deterministic instance generation
// ============================================================================

/// Every agent ranks the opposite side in index order. All top choices
/// collide, so proposer i is rejected i times before settling.
fn identical_lists(n: usize) -> Vec<Vec<usize>> {
    (0..n).map(|_| (0..n).collect()).collect()
}

/// Agent i ranks opposite agent i first (rotated lists). Every first
/// proposal is accepted, giving the n-proposal floor.
fn mutual_top_lists(n: usize) -> Vec<Vec<usize>> {
    (0..n).map(|i| (i..n).chain(0..i).collect()).collect()
}

/// Seeded random permutation rows (same seed = same instance).
fn random_lists(n: usize, rng: &mut ChaCha8Rng) -> Vec<Vec<usize>> {
    (0..n)
        .map(|_| {
            let mut list: Vec<usize> = (0..n).collect();
            list.shuffle(rng);
            list
        })
        .collect()
}

fn engine_from(proposers: Vec<Vec<usize>>, reviewers: Vec<Vec<usize>>) -> MatchingEngine {
    MatchingEngine::new(
        PreferenceTable::new(proposers).expect("generated lists are permutations"),
        PreferenceTable::new(reviewers).expect("generated lists are permutations"),
    )
    .expect("sides are equal size")
}

fn random_engine(n: usize, seed: u64) -> MatchingEngine {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let proposers = random_lists(n, &mut rng);
    let reviewers = random_lists(n, &mut rng);
    engine_from(proposers, reviewers)
}

// ============================================================================
// BENCHMARK: Solve Latency
// ============================================================================
// One full deferred-acceptance run over a shared prebuilt engine

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");

    group.measurement_time(Duration::from_secs(10));

    for n in [4usize, 16, 64, 256] {
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("random", n), &n, |b, &n| {
            // Tables and priority index are built once; each iteration
            // allocates only the per-run state
            let engine = random_engine(n, 42);

            b.iter(|| black_box(engine.find_matching()));
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Preference Shape
// ============================================================================
// Same n, opposite ends of the proposal-count range

fn bench_preference_shape(c: &mut Criterion) {
    let mut group = c.benchmark_group("preference_shape");

    group.measurement_time(Duration::from_secs(5));

    // Floor: n proposals, nobody displaced
    group.bench_function("mutual_tops_64", |b| {
        let engine = engine_from(mutual_top_lists(64), mutual_top_lists(64));
        b.iter(|| black_box(engine.find_matching()));
    });

    // Contested: n(n+1)/2 proposals, every reviewer fought over
    group.bench_function("identical_lists_64", |b| {
        let engine = engine_from(identical_lists(64), identical_lists(64));
        b.iter(|| black_box(engine.find_matching()));
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Engine Construction
// ============================================================================
// Table validation plus priority index inversion, paid once per instance

fn bench_engine_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_build");

    group.measurement_time(Duration::from_secs(5));

    group.bench_function("tables_and_index_256", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let proposers = random_lists(256, &mut rng);
        let reviewers = random_lists(256, &mut rng);

        b.iter_batched(
            || (proposers.clone(), reviewers.clone()),
            |(proposers, reviewers)| black_box(engine_from(proposers, reviewers)),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Large Instance
// ============================================================================
// Scaling check well past interactive sizes

fn bench_large_instance(c: &mut Criterion) {
    let mut group = c.benchmark_group("large_instance");

    group.measurement_time(Duration::from_secs(10));
    group.sample_size(50);

    group.bench_function("random_1024", |b| {
        let engine = random_engine(1024, 99);
        b.iter(|| black_box(engine.find_matching()));
    });

    group.finish();
}

// ============================================================================
// CRITERION ENTRY POINT
// ============================================================================

criterion_group!(
    benches,
    bench_solve,
    bench_preference_shape,
    bench_engine_build,
    bench_large_instance
);

criterion_main!(benches);
