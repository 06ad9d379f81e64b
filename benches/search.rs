//! Benchmarks for move search.
//!
//! Run with: `cargo bench --bench search`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kalah::core::{GameConfig, KalahState, PlayerId};
use kalah::driver::{play_game, random_pair};
use kalah::search::{DepthSearch, SearchConfig};

/// Minimax against alpha-beta from the opening, by depth.
fn benchmark_search_depth(c: &mut Criterion) {
    let state = KalahState::standard_start(4);
    let legal = state.legal_moves(None);

    let mut group = c.benchmark_group("Search");
    for depth in [2u32, 4, 6] {
        group.bench_with_input(BenchmarkId::new("minimax", depth), &depth, |b, &depth| {
            let mut search = DepthSearch::new(SearchConfig::minimax(depth));
            b.iter(|| black_box(search.best_move(black_box(&state), &legal, PlayerId::ZERO)));
        });
        group.bench_with_input(BenchmarkId::new("alpha_beta", depth), &depth, |b, &depth| {
            let mut search = DepthSearch::new(SearchConfig::alpha_beta(depth));
            b.iter(|| black_box(search.best_move(black_box(&state), &legal, PlayerId::ZERO)));
        });
    }
    group.finish();
}

/// A whole random game, mostly the cost of the rules.
fn benchmark_random_game(c: &mut Criterion) {
    let config = GameConfig::default();
    c.bench_function("random_game", |b| {
        b.iter(|| {
            let (mut p0, mut p1) = random_pair(&config);
            black_box(play_game(config.clone(), &mut p0, &mut p1))
        });
    });
}

criterion_group!(benches, benchmark_search_depth, benchmark_random_game);
criterion_main!(benches);
