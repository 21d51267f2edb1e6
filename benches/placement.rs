//! Benchmarks for the placement hot path.
//!
//! Agents probe many hypothetical moves per turn, so legality checks,
//! placement enumeration and board clones dominate.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use meeple_core::board::Board;
use meeple_core::tiles::{Deck, TileCatalog};

/// Board after greedily placing `turns` tiles from a seeded deck.
fn midgame(catalog: &TileCatalog, turns: usize) -> Board {
    let mut deck = Deck::shuffled(catalog, 42);
    let mut board = Board::new();
    if let Some(starter) = deck.take_starter() {
        board.place_tile(0, 0, starter);
    }

    for _ in 0..turns {
        let Some(tile) = deck.draw() else { break };
        let Some(blueprint) = catalog.get(tile.name()) else { continue };
        if let Some(p) = board.legal_placements(blueprint).into_iter().next() {
            board.place_tile(p.at.x, p.at.y, tile.rotated(p.rotation));
        }
    }
    board
}

fn bench_full_game(c: &mut Criterion) {
    let catalog = TileCatalog::standard();

    c.bench_function("greedy_full_game", |b| {
        b.iter(|| black_box(midgame(black_box(&catalog), 80)));
    });
}

fn bench_legal_placements(c: &mut Criterion) {
    let catalog = TileCatalog::standard();
    let board = midgame(&catalog, 40);
    let blueprint = catalog.get("City1_RoadCurve").map(Clone::clone);

    c.bench_function("legal_placements_midgame", |b| {
        b.iter(|| {
            if let Some(blueprint) = &blueprint {
                black_box(board.legal_placements(black_box(blueprint)));
            }
        });
    });
}

fn bench_clone_and_place(c: &mut Criterion) {
    let catalog = TileCatalog::standard();
    let board = midgame(&catalog, 40);
    let blueprint = catalog.get("RoadStraight").map(Clone::clone);
    let placement = blueprint
        .as_ref()
        .and_then(|bp| board.legal_placements(bp).into_iter().next());

    c.bench_function("clone_and_place_midgame", |b| {
        b.iter(|| {
            let mut probe = board.clone();
            if let (Some(bp), Some(p)) = (&blueprint, placement) {
                probe.place_tile(p.at.x, p.at.y, bp.instantiate(p.rotation));
            }
            black_box(probe.get_completed_features())
        });
    });
}

fn bench_final_scores(c: &mut Criterion) {
    let catalog = TileCatalog::standard();
    let board = midgame(&catalog, 80);

    c.bench_function("final_scores_full_board", |b| {
        b.iter(|| black_box(board.calculate_final_scores()));
    });
}

criterion_group!(
    benches,
    bench_full_game,
    bench_legal_placements,
    bench_clone_and_place,
    bench_final_scores
);
criterion_main!(benches);
