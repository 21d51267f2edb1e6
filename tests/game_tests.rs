//! Full-game smoke tests: deck, placement enumeration, harvests, tally.

use meeple_core::board::Board;
use meeple_core::core::{Coord, PlayerId, PlayerMap};
use meeple_core::scoring::ScoreSheet;
use meeple_core::tiles::{Deck, FeatureKind, TileCatalog};

const MEEPLES: u32 = 7;

struct Outcome {
    board: Board,
    sheet: ScoreSheet,
    supply: PlayerMap<u32>,
    skipped: usize,
}

/// Play a greedy game: first legal placement, meeple on the first
/// claimable segment while supply lasts.
fn play(seed: u64, player_count: usize) -> Outcome {
    let catalog = TileCatalog::standard();
    let mut deck = Deck::shuffled(&catalog, seed);
    let mut board = Board::new();
    let mut sheet = ScoreSheet::for_config(player_count, board.config());
    let mut supply = PlayerMap::with_value(player_count, MEEPLES);
    let mut skipped = 0;

    let starter = deck.take_starter().unwrap();
    assert!(board.place_tile(0, 0, starter));

    let mut turn = 0;
    while let Some(tile) = deck.draw() {
        let player = PlayerId::new((turn % player_count) as u8);
        turn += 1;

        let blueprint = catalog.lookup(tile.name()).unwrap();
        let Some(placement) = board.legal_placements(blueprint).into_iter().next() else {
            skipped += 1;
            continue;
        };

        let segments = tile.segments().len();
        let at: Coord = placement.at;
        assert!(board.place_tile(at.x, at.y, tile.rotated(placement.rotation)));

        if supply[player] > 0 && (0..segments).any(|i| board.place_meeple(at.x, at.y, i, player)) {
            supply[player] -= 1;
        }

        for event in board.get_completed_features() {
            sheet.record(&event).unwrap();
            for (owner, count) in event.owners.iter() {
                supply[owner] += count;
            }
        }
    }

    sheet.record_all(&board.calculate_final_scores()).unwrap();
    Outcome {
        board,
        sheet,
        supply,
        skipped,
    }
}

#[test]
fn test_full_game_places_whole_deck() {
    let outcome = play(42, 2);

    assert_eq!(outcome.board.len() + outcome.skipped, TileCatalog::standard().total_tiles());
    assert!(outcome.board.len() > 1);

    let stats = outcome.board.stats();
    assert_eq!(stats.tiles, outcome.board.len());
    assert!(stats.monasteries <= 6);
}

#[test]
fn test_full_game_is_deterministic() {
    let a = play(7, 3);
    let b = play(7, 3);

    assert_eq!(a.board.render_ascii(), b.board.render_ascii());
    assert_eq!(a.sheet, b.sheet);
    assert_eq!(a.skipped, b.skipped);
}

#[test]
fn test_meeple_supply_is_conserved() {
    let outcome = play(1234, 4);
    let board = &outcome.board;

    // Each meeple is in supply or still counted as a claim on the board.
    for player in PlayerId::all(4) {
        let on_features: u32 = FeatureKind::CONNECTED
            .iter()
            .filter_map(|kind| board.feature_set(*kind))
            .flat_map(|set| set.roots())
            .map(|(_, stats)| stats.owners.count(player))
            .sum();
        let on_monasteries = board.monasteries().filter(|(_, owner)| *owner == Some(player)).count() as u32;

        assert_eq!(outcome.supply[player] + on_features + on_monasteries, MEEPLES);
    }
}

#[test]
fn test_open_edges_never_negative_after_game() {
    let outcome = play(99, 2);

    for kind in FeatureKind::CONNECTED {
        let set = outcome.board.feature_set(kind).unwrap();
        assert!(set.roots().all(|(_, stats)| stats.open_edges >= 0));
    }
}
