//! Draw pile built from a catalog.

use super::catalog::{TileCatalog, STARTER};
use super::tile::Tile;
use crate::core::{GameRng, Rotation};

/// A shuffled stack of tile instances.
///
/// Every copy listed in the catalog becomes its own `Tile`. The starter
/// tile is held apart so the caller can seed the origin with it.
///
/// ```
/// use meeple_core::tiles::{Deck, TileCatalog};
///
/// let catalog = TileCatalog::standard();
/// let mut deck = Deck::shuffled(&catalog, 42);
///
/// assert!(deck.take_starter().is_some());
/// assert_eq!(deck.len(), catalog.total_tiles() - 1);
/// assert!(deck.draw().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    starter: Option<Tile>,
    /// Top of the pile is the end of the vec.
    tiles: Vec<Tile>,
}

impl Deck {
    /// Instantiate every tile in `catalog` and shuffle with `seed`.
    #[must_use]
    pub fn shuffled(catalog: &TileCatalog, seed: u64) -> Self {
        let mut starter = None;
        let mut tiles = Vec::with_capacity(catalog.total_tiles());

        for entry in catalog.iter() {
            for _ in 0..entry.count {
                let tile = entry.blueprint.instantiate(Rotation::R0);
                if starter.is_none() && entry.blueprint.name() == STARTER {
                    starter = Some(tile);
                } else {
                    tiles.push(tile);
                }
            }
        }

        GameRng::new(seed).shuffle(&mut tiles);
        Self { starter, tiles }
    }

    /// Take the starter tile, if the catalog had one and it was not taken yet.
    pub fn take_starter(&mut self) -> Option<Tile> {
        self.starter.take()
    }

    /// Draw the top tile.
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    /// Look at the top tile without drawing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Tile> {
        self.tiles.last()
    }

    /// Tiles left in the pile (the starter is not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
