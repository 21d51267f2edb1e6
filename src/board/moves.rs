//! Enumeration of legal tile placements.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::state::Board;
use crate::core::{Coord, Rotation};
use crate::tiles::TileBlueprint;

/// A cell and rotation at which a blueprint may be placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub at: Coord,
    pub rotation: Rotation,
}

impl Board {
    /// Empty cells 4-adjacent to a placed tile, in coordinate order.
    ///
    /// An empty board has a single candidate, the origin.
    #[must_use]
    pub fn frontier(&self) -> Vec<Coord> {
        if self.is_empty() {
            return vec![Coord::ORIGIN];
        }

        let cells: BTreeSet<Coord> = self
            .grid
            .keys()
            .flat_map(|at| at.neighbors().map(|(_, c)| c))
            .filter(|c| !self.is_occupied(*c))
            .collect();
        cells.into_iter().collect()
    }

    /// Every `(cell, rotation)` at which `blueprint` could be placed now.
    ///
    /// Rotations that leave the tile looking the same are still listed
    /// separately; the board does not pick among them.
    #[must_use]
    pub fn legal_placements(&self, blueprint: &TileBlueprint) -> Vec<Placement> {
        let candidates: Vec<_> = Rotation::ALL
            .iter()
            .map(|&rotation| (rotation, blueprint.instantiate(rotation)))
            .collect();

        let mut placements = Vec::new();
        for at in self.frontier() {
            for (rotation, tile) in &candidates {
                if self.check_placement(at, tile).is_ok() {
                    placements.push(Placement {
                        at,
                        rotation: *rotation,
                    });
                }
            }
        }
        placements
    }

    /// Can `blueprint` go anywhere at all? Stops at the first hit.
    #[must_use]
    pub fn has_legal_placement(&self, blueprint: &TileBlueprint) -> bool {
        let candidates: Vec<_> = Rotation::ALL.iter().map(|&r| blueprint.instantiate(r)).collect();
        self.frontier()
            .into_iter()
            .any(|at| candidates.iter().any(|tile| self.check_placement(at, tile).is_ok()))
    }
}
