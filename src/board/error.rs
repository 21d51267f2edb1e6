//! Reasons a placement or claim was rejected.
//!
//! The boolean board API (`place_tile`, `place_meeple`, ...) drops these;
//! the `try_*` variants return them so callers can report why a move failed.
//! A rejected operation never mutates the board.

use thiserror::Error;

use crate::core::{Coord, PlayerId, Side};
use crate::tiles::FeatureKind;

/// Why a tile may not go on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("tile already carries segment ids or claims from an earlier placement")]
    AlreadyPlaced,

    #[error("cell {0} is already occupied")]
    Occupied(Coord),

    #[error("cell {0} has no occupied neighbor")]
    Isolated(Coord),

    #[error("{side:?} edge of {at} shows {placed} but the neighbor shows {neighbor}")]
    EdgeMismatch {
        at: Coord,
        side: Side,
        placed: FeatureKind,
        neighbor: FeatureKind,
    },
}

/// Why a meeple may not go on a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ClaimError {
    #[error("no tile at {0}")]
    EmptyCell(Coord),

    #[error("tile at {at} has {len} segments, index {index} is out of range")]
    SegmentOutOfRange { at: Coord, index: usize, len: usize },

    #[error("segment {index} at {at} already holds a meeple of {owner}")]
    SegmentTagged { at: Coord, index: usize, owner: PlayerId },

    #[error("monastery at {at} is already claimed by {owner}")]
    MonasteryClaimed { at: Coord, owner: PlayerId },

    #[error("feature of segment {index} at {at} is already claimed")]
    FeatureClaimed { at: Coord, index: usize },

    #[error("segment {index} at {at} is not part of a claimable feature")]
    Unclaimable { at: Coord, index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_messages() {
        assert_eq!(
            PlacementError::Occupied(Coord::new(1, 2)).to_string(),
            "cell (1, 2) is already occupied"
        );
        assert_eq!(
            PlacementError::EdgeMismatch {
                at: Coord::new(0, 1),
                side: Side::South,
                placed: FeatureKind::Road,
                neighbor: FeatureKind::City,
            }
            .to_string(),
            "South edge of (0, 1) shows Road but the neighbor shows City"
        );
    }

    #[test]
    fn test_claim_messages() {
        assert_eq!(
            ClaimError::MonasteryClaimed {
                at: Coord::ORIGIN,
                owner: PlayerId::new(1)
            }
            .to_string(),
            "monastery at (0, 0) is already claimed by Player 1"
        );
    }
}
