//! The board: placed tiles, feature connectivity, and claims.
//!
//! A `Board` is one game session's exclusive state. It is never global:
//! construct one per game and pass it by reference. Cloning is O(1)
//! (persistent maps), so callers can probe hypothetical moves on a copy.

use im::OrdMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{ClaimError, PlacementError};
use crate::core::{Coord, PlayerId, ScoringConfig};
use crate::features::{FeatureSet, FeatureStats};
use crate::tiles::{FeatureKind, SegmentId, Tile};

/// Result of a successful placement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedTile {
    pub at: Coord,
    /// Ids assigned to the tile's segments, in segment order.
    pub segment_ids: SmallVec<[SegmentId; 4]>,
    /// Edge matches joined into feature sets (one `union` each).
    pub edge_matches: u32,
}

/// Tile grid plus City, Road and Field feature sets and the monastery
/// registry.
///
/// ## Example
///
/// ```
/// use meeple_core::board::Board;
/// use meeple_core::core::{PlayerId, Rotation};
/// use meeple_core::tiles::TileCatalog;
///
/// let catalog = TileCatalog::standard();
/// let mut board = Board::new();
///
/// assert!(board.place_tile(0, 0, catalog.instantiate("Starter", Rotation::R0).unwrap()));
///
/// // A city cap turned to face south closes the starter's city.
/// let cap = catalog.instantiate("City1_Fields", Rotation::R180).unwrap();
/// assert!(board.is_legal_move(0, 1, &cap));
/// assert!(board.place_tile(0, 1, cap));
///
/// assert!(board.place_meeple(0, 0, 0, PlayerId::new(0)));
/// let scored = board.get_completed_features();
/// assert_eq!(scored[0].points, 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Board {
    pub(super) grid: OrdMap<Coord, Tile>,
    pub(super) cities: FeatureSet,
    pub(super) roads: FeatureSet,
    pub(super) fields: FeatureSet,
    /// Monastery cells and the player whose meeple sits there.
    pub(super) monasteries: OrdMap<Coord, Option<PlayerId>>,
    next_id: u32,
    pub(super) config: ScoringConfig,
}

impl Board {
    /// Empty board with standard point values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty board with custom point values.
    #[must_use]
    pub fn with_config(config: ScoringConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    // === Queries ===

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Number of placed tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    #[must_use]
    pub fn is_occupied(&self, at: Coord) -> bool {
        self.grid.contains_key(&at)
    }

    #[must_use]
    pub fn tile(&self, at: Coord) -> Option<&Tile> {
        self.grid.get(&at)
    }

    /// Placed tiles in coordinate order.
    pub fn tiles(&self) -> impl Iterator<Item = (Coord, &Tile)> {
        self.grid.iter().map(|(at, tile)| (*at, tile))
    }

    /// Monastery cells with their current owner, in coordinate order.
    pub fn monasteries(&self) -> impl Iterator<Item = (Coord, Option<PlayerId>)> + '_ {
        self.monasteries.iter().map(|(at, owner)| (*at, *owner))
    }

    /// Feature set of a connected kind; `None` for monasteries.
    #[must_use]
    pub fn feature_set(&self, kind: FeatureKind) -> Option<&FeatureSet> {
        match kind {
            FeatureKind::City => Some(&self.cities),
            FeatureKind::Road => Some(&self.roads),
            FeatureKind::Field => Some(&self.fields),
            FeatureKind::Monastery => None,
        }
    }

    fn feature_set_mut(&mut self, kind: FeatureKind) -> Option<&mut FeatureSet> {
        match kind {
            FeatureKind::City => Some(&mut self.cities),
            FeatureKind::Road => Some(&mut self.roads),
            FeatureKind::Field => Some(&mut self.fields),
            FeatureKind::Monastery => None,
        }
    }

    /// Aggregate stats of the feature a placed segment belongs to.
    #[must_use]
    pub fn feature_stats(&self, at: Coord, segment_index: usize) -> Option<&FeatureStats> {
        let segment = self.tile(at)?.segment(segment_index)?;
        let id = segment.id()?;
        self.feature_set(segment.kind).map(|set| set.payload(id))
    }

    /// Occupied cells in the 3x3 block around `at`, `at` included.
    #[must_use]
    pub fn neighborhood_count(&self, at: Coord) -> u32 {
        at.neighborhood().filter(|c| self.is_occupied(*c)).count() as u32
    }

    /// Is the feature under a placed segment finished?
    ///
    /// Cities and roads are finished with no open edge left; monasteries
    /// once all eight surrounding cells are occupied. Fields never finish.
    #[must_use]
    pub fn is_completed(&self, x: i32, y: i32, segment_index: usize) -> bool {
        let at = Coord::new(x, y);
        let Some(segment) = self.tile(at).and_then(|t| t.segment(segment_index)) else {
            return false;
        };
        if segment.is_monastery() {
            return self.neighborhood_count(at) == 9;
        }
        match segment.kind {
            FeatureKind::City | FeatureKind::Road => self
                .feature_stats(at, segment_index)
                .is_some_and(FeatureStats::is_complete),
            FeatureKind::Field | FeatureKind::Monastery => false,
        }
    }

    // === Legality ===

    /// Check whether `tile` may go on `at`, explaining a rejection.
    ///
    /// The tile must be fresh: no segment ids, no owner tags. The first
    /// tile may go anywhere. Later tiles need at least one occupied
    /// neighbor, and every occupied neighbor must show the same feature
    /// kind on the shared edge. Neighbors past the `i32` limits count as
    /// empty cells.
    pub fn check_placement(&self, at: Coord, tile: &Tile) -> Result<(), PlacementError> {
        if tile.is_placed() || tile.segments().iter().any(|s| s.owner().is_some()) {
            return Err(PlacementError::AlreadyPlaced);
        }
        if self.is_occupied(at) {
            return Err(PlacementError::Occupied(at));
        }
        if self.grid.is_empty() {
            return Ok(());
        }

        let mut has_neighbor = false;
        for (side, neighbor_at) in at.neighbors() {
            let Some(neighbor) = self.grid.get(&neighbor_at) else {
                continue;
            };
            has_neighbor = true;

            let placed = tile.kind_at(side);
            let facing = neighbor.kind_at(side.opposite());
            if placed != facing {
                return Err(PlacementError::EdgeMismatch {
                    at,
                    side,
                    placed,
                    neighbor: facing,
                });
            }
        }

        if has_neighbor {
            Ok(())
        } else {
            Err(PlacementError::Isolated(at))
        }
    }

    /// Could `tile` be placed at `(x, y)`? Never mutates.
    #[must_use]
    pub fn is_legal_move(&self, x: i32, y: i32, tile: &Tile) -> bool {
        self.check_placement(Coord::new(x, y), tile).is_ok()
    }

    // === Placement ===

    fn alloc_segment_id(&mut self) -> SegmentId {
        self.next_id += 1;
        SegmentId(self.next_id)
    }

    /// Place `tile` at `at`, joining its segments to the neighbors' features.
    ///
    /// All-or-nothing: a rejected tile leaves the board untouched.
    pub fn try_place_tile(&mut self, at: Coord, mut tile: Tile) -> Result<PlacedTile, PlacementError> {
        self.check_placement(at, &tile)?;

        let mut segment_ids = SmallVec::new();
        for segment in tile.segments_mut() {
            let id = self.alloc_segment_id();
            segment.assign_id(id);
            segment_ids.push(id);

            let stats = FeatureStats::fragment(segment.sides.len(), segment.has_pennant);
            if let Some(set) = self.feature_set_mut(segment.kind) {
                set.make_set(id, stats);
            }
        }

        // Legality guarantees matching kinds on every occupied edge.
        let mut matches: SmallVec<[(FeatureKind, SegmentId, SegmentId); 4]> = SmallVec::new();
        for (side, neighbor_at) in at.neighbors() {
            let Some(neighbor) = self.grid.get(&neighbor_at) else {
                continue;
            };
            let (Some(mine), Some(theirs)) = (tile.segment_at(side), neighbor.segment_at(side.opposite())) else {
                continue;
            };
            if let (Some(a), Some(b)) = (mine.id(), theirs.id()) {
                if mine.kind == theirs.kind && mine.kind.is_connected() {
                    matches.push((mine.kind, a, b));
                }
            }
        }

        for &(kind, a, b) in &matches {
            if let Some(set) = self.feature_set_mut(kind) {
                set.union(a, b);
            }
        }

        if tile.has_monastery() {
            self.monasteries.insert(at, None);
        }
        self.grid.insert(at, tile);

        Ok(PlacedTile {
            at,
            segment_ids,
            edge_matches: matches.len() as u32,
        })
    }

    /// Place `tile` at `(x, y)` if legal. Returns whether it was placed.
    pub fn place_tile(&mut self, x: i32, y: i32, tile: Tile) -> bool {
        self.try_place_tile(Coord::new(x, y), tile).is_ok()
    }

    // === Claims ===

    /// Put `player`'s meeple on segment `segment_index` of the tile at `at`.
    ///
    /// A monastery is claimable while its cell has no owner. Any other
    /// segment is claimable only while its whole connected feature has no
    /// owner at all.
    pub fn try_place_meeple(
        &mut self,
        at: Coord,
        segment_index: usize,
        player: PlayerId,
    ) -> Result<(), ClaimError> {
        let tile = self.grid.get(&at).ok_or(ClaimError::EmptyCell(at))?;
        let segment = tile.segment(segment_index).ok_or(ClaimError::SegmentOutOfRange {
            at,
            index: segment_index,
            len: tile.segments().len(),
        })?;
        if let Some(owner) = segment.owner() {
            return Err(ClaimError::SegmentTagged {
                at,
                index: segment_index,
                owner,
            });
        }

        let kind = segment.kind;
        let id = segment.id();

        if segment.is_monastery() {
            if let Some(Some(owner)) = self.monasteries.get(&at) {
                return Err(ClaimError::MonasteryClaimed { at, owner: *owner });
            }
            self.monasteries.insert(at, Some(player));
        } else {
            let unclaimable = ClaimError::Unclaimable {
                at,
                index: segment_index,
            };
            let id = id.ok_or(unclaimable)?;
            let set = self.feature_set_mut(kind).ok_or(unclaimable)?;
            let stats = set.payload_mut(id);
            if stats.is_claimed() {
                return Err(ClaimError::FeatureClaimed {
                    at,
                    index: segment_index,
                });
            }
            stats.owners.add(player, 1);
        }

        if let Some(segment) = self.grid.get_mut(&at).and_then(|t| t.segment_mut(segment_index)) {
            segment.tag_owner(player);
        }
        Ok(())
    }

    /// Put `player`'s meeple on a segment if allowed. Returns whether it was placed.
    pub fn place_meeple(&mut self, x: i32, y: i32, segment_index: usize, player: PlayerId) -> bool {
        self.try_place_meeple(Coord::new(x, y), segment_index, player)
            .is_ok()
    }
}
