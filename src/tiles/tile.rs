//! Tile instances - one physical tile in one game.
//!
//! A `Tile` is built from a read-only `TileBlueprint` and is never shared
//! between games: rotating it or claiming one of its segments only affects
//! this instance. Once placed, the tile belongs to the board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::segment::{FeatureKind, Segment, SegmentSpec};
use crate::core::{Rotation, Side};

/// A tile instance: name, ordered segments, and current rotation.
///
/// ## Example
///
/// ```
/// use meeple_core::core::{Rotation, Side};
/// use meeple_core::tiles::{FeatureKind, SegmentSpec, Tile};
///
/// let tile = Tile::new("City1_Fields", [
///     SegmentSpec::city(&[Side::North]),
///     SegmentSpec::field(&[Side::East, Side::South, Side::West]),
/// ])
/// .rotated(Rotation::R180);
///
/// assert_eq!(tile.kind_at(Side::South), FeatureKind::City);
/// assert_eq!(tile.kind_at(Side::North), FeatureKind::Field);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    name: String,
    /// SmallVec covers the common 1-4 segment tiles without heap allocation.
    segments: SmallVec<[Segment; 4]>,
    rotation: Rotation,
}

impl Tile {
    /// Create an unrotated tile from segment shapes.
    #[must_use]
    pub fn new(name: impl Into<String>, segments: impl IntoIterator<Item = SegmentSpec>) -> Self {
        Self {
            name: name.into(),
            segments: segments.into_iter().map(Segment::from_spec).collect(),
            rotation: Rotation::R0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub(crate) fn segment_mut(&mut self, index: usize) -> Option<&mut Segment> {
        self.segments.get_mut(index)
    }

    pub(crate) fn segments_mut(&mut self) -> &mut [Segment] {
        &mut self.segments
    }

    /// Rotate clockwise by `quarter_turns`, advancing every segment's sides.
    pub fn rotate(&mut self, quarter_turns: u8) {
        self.rotation = self.rotation.advanced(quarter_turns);
        for segment in &mut self.segments {
            segment.rotate(quarter_turns);
        }
    }

    /// This tile rotated clockwise by `rotation`.
    #[must_use]
    pub fn rotated(mut self, rotation: Rotation) -> Self {
        self.rotate(rotation.quarter_turns());
        self
    }

    /// Index of the first segment touching `side`.
    #[must_use]
    pub fn segment_index_at(&self, side: Side) -> Option<usize> {
        self.segments.iter().position(|s| s.sides.contains(side))
    }

    /// First segment touching `side`.
    #[must_use]
    pub fn segment_at(&self, side: Side) -> Option<&Segment> {
        self.segments.iter().find(|s| s.sides.contains(side))
    }

    /// Feature kind showing on `side`.
    ///
    /// Edges no segment claims are plain field.
    #[must_use]
    pub fn kind_at(&self, side: Side) -> FeatureKind {
        self.segment_at(side).map_or(FeatureKind::Field, |s| s.kind)
    }

    /// Does the tile hold a cloister?
    #[must_use]
    pub fn has_monastery(&self) -> bool {
        self.segments.iter().any(Segment::is_monastery)
    }

    /// Has any segment been assigned a board id?
    #[must_use]
    pub fn is_placed(&self) -> bool {
        self.segments.iter().any(|s| s.id().is_some())
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({}, rotation={})", self.name, self.rotation)
    }
}
