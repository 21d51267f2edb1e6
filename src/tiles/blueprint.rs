//! Tile blueprints - the read-only shapes a catalog hands out.
//!
//! A blueprint never changes after construction. Every game gets its own
//! `Tile` instances through `instantiate`, so rotating or claiming a tile in
//! one game cannot leak into another game or back into the catalog.

use serde::{Deserialize, Serialize};

use super::segment::SegmentSpec;
use super::tile::Tile;
use crate::core::Rotation;

/// Immutable tile shape.
///
/// ## Example
///
/// ```
/// use meeple_core::core::{Rotation, Side};
/// use meeple_core::tiles::{FeatureKind, SegmentSpec, TileBlueprint};
///
/// let curve = TileBlueprint::new("RoadCurve", [
///     SegmentSpec::road(&[Side::South, Side::West]),
///     SegmentSpec::field(&[Side::North, Side::East]),
/// ]);
///
/// let tile = curve.instantiate(Rotation::R90);
/// assert_eq!(tile.kind_at(Side::North), FeatureKind::Road);
/// assert_eq!(curve.segments()[0].sides.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileBlueprint {
    name: String,
    segments: Vec<SegmentSpec>,
}

impl TileBlueprint {
    #[must_use]
    pub fn new(name: impl Into<String>, segments: impl IntoIterator<Item = SegmentSpec>) -> Self {
        Self {
            name: name.into(),
            segments: segments.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn segments(&self) -> &[SegmentSpec] {
        &self.segments
    }

    #[must_use]
    pub fn has_monastery(&self) -> bool {
        self.segments.iter().any(|s| s.is_monastery)
    }

    /// Build a fresh tile instance, already rotated.
    #[must_use]
    pub fn instantiate(&self, rotation: Rotation) -> Tile {
        Tile::new(self.name.clone(), self.segments.iter().copied()).rotated(rotation)
    }
}
