//! Tile segments: the feature fragments a tile is made of.
//!
//! `SegmentSpec` is the immutable shape of a fragment as printed on a tile
//! blueprint. `Segment` is the same fragment on a tile instance in a game:
//! it additionally carries the permanent id assigned at placement and the
//! local claim tag.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Side, SideSet};

/// Kind of feature a segment belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    City,
    Road,
    Field,
    Monastery,
}

impl FeatureKind {
    /// Kinds whose fragments join across tile edges.
    pub const CONNECTED: [FeatureKind; 3] = [FeatureKind::City, FeatureKind::Road, FeatureKind::Field];

    /// Does this kind join across tile edges (has its own feature set)?
    #[must_use]
    pub const fn is_connected(self) -> bool {
        !matches!(self, FeatureKind::Monastery)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            FeatureKind::City => "City",
            FeatureKind::Road => "Road",
            FeatureKind::Field => "Field",
            FeatureKind::Monastery => "Monastery",
        }
    }
}

impl std::fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Permanent identifier of a placed segment.
///
/// Allocated from a monotonic per-board counter; never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SegmentId(pub u32);

impl SegmentId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SegmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "seg_{}", self.0)
    }
}

/// Shape of a segment on a blueprint.
///
/// ## Example
///
/// ```
/// use meeple_core::core::Side;
/// use meeple_core::tiles::{FeatureKind, SegmentSpec};
///
/// let city = SegmentSpec::city(&[Side::North, Side::East]).with_pennant();
/// assert_eq!(city.kind, FeatureKind::City);
/// assert_eq!(city.sides.len(), 2);
/// assert!(city.has_pennant);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SegmentSpec {
    pub kind: FeatureKind,
    /// Tile edges the fragment touches (0-4).
    pub sides: SideSet,
    pub has_pennant: bool,
    pub is_monastery: bool,
}

impl SegmentSpec {
    #[must_use]
    pub fn new(kind: FeatureKind, sides: &[Side]) -> Self {
        Self {
            kind,
            sides: SideSet::from_sides(sides),
            has_pennant: false,
            is_monastery: kind == FeatureKind::Monastery,
        }
    }

    #[must_use]
    pub fn city(sides: &[Side]) -> Self {
        Self::new(FeatureKind::City, sides)
    }

    #[must_use]
    pub fn road(sides: &[Side]) -> Self {
        Self::new(FeatureKind::Road, sides)
    }

    #[must_use]
    pub fn field(sides: &[Side]) -> Self {
        Self::new(FeatureKind::Field, sides)
    }

    /// A cloister in the middle of the tile, touching no edge.
    #[must_use]
    pub fn monastery() -> Self {
        Self::new(FeatureKind::Monastery, &[])
    }

    #[must_use]
    pub fn with_pennant(mut self) -> Self {
        self.has_pennant = true;
        self
    }
}

/// A segment on a tile instance.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub kind: FeatureKind,
    pub sides: SideSet,
    pub has_pennant: bool,
    pub is_monastery: bool,
    id: Option<SegmentId>,
    owner: Option<PlayerId>,
}

impl Segment {
    /// Fresh, unplaced segment of the given shape.
    #[must_use]
    pub fn from_spec(spec: SegmentSpec) -> Self {
        Self {
            kind: spec.kind,
            sides: spec.sides,
            has_pennant: spec.has_pennant,
            is_monastery: spec.is_monastery,
            id: None,
            owner: None,
        }
    }

    /// Permanent id, `None` until the tile is placed.
    #[must_use]
    pub fn id(&self) -> Option<SegmentId> {
        self.id
    }

    /// Player whose meeple stands on this very segment.
    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// Is this a cloister (by kind or by flag)?
    #[must_use]
    pub fn is_monastery(&self) -> bool {
        self.is_monastery || self.kind == FeatureKind::Monastery
    }

    #[must_use]
    pub fn pennants(&self) -> u32 {
        u32::from(self.has_pennant)
    }

    /// Assign the permanent id.
    ///
    /// Panics if an id was already assigned: ids never change.
    pub(crate) fn assign_id(&mut self, id: SegmentId) {
        assert!(self.id.is_none(), "Segment already has id {:?}, refusing {}", self.id, id);
        self.id = Some(id);
    }

    pub(crate) fn tag_owner(&mut self, player: PlayerId) {
        self.owner = Some(player);
    }

    pub(crate) fn rotate(&mut self, quarter_turns: u8) {
        self.sides = self.sides.rotated(quarter_turns);
    }
}

impl From<SegmentSpec> for Segment {
    fn from(spec: SegmentSpec) -> Self {
        Self::from_spec(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_kind_connected() {
        assert!(FeatureKind::City.is_connected());
        assert!(FeatureKind::Road.is_connected());
        assert!(FeatureKind::Field.is_connected());
        assert!(!FeatureKind::Monastery.is_connected());
        assert_eq!(format!("{}", FeatureKind::Road), "Road");
    }

    #[test]
    fn test_segment_id_display() {
        assert_eq!(format!("{}", SegmentId::new(12)), "seg_12");
        assert_eq!(SegmentId::new(12).raw(), 12);
    }

    #[test]
    fn test_segment_from_spec_is_unplaced() {
        let segment = Segment::from_spec(SegmentSpec::road(&[Side::East, Side::West]));

        assert_eq!(segment.kind, FeatureKind::Road);
        assert_eq!(segment.sides.len(), 2);
        assert_eq!(segment.id(), None);
        assert_eq!(segment.owner(), None);
        assert_eq!(segment.pennants(), 0);
    }

    #[test]
    fn test_monastery_by_kind_or_flag() {
        assert!(Segment::from(SegmentSpec::monastery()).is_monastery());

        let mut flagged = SegmentSpec::field(&[Side::North]);
        flagged.is_monastery = true;
        assert!(Segment::from(flagged).is_monastery());

        assert!(!Segment::from(SegmentSpec::field(&[Side::North])).is_monastery());
    }

    #[test]
    #[should_panic(expected = "already has id")]
    fn test_assign_id_twice_panics() {
        let mut segment = Segment::from(SegmentSpec::city(&[Side::North]));
        segment.assign_id(SegmentId::new(1));
        segment.assign_id(SegmentId::new(2));
    }

    #[test]
    fn test_segment_serialization() {
        let segment = Segment::from(SegmentSpec::city(&[Side::North]).with_pennant());
        let json = serde_json::to_string(&segment).unwrap();
        let deserialized: Segment = serde_json::from_str(&json).unwrap();
        assert_eq!(segment, deserialized);
    }
}
