//! Tile catalog: named blueprints with copy counts.
//!
//! The catalog owns the read-only blueprints of a tile set. It never hands
//! out mutable access; games obtain their own `Tile` instances through
//! `instantiate` (or a `Deck`).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::blueprint::TileBlueprint;
use super::segment::SegmentSpec;
use super::tile::Tile;
use crate::core::{InvalidRotation, Rotation, Side};

/// Errors from catalog lookups.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown tile '{0}'")]
    UnknownTile(String),

    #[error(transparent)]
    InvalidRotation(#[from] InvalidRotation),
}

/// A blueprint and how many physical copies of it the set contains.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub blueprint: TileBlueprint,
    pub count: usize,
}

/// Registry of tile blueprints.
///
/// ## Example
///
/// ```
/// use meeple_core::core::{Rotation, Side};
/// use meeple_core::tiles::{FeatureKind, TileCatalog};
///
/// let catalog = TileCatalog::standard();
/// let tile = catalog.instantiate("City1_Fields", Rotation::R90).unwrap();
/// assert_eq!(tile.kind_at(Side::East), FeatureKind::City);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TileCatalog {
    entries: Vec<CatalogEntry>,
    by_name: FxHashMap<String, usize>,
}

impl TileCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a blueprint with its copy count.
    ///
    /// Panics if a blueprint with the same name already exists.
    pub fn register(&mut self, blueprint: TileBlueprint, count: usize) {
        if self.by_name.contains_key(blueprint.name()) {
            panic!("Tile '{}' already registered", blueprint.name());
        }
        self.by_name.insert(blueprint.name().to_string(), self.entries.len());
        self.entries.push(CatalogEntry { blueprint, count });
    }

    /// Get a blueprint by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TileBlueprint> {
        self.by_name.get(name).map(|&i| &self.entries[i].blueprint)
    }

    /// Get a blueprint by name, reporting unknown names as an error.
    pub fn lookup(&self, name: &str) -> Result<&TileBlueprint, CatalogError> {
        self.get(name)
            .ok_or_else(|| CatalogError::UnknownTile(name.to_string()))
    }

    /// Build a fresh, rotated instance of the named tile.
    pub fn instantiate(&self, name: &str, rotation: Rotation) -> Result<Tile, CatalogError> {
        Ok(self.lookup(name)?.instantiate(rotation))
    }

    /// Like `instantiate`, with the rotation given in degrees.
    pub fn instantiate_degrees(&self, name: &str, degrees: u16) -> Result<Tile, CatalogError> {
        let rotation = Rotation::from_degrees(degrees)?;
        self.instantiate(name, rotation)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Number of distinct blueprints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of physical tiles across all blueprints.
    #[must_use]
    pub fn total_tiles(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Iterate entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// The standard base-game tile set.
    ///
    /// Fields are modelled by the edges they dominate; fields enclosed
    /// between a city and a road touch no edge.
    #[must_use]
    pub fn standard() -> Self {
        use Side::{East as E, North as N, South as S, West as W};

        let c = SegmentSpec::city;
        let r = SegmentSpec::road;
        let f = SegmentSpec::field;
        let m = SegmentSpec::monastery;

        let table: Vec<(usize, &str, Vec<SegmentSpec>)> = vec![
            (2, "Monastery_Road", vec![m(), f(&[N, E, W]), r(&[S])]),
            (4, "Monastery_Field", vec![m(), f(&[N, E, S, W])]),
            (1, "City4_Shield", vec![c(&[N, E, S, W]).with_pennant()]),
            (4, "City1_RoadStraight", vec![c(&[N]), r(&[E, W]), f(&[S])]),
            (5, "City1_Fields", vec![c(&[N]), f(&[E, S, W])]),
            (2, "City2_Opposite_Shield", vec![c(&[E]).with_pennant(), c(&[W]), f(&[N, S])]),
            (1, "City2_Opposite", vec![c(&[E]), c(&[W]), f(&[N, S])]),
            (3, "City2_Curve", vec![c(&[N, E]), f(&[S, W])]),
            (2, "City2_Curve_Shield", vec![c(&[N, E]).with_pennant(), f(&[S, W])]),
            (3, "City1_RoadCurve", vec![c(&[N]), r(&[E, S]), f(&[W])]),
            (3, "City1_RoadCurve_Mirror", vec![c(&[N]), r(&[W, S]), f(&[E])]),
            (3, "City2_Curve_Road", vec![c(&[N, E]), r(&[S, W]), f(&[])]),
            (2, "City2_Curve_Road_Shield", vec![c(&[N, W]).with_pennant(), r(&[S, E]), f(&[])]),
            (3, "City2_Curve_Road_NoShield", vec![c(&[N, W]), r(&[S, E]), f(&[])]),
            (2, "City1_RoadStraight_Shield", vec![c(&[N, W]).with_pennant(), r(&[S, E])]),
            (1, "Crossroad", vec![r(&[N]), r(&[E]), r(&[S]), r(&[W]), f(&[])]),
            (4, "TJunction", vec![r(&[E]), r(&[S]), r(&[W]), f(&[N])]),
            (8, "RoadStraight", vec![r(&[N, S]), f(&[E]), f(&[W])]),
            (9, "RoadCurve", vec![r(&[S, W]), f(&[N, E])]),
            (3, "City3", vec![c(&[N, E, W]), f(&[S])]),
            (1, "City3_Shield", vec![c(&[N, E, W]).with_pennant(), f(&[S])]),
            (1, "City3_Road", vec![c(&[N, E, W]), r(&[S])]),
            (2, "City3_Road_Shield", vec![c(&[N, E, W]).with_pennant(), r(&[S])]),
            (3, "CityOpposite_Road", vec![c(&[N]), c(&[S]), r(&[E, W])]),
            (2, "CityAdj", vec![c(&[N]), c(&[W]), f(&[S, E])]),
            (1, STARTER, vec![c(&[N]), r(&[E, W]), f(&[S])]),
        ];

        let mut catalog = Self::new();
        for (count, name, segments) in table {
            catalog.register(TileBlueprint::new(name, segments), count);
        }
        catalog
    }
}

/// Name of the tile conventionally placed at the origin before the first turn.
pub const STARTER: &str = "Starter";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::FeatureKind;

    #[test]
    fn test_register_and_get() {
        let mut catalog = TileCatalog::new();
        catalog.register(TileBlueprint::new("Cap", [SegmentSpec::city(&[Side::North])]), 3);

        assert_eq!(catalog.get("Cap").map(TileBlueprint::name), Some("Cap"));
        assert!(catalog.get("Missing").is_none());
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.total_tiles(), 3);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_name_panics() {
        let mut catalog = TileCatalog::new();
        catalog.register(TileBlueprint::new("Cap", [SegmentSpec::city(&[Side::North])]), 1);
        catalog.register(TileBlueprint::new("Cap", [SegmentSpec::road(&[Side::North])]), 1);
    }

    #[test]
    fn test_lookup_errors() {
        let catalog = TileCatalog::standard();

        assert_eq!(
            catalog.lookup("Dragon").unwrap_err(),
            CatalogError::UnknownTile("Dragon".to_string())
        );
        assert_eq!(
            catalog.instantiate_degrees("RoadCurve", 45).unwrap_err(),
            CatalogError::InvalidRotation(InvalidRotation(45))
        );
        assert_eq!(
            format!("{}", catalog.instantiate_degrees("RoadCurve", 45).unwrap_err()),
            "invalid rotation 45: expected 0, 90, 180 or 270"
        );
    }

    #[test]
    fn test_standard_set() {
        let catalog = TileCatalog::standard();

        assert_eq!(catalog.len(), 26);
        assert_eq!(catalog.total_tiles(), 75);
        assert!(catalog.contains(STARTER));

        let monasteries: usize = catalog
            .iter()
            .filter(|e| e.blueprint.has_monastery())
            .map(|e| e.count)
            .sum();
        assert_eq!(monasteries, 6);
    }

    #[test]
    fn test_standard_starter_layout() {
        let starter = TileCatalog::standard().instantiate(STARTER, Rotation::R0).unwrap();

        assert_eq!(starter.kind_at(Side::North), FeatureKind::City);
        assert_eq!(starter.kind_at(Side::East), FeatureKind::Road);
        assert_eq!(starter.kind_at(Side::South), FeatureKind::Field);
        assert_eq!(starter.kind_at(Side::West), FeatureKind::Road);
    }

    #[test]
    fn test_instantiate_degrees() {
        let catalog = TileCatalog::standard();
        let tile = catalog.instantiate_degrees("City1_Fields", 270).unwrap();

        assert_eq!(tile.rotation(), Rotation::R270);
        assert_eq!(tile.kind_at(Side::West), FeatureKind::City);
    }
}
