//! Tile system: segments, blueprints, instances, catalog, and deck.
//!
//! ## Key Types
//!
//! - `FeatureKind`: City, Road, Field or Monastery
//! - `SegmentSpec` / `Segment`: a feature fragment on a blueprint / on a tile instance
//! - `TileBlueprint`: immutable tile shape owned by the catalog
//! - `Tile`: per-game tile instance (rotation, segment ids, claim tags)
//! - `TileCatalog`: blueprint lookup by name
//! - `Deck`: shuffled draw pile of instances

pub mod blueprint;
pub mod catalog;
pub mod deck;
pub mod segment;
pub mod tile;

pub use blueprint::TileBlueprint;
pub use catalog::{CatalogEntry, CatalogError, TileCatalog, STARTER};
pub use deck::Deck;
pub use segment::{FeatureKind, Segment, SegmentId, SegmentSpec};
pub use tile::Tile;
