//! # meeple-core
//!
//! Board-state and scoring engine for a tile-laying game of cities, roads,
//! fields and monasteries.
//!
//! ## Design Principles
//!
//! 1. **Session objects**: a `Board` is constructed per game and passed by
//!    reference. There is no global state.
//!
//! 2. **Cheap probing**: legality checks never mutate, rejected moves are
//!    all-or-nothing, and boards clone in O(1) via `im-rs`.
//!
//! 3. **Immutable blueprints**: the catalog hands out `TileBlueprint`s;
//!    every placement works on a fresh `Tile` instance.
//!
//! ## Architecture
//!
//! - **Weighted union-find per feature kind**: each root aggregates size,
//!   pennants, open edges and owners. A feature is closed when its root has
//!   no open edge left.
//!
//! - **Plain-data results**: scoring returns `ScoreEvent` lists; how shared
//!   features are credited is up to the caller (`OwnerPolicy`).
//!
//! ## Modules
//!
//! - `core`: players, grid geometry, scoring configuration, RNG
//! - `tiles`: segments, blueprints, tile instances, catalog, deck
//! - `features`: union-find and feature aggregates
//! - `board`: placement, claims, scoring passes, move enumeration, rendering
//! - `scoring`: score records and per-player tallies

pub mod board;
pub mod core;
pub mod features;
pub mod scoring;
pub mod tiles;

// Re-export commonly used types
pub use crate::core::{
    Coord, GameRng, InvalidRotation, OwnerPolicy, PlayerId, PlayerMap, Rotation, ScoringConfig,
    Side, SideSet,
};

pub use crate::tiles::{
    CatalogEntry, CatalogError, Deck, FeatureKind, Segment, SegmentId, SegmentSpec, Tile,
    TileBlueprint, TileCatalog, STARTER,
};

pub use crate::features::{FeatureSet, FeatureStats, Mergeable, Owners, Union, UnionFind};

pub use crate::board::{Board, BoardStats, ClaimError, PlacedTile, Placement, PlacementError};

pub use crate::scoring::{ScoreEvent, ScoreKind, ScoreSheet, UnknownPlayer};
