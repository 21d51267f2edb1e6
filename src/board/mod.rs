//! The game board: one exclusively owned session per game.
//!
//! ## Key Types
//!
//! - `Board`: grid, City/Road/Field feature sets, monastery registry
//! - `PlacementError` / `ClaimError`: why a move was rejected
//! - `Placement`: a legal `(cell, rotation)` for a blueprint
//! - `BoardStats`: summary counters for monitoring
//!
//! Every rejected operation leaves the board untouched, so agents can probe
//! moves freely. For speculative sequences, clone the board (O(1)).

pub mod error;
pub mod moves;
pub mod render;
pub mod scoring;
pub mod state;

pub use error::{ClaimError, PlacementError};
pub use moves::Placement;
pub use render::BoardStats;
pub use state::{Board, PlacedTile};
