//! Core engine types: players, grid geometry, configuration, RNG.
//!
//! These are the leaf building blocks every other module depends on.

pub mod config;
pub mod geometry;
pub mod player;
pub mod rng;

pub use config::{OwnerPolicy, ScoringConfig};
pub use geometry::{Coord, InvalidRotation, Rotation, Side, SideSet};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
