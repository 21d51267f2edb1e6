//! Score records and tallies.
//!
//! The board emits `ScoreEvent`s; a `ScoreSheet` turns them into per-player
//! totals.

pub mod event;
pub mod sheet;

pub use event::{ScoreEvent, ScoreKind};
pub use sheet::{ScoreSheet, UnknownPlayer};
