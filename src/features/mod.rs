//! Feature connectivity: weighted union-find and component aggregates.
//!
//! City, Road and Field each get an independent `FeatureSet`. They only
//! meet again in end-of-game field scoring.

pub mod component;
pub mod owners;
pub mod union_find;

pub use component::{FeatureSet, FeatureStats};
pub use owners::Owners;
pub use union_find::{Mergeable, Union, UnionFind};
