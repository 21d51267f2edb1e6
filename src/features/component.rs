//! Aggregated statistics of one feature component.

use serde::{Deserialize, Serialize};

use super::owners::Owners;
use super::union_find::{Mergeable, UnionFind};

/// What a union-find root knows about its whole feature.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureStats {
    /// Number of segment fragments in the component.
    pub size: u32,

    /// Pennants across all fragments.
    pub pennants: u32,

    /// Segment sides not yet matched against a neighbor. Zero means the
    /// feature is closed.
    pub open_edges: i32,

    /// Claims on the component.
    pub owners: Owners,
}

impl FeatureStats {
    /// Stats of a single freshly placed fragment.
    #[must_use]
    pub fn fragment(open_edges: u32, has_pennant: bool) -> Self {
        Self {
            size: 1,
            pennants: u32::from(has_pennant),
            open_edges: open_edges as i32,
            owners: Owners::new(),
        }
    }

    /// Is the feature topologically closed?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.open_edges == 0
    }

    #[must_use]
    pub fn is_claimed(&self) -> bool {
        !self.owners.is_empty()
    }

    /// Fragments plus pennants: the base every point value multiplies.
    #[must_use]
    pub fn weight(&self) -> u32 {
        self.size + self.pennants
    }
}

impl Mergeable for FeatureStats {
    /// Every edge match consumes one open side on each of its two segments.
    fn absorb(&mut self, other: Self) {
        self.size += other.size;
        self.pennants += other.pennants;
        self.open_edges = self.open_edges + other.open_edges - 2;
        self.owners.merge(&other.owners);
    }

    fn rejoin(&mut self) {
        self.open_edges -= 2;
    }
}

/// Union-find over one connected feature kind.
pub type FeatureSet = UnionFind<FeatureStats>;

impl FeatureSet {
    /// Sum of open edges over every component.
    #[must_use]
    pub fn total_open_edges(&self) -> i64 {
        self.roots().map(|(_, stats)| i64::from(stats.open_edges)).sum()
    }
}
