//! Claim counts per player on one feature component.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlayerId;

/// Player -> claim count map, kept sorted by player.
///
/// Almost every feature has zero or one owner, so entries live inline.
/// Merging two components adds counts key-wise.
///
/// ```
/// use meeple_core::core::PlayerId;
/// use meeple_core::features::Owners;
///
/// let mut a = Owners::single(PlayerId::new(0));
/// let b = Owners::single(PlayerId::new(1));
/// a.merge(&b);
/// a.merge(&Owners::single(PlayerId::new(0)));
///
/// assert_eq!(a.count(PlayerId::new(0)), 2);
/// assert_eq!(a.majority().as_slice(), &[PlayerId::new(0)]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Owners {
    claims: SmallVec<[(PlayerId, u32); 2]>,
}

impl Owners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One claim by `player`.
    #[must_use]
    pub fn single(player: PlayerId) -> Self {
        let mut owners = Self::new();
        owners.add(player, 1);
        owners
    }

    /// Add `count` claims for `player`.
    pub fn add(&mut self, player: PlayerId, count: u32) {
        match self.claims.binary_search_by_key(&player, |(p, _)| *p) {
            Ok(i) => self.claims[i].1 += count,
            Err(i) => self.claims.insert(i, (player, count)),
        }
    }

    /// Key-wise addition of `other` into `self`.
    pub fn merge(&mut self, other: &Owners) {
        for &(player, count) in &other.claims {
            self.add(player, count);
        }
    }

    /// Remove every claim (meeples go back to their players).
    pub fn clear(&mut self) {
        self.claims.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Number of distinct owning players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    #[must_use]
    pub fn count(&self, player: PlayerId) -> u32 {
        self.claims
            .binary_search_by_key(&player, |(p, _)| *p)
            .map_or(0, |i| self.claims[i].1)
    }

    /// Total claims across all players.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.claims.iter().map(|(_, c)| c).sum()
    }

    /// Iterate `(player, count)` in player order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, u32)> + '_ {
        self.claims.iter().copied()
    }

    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.claims.iter().map(|(p, _)| *p)
    }

    /// Players holding the highest claim count (ties keep every leader).
    #[must_use]
    pub fn majority(&self) -> SmallVec<[PlayerId; 2]> {
        let best = self.claims.iter().map(|(_, c)| *c).max().unwrap_or(0);
        self.claims
            .iter()
            .filter(|(_, c)| *c == best)
            .map(|(p, _)| *p)
            .collect()
    }
}

impl FromIterator<(PlayerId, u32)> for Owners {
    fn from_iter<I: IntoIterator<Item = (PlayerId, u32)>>(iter: I) -> Self {
        let mut owners = Self::new();
        for (player, count) in iter {
            owners.add(player, count);
        }
        owners
    }
}
