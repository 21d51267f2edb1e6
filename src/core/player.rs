//! Seats at the table and per-seat storage.
//!
//! Meeples and score records name their owner by `PlayerId`. Tallies keep
//! one slot per seat in a `PlayerMap`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat index, counted from zero in turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Seats of a `player_count`-player game in turn order.
    ///
    /// ```
    /// use meeple_core::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(usize::from(u8::MAX) + 1)).map(|i| PlayerId(i as u8))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One value per seat.
///
/// Indexing with a seat outside the map panics; `get` and `get_mut` are
/// the checked forms.
///
/// ```
/// use meeple_core::core::{PlayerId, PlayerMap};
///
/// let mut supply: PlayerMap<u32> = PlayerMap::with_value(2, 7);
/// supply[PlayerId::new(1)] -= 1;
/// assert_eq!(supply[PlayerId::new(1)], 6);
/// assert_eq!(supply.get(PlayerId::new(2)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    slots: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Fill each seat's slot from `init`.
    ///
    /// Panics unless `player_count` is between 1 and 256.
    pub fn from_fn(player_count: usize, init: impl FnMut(PlayerId) -> T) -> Self {
        assert!(
            (1..=usize::from(u8::MAX) + 1).contains(&player_count),
            "player count {} out of range 1..=256",
            player_count
        );
        Self {
            slots: PlayerId::all(player_count).map(init).collect(),
        }
    }

    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(player_count, |_| value.clone())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.slots.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.slots.get(player.index())
    }

    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.slots.get_mut(player.index())
    }

    /// Seats with their values, in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        &self.slots[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.slots[player.index()]
    }
}
