//! Score records produced by the board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{OwnerPolicy, PlayerId};
use crate::features::Owners;
use crate::tiles::FeatureKind;

/// What a score record was awarded for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreKind {
    /// Completed city, harvested mid-game.
    City,
    /// Completed road, harvested mid-game.
    Road,
    /// Fully surrounded monastery, harvested mid-game.
    Monastery,
    /// City still open at game end.
    IncompleteCity,
    /// Road still open at game end.
    IncompleteRoad,
    /// Monastery not fully surrounded at game end.
    IncompleteMonastery,
    /// Field, scored at game end by the completed cities it borders.
    Field,
}

impl ScoreKind {
    /// The feature kind the record is about.
    #[must_use]
    pub const fn feature(self) -> FeatureKind {
        match self {
            ScoreKind::City | ScoreKind::IncompleteCity => FeatureKind::City,
            ScoreKind::Road | ScoreKind::IncompleteRoad => FeatureKind::Road,
            ScoreKind::Monastery | ScoreKind::IncompleteMonastery => FeatureKind::Monastery,
            ScoreKind::Field => FeatureKind::Field,
        }
    }

    /// Is this an end-of-game record?
    #[must_use]
    pub const fn is_final(self) -> bool {
        !matches!(self, ScoreKind::City | ScoreKind::Road | ScoreKind::Monastery)
    }
}

impl std::fmt::Display for ScoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ScoreKind::City => "CITY",
            ScoreKind::Road => "ROAD",
            ScoreKind::Monastery => "MONASTERY",
            ScoreKind::IncompleteCity => "INCOMPLETE_CITY",
            ScoreKind::IncompleteRoad => "INCOMPLETE_ROAD",
            ScoreKind::IncompleteMonastery => "INCOMPLETE_MONASTERY",
            ScoreKind::Field => "FIELD",
        };
        f.write_str(name)
    }
}

/// One scored feature: kind, points, and every owner with its claim count.
///
/// Owners are reported exactly as the feature holds them; shared features
/// list several players. Use `awards` to resolve who is credited.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEvent {
    pub kind: ScoreKind,
    pub points: u32,
    pub owners: Owners,
}

impl ScoreEvent {
    #[must_use]
    pub fn new(kind: ScoreKind, points: u32, owners: Owners) -> Self {
        Self { kind, points, owners }
    }

    /// `(player, points)` credited under `policy`.
    ///
    /// ```
    /// use meeple_core::core::{OwnerPolicy, PlayerId};
    /// use meeple_core::features::Owners;
    /// use meeple_core::scoring::{ScoreEvent, ScoreKind};
    ///
    /// let owners: Owners = [(PlayerId::new(0), 2), (PlayerId::new(1), 1)].into_iter().collect();
    /// let event = ScoreEvent::new(ScoreKind::City, 10, owners);
    ///
    /// assert_eq!(event.awards(OwnerPolicy::EveryOwner).len(), 2);
    /// assert_eq!(event.awards(OwnerPolicy::Majority).as_slice(), &[(PlayerId::new(0), 10)]);
    /// ```
    #[must_use]
    pub fn awards(&self, policy: OwnerPolicy) -> SmallVec<[(PlayerId, u32); 2]> {
        let winners: SmallVec<[PlayerId; 2]> = match policy {
            OwnerPolicy::EveryOwner => self.owners.players().collect(),
            OwnerPolicy::Majority => self.owners.majority(),
        };
        winners.into_iter().map(|p| (p, self.points)).collect()
    }
}

impl std::fmt::Display for ScoreEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} +{} [", self.kind, self.points)?;
        for (i, (player, count)) in self.owners.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} x{}", player, count)?;
        }
        f.write_str("]")
    }
}
