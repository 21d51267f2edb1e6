//! Per-player score tally.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::event::ScoreEvent;
use crate::core::{OwnerPolicy, PlayerId, PlayerMap, ScoringConfig};

/// A record named a player the sheet has no seat for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{player} is not seated at a {player_count}-player table")]
pub struct UnknownPlayer {
    pub player: PlayerId,
    pub player_count: usize,
}

/// Running totals for a game.
///
/// Credits points under an `OwnerPolicy` and counts meeples handed back
/// by mid-game harvests.
///
/// ```
/// use meeple_core::core::{OwnerPolicy, PlayerId};
/// use meeple_core::features::Owners;
/// use meeple_core::scoring::{ScoreEvent, ScoreKind, ScoreSheet};
///
/// let mut sheet = ScoreSheet::new(2, OwnerPolicy::EveryOwner);
/// sheet.record(&ScoreEvent::new(ScoreKind::City, 8, Owners::single(PlayerId::new(1)))).unwrap();
///
/// assert_eq!(sheet.points(PlayerId::new(1)), 8);
/// assert_eq!(sheet.returned_meeples(PlayerId::new(1)), 1);
/// assert_eq!(sheet.leaders(), vec![PlayerId::new(1)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheet {
    policy: OwnerPolicy,
    points: PlayerMap<u32>,
    returned: PlayerMap<u32>,
}

impl ScoreSheet {
    #[must_use]
    pub fn new(player_count: usize, policy: OwnerPolicy) -> Self {
        Self {
            policy,
            points: PlayerMap::with_value(player_count, 0),
            returned: PlayerMap::with_value(player_count, 0),
        }
    }

    /// Sheet crediting shared features the way `config` asks.
    #[must_use]
    pub fn for_config(player_count: usize, config: &ScoringConfig) -> Self {
        Self::new(player_count, config.owner_policy)
    }

    #[must_use]
    pub fn policy(&self) -> OwnerPolicy {
        self.policy
    }

    fn check_owners(&self, event: &ScoreEvent) -> Result<(), UnknownPlayer> {
        match event.owners.iter().find(|(player, _)| !self.points.contains(*player)) {
            Some((player, _)) => Err(UnknownPlayer {
                player,
                player_count: self.points.player_count(),
            }),
            None => Ok(()),
        }
    }

    /// Credit one record.
    ///
    /// Meeples are returned to every owner of a mid-game record; final
    /// records return nothing since the game is over. A record naming an
    /// unseated player is rejected whole.
    pub fn record(&mut self, event: &ScoreEvent) -> Result<(), UnknownPlayer> {
        self.check_owners(event)?;
        for (player, points) in event.awards(self.policy) {
            self.points[player] += points;
        }
        if !event.kind.is_final() {
            for (player, count) in event.owners.iter() {
                self.returned[player] += count;
            }
        }
        Ok(())
    }

    /// Credit every record in order, or none of them if any names an
    /// unseated player.
    pub fn record_all<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a ScoreEvent>,
    ) -> Result<(), UnknownPlayer> {
        let events: Vec<_> = events.into_iter().collect();
        for event in &events {
            self.check_owners(event)?;
        }
        for event in events {
            self.record(event)?;
        }
        Ok(())
    }

    /// Points so far; zero for a seat the sheet does not have.
    #[must_use]
    pub fn points(&self, player: PlayerId) -> u32 {
        self.points.get(player).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn returned_meeples(&self, player: PlayerId) -> u32 {
        self.returned.get(player).copied().unwrap_or(0)
    }

    /// Players sharing the highest total.
    #[must_use]
    pub fn leaders(&self) -> Vec<PlayerId> {
        let best = self.points.iter().map(|(_, p)| *p).max().unwrap_or(0);
        self.points
            .iter()
            .filter(|(_, p)| **p == best)
            .map(|(player, _)| player)
            .collect()
    }

    /// `(player, points)` for every player.
    pub fn totals(&self) -> impl Iterator<Item = (PlayerId, u32)> + '_ {
        self.points.iter().map(|(player, p)| (player, *p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Owners;
    use crate::scoring::ScoreKind;

    fn shared(points: u32) -> ScoreEvent {
        let owners: Owners = [(PlayerId::new(0), 2), (PlayerId::new(1), 1)].into_iter().collect();
        ScoreEvent::new(ScoreKind::City, points, owners)
    }

    #[test]
    fn test_every_owner_policy() {
        let mut sheet = ScoreSheet::new(2, OwnerPolicy::EveryOwner);
        sheet.record(&shared(10)).unwrap();

        assert_eq!(sheet.points(PlayerId::new(0)), 10);
        assert_eq!(sheet.points(PlayerId::new(1)), 10);
        assert_eq!(sheet.returned_meeples(PlayerId::new(0)), 2);
        assert_eq!(sheet.returned_meeples(PlayerId::new(1)), 1);
    }

    #[test]
    fn test_majority_policy() {
        let mut sheet = ScoreSheet::new(2, OwnerPolicy::Majority);
        sheet.record(&shared(10)).unwrap();

        assert_eq!(sheet.points(PlayerId::new(0)), 10);
        assert_eq!(sheet.points(PlayerId::new(1)), 0);
        assert_eq!(sheet.returned_meeples(PlayerId::new(1)), 1);
    }

    #[test]
    fn test_policy_from_config() {
        let config = ScoringConfig::default().with_owner_policy(OwnerPolicy::Majority);
        assert_eq!(ScoreSheet::for_config(2, &config).policy(), OwnerPolicy::Majority);
    }

    #[test]
    fn test_final_records_return_no_meeples() {
        let mut sheet = ScoreSheet::new(2, OwnerPolicy::EveryOwner);
        sheet
            .record(&ScoreEvent::new(ScoreKind::Field, 6, Owners::single(PlayerId::new(0))))
            .unwrap();

        assert_eq!(sheet.points(PlayerId::new(0)), 6);
        assert_eq!(sheet.returned_meeples(PlayerId::new(0)), 0);
    }

    #[test]
    fn test_leaders_and_totals() {
        let mut sheet = ScoreSheet::new(3, OwnerPolicy::EveryOwner);
        sheet
            .record_all(&[
                ScoreEvent::new(ScoreKind::Road, 3, Owners::single(PlayerId::new(0))),
                ScoreEvent::new(ScoreKind::Road, 3, Owners::single(PlayerId::new(2))),
            ])
            .unwrap();

        assert_eq!(sheet.leaders(), vec![PlayerId::new(0), PlayerId::new(2)]);
        assert_eq!(
            sheet.totals().collect::<Vec<_>>(),
            vec![(PlayerId::new(0), 3), (PlayerId::new(1), 0), (PlayerId::new(2), 3)]
        );
    }

    #[test]
    fn test_unseated_player_rejected_whole() {
        let mut sheet = ScoreSheet::new(2, OwnerPolicy::EveryOwner);
        let stranger: Owners = [(PlayerId::new(0), 1), (PlayerId::new(3), 1)].into_iter().collect();
        let event = ScoreEvent::new(ScoreKind::City, 8, stranger);

        assert_eq!(
            sheet.record(&event),
            Err(UnknownPlayer {
                player: PlayerId::new(3),
                player_count: 2
            })
        );
        assert_eq!(sheet.points(PlayerId::new(0)), 0);
        assert_eq!(sheet.returned_meeples(PlayerId::new(0)), 0);
        assert_eq!(sheet.points(PlayerId::new(3)), 0);

        // A bad record anywhere in a batch keeps the earlier ones out too.
        let batch = [shared(4), event];
        assert!(sheet.record_all(&batch).is_err());
        assert_eq!(sheet, ScoreSheet::new(2, OwnerPolicy::EveryOwner));
    }
}
