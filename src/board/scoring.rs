//! Mid-game harvesting and end-of-game scoring.
//!
//! Both passes emit records in a fixed order: city roots, road roots (each
//! by ascending root id), monasteries by coordinate, then fields.

use std::collections::BTreeSet;

use smallvec::SmallVec;

use super::state::Board;
use crate::features::{FeatureSet, Owners};
use crate::scoring::{ScoreEvent, ScoreKind};
use crate::tiles::{FeatureKind, SegmentId};

impl Board {
    /// Report every claimed feature that has just been finished and hand
    /// its meeples back.
    ///
    /// Harvested features keep their size, pennants and open edges; only
    /// the owners are cleared. A second call with no placement in between
    /// therefore returns nothing.
    pub fn get_completed_features(&mut self) -> Vec<ScoreEvent> {
        let mut events = Vec::new();

        let city_points = self.config.city_fragment_points;
        let road_points = self.config.road_fragment_points;
        harvest(&mut self.cities, ScoreKind::City, city_points, &mut events);
        harvest(&mut self.roads, ScoreKind::Road, road_points, &mut events);

        let finished: Vec<_> = self
            .monasteries
            .iter()
            .filter_map(|(at, owner)| owner.map(|player| (*at, player)))
            .filter(|(at, _)| self.neighborhood_count(*at) == 9)
            .collect();

        for (at, player) in finished {
            events.push(ScoreEvent::new(
                ScoreKind::Monastery,
                self.config.monastery_points,
                Owners::single(player),
            ));
            self.monasteries.insert(at, None);
        }

        events
    }

    /// Score whatever is still on the board when the game ends.
    ///
    /// Open claimed cities and roads score per fragment and pennant, claimed
    /// monasteries score their occupied neighborhood, and claimed fields
    /// score for each distinct finished city they touch. A city counts for
    /// fields whenever it is closed now, whether or not it was harvested.
    #[must_use]
    pub fn calculate_final_scores(&self) -> Vec<ScoreEvent> {
        let per_fragment = self.config.incomplete_fragment_points;
        let mut events = Vec::new();

        for (set, kind) in [
            (&self.cities, ScoreKind::IncompleteCity),
            (&self.roads, ScoreKind::IncompleteRoad),
        ] {
            events.extend(
                set.roots()
                    .filter(|(_, stats)| stats.open_edges > 0 && stats.is_claimed())
                    .map(|(_, stats)| {
                        ScoreEvent::new(kind, stats.weight() * per_fragment, stats.owners.clone())
                    }),
            );
        }

        for (at, owner) in self.monasteries() {
            if let Some(player) = owner {
                events.push(ScoreEvent::new(
                    ScoreKind::IncompleteMonastery,
                    self.neighborhood_count(at),
                    Owners::single(player),
                ));
            }
        }

        let borders = self.field_city_borders();
        for (field_root, stats) in self.fields.roots() {
            if !stats.is_claimed() {
                continue;
            }
            let cities = borders
                .range((field_root, SegmentId(0))..=(field_root, SegmentId(u32::MAX)))
                .count() as u32;
            if cities == 0 {
                continue;
            }
            events.push(ScoreEvent::new(
                ScoreKind::Field,
                self.config.field_city_points * cities,
                stats.owners.clone(),
            ));
        }

        events
    }

    /// Every `(field root, closed city root)` pair sharing at least one tile.
    fn field_city_borders(&self) -> BTreeSet<(SegmentId, SegmentId)> {
        let mut borders = BTreeSet::new();

        for (_, tile) in self.tiles() {
            let mut fields: SmallVec<[SegmentId; 4]> = SmallVec::new();
            let mut cities: SmallVec<[SegmentId; 4]> = SmallVec::new();

            for segment in tile.segments() {
                let Some(id) = segment.id() else { continue };
                match segment.kind {
                    FeatureKind::Field => fields.push(self.fields.root(id)),
                    FeatureKind::City => {
                        let root = self.cities.root(id);
                        if self.cities.payload(root).is_complete() {
                            cities.push(root);
                        }
                    }
                    FeatureKind::Road | FeatureKind::Monastery => {}
                }
            }

            for &field in &fields {
                for &city in &cities {
                    borders.insert((field, city));
                }
            }
        }

        borders
    }
}

/// Emit and clear every finished, claimed component of one feature set.
fn harvest(set: &mut FeatureSet, kind: ScoreKind, per_fragment: u32, events: &mut Vec<ScoreEvent>) {
    let finished: Vec<SegmentId> = set
        .roots()
        .filter(|(_, stats)| stats.is_complete() && stats.is_claimed())
        .map(|(root, _)| root)
        .collect();

    for root in finished {
        let stats = set.payload_mut(root);
        let owners = std::mem::take(&mut stats.owners);
        events.push(ScoreEvent::new(kind, stats.weight() * per_fragment, owners));
    }
}
