//! Scoring configuration.
//!
//! The defaults reproduce the standard point values. Variants can tune them
//! through the builder methods without touching the board logic.

use serde::{Deserialize, Serialize};

/// How points of a feature claimed by several players are credited.
///
/// The board itself never resolves shared ownership: merged features keep
/// every owner in their score record. The policy is applied when records
/// are tallied (see `ScoreSheet`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OwnerPolicy {
    /// Each listed owner receives the full points.
    #[default]
    EveryOwner,
    /// Only the owners with the highest claim count receive the full points.
    Majority,
}

/// Point values used by completion harvesting and end-of-game scoring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Points per fragment (and per pennant) of a completed city.
    pub city_fragment_points: u32,

    /// Points per fragment of a completed road.
    pub road_fragment_points: u32,

    /// Points per fragment (and per pennant) of any feature still open at
    /// game end.
    pub incomplete_fragment_points: u32,

    /// Points for a monastery with all eight surrounding cells occupied.
    pub monastery_points: u32,

    /// Points a field earns per distinct completed city it borders.
    pub field_city_points: u32,

    /// Crediting rule for shared features.
    pub owner_policy: OwnerPolicy,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            city_fragment_points: 2,
            road_fragment_points: 1,
            incomplete_fragment_points: 1,
            monastery_points: 9,
            field_city_points: 3,
            owner_policy: OwnerPolicy::EveryOwner,
        }
    }
}

impl ScoringConfig {
    pub fn with_city_fragment_points(mut self, points: u32) -> Self {
        self.city_fragment_points = points;
        self
    }

    pub fn with_road_fragment_points(mut self, points: u32) -> Self {
        self.road_fragment_points = points;
        self
    }

    pub fn with_incomplete_fragment_points(mut self, points: u32) -> Self {
        self.incomplete_fragment_points = points;
        self
    }

    pub fn with_monastery_points(mut self, points: u32) -> Self {
        self.monastery_points = points;
        self
    }

    pub fn with_field_city_points(mut self, points: u32) -> Self {
        self.field_city_points = points;
        self
    }

    pub fn with_owner_policy(mut self, policy: OwnerPolicy) -> Self {
        self.owner_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScoringConfig::default();
        assert_eq!(config.city_fragment_points, 2);
        assert_eq!(config.road_fragment_points, 1);
        assert_eq!(config.incomplete_fragment_points, 1);
        assert_eq!(config.monastery_points, 9);
        assert_eq!(config.field_city_points, 3);
        assert_eq!(config.owner_policy, OwnerPolicy::EveryOwner);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ScoringConfig::default()
            .with_city_fragment_points(3)
            .with_field_city_points(4)
            .with_owner_policy(OwnerPolicy::Majority);

        assert_eq!(config.city_fragment_points, 3);
        assert_eq!(config.field_city_points, 4);
        assert_eq!(config.owner_policy, OwnerPolicy::Majority);
        assert_eq!(config.road_fragment_points, 1);
    }

    #[test]
    fn test_serialization() {
        let config = ScoringConfig::default().with_monastery_points(12);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ScoringConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
