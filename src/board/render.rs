//! Diagnostic views of a board: ASCII grid and summary counters.
//!
//! Meant for logs and agent prompts. The text layout is not a protocol and
//! may change.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::state::Board;
use crate::core::Coord;
use crate::features::FeatureSet;

/// Snapshot of what is on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardStats {
    pub tiles: usize,
    pub open_cities: usize,
    pub complete_cities: usize,
    pub open_roads: usize,
    pub complete_roads: usize,
    /// City, road and field components holding at least one meeple.
    pub claimed_features: usize,
    pub monasteries: usize,
    pub claimed_monasteries: usize,
}

fn open_and_complete(set: &FeatureSet) -> (usize, usize) {
    set.roots().fold((0, 0), |(open, complete), (_, stats)| {
        if stats.is_complete() {
            (open, complete + 1)
        } else {
            (open + 1, complete)
        }
    })
}

impl Board {
    /// Count components and claims.
    #[must_use]
    pub fn stats(&self) -> BoardStats {
        let (open_cities, complete_cities) = open_and_complete(&self.cities);
        let (open_roads, complete_roads) = open_and_complete(&self.roads);
        let claimed_features = [&self.cities, &self.roads, &self.fields]
            .iter()
            .map(|set| set.roots().filter(|(_, stats)| stats.is_claimed()).count())
            .sum();

        BoardStats {
            tiles: self.len(),
            open_cities,
            complete_cities,
            open_roads,
            complete_roads,
            claimed_features,
            monasteries: self.monasteries.len(),
            claimed_monasteries: self.monasteries.values().filter(|o| o.is_some()).count(),
        }
    }

    /// Grid with one empty cell of padding, highest row first.
    ///
    /// ```text
    ///    -1  0  1
    ///    -----------
    ///  1|  .   .   .
    ///  0|  .  [S]  .
    /// -1|  .   .   .
    /// ```
    #[must_use]
    pub fn render_ascii(&self) -> String {
        let (Some(first), Some(last)) = (self.grid.keys().next(), self.grid.keys().last()) else {
            return "   (Empty Board)".to_string();
        };

        // Keys are ordered by x first, so only the y range needs a scan.
        let min_x = first.x.saturating_sub(1);
        let max_x = last.x.saturating_add(1);
        let min_y = self.grid.keys().map(|c| c.y).min().unwrap_or(0).saturating_sub(1);
        let max_y = self.grid.keys().map(|c| c.y).max().unwrap_or(0).saturating_add(1);

        let header = format!(
            "   {}",
            (min_x..=max_x)
                .map(|x| format!("{:2}", x))
                .collect::<Vec<_>>()
                .join(" ")
        );

        let mut lines = vec![header.clone(), format!("   {}", "-".repeat(header.len()))];
        for y in (min_y..=max_y).rev() {
            let mut row = vec![format!("{:2}|", y)];
            for x in min_x..=max_x {
                let cell = match self.tile(Coord::new(x, y)) {
                    Some(tile) => {
                        let symbol = tile
                            .name()
                            .chars()
                            .next()
                            .map_or('?', |c| c.to_ascii_uppercase());
                        format!("[{}]", symbol)
                    }
                    None => " . ".to_string(),
                };
                row.push(cell);
            }
            lines.push(row.join(" "));
        }

        lines.join("\n")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_ascii())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerId, Rotation, Side};
    use crate::tiles::{SegmentSpec, Tile};

    fn starter() -> Tile {
        Tile::new(
            "Starter",
            [
                SegmentSpec::city(&[Side::North]),
                SegmentSpec::road(&[Side::East, Side::West]),
                SegmentSpec::field(&[Side::South]),
            ],
        )
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(Board::new().render_ascii(), "   (Empty Board)");
    }

    #[test]
    fn test_render_single_tile() {
        let mut board = Board::new();
        assert!(board.place_tile(0, 0, starter()));

        let expected = [
            "   -1  0  1",
            "   -----------",
            " 1|  .   .   . ",
            " 0|  .  [S]  . ",
            "-1|  .   .   . ",
        ]
        .join("\n");
        assert_eq!(board.render_ascii(), expected);
        assert_eq!(format!("{}", board), expected);
    }

    #[test]
    fn test_render_at_grid_corner() {
        let mut board = Board::new();
        assert!(board.place_tile(i32::MIN, i32::MAX, starter()));

        let text = board.render_ascii();
        let lines: Vec<_> = text.lines().collect();
        // No padding row above or column to the left of the corner.
        assert_eq!(lines.len(), 2 + 2);
        assert!(lines[2].ends_with("[S]  . "));
    }

    #[test]
    fn test_stats() {
        let mut board = Board::new();
        assert!(board.place_tile(0, 0, starter()));
        let cap = Tile::new(
            "Cap",
            [
                SegmentSpec::city(&[Side::North]),
                SegmentSpec::field(&[Side::East, Side::South, Side::West]),
            ],
        );
        assert!(board.place_tile(0, 1, cap.rotated(Rotation::R180)));
        assert!(board.place_meeple(0, 0, 1, PlayerId::new(0)));

        let stats = board.stats();
        assert_eq!(stats.tiles, 2);
        assert_eq!(stats.complete_cities, 1);
        assert_eq!(stats.open_cities, 0);
        assert_eq!(stats.open_roads, 1);
        assert_eq!(stats.claimed_features, 1);
        assert_eq!(stats.monasteries, 0);
    }
}
