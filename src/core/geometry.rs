//! Grid geometry: compass sides, side sets, rotations, and coordinates.
//!
//! ## Conventions
//!
//! - `y` grows northwards: the northern neighbor of `(x, y)` is `(x, y + 1)`.
//! - Rotation is clockwise. Rotating by one quarter turn maps
//!   N -> E -> S -> W -> N.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the four edges of a square tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Side {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Side {
    /// All sides in clockwise order starting at north.
    pub const ALL: [Side; 4] = [Side::North, Side::East, Side::South, Side::West];

    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Side::North,
            1 => Side::East,
            2 => Side::South,
            _ => Side::West,
        }
    }

    /// The side facing this one across a shared edge.
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::from_index(self as u8 + 2)
    }

    /// This side after `quarter_turns` clockwise rotations.
    #[must_use]
    pub const fn rotated(self, quarter_turns: u8) -> Self {
        Self::from_index(self as u8 + quarter_turns % 4)
    }

    /// Grid offset `(dx, dy)` of the neighbor across this side.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Side::North => (0, 1),
            Side::East => (1, 0),
            Side::South => (0, -1),
            Side::West => (-1, 0),
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// A set of tile sides, stored as a 4-bit mask.
///
/// ```
/// use meeple_core::core::{Side, SideSet};
///
/// let sides = SideSet::from_sides(&[Side::North, Side::East]);
/// assert_eq!(sides.len(), 2);
/// assert_eq!(sides.rotated(1), SideSet::from_sides(&[Side::East, Side::South]));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideSet(u8);

impl SideSet {
    /// No sides (enclosed segment).
    pub const EMPTY: SideSet = SideSet(0);

    /// All four sides.
    pub const ALL: SideSet = SideSet(0b1111);

    #[must_use]
    pub fn from_sides(sides: &[Side]) -> Self {
        Self(sides.iter().fold(0, |mask, side| mask | side.bit()))
    }

    #[must_use]
    pub const fn contains(self, side: Side) -> bool {
        self.0 & side.bit() != 0
    }

    pub fn insert(&mut self, side: Side) {
        self.0 |= side.bit();
    }

    /// Number of sides in the set (0-4).
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Every side advanced by the same clockwise offset.
    #[must_use]
    pub fn rotated(self, quarter_turns: u8) -> Self {
        self.iter()
            .fold(Self::EMPTY, |mut set, side| {
                set.insert(side.rotated(quarter_turns));
                set
            })
    }

    /// Iterate sides in clockwise order starting at north.
    pub fn iter(self) -> impl Iterator<Item = Side> {
        Side::ALL.into_iter().filter(move |side| self.contains(*side))
    }
}

impl FromIterator<Side> for SideSet {
    fn from_iter<I: IntoIterator<Item = Side>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for side in iter {
            set.insert(side);
        }
        set
    }
}

/// Rotation was not one of 0, 90, 180 or 270 degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("invalid rotation {0}: expected 0, 90, 180 or 270")]
pub struct InvalidRotation(pub u16);

/// Clockwise tile rotation in quarter turns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn degrees(self) -> u16 {
        self as u16 * 90
    }

    #[must_use]
    pub const fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => Rotation::R0,
            1 => Rotation::R90,
            2 => Rotation::R180,
            _ => Rotation::R270,
        }
    }

    /// Parse a rotation given in degrees.
    ///
    /// ```
    /// use meeple_core::core::Rotation;
    ///
    /// assert_eq!(Rotation::from_degrees(270), Ok(Rotation::R270));
    /// assert!(Rotation::from_degrees(45).is_err());
    /// ```
    pub fn from_degrees(degrees: u16) -> Result<Self, InvalidRotation> {
        match degrees {
            0 => Ok(Rotation::R0),
            90 => Ok(Rotation::R90),
            180 => Ok(Rotation::R180),
            270 => Ok(Rotation::R270),
            other => Err(InvalidRotation(other)),
        }
    }

    /// Combined rotation of `self` followed by `quarter_turns` more.
    #[must_use]
    pub const fn advanced(self, quarter_turns: u8) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + quarter_turns % 4)
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Integer grid coordinate of a tile cell.
///
/// Ordered by `x`, then `y`, which fixes the iteration order of
/// coordinate-keyed maps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift by `(dx, dy)`; `None` past the edge of the `i32` grid.
    #[must_use]
    pub const fn offset_by(self, dx: i32, dy: i32) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// The cell across `side`, if the grid extends that far.
    #[must_use]
    pub const fn neighbor(self, side: Side) -> Option<Self> {
        let (dx, dy) = side.offset();
        self.offset_by(dx, dy)
    }

    /// The existing edge-adjacent cells, paired with the side they lie across.
    ///
    /// Cells at the `i32` limits have fewer than four.
    pub fn neighbors(self) -> impl Iterator<Item = (Side, Coord)> {
        Side::ALL
            .into_iter()
            .filter_map(move |side| self.neighbor(side).map(|c| (side, c)))
    }

    /// The 3x3 block centered on this cell, the cell itself included,
    /// clipped at the `i32` limits.
    pub fn neighborhood(self) -> impl Iterator<Item = Coord> {
        (-1..=1).flat_map(move |dx| (-1..=1).filter_map(move |dy| self.offset_by(dx, dy)))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::North.opposite(), Side::South);
        assert_eq!(Side::East.opposite(), Side::West);
        assert_eq!(Side::South.opposite(), Side::North);
        assert_eq!(Side::West.opposite(), Side::East);
    }

    #[test]
    fn test_side_rotated_clockwise() {
        assert_eq!(Side::North.rotated(1), Side::East);
        assert_eq!(Side::West.rotated(1), Side::North);
        assert_eq!(Side::East.rotated(3), Side::North);
        assert_eq!(Side::South.rotated(4), Side::South);
    }

    #[test]
    fn test_side_set_basics() {
        let mut set = SideSet::EMPTY;
        assert!(set.is_empty());

        set.insert(Side::West);
        set.insert(Side::North);
        set.insert(Side::West);

        assert_eq!(set.len(), 2);
        assert!(set.contains(Side::North));
        assert!(!set.contains(Side::East));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Side::North, Side::West]);
        assert_eq!(SideSet::ALL.len(), 4);
    }

    #[test]
    fn test_side_set_rotation_preserves_count() {
        let set = SideSet::from_sides(&[Side::North, Side::East, Side::West]);
        let rotated = set.rotated(2);

        assert_eq!(rotated.len(), 3);
        assert_eq!(rotated, SideSet::from_sides(&[Side::South, Side::West, Side::East]));
        assert_eq!(set.rotated(4), set);
    }

    #[test]
    fn test_rotation_degrees() {
        for rotation in Rotation::ALL {
            assert_eq!(Rotation::from_degrees(rotation.degrees()), Ok(rotation));
        }
        assert_eq!(Rotation::from_degrees(360), Err(InvalidRotation(360)));
        assert_eq!(Rotation::R270.advanced(2), Rotation::R90);
        assert_eq!(format!("{}", Rotation::R180), "180°");
    }

    #[test]
    fn test_coord_neighbors() {
        let c = Coord::new(2, -1);

        assert_eq!(c.neighbor(Side::North), Some(Coord::new(2, 0)));
        assert_eq!(c.neighbor(Side::East), Some(Coord::new(3, -1)));
        assert_eq!(c.neighbor(Side::South), Some(Coord::new(2, -2)));
        assert_eq!(c.neighbor(Side::West), Some(Coord::new(1, -1)));
        assert_eq!(c.neighbors().count(), 4);
    }

    #[test]
    fn test_coord_neighbors_at_grid_limits() {
        let corner = Coord::new(i32::MAX, i32::MIN);

        assert_eq!(corner.neighbor(Side::East), None);
        assert_eq!(corner.neighbor(Side::South), None);
        assert_eq!(corner.neighbor(Side::North), Some(Coord::new(i32::MAX, i32::MIN + 1)));
        assert_eq!(
            corner.neighbors().map(|(side, _)| side).collect::<Vec<_>>(),
            vec![Side::North, Side::West]
        );
        assert_eq!(corner.neighborhood().count(), 4);
        assert_eq!(Coord::new(i32::MIN, 0).neighborhood().count(), 6);
    }

    #[test]
    fn test_coord_neighborhood() {
        let cells: Vec<_> = Coord::ORIGIN.neighborhood().collect();

        assert_eq!(cells.len(), 9);
        assert!(cells.contains(&Coord::ORIGIN));
        assert!(cells.contains(&Coord::new(-1, 1)));
        assert!(cells.contains(&Coord::new(1, -1)));
    }
}
