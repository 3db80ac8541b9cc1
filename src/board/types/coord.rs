//! Board coordinates.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Width and height of the board.
pub const BOARD_SIZE: usize = 10;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A square on the draughts board, represented as (x, y).
///
/// `x` counts columns left to right, `y` counts rows top to bottom, so row 0
/// is the first field of the board notation and White's promotion row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord(pub usize, pub usize); // (x, y)

impl Coord {
    /// Create a new coordinate with bounds checking
    #[must_use]
    pub fn new(x: usize, y: usize) -> Option<Self> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Some(Coord(x, y))
        } else {
            None
        }
    }

    /// Like [`Coord::new`] but accepting signed input, e.g. a square stepped off the edge
    #[must_use]
    pub fn from_signed(x: isize, y: isize) -> Option<Self> {
        if x < 0 || y < 0 {
            return None;
        }
        Coord::new(x as usize, y as usize)
    }

    #[inline]
    #[must_use]
    pub const fn x(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn y(self) -> usize {
        self.1
    }

    /// Index into the dense board array (`y * 10 + x`)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.1 * BOARD_SIZE + self.0
    }

    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Coord(idx % BOARD_SIZE, idx / BOARD_SIZE)
    }

    /// The neighbouring square one step along `(dx, dy)`, if still on the board
    #[inline]
    #[must_use]
    pub fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        Coord::from_signed(self.0 as isize + dx, self.1 as isize + dy)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl From<Coord> for (usize, usize) {
    fn from(coord: Coord) -> Self {
        (coord.0, coord.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(Coord::new(9, 9), Some(Coord(9, 9)));
        assert_eq!(Coord::new(10, 0), None);
        assert_eq!(Coord::new(0, 10), None);
        assert_eq!(Coord::from_signed(-1, 3), None);
        assert_eq!(Coord::from_signed(3, 4), Some(Coord(3, 4)));
    }

    #[test]
    fn test_index_roundtrip() {
        for idx in 0..SQUARE_COUNT {
            assert_eq!(Coord::from_index(idx).index(), idx);
        }
        assert_eq!(Coord(3, 2).index(), 23);
    }

    #[test]
    fn test_offset() {
        assert_eq!(Coord(0, 0).offset(-1, -1), None);
        assert_eq!(Coord(0, 0).offset(1, 1), Some(Coord(1, 1)));
        assert_eq!(Coord(9, 5).offset(1, -1), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord(1, 6).to_string(), "(1, 6)");
    }
}
