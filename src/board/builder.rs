//! Fluent builder for constructing draughts positions.
//!
//! Allows creating positions checker by checker rather than parsing notation.
//!
//! # Example
//! ```
//! use draughts_engine::board::{BoardBuilder, Checker, Color, Coord};
//!
//! let board = BoardBuilder::new()
//!     .checker(Coord(3, 3), Checker::man(Color::White))
//!     .checker(Coord(4, 2), Checker::king(Color::Black))
//!     .side_to_move(Color::Black)
//!     .build();
//! assert_eq!(board.count(Color::White), 1);
//! ```

use super::state::STARTING_POSITION;
use super::{Board, Checker, Color, Coord, Rules};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    checkers: Vec<(Coord, Checker)>,
    side_to_move: Color,
    rules: Rules,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            checkers: Vec::new(),
            side_to_move: Color::White,
            rules: Rules::default(),
        }
    }

    /// Create a builder starting from the standard opening layout.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for (y, row) in STARTING_POSITION.split(',').enumerate() {
            for (x, c) in row.chars().enumerate() {
                if let Some(checker) = Checker::from_char(c) {
                    builder.checkers.push((Coord(x, y), checker));
                }
            }
        }
        builder
    }

    /// Place a checker on the board, replacing whatever stood there.
    #[must_use]
    pub fn checker(mut self, coord: Coord, checker: Checker) -> Self {
        self.checkers.retain(|(sq, _)| *sq != coord);
        self.checkers.push((coord, checker));
        self
    }

    /// Remove a checker from a square.
    #[must_use]
    pub fn clear(mut self, coord: Coord) -> Self {
        self.checkers.retain(|(sq, _)| *sq != coord);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set the capture rules.
    #[must_use]
    pub const fn rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// Build the board, with an empty history.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty().with_rules(self.rules);
        for (coord, checker) in self.checkers {
            board.put(coord, checker);
        }
        board.color = self.side_to_move;
        board
    }
}
