use std::fmt;
use std::str::FromStr;

use super::error::NotationError;
use super::{Board, Checker, Coord, BOARD_SIZE, SQUARE_COUNT};

impl Board {
    /// Parse a position from board notation into a fresh board, White to move.
    pub fn try_from_notation(notation: &str) -> Result<Self, NotationError> {
        let mut board = Board::empty();
        board.set_board(notation)?;
        Ok(board)
    }

    /// Parse a position from board notation.
    ///
    /// # Panics
    /// Panics if the notation is invalid. Use `try_from_notation` for fallible parsing.
    #[must_use]
    pub fn from_notation(notation: &str) -> Self {
        Self::try_from_notation(notation).expect("Invalid board notation")
    }

    /// Replace the position with the one described by `notation`.
    ///
    /// Rows are separated by commas, top row first. Missing rows and missing
    /// trailing characters are empty squares. On success the history is
    /// cleared and White is to move; on failure the board is left untouched.
    pub fn set_board(&mut self, notation: &str) -> Result<(), NotationError> {
        let mut squares = [None; SQUARE_COUNT];

        for (y, row) in notation.split(',').enumerate() {
            if y >= BOARD_SIZE {
                return Err(NotationError::TooManyRows {
                    rows: notation.split(',').count(),
                });
            }
            for (x, c) in row.chars().enumerate() {
                let checker = match c {
                    '.' => None,
                    _ => Some(Checker::from_char(c).ok_or(NotationError::InvalidCharacter {
                        char: c,
                        row: y,
                        column: x,
                    })?),
                };
                if x >= BOARD_SIZE {
                    return Err(NotationError::TooManyColumns {
                        row: y,
                        columns: row.chars().count(),
                    });
                }
                squares[Coord(x, y).index()] = checker;
            }
        }

        self.clear();
        self.squares = squares;
        Ok(())
    }

    /// Convert the position to board notation.
    ///
    /// Always ten fields; a row holding a checker is written in full, an empty
    /// row as an empty field.
    #[must_use]
    pub fn get_board(&self) -> String {
        let rows: Vec<String> = (0..BOARD_SIZE)
            .map(|y| {
                let cells = (0..BOARD_SIZE).map(|x| self.checker_on(Coord(x, y)));
                if cells.clone().all(|cell| cell.is_none()) {
                    String::new()
                } else {
                    cells.map(|cell| cell.map_or('.', Checker::to_char)).collect()
                }
            })
            .collect();
        rows.join(",")
    }
}

impl FromStr for Board {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_notation(s)
    }
}

/// Grid view of the board, one row per line. For notation use `get_board`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let c = self.checker_on(Coord(x, y)).map_or('.', Checker::to_char);
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
