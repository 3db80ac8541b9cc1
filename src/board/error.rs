//! Error types for board operations.

use std::fmt;

/// Error type for board notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Character other than `x`, `X`, `o`, `O` or `.`
    InvalidCharacter { char: char, row: usize, column: usize },
    /// More than ten comma-separated rows
    TooManyRows { rows: usize },
    /// More than ten characters in a row
    TooManyColumns { row: usize, columns: usize },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::InvalidCharacter { char, row, column } => {
                write!(
                    f,
                    "Invalid character '{char}' in notation at row {row}, column {column}"
                )
            }
            NotationError::TooManyRows { rows } => {
                write!(f, "Notation has {rows} rows, at most 10 allowed")
            }
            NotationError::TooManyColumns { row, columns } => {
                write!(f, "Too many columns ({columns}) in row {row}")
            }
        }
    }
}

impl std::error::Error for NotationError {}

/// Error type for move application failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// `pop` called with no chain left to revert
    EmptyHistory,
    /// A move chain must contain at least one step
    EmptyChain,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::EmptyHistory => write!(f, "No move chain to undo"),
            BoardError::EmptyChain => write!(f, "Move chain has no moves"),
        }
    }
}

impl std::error::Error for BoardError {}
