//! Core draughts types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Checker` and `Color` - pieces and sides
//! - `Coord` - a square on the 10x10 board
//! - `Move` and `MoveChain` - single steps and whole turns

mod checker;
mod coord;
mod moves;

pub use checker::{Checker, Color};
pub use coord::{Coord, BOARD_SIZE, SQUARE_COUNT};
pub use moves::{Captured, Move, MoveChain};
