//! Draughts board representation and game logic.
//!
//! Uses a dense array of 100 squares indexed by `y * 10 + x`, with moves
//! applied and reverted in place through `push`/`pop`. Implements the
//! international rules: mandatory capture, longest chain wins, men capture
//! backwards, kings fly, and promotion only where a turn ends.
//!
//! # Example
//! ```
//! use draughts_engine::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod builder;
mod chains;
mod error;
mod eval;
mod make_unmake;
mod movegen;
mod notation;
mod perft;
pub mod prelude;
mod rays;
mod rules;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{BoardError, NotationError};
pub use eval::{KING_WEIGHT, MAN_WEIGHT};
pub use rules::Rules;
pub use state::{Board, STARTING_POSITION};
pub use types::{Captured, Checker, Color, Coord, Move, MoveChain, BOARD_SIZE, SQUARE_COUNT};

// Public API - search functions and configuration
pub use search::{
    alpha_beta_value, find_best_chain, minimax_value, search, search_with, SearchParams,
    SearchResult, SearchStats,
};
