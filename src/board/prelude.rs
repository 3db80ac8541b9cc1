//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use draughts_engine::board::prelude::*;
//! ```

pub use super::{
    find_best_chain, search, Board, BoardBuilder, BoardError, Checker, Color, Coord, Move,
    MoveChain, NotationError, Rules, SearchParams,
};
