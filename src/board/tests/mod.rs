//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `notation.rs` - Board notation parsing and formatting
//! - `legal_moves.rs` - Simple moves, forced captures and the longest-chain rule
//! - `make_unmake.rs` - Push/pop correctness and crowning
//! - `perft.rs` - Chain enumeration counts
//! - `search.rs` - Alpha-beta search
//! - `proptest.rs` - Property-based tests over random playouts

mod search;

use crate::board::{Board, BoardBuilder, Checker, Color, Coord, MoveChain};

/// Render chains the way `Vec<MoveChain>` lists them in assertions
pub(super) fn chains_to_string(chains: &[MoveChain]) -> String {
    let parts: Vec<String> = chains.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}

/// Board from notation with the given side to move
pub(super) fn board_with(notation: &str, color: Color) -> Board {
    let mut board = Board::from_notation(notation);
    board.set_side_to_move(color);
    board
}

/// Board holding exactly the listed checkers, written as notation characters
pub(super) fn board_of(checkers: &[((usize, usize), char)], color: Color) -> Board {
    checkers
        .iter()
        .fold(BoardBuilder::new(), |builder, &((x, y), c)| {
            let checker = Checker::from_char(c).expect("test checker character");
            builder.checker(Coord(x, y), checker)
        })
        .side_to_move(color)
        .build()
}
