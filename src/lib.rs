pub mod board;
pub mod game;

pub use board::{Board, Checker, Color, Coord, Move, MoveChain};
