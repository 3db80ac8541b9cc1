//! Game driver: players and the loop that alternates them on a live board.
//!
//! The driver owns the only board that is ever played on for real. Players get
//! a shared reference and explore on their own copies; the chain they return is
//! checked against the legal moves before it is pushed.

mod config;
mod player;

use std::fmt;

pub use config::{ConfigError, GameConfig, PlayerKind, USAGE};
pub use player::{EnginePlayer, Player, RandomPlayer};

use crate::board::{Board, Color, MoveChain};

/// How a game ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The opponent had no legal chain left on its turn
    WonBy(Color),
    /// The ply limit was reached first
    Unfinished,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::WonBy(color) => write!(f, "{color} wins"),
            Outcome::Unfinished => write!(f, "unfinished"),
        }
    }
}

/// Summary of a played game; the chains themselves stay in the board history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameRecord {
    pub outcome: Outcome,
    pub plies: usize,
}

/// Error type for a game that could not be completed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A player returned a chain that is not legal in the current position
    IllegalChain { ply: usize, chain: MoveChain },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::IllegalChain { ply, chain } => {
                write!(f, "Illegal chain {chain} at ply {ply}")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Receives game progress. All methods default to doing nothing.
pub trait GameObserver {
    fn on_start(&mut self, _board: &Board) {}

    fn on_chain(&mut self, _ply: usize, _mover: Color, _chain: &MoveChain, _board: &Board) {}

    fn on_finish(&mut self, _record: &GameRecord, _board: &Board) {}
}

/// Observer that ignores everything
pub struct SilentObserver;

impl GameObserver for SilentObserver {}

/// Prints every ply and the final board to stdout
pub struct StdoutObserver;

impl GameObserver for StdoutObserver {
    fn on_start(&mut self, board: &Board) {
        println!("{board}");
    }

    fn on_chain(&mut self, ply: usize, mover: Color, chain: &MoveChain, board: &Board) {
        println!("{ply}. {mover}: {chain}");
        println!("{board}");
    }

    fn on_finish(&mut self, record: &GameRecord, board: &Board) {
        println!("Result: {} after {} plies", record.outcome, record.plies);
        println!("Final position: {}", board.get_board());
    }
}

/// Play on `board` until the side to move has no legal chain or `max_plies`
/// chains have been played.
pub fn play_game(
    board: &mut Board,
    white: &mut dyn Player,
    black: &mut dyn Player,
    max_plies: usize,
    observer: &mut dyn GameObserver,
) -> Result<GameRecord, GameError> {
    observer.on_start(board);
    let mut plies = 0;

    let outcome = loop {
        let mover = board.side_to_move();
        let legal = board.legal_moves();
        if legal.is_empty() {
            break Outcome::WonBy(mover.opponent());
        }
        if plies >= max_plies {
            #[cfg(feature = "logging")]
            log::warn!("game stopped after {plies} plies without a result");
            break Outcome::Unfinished;
        }

        let player: &mut dyn Player = match mover {
            Color::White => &mut *white,
            Color::Black => &mut *black,
        };
        let chain = match player.select_chain(board) {
            Some(chain) if legal.contains(&chain) => chain,
            // A player with legal chains available that declines to move resigns.
            None => break Outcome::WonBy(mover.opponent()),
            Some(chain) => return Err(GameError::IllegalChain { ply: plies + 1, chain }),
        };

        #[cfg(feature = "logging")]
        log::info!("ply {} {} ({}) plays {}", plies + 1, mover, player.name(), chain);

        board.push(chain);
        plies += 1;
        if let Some(last) = board.last_chain() {
            observer.on_chain(plies, mover, last, board);
        }
    };

    let record = GameRecord { outcome, plies };
    observer.on_finish(&record, board);
    Ok(record)
}
