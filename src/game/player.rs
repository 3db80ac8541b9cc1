//! Players that choose a chain for the side to move.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::search::{search_with, SearchLogger, SearchParams, StdoutLogger};
use crate::board::{Board, MoveChain};

/// Anything that can pick a chain for the side to move.
pub trait Player {
    /// Name shown by the game driver
    fn name(&self) -> &str;

    /// Choose one of `board.legal_moves()`, or `None` when there is nothing to play.
    ///
    /// Implementations must not rely on mutating `board`; they explore on a copy.
    fn select_chain(&mut self, board: &Board) -> Option<MoveChain>;
}

/// Plays the chain chosen by a fixed-depth alpha-beta search.
#[derive(Clone, Debug)]
pub struct EnginePlayer {
    params: SearchParams,
    report: bool,
}

impl EnginePlayer {
    #[must_use]
    pub fn new(depth: u32) -> Self {
        EnginePlayer {
            params: SearchParams::with_depth(depth),
            report: false,
        }
    }

    /// Print a search summary line for every decision
    #[must_use]
    pub fn with_report(mut self, report: bool) -> Self {
        self.report = report;
        self
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.params.depth
    }
}

impl Player for EnginePlayer {
    fn name(&self) -> &str {
        "engine"
    }

    fn select_chain(&mut self, board: &Board) -> Option<MoveChain> {
        let mut scratch = board.clone();
        let logger: Option<&dyn SearchLogger> = if self.report {
            Some(&StdoutLogger)
        } else {
            None
        };
        search_with(&mut scratch, &self.params, logger).best_chain
    }
}

/// Plays a uniformly random legal chain.
#[derive(Clone, Debug)]
pub struct RandomPlayer<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomPlayer<R> {
    pub fn new(rng: R) -> Self {
        RandomPlayer { rng }
    }
}

impl<R: Rng> Player for RandomPlayer<R> {
    fn name(&self) -> &str {
        "random"
    }

    fn select_chain(&mut self, board: &Board) -> Option<MoveChain> {
        let mut scratch = board.clone();
        scratch.legal_moves().choose(&mut self.rng).cloned()
    }
}
