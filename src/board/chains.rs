//! Forced-capture chain search.
//!
//! A chain is found by depth-first backtracking over single hops: each hop is
//! applied to the board (removing the jumped checker), the search continues
//! from the landing square, and the hop is undone before the next candidate
//! is tried. Every hop removes one opposing checker, so the recursion depth is
//! bounded by the number of opponents on the board.

use super::rays::{ray, DIRECTIONS};
use super::{Board, Checker, Coord, Move, MoveChain, Rules};

impl Board {
    /// The longest capture chains open to the checker on `from`, all ties
    /// included, in discovery order. Empty when the square is empty or the
    /// checker has nothing to capture.
    ///
    /// The board is mutated while searching and restored before returning.
    pub fn longest_capture_chains(&mut self, from: Coord) -> Vec<MoveChain> {
        let Some(checker) = self.checker_on(from) else {
            return Vec::new();
        };

        let mut finder = ChainFinder {
            checker,
            rules: self.rules,
            path: Vec::new(),
            longest: Vec::new(),
        };
        finder.explore(self, from);
        finder.into_chains()
    }

    /// Every single jump the given checker could make from `at`.
    ///
    /// Opponents are judged by the checker's own color, not by the side to
    /// move, so this stays correct in the middle of a chain.
    pub(crate) fn capture_hops(&self, checker: Checker, at: Coord, rules: Rules) -> Vec<Move> {
        let mut hops = Vec::new();

        for (dir, &(_, dy)) in DIRECTIONS.iter().enumerate() {
            let ray = ray(at, dir);

            if checker.crowned {
                let Some(pos) = ray.iter().position(|&sq| !self.is_empty_square(sq)) else {
                    continue;
                };
                let victim_sq = ray[pos];
                let Some(victim) = self.checker_on(victim_sq) else {
                    continue;
                };
                if victim.color == checker.color {
                    continue;
                }
                for &landing in ray[pos + 1..]
                    .iter()
                    .take_while(|&&sq| self.is_empty_square(sq))
                {
                    hops.push(Move::jump(checker, at, landing, victim_sq, victim));
                }
            } else {
                if !rules.men_capture_backward && dy != checker.color.forward() {
                    continue;
                }
                let [victim_sq, landing, ..] = *ray else {
                    continue;
                };
                match self.checker_on(victim_sq) {
                    Some(victim) if victim.color != checker.color && self.is_empty_square(landing) => {
                        hops.push(Move::jump(checker, at, landing, victim_sq, victim));
                    }
                    _ => {}
                }
            }
        }

        hops
    }
}

/// Backtracking state for one starting square.
struct ChainFinder {
    checker: Checker,
    rules: Rules,
    /// Hops taken from the start square down to the current node
    path: Vec<Move>,
    /// Longest terminal paths seen so far, all of equal length
    longest: Vec<Vec<Move>>,
}

impl ChainFinder {
    fn explore(&mut self, board: &mut Board, at: Coord) {
        let hops = board.capture_hops(self.checker, at, self.rules);
        if hops.is_empty() {
            self.record();
            return;
        }

        for hop in hops {
            board.apply_step(&hop);
            self.path.push(hop);
            self.explore(board, hop.to);
            self.path.pop();
            board.undo_step(&hop);
        }
    }

    fn record(&mut self) {
        let len = self.path.len();
        if len == 0 {
            return;
        }
        let best = self.longest.first().map_or(0, Vec::len);
        if len > best {
            self.longest.clear();
        }
        if len >= best {
            self.longest.push(self.path.clone());
        }
    }

    /// Finished chains, with promotion decided on each final landing square
    fn into_chains(self) -> Vec<MoveChain> {
        let checker = self.checker;
        self.longest
            .into_iter()
            .filter_map(|path| MoveChain::try_from(path).ok())
            .map(|mut chain| {
                chain.set_final_promotion(checker.promotes_on(chain.to().y()));
                chain
            })
            .collect()
    }
}
