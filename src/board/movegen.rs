use super::rays::{forward_directions, ray, DIRECTIONS};
use super::{Board, Checker, Coord, Move, MoveChain};

impl Board {
    /// All legal chains for the side to move.
    ///
    /// Capturing is mandatory and only the longest capture chains across all
    /// of the mover's checkers are legal; chains tied at that length are all
    /// returned. Without any capture, each checker contributes its simple
    /// moves. An empty result means the side to move has lost.
    pub fn legal_moves(&mut self) -> Vec<MoveChain> {
        let mover = self.color;
        let own: Vec<(Coord, Checker)> = self.checkers().filter(|(_, c)| c.color == mover).collect();

        let mut captures: Vec<MoveChain> = Vec::new();
        let mut longest = 0;
        for &(from, _) in &own {
            let chains = self.longest_capture_chains(from);
            let Some(len) = chains.first().map(MoveChain::len) else {
                continue;
            };
            if len > longest {
                longest = len;
                captures.clear();
            }
            if len == longest {
                captures.extend(chains);
            }
        }
        if !captures.is_empty() {
            return captures;
        }

        let mut moves = Vec::new();
        for (from, checker) in own {
            if checker.crowned {
                self.king_slides(from, checker, &mut moves);
            } else {
                self.man_steps(from, checker, &mut moves);
            }
        }
        moves
    }

    /// Whether the side to move is forced to capture
    #[must_use]
    pub fn has_capture(&self) -> bool {
        self.checkers()
            .filter(|(_, checker)| checker.color == self.color)
            .any(|(from, checker)| !self.capture_hops(checker, from, self.rules).is_empty())
    }

    fn man_steps(&self, from: Coord, checker: Checker, moves: &mut Vec<MoveChain>) {
        for dir in forward_directions(checker.color) {
            if let Some(&to) = ray(from, dir).first() {
                if self.is_empty_square(to) {
                    let step = Move::step(checker, from, to, checker.promotes_on(to.y()));
                    moves.push(MoveChain::single(step));
                }
            }
        }
    }

    fn king_slides(&self, from: Coord, checker: Checker, moves: &mut Vec<MoveChain>) {
        for dir in 0..DIRECTIONS.len() {
            for &to in ray(from, dir).iter().take_while(|&&sq| self.is_empty_square(sq)) {
                moves.push(MoveChain::single(Move::step(checker, from, to, false)));
            }
        }
    }
}
