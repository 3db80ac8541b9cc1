use super::error::BoardError;
use super::{Board, Move, MoveChain};

impl Board {
    /// Play `chain` for the side to move.
    ///
    /// The checker is lifted from the chain's first square and set down on its
    /// last, every jumped checker is removed, the checker is crowned if the
    /// final step promotes, and the turn passes to the opponent.
    pub fn push(&mut self, chain: MoveChain) {
        let checker = chain.checker();
        debug_assert_eq!(
            self.checker_on(chain.from()),
            Some(checker),
            "push: {chain} does not start on its checker"
        );

        self.take(chain.from());
        for captured in chain.captured() {
            self.take(captured.at);
        }
        self.put(chain.to(), checker.with_crown(checker.crowned || chain.is_promotion()));

        self.color = self.color.opponent();
        self.history.push(chain);
    }

    /// Revert the most recent chain and return it.
    ///
    /// Exact inverse of `push`: the checker goes back uncrowned if the chain
    /// crowned it, every captured checker reappears on its square and the
    /// turn passes back.
    pub fn pop(&mut self) -> Result<MoveChain, BoardError> {
        let chain = self.history.pop().ok_or(BoardError::EmptyHistory)?;

        self.take(chain.to());
        for captured in chain.captured() {
            self.put(captured.at, captured.checker);
        }
        self.put(chain.from(), chain.checker());

        self.color = self.color.opponent();
        Ok(chain)
    }

    /// Apply a single step without touching history, turn or crown. Used while
    /// exploring capture chains.
    pub(crate) fn apply_step(&mut self, mv: &Move) {
        self.take(mv.from);
        if let Some(captured) = mv.captured {
            self.take(captured.at);
        }
        self.put(mv.to, mv.checker);
    }

    /// Inverse of `apply_step`
    pub(crate) fn undo_step(&mut self, mv: &Move) {
        self.take(mv.to);
        if let Some(captured) = mv.captured {
            self.put(captured.at, captured.checker);
        }
        self.put(mv.from, mv.checker);
    }
}
