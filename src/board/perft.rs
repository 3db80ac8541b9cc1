use super::Board;

impl Board {
    /// Count the chain sequences of length `depth` from this position.
    ///
    /// Every chain is pushed and popped on this board, so a mismatch against a
    /// known count or a changed position afterwards points at make/unmake bugs.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let chains = self.legal_moves();
        if depth == 1 {
            return chains.len() as u64;
        }

        let mut nodes = 0;
        for chain in chains {
            self.push(chain);
            nodes += self.perft(depth - 1);
            if self.pop().is_err() {
                break;
            }
        }

        nodes
    }
}
