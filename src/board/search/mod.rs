//! Search module implementing depth-limited minimax with alpha-beta pruning.
//!
//! The search explores the tree in place: every chain is pushed onto the one
//! board, searched, and popped again before the next sibling is tried, so the
//! board is left exactly as it was found. Leaves are scored with
//! [`Board::evaluate`] from the point of view of the side that was to move at
//! the root.
//!
//! There is deliberately no move ordering, transposition table, iterative
//! deepening or time control.

mod params;
mod report;

pub use params::{SearchParams, DEFAULT_DEPTH};
pub use report::{SearchInfo, SearchLogger, StdoutLogger};

use super::{Board, Color, MoveChain};

/// Value a maximizing node starts from
pub const NEG_INFINITY: i32 = i32::MIN;

/// Value a minimizing node starts from
pub const INFINITY: i32 = i32::MAX;

/// Which side of the minimax a node belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// The root player is to move; the node takes the maximum
    Maximizing,
    /// The opponent is to move; the node takes the minimum
    Minimizing,
}

impl Role {
    #[inline]
    #[must_use]
    pub const fn flip(self) -> Role {
        match self {
            Role::Maximizing => Role::Minimizing,
            Role::Minimizing => Role::Maximizing,
        }
    }
}

/// Statistics tracked during search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, root children included
    pub nodes: u64,
    /// Sibling loops abandoned because `alpha >= beta`
    pub cutoffs: u64,
}

/// Outcome of a root search
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// The chosen chain, `None` when the side to move has no legal chain
    pub best_chain: Option<MoveChain>,
    /// Value of the chosen chain from the root player's point of view
    pub value: Option<i32>,
    pub stats: SearchStats,
}

/// Pick a chain for the side to move, searching `max_depth` plies.
///
/// Works on a deep copy, so the caller's board is never touched.
#[must_use]
pub fn search(board: &Board, max_depth: u32) -> Option<MoveChain> {
    let mut scratch = board.clone();
    find_best_chain(&mut scratch, max_depth)
}

/// Pick a chain for the side to move, searching `max_depth` plies in place.
///
/// The board is restored before returning.
pub fn find_best_chain(board: &mut Board, max_depth: u32) -> Option<MoveChain> {
    search_with(board, &SearchParams::with_depth(max_depth), None).best_chain
}

/// Root search with full result and optional progress reporting.
///
/// Each root chain is searched with a full window and the first chain with
/// the strictly greatest value wins.
pub fn search_with(
    board: &mut Board,
    params: &SearchParams,
    logger: Option<&dyn SearchLogger>,
) -> SearchResult {
    let mut ctx = SearchContext::new(board);
    let child_depth = params.depth.saturating_sub(1);
    let mut best: Option<(MoveChain, i32)> = None;

    for chain in ctx.board.legal_moves() {
        ctx.board.push(chain);
        ctx.stats.nodes += 1;
        let value = ctx.alpha_beta(child_depth, NEG_INFINITY, INFINITY, Role::Minimizing);
        let Some(chain) = ctx.unmake() else {
            break;
        };

        #[cfg(feature = "logging")]
        log::debug!("root chain {chain} scored {value}");

        if best.as_ref().map_or(true, |(_, best_value)| value > *best_value) {
            best = Some((chain, value));
        }
    }

    let stats = ctx.stats;
    let (best_chain, value) = match best {
        Some((chain, value)) => (Some(chain), Some(value)),
        None => (None, None),
    };

    #[cfg(feature = "logging")]
    log::info!(
        "search depth {} value {:?} nodes {} cutoffs {}",
        params.depth,
        value,
        stats.nodes,
        stats.cutoffs
    );

    if let Some(logger) = logger {
        logger.info(&SearchInfo {
            depth: params.depth,
            value,
            nodes: stats.nodes,
            cutoffs: stats.cutoffs,
            best: best_chain.as_ref().map(ToString::to_string),
        });
    }

    SearchResult {
        best_chain,
        value,
        stats,
    }
}

/// Alpha-beta value of the position for the side to move, `depth` plies deep.
pub fn alpha_beta_value(board: &mut Board, depth: u32) -> i32 {
    SearchContext::new(board).alpha_beta(depth, NEG_INFINITY, INFINITY, Role::Maximizing)
}

/// Plain minimax value of the position for the side to move, without pruning.
///
/// Visits every node, so only useful to check `alpha_beta_value` against.
pub fn minimax_value(board: &mut Board, depth: u32) -> i32 {
    SearchContext::new(board).minimax(depth, Role::Maximizing)
}

/// Search context for a single search
struct SearchContext<'a> {
    board: &'a mut Board,
    root: Color,
    stats: SearchStats,
}

impl<'a> SearchContext<'a> {
    fn new(board: &'a mut Board) -> Self {
        let root = board.side_to_move();
        SearchContext {
            board,
            root,
            stats: SearchStats::default(),
        }
    }

    /// Pop the chain pushed by the caller. `None` means the push/pop pairing
    /// is broken; every caller stops iterating its siblings then.
    fn unmake(&mut self) -> Option<MoveChain> {
        self.board.pop().ok()
    }

    fn alpha_beta(&mut self, depth: u32, mut alpha: i32, mut beta: i32, role: Role) -> i32 {
        if depth == 0 {
            return self.board.evaluate(self.root);
        }
        let chains = self.board.legal_moves();
        if chains.is_empty() {
            return self.board.evaluate(self.root);
        }

        match role {
            Role::Maximizing => {
                let mut value = NEG_INFINITY;
                for chain in chains {
                    self.board.push(chain);
                    self.stats.nodes += 1;
                    value = value.max(self.alpha_beta(depth - 1, alpha, beta, role.flip()));
                    if self.unmake().is_none() {
                        break;
                    }
                    alpha = alpha.max(value);
                    if alpha >= beta {
                        self.stats.cutoffs += 1;
                        break;
                    }
                }
                value
            }
            Role::Minimizing => {
                let mut value = INFINITY;
                for chain in chains {
                    self.board.push(chain);
                    self.stats.nodes += 1;
                    value = value.min(self.alpha_beta(depth - 1, alpha, beta, role.flip()));
                    if self.unmake().is_none() {
                        break;
                    }
                    beta = beta.min(value);
                    if alpha >= beta {
                        self.stats.cutoffs += 1;
                        break;
                    }
                }
                value
            }
        }
    }

    fn minimax(&mut self, depth: u32, role: Role) -> i32 {
        if depth == 0 {
            return self.board.evaluate(self.root);
        }
        let chains = self.board.legal_moves();
        if chains.is_empty() {
            return self.board.evaluate(self.root);
        }

        let mut values = Vec::with_capacity(chains.len());
        for chain in chains {
            self.board.push(chain);
            self.stats.nodes += 1;
            values.push(self.minimax(depth - 1, role.flip()));
            if self.unmake().is_none() {
                break;
            }
        }

        let best = match role {
            Role::Maximizing => values.into_iter().max(),
            Role::Minimizing => values.into_iter().min(),
        };
        best.unwrap_or_else(|| self.board.evaluate(self.root))
    }
}
