/// Default number of plies searched by the engine player
pub const DEFAULT_DEPTH: u32 = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    /// Plies searched below the root position; the root's own chains count as the first ply
    pub depth: u32,
}

impl SearchParams {
    #[must_use]
    pub const fn with_depth(depth: u32) -> Self {
        SearchParams { depth }
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            depth: DEFAULT_DEPTH,
        }
    }
}
