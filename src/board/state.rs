use super::{Checker, Color, Coord, MoveChain, Rules, SQUARE_COUNT};

/// Notation of the standard opening layout: twenty men per side on the dark squares.
pub const STARTING_POSITION: &str =
    ".o.o.o.o.o,o.o.o.o.o.,.o.o.o.o.o,o.o.o.o.o.,,,.x.x.x.x.x,x.x.x.x.x.,.x.x.x.x.x,x.x.x.x.x.";

/// Game state: the grid of checkers, the side to move and the chains played so far.
///
/// Cloning a board produces an independent deep copy, which is how callers
/// explore hypothetical futures without touching the live game.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) squares: [Option<Checker>; SQUARE_COUNT],
    pub(crate) color: Color,
    pub(crate) history: Vec<MoveChain>,
    pub(crate) rules: Rules,
}

impl Board {
    /// Board with the standard opening layout, White to move
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (y, row) in STARTING_POSITION.split(',').enumerate() {
            for (x, c) in row.chars().enumerate() {
                board.squares[Coord(x, y).index()] = Checker::from_char(c);
            }
        }
        board
    }

    /// Board without checkers, White to move
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [None; SQUARE_COUNT],
            color: Color::White,
            history: Vec::new(),
            rules: Rules::default(),
        }
    }

    /// Replace the capture rules, keeping the position
    #[must_use]
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Remove all checkers, forget the history and give the move to White.
    pub fn clear(&mut self) {
        self.squares = [None; SQUARE_COUNT];
        self.history.clear();
        self.color = Color::White;
    }

    /// The side to move
    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.color
    }

    /// Hand the move to `color`. Intended for setting up positions, since the
    /// notation does not record whose turn it is.
    pub fn set_side_to_move(&mut self, color: Color) {
        self.color = color;
    }

    /// Checker at `(x, y)`; out-of-range coordinates are simply empty.
    #[must_use]
    pub fn checker_at(&self, x: isize, y: isize) -> Option<Checker> {
        Coord::from_signed(x, y).and_then(|coord| self.checker_on(coord))
    }

    #[inline]
    #[must_use]
    pub fn checker_on(&self, coord: Coord) -> Option<Checker> {
        self.squares[coord.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty_square(&self, coord: Coord) -> bool {
        self.squares[coord.index()].is_none()
    }

    #[inline]
    pub(crate) fn put(&mut self, coord: Coord, checker: Checker) {
        self.squares[coord.index()] = Some(checker);
    }

    #[inline]
    pub(crate) fn take(&mut self, coord: Coord) -> Option<Checker> {
        self.squares[coord.index()].take()
    }

    /// All checkers on the board in row-major order (top row first)
    pub fn checkers(&self) -> impl Iterator<Item = (Coord, Checker)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.map(|checker| (Coord::from_index(idx), checker)))
    }

    /// Number of checkers owned by `color`
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.checkers().filter(|(_, c)| c.color == color).count()
    }

    /// Chains applied and not yet reverted, oldest first
    #[must_use]
    pub fn history(&self) -> &[MoveChain] {
        &self.history
    }

    #[must_use]
    pub fn last_chain(&self) -> Option<&MoveChain> {
        self.history.last()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Two boards are equal when they hold the same checkers and the same side
/// is to move; history and rules are not compared.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares && self.color == other.color
    }
}

impl Eq for Board {}
