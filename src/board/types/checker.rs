//! Checker and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Draughts colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row step of a forward move (-1 for White, +1 for Black)
    #[inline]
    #[must_use]
    pub const fn forward(self) -> isize {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row on which men of this color get crowned (0 for White, 9 for Black)
    #[inline]
    #[must_use]
    pub const fn promotion_row(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 9,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A single piece on the board.
///
/// Equality is structural: two men of the same color are indistinguishable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Checker {
    pub color: Color,
    pub crowned: bool,
}

impl Checker {
    #[inline]
    #[must_use]
    pub const fn man(color: Color) -> Self {
        Checker {
            color,
            crowned: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn king(color: Color) -> Self {
        Checker {
            color,
            crowned: true,
        }
    }

    /// Same checker with the crown set or removed
    #[inline]
    #[must_use]
    pub const fn with_crown(self, crowned: bool) -> Self {
        Checker {
            color: self.color,
            crowned,
        }
    }

    /// Parse a checker from its notation character (x, X, o, O)
    #[must_use]
    pub const fn from_char(c: char) -> Option<Checker> {
        match c {
            'x' => Some(Checker::man(Color::White)),
            'X' => Some(Checker::king(Color::White)),
            'o' => Some(Checker::man(Color::Black)),
            'O' => Some(Checker::king(Color::Black)),
            _ => None,
        }
    }

    /// Notation character, uppercase for kings
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match (self.color, self.crowned) {
            (Color::White, false) => 'x',
            (Color::White, true) => 'X',
            (Color::Black, false) => 'o',
            (Color::Black, true) => 'O',
        }
    }

    /// Whether a checker arriving on row `y` would be crowned there
    #[inline]
    #[must_use]
    pub const fn promotes_on(self, y: usize) -> bool {
        !self.crowned && y == self.color.promotion_row()
    }
}

impl fmt::Display for Checker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
