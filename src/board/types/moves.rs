//! Move and move chain types.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::checker::Checker;
use super::coord::Coord;
use crate::board::error::BoardError;

/// A checker removed by a jump, together with the square it stood on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Captured {
    pub at: Coord,
    pub checker: Checker,
}

/// One atomic step of a turn.
///
/// `checker` is the moving piece as it stood before the step; a step that
/// crowns it still carries the uncrowned checker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub checker: Checker,
    pub from: Coord,
    pub to: Coord,
    pub is_promotion: bool,
    pub captured: Option<Captured>,
}

impl Move {
    /// Create a non-capturing step
    #[inline]
    #[must_use]
    pub const fn step(checker: Checker, from: Coord, to: Coord, is_promotion: bool) -> Self {
        Move {
            checker,
            from,
            to,
            is_promotion,
            captured: None,
        }
    }

    /// Create a jump over `victim` standing on `at`. Promotion is decided later,
    /// once it is known whether the jump ends its chain.
    #[inline]
    #[must_use]
    pub const fn jump(checker: Checker, from: Coord, to: Coord, at: Coord, victim: Checker) -> Self {
        Move {
            checker,
            from,
            to,
            is_promotion: false,
            captured: Some(Captured {
                at,
                checker: victim,
            }),
        }
    }

    /// Returns true if this step removes an opposing checker
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move<{},f{},t{}>", self.checker, self.from, self.to)
    }
}

/// All steps of one turn, performed by a single piece. Never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Move>", into = "Vec<Move>"))]
pub struct MoveChain {
    moves: Vec<Move>,
}

impl MoveChain {
    /// A chain consisting of one step
    #[must_use]
    pub fn single(mv: Move) -> Self {
        MoveChain { moves: vec![mv] }
    }

    /// Number of steps; at least one
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Never true; chains hold at least one step
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn first(&self) -> &Move {
        &self.moves[0]
    }

    #[inline]
    #[must_use]
    pub fn last(&self) -> &Move {
        &self.moves[self.moves.len() - 1]
    }

    /// Square the moving checker leaves
    #[inline]
    #[must_use]
    pub fn from(&self) -> Coord {
        self.first().from
    }

    /// Square the moving checker ends on
    #[inline]
    #[must_use]
    pub fn to(&self) -> Coord {
        self.last().to
    }

    /// The moving checker as it stood before the turn
    #[inline]
    #[must_use]
    pub fn checker(&self) -> Checker {
        self.first().checker
    }

    /// Whether the turn crowns the moving checker
    #[inline]
    #[must_use]
    pub fn is_promotion(&self) -> bool {
        self.last().is_promotion
    }

    /// Number of checkers removed by the chain
    #[inline]
    #[must_use]
    pub fn capture_count(&self) -> usize {
        self.moves.iter().filter(|m| m.is_capture()).count()
    }

    #[inline]
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.first().is_capture()
    }

    /// Checkers removed by the chain, in capture order
    pub fn captured(&self) -> impl Iterator<Item = &Captured> + '_ {
        self.moves.iter().filter_map(|m| m.captured.as_ref())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Mark the final step as crowning (or not)
    pub(crate) fn set_final_promotion(&mut self, is_promotion: bool) {
        if let Some(last) = self.moves.last_mut() {
            last.is_promotion = is_promotion;
        }
    }
}

impl TryFrom<Vec<Move>> for MoveChain {
    type Error = BoardError;

    fn try_from(moves: Vec<Move>) -> Result<Self, Self::Error> {
        if moves.is_empty() {
            return Err(BoardError::EmptyChain);
        }
        Ok(MoveChain { moves })
    }
}

impl From<MoveChain> for Vec<Move> {
    fn from(chain: MoveChain) -> Self {
        chain.moves
    }
}

impl Index<usize> for MoveChain {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}

impl<'a> IntoIterator for &'a MoveChain {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl fmt::Display for MoveChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{mv}")?;
        }
        write!(f, "]")
    }
}
