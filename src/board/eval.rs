use super::{Board, Checker, Color};

/// Material weight of an uncrowned checker
pub const MAN_WEIGHT: i32 = 1;

/// Material weight of a king
pub const KING_WEIGHT: i32 = 5;

/// Score every position starts from before material is counted
const BASE_SCORE: i32 = 1;

#[inline]
const fn weight(checker: Checker) -> i32 {
    if checker.crowned {
        KING_WEIGHT
    } else {
        MAN_WEIGHT
    }
}

impl Board {
    /// Static evaluation from the point of view of `pov`: one plus the weight
    /// of every checker `pov` owns minus the weight of every opposing checker.
    #[must_use]
    pub fn evaluate(&self, pov: Color) -> i32 {
        self.checkers().fold(BASE_SCORE, |score, (_, checker)| {
            if checker.color == pov {
                score + weight(checker)
            } else {
                score - weight(checker)
            }
        })
    }
}
