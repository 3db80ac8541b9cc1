//! Ruleset parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Capture rules in force on a board.
///
/// The default is international draughts: men capture in all four diagonal
/// directions. Turning `men_capture_backward` off restricts men to forward
/// captures, as in simplified variants; kings are unaffected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rules {
    pub men_capture_backward: bool,
}

impl Rules {
    #[must_use]
    pub const fn international() -> Self {
        Rules {
            men_capture_backward: true,
        }
    }

    #[must_use]
    pub const fn forward_captures_only() -> Self {
        Rules {
            men_capture_backward: false,
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Rules::international()
    }
}
