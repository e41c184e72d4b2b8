//! Round status and the check transition.

use serde::{Deserialize, Serialize};

/// Where a round stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// The player may still check guesses.
    #[default]
    InProgress,
    /// A guess matched the target.
    Won,
    /// Tries ran out without a match.
    Lost,
}

impl RoundStatus {
    /// True once the round is won or lost.
    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }

    /// Short title for an end-of-round dialog.
    #[must_use]
    pub fn title(self) -> Option<&'static str> {
        match self {
            RoundStatus::InProgress => None,
            RoundStatus::Won => Some("Win!"),
            RoundStatus::Lost => Some("Lose!"),
        }
    }

    /// Message for an end-of-round dialog.
    #[must_use]
    pub fn message(self) -> Option<&'static str> {
        match self {
            RoundStatus::InProgress => None,
            RoundStatus::Won => Some("You win!"),
            RoundStatus::Lost => Some("You lose!"),
        }
    }
}

impl std::fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RoundStatus::InProgress => "in progress",
            RoundStatus::Won => "won",
            RoundStatus::Lost => "lost",
        })
    }
}

/// Status after a check, given the tries left once this check is counted.
///
/// A match wins even when it uses the last try.
#[must_use]
pub fn resolve_check<T: PartialEq>(target: &[T], guess: &[T], remaining_after: u32) -> RoundStatus {
    if target == guess {
        RoundStatus::Won
    } else if remaining_after == 0 {
        RoundStatus::Lost
    } else {
        RoundStatus::InProgress
    }
}
