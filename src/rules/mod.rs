//! Round rules: the status a round can be in and how a check moves it.
//!
//! The rules are pure functions over the target, the guess, and the tries
//! left. `games::mastermind::Round` owns the state and calls into them.

pub mod outcome;

pub use outcome::{resolve_check, RoundStatus};
