//! Mastermind round: a hidden four-color code and ten tries to find it.
//!
//! - A round draws a duplicate-free code from the palette
//! - The player edits a board of colored slots and checks it
//! - Each check costs one try; matching the code wins, running out loses
//! - Restart draws a new code and resets tries, history, and board

mod board;
mod round;

pub use board::Board;
pub use round::{GuessRecord, Round, RoundSnapshot};
