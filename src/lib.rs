//! # mastermind-core
//!
//! Game logic for a Mastermind color-guessing game, independent of any UI.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: The host application draws the board and forwards
//!    "slot clicked" / "check clicked" / "restart clicked" into a `Round`.
//!
//! 2. **Injectable Randomness**: Code generation takes an `IndexSource`.
//!    Production uses the seedable `GameRng`; tests script their draws.
//!
//! 3. **Errors, Not Panics**: Unplayable configurations and illegal moves
//!    come back as `MastermindError` and leave the round untouched.
//!
//! ## Modules
//!
//! - `core`: Colors, palettes, RNG, code generation, configuration, errors
//! - `rules`: Round status and the check transition
//! - `games`: The playable `Round` and its board

pub mod core;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    generate_sequence, Color, GameRng, GameRngState, IndexSource, MastermindConfig, MastermindError,
    Palette, Result, Sequence,
};

pub use crate::games::mastermind::{Board, GuessRecord, Round, RoundSnapshot};

pub use crate::rules::{resolve_check, RoundStatus};
