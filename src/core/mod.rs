//! Core types: colors, palettes, RNG, code generation, configuration, errors.
//!
//! Everything here is independent of how a round is played. The round state
//! machine in `games::mastermind` is built on top of these pieces.

pub mod color;
pub mod config;
pub mod error;
pub mod rng;
pub mod sequence;

pub use color::{Color, Palette};
pub use config::{MastermindConfig, DEFAULT_BOARD};
pub use error::{MastermindError, Result};
pub use rng::{GameRng, GameRngState, IndexSource};
pub use sequence::{generate_sequence, Sequence};
