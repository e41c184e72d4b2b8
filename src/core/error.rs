//! Error type shared by every fallible operation in the crate.

use std::path::PathBuf;

use thiserror::Error;

use crate::rules::RoundStatus;

/// Errors surfaced to the caller (usually the UI layer).
///
/// All variants are recoverable: a failed call leaves the round unchanged.
#[derive(Debug, Error)]
pub enum MastermindError {
    /// The palette, code length, or tries setting cannot produce a playable round.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// An operation was called in a state that does not permit it.
    #[error("cannot check a guess while the round is {status}")]
    InvalidTransition { status: RoundStatus },

    /// A guess or board edit does not fit the round's palette or code length.
    #[error("invalid guess: {reason}")]
    InvalidGuess { reason: String },

    /// The configuration file could not be read.
    #[error("failed to read config at {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid TOML for `MastermindConfig`.
    #[error("failed to parse config")]
    Config {
        #[from]
        source: toml::de::Error,
    },
}

impl MastermindError {
    pub(crate) fn configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }

    pub(crate) fn guess(reason: impl Into<String>) -> Self {
        Self::InvalidGuess { reason: reason.into() }
    }
}

/// Crate-wide result alias.
pub type Result<T, E = MastermindError> = std::result::Result<T, E>;
