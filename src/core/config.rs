//! Round configuration.
//!
//! A `MastermindConfig` fixes everything a round needs before the first
//! code is drawn:
//! - the palette colors are drawn from
//! - the code length
//! - the number of tries per round
//! - an optional seed for reproducible rounds
//! - an optional starting board
//!
//! Configs can be built in code with the `with_*` methods or read from TOML.
//! Either way, `validate` runs before a round accepts one.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::color::{Color, Palette};
use super::error::{MastermindError, Result};

/// Starting board colors of the classic four-slot game.
pub const DEFAULT_BOARD: [Color; 4] = [Color::Blue, Color::Yellow, Color::Green, Color::Magenta];

/// Round configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MastermindConfig {
    /// Colors available to the code and to the player.
    pub palette: Palette,

    /// Number of slots in the code and on the board (default: 4).
    pub code_length: usize,

    /// Checks allowed before the round is lost (default: 10).
    pub max_tries: u32,

    /// Seed for the round RNG. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Board colors at round start and after every restart.
    /// `None` uses the classic board, or the palette in order when that doesn't fit.
    pub initial_board: Option<Vec<Color>>,
}

impl Default for MastermindConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            code_length: 4,
            max_tries: 10,
            seed: None,
            initial_board: None,
        }
    }
}

impl MastermindConfig {
    /// Set the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the code length.
    #[must_use]
    pub fn with_code_length(mut self, length: usize) -> Self {
        self.code_length = length;
        self
    }

    /// Set the number of tries per round.
    #[must_use]
    pub fn with_max_tries(mut self, tries: u32) -> Self {
        self.max_tries = tries;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the starting board.
    #[must_use]
    pub fn with_initial_board(mut self, board: Vec<Color>) -> Self {
        self.initial_board = Some(board);
        self
    }

    /// Check that a round can be played with this configuration.
    pub fn validate(&self) -> Result<()> {
        if self.code_length == 0 {
            return Err(MastermindError::configuration("code length must be at least 1"));
        }
        if self.code_length > self.palette.len() {
            return Err(MastermindError::configuration(format!(
                "code length {} exceeds palette size {}",
                self.code_length,
                self.palette.len()
            )));
        }
        if self.max_tries == 0 {
            return Err(MastermindError::configuration("max tries must be at least 1"));
        }
        if let Some(board) = &self.initial_board {
            if board.len() != self.code_length {
                return Err(MastermindError::configuration(format!(
                    "initial board has {} colors, expected {}",
                    board.len(),
                    self.code_length
                )));
            }
            if let Some(color) = board.iter().find(|&&c| !self.palette.contains(c)) {
                return Err(MastermindError::configuration(format!(
                    "initial board color {color} is not in the palette"
                )));
            }
        }
        Ok(())
    }

    /// The board a round starts from.
    #[must_use]
    pub fn resolved_board(&self) -> Vec<Color> {
        if let Some(board) = &self.initial_board {
            return board.clone();
        }
        if self.code_length == DEFAULT_BOARD.len()
            && DEFAULT_BOARD.iter().all(|&c| self.palette.contains(c))
        {
            return DEFAULT_BOARD.to_vec();
        }
        let colors = self.palette.colors();
        (0..self.code_length).map(|i| colors[i % colors.len()]).collect()
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| {
            tracing::warn!("Failed to read config at {:?}: {}", path, source);
            MastermindError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;

        Self::from_toml_str(&content).inspect_err(|err| {
            tracing::warn!("Failed to load config at {:?}: {}", path, err);
        })
    }
}
