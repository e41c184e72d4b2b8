//! Round state machine.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::board::Board;
use crate::core::{
    generate_sequence, Color, GameRng, GameRngState, IndexSource, MastermindConfig, MastermindError, Result,
    Sequence,
};
use crate::rules::{resolve_check, RoundStatus};

/// One accepted check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    /// 1-based attempt number within the round.
    pub attempt: u32,
    /// The colors that were checked.
    pub guess: Sequence,
    /// Whether the guess matched the target.
    pub matched: bool,
}

/// A Mastermind round.
///
/// Owns the hidden target, the tries counter, the player's board, the guess
/// history, and the random source used to draw targets.
///
/// ## Example
///
/// ```
/// use mastermind_core::core::MastermindConfig;
/// use mastermind_core::games::mastermind::Round;
/// use mastermind_core::rules::RoundStatus;
///
/// let config = MastermindConfig::default().with_seed(42);
/// let mut round = Round::new(config).unwrap();
/// assert_eq!(round.remaining_tries(), 10);
///
/// let target = round.target().to_vec();
/// assert_eq!(round.check(&target).unwrap(), RoundStatus::Won);
/// assert_eq!(round.remaining_tries(), 9);
/// ```
#[derive(Clone, Debug)]
pub struct Round<R = GameRng> {
    config: MastermindConfig,
    target: Sequence,
    remaining_tries: u32,
    status: RoundStatus,
    board: Board,
    history: Vector<GuessRecord>,
    rng: R,
}

impl Round<GameRng> {
    /// Start a round, seeding from `config.seed` or from entropy.
    pub fn new(config: MastermindConfig) -> Result<Self> {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::with_rng(config, rng)
    }

    /// Capture everything needed to resume this round later.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            config: self.config.clone(),
            target: self.target.clone(),
            remaining_tries: self.remaining_tries,
            status: self.status,
            board: self.board.clone(),
            history: self.history.clone(),
            rng: self.rng.state(),
        }
    }

    /// Rebuild a round from a snapshot.
    ///
    /// The snapshot is checked against its own config, so a hand-edited or
    /// corrupted snapshot fails instead of producing an unplayable round.
    pub fn restore(snapshot: RoundSnapshot) -> Result<Self> {
        let config = snapshot.config;
        config.validate()?;

        if snapshot.target.len() != config.code_length
            || snapshot.target.iter().any(|&c| !config.palette.contains(c))
            || snapshot.target.iter().enumerate().any(|(i, c)| snapshot.target[..i].contains(c))
        {
            return Err(MastermindError::configuration(
                "snapshot target does not fit its palette and code length",
            ));
        }
        if snapshot.board.len() != config.code_length
            || snapshot.board.colors().iter().any(|&c| !config.palette.contains(c))
        {
            return Err(MastermindError::configuration(
                "snapshot board does not fit its palette and code length",
            ));
        }
        if snapshot.remaining_tries > config.max_tries {
            return Err(MastermindError::configuration(format!(
                "snapshot has {} tries remaining, more than the maximum {}",
                snapshot.remaining_tries, config.max_tries
            )));
        }

        let used = (config.max_tries - snapshot.remaining_tries) as usize;
        if snapshot.history.len() != used {
            return Err(MastermindError::configuration(format!(
                "snapshot history has {} checks, but {} tries were used",
                snapshot.history.len(),
                used
            )));
        }
        for (i, record) in snapshot.history.iter().enumerate() {
            let last = i + 1 == snapshot.history.len();
            if record.attempt as usize != i + 1 || (record.matched && !last) {
                return Err(MastermindError::configuration(format!(
                    "snapshot history record {} is out of sequence",
                    i + 1
                )));
            }
        }

        let last_matched = snapshot.history.last().is_some_and(|record| record.matched);
        let consistent = match snapshot.status {
            RoundStatus::InProgress => snapshot.remaining_tries > 0 && !last_matched,
            RoundStatus::Won => last_matched,
            RoundStatus::Lost => snapshot.remaining_tries == 0 && !last_matched,
        };
        if !consistent {
            return Err(MastermindError::configuration(format!(
                "snapshot status {} does not match {} tries remaining",
                snapshot.status, snapshot.remaining_tries
            )));
        }

        Ok(Self {
            config,
            target: snapshot.target,
            remaining_tries: snapshot.remaining_tries,
            status: snapshot.status,
            board: snapshot.board,
            history: snapshot.history,
            rng: GameRng::from_state(&snapshot.rng),
        })
    }
}

impl<R: IndexSource> Round<R> {
    /// Start a round drawing targets from `rng`.
    pub fn with_rng(config: MastermindConfig, mut rng: R) -> Result<Self> {
        config.validate()?;

        let target = generate_sequence(config.palette.colors(), config.code_length, &mut rng)?;
        let board = Board::new(config.resolved_board());
        let remaining_tries = config.max_tries;

        Ok(Self {
            config,
            target,
            remaining_tries,
            status: RoundStatus::InProgress,
            board,
            history: Vector::new(),
            rng,
        })
    }

    /// Draw a duplicate-free sequence of `length` colors from this round's
    /// palette and random source.
    pub fn generate_sequence(&mut self, length: usize) -> Result<Sequence> {
        generate_sequence(self.config.palette.colors(), length, &mut self.rng)
    }

    /// Check a guess against the target.
    ///
    /// Costs one try. Returns the status after the check. Fails without
    /// changing anything when the round is over or the guess does not fit
    /// the round.
    pub fn check(&mut self, guess: &[Color]) -> Result<RoundStatus> {
        if self.status.is_over() {
            tracing::warn!(status = %self.status, "check rejected: round is over");
            return Err(MastermindError::InvalidTransition { status: self.status });
        }
        self.validate_guess(guess).inspect_err(|err| {
            tracing::warn!(%err, "check rejected");
        })?;

        let Some(remaining) = self.remaining_tries.checked_sub(1) else {
            tracing::warn!("check rejected: no tries remaining");
            return Err(MastermindError::InvalidTransition { status: self.status });
        };
        self.remaining_tries = remaining;
        self.status = resolve_check(self.target.as_slice(), guess, self.remaining_tries);
        let matched = self.status == RoundStatus::Won;

        let attempt = self.config.max_tries - self.remaining_tries;
        self.history.push_back(GuessRecord {
            attempt,
            guess: guess.iter().copied().collect(),
            matched,
        });

        match self.status {
            RoundStatus::Won => tracing::info!(attempt, "round won"),
            RoundStatus::Lost => tracing::info!(attempt, "round lost"),
            RoundStatus::InProgress => {
                tracing::debug!(attempt, remaining = self.remaining_tries, "guess missed");
            }
        }

        Ok(self.status)
    }

    /// Check the round's own board.
    pub fn check_board(&mut self) -> Result<RoundStatus> {
        let guess: Sequence = self.board.colors().iter().copied().collect();
        self.check(&guess)
    }

    /// Start over: new target, full tries, empty history, initial board.
    ///
    /// Allowed from any status.
    pub fn restart(&mut self) -> Result<()> {
        self.target = generate_sequence(
            self.config.palette.colors(),
            self.config.code_length,
            &mut self.rng,
        )?;
        self.remaining_tries = self.config.max_tries;
        self.status = RoundStatus::InProgress;
        self.board = Board::new(self.config.resolved_board());
        self.history = Vector::new();

        tracing::debug!(max_tries = self.config.max_tries, "round restarted");
        Ok(())
    }

    /// Put `color` in board slot `slot`.
    pub fn set_slot(&mut self, slot: usize, color: Color) -> Result<()> {
        self.board.set(&self.config.palette, slot, color)
    }

    /// Advance board slot `slot` to the next palette color.
    pub fn cycle_slot(&mut self, slot: usize) -> Result<Color> {
        self.board.cycle(&self.config.palette, slot)
    }

    #[must_use]
    pub fn remaining_tries(&self) -> u32 {
        self.remaining_tries
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// The hidden code. The UI should only reveal it once the round is over.
    #[must_use]
    pub fn target(&self) -> &[Color] {
        &self.target
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Accepted checks this round, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<GuessRecord> {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &MastermindConfig {
        &self.config
    }

    /// Counter text, e.g. "9 tries remaining".
    #[must_use]
    pub fn tries_text(&self) -> String {
        format!("{} tries remaining", self.remaining_tries)
    }

    fn validate_guess(&self, guess: &[Color]) -> Result<()> {
        if guess.len() != self.config.code_length {
            return Err(MastermindError::guess(format!(
                "guess has {} colors, expected {}",
                guess.len(),
                self.config.code_length
            )));
        }
        if let Some(color) = guess.iter().find(|&&c| !self.config.palette.contains(c)) {
            return Err(MastermindError::guess(format!("{color} is not in the palette")));
        }
        Ok(())
    }
}

/// Serializable capture of a round backed by `GameRng`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub config: MastermindConfig,
    pub target: Sequence,
    pub remaining_tries: u32,
    pub status: RoundStatus,
    pub board: Board,
    pub history: Vector<GuessRecord>,
    pub rng: GameRngState,
}
