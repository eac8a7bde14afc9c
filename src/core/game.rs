//! Game state machine
//!
//! Applies guesses to a secret word and decides when the game is won or lost.

use super::ledger::{GuessLedger, GuessRejection};
use super::word::SecretWord;
use log::debug;

/// Number of incorrect guesses allowed before the game is lost
pub const MAX_TRIES: usize = 6;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Outcome of one accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// The recorded (lowercase) letter
    pub letter: char,
    /// Whether the letter occurs in the secret
    pub hit: bool,
    /// Tries left after this guess
    pub remaining: usize,
    /// Status after this guess
    pub status: GameStatus,
}

/// A single hangman game
#[derive(Debug, Clone)]
pub struct GameState {
    secret: SecretWord,
    ledger: GuessLedger,
    remaining: usize,
    status: GameStatus,
}

impl GameState {
    #[must_use]
    pub const fn new(secret: SecretWord) -> Self {
        Self {
            secret,
            ledger: GuessLedger::new(),
            remaining: MAX_TRIES,
            status: GameStatus::InProgress,
        }
    }

    /// Apply a raw guess
    ///
    /// Rejected guesses leave the state untouched and cost nothing. A miss
    /// costs one try. The win check runs before the loss check, so a guess
    /// that completes the word always wins.
    ///
    /// # Errors
    /// Returns the `GuessRejection` explaining why the guess was refused.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GameState, GameStatus, SecretWord};
    ///
    /// let mut game = GameState::new(SecretWord::new("ox").unwrap());
    /// game.guess("o").unwrap();
    /// let turn = game.guess("x").unwrap();
    /// assert_eq!(turn.status, GameStatus::Won);
    /// ```
    pub fn guess(&mut self, raw: &str) -> Result<Turn, GuessRejection> {
        if self.status.is_over() {
            return Err(GuessRejection::GameOver);
        }

        let letter = self.ledger.record(raw)?;
        let hit = self.secret.contains(letter);

        if !hit {
            self.remaining = self.remaining.saturating_sub(1);
        }

        if self.ledger.covers(&self.secret) {
            self.status = GameStatus::Won;
        } else if self.remaining == 0 {
            self.status = GameStatus::Lost;
        }

        debug!(
            "guess '{letter}': hit={hit}, remaining={}, status={:?}",
            self.remaining, self.status
        );

        Ok(Turn {
            letter,
            hit,
            remaining: self.remaining,
            status: self.status,
        })
    }

    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }

    #[must_use]
    pub const fn ledger(&self) -> &GuessLedger {
        &self.ledger
    }

    #[must_use]
    pub const fn remaining_tries(&self) -> usize {
        self.remaining
    }

    /// Incorrect guesses so far, which is also the hangman stage to draw
    #[must_use]
    pub const fn misses(&self) -> usize {
        MAX_TRIES - self.remaining
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Current reveal pattern of the secret
    #[must_use]
    pub fn reveal(&self) -> String {
        self.ledger.reveal(&self.secret)
    }
}
