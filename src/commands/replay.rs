//! Replay command
//!
//! Applies a fixed sequence of guesses to a known word and reports every turn.

use crate::core::{GameState, GameStatus, GuessRejection, SecretWord, Turn, WordError};

/// Configuration for replaying a game
pub struct ReplayConfig {
    pub word: String,
    pub guesses: Vec<String>,
}

impl ReplayConfig {
    /// Build a config from a guess string
    ///
    /// Comma-separated input is split on commas (so multi-character entries
    /// reach the game and get rejected); anything else is one guess per
    /// character.
    #[must_use]
    pub fn new(word: String, guesses: &str) -> Self {
        let guesses = if guesses.contains(',') {
            guesses.split(',').map(|g| g.trim().to_string()).collect()
        } else {
            guesses
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(String::from)
                .collect()
        };
        Self { word, guesses }
    }
}

/// One replayed guess
pub struct ReplayStep {
    pub input: String,
    pub outcome: Result<Turn, GuessRejection>,
    pub reveal: String,
}

/// Result of replaying a game
pub struct ReplayResult {
    pub secret: String,
    pub steps: Vec<ReplayStep>,
    pub status: GameStatus,
    pub remaining: usize,
    /// Guesses left unplayed because the game had already ended
    pub ignored: usize,
}

/// Replay the configured guesses against the configured word
///
/// # Errors
///
/// Returns `WordError` if the word cannot be played.
pub fn replay_guesses(config: ReplayConfig) -> Result<ReplayResult, WordError> {
    let mut game = GameState::new(SecretWord::new(config.word.as_str())?);
    let mut steps = Vec::with_capacity(config.guesses.len());
    let mut ignored = 0;

    for input in config.guesses {
        if game.is_over() {
            ignored += 1;
            continue;
        }
        let outcome = game.guess(&input);
        steps.push(ReplayStep {
            input,
            outcome,
            reveal: game.reveal(),
        });
    }

    Ok(ReplayResult {
        secret: config.word,
        steps,
        status: game.status(),
        remaining: game.remaining_tries(),
        ignored,
    })
}
