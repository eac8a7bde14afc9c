//! Core domain types for hangman
//!
//! Pure game logic with no I/O: the secret word, the guess ledger and the
//! game state machine.

mod game;
mod ledger;
mod word;

pub use game::{GameState, GameStatus, MAX_TRIES, Turn};
pub use ledger::{GuessLedger, GuessRejection, HIDDEN};
pub use word::{SecretWord, WordError, fold};
