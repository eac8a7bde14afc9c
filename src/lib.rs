//! Hangman
//!
//! A console word-guessing game: a secret word is picked from a word list and
//! the player uncovers it one letter at a time, with six incorrect guesses to
//! spare.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GameState, GameStatus, SecretWord};
//! use hangman::wordlists::select_word;
//!
//! let words = ["apple", "grape"];
//! let chosen = select_word(&words, 1).unwrap();
//!
//! let mut game = GameState::new(SecretWord::new(chosen.word).unwrap());
//! for letter in ["a", "p", "l", "e"] {
//!     game.guess(letter).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
