//! Guessed-letter bookkeeping
//!
//! The ledger validates raw guesses and remembers accepted letters in the
//! order they were played. Letters are stored lowercase.

use super::word::{SecretWord, fold};
use std::fmt;

/// Placeholder shown for letters that have not been uncovered
pub const HIDDEN: char = '_';

/// Why a guess was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessRejection {
    /// Not exactly one alphabetic character
    InvalidLetter,
    /// The letter was guessed earlier in this game
    AlreadyGuessed,
    /// The game is already won or lost
    GameOver,
}

impl fmt::Display for GuessRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLetter => write!(f, "Not valid letter. Try again."),
            Self::AlreadyGuessed => write!(f, "You already guessed this letter. Try again."),
            Self::GameOver => write!(f, "The game is over."),
        }
    }
}

impl std::error::Error for GuessRejection {}

/// Letters guessed so far, in play order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessLedger {
    letters: Vec<char>,
}

impl GuessLedger {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            letters: Vec::new(),
        }
    }

    /// Validate a raw guess without recording it
    ///
    /// Returns the folded letter the guess would record.
    ///
    /// # Errors
    /// - `GuessRejection::InvalidLetter` unless the input is exactly one
    ///   alphabetic character
    /// - `GuessRejection::AlreadyGuessed` if the letter, in any case, is
    ///   already in the ledger
    pub fn check(&self, raw: &str) -> Result<char, GuessRejection> {
        let mut chars = raw.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            return Err(GuessRejection::InvalidLetter);
        };

        if !letter.is_alphabetic() {
            return Err(GuessRejection::InvalidLetter);
        }

        let letter = fold(letter);
        if self.contains(letter) {
            return Err(GuessRejection::AlreadyGuessed);
        }

        Ok(letter)
    }

    /// Boolean form of [`check`](Self::check)
    #[must_use]
    pub fn is_valid(&self, raw: &str) -> bool {
        self.check(raw).is_ok()
    }

    /// Validate and record a raw guess
    ///
    /// On rejection the ledger is left untouched.
    ///
    /// # Errors
    /// Same as [`check`](Self::check).
    pub fn record(&mut self, raw: &str) -> Result<char, GuessRejection> {
        let letter = self.check(raw)?;
        self.letters.push(letter);
        Ok(letter)
    }

    /// Check whether a letter has been guessed, ignoring case
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&fold(letter))
    }

    /// Letters in the order they were guessed
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Letters in alphabetical order
    #[must_use]
    pub fn sorted(&self) -> Vec<char> {
        let mut sorted = self.letters.clone();
        sorted.sort_unstable();
        sorted
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Render the secret with unguessed letters masked
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GuessLedger, SecretWord};
    ///
    /// let secret = SecretWord::new("Cat").unwrap();
    /// let mut ledger = GuessLedger::new();
    /// ledger.record("c").unwrap();
    /// assert_eq!(ledger.reveal(&secret), "C _ _");
    /// ```
    #[must_use]
    pub fn reveal(&self, secret: &SecretWord) -> String {
        let mut shown = String::with_capacity(secret.text().len() * 2);
        for (i, c) in secret.letters().enumerate() {
            if i > 0 {
                shown.push(' ');
            }
            shown.push(if self.contains(c) { c } else { HIDDEN });
        }
        shown
    }

    /// True once every letter of the secret has been guessed
    #[must_use]
    pub fn covers(&self, secret: &SecretWord) -> bool {
        secret.letters().all(|c| self.contains(c))
    }
}
