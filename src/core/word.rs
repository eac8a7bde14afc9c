//! Secret word representation
//!
//! A `SecretWord` keeps the word exactly as it appeared in the word list for
//! display, and compares letters case-insensitively.

use std::fmt;

/// The word the player has to uncover
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
}

/// Error type for words that cannot be played
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAlphabetic(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Secret word must not be empty"),
            Self::NonAlphabetic(c) => {
                write!(f, "Secret word must contain only letters, found '{c}'")
            }
        }
    }
}

impl std::error::Error for WordError {}

/// Fold a letter to the form used for every comparison in the game
#[inline]
#[must_use]
pub fn fold(letter: char) -> char {
    letter.to_lowercase().next().unwrap_or(letter)
}

impl SecretWord {
    /// Create a new secret word
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - Any character is not alphabetic
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("Apple").unwrap();
    /// assert_eq!(word.text(), "Apple");
    /// assert!(word.contains('a'));
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("don't").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_alphabetic()) {
            return Err(WordError::NonAlphabetic(bad));
        }

        Ok(Self { text })
    }

    /// Get the word as originally written
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Always false; construction rejects empty words
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over the letters in their original case
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }

    /// Check if the word contains a letter, ignoring case
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        let letter = fold(letter);
        self.text.chars().any(|c| fold(c) == letter)
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
