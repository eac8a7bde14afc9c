//! Secret word selection
//!
//! Picks a word by 1-based position with circular wraparound.

use super::WordListError;
use log::info;
use rustc_hash::FxHashSet;

/// A word chosen from a list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    /// Number of distinct entries in the list (not letters in the word)
    pub unique_count: usize,
    /// Zero-based index of the chosen entry
    pub index: usize,
    /// The chosen entry
    pub word: &'a str,
}

/// Choose the word at a 1-based `position`, wrapping around the list
///
/// Any integer is accepted: position 1 is the first word, position
/// `len` the last, and 0, negatives or values past the end wrap around.
///
/// # Errors
///
/// Returns `WordListError::Empty` if `words` is empty.
///
/// # Examples
/// ```
/// use hangman::wordlists::select_word;
///
/// let words = ["apple", "grape"];
/// let chosen = select_word(&words, 3).unwrap();
/// assert_eq!(chosen.word, "apple");
/// assert_eq!(chosen.unique_count, 2);
/// ```
pub fn select_word<S: AsRef<str>>(
    words: &[S],
    position: i64,
) -> Result<Selection<'_>, WordListError> {
    if words.is_empty() {
        return Err(WordListError::Empty);
    }

    // Widen so that `position - 1` cannot overflow at i64::MIN
    let len = words.len() as i128;
    let index = (i128::from(position) - 1).rem_euclid(len) as usize;
    let word = words[index].as_ref();

    let unique_count = words
        .iter()
        .map(AsRef::as_ref)
        .collect::<FxHashSet<&str>>()
        .len();

    info!("selected word #{} of {} ({unique_count} unique)", index + 1, words.len());

    Ok(Selection {
        unique_count,
        index,
        word,
    })
}
