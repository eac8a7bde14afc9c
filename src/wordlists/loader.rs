//! Word list loading utilities
//!
//! Reads whitespace-separated word files and records the chosen word.

use super::WordListError;
use log::{debug, info};
use std::fs;
use std::io;
use std::path::Path;

/// Where the chosen word is written unless configured otherwise
pub const DEFAULT_FOUND_LOG: &str = "found.txt";

/// Load words from a file
///
/// Every whitespace-separated token is a candidate word; no other
/// validation is done.
///
/// # Errors
///
/// Returns `WordListError::NotFound` if the file does not exist and
/// `WordListError::Unreadable` if it cannot be read.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(WordListError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| WordListError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let words = load_from_str(&content);
    info!("loaded {} words from {}", words.len(), path.display());

    Ok(words)
}

/// Split in-memory text into candidate words
///
/// # Examples
/// ```
/// use hangman::wordlists::load_from_str;
///
/// let words = load_from_str("apple grape\n  melon\n");
/// assert_eq!(words, vec!["apple", "grape", "melon"]);
/// ```
#[must_use]
pub fn load_from_str(content: &str) -> Vec<String> {
    content.split_whitespace().map(str::to_string).collect()
}

/// Record the chosen word, replacing whatever the file held before
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn record_selection<P: AsRef<Path>>(path: P, word: &str) -> io::Result<()> {
    let path = path.as_ref();
    fs::write(path, format!("{word}\n"))?;
    debug!("recorded '{word}' to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_from_str_splits_on_any_whitespace() {
        let words = load_from_str("apple  grape\tmelon\n\nkiwi\r\n");
        assert_eq!(words, vec!["apple", "grape", "melon", "kiwi"]);
    }

    #[test]
    fn load_from_str_keeps_duplicates_and_case() {
        let words = load_from_str("Apple apple apple");
        assert_eq!(words.len(), 3);
        assert_eq!(words[0], "Apple");
    }

    #[test]
    fn load_from_str_empty() {
        assert!(load_from_str("").is_empty());
        assert!(load_from_str("  \n\t ").is_empty());
    }

    #[test]
    fn load_from_file_reads_tokens() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "apple grape\nmelon\n").unwrap();

        let words = load_from_file(&path).unwrap();
        assert_eq!(words, vec!["apple", "grape", "melon"]);
    }

    #[test]
    fn load_from_file_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        match load_from_file(&path) {
            Err(WordListError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn load_from_file_directory_is_unreadable() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            load_from_file(dir.path()),
            Err(WordListError::Unreadable { .. })
        ));
    }

    #[test]
    fn record_selection_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("found.txt");

        record_selection(&path, "apple").unwrap();
        record_selection(&path, "kiwi").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "kiwi\n");
    }
}
