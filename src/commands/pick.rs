//! Word picking command
//!
//! Chooses a word from a file without playing and records it.

use crate::wordlists::{load_from_file, record_selection, select_word};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Result of picking a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickResult {
    pub word: String,
    pub index: usize,
    pub total: usize,
    pub unique_count: usize,
    pub found_log: PathBuf,
}

/// Choose the word at `position` in the file at `path` and record it
///
/// # Errors
///
/// Returns an error if the word file is missing, unreadable or empty, or if
/// the found log cannot be written.
pub fn pick_word(path: &Path, position: i64, found_log: &Path) -> Result<PickResult> {
    let words = load_from_file(path)?;
    let selection = select_word(&words, position)?;

    record_selection(found_log, selection.word)
        .with_context(|| format!("Failed to record word to {}", found_log.display()))?;

    Ok(PickResult {
        word: selection.word.to_string(),
        index: selection.index,
        total: words.len(),
        unique_count: selection.unique_count,
        found_log: found_log.to_path_buf(),
    })
}
