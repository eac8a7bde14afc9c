//! Word lists for hangman
//!
//! Loading candidate words from disk, choosing the secret word, and
//! recording which word was chosen.

pub mod loader;
mod selection;

pub use loader::{DEFAULT_FOUND_LOG, load_from_file, load_from_str, record_selection};
pub use selection::{Selection, select_word};

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that stop a game before the first guess
#[derive(Debug)]
pub enum WordListError {
    /// The word file does not exist
    NotFound(PathBuf),
    /// The word file exists but could not be read
    Unreadable { path: PathBuf, source: io::Error },
    /// There are no words to choose from
    Empty,
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "The file '{}' does not exist.", path.display())
            }
            Self::Unreadable { path, source } => {
                write!(f, "The file '{}' could not be read: {source}", path.display())
            }
            Self::Empty => write!(f, "The word list is empty."),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
            _ => None,
        }
    }
}
