//! Formatting utilities and ASCII art for terminal output

use crate::core::MAX_TRIES;

/// Title banner shown when the game starts
pub const BANNER: &str = r"
    Welcome to the game Hangman
      _    _
     | |  | |
     | |__| | __ _ _ __   __ _ _ __ ___   __ _ _ __
     |  __  |/ _` | '_ \ / _` | '_ ` _ \ / _` | '_ \
     | |  | | (_| | | | | (_| | | | | | | (_| | | | |
     |_|  |_|\__,_|_| |_|\__, |_| |_| |_|\__,_|_| |_|
                          __/ |
                         |___/
";

/// Gallows drawings, indexed by the number of incorrect guesses
pub const HANGMAN_STAGES: [&str; MAX_TRIES + 1] = [
    r"
    x-------x
    ",
    r"
    x-------x
    |
    |
    |
    |
    |
    ",
    r"
    x-------x
    |       |
    |       0
    |
    |
    |
    ",
    r"
    x-------x
    |       |
    |       0
    |       |
    |
    |
    ",
    r"
    x-------x
    |       |
    |       0
    |      /|\
    |
    |
    ",
    r"
    x-------x
    |       |
    |       0
    |      /|\
    |      /
    |
    ",
    r"
    x-------x
    |       |
    |       0
    |      /|\
    |      / \
    |
    ",
];

/// Get the drawing for a miss count, clamped to the last stage
#[must_use]
pub fn hangman_stage(misses: usize) -> &'static str {
    HANGMAN_STAGES[misses.min(MAX_TRIES)]
}

/// Join guessed letters for the rejection echo, e.g. `a -> c -> t`
#[must_use]
pub fn guess_trail(letters: &[char]) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Horizontal rule under the banner
#[must_use]
pub fn separator(width: usize) -> String {
    "#".repeat(width)
}
