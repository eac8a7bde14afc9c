//! Terminal output formatting
//!
//! The interactive game presenter, ASCII art and colors, and pretty-printing
//! for command results.

pub mod display;
pub mod formatters;
pub mod palette;

pub use display::{Presenter, print_pick_result, print_replay_result};
pub use palette::{ColorSource, FixedColor, RandomColors};
