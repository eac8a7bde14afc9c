//! Command implementations

pub mod pick;
pub mod play;
pub mod replay;

pub use pick::{PickResult, pick_word};
pub use play::{PlayConfig, PlayOutcome, run_play};
pub use replay::{ReplayConfig, ReplayResult, ReplayStep, replay_guesses};
