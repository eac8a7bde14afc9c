//! Hangman - CLI
//!
//! Interactive hangman plus helper commands for picking and replaying words.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangman::{
    commands::{PlayConfig, ReplayConfig, pick_word, replay_guesses, run_play},
    output::{Presenter, RandomColors, print_pick_result, print_replay_result},
    wordlists::{DEFAULT_FOUND_LOG, WordListError},
};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the secret word one letter at a time",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// File the chosen word is written to
    #[arg(long, global = true, default_value = DEFAULT_FOUND_LOG)]
    found_log: PathBuf,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game (default - prompts for anything not given)
    Play {
        /// Path to a whitespace-separated word file
        #[arg(short, long)]
        words: Option<PathBuf>,

        /// 1-based word location; wraps around the list
        #[arg(short, long, allow_negative_numbers = true)]
        position: Option<i64>,
    },

    /// Choose a word from a file without playing
    Pick {
        /// Path to a whitespace-separated word file
        path: PathBuf,

        /// 1-based word location; wraps around the list
        #[arg(allow_negative_numbers = true)]
        position: i64,
    },

    /// Apply a sequence of guesses to a known word
    Replay {
        /// The secret word
        word: String,

        /// Guesses, e.g. "cat" or "c,a,t"
        guesses: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        words: None,
        position: None,
    });

    match command {
        Commands::Play { words, position } => {
            let config = PlayConfig {
                words_path: words,
                position,
                found_log: cli.found_log,
            };
            run_play_command(&config)
        }
        Commands::Pick { path, position } => run_pick_command(&path, position, &cli.found_log),
        Commands::Replay { word, guesses } => {
            let result = replay_guesses(ReplayConfig::new(word, &guesses))?;
            print_replay_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(config: &PlayConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut presenter = Presenter::new(io::stdout(), RandomColors);
    run_play(config, stdin.lock(), &mut presenter)?;
    Ok(())
}

/// Word list problems are reported like `play` does, not as a failed exit
fn run_pick_command(path: &Path, position: i64, found_log: &Path) -> Result<()> {
    match pick_word(path, position, found_log) {
        Ok(result) => {
            print_pick_result(&result);
            Ok(())
        }
        Err(e) if e.downcast_ref::<WordListError>().is_some() => {
            println!("{e}");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_accepts_negative_position() {
        let cli = Cli::try_parse_from(["hangman", "pick", "w.txt", "-1"]).unwrap();
        match cli.command {
            Some(Commands::Pick { path, position }) => {
                assert_eq!(path, PathBuf::from("w.txt"));
                assert_eq!(position, -1);
            }
            _ => panic!("Expected Pick"),
        }
    }

    #[test]
    fn play_accepts_negative_position_flag() {
        let cli = Cli::try_parse_from(["hangman", "play", "-p", "-3"]).unwrap();
        match cli.command {
            Some(Commands::Play { words, position }) => {
                assert_eq!(words, None);
                assert_eq!(position, Some(-3));
            }
            _ => panic!("Expected Play"),
        }
    }

    #[test]
    fn global_options_default() {
        let cli = Cli::try_parse_from(["hangman"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.found_log, PathBuf::from(DEFAULT_FOUND_LOG));
        assert!(!cli.no_color);
    }

    #[test]
    fn pick_missing_file_exits_normally() {
        let dir = tempfile::tempdir().unwrap();
        let found = dir.path().join("found.txt");

        let result = run_pick_command(&dir.path().join("missing.txt"), 1, &found);

        assert!(result.is_ok());
        assert!(!found.exists());
    }

    #[test]
    fn pick_unwritable_log_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let words = dir.path().join("words.txt");
        std::fs::write(&words, "apple").unwrap();

        // A directory cannot be written as the found log
        assert!(run_pick_command(&words, 1, dir.path()).is_err());
    }
}
