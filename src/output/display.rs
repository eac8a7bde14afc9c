//! Display functions for the game and command results

use super::formatters::{BANNER, guess_trail, hangman_stage, separator};
use super::palette::ColorSource;
use crate::commands::{PickResult, ReplayResult};
use crate::core::{
    GameState, GameStatus, GuessLedger, GuessRejection, MAX_TRIES, SecretWord, Turn,
};
use colored::Colorize;
use std::io::{self, Write};

/// Writes the interactive game to a terminal (or any writer)
pub struct Presenter<W: Write, C: ColorSource> {
    out: W,
    colors: C,
}

impl<W: Write, C: ColorSource> Presenter<W, C> {
    #[must_use]
    pub const fn new(out: W, colors: C) -> Self {
        Self { out, colors }
    }

    /// Give back the writer, e.g. to inspect captured output
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn colorful(&mut self, text: &str) -> io::Result<()> {
        let color = self.colors.next_color();
        writeln!(self.out, "{}", text.color(color))
    }

    /// Title banner, try budget and separator
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "{BANNER}")?;
        writeln!(self.out, "{MAX_TRIES}\n")?;
        writeln!(self.out, "{}", separator(62))
    }

    /// Write a prompt label and flush so it shows before input is read
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn prompt(&mut self, label: &str) -> io::Result<()> {
        write!(self.out, "{label}: ")?;
        self.out.flush()
    }

    /// Plain line of text
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn notice(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Word list summary, starting board and empty gallows
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn game_start(&mut self, unique_count: usize, game: &GameState) -> io::Result<()> {
        writeln!(self.out, "The word list contains {unique_count} unique words.")?;
        writeln!(self.out, "{}", game.reveal())?;
        self.colorful(hangman_stage(game.misses()))
    }

    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn attempts_left(&mut self, remaining: usize) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "You have {remaining} attempts left.")
    }

    /// Diagnostic for a refused guess, then the letters tried so far
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn rejection(&mut self, rejection: GuessRejection, ledger: &GuessLedger) -> io::Result<()> {
        writeln!(self.out, "{rejection}")?;
        self.colorful("X")?;
        self.colorful(&guess_trail(&ledger.sorted()))
    }

    /// Feedback for an accepted guess
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn turn(&mut self, turn: &Turn, game: &GameState) -> io::Result<()> {
        if turn.hit {
            self.colorful(&format!("Good guess: {}", game.reveal()))
        } else {
            self.colorful(hangman_stage(game.misses()))?;
            writeln!(self.out, "Incorrect guess!")
        }
    }

    /// Closing line for a finished game
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn game_over(&mut self, status: GameStatus, secret: &SecretWord) -> io::Result<()> {
        match status {
            GameStatus::Won => writeln!(
                self.out,
                "{}",
                "Congratulations! You won!".bright_green()
            ),
            GameStatus::Lost => writeln!(
                self.out,
                "Sorry, you ran out of attempts. The word was: {secret}"
            ),
            GameStatus::InProgress => Ok(()),
        }
    }
}

/// Print the result of picking a word
pub fn print_pick_result(result: &PickResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Chosen word: {}",
        result.word.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());
    println!("   Entry:         {} of {}", result.index + 1, result.total);
    println!("   Unique words:  {}", result.unique_count);
    println!("   Recorded to:   {}", result.found_log.display());
}

/// Print the turn-by-turn result of a replayed game
pub fn print_replay_result(result: &ReplayResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Replaying: {}",
        result.secret.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        match &step.outcome {
            Ok(turn) => {
                let mark = if turn.hit {
                    "hit ".green()
                } else {
                    "miss".red()
                };
                println!(
                    "\nTurn {}: {} {}  {}  ({} tries left)",
                    i + 1,
                    step.input,
                    mark,
                    step.reveal,
                    turn.remaining
                );
            }
            Err(rejection) => {
                println!(
                    "\nTurn {}: {} {}",
                    i + 1,
                    step.input,
                    rejection.to_string().yellow()
                );
            }
        }
    }

    println!();
    match result.status {
        GameStatus::Won => println!(
            "{}",
            format!("✅ Won with {} tries to spare", result.remaining)
                .green()
                .bold()
        ),
        GameStatus::Lost => println!("{}", "❌ Lost: out of tries".red().bold()),
        GameStatus::InProgress => {
            let reveal = result.steps.last().map_or("", |s| s.reveal.as_str());
            println!("{}", format!("… Still in progress: {reveal}").bright_black());
        }
    }
    if result.ignored > 0 {
        println!("   ({} guesses after the game ended were ignored)", result.ignored);
    }
}
