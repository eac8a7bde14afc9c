//! Interactive game mode
//!
//! Prompts for a word file and position, then runs the guessing loop.

use crate::core::{GameState, GameStatus, SecretWord};
use crate::output::{ColorSource, Presenter};
use crate::wordlists::{DEFAULT_FOUND_LOG, load_from_file, record_selection, select_word};
use anyhow::{Result, anyhow};
use log::{info, warn};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Configuration for an interactive game
///
/// Values left as `None` are asked for on the input stream.
#[derive(Debug, Clone)]
pub struct PlayConfig {
    pub words_path: Option<PathBuf>,
    pub position: Option<i64>,
    pub found_log: PathBuf,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            words_path: None,
            position: None,
            found_log: PathBuf::from(DEFAULT_FOUND_LOG),
        }
    }
}

/// How an interactive game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The game reached a terminal state
    Finished { status: GameStatus, secret: String },
    /// No game could be started; the reason was shown to the player
    Aborted(String),
    /// The input stream ended before the game did
    InputClosed,
}

/// Run one interactive game
///
/// # Errors
///
/// Returns an error only for I/O failures on the input or output streams.
/// Problems with the word list are reported to the player and end the game
/// as [`PlayOutcome::Aborted`].
pub fn run_play<R, W, C>(
    config: &PlayConfig,
    mut input: R,
    presenter: &mut Presenter<W, C>,
) -> Result<PlayOutcome>
where
    R: BufRead,
    W: Write,
    C: ColorSource,
{
    presenter.banner()?;

    let path = match &config.words_path {
        Some(path) => path.clone(),
        None => match read_answer(&mut input, presenter, "Enter path to word file")? {
            Some(answer) => PathBuf::from(answer),
            None => return Ok(PlayOutcome::InputClosed),
        },
    };

    let position = match config.position {
        Some(position) => position,
        None => match read_position(&mut input, presenter)? {
            Some(position) => position,
            None => return Ok(PlayOutcome::InputClosed),
        },
    };

    let (unique_count, mut game) = match prepare_game(&path, position, &config.found_log) {
        Ok(prepared) => prepared,
        Err(e) => {
            let reason = e.to_string();
            presenter.notice(&reason)?;
            return Ok(PlayOutcome::Aborted(reason));
        }
    };

    presenter.game_start(unique_count, &game)?;

    while !game.is_over() {
        presenter.attempts_left(game.remaining_tries())?;

        let Some(raw) = read_line(&mut input, presenter, "Guess a letter")? else {
            info!("input closed mid-game");
            return Ok(PlayOutcome::InputClosed);
        };

        match game.guess(&raw) {
            Ok(turn) => presenter.turn(&turn, &game)?,
            Err(rejection) => presenter.rejection(rejection, game.ledger())?,
        }
    }

    presenter.game_over(game.status(), game.secret())?;

    Ok(PlayOutcome::Finished {
        status: game.status(),
        secret: game.secret().text().to_string(),
    })
}

/// Load, select and record the secret word
fn prepare_game(path: &Path, position: i64, found_log: &Path) -> Result<(usize, GameState)> {
    let words = load_from_file(path)?;
    let selection = select_word(&words, position)?;

    if let Err(e) = record_selection(found_log, selection.word) {
        warn!("could not record chosen word to {}: {e}", found_log.display());
    }

    let secret = SecretWord::new(selection.word).map_err(|e| {
        anyhow!(
            "Word #{} ('{}') cannot be played: {e}",
            selection.index + 1,
            selection.word
        )
    })?;

    Ok((selection.unique_count, GameState::new(secret)))
}

/// Ask until the answer parses as a position
fn read_position<R, W, C>(
    input: &mut R,
    presenter: &mut Presenter<W, C>,
) -> io::Result<Option<i64>>
where
    R: BufRead,
    W: Write,
    C: ColorSource,
{
    loop {
        let Some(answer) = read_answer(input, presenter, "Enter word location")? else {
            return Ok(None);
        };
        match answer.parse() {
            Ok(position) => return Ok(Some(position)),
            Err(_) => presenter.notice("Not a valid number. Try again.")?,
        }
    }
}

/// Prompt and read one line with surrounding whitespace trimmed
fn read_answer<R, W, C>(
    input: &mut R,
    presenter: &mut Presenter<W, C>,
    label: &str,
) -> io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
    C: ColorSource,
{
    Ok(read_line(input, presenter, label)?.map(|line| line.trim().to_string()))
}

/// Prompt and read one line without its line ending; `None` at end of input
///
/// Other whitespace is kept, so a guess like `" a"` stays invalid.
fn read_line<R, W, C>(
    input: &mut R,
    presenter: &mut Presenter<W, C>,
    label: &str,
) -> io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
    C: ColorSource,
{
    presenter.prompt(label)?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::FixedColor;
    use colored::Color;
    use std::fs;
    use std::io::Cursor;
    use tempfile::{TempDir, tempdir};

    struct Fixture {
        dir: TempDir,
        words: PathBuf,
    }

    impl Fixture {
        fn new(content: &str) -> Self {
            let dir = tempdir().unwrap();
            let words = dir.path().join("words.txt");
            fs::write(&words, content).unwrap();
            Self { dir, words }
        }

        fn found_log(&self) -> PathBuf {
            self.dir.path().join("found.txt")
        }

        fn config(&self) -> PlayConfig {
            PlayConfig {
                words_path: None,
                position: None,
                found_log: self.found_log(),
            }
        }
    }

    fn play(config: &PlayConfig, input: &str) -> (PlayOutcome, String) {
        let mut presenter = Presenter::new(Vec::new(), FixedColor(Color::Blue));
        let outcome = run_play(config, Cursor::new(input.to_string()), &mut presenter).unwrap();
        let out = String::from_utf8(presenter.into_inner()).unwrap();
        (outcome, out)
    }

    #[test]
    fn prompts_for_path_and_position() {
        let fixture = Fixture::new("cat dog");
        let input = format!("{}\n1\nc\na\nt\n", fixture.words.display());

        let (outcome, out) = play(&fixture.config(), &input);

        assert_eq!(
            outcome,
            PlayOutcome::Finished {
                status: GameStatus::Won,
                secret: "cat".to_string()
            }
        );
        assert!(out.contains("Enter path to word file: "));
        assert!(out.contains("Enter word location: "));
        assert!(out.contains("Good guess: c a t"));
        assert!(out.contains("Congratulations! You won!"));
        assert_eq!(fs::read_to_string(fixture.found_log()).unwrap(), "cat\n");
    }

    #[test]
    fn configured_values_skip_prompts() {
        let fixture = Fixture::new("cat dog");
        let config = PlayConfig {
            words_path: Some(fixture.words.clone()),
            position: Some(2),
            ..fixture.config()
        };

        let (outcome, out) = play(&config, "d\no\ng\n");

        assert!(matches!(outcome, PlayOutcome::Finished { status: GameStatus::Won, .. }));
        assert!(!out.contains("Enter path to word file"));
        assert!(!out.contains("Enter word location"));
    }

    #[test]
    fn bad_position_reprompts() {
        let fixture = Fixture::new("cat dog");
        let input = format!("{}\nabc\n0\n", fixture.words.display());

        let (outcome, out) = play(&fixture.config(), &input);

        assert!(out.contains("Not a valid number. Try again."));
        // Position 0 wraps to the last word
        assert_eq!(fs::read_to_string(fixture.found_log()).unwrap(), "dog\n");
        assert_eq!(outcome, PlayOutcome::InputClosed);
    }

    #[test]
    fn missing_file_aborts_before_guessing() {
        let fixture = Fixture::new("");
        let missing = fixture.dir.path().join("missing.txt");
        let input = format!("{}\n1\na\n", missing.display());

        let (outcome, out) = play(&fixture.config(), &input);

        let expected = format!("The file '{}' does not exist.", missing.display());
        assert_eq!(outcome, PlayOutcome::Aborted(expected.clone()));
        assert!(out.contains(&expected));
        assert!(!out.contains("Guess a letter"));
    }

    #[test]
    fn empty_file_aborts() {
        let fixture = Fixture::new("   \n");
        let config = PlayConfig {
            words_path: Some(fixture.words.clone()),
            position: Some(1),
            ..fixture.config()
        };

        let (outcome, _) = play(&config, "");
        assert_eq!(outcome, PlayOutcome::Aborted("The word list is empty.".to_string()));
    }

    #[test]
    fn unplayable_word_aborts() {
        let fixture = Fixture::new("don't");
        let config = PlayConfig {
            words_path: Some(fixture.words.clone()),
            position: Some(1),
            ..fixture.config()
        };

        let (outcome, _) = play(&config, "d\n");
        match outcome {
            PlayOutcome::Aborted(reason) => assert!(reason.contains("cannot be played")),
            other => panic!("Expected Aborted, got {other:?}"),
        }
    }

    #[test]
    fn losing_game_reveals_word() {
        let fixture = Fixture::new("cat");
        let config = PlayConfig {
            words_path: Some(fixture.words.clone()),
            position: Some(1),
            ..fixture.config()
        };

        let (outcome, out) = play(&config, "z\nx\nq\nw\ny\nj\n");

        assert!(matches!(outcome, PlayOutcome::Finished { status: GameStatus::Lost, .. }));
        assert_eq!(out.matches("Incorrect guess!").count(), 6);
        assert!(out.contains("You have 1 attempts left."));
        assert!(out.contains("Sorry, you ran out of attempts. The word was: cat"));
    }

    #[test]
    fn rejected_guesses_cost_nothing() {
        let fixture = Fixture::new("cat");
        let config = PlayConfig {
            words_path: Some(fixture.words.clone()),
            position: Some(1),
            ..fixture.config()
        };

        let (outcome, out) = play(&config, "c\nC\nab\n7\n");

        assert_eq!(outcome, PlayOutcome::InputClosed);
        assert!(out.contains("You already guessed this letter. Try again."));
        assert_eq!(out.matches("Not valid letter. Try again.").count(), 2);
        assert!(!out.contains("You have 5 attempts left."));
    }

    #[test]
    fn padded_guess_is_not_a_letter() {
        let fixture = Fixture::new("cat");
        let config = PlayConfig {
            words_path: Some(fixture.words.clone()),
            position: Some(1),
            ..fixture.config()
        };

        let (outcome, out) = play(&config, " a\na \r\na\r\n");

        assert_eq!(outcome, PlayOutcome::InputClosed);
        assert_eq!(out.matches("Not valid letter. Try again.").count(), 2);
        // Only the bare letter, with its CRLF ending stripped, is accepted
        assert_eq!(out.matches("Good guess: _ a _").count(), 1);
    }

    #[test]
    fn closed_input_before_path() {
        let fixture = Fixture::new("cat");
        let (outcome, _) = play(&fixture.config(), "");
        assert_eq!(outcome, PlayOutcome::InputClosed);
    }
}
