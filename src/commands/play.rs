//! Interactive hard-mode game
//!
//! Reads one guess per line and answers with the clue row. Guesses that are
//! not words or that break hard mode are rejected without using a turn.

use crate::core::Word;
use crate::output::formatters::colored_guess;
use crate::simulation::{Game, GameStatus};
use anyhow::{Context, Result};
use log::debug;
use std::io::{BufRead, Write};

/// Read errors tolerated before giving up
pub const MAX_READ_FAILURES: usize = 10;

/// How an interactive game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Won { guesses: usize },
    /// No word in the list is consistent with the clues any more
    NoCandidates { guesses: usize },
    /// Input ended
    Quit,
    /// Too many read errors
    GaveUp,
}

/// Play one game against `target`, reading guesses from `input`
///
/// # Errors
///
/// Returns an error if writing to `output` fails.
pub fn run_play<R: BufRead, W: Write>(
    target: Word,
    valid: &[Word],
    mut input: R,
    output: &mut W,
) -> Result<PlayOutcome> {
    debug!("Interactive game started against {} valid words", valid.len());

    let mut game = Game::new(target, valid);
    let mut failures = 0;
    let mut line = String::new();

    loop {
        if let GameStatus::Abandoned(_) = game.status() {
            writeln!(output, "No valid words remain.")?;
            return Ok(PlayOutcome::NoCandidates {
                guesses: game.turns(),
            });
        }

        let turn = game.turns() + 1;
        writeln!(output, "Valid words: {}", game.candidates().len())?;
        write!(output, "Guess {turn}: ")?;
        output.flush().context("flushing prompt")?;

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => {
                writeln!(output)?;
                return Ok(PlayOutcome::Quit);
            }
            Ok(_) => {}
            Err(e) => {
                writeln!(output, "Read failed: {e}")?;
                failures += 1;
                if failures > MAX_READ_FAILURES {
                    return Ok(PlayOutcome::GaveUp);
                }
                continue;
            }
        }

        let text = line.trim();
        let Ok(guess) = Word::new(text) else {
            writeln!(output, "Invalid guess: {text}")?;
            continue;
        };
        if let Some(problem) = game.state().hard_mode_violation(&guess) {
            writeln!(output, "Hard mode: {problem}")?;
            continue;
        }

        let clues = game.guess(&guess);
        writeln!(
            output,
            "Clues {turn}: {clues}  {}",
            colored_guess(&guess, &clues)
        )?;

        if game.status() == GameStatus::Won {
            writeln!(output, "You won!")?;
            return Ok(PlayOutcome::Won { guesses: turn });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn play(target: &str, valid: &[&str], input: &str) -> (PlayOutcome, String) {
        colored::control::set_override(false);
        let valid = words(valid);
        let mut output = Vec::new();
        let outcome = run_play(
            Word::new(target).unwrap(),
            &valid,
            Cursor::new(input.as_bytes()),
            &mut output,
        )
        .unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn win_in_two() {
        let (outcome, text) = play("crane", &["crane", "trace", "slate"], "trace\ncrane\n");
        assert_eq!(outcome, PlayOutcome::Won { guesses: 2 });
        assert!(text.contains("Clues 1: _GGYG"));
        assert!(text.contains("Clues 2: GGGGG"));
        assert!(text.contains("You won!"));
        assert!(text.contains("Valid words: 3"));
        assert!(text.contains("Valid words: 1"));
    }

    #[test]
    fn invalid_and_hard_mode_guesses_do_not_use_a_turn() {
        let (outcome, text) = play(
            "crane",
            &["crane", "trace", "slate"],
            "tr\ntrace\nslate\ncrane\n",
        );
        assert_eq!(outcome, PlayOutcome::Won { guesses: 2 });
        assert!(text.contains("Invalid guess: tr"));
        assert!(text.contains("Hard mode: need to use c at least 1 times"));
        assert!(!text.contains("Guess 3"));
    }

    #[test]
    fn end_of_input_quits() {
        let (outcome, _) = play("crane", &["crane"], "slate\n");
        assert_eq!(outcome, PlayOutcome::Quit);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("boom"))
        }
    }

    #[test]
    fn repeated_read_failures_give_up() {
        let valid = words(&["crane"]);
        let mut output = Vec::new();
        let outcome = run_play(
            Word::new("crane").unwrap(),
            &valid,
            io::BufReader::new(FailingReader),
            &mut output,
        )
        .unwrap();

        assert_eq!(outcome, PlayOutcome::GaveUp);
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Read failed").count(), MAX_READ_FAILURES + 1);
    }

    #[test]
    fn target_outside_list_runs_out_of_candidates() {
        let (outcome, text) = play("zesty", &["crane", "trace"], "crane\n");
        assert_eq!(outcome, PlayOutcome::NoCandidates { guesses: 1 });
        assert!(text.contains("No valid words remain."));
    }
}
