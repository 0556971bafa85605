//! Single visible game
//!
//! Plays one game with the given policy and prints every turn.

use crate::core::Word;
use crate::output::formatters::colored_guess;
use crate::simulation::{GameOutcome, GuessPolicy, SimulationConfig, play_game};
use anyhow::Result;
use rand::Rng;
use std::io::{self, Write};

/// Play one game against `target` and write a turn-by-turn trace
///
/// # Errors
///
/// Returns an error if the game fails or `output` cannot be written.
pub fn run_trace<P, R, W>(
    target: &Word,
    valid: &[Word],
    policy: &P,
    rng: &mut R,
    config: &SimulationConfig,
    output: &mut W,
) -> Result<GameOutcome>
where
    P: GuessPolicy,
    R: Rng + ?Sized,
    W: Write,
{
    let mut written: io::Result<()> = Ok(());
    let outcome = play_game(target, valid, policy, rng, config, |record| {
        if written.is_ok() {
            written = writeln!(output, "Valid words: {}", record.candidates)
                .and_then(|()| writeln!(output, "Guess {}: {}", record.turn, record.guess))
                .and_then(|()| {
                    writeln!(
                        output,
                        "Clues {}: {}  {}",
                        record.turn,
                        record.clues,
                        colored_guess(record.guess, &record.clues)
                    )
                });
        }
    })?;
    written?;

    match outcome {
        GameOutcome::Won { guesses } => writeln!(output, "You won! ({guesses} guesses)")?,
        GameOutcome::Abandoned { guesses, reason } => {
            writeln!(output, "Abandoned after {guesses} guesses ({reason:?})")?;
        }
    }
    Ok(outcome)
}
