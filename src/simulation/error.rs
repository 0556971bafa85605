//! Simulation errors

use std::fmt;

/// Failure that aborts a simulation run
///
/// A game that runs out of candidates is not an error; it is reported as
/// [`GameOutcome::Abandoned`](super::GameOutcome::Abandoned).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// A required word list has no entries
    EmptyWordList(&'static str),
    /// The guess policy returned nothing for a non-empty candidate set
    PolicyFailed { target: String, candidates: usize },
    /// The target was filtered out of its own candidate set
    TargetFiltered {
        target: String,
        guess: String,
        turn: usize,
    },
    /// The worker pool could not be built
    ThreadPool(String),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList(name) => write!(f, "word list '{name}' is empty"),
            Self::PolicyFailed { target, candidates } => write!(
                f,
                "guess policy selected nothing from {candidates} candidates (target {target})"
            ),
            Self::TargetFiltered {
                target,
                guess,
                turn,
            } => write!(
                f,
                "target {target} was rejected by hard mode after guess {turn} ({guess})"
            ),
            Self::ThreadPool(reason) => write!(f, "failed to build worker pool: {reason}"),
        }
    }
}

impl std::error::Error for SimulationError {}
