//! Random-play simulation
//!
//! Plays hard-mode games with a pluggable guess policy and aggregates the
//! number of guesses needed per target across many parallel trials.

mod config;
mod driver;
mod error;
mod histogram;
pub mod policy;
mod runner;

pub use config::{DEFAULT_MAX_TURNS, SimulationConfig};
pub use driver::{AbandonReason, Game, GameOutcome, GameStatus, TurnRecord, play_game};
pub use error::SimulationError;
pub use histogram::{HISTOGRAM_BUCKETS, ResultHistogram, SharedHistogram};
pub use policy::{FirstCandidatePolicy, GuessPolicy, PolicyType, RandomPolicy};
pub use runner::{SimulationResults, simulate_all, simulate_sampled};
