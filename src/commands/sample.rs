//! Sampled simulation command
//!
//! Draws random targets (with repetition) and reports the guess-count
//! distribution, naming the targets behind rare outcomes.

use crate::output::formatters::task_progress;
use crate::simulation::{
    GuessPolicy, SimulationConfig, SimulationError, SimulationResults, simulate_sampled,
};
use crate::wordlists::WordLists;
use indicatif::ProgressBar;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// One line of the distribution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionRow {
    /// Guess count, or `None` for abandoned games
    pub guesses: Option<usize>,
    pub count: u64,
    /// Games in this row and every row above it
    pub cumulative: u64,
    /// One entry per game, sorted
    pub words: Vec<String>,
}

/// Result of a sampled simulation
#[derive(Debug)]
pub struct SampleSummary {
    pub total: u64,
    pub rows: Vec<DistributionRow>,
    pub results: SimulationResults,
    pub duration: Duration,
}

/// Build the guess-count distribution from per-target results
#[must_use]
pub fn distribution(results: &SimulationResults) -> Vec<DistributionRow> {
    let mut by_guesses: BTreeMap<Option<usize>, Vec<String>> = BTreeMap::new();
    let mut abandoned = Vec::new();

    for (word, histogram) in results.iter() {
        for (guesses, count) in histogram.occupied() {
            let words = by_guesses.entry(Some(guesses)).or_default();
            words.extend(std::iter::repeat_n(word.to_string(), count as usize));
        }
        abandoned.extend(std::iter::repeat_n(
            word.to_string(),
            histogram.abandoned() as usize,
        ));
    }
    if !abandoned.is_empty() {
        by_guesses.insert(None, abandoned);
    }

    // `None` sorts first in a BTreeMap; report abandoned games last
    let mut entries: Vec<(Option<usize>, Vec<String>)> = by_guesses.into_iter().collect();
    let shift = usize::from(entries.first().is_some_and(|(g, _)| g.is_none()));
    entries.rotate_left(shift);

    let mut cumulative = 0;
    entries
        .into_iter()
        .map(|(guesses, mut words)| {
            words.sort();
            let count = words.len() as u64;
            cumulative += count;
            DistributionRow {
                guesses,
                count,
                cumulative,
                words,
            }
        })
        .collect()
}

/// Play `config.trials` games for each of `tasks` random targets
///
/// # Errors
///
/// Returns the first `SimulationError` raised by any worker.
pub fn run_sample<P: GuessPolicy>(
    lists: &WordLists,
    tasks: usize,
    policy: &P,
    config: &SimulationConfig,
    show_progress: bool,
) -> Result<SampleSummary, SimulationError> {
    let progress = if show_progress {
        task_progress(tasks)
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let results = simulate_sampled(
        lists.targets(),
        lists.valid(),
        tasks,
        policy,
        config,
        &progress,
    );
    progress.finish_and_clear();
    let results = results?;

    Ok(SampleSummary {
        total: results.pooled().trials(),
        rows: distribution(&results),
        results,
        duration: start.elapsed(),
    })
}
