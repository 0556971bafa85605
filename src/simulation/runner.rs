//! Parallel simulation runs
//!
//! Two partitionings are supported:
//! - [`simulate_all`]: one task per target, each owning its histogram outright.
//! - [`simulate_sampled`]: tasks pick random targets, so several workers may
//!   hit the same target and its counters are atomic.
//!
//! Both join every task before returning, and the first error cancels the
//! remaining work.

use super::config::SimulationConfig;
use super::driver::{GameOutcome, play_game};
use super::error::SimulationError;
use super::histogram::{ResultHistogram, SharedHistogram};
use super::policy::GuessPolicy;
use crate::core::Word;
use indicatif::ProgressBar;
use log::{info, warn};
use rand::prelude::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::Instant;

/// Per-target histograms from a finished run, in target-list order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationResults {
    per_target: Vec<(String, ResultHistogram)>,
}

impl SimulationResults {
    #[must_use]
    pub const fn new(per_target: Vec<(String, ResultHistogram)>) -> Self {
        Self { per_target }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResultHistogram)> {
        self.per_target
            .iter()
            .map(|(word, histogram)| (word.as_str(), histogram))
    }

    #[must_use]
    pub fn get(&self, target: &str) -> Option<&ResultHistogram> {
        self.iter()
            .find(|(word, _)| *word == target)
            .map(|(_, histogram)| histogram)
    }

    /// Number of targets with results
    #[must_use]
    pub fn len(&self) -> usize {
        self.per_target.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.per_target.is_empty()
    }

    /// All targets' histograms merged into one
    #[must_use]
    pub fn pooled(&self) -> ResultHistogram {
        let mut pooled = ResultHistogram::default();
        for (_, histogram) in &self.per_target {
            pooled.merge(histogram);
        }
        pooled
    }
}

fn log_abandoned(target: &Word, outcome: GameOutcome) {
    if let GameOutcome::Abandoned { guesses, reason } = outcome {
        warn!("{target}: abandoned after {guesses} guesses ({reason:?})");
    }
}

/// Play `config.trials` games for every target
///
/// # Errors
/// Returns the first `SimulationError` raised by any game, or an error if a
/// word list is empty or the worker pool cannot be built.
///
/// # Examples
/// ```
/// use indicatif::ProgressBar;
/// use wordle_hardmode::core::Word;
/// use wordle_hardmode::simulation::{RandomPolicy, SimulationConfig, simulate_all};
///
/// let words: Vec<Word> = ["crane", "trace", "slate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let config = SimulationConfig::new(5).with_seed(1);
///
/// let results = simulate_all(&words, &words, &RandomPolicy, &config, &ProgressBar::hidden()).unwrap();
/// assert_eq!(results.len(), 3);
/// assert_eq!(results.pooled().solved(), 15);
/// ```
pub fn simulate_all<P: GuessPolicy>(
    targets: &[Word],
    valid: &[Word],
    policy: &P,
    config: &SimulationConfig,
    progress: &ProgressBar,
) -> Result<SimulationResults, SimulationError> {
    if targets.is_empty() {
        return Err(SimulationError::EmptyWordList("targets"));
    }
    if valid.is_empty() {
        return Err(SimulationError::EmptyWordList("valid"));
    }

    info!(
        "Simulating {} targets x {} trials against {} valid words",
        targets.len(),
        config.trials,
        valid.len()
    );
    let start = Instant::now();

    let per_target = config.install(|| {
        targets
            .par_iter()
            .enumerate()
            .map(|(task, target)| -> Result<_, SimulationError> {
                let mut rng = config.rng_for(task);
                let mut histogram = ResultHistogram::default();
                for _ in 0..config.trials {
                    let outcome = play_game(target, valid, policy, &mut rng, config, |_| {})?;
                    log_abandoned(target, outcome);
                    histogram.record(outcome);
                }
                progress.inc(1);
                Ok((target.text().to_string(), histogram))
            })
            .collect::<Result<Vec<_>, SimulationError>>()
    })??;

    info!("Simulation finished in {:.2?}", start.elapsed());
    Ok(SimulationResults::new(per_target))
}

/// Play `config.trials` games for each of `tasks` randomly chosen targets
///
/// Targets may repeat across tasks; only targets that were drawn at least
/// once appear in the results.
///
/// # Errors
/// Returns the first `SimulationError` raised by any game, or an error if a
/// word list is empty or the worker pool cannot be built.
pub fn simulate_sampled<P: GuessPolicy>(
    targets: &[Word],
    valid: &[Word],
    tasks: usize,
    policy: &P,
    config: &SimulationConfig,
    progress: &ProgressBar,
) -> Result<SimulationResults, SimulationError> {
    if targets.is_empty() {
        return Err(SimulationError::EmptyWordList("targets"));
    }
    if valid.is_empty() {
        return Err(SimulationError::EmptyWordList("valid"));
    }

    info!(
        "Sampling {tasks} targets x {} trials against {} valid words",
        config.trials,
        valid.len()
    );
    let start = Instant::now();

    let shared: FxHashMap<&str, SharedHistogram> = targets
        .iter()
        .map(|target| (target.text(), SharedHistogram::default()))
        .collect();

    config.install(|| {
        (0..tasks).into_par_iter().try_for_each(|task| -> Result<(), SimulationError> {
            let mut rng = config.rng_for(task);
            let target = targets
                .choose(&mut rng)
                .ok_or(SimulationError::EmptyWordList("targets"))?;
            let histogram = &shared[target.text()];
            for _ in 0..config.trials {
                let outcome = play_game(target, valid, policy, &mut rng, config, |_| {})?;
                log_abandoned(target, outcome);
                histogram.record(outcome);
            }
            progress.inc(1);
            Ok(())
        })
    })??;

    info!("Sampling finished in {:.2?}", start.elapsed());

    let mut seen = FxHashSet::default();
    let per_target = targets
        .iter()
        .filter(|target| seen.insert(target.text()))
        .map(|target| (target.text().to_string(), shared[target.text()].snapshot()))
        .filter(|(_, histogram)| !histogram.is_empty())
        .collect();

    Ok(SimulationResults::new(per_target))
}
