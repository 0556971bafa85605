//! Full simulation command
//!
//! Plays every target a fixed number of times and reduces the results to
//! the summary metrics.

use crate::metrics::{MetricReport, evaluate_all};
use crate::output::formatters::task_progress;
use crate::simulation::{
    GuessPolicy, SimulationConfig, SimulationError, SimulationResults, simulate_all,
};
use crate::wordlists::WordLists;
use indicatif::ProgressBar;
use std::time::{Duration, Instant};

/// Result of a full simulation
#[derive(Debug)]
pub struct SimulateSummary {
    pub targets: usize,
    pub trials: usize,
    pub results: SimulationResults,
    pub reports: Vec<MetricReport>,
    pub duration: Duration,
}

/// Run `config.trials` games for every target in `lists`
///
/// # Errors
///
/// Returns the first `SimulationError` raised by any worker.
pub fn run_simulate<P: GuessPolicy>(
    lists: &WordLists,
    policy: &P,
    config: &SimulationConfig,
    show_progress: bool,
) -> Result<SimulateSummary, SimulationError> {
    let targets = lists.targets();
    let progress = if show_progress {
        task_progress(targets.len())
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let results = simulate_all(targets, lists.valid(), policy, config, &progress);
    progress.finish_and_clear();
    let results = results?;

    let reports = evaluate_all(&results);
    Ok(SimulateSummary {
        targets: targets.len(),
        trials: config.trials,
        results,
        reports,
        duration: start.elapsed(),
    })
}
