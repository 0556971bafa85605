//! Reductions of one histogram to a single number

use crate::simulation::{HISTOGRAM_BUCKETS, ResultHistogram};

/// Conventional loss threshold
pub const LOSS_CUTOFF: usize = 6;

/// Most guesses any solved game needed
#[must_use]
pub fn worst(histogram: &ResultHistogram) -> Option<usize> {
    histogram.occupied().last().map(|(guesses, _)| guesses)
}

/// Fewest guesses any solved game needed
#[must_use]
pub fn best(histogram: &ResultHistogram) -> Option<usize> {
    histogram.occupied().next().map(|(guesses, _)| guesses)
}

/// Mean guesses over solved games
#[must_use]
pub fn average(histogram: &ResultHistogram) -> Option<f64> {
    let solved = histogram.solved();
    if solved == 0 {
        return None;
    }
    let total: u64 = histogram
        .occupied()
        .map(|(guesses, count)| guesses as u64 * count)
        .sum();
    Some(total as f64 / solved as f64)
}

/// Percentage of games not solved within [`LOSS_CUTOFF`] guesses
///
/// Abandoned games count as losses.
#[must_use]
pub fn not_in_six(histogram: &ResultHistogram) -> Option<f64> {
    let trials = histogram.trials();
    if trials == 0 {
        return None;
    }
    let late: u64 = histogram.buckets()[LOSS_CUTOFF + 1..HISTOGRAM_BUCKETS]
        .iter()
        .sum();
    let losses = late + histogram.abandoned();
    Some(100.0 * losses as f64 / trials as f64)
}
