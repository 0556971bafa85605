//! Summary statistics over simulation results
//!
//! Each [`Metric`] reduces one histogram to a value where higher is worse.
//! A report names the hardest and easiest targets under that metric (all tied
//! words, sorted) and the value over every trial pooled together.

mod reducers;

pub use reducers::{LOSS_CUTOFF, average, best, not_in_six, worst};

use crate::simulation::{ResultHistogram, SimulationResults};
use std::cmp::Ordering;
use std::fmt;

/// The closed set of reported metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Most guesses needed
    Worst,
    /// Fewest guesses needed
    Best,
    /// Mean guesses over solved games
    Average,
    /// Percentage of games not solved in six
    NotInSix,
}

impl Metric {
    /// Every metric, in report order
    pub const ALL: [Self; 4] = [Self::Worst, Self::Best, Self::Average, Self::NotInSix];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Worst => "worst",
            Self::Best => "best",
            Self::Average => "average",
            Self::NotInSix => "not-in-6",
        }
    }

    /// Reduce one histogram, or `None` if it has nothing to measure
    #[must_use]
    pub fn reduce(self, histogram: &ResultHistogram) -> Option<MetricValue> {
        match self {
            Self::Worst => worst(histogram).map(MetricValue::Guesses),
            Self::Best => best(histogram).map(MetricValue::Guesses),
            Self::Average => average(histogram).map(MetricValue::Mean),
            Self::NotInSix => not_in_six(histogram).map(MetricValue::Percent),
        }
    }
}

/// A reduced value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Guesses(usize),
    Mean(f64),
    Percent(f64),
}

impl MetricValue {
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Guesses(n) => n as f64,
            Self::Mean(v) | Self::Percent(v) => v,
        }
    }

    fn compare(self, other: Self) -> Ordering {
        self.as_f64().total_cmp(&other.as_f64())
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guesses(n) => write!(f, "{n}"),
            Self::Mean(v) => write!(f, "{v:.3}"),
            Self::Percent(v) => write!(f, "{v:.2}%"),
        }
    }
}

/// A value and every target that reached it
#[derive(Debug, Clone, PartialEq)]
pub struct Extreme {
    pub value: MetricValue,
    /// Sorted lexicographically
    pub words: Vec<String>,
}

/// One metric evaluated over a whole run
#[derive(Debug, Clone, PartialEq)]
pub struct MetricReport {
    pub metric: Metric,
    /// Highest per-target value
    pub hardest: Extreme,
    /// Lowest per-target value
    pub easiest: Extreme,
    /// Value over all trials pooled
    pub overall: MetricValue,
}

fn extreme<'a>(
    values: impl Iterator<Item = (&'a str, MetricValue)>,
    prefer: Ordering,
) -> Option<Extreme> {
    let mut current: Option<Extreme> = None;
    for (word, value) in values {
        match current.as_mut() {
            None => {
                current = Some(Extreme {
                    value,
                    words: vec![word.to_string()],
                });
            }
            Some(leader) => match value.compare(leader.value) {
                Ordering::Equal => leader.words.push(word.to_string()),
                ord if ord == prefer => {
                    leader.value = value;
                    leader.words = vec![word.to_string()];
                }
                _ => {}
            },
        }
    }

    current.map(|mut extreme| {
        extreme.words.sort();
        extreme
    })
}

/// Evaluate one metric, or `None` if no target has a value for it
///
/// # Examples
/// ```
/// use wordle_hardmode::metrics::{Metric, MetricValue, evaluate};
/// use wordle_hardmode::simulation::{ResultHistogram, SimulationResults};
///
/// let mut histogram = ResultHistogram::default();
/// histogram.add_solved(4, 3);
/// histogram.add_solved(5, 2);
/// let results = SimulationResults::new(vec![("abcde".to_string(), histogram)]);
///
/// let report = evaluate(Metric::Average, &results).unwrap();
/// assert_eq!(report.hardest.words, vec!["abcde"]);
/// assert!((report.overall.as_f64() - 4.4).abs() < 1e-12);
/// ```
#[must_use]
pub fn evaluate(metric: Metric, results: &SimulationResults) -> Option<MetricReport> {
    let values = || {
        results
            .iter()
            .filter_map(move |(word, histogram)| Some((word, metric.reduce(histogram)?)))
    };

    Some(MetricReport {
        metric,
        hardest: extreme(values(), Ordering::Greater)?,
        easiest: extreme(values(), Ordering::Less)?,
        overall: metric.reduce(&results.pooled())?,
    })
}

/// Evaluate every metric in [`Metric::ALL`] order
#[must_use]
pub fn evaluate_all(results: &SimulationResults) -> Vec<MetricReport> {
    Metric::ALL
        .iter()
        .filter_map(|&metric| evaluate(metric, results))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{AbandonReason, GameOutcome};

    fn histogram(solved: &[(usize, u64)]) -> ResultHistogram {
        let mut histogram = ResultHistogram::default();
        for &(guesses, count) in solved {
            histogram.add_solved(guesses, count);
        }
        histogram
    }

    fn setup_results() -> SimulationResults {
        SimulationResults::new(vec![
            ("slate".to_string(), histogram(&[(2, 1), (4, 3)])),
            ("crane".to_string(), histogram(&[(3, 2), (8, 1)])),
            ("abbey".to_string(), histogram(&[(1, 1), (8, 2)])),
        ])
    }

    #[test]
    fn worst_reports_all_tied_words_sorted() {
        let report = evaluate(Metric::Worst, &setup_results()).unwrap();
        assert_eq!(report.hardest.value, MetricValue::Guesses(8));
        assert_eq!(report.hardest.words, vec!["abbey", "crane"]);
        assert_eq!(report.easiest.value, MetricValue::Guesses(4));
        assert_eq!(report.easiest.words, vec!["slate"]);
        assert_eq!(report.overall, MetricValue::Guesses(8));
    }

    #[test]
    fn best_overall_is_global_minimum() {
        let report = evaluate(Metric::Best, &setup_results()).unwrap();
        assert_eq!(report.overall, MetricValue::Guesses(1));
        assert_eq!(report.easiest.words, vec!["abbey"]);
        assert_eq!(report.hardest.value, MetricValue::Guesses(3));
        assert_eq!(report.hardest.words, vec!["crane"]);
    }

    #[test]
    fn average_pools_all_trials() {
        let report = evaluate(Metric::Average, &setup_results()).unwrap();
        // (2 + 12) + (6 + 8) + (1 + 16) = 45 over 10 games
        assert!((report.overall.as_f64() - 4.5).abs() < 1e-12);
        assert_eq!(report.hardest.words, vec!["abbey"]);
    }

    #[test]
    fn not_in_six_percentage() {
        let report = evaluate(Metric::NotInSix, &setup_results()).unwrap();
        assert!((report.overall.as_f64() - 30.0).abs() < 1e-12);
        assert_eq!(report.easiest.value, MetricValue::Percent(0.0));
        assert_eq!(report.easiest.words, vec!["slate"]);
    }

    #[test]
    fn inputs_not_mutated() {
        let results = setup_results();
        let before = results.clone();
        let _ = evaluate_all(&results);
        assert_eq!(results, before);
    }

    #[test]
    fn all_abandoned_target_is_skipped_for_guess_metrics() {
        let mut abandoned = ResultHistogram::default();
        abandoned.record(GameOutcome::Abandoned {
            guesses: 3,
            reason: AbandonReason::NoCandidates,
        });
        let results = SimulationResults::new(vec![
            ("zesty".to_string(), abandoned),
            ("crane".to_string(), histogram(&[(3, 1)])),
        ]);

        let worst = evaluate(Metric::Worst, &results).unwrap();
        assert_eq!(worst.hardest.words, vec!["crane"]);

        let losses = evaluate(Metric::NotInSix, &results).unwrap();
        assert_eq!(losses.hardest.words, vec!["zesty"]);
        assert_eq!(losses.hardest.value, MetricValue::Percent(100.0));
    }

    #[test]
    fn empty_results_give_no_reports() {
        assert!(evaluate_all(&SimulationResults::default()).is_empty());
    }

    #[test]
    fn display_formats() {
        assert_eq!(MetricValue::Guesses(7).to_string(), "7");
        assert_eq!(MetricValue::Mean(4.4).to_string(), "4.400");
        assert_eq!(MetricValue::Percent(12.5).to_string(), "12.50%");
        assert_eq!(Metric::NotInSix.name(), "not-in-6");
    }
}
