//! Guess-count histograms
//!
//! One histogram per target. Bucket `n` counts games solved in `n` guesses;
//! the last bucket also absorbs anything longer. Abandoned games are counted
//! on their own and never land in a bucket.

use super::driver::GameOutcome;
use std::sync::atomic::{AtomicU64, Ordering};

/// Number of guess-count buckets (the last one is the overflow bucket)
pub const HISTOGRAM_BUCKETS: usize = 100;

/// Guess-count distribution owned by a single worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultHistogram {
    buckets: [u64; HISTOGRAM_BUCKETS],
    abandoned: u64,
}

impl Default for ResultHistogram {
    fn default() -> Self {
        Self {
            buckets: [0; HISTOGRAM_BUCKETS],
            abandoned: 0,
        }
    }
}

impl ResultHistogram {
    /// Bucket a guess count falls into
    #[inline]
    #[must_use]
    pub const fn bucket_index(guesses: usize) -> usize {
        if guesses < HISTOGRAM_BUCKETS {
            guesses
        } else {
            HISTOGRAM_BUCKETS - 1
        }
    }

    /// Count one finished game
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Won { guesses } => self.buckets[Self::bucket_index(guesses)] += 1,
            GameOutcome::Abandoned { .. } => self.abandoned += 1,
        }
    }

    /// Add `count` solved games of `guesses` guesses each
    pub fn add_solved(&mut self, guesses: usize, count: u64) {
        self.buckets[Self::bucket_index(guesses)] += count;
    }

    #[inline]
    #[must_use]
    pub const fn buckets(&self) -> &[u64; HISTOGRAM_BUCKETS] {
        &self.buckets
    }

    #[inline]
    #[must_use]
    pub const fn bucket(&self, guesses: usize) -> u64 {
        self.buckets[Self::bucket_index(guesses)]
    }

    #[inline]
    #[must_use]
    pub const fn abandoned(&self) -> u64 {
        self.abandoned
    }

    /// Games that ended in a win
    #[must_use]
    pub fn solved(&self) -> u64 {
        self.buckets.iter().sum()
    }

    /// All recorded games, won or abandoned
    #[must_use]
    pub fn trials(&self) -> u64 {
        self.solved() + self.abandoned
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trials() == 0
    }

    /// Non-empty buckets as `(guesses, count)`, ascending
    pub fn occupied(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(guesses, &count)| (guesses, count))
    }

    /// Fold another histogram into this one
    pub fn merge(&mut self, other: &Self) {
        for (mine, theirs) in self.buckets.iter_mut().zip(other.buckets.iter()) {
            *mine += theirs;
        }
        self.abandoned += other.abandoned;
    }
}

/// Guess-count distribution written by several workers at once
///
/// Counters are only read after every writer has been joined, so relaxed
/// ordering is enough.
#[derive(Debug)]
pub struct SharedHistogram {
    buckets: [AtomicU64; HISTOGRAM_BUCKETS],
    abandoned: AtomicU64,
}

impl Default for SharedHistogram {
    fn default() -> Self {
        Self {
            buckets: std::array::from_fn(|_| AtomicU64::new(0)),
            abandoned: AtomicU64::new(0),
        }
    }
}

impl SharedHistogram {
    pub fn record(&self, outcome: GameOutcome) {
        let counter = match outcome {
            GameOutcome::Won { guesses } => &self.buckets[ResultHistogram::bucket_index(guesses)],
            GameOutcome::Abandoned { .. } => &self.abandoned,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Copy the current counts into an owned histogram
    #[must_use]
    pub fn snapshot(&self) -> ResultHistogram {
        ResultHistogram {
            buckets: std::array::from_fn(|i| self.buckets[i].load(Ordering::Relaxed)),
            abandoned: self.abandoned.load(Ordering::Relaxed),
        }
    }
}
