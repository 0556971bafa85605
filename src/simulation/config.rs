//! Simulation settings

use super::error::SimulationError;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Default cap on guesses per game
pub const DEFAULT_MAX_TURNS: usize = 100;

/// Configuration for a simulation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Games played per task
    pub trials: usize,
    /// A game still unsolved after this many guesses is abandoned
    pub max_turns: usize,
    /// Base seed; `None` draws fresh entropy for every task
    pub seed: Option<u64>,
    /// Worker count; `None` uses rayon's global pool
    pub threads: Option<usize>,
    /// Fail the run if a target ever leaves its own candidate set
    pub strict: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(trials: usize) -> Self {
        Self {
            trials,
            max_turns: DEFAULT_MAX_TURNS,
            seed: None,
            threads: None,
            strict: true,
        }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub const fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    #[must_use]
    pub const fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Random generator for one task
    ///
    /// Seeded runs give every task its own reproducible stream.
    #[must_use]
    pub fn rng_for(&self, task: usize) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(task as u64)),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Run `op` inside a pool bounded to `threads` workers, if set
    ///
    /// # Errors
    /// Returns `SimulationError::ThreadPool` if the pool cannot be built.
    pub fn install<T, F>(&self, op: F) -> Result<T, SimulationError>
    where
        T: Send,
        F: FnOnce() -> T + Send,
    {
        match self.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| SimulationError::ThreadPool(e.to_string()))?;
                Ok(pool.install(op))
            }
            None => Ok(op()),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(1)
    }
}
