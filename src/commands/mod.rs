//! Command implementations

pub mod play;
pub mod sample;
pub mod simulate;
pub mod trace;

pub use play::{PlayOutcome, run_play};
pub use sample::{DistributionRow, SampleSummary, distribution, run_sample};
pub use simulate::{SimulateSummary, run_simulate};
pub use trace::run_trace;
