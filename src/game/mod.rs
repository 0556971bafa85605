//! Game state: clue scoring and hard-mode constraints
//!
//! A [`GameState`] owns one hidden target for the lifetime of a game. Each
//! scored guess produces a clue row and tightens the constraints every later
//! hard-mode guess must satisfy.

mod constraints;
mod hard_mode;
mod state;

pub use constraints::{CountConstraint, PositionConstraint};
pub use hard_mode::HardModeViolation;
pub use state::GameState;
