//! Wordle Hard Mode
//!
//! A hard-mode Wordle engine: clue scoring with repeated-letter rules, a
//! validator for the hard-mode constraints, a parallel random-play simulator
//! and metrics over the resulting guess-count histograms.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_hardmode::core::Word;
//! use wordle_hardmode::game::GameState;
//!
//! let target = Word::new("trace").unwrap();
//! let mut state = GameState::new(target);
//!
//! let (clues, solved) = state.score(&Word::new("crane").unwrap());
//! assert_eq!(clues.to_string(), "YGG_G");
//! assert!(!solved);
//!
//! // "slate" drops the yellow 'c' and the green 'r'
//! assert!(!state.is_allowed(&Word::new("slate").unwrap()));
//! ```

// Core domain types
pub mod core;

// Clue engine and hard-mode rules
pub mod game;

// Parallel random play
pub mod simulation;

// Histogram reductions
pub mod metrics;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
