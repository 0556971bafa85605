//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod clue;
mod index;
mod letters;
mod word;

pub use clue::{Clue, Clues};
pub use index::{LetterIndex, LetterSlot};
pub use letters::{LetterSet, letter_char, letter_ordinal};
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Size of the lowercase alphabet words are drawn from
pub const ALPHABET_SIZE: usize = 26;
