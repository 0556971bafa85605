//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary, plus the
//! [`WordLists`] pair the game and simulator are built from.

mod embedded;
pub mod loader;

pub use embedded::{TARGETS, TARGETS_COUNT, VALID, VALID_COUNT};

use crate::core::Word;
use loader::words_from_slice;
use rustc_hash::FxHashSet;
use std::fmt;
use std::num::NonZeroUsize;

/// Error type for unusable word lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    Empty(&'static str),
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty(name) => write!(f, "word list '{name}' contains no valid words"),
        }
    }
}

impl std::error::Error for WordListError {}

/// Possible hidden words and acceptable guesses
#[derive(Debug, Clone)]
pub struct WordLists {
    targets: Vec<Word>,
    valid: Vec<Word>,
}

impl WordLists {
    /// Pair a target list with a guess list
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if either list is empty.
    pub fn new(targets: Vec<Word>, valid: Vec<Word>) -> Result<Self, WordListError> {
        if targets.is_empty() {
            return Err(WordListError::Empty("targets"));
        }
        if valid.is_empty() {
            return Err(WordListError::Empty("valid"));
        }
        Ok(Self { targets, valid })
    }

    /// The lists compiled into the binary
    ///
    /// # Panics
    /// Panics if the embedded lists are empty, which the build script rules out.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(TARGETS), words_from_slice(VALID))
            .expect("embedded word lists are non-empty")
    }

    #[inline]
    #[must_use]
    pub fn targets(&self) -> &[Word] {
        &self.targets
    }

    #[inline]
    #[must_use]
    pub fn valid(&self) -> &[Word] {
        &self.valid
    }

    /// Keep only the first `limit` targets
    #[must_use]
    pub fn with_target_limit(mut self, limit: NonZeroUsize) -> Self {
        self.targets.truncate(limit.get());
        self
    }

    /// Targets that are not acceptable guesses
    ///
    /// Games against these can run out of candidates.
    #[must_use]
    pub fn targets_missing_from_valid(&self) -> Vec<&Word> {
        let valid: FxHashSet<&str> = self.valid.iter().map(Word::text).collect();
        self.targets
            .iter()
            .filter(|target| !valid.contains(target.text()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_count_matches_const() {
        assert_eq!(TARGETS.len(), TARGETS_COUNT);
    }

    #[test]
    fn valid_count_matches_const() {
        assert_eq!(VALID.len(), VALID_COUNT);
    }

    #[test]
    fn embedded_words_are_well_formed() {
        for &word in TARGETS.iter().chain(VALID) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn targets_subset_of_valid() {
        let lists = WordLists::embedded();
        assert!(lists.targets_missing_from_valid().is_empty());
        assert!(lists.valid().len() >= lists.targets().len());
    }

    #[test]
    fn missing_targets_reported() {
        let lists = WordLists::new(
            words_from_slice(&["crane", "zesty"]),
            words_from_slice(&["crane", "slate"]),
        )
        .unwrap();
        let missing: Vec<&str> = lists
            .targets_missing_from_valid()
            .into_iter()
            .map(Word::text)
            .collect();
        assert_eq!(missing, vec!["zesty"]);
    }

    #[test]
    fn empty_lists_rejected() {
        assert_eq!(
            WordLists::new(vec![], words_from_slice(&["crane"])).unwrap_err(),
            WordListError::Empty("targets")
        );
        assert_eq!(
            WordLists::new(words_from_slice(&["crane"]), vec![]).unwrap_err(),
            WordListError::Empty("valid")
        );
    }

    #[test]
    fn target_limit_truncates() {
        let lists = WordLists::embedded().with_target_limit(NonZeroUsize::new(3).unwrap());
        assert_eq!(lists.targets().len(), 3);
        assert_eq!(lists.targets()[0].text(), TARGETS[0]);
    }

    #[test]
    fn target_limit_of_one_keeps_first() {
        let lists = WordLists::embedded().with_target_limit(NonZeroUsize::MIN);
        assert_eq!(lists.targets().len(), 1);
        assert_eq!(lists.valid().len(), VALID_COUNT);
    }
}
