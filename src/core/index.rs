//! Per-letter occurrence index
//!
//! For each letter of the alphabet a word's index records how many times the
//! letter occurs and a bitmask of the positions it occupies. Clue scoring and
//! hard-mode checks work entirely from these slots.

use super::letters::letter_ordinal;
use super::word::{Word, WordError};
use super::{ALPHABET_SIZE, WORD_LENGTH};

/// Occurrence count and position mask of one letter within a word
///
/// Invariant: `mask.count_ones() == count`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSlot {
    count: u8,
    mask: u8,
}

impl LetterSlot {
    /// A letter that does not occur
    pub const EMPTY: Self = Self { count: 0, mask: 0 };

    /// Number of occurrences (0-5)
    #[inline]
    #[must_use]
    pub const fn count(self) -> u8 {
        self.count
    }

    /// Bit `i` is set if the letter occurs at position `i`
    #[inline]
    #[must_use]
    pub const fn mask(self) -> u8 {
        self.mask
    }

    /// Check whether the letter occurs at `position`
    #[inline]
    #[must_use]
    pub const fn at(self, position: usize) -> bool {
        self.mask & (1 << position) != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.count == 0
    }

    /// Occupied positions, ascending
    pub fn positions(self) -> impl Iterator<Item = usize> {
        (0..WORD_LENGTH).filter(move |&position| self.at(position))
    }

    fn add(&mut self, position: usize) {
        self.count += 1;
        self.mask |= 1 << position;
    }
}

/// Letter index of a 5-letter word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterIndex {
    slots: [LetterSlot; ALPHABET_SIZE],
}

impl LetterIndex {
    /// Build the index from validated lowercase bytes
    pub(crate) fn from_bytes(chars: &[u8; WORD_LENGTH]) -> Self {
        let mut slots = [LetterSlot::EMPTY; ALPHABET_SIZE];
        for (position, &ch) in chars.iter().enumerate() {
            slots[letter_ordinal(ch) as usize].add(position);
        }
        Self { slots }
    }

    /// Build the index for an unvalidated string
    ///
    /// # Errors
    /// Returns `WordError` if the text is not exactly five ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_hardmode::core::{LetterIndex, letter_ordinal};
    ///
    /// let index = LetterIndex::from_text("speed").unwrap();
    /// let e = index.slot(letter_ordinal(b'e'));
    /// assert_eq!(e.count(), 2);
    /// assert_eq!(e.mask(), 0b01100);
    ///
    /// assert!(LetterIndex::from_text("spee").is_err());
    /// ```
    pub fn from_text(text: &str) -> Result<Self, WordError> {
        Word::new(text).map(|word| *word.index())
    }

    /// Slot for a letter ordinal (`a` = 0)
    #[inline]
    #[must_use]
    pub const fn slot(&self, ordinal: u8) -> LetterSlot {
        self.slots[ordinal as usize]
    }

    /// Occurrence count for a letter ordinal
    #[inline]
    #[must_use]
    pub const fn count(&self, ordinal: u8) -> u8 {
        self.slots[ordinal as usize].count
    }

    /// Letters that occur at least once, with their slots, by ascending ordinal
    pub fn present(&self) -> impl Iterator<Item = (u8, LetterSlot)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| !slot.is_empty())
            .map(|(ordinal, &slot)| (ordinal as u8, slot))
    }

    /// Sum of all letter counts (always 5 for a valid word)
    #[must_use]
    pub fn total(&self) -> usize {
        self.slots.iter().map(|slot| usize::from(slot.count)).sum()
    }
}
