//! Letter ordinals and compact letter sets

use super::ALPHABET_SIZE;
use std::fmt;

/// Convert a lowercase ASCII byte to its alphabet ordinal (`a` = 0)
///
/// The byte must already be validated as `b'a'..=b'z'`.
#[inline]
#[must_use]
pub const fn letter_ordinal(byte: u8) -> u8 {
    debug_assert!(byte.is_ascii_lowercase());
    byte - b'a'
}

/// Convert an alphabet ordinal back to its lowercase character
#[inline]
#[must_use]
pub const fn letter_char(ordinal: u8) -> char {
    debug_assert!((ordinal as usize) < ALPHABET_SIZE);
    (b'a' + ordinal) as char
}

/// A set of letters, one bit per alphabet ordinal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Add a letter (by ordinal)
    #[inline]
    pub fn insert(&mut self, ordinal: u8) {
        self.0 |= 1 << ordinal;
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, ordinal: u8) -> bool {
        self.0 & (1 << ordinal) != 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Letter ordinals in ascending order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..ALPHABET_SIZE as u8).filter(move |&ordinal| self.contains(ordinal))
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ordinal in self.iter() {
            write!(f, "{}", letter_char(ordinal))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_round_trip_edges() {
        assert_eq!(letter_ordinal(b'a'), 0);
        assert_eq!(letter_ordinal(b'z'), 25);
        assert_eq!(letter_char(0), 'a');
        assert_eq!(letter_char(25), 'z');
    }

    #[test]
    fn set_insert_and_contains() {
        let mut set = LetterSet::EMPTY;
        assert!(set.is_empty());

        set.insert(letter_ordinal(b'e'));
        set.insert(letter_ordinal(b'a'));
        set.insert(letter_ordinal(b'e'));

        assert_eq!(set.len(), 2);
        assert!(set.contains(letter_ordinal(b'a')));
        assert!(set.contains(letter_ordinal(b'e')));
        assert!(!set.contains(letter_ordinal(b'z')));
        assert_eq!(set.to_string(), "ae");
    }

    #[test]
    fn subset_relation() {
        let mut small = LetterSet::EMPTY;
        small.insert(2);
        let mut big = small;
        big.insert(7);

        assert!(small.is_subset(big));
        assert!(!big.is_subset(small));
        assert!(LetterSet::EMPTY.is_subset(small));
    }
}
