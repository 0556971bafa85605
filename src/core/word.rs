//! Wordle word representation
//!
//! A Word stores a validated 5-letter word along with its letter index.

use super::WORD_LENGTH;
use super::index::LetterIndex;
use super::letters::letter_ordinal;
use std::fmt;

/// A 5-letter lowercase word with its precomputed letter index
///
/// Words are immutable once formed; every core operation takes `&Word`, so
/// length and alphabet are checked exactly once, here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
    index: LetterIndex,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "expected {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "non-ASCII input"),
            Self::InvalidCharacters => write!(f, "only letters a-z are allowed"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Validate and index a word
    ///
    /// Uppercase input is normalized to lowercase. The word is never padded
    /// or truncated.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_hardmode::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut chars = [0u8; WORD_LENGTH];
        chars.copy_from_slice(text.as_bytes());
        let index = LetterIndex::from_bytes(&chars);

        Ok(Self { text, chars, index })
    }

    /// Lowercase text of the word
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// ASCII bytes, one per position
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Alphabet ordinal of the letter at `position` (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn ordinal_at(&self, position: usize) -> u8 {
        letter_ordinal(self.chars[position])
    }

    /// Per-letter count and position index
    #[inline]
    #[must_use]
    pub const fn index(&self) -> &LetterIndex {
        &self.index
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
