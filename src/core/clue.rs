//! Per-position clues
//!
//! A clue row is rendered left to right with one character per position:
//! space = unknown, `_` = gray, `Y` = yellow, `G` = green.

use super::WORD_LENGTH;
use std::fmt;

/// Feedback for a single guess position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Clue {
    #[default]
    Unknown,
    /// Letter absent, or the guess used more copies than the target has
    Gray,
    /// Letter present elsewhere in the target
    Yellow,
    /// Letter correct at this position
    Green,
}

impl Clue {
    /// Single-character rendering
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Unknown => ' ',
            Self::Gray => '_',
            Self::Yellow => 'Y',
            Self::Green => 'G',
        }
    }

    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            ' ' => Some(Self::Unknown),
            '_' | '-' => Some(Self::Gray),
            'Y' | 'y' => Some(Self::Yellow),
            'G' | 'g' => Some(Self::Green),
            _ => None,
        }
    }
}

/// Clues for all five positions of one guess
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Clues([Clue; WORD_LENGTH]);

impl Clues {
    /// All greens
    pub const SOLVED: Self = Self([Clue::Green; WORD_LENGTH]);

    #[must_use]
    pub const fn new(clues: [Clue; WORD_LENGTH]) -> Self {
        Self(clues)
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, position: usize) -> Clue {
        self.0[position]
    }

    #[inline]
    pub(crate) fn set(&mut self, position: usize, clue: Clue) {
        self.0[position] = clue;
    }

    /// True iff every position is green
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    pub fn iter(&self) -> impl Iterator<Item = Clue> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn count(&self, clue: Clue) -> usize {
        self.iter().filter(|&c| c == clue).count()
    }

    /// Render as a five-character clue string
    ///
    /// # Examples
    /// ```
    /// use wordle_hardmode::core::{Clue, Clues};
    ///
    /// let clues = Clues::new([Clue::Gray, Clue::Green, Clue::Green, Clue::Yellow, Clue::Green]);
    /// assert_eq!(clues.to_clue_string(), "_GGYG");
    /// ```
    #[must_use]
    pub fn to_clue_string(&self) -> String {
        self.iter().map(Clue::symbol).collect()
    }
}

impl fmt::Display for Clues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_clue_string())
    }
}

impl std::str::FromStr for Clues {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(format!("Invalid clue string: {s:?}"));
        }

        let mut clues = Self::default();
        for (position, ch) in chars.into_iter().enumerate() {
            let clue = Clue::from_symbol(ch).ok_or_else(|| format!("Invalid clue string: {s:?}"))?;
            clues.set(position, clue);
        }
        Ok(clues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_unknown() {
        let clues = Clues::default();
        assert_eq!(clues.to_clue_string(), "     ");
        assert_eq!(clues.count(Clue::Unknown), 5);
        assert!(!clues.is_solved());
    }

    #[test]
    fn solved_constant() {
        assert!(Clues::SOLVED.is_solved());
        assert_eq!(Clues::SOLVED.to_string(), "GGGGG");
    }

    #[test]
    fn parse_accepts_alternate_gray() {
        let a: Clues = "_GY-g".parse().unwrap();
        assert_eq!(a.to_clue_string(), "_GY_G");
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!("GGGG".parse::<Clues>().is_err());
        assert!("GGGGGG".parse::<Clues>().is_err());
        assert!("GGXGG".parse::<Clues>().is_err());
    }

    #[test]
    fn count_by_kind() {
        let clues: Clues = "GY_YG".parse().unwrap();
        assert_eq!(clues.count(Clue::Green), 2);
        assert_eq!(clues.count(Clue::Yellow), 2);
        assert_eq!(clues.count(Clue::Gray), 1);
    }
}
