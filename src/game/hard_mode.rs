//! Hard-mode validation
//!
//! Every guess after the first must be consistent with all revealed clues.
//! Letter-count bounds are checked first (by letter), then positional facts
//! (by position); the first failure is the one reported.

use super::constraints::CountConstraint;
use super::state::GameState;
use crate::core::{ALPHABET_SIZE, Word, letter_char};
use std::fmt;

/// Why a guess is not allowed in hard mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardModeViolation {
    /// Letter is known to be absent
    Forbidden { letter: char },
    ExactCount { letter: char, count: u8 },
    MinimumCount { letter: char, count: u8 },
    /// A green letter is missing from its position (0-based)
    RequiredLetter { letter: char, position: usize },
    /// Letter was already gray or yellow at this position (0-based)
    ExcludedLetter { letter: char, position: usize },
}

impl fmt::Display for HardModeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forbidden { letter } => write!(f, "can't use {letter}"),
            Self::ExactCount { letter, count } => {
                write!(f, "need to use {letter} exactly {count} times")
            }
            Self::MinimumCount { letter, count } => {
                write!(f, "need to use {letter} at least {count} times")
            }
            Self::RequiredLetter { letter, position } => {
                write!(f, "need {letter} as letter {}", position + 1)
            }
            Self::ExcludedLetter { letter, position } => {
                write!(f, "can't use {letter} as letter {}", position + 1)
            }
        }
    }
}

impl GameState {
    /// All violations of `word`, in reporting order
    fn violations<'a>(&'a self, word: &'a Word) -> impl Iterator<Item = HardModeViolation> + 'a {
        let counts = (0..ALPHABET_SIZE as u8).filter_map(move |ordinal| {
            let bound = self.counts()[ordinal as usize];
            let count = word.index().count(ordinal);
            if bound.permits(count) {
                return None;
            }
            let letter = letter_char(ordinal);
            match bound {
                CountConstraint::Exactly(0) => Some(HardModeViolation::Forbidden { letter }),
                CountConstraint::Exactly(count) => {
                    Some(HardModeViolation::ExactCount { letter, count })
                }
                CountConstraint::AtLeast(count) => {
                    Some(HardModeViolation::MinimumCount { letter, count })
                }
                CountConstraint::Unconstrained => None,
            }
        });

        let positions = self
            .positions()
            .iter()
            .enumerate()
            .flat_map(move |(position, constraint)| {
                let ordinal = word.ordinal_at(position);
                let required = constraint
                    .required()
                    .filter(|&green| green != ordinal)
                    .map(|green| HardModeViolation::RequiredLetter {
                        letter: letter_char(green),
                        position,
                    });
                let excluded = constraint.excluded().contains(ordinal).then(|| {
                    HardModeViolation::ExcludedLetter {
                        letter: letter_char(ordinal),
                        position,
                    }
                });
                required.into_iter().chain(excluded)
            });

        counts.chain(positions)
    }

    /// First hard-mode violation of `word`, or `None` if it may be guessed
    ///
    /// # Examples
    /// ```
    /// use wordle_hardmode::core::Word;
    /// use wordle_hardmode::game::GameState;
    ///
    /// let mut state = GameState::new(Word::new("crane").unwrap());
    /// state.score(&Word::new("trace").unwrap());
    ///
    /// let problem = state.hard_mode_violation(&Word::new("slate").unwrap()).unwrap();
    /// assert_eq!(problem.to_string(), "need to use c at least 1 times");
    /// assert!(state.hard_mode_violation(&Word::new("crane").unwrap()).is_none());
    /// ```
    #[must_use]
    pub fn hard_mode_violation(&self, word: &Word) -> Option<HardModeViolation> {
        self.violations(word).next()
    }

    /// Every hard-mode violation of `word`
    #[must_use]
    pub fn hard_mode_violations(&self, word: &Word) -> Vec<HardModeViolation> {
        self.violations(word).collect()
    }

    /// True if `word` satisfies every accumulated constraint
    #[inline]
    #[must_use]
    pub fn is_allowed(&self, word: &Word) -> bool {
        self.violations(word).next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn after(target: &str, guesses: &[&str]) -> GameState {
        let mut state = GameState::new(word(target));
        for guess in guesses {
            state.score(&word(guess));
        }
        state
    }

    #[test]
    fn fresh_game_allows_everything() {
        let state = GameState::new(word("crane"));
        for text in ["aaaaa", "zzzzz", "slate", "crane"] {
            assert!(state.is_allowed(&word(text)));
        }
    }

    #[test]
    fn forbidden_letter() {
        let state = after("crane", &["moist"]);
        let violation = state.hard_mode_violation(&word("blimp")).unwrap();
        assert_eq!(violation, HardModeViolation::Forbidden { letter: 'i' });
        assert_eq!(violation.to_string(), "can't use i");
    }

    #[test]
    fn exact_count_message() {
        // SPEED vs GEESE pins E to exactly two
        let state = after("speed", &["geese"]);
        let violation = state.hard_mode_violation(&word("spent")).unwrap();
        assert_eq!(
            violation,
            HardModeViolation::ExactCount {
                letter: 'e',
                count: 2
            }
        );
        assert_eq!(violation.to_string(), "need to use e exactly 2 times");
    }

    #[test]
    fn minimum_count_message() {
        let state = after("speed", &["erase"]);
        let violation = state.hard_mode_violation(&word("spend")).unwrap();
        assert_eq!(violation.to_string(), "need to use e at least 2 times");
    }

    #[test]
    fn required_letter_message() {
        let state = after("crane", &["trace"]);
        // Letter counts satisfied, but R is missing from slot 2
        let violation = state.hard_mode_violation(&word("cares")).unwrap();
        assert_eq!(
            violation,
            HardModeViolation::RequiredLetter {
                letter: 'r',
                position: 1
            }
        );
        assert_eq!(violation.to_string(), "need r as letter 2");
    }

    #[test]
    fn excluded_letter_message() {
        // OCEAN vs CRANE: O gray, C/E/A/N all yellow
        let state = after("crane", &["ocean"]);
        let violation = state.hard_mode_violation(&word("ecran")).unwrap();
        assert_eq!(
            violation,
            HardModeViolation::ExcludedLetter {
                letter: 'c',
                position: 1
            }
        );
        assert_eq!(violation.to_string(), "can't use c as letter 2");
        assert!(state.is_allowed(&word("dance")));
    }

    #[test]
    fn count_violations_reported_before_positions() {
        let state = after("crane", &["trace"]);
        let violations = state.hard_mode_violations(&word("tubes"));
        assert_eq!(
            violations.first(),
            Some(&HardModeViolation::MinimumCount {
                letter: 'a',
                count: 1
            })
        );
        assert!(violations.contains(&HardModeViolation::Forbidden { letter: 't' }));
        assert!(violations.contains(&HardModeViolation::RequiredLetter {
            letter: 'r',
            position: 1
        }));
    }

    #[test]
    fn target_always_allowed() {
        let target = "speed";
        let state = after(target, &["erase", "geese", "spend", "steed"]);
        assert!(state.is_allowed(&word(target)));
        assert!(state.hard_mode_violations(&word(target)).is_empty());
    }

    #[test]
    fn wrong_guess_never_allowed_again() {
        let state = after("crane", &["trace"]);
        assert!(!state.is_allowed(&word("trace")));
    }

    #[test]
    fn filter_rejects_on_any_violation() {
        let state = after("crane", &["trace"]);
        for text in ["slate", "grace", "brace", "caret", "crane"] {
            let w = word(text);
            assert_eq!(
                state.is_allowed(&w),
                state.hard_mode_violations(&w).is_empty(),
                "{text}"
            );
        }
        assert!(state.is_allowed(&word("crane")));
    }
}
