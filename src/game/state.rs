//! Clue scoring against a fixed target

use super::constraints::{CountConstraint, PositionConstraint};
use crate::core::{ALPHABET_SIZE, Clue, Clues, WORD_LENGTH, Word};

/// State of one game: the hidden target plus everything learned so far
#[derive(Debug, Clone)]
pub struct GameState {
    target: Word,
    positions: [PositionConstraint; WORD_LENGTH],
    counts: [CountConstraint; ALPHABET_SIZE],
    guesses: usize,
}

impl GameState {
    /// Start a game with no constraints
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            positions: [PositionConstraint::default(); WORD_LENGTH],
            counts: [CountConstraint::default(); ALPHABET_SIZE],
            guesses: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Number of guesses scored so far
    #[inline]
    #[must_use]
    pub const fn guesses(&self) -> usize {
        self.guesses
    }

    #[inline]
    #[must_use]
    pub const fn positions(&self) -> &[PositionConstraint; WORD_LENGTH] {
        &self.positions
    }

    #[inline]
    #[must_use]
    pub const fn counts(&self) -> &[CountConstraint; ALPHABET_SIZE] {
        &self.counts
    }

    /// Score `guess` against the target and record what it reveals
    ///
    /// Letters are handled one at a time. For a letter the guess uses more
    /// often than the target, copies in target positions are green and the
    /// rest are filled yellow then gray in ascending position order.
    ///
    /// Returns the clue row and whether every clue is green.
    ///
    /// # Examples
    /// ```
    /// use wordle_hardmode::core::Word;
    /// use wordle_hardmode::game::GameState;
    ///
    /// let mut state = GameState::new(Word::new("crane").unwrap());
    /// let (clues, won) = state.score(&Word::new("trace").unwrap());
    /// assert_eq!(clues.to_clue_string(), "_GGYG");
    /// assert!(!won);
    /// ```
    pub fn score(&mut self, guess: &Word) -> (Clues, bool) {
        let target = *self.target.index();
        let mut clues = Clues::default();

        for (ordinal, guessed) in guess.index().present() {
            let actual = target.slot(ordinal);

            let observed = if actual.is_empty() {
                for position in guessed.positions() {
                    clues.set(position, Clue::Gray);
                }
                CountConstraint::Exactly(0)
            } else if guessed.count() <= actual.count() {
                for position in guessed.positions() {
                    let clue = if actual.at(position) {
                        Clue::Green
                    } else {
                        Clue::Yellow
                    };
                    clues.set(position, clue);
                }
                CountConstraint::AtLeast(guessed.count())
            } else {
                // Over-used: greens first, then yellows until the count runs out
                let mut remaining = actual.count();
                for position in guessed.positions().filter(|&p| actual.at(p)) {
                    clues.set(position, Clue::Green);
                    remaining -= 1;
                }
                for position in guessed.positions().filter(|&p| !actual.at(p)) {
                    if remaining > 0 {
                        clues.set(position, Clue::Yellow);
                        remaining -= 1;
                    } else {
                        clues.set(position, Clue::Gray);
                    }
                }
                CountConstraint::Exactly(actual.count())
            };

            let slot = &mut self.counts[ordinal as usize];
            *slot = slot.merge(observed);
        }

        for (position, constraint) in self.positions.iter_mut().enumerate() {
            let ordinal = guess.ordinal_at(position);
            if clues.get(position) == Clue::Green {
                constraint.require(ordinal);
            } else {
                constraint.exclude(ordinal);
            }
        }

        self.guesses += 1;
        (clues, clues.is_solved())
    }
}
