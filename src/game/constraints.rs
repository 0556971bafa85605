//! Constraints accumulated from previous guesses

use crate::core::LetterSet;

/// What is known about one position of the target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionConstraint {
    required: Option<u8>,
    excluded: LetterSet,
}

impl PositionConstraint {
    /// Letter ordinal that was green here, if any
    #[inline]
    #[must_use]
    pub const fn required(&self) -> Option<u8> {
        self.required
    }

    /// Letters seen gray or yellow at this position
    #[inline]
    #[must_use]
    pub const fn excluded(&self) -> LetterSet {
        self.excluded
    }

    pub(crate) fn require(&mut self, ordinal: u8) {
        debug_assert!(
            self.required.is_none_or(|existing| existing == ordinal),
            "green letter changed for the same position"
        );
        self.required = Some(ordinal);
    }

    pub(crate) fn exclude(&mut self, ordinal: u8) {
        self.excluded.insert(ordinal);
    }
}

/// Bound on how many times a letter must appear
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CountConstraint {
    #[default]
    Unconstrained,
    /// Every copy guessed so far was green or yellow
    AtLeast(u8),
    /// Some copy resolved gray, so the true count is known
    Exactly(u8),
}

impl CountConstraint {
    /// Check whether a candidate's count of the letter is acceptable
    #[inline]
    #[must_use]
    pub const fn permits(self, count: u8) -> bool {
        match self {
            Self::Unconstrained => true,
            Self::AtLeast(min) => count >= min,
            Self::Exactly(exact) => count == exact,
        }
    }

    #[must_use]
    pub const fn is_exact(self) -> bool {
        matches!(self, Self::Exactly(_))
    }

    /// Combine an existing bound with one observed from a new guess
    ///
    /// An exact bound is final. Lower bounds only ever rise.
    #[must_use]
    pub(crate) fn merge(self, observed: Self) -> Self {
        match (self, observed) {
            (Self::Exactly(_), _) | (_, Self::Unconstrained) => self,
            (_, Self::Exactly(_)) | (Self::Unconstrained, _) => observed,
            (Self::AtLeast(a), Self::AtLeast(b)) => Self::AtLeast(a.max(b)),
        }
    }
}
