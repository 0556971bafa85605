//! Guess selection policies
//!
//! Defines the `GuessPolicy` trait and concrete implementations.

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// A policy for choosing the next guess from the current candidates
pub trait GuessPolicy: Sync {
    /// Pick a guess, or `None` if `candidates` is empty
    fn select<'w, R: Rng + ?Sized>(&self, candidates: &[&'w Word], rng: &mut R)
    -> Option<&'w Word>;
}

/// Enum wrapper for all policy types
///
/// Allows runtime selection of policy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyType {
    /// Uniform random choice (default)
    Random(RandomPolicy),
    /// Always the first remaining candidate
    First(FirstCandidatePolicy),
}

impl GuessPolicy for PolicyType {
    fn select<'w, R: Rng + ?Sized>(
        &self,
        candidates: &[&'w Word],
        rng: &mut R,
    ) -> Option<&'w Word> {
        match self {
            Self::Random(p) => p.select(candidates, rng),
            Self::First(p) => p.select(candidates, rng),
        }
    }
}

impl PolicyType {
    /// Create policy from name string
    ///
    /// Supported names: "random", "first". Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "random" => Some(Self::Random(RandomPolicy)),
            "first" => Some(Self::First(FirstCandidatePolicy)),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Random(_) => "random",
            Self::First(_) => "first",
        }
    }
}

impl Default for PolicyType {
    fn default() -> Self {
        Self::Random(RandomPolicy)
    }
}

/// Random policy
///
/// Picks uniformly among the remaining candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomPolicy;

impl GuessPolicy for RandomPolicy {
    fn select<'w, R: Rng + ?Sized>(
        &self,
        candidates: &[&'w Word],
        rng: &mut R,
    ) -> Option<&'w Word> {
        candidates.choose(rng).copied()
    }
}

/// Deterministic policy
///
/// Picks the first remaining candidate in word-list order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstCandidatePolicy;

impl GuessPolicy for FirstCandidatePolicy {
    fn select<'w, R: Rng + ?Sized>(
        &self,
        candidates: &[&'w Word],
        _rng: &mut R,
    ) -> Option<&'w Word> {
        candidates.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup_words() -> Vec<Word> {
        ["crane", "slate", "irate"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect()
    }

    #[test]
    fn random_selects_from_candidates() {
        let words = setup_words();
        let candidates: Vec<&Word> = words.iter().collect();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let guess = RandomPolicy.select(&candidates, &mut rng).unwrap();
            assert!(words.contains(guess));
        }
    }

    #[test]
    fn random_covers_all_candidates() {
        let words = setup_words();
        let candidates: Vec<&Word> = words.iter().collect();
        let mut rng = StdRng::seed_from_u64(1);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(RandomPolicy.select(&candidates, &mut rng).unwrap().text());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn empty_candidates_yield_none() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(RandomPolicy.select(&[], &mut rng).is_none());
        assert!(FirstCandidatePolicy.select(&[], &mut rng).is_none());
    }

    #[test]
    fn first_policy_is_deterministic() {
        let words = setup_words();
        let candidates: Vec<&Word> = words.iter().collect();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            FirstCandidatePolicy
                .select(&candidates, &mut rng)
                .unwrap()
                .text(),
            "crane"
        );
    }

    #[test]
    fn from_name() {
        assert_eq!(PolicyType::from_name("random"), Some(PolicyType::default()));
        assert_eq!(PolicyType::from_name("first").unwrap().name(), "first");
        assert!(PolicyType::from_name("entropy").is_none());
    }
}
