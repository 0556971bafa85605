//! Single-game driver
//!
//! A [`Game`] tracks one target's clue state and the shrinking set of words
//! that are still legal hard-mode guesses. [`play_game`] plays it to the end
//! with a [`GuessPolicy`].

use super::config::SimulationConfig;
use super::error::SimulationError;
use super::policy::GuessPolicy;
use crate::core::{Clues, Word};
use crate::game::GameState;
use log::{debug, trace};
use rand::Rng;

/// Why a game stopped without being solved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbandonReason {
    /// No legal guess remains
    NoCandidates,
    /// The turn cap was reached
    TurnLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Abandoned(AbandonReason),
}

/// Terminal result of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won {
        guesses: usize,
    },
    Abandoned {
        guesses: usize,
        reason: AbandonReason,
    },
}

impl GameOutcome {
    #[must_use]
    pub const fn guesses(self) -> usize {
        match self {
            Self::Won { guesses } | Self::Abandoned { guesses, .. } => guesses,
        }
    }

    #[must_use]
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won { .. })
    }
}

/// One scored turn, for traces
#[derive(Debug, Clone, Copy)]
pub struct TurnRecord<'w> {
    /// 1-based turn number
    pub turn: usize,
    /// Candidates available before this guess
    pub candidates: usize,
    pub guess: &'w Word,
    pub clues: Clues,
}

/// A game in progress: clue state plus remaining candidates
#[derive(Debug, Clone)]
pub struct Game<'w> {
    state: GameState,
    candidates: Vec<&'w Word>,
    status: GameStatus,
}

impl<'w> Game<'w> {
    /// Start a game whose candidates are all of `valid`
    #[must_use]
    pub fn new(target: Word, valid: &'w [Word]) -> Self {
        let candidates: Vec<&'w Word> = valid.iter().collect();
        let status = if candidates.is_empty() {
            GameStatus::Abandoned(AbandonReason::NoCandidates)
        } else {
            GameStatus::InProgress
        };
        Self {
            state: GameState::new(target),
            candidates,
            status,
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[&'w Word] {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Guesses made so far
    #[inline]
    #[must_use]
    pub const fn turns(&self) -> usize {
        self.state.guesses()
    }

    /// Score a guess and narrow the candidates to what hard mode still allows
    ///
    /// The candidate set never grows. Once it is empty the game is abandoned.
    pub fn guess(&mut self, guess: &Word) -> Clues {
        debug_assert_eq!(self.status, GameStatus::InProgress);

        let (clues, won) = self.state.score(guess);
        if won {
            self.status = GameStatus::Won;
        } else {
            let state = &self.state;
            self.candidates.retain(|word| state.is_allowed(word));
            if self.candidates.is_empty() {
                self.status = GameStatus::Abandoned(AbandonReason::NoCandidates);
            }
        }
        clues
    }

    /// Stop the game without a win
    pub fn abandon(&mut self, reason: AbandonReason) {
        if self.status == GameStatus::InProgress {
            self.status = GameStatus::Abandoned(reason);
        }
    }

    /// Terminal outcome, or `None` while the game is still running
    #[must_use]
    pub const fn outcome(&self) -> Option<GameOutcome> {
        let guesses = self.state.guesses();
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won => Some(GameOutcome::Won { guesses }),
            GameStatus::Abandoned(reason) => Some(GameOutcome::Abandoned { guesses, reason }),
        }
    }
}

/// Play one game against `target` until it is won or abandoned
///
/// `observe` sees every scored turn. With `config.strict` set and the target
/// in `valid`, the target must survive every filter step.
///
/// # Errors
/// Returns `SimulationError::PolicyFailed` if the policy picks nothing from a
/// non-empty candidate set, and `SimulationError::TargetFiltered` if strict
/// checking catches the target leaving its own candidate set.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_hardmode::core::Word;
/// use wordle_hardmode::simulation::{RandomPolicy, SimulationConfig, play_game};
///
/// let valid: Vec<Word> = ["crane", "trace", "slate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let mut rng = StdRng::seed_from_u64(1);
/// let config = SimulationConfig::new(1);
///
/// let outcome = play_game(&valid[0], &valid, &RandomPolicy, &mut rng, &config, |_| {}).unwrap();
/// assert!(outcome.is_won());
/// assert!(outcome.guesses() <= 3);
/// ```
pub fn play_game<'w, P, R, F>(
    target: &Word,
    valid: &'w [Word],
    policy: &P,
    rng: &mut R,
    config: &SimulationConfig,
    mut observe: F,
) -> Result<GameOutcome, SimulationError>
where
    P: GuessPolicy,
    R: Rng + ?Sized,
    F: FnMut(&TurnRecord<'w>),
{
    let mut game = Game::new(target.clone(), valid);
    let check_target = config.strict && valid.contains(target);

    while game.status() == GameStatus::InProgress {
        if game.turns() >= config.max_turns {
            game.abandon(AbandonReason::TurnLimit);
            break;
        }

        let candidates = game.candidates().len();
        let guess =
            policy
                .select(game.candidates(), rng)
                .ok_or_else(|| SimulationError::PolicyFailed {
                    target: target.text().to_string(),
                    candidates,
                })?;

        let clues = game.guess(guess);
        let record = TurnRecord {
            turn: game.turns(),
            candidates,
            guess,
            clues,
        };
        trace!(
            "{target}: turn {} guess {guess} -> [{clues}] ({candidates} candidates)",
            record.turn
        );
        observe(&record);

        if check_target && game.status() != GameStatus::Won && !game.state().is_allowed(target) {
            return Err(SimulationError::TargetFiltered {
                target: target.text().to_string(),
                guess: guess.text().to_string(),
                turn: record.turn,
            });
        }
    }

    let outcome = game
        .outcome()
        .unwrap_or(GameOutcome::Abandoned {
            guesses: game.turns(),
            reason: AbandonReason::TurnLimit,
        });
    debug!("{target}: {outcome:?}");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{FirstCandidatePolicy, RandomPolicy};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn setup_valid() -> Vec<Word> {
        words(&[
            "crane", "trace", "slate", "irate", "crate", "grate", "speed", "erase", "level",
            "alloy", "allow", "llama", "geese", "steed", "spend",
        ])
    }

    #[test]
    fn immediate_win() {
        let valid = words(&["crane"]);
        let mut rng = StdRng::seed_from_u64(0);
        let outcome = play_game(
            &valid[0],
            &valid,
            &RandomPolicy,
            &mut rng,
            &SimulationConfig::new(1),
            |_| {},
        )
        .unwrap();
        assert_eq!(outcome, GameOutcome::Won { guesses: 1 });
    }

    #[test]
    fn random_games_always_finish_with_target_in_list() {
        let valid = setup_valid();
        let config = SimulationConfig::new(1);
        let mut rng = StdRng::seed_from_u64(99);

        for target in &valid {
            for _ in 0..20 {
                let outcome =
                    play_game(target, &valid, &RandomPolicy, &mut rng, &config, |_| {}).unwrap();
                assert!(outcome.is_won(), "{target}: {outcome:?}");
                assert!(outcome.guesses() <= valid.len());
            }
        }
    }

    #[test]
    fn candidate_count_never_increases() {
        let valid = setup_valid();
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = Vec::new();

        play_game(
            &valid[6],
            &valid,
            &RandomPolicy,
            &mut rng,
            &SimulationConfig::new(1),
            |record| seen.push(record.candidates),
        )
        .unwrap();

        assert_eq!(seen[0], valid.len());
        assert!(seen.windows(2).all(|pair| pair[1] < pair[0]));
    }

    #[test]
    fn target_outside_valid_list_can_be_abandoned() {
        let valid = words(&["crane", "trace"]);
        let target = Word::new("zesty").unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let outcome = play_game(
            &target,
            &valid,
            &FirstCandidatePolicy,
            &mut rng,
            &SimulationConfig::new(1),
            |_| {},
        )
        .unwrap();

        assert_eq!(
            outcome,
            GameOutcome::Abandoned {
                guesses: 1,
                reason: AbandonReason::NoCandidates
            }
        );
    }

    #[test]
    fn turn_limit_abandons() {
        let valid = setup_valid();
        let target = Word::new("level").unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let config = SimulationConfig::new(1).with_max_turns(1);

        // "crane" is first and is not the target
        let outcome =
            play_game(&target, &valid, &FirstCandidatePolicy, &mut rng, &config, |_| {}).unwrap();
        assert_eq!(
            outcome,
            GameOutcome::Abandoned {
                guesses: 1,
                reason: AbandonReason::TurnLimit
            }
        );
    }

    #[test]
    fn deterministic_policy_trace_is_reproducible() {
        let valid = setup_valid();
        let run = || {
            let mut rng = StdRng::seed_from_u64(0);
            let mut trace = Vec::new();
            play_game(
                &valid[3],
                &valid,
                &FirstCandidatePolicy,
                &mut rng,
                &SimulationConfig::new(1),
                |record| trace.push((record.guess.text().to_string(), record.clues)),
            )
            .unwrap();
            trace
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn game_state_machine() {
        let valid = words(&["crane", "trace", "slate"]);
        let mut game = Game::new(Word::new("slate").unwrap(), &valid);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.outcome(), None);

        let clues = game.guess(&valid[0]);
        assert_eq!(clues.to_clue_string(), "__G_G");
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.candidates().len(), 1);

        game.guess(&valid[2]);
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.outcome(), Some(GameOutcome::Won { guesses: 2 }));
    }

    #[test]
    fn empty_valid_list_starts_abandoned() {
        let game = Game::new(Word::new("crane").unwrap(), &[]);
        assert_eq!(
            game.status(),
            GameStatus::Abandoned(AbandonReason::NoCandidates)
        );
    }
}
