//! Guess selection strategies
//!
//! Defines the `GuessStrategy` trait and its three implementations.

use super::{CandidateSet, distinct, entropy, minimax};
use crate::core::Combination;
use crate::error::{Result, SolverError};

/// A strategy for choosing the next guess
pub trait GuessStrategy: Send + Sync {
    /// Short name used in logs and reports
    fn name(&self) -> &'static str;

    /// Choose a guess from `universe` given the remaining candidates
    ///
    /// A single remaining candidate is returned as is, without scoring.
    ///
    /// # Errors
    /// - `EmptyCandidateSet` if no candidate remains
    /// - `LengthMismatch` if the universe holds guesses of another length
    /// - `NoUsableGuess` if no guess in `universe` narrows the candidates
    fn choose_guess(
        &self,
        candidates: &CandidateSet,
        universe: &[Combination],
    ) -> Result<Combination>;
}

/// Checks shared by every strategy; `Some` when no scoring is needed
fn preflight(candidates: &CandidateSet, universe: &[Combination]) -> Result<Option<Combination>> {
    if candidates.is_empty() {
        return Err(SolverError::EmptyCandidateSet);
    }
    if let Some(only) = candidates.sole() {
        return Ok(Some(only.clone()));
    }
    if let Some(guess) = universe.iter().find(|g| g.len() != candidates.pins()) {
        return Err(SolverError::LengthMismatch {
            secret: candidates.pins(),
            guess: guess.len(),
        });
    }
    Ok(None)
}

fn no_usable_guess(candidates: &CandidateSet) -> SolverError {
    SolverError::NoUsableGuess {
        candidates: candidates.size(),
    }
}

/// Minimize the worst-case number of remaining candidates
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy;

impl GuessStrategy for MinimaxStrategy {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn choose_guess(
        &self,
        candidates: &CandidateSet,
        universe: &[Combination],
    ) -> Result<Combination> {
        if let Some(only) = preflight(candidates, universe)? {
            return Ok(only);
        }

        let (guess, worst) = minimax::select_best_guess(universe, candidates)
            .ok_or_else(|| no_usable_guess(candidates))?;
        log::debug!(
            "minimax picked {guess} (worst case {worst} of {})",
            candidates.size()
        );
        Ok(guess.clone())
    }
}

/// Maximize the Shannon entropy of the feedback distribution
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyStrategy;

impl GuessStrategy for EntropyStrategy {
    fn name(&self) -> &'static str {
        "entropy"
    }

    fn choose_guess(
        &self,
        candidates: &CandidateSet,
        universe: &[Combination],
    ) -> Result<Combination> {
        if let Some(only) = preflight(candidates, universe)? {
            return Ok(only);
        }

        let (guess, bits) = entropy::select_best_guess(universe, candidates)
            .ok_or_else(|| no_usable_guess(candidates))?;
        log::debug!(
            "entropy picked {guess} ({bits:.4} bits over {} candidates)",
            candidates.size()
        );
        Ok(guess.clone())
    }
}

/// Maximize the number of distinct feedbacks
#[derive(Debug, Clone, Copy, Default)]
pub struct MostDistinctStrategy;

impl GuessStrategy for MostDistinctStrategy {
    fn name(&self) -> &'static str {
        "most-parts"
    }

    fn choose_guess(
        &self,
        candidates: &CandidateSet,
        universe: &[Combination],
    ) -> Result<Combination> {
        if let Some(only) = preflight(candidates, universe)? {
            return Ok(only);
        }

        let (guess, outcomes) = distinct::select_best_guess(universe, candidates)
            .ok_or_else(|| no_usable_guess(candidates))?;
        log::debug!(
            "most-parts picked {guess} ({outcomes} outcomes over {} candidates)",
            candidates.size()
        );
        Ok(guess.clone())
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Knuth-style worst-case minimization
    Minimax,
    /// Shannon entropy maximization
    Entropy,
    /// Most distinct feedbacks
    MostDistinct,
}

impl StrategyType {
    /// Every strategy, in display order
    pub const ALL: [Self; 3] = [Self::Minimax, Self::Entropy, Self::MostDistinct];

    /// Look a strategy up by name
    ///
    /// Supported names: "minimax", "entropy", "most-parts" (alias "distinct").
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "minimax" => Some(Self::Minimax),
            "entropy" => Some(Self::Entropy),
            "most-parts" | "distinct" => Some(Self::MostDistinct),
            _ => None,
        }
    }
}

impl GuessStrategy for StrategyType {
    fn name(&self) -> &'static str {
        match self {
            Self::Minimax => MinimaxStrategy.name(),
            Self::Entropy => EntropyStrategy.name(),
            Self::MostDistinct => MostDistinctStrategy.name(),
        }
    }

    fn choose_guess(
        &self,
        candidates: &CandidateSet,
        universe: &[Combination],
    ) -> Result<Combination> {
        match self {
            Self::Minimax => MinimaxStrategy.choose_guess(candidates, universe),
            Self::Entropy => EntropyStrategy.choose_guess(candidates, universe),
            Self::MostDistinct => MostDistinctStrategy.choose_guess(candidates, universe),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use test_case::test_case;

    fn combos(texts: &[&str]) -> Vec<Combination> {
        texts.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test_case(StrategyType::Minimax ; "minimax")]
    #[test_case(StrategyType::Entropy ; "entropy")]
    #[test_case(StrategyType::MostDistinct ; "most distinct")]
    fn single_candidate_short_circuits(strategy: StrategyType) {
        // The universe cannot split anything, so only the short circuit succeeds
        let universe = combos(&["55"]);
        let candidates = CandidateSet::from_combinations(2, combos(&["13"])).unwrap();

        let guess = strategy.choose_guess(&candidates, &universe).unwrap();
        assert_eq!(guess.to_string(), "13");
    }

    #[test_case(StrategyType::Minimax ; "minimax")]
    #[test_case(StrategyType::Entropy ; "entropy")]
    #[test_case(StrategyType::MostDistinct ; "most distinct")]
    fn empty_candidates_fail(strategy: StrategyType) {
        let candidates = CandidateSet::from_combinations(2, Vec::new()).unwrap();
        let err = strategy.choose_guess(&candidates, &combos(&["12"])).unwrap_err();
        assert_eq!(err, SolverError::EmptyCandidateSet);
    }

    #[test_case(StrategyType::Minimax ; "minimax")]
    #[test_case(StrategyType::Entropy ; "entropy")]
    #[test_case(StrategyType::MostDistinct ; "most distinct")]
    fn useless_universe_is_reported(strategy: StrategyType) {
        let candidates = CandidateSet::from_combinations(2, combos(&["11", "22"])).unwrap();
        let err = strategy.choose_guess(&candidates, &combos(&["33", "34"])).unwrap_err();
        assert_eq!(err, SolverError::NoUsableGuess { candidates: 2 });
    }

    #[test_case(StrategyType::Minimax ; "minimax")]
    #[test_case(StrategyType::Entropy ; "entropy")]
    #[test_case(StrategyType::MostDistinct ; "most distinct")]
    fn universe_length_is_checked(strategy: StrategyType) {
        let candidates = CandidateSet::from_combinations(2, combos(&["11", "22"])).unwrap();
        let err = strategy.choose_guess(&candidates, &combos(&["123"])).unwrap_err();
        assert_eq!(err, SolverError::LengthMismatch { secret: 2, guess: 3 });
    }

    #[test_case(StrategyType::Minimax, "1122" ; "minimax")]
    #[test_case(StrategyType::Entropy, "1234" ; "entropy")]
    #[test_case(StrategyType::MostDistinct, "1123" ; "most distinct")]
    fn classic_openings(strategy: StrategyType, expected: &str) {
        let game = GameConfig::classic();
        let guess = strategy
            .choose_guess(&CandidateSet::full(&game), &game.universe())
            .unwrap();
        assert_eq!(guess.to_string(), expected);
    }

    #[test]
    fn from_name_round_trips() {
        for strategy in StrategyType::ALL {
            assert_eq!(StrategyType::from_name(strategy.name()), Some(strategy));
        }
        assert_eq!(StrategyType::from_name("distinct"), Some(StrategyType::MostDistinct));
        assert_eq!(StrategyType::from_name("knuth"), None);
    }
}
