//! Main Mastermind solver interface

use super::{CandidateSet, GuessCache, GuessStrategy, StrategyType};
use crate::core::{Combination, Feedback, GameConfig};
use crate::error::{Result, SolverError};
use crate::rules::DecisionTree;

/// Where a solver's guesses come from
#[derive(Debug, Clone)]
pub enum Guesser<'a> {
    /// Score the universe with a strategy on every turn
    Strategy {
        strategy: StrategyType,
        universe: &'a [Combination],
        cache: Option<&'a GuessCache>,
    },
    /// Follow a precomputed decision tree; holds the current node
    Tree(DecisionTree),
}

/// Stateful solver for one game
///
/// Alternate `next_guess` and `record_result` until `is_solved`.
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    game: GameConfig,
    candidates: CandidateSet,
    guesser: Guesser<'a>,
    history: Vec<(Combination, Feedback)>,
}

impl<'a> Solver<'a> {
    /// Create a solver that picks guesses from `universe` with `strategy`
    ///
    /// `universe` is usually `game.universe()`, but any list of guesses with
    /// the game's pin count works.
    #[must_use]
    pub fn new(game: GameConfig, strategy: StrategyType, universe: &'a [Combination]) -> Self {
        Self::with_guesser(
            game,
            Guesser::Strategy {
                strategy,
                universe,
                cache: None,
            },
        )
    }

    /// Create a solver that replays a decision tree
    #[must_use]
    pub fn with_decision_tree(game: GameConfig, tree: DecisionTree) -> Self {
        Self::with_guesser(game, Guesser::Tree(tree))
    }

    fn with_guesser(game: GameConfig, guesser: Guesser<'a>) -> Self {
        Self {
            game,
            candidates: CandidateSet::full(&game),
            guesser,
            history: Vec::new(),
        }
    }

    /// Memoize strategy guesses in `cache`
    ///
    /// The cache must only be shared with solvers using the same strategy and
    /// universe. Decision-tree solvers ignore it.
    #[must_use]
    pub fn with_cache(mut self, cache: &'a GuessCache) -> Self {
        if let Guesser::Strategy { cache: slot, .. } = &mut self.guesser {
            *slot = Some(cache);
        }
        self
    }

    /// The guess to play next
    ///
    /// Once solved, this keeps returning the solution.
    ///
    /// # Errors
    /// Propagates strategy and decision-tree errors.
    pub fn next_guess(&self) -> Result<Combination> {
        if self.is_solved() {
            return self.candidates.sole().cloned().ok_or(SolverError::EmptyCandidateSet);
        }

        match &self.guesser {
            Guesser::Strategy {
                strategy,
                universe,
                cache: Some(cache),
            } => cache.get_or_compute(&self.candidates, |candidates| {
                strategy.choose_guess(candidates, universe)
            }),
            Guesser::Strategy {
                strategy,
                universe,
                cache: None,
            } => strategy.choose_guess(&self.candidates, universe),
            Guesser::Tree(node) => node.guess(&self.candidates),
        }
    }

    /// Record the feedback received for `guess`
    ///
    /// Eliminates inconsistent candidates and, for decision trees, moves to the
    /// node for `feedback` (unless it solved the game). Returns the number of
    /// candidates removed. On error nothing changes.
    ///
    /// # Errors
    /// - `InvalidFeedback` for structurally impossible feedback
    /// - `LengthMismatch` if `guess` has the wrong number of pegs
    /// - `EmptyCandidateSet` if the feedback contradicts earlier feedback
    /// - decision-tree lookup errors
    pub fn record_result(&mut self, guess: Combination, feedback: Feedback) -> Result<usize> {
        feedback.validate(self.game.pins())?;
        let solved = feedback.is_solved(self.game.pins());

        let next_node = match &self.guesser {
            Guesser::Tree(node) if !solved => Some(node.advance(feedback)?),
            _ => None,
        };

        let removed = self.candidates.eliminate(&guess, feedback)?;
        if let Some(node) = next_node {
            self.guesser = Guesser::Tree(node);
        }

        log::debug!(
            "turn {}: {guess} scored {feedback}, {} candidates left",
            self.history.len() + 1,
            self.candidates.size()
        );
        self.history.push((guess, feedback));
        Ok(removed)
    }

    /// True once a guess has received the solved feedback
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history
            .last()
            .is_some_and(|(_, feedback)| feedback.is_solved(self.game.pins()))
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Guesses and their feedback, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Combination, Feedback)] {
        &self.history
    }

    #[must_use]
    pub const fn game(&self) -> &GameConfig {
        &self.game
    }

    /// Name of the strategy, or "knuth" for a decision tree
    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        match &self.guesser {
            Guesser::Strategy { strategy, .. } => strategy.name(),
            Guesser::Tree(_) => "knuth",
        }
    }
}
