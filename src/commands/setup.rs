//! Shared solver construction for the commands
//!
//! A `SolverSetup` owns everything the solvers of one command share: the game,
//! the universe guesses are drawn from, the guess cache and, for the Knuth
//! method, the parsed decision tree.

use crate::core::{Combination, Feedback, GameConfig};
use crate::error::{Result, SolverError};
use crate::rules::{DecisionTree, knuth_tree};
use crate::solver::{CandidateSet, GuessCache, GuessStrategy, Solver, StrategyType};

/// How a command chooses its guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Score every turn with a strategy
    Strategy(StrategyType),
    /// Replay Knuth's decision tree (classic game only)
    Knuth,
}

impl Method {
    /// Look a method up by name: a strategy name or "knuth"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "knuth" => Some(Self::Knuth),
            other => StrategyType::from_name(other).map(Self::Strategy),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Strategy(strategy) => strategy.name(),
            Self::Knuth => "knuth",
        }
    }
}

/// A method with whatever it needs loaded
#[derive(Debug)]
enum Source {
    Strategy(StrategyType),
    Tree(DecisionTree),
}

/// Everything needed to create solvers for one game and method
#[derive(Debug)]
pub struct SolverSetup {
    game: GameConfig,
    source: Source,
    universe: Vec<Combination>,
    cache: GuessCache,
}

impl SolverSetup {
    /// Prepare solvers for `game` using `method`
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the Knuth method is asked for any game other
    /// than the classic one.
    pub fn new(game: GameConfig, method: Method) -> Result<Self> {
        let source = match method {
            Method::Knuth if !game.is_classic() => {
                return Err(SolverError::InvalidConfig(format!(
                    "the knuth tree only covers 6 colors and 4 pins, not {} and {}",
                    game.colors(),
                    game.pins()
                )));
            }
            Method::Knuth => Source::Tree(knuth_tree()?),
            Method::Strategy(strategy) => Source::Strategy(strategy),
        };

        Ok(Self {
            game,
            source,
            universe: game.universe(),
            cache: GuessCache::new(),
        })
    }

    /// Fix the opening guess of every game played with this setup
    ///
    /// # Errors
    /// Returns `InvalidConfig` if `opening` does not fit the game or the
    /// method replays a decision tree.
    pub fn with_opening(self, opening: Combination) -> Result<Self> {
        self.game.check(&opening)?;
        if let Source::Tree(_) = self.source {
            return Err(SolverError::InvalidConfig(
                "the knuth tree has a fixed opening".into(),
            ));
        }

        self.cache.insert(&CandidateSet::full(&self.game), opening);
        Ok(self)
    }

    /// A fresh solver for one game, sharing this setup's cache
    #[must_use]
    pub fn solver(&self) -> Solver<'_> {
        match &self.source {
            Source::Strategy(strategy) => {
                Solver::new(self.game, *strategy, &self.universe).with_cache(&self.cache)
            }
            Source::Tree(tree) => Solver::with_decision_tree(self.game, tree.clone()),
        }
    }

    /// Play one full game against `secret`, giving up after `max_guesses`
    ///
    /// Returns every guess with its feedback; the game was solved if the last
    /// feedback is the solved one.
    ///
    /// # Errors
    /// Returns `InvalidConfig` for a secret outside the game, and propagates
    /// solver errors.
    pub fn play(
        &self,
        secret: &Combination,
        max_guesses: usize,
    ) -> Result<Vec<(Combination, Feedback)>> {
        self.game.check(secret)?;
        let mut solver = self.solver();

        while !solver.is_solved() && solver.history().len() < max_guesses {
            let guess = solver.next_guess()?;
            let feedback = Feedback::score(secret, &guess)?;
            solver.record_result(guess, feedback)?;
        }

        Ok(solver.history().to_vec())
    }

    #[must_use]
    pub const fn game(&self) -> &GameConfig {
        &self.game
    }

    #[must_use]
    pub const fn method(&self) -> Method {
        match self.source {
            Source::Strategy(strategy) => Method::Strategy(strategy),
            Source::Tree(_) => Method::Knuth,
        }
    }

    #[must_use]
    pub fn universe(&self) -> &[Combination] {
        &self.universe
    }

    #[must_use]
    pub const fn cache(&self) -> &GuessCache {
        &self.cache
    }
}
