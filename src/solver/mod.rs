//! Mastermind solving algorithms
//!
//! Candidate bookkeeping, the three guess-selection strategies, the shared
//! guess cache and the stateful `Solver` that ties them together.

mod cache;
mod candidates;
pub mod distinct;
mod engine;
pub mod entropy;
pub mod minimax;
pub mod partition;
pub mod strategy;

pub use cache::GuessCache;
pub use candidates::CandidateSet;
pub use engine::{Guesser, Solver};
pub use strategy::{
    EntropyStrategy, GuessStrategy, MinimaxStrategy, MostDistinctStrategy, StrategyType,
};
