//! Mastermind Solver
//!
//! A Mastermind solving engine: feedback scoring, candidate elimination, minimax,
//! entropy and most-distinct-outcome strategies, and a replayable decision-tree
//! interpreter that ships with Knuth's five-guess strategy.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mastermind_solver::core::{Feedback, GameConfig};
//! use mastermind_solver::solver::{Solver, StrategyType};
//!
//! let game = GameConfig::classic();
//! let universe = game.universe();
//! let secret = "3632".parse().unwrap();
//!
//! let mut solver = Solver::new(game, StrategyType::Minimax, &universe);
//! while !solver.is_solved() {
//!     let guess = solver.next_guess().unwrap();
//!     let feedback = Feedback::score(&secret, &guess).unwrap();
//!     println!("{guess} -> {feedback}");
//!     solver.record_result(guess, feedback).unwrap();
//! }
//! ```

// Core domain types
pub mod core;

// Error type shared by the library
pub mod error;

// Solving algorithms
pub mod solver;

// Precomputed decision trees
pub mod rules;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Result, SolverError};
