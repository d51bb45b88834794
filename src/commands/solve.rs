//! Secret solving command
//!
//! Solves a specific secret and returns the solution path.

use super::SolverSetup;
use crate::core::{Combination, Feedback};
use crate::error::Result;
use crate::solver::entropy::calculate_metrics;

/// Configuration for solving a secret
pub struct SolveConfig {
    pub secret: Combination,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: Combination) -> Self {
        Self {
            secret,
            max_guesses: 10,
        }
    }
}

/// Result of solving a secret
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub secret: Combination,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: Combination,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve `config.secret` with a solver from `setup`
///
/// # Errors
///
/// Returns an error if:
/// - The secret does not fit the game
/// - The solver cannot provide a guess
pub fn solve_secret(config: SolveConfig, setup: &SolverSetup) -> Result<SolveResult> {
    setup.game().check(&config.secret)?;

    let mut solver = setup.solver();
    let mut guesses = Vec::new();

    while !solver.is_solved() && guesses.len() < config.max_guesses {
        let candidates_before = solver.candidates().size();
        let guess = solver.next_guess()?;

        // Metrics only mean something while there is a choice left
        let (entropy, expected_remaining) = if candidates_before > 1 {
            let metrics = calculate_metrics(&guess, solver.candidates().as_slice());
            (Some(metrics.entropy), Some(metrics.expected_remaining))
        } else {
            (None, None)
        };

        let feedback = Feedback::score(&config.secret, &guess)?;
        solver.record_result(guess.clone(), feedback)?;

        guesses.push(GuessStep {
            guess,
            feedback,
            candidates_before,
            candidates_after: solver.candidates().size(),
            entropy,
            expected_remaining,
        });
    }

    Ok(SolveResult {
        success: solver.is_solved(),
        guesses,
        secret: config.secret,
    })
}
