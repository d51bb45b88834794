//! Pure entropy-based guess selection
//!
//! Selects guesses that maximize Shannon entropy (expected information gain).

use super::calculator::calculate_entropy;
use crate::core::Combination;
use crate::solver::CandidateSet;
use rayon::prelude::*;

/// Entropies closer than this are treated as equal
pub const ENTROPY_EPSILON: f64 = 1e-9;

/// Select best guess by maximizing entropy
///
/// All guesses within `ENTROPY_EPSILON` of the best entropy are tied; among
/// them a member of the candidate set wins, then the smallest combination.
/// Returns `None` if the universe is empty or no guess carries any
/// information (every guess has zero entropy).
#[must_use]
pub fn select_best_guess<'a>(
    universe: &'a [Combination],
    candidates: &CandidateSet,
) -> Option<(&'a Combination, f64)> {
    let scored: Vec<(&Combination, f64)> = universe
        .par_iter()
        .map(|guess| (guess, calculate_entropy(guess, candidates.as_slice())))
        .collect();

    let best = scored
        .iter()
        .map(|&(_, entropy)| entropy)
        .max_by(f64::total_cmp)?;

    if best < ENTROPY_EPSILON {
        return None;
    }

    scored
        .into_iter()
        .filter(|&(_, entropy)| best - entropy < ENTROPY_EPSILON)
        .min_by(|(g1, _), (g2, _)| {
            candidates
                .contains(g2)
                .cmp(&candidates.contains(g1))
                .then_with(|| g1.cmp(g2))
        })
}
