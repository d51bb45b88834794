//! Worst-case partition size for a guess

use crate::core::Combination;
use crate::solver::partition::group_by_feedback;

/// Largest number of candidates that could remain after `guess`
///
/// For every feedback the guess could receive, count the candidates that
/// would produce it; the worst case is the largest such count. Returns 0 for
/// an empty candidate list.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Combination;
/// use mastermind_solver::solver::minimax::worst_case;
///
/// let universe: Vec<Combination> = Combination::universe(6, 4).collect();
/// let guess: Combination = "1122".parse().unwrap();
/// assert_eq!(worst_case(&guess, &universe), 256);
/// ```
#[must_use]
pub fn worst_case(guess: &Combination, candidates: &[Combination]) -> usize {
    group_by_feedback(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}
