//! Shannon entropy calculation for feedback distributions
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::core::{Combination, Feedback};
use crate::solver::partition::group_by_feedback;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of different feedbacks the guess can receive
    pub distinct_outcomes: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing feedback x.
#[must_use]
pub fn calculate_entropy(guess: &Combination, candidates: &[Combination]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(&group_by_feedback(guess, candidates))
}

/// Calculate Shannon entropy from a feedback distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one feedback with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n feedbacks
///
/// # Examples
/// ```
/// use mastermind_solver::core::Feedback;
/// use mastermind_solver::solver::entropy::shannon_entropy;
/// use rustc_hash::FxHashMap;
///
/// let mut uniform = FxHashMap::default();
/// uniform.insert(Feedback::new(0, 0), 25);
/// uniform.insert(Feedback::new(0, 1), 25);
/// uniform.insert(Feedback::new(1, 0), 25);
/// uniform.insert(Feedback::new(1, 1), 25);
///
/// let entropy = shannon_entropy(&uniform);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn shannon_entropy<S>(feedback_counts: &HashMap<Feedback, usize, S>) -> f64
where
    S: BuildHasher,
{
    let total = feedback_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    feedback_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, max partition size and the
/// number of distinct feedbacks, all from a single grouping pass.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn calculate_metrics(guess: &Combination, candidates: &[Combination]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
            distinct_outcomes: 0,
        };
    }

    let counts = group_by_feedback(guess, candidates);
    let total = candidates.len() as f64;

    // Σ p * |group|
    let expected_remaining: f64 = counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            p * count as f64
        })
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(&counts),
        expected_remaining,
        max_partition: counts.values().max().copied().unwrap_or(0),
        distinct_outcomes: counts.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn universe() -> Vec<Combination> {
        Combination::universe(6, 4).collect()
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let mut counts = FxHashMap::default();
        counts.insert(Feedback::new(0, 0), 10);

        assert!(shannon_entropy(&counts).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_skewed_distribution() {
        let mut uniform = FxHashMap::default();
        let mut skewed = FxHashMap::default();
        for (i, feedback) in Feedback::possible(2).into_iter().take(4).enumerate() {
            uniform.insert(feedback, 25);
            skewed.insert(feedback, if i == 0 { 97 } else { 1 });
        }

        assert!(shannon_entropy(&uniform) > shannon_entropy(&skewed));
        assert!((shannon_entropy(&uniform) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn shannon_entropy_empty() {
        let counts: FxHashMap<Feedback, usize> = FxHashMap::default();
        assert!(shannon_entropy(&counts).abs() < f64::EPSILON);
    }

    #[test]
    fn classic_opening_entropies() {
        let universe = universe();
        let entropy = |text: &str| calculate_entropy(&text.parse().unwrap(), &universe);

        assert!((entropy("1234") - 3.056_671).abs() < 1e-5);
        assert!((entropy("1123") - 3.043_698).abs() < 1e-5);
        assert!((entropy("1122") - 2.885_102).abs() < 1e-5);
        assert!((entropy("1111") - 1.498_435).abs() < 1e-5);
    }

    #[test]
    fn metrics_for_knuth_opening() {
        let universe = universe();
        let metrics = calculate_metrics(&"1122".parse().unwrap(), &universe);

        assert_eq!(metrics.max_partition, 256);
        assert_eq!(metrics.distinct_outcomes, 13);
        assert!((metrics.expected_remaining - 204.5355).abs() < 1e-3);
        assert!((metrics.entropy - 2.885_102).abs() < 1e-5);
    }

    #[test]
    fn perfect_split_is_one_bit() {
        let candidates: Vec<Combination> =
            ["12", "34"].iter().map(|s| s.parse().unwrap()).collect();
        let metrics = calculate_metrics(&candidates[0], &candidates);

        assert!((metrics.entropy - 1.0).abs() < 1e-9);
        assert!((metrics.expected_remaining - 1.0).abs() < 1e-9);
        assert_eq!(metrics.max_partition, 1);
        assert_eq!(metrics.distinct_outcomes, 2);
    }

    #[test]
    fn empty_candidates() {
        let metrics = calculate_metrics(&"12".parse().unwrap(), &[]);
        assert_eq!(metrics.distinct_outcomes, 0);
        assert!(calculate_entropy(&"12".parse().unwrap(), &[]).abs() < f64::EPSILON);
    }
}
