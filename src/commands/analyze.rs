//! Guess analysis command
//!
//! Analyzes how a guess splits the full set of secrets of a game.

use crate::core::{Combination, Feedback, GameConfig};
use crate::error::Result;
use crate::solver::entropy::{GuessMetrics, calculate_metrics};
use crate::solver::partition::partition;

/// Number of example secrets kept per feedback
const EXAMPLES_PER_FEEDBACK: usize = 3;

/// One feedback the guess can receive
pub struct FeedbackGroup {
    pub feedback: Feedback,
    pub count: usize,
    pub examples: Vec<Combination>,
}

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Combination,
    pub metrics: GuessMetrics,
    pub expected_reduction: f64,
    pub total_candidates: usize,
    /// Ordered by feedback
    pub groups: Vec<FeedbackGroup>,
}

/// Analyze `guess` as the opening move of `game`
///
/// # Errors
///
/// Returns `InvalidConfig` if the guess has the wrong length or uses a color
/// outside the game.
pub fn analyze_guess(guess: &Combination, game: &GameConfig) -> Result<AnalysisResult> {
    game.check(guess)?;

    let candidates = game.universe();
    let metrics = calculate_metrics(guess, &candidates);

    let groups = partition(guess, &candidates)
        .into_iter()
        .map(|(feedback, members)| FeedbackGroup {
            feedback,
            count: members.len(),
            examples: members.into_iter().take(EXAMPLES_PER_FEEDBACK).cloned().collect(),
        })
        .collect();

    Ok(AnalysisResult {
        guess: guess.clone(),
        metrics,
        expected_reduction: metrics.entropy.exp2(),
        total_candidates: candidates.len(),
        groups,
    })
}
