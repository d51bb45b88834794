//! Entropy-based guess selection
//!
//! Implements Shannon entropy over feedback distributions. Besides driving the
//! entropy strategy, the metrics here feed the `analyze` and `solve` reports.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, calculate_entropy, calculate_metrics, shannon_entropy};
pub use selector::{ENTROPY_EPSILON, select_best_guess};
