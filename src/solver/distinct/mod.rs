//! Most-distinct-outcomes guess selection
//!
//! Maximizes the number of different feedbacks a guess can receive, ignoring
//! how candidates are spread among them.

mod calculator;
mod selector;

pub use calculator::count_distinct_outcomes;
pub use selector::select_best_guess;
