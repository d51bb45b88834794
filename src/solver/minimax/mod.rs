//! Minimax (Knuth-style) guess selection
//!
//! Minimizes the number of candidates left in the worst case.

mod calculator;
mod selector;

pub use calculator::worst_case;
pub use selector::select_best_guess;
