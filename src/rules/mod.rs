//! Precomputed strategies
//!
//! Decision trees replay a strategy in O(depth) per turn instead of scoring
//! the whole universe again. Trees are written in a compact notation and
//! parsed once; the Knuth (1976) tree for the classic game is embedded.

mod knuth;
mod parser;
mod tree;

pub use knuth::knuth_tree;
pub use parser::parse_rule;
pub use tree::{DecisionTree, FeedbackTable, Rule};
