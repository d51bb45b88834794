//! Knuth's strategy for the classic game
//!
//! The tree comes from D. E. Knuth, "The Computer as Master Mind" (1976). It
//! opens with 1122 and never needs more than five guesses.

use super::{DecisionTree, parse_rule};
use crate::core::GameConfig;
use crate::error::Result;
use std::sync::OnceLock;

// Generated by build.rs from data/knuth_6x4.rules
include!(concat!(env!("OUT_DIR"), "/knuth.rs"));

/// The Knuth decision tree for six colors and four pins
///
/// Parsed on first use and shared afterwards.
///
/// # Errors
/// Returns `RuleSyntax` if the embedded notation is malformed.
pub fn knuth_tree() -> Result<DecisionTree> {
    static TREE: OnceLock<Result<DecisionTree>> = OnceLock::new();
    TREE.get_or_init(|| parse_rule(KNUTH_6X4, &GameConfig::classic()))
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Combination, Feedback};
    use crate::rules::Rule;
    use crate::solver::CandidateSet;

    /// Play one game by following the tree; returns the guesses made
    fn replay(tree: &DecisionTree, game: &GameConfig, secret: &Combination) -> Vec<Combination> {
        let mut node = tree.clone();
        let mut candidates = CandidateSet::full(game);
        let mut guesses = Vec::new();

        loop {
            let guess = node.guess(&candidates).unwrap();
            let feedback = Feedback::score(secret, &guess).unwrap();
            guesses.push(guess.clone());
            if feedback.is_solved(game.pins()) {
                return guesses;
            }

            candidates.eliminate(&guess, feedback).unwrap();
            node = node.advance(feedback).unwrap();
            assert!(guesses.len() < 10, "runaway game for {secret}");
        }
    }

    #[test]
    fn opens_with_1122() {
        let tree = knuth_tree().unwrap();
        let Rule::FixedComplex { expected, guess, .. } = tree.rule() else {
            panic!("root should branch on feedback");
        };
        assert_eq!(*expected, 1296);
        assert_eq!(guess.to_string(), "1122");
    }

    #[test]
    fn shared_between_calls() {
        assert!(knuth_tree().unwrap().ptr_eq(&knuth_tree().unwrap()));
    }

    #[test]
    fn solves_every_secret_within_five_guesses() {
        let game = GameConfig::classic();
        let tree = knuth_tree().unwrap();

        let mut total = 0;
        for secret in game.universe() {
            let guesses = replay(&tree, &game, &secret);

            assert_eq!(guesses.last(), Some(&secret));
            assert!(guesses.len() <= 5, "{secret} took {} guesses", guesses.len());

            let mut distinct = guesses.clone();
            distinct.sort();
            distinct.dedup();
            assert_eq!(distinct.len(), guesses.len(), "{secret} repeated a guess");

            total += guesses.len();
        }

        // 4.476 guesses on average
        assert_eq!(total, 5801);
    }
}
