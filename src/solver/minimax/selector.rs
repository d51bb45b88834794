//! Minimax guess selection
//!
//! Picks the guess with the smallest worst case. Ties go to members of the
//! candidate set, then to the smallest combination.

use super::calculator::worst_case;
use crate::core::Combination;
use crate::solver::CandidateSet;
use rayon::prelude::*;

/// Select the guess minimizing the worst-case number of remaining candidates
///
/// Guesses whose worst case equals the candidate count cannot eliminate
/// anything and are never chosen. Returns the guess and its worst case, or
/// `None` if no guess in `universe` narrows the set.
#[must_use]
pub fn select_best_guess<'a>(
    universe: &'a [Combination],
    candidates: &CandidateSet,
) -> Option<(&'a Combination, usize)> {
    let total = candidates.size();

    universe
        .par_iter()
        .map(|guess| (guess, worst_case(guess, candidates.as_slice())))
        .filter(|&(_, worst)| worst < total)
        .min_by(|(g1, w1), (g2, w2)| {
            w1.cmp(w2)
                .then_with(|| candidates.contains(g2).cmp(&candidates.contains(g1)))
                .then_with(|| g1.cmp(g2))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    fn combos(texts: &[&str]) -> Vec<Combination> {
        texts.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn classic_opening_is_1122() {
        let game = GameConfig::classic();
        let universe = game.universe();
        let candidates = CandidateSet::full(&game);

        let (best, worst) = select_best_guess(&universe, &candidates).unwrap();
        assert_eq!(best.to_string(), "1122");
        assert_eq!(worst, 256);
    }

    #[test]
    fn prefers_candidates_on_ties() {
        // 11 and 22 score (1,0) against both candidates and are skipped;
        // 12 and 21 split them into singletons
        let universe = combos(&["11", "12", "21", "22"]);
        let candidates = CandidateSet::from_combinations(2, combos(&["21", "12"])).unwrap();

        let (best, worst) = select_best_guess(&universe, &candidates).unwrap();
        assert_eq!(best.to_string(), "12");
        assert_eq!(worst, 1);
    }

    #[test]
    fn skips_guesses_that_eliminate_nothing() {
        let universe = combos(&["33", "13"]);
        let candidates = CandidateSet::from_combinations(2, combos(&["11", "22"])).unwrap();

        let (best, _) = select_best_guess(&universe, &candidates).unwrap();
        assert_eq!(best.to_string(), "13");
    }

    #[test]
    fn none_when_nothing_narrows() {
        let universe = combos(&["33", "34"]);
        let candidates = CandidateSet::from_combinations(2, combos(&["11", "22"])).unwrap();
        assert!(select_best_guess(&universe, &candidates).is_none());
    }

    #[test]
    fn deterministic_across_runs() {
        let game = GameConfig::new(4, 3).unwrap();
        let universe = game.universe();
        let candidates = CandidateSet::full(&game);

        let first = select_best_guess(&universe, &candidates);
        for _ in 0..5 {
            assert_eq!(select_best_guess(&universe, &candidates), first);
        }
        assert_eq!(first.map(|(g, _)| g.to_string()), Some("123".to_string()));
    }
}
