//! Most-distinct-outcomes guess selection

use super::calculator::count_distinct_outcomes;
use crate::core::Combination;
use crate::solver::CandidateSet;
use rayon::prelude::*;

/// Select the guess with the most distinct feedbacks
///
/// Ties go to members of the candidate set, then to the smallest combination.
/// Returns `None` if no guess can receive more than one feedback, since such a
/// guess cannot tell any candidates apart.
#[must_use]
pub fn select_best_guess<'a>(
    universe: &'a [Combination],
    candidates: &CandidateSet,
) -> Option<(&'a Combination, usize)> {
    universe
        .par_iter()
        .map(|guess| (guess, count_distinct_outcomes(guess, candidates.as_slice())))
        .filter(|&(_, outcomes)| outcomes > 1)
        .min_by(|(g1, d1), (g2, d2)| {
            d2.cmp(d1)
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
    fn classic_opening_is_1123() {
        let game = GameConfig::classic();
        let universe = game.universe();
        let candidates = CandidateSet::full(&game);

        let (best, outcomes) = select_best_guess(&universe, &candidates).unwrap();
        assert_eq!(best.to_string(), "1123");
        assert_eq!(outcomes, 14);
    }

    #[test]
    fn prefers_candidates_then_smallest() {
        let universe = combos(&["12", "21", "31"]);
        let candidates = CandidateSet::from_combinations(2, combos(&["21", "33"])).unwrap();

        let (best, outcomes) = select_best_guess(&universe, &candidates).unwrap();
        assert_eq!(best.to_string(), "21");
        assert_eq!(outcomes, 2);
    }

    #[test]
    fn none_when_every_guess_sees_one_outcome() {
        let universe = combos(&["55", "56"]);
        let candidates = CandidateSet::from_combinations(2, combos(&["11", "22"])).unwrap();
        assert!(select_best_guess(&universe, &candidates).is_none());
    }
}
