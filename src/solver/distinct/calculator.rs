//! Distinct-outcome counting

use crate::core::{Combination, Feedback};
use rustc_hash::FxHashSet;

/// Number of different feedbacks `guess` can receive against `candidates`
///
/// Unlike entropy, this ignores how many candidates fall under each feedback.
#[must_use]
pub fn count_distinct_outcomes(guess: &Combination, candidates: &[Combination]) -> usize {
    candidates
        .iter()
        .map(|candidate| Feedback::between(candidate, guess))
        .collect::<FxHashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("1122", 13 ; "two pairs")]
    #[test_case("1123", 14 ; "three colors")]
    #[test_case("1234", 14 ; "four colors")]
    #[test_case("1112", 11 ; "triple")]
    #[test_case("1111", 5 ; "monochrome")]
    fn classic_openings(guess: &str, expected: usize) {
        let universe: Vec<Combination> = Combination::universe(6, 4).collect();
        assert_eq!(count_distinct_outcomes(&guess.parse().unwrap(), &universe), expected);
    }

    #[test]
    fn bounded_by_candidate_count() {
        let candidates: Vec<Combination> =
            ["1234", "4321"].iter().map(|s| s.parse().unwrap()).collect();
        assert_eq!(count_distinct_outcomes(&"5555".parse().unwrap(), &candidates), 1);
        assert_eq!(count_distinct_outcomes(&candidates[0], &candidates), 2);
        assert_eq!(count_distinct_outcomes(&candidates[0], &[]), 0);
    }
}
