//! Grouping candidates by the feedback a guess would receive

use crate::core::{Combination, Feedback};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Count how many candidates produce each feedback against `guess`
#[must_use]
pub fn group_by_feedback(
    guess: &Combination,
    candidates: &[Combination],
) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let feedback = Feedback::between(candidate, guess);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}

/// Split candidates into the groups `guess` cannot tell apart, ordered by feedback
#[must_use]
pub fn partition<'a>(
    guess: &Combination,
    candidates: &'a [Combination],
) -> BTreeMap<Feedback, Vec<&'a Combination>> {
    let mut groups: BTreeMap<Feedback, Vec<&Combination>> = BTreeMap::new();

    for candidate in candidates {
        groups
            .entry(Feedback::between(candidate, guess))
            .or_default()
            .push(candidate);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_cover_every_candidate() {
        let universe: Vec<Combination> = Combination::universe(6, 4).collect();
        let guess: Combination = "1122".parse().unwrap();

        let counts = group_by_feedback(&guess, &universe);
        assert_eq!(counts.values().sum::<usize>(), 1296);
        assert_eq!(counts[&Feedback::new(0, 0)], 256);
        assert_eq!(counts[&Feedback::solved(4)], 1);

        let groups = partition(&guess, &universe);
        assert_eq!(groups.len(), counts.len());
        for (feedback, members) in &groups {
            assert_eq!(members.len(), counts[feedback]);
        }
    }

    #[test]
    fn empty_candidates_have_no_groups() {
        let guess: Combination = "12".parse().unwrap();
        assert!(group_by_feedback(&guess, &[]).is_empty());
        assert!(partition(&guess, &[]).is_empty());
    }
}
