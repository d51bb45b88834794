//! The set of secrets still consistent with every feedback seen so far

use crate::core::{Combination, Feedback, GameConfig};
use crate::error::{Result, SolverError};

/// Remaining possible secrets of one game
///
/// Members are kept sorted and free of duplicates, so iteration follows the
/// combination order and the member list doubles as an order-independent
/// snapshot of the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    members: Vec<Combination>,
    pins: usize,
}

impl CandidateSet {
    /// Every combination of the game
    #[must_use]
    pub fn full(game: &GameConfig) -> Self {
        Self {
            members: game.universe(),
            pins: game.pins(),
        }
    }

    /// A set of arbitrary combinations, in any order and possibly repeated
    ///
    /// # Errors
    /// Returns `LengthMismatch` if a combination does not have `pins` pegs.
    pub fn from_combinations(
        pins: usize,
        combinations: impl IntoIterator<Item = Combination>,
    ) -> Result<Self> {
        let mut members: Vec<Combination> = combinations.into_iter().collect();
        if let Some(bad) = members.iter().find(|c| c.len() != pins) {
            return Err(SolverError::LengthMismatch {
                secret: pins,
                guess: bad.len(),
            });
        }

        members.sort_unstable();
        members.dedup();
        Ok(Self { members, pins })
    }

    /// Remove every member that would not have produced `feedback` for `guess`
    ///
    /// Returns how many members were removed. Repeating the same call removes
    /// nothing further. An elimination that would leave the set empty is
    /// refused and the set is left untouched.
    ///
    /// # Errors
    /// - `InvalidFeedback` if no secret can produce `feedback`
    /// - `LengthMismatch` if `guess` has the wrong number of pegs
    /// - `EmptyCandidateSet` if no member is consistent with `feedback`
    pub fn eliminate(&mut self, guess: &Combination, feedback: Feedback) -> Result<usize> {
        feedback.validate(self.pins)?;
        if guess.len() != self.pins {
            return Err(SolverError::LengthMismatch {
                secret: self.pins,
                guess: guess.len(),
            });
        }

        let before = self.members.len();
        let survivors = self
            .members
            .iter()
            .filter(|&candidate| Feedback::between(candidate, guess) == feedback)
            .count();

        if survivors == 0 {
            log::warn!("{guess} scored {feedback} leaves none of {before} candidates");
            return Err(SolverError::EmptyCandidateSet);
        }

        self.members
            .retain(|candidate| Feedback::between(candidate, guess) == feedback);
        log::trace!("eliminate {guess} {feedback}: {before} -> {survivors}");

        Ok(before - survivors)
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.members.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn pins(&self) -> usize {
        self.pins
    }

    #[must_use]
    pub fn contains(&self, combination: &Combination) -> bool {
        self.members.binary_search(combination).is_ok()
    }

    /// Members in ascending order
    pub fn iter(&self) -> std::slice::Iter<'_, Combination> {
        self.members.iter()
    }

    /// Members in ascending order, as a slice
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Combination] {
        &self.members
    }

    /// The smallest member
    #[must_use]
    pub fn first(&self) -> Option<&Combination> {
        self.members.first()
    }

    /// The only member, if exactly one remains
    #[must_use]
    pub fn sole(&self) -> Option<&Combination> {
        match self.members.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Combination;
    type IntoIter = std::slice::Iter<'a, Combination>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
