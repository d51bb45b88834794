//! Feedback calculation and representation
//!
//! Feedback is the pair (exact, color-only): pegs of the right color in the
//! right position, and pegs of the right color in the wrong position once exact
//! matches are removed. Scoring is linear in P + K: per-color counts are taken
//! for both sides and `color_only = Σ min(secret[c], guess[c]) - exact`.

use super::{Color, Combination};
use crate::error::{Result, SolverError};
use std::fmt;

/// Feedback for one guess, ordered by exact matches then color-only matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Feedback {
    exact: usize,
    color_only: usize,
}

impl Feedback {
    /// Create a feedback value without validating it against a game
    #[inline]
    #[must_use]
    pub const fn new(exact: usize, color_only: usize) -> Self {
        Self { exact, color_only }
    }

    /// Pegs with the right color in the right position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> usize {
        self.exact
    }

    /// Pegs with the right color in the wrong position
    #[inline]
    #[must_use]
    pub const fn color_only(self) -> usize {
        self.color_only
    }

    /// The full-match feedback `(P, 0)`
    #[inline]
    #[must_use]
    pub const fn solved(pins: usize) -> Self {
        Self::new(pins, 0)
    }

    /// Check if this feedback ends a game with `pins` pegs
    #[inline]
    #[must_use]
    pub const fn is_solved(self, pins: usize) -> bool {
        self.exact == pins && self.color_only == 0
    }

    /// Score `guess` against `secret`
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the combinations have different lengths.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Combination, Feedback};
    ///
    /// let secret: Combination = "1213".parse().unwrap();
    /// let guess: Combination = "1121".parse().unwrap();
    /// assert_eq!(Feedback::score(&secret, &guess).unwrap(), Feedback::new(1, 2));
    /// ```
    pub fn score(secret: &Combination, guess: &Combination) -> Result<Self> {
        if secret.len() != guess.len() {
            return Err(SolverError::LengthMismatch {
                secret: secret.len(),
                guess: guess.len(),
            });
        }
        Ok(Self::between(secret, guess))
    }

    /// Score two combinations already known to have equal length
    ///
    /// Used by the strategies' inner loops, where lengths are checked once per
    /// call rather than once per pair.
    #[inline]
    pub(crate) fn between(secret: &Combination, guess: &Combination) -> Self {
        debug_assert_eq!(secret.len(), guess.len());

        let exact = secret
            .pegs()
            .iter()
            .zip(guess.pegs())
            .filter(|(s, g)| s == g)
            .count();

        let secret_counts = secret.color_counts();
        let guess_counts = guess.color_counts();
        let common: usize = (0..Color::MAX_COLORS)
            .map(|c| secret_counts[c].min(guess_counts[c]))
            .sum();

        Self::new(exact, common - exact)
    }

    /// Check that some secret can produce this feedback in a game with `pins` pegs
    ///
    /// Rejects totals above P, and `(P-1, 1)`: with P-1 pegs already exact the
    /// one remaining peg cannot be misplaced.
    ///
    /// # Errors
    /// Returns `InvalidFeedback` for structurally impossible values.
    pub fn validate(self, pins: usize) -> Result<Self> {
        let over = self.exact + self.color_only > pins;
        let one_off = pins >= 1 && self.exact == pins - 1 && self.color_only == 1;

        if over || one_off {
            Err(SolverError::InvalidFeedback {
                feedback: self,
                pins,
            })
        } else {
            Ok(self)
        }
    }

    /// Every structurally valid feedback for `pins` pegs, in ascending order
    ///
    /// Includes the solved feedback.
    #[must_use]
    pub fn possible(pins: usize) -> Vec<Self> {
        (0..=pins)
            .flat_map(|exact| {
                (0..=pins - exact).map(move |color_only| Self::new(exact, color_only))
            })
            .filter(|f| f.validate(pins).is_ok())
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.exact, self.color_only)
    }
}
