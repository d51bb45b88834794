//! Precomputed decision trees
//!
//! A tree replays a strategy worked out in advance: each node names the guess
//! to play for the candidate set it expects and the node to continue with
//! after each feedback. Nodes are immutable and shared, so several feedback
//! branches can point at the same subtree.

use crate::core::{Combination, Feedback};
use crate::error::{Result, SolverError};
use crate::solver::CandidateSet;
use std::sync::Arc;

/// One node of a decision tree
#[derive(Debug)]
pub enum Rule {
    /// Guess the smallest remaining candidate; the count must lie in `min..=max`
    PickFirst { min_expected: usize, max_expected: usize },
    /// Guess a fixed combination, then continue with `next` whatever the feedback
    FixedSimple {
        expected: usize,
        guess: Combination,
        next: DecisionTree,
    },
    /// Guess a fixed combination, then branch on the feedback
    FixedComplex {
        expected: usize,
        guess: Combination,
        table: FeedbackTable,
    },
}

/// Follow-up nodes indexed by feedback
///
/// Row `e` holds the nodes for `exact == e`, ordered by decreasing color-only
/// count, so it has `P + 1 - e` entries and ends with `color_only == 0`.
#[derive(Debug)]
pub struct FeedbackTable {
    rows: Vec<Vec<DecisionTree>>,
}

impl FeedbackTable {
    /// Build a table for `pins` pegs, checking its triangular shape
    ///
    /// # Errors
    /// Returns `PreconditionViolated` if there are not `pins + 1` rows or a
    /// row has the wrong length.
    pub fn new(pins: usize, rows: Vec<Vec<DecisionTree>>) -> Result<Self> {
        if rows.len() != pins + 1 {
            return Err(SolverError::PreconditionViolated(format!(
                "feedback table for {pins} pins needs {} rows, found {}",
                pins + 1,
                rows.len()
            )));
        }
        for (exact, row) in rows.iter().enumerate() {
            let expected = pins + 1 - exact;
            if row.len() != expected {
                return Err(SolverError::PreconditionViolated(format!(
                    "feedback table row {exact} needs {expected} entries, found {}",
                    row.len()
                )));
            }
        }
        Ok(Self { rows })
    }

    /// Number of pins the table was built for
    #[must_use]
    pub fn pins(&self) -> usize {
        self.rows.len() - 1
    }

    /// Follow-up for a feedback
    ///
    /// # Errors
    /// - `InvalidFeedback` for feedback no secret can produce
    /// - `PreconditionViolated` for the solved feedback, which ends the game
    pub fn get(&self, feedback: Feedback) -> Result<&DecisionTree> {
        let pins = self.pins();
        feedback.validate(pins)?;
        if feedback.is_solved(pins) {
            return Err(SolverError::PreconditionViolated(format!(
                "no follow-up rule after the solved feedback {feedback}"
            )));
        }

        let row = &self.rows[feedback.exact()];
        Ok(&row[row.len() - 1 - feedback.color_only()])
    }
}

/// Shared handle to the root of a decision tree, or to any subtree
#[derive(Debug, Clone)]
pub struct DecisionTree(Arc<Rule>);

impl DecisionTree {
    /// Guess the first candidate while `min..=max` candidates remain
    ///
    /// # Errors
    /// Returns `PreconditionViolated` if `min > max`.
    pub fn pick_first(min_expected: usize, max_expected: usize) -> Result<Self> {
        if min_expected > max_expected {
            return Err(SolverError::PreconditionViolated(format!(
                "empty candidate range {min_expected}..={max_expected}"
            )));
        }
        Ok(Self::from_rule(Rule::PickFirst {
            min_expected,
            max_expected,
        }))
    }

    /// Guess `guess` with exactly `expected` candidates, then continue with `next`
    #[must_use]
    pub fn fixed_simple(expected: usize, guess: Combination, next: Self) -> Self {
        Self::from_rule(Rule::FixedSimple { expected, guess, next })
    }

    /// Guess `guess` with exactly `expected` candidates, then branch on the feedback
    ///
    /// `rows` follows the `FeedbackTable` layout for `guess.len()` pins.
    ///
    /// # Errors
    /// Returns `PreconditionViolated` if the table is not triangular.
    pub fn fixed_complex(
        expected: usize,
        guess: Combination,
        rows: Vec<Vec<Self>>,
    ) -> Result<Self> {
        let table = FeedbackTable::new(guess.len(), rows)?;
        Ok(Self::from_rule(Rule::FixedComplex { expected, guess, table }))
    }

    fn from_rule(rule: Rule) -> Self {
        Self(Arc::new(rule))
    }

    /// The node this handle points at
    #[must_use]
    pub fn rule(&self) -> &Rule {
        &self.0
    }

    /// True if both handles point at the same node
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// The guess this node prescribes for `candidates`
    ///
    /// # Errors
    /// - `PreconditionViolated` if the candidate count is not what the node expects
    /// - `EmptyCandidateSet` if a `PickFirst` node allowing zero meets an empty set
    pub fn guess(&self, candidates: &CandidateSet) -> Result<Combination> {
        let count = candidates.size();
        match self.rule() {
            Rule::PickFirst {
                min_expected,
                max_expected,
            } => {
                if !(*min_expected..=*max_expected).contains(&count) {
                    return Err(SolverError::PreconditionViolated(format!(
                        "expected {min_expected}..={max_expected} candidates, found {count}"
                    )));
                }
                log::debug!("rule pick-first with {count} candidates");
                candidates.first().cloned().ok_or(SolverError::EmptyCandidateSet)
            }
            Rule::FixedSimple { expected, guess, .. }
            | Rule::FixedComplex { expected, guess, .. } => {
                if count != *expected {
                    return Err(SolverError::PreconditionViolated(format!(
                        "rule for {guess} expects {expected} candidates, found {count}"
                    )));
                }
                log::debug!("rule fixed {guess} with {count} candidates");
                Ok(guess.clone())
            }
        }
    }

    /// The node to use after receiving `feedback` for this node's guess
    ///
    /// # Errors
    /// Propagates `FeedbackTable::get` errors for `FixedComplex` nodes.
    pub fn advance(&self, feedback: Feedback) -> Result<Self> {
        match self.rule() {
            Rule::PickFirst { max_expected, .. } => Self::pick_first(0, *max_expected),
            Rule::FixedSimple { next, .. } => Ok(next.clone()),
            Rule::FixedComplex { table, .. } => table.get(feedback).cloned(),
        }
    }
}
