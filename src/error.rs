//! Error type shared by the solving engine
//!
//! Every error here is a local consistency or programming error: nothing is
//! retried, everything propagates straight to the caller.

use crate::core::Feedback;
use thiserror::Error;

/// Errors raised by feedback scoring, candidate bookkeeping, strategies and
/// decision trees
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Two combinations of different length were compared
    #[error("length mismatch: secret has {secret} pegs, guess has {guess}")]
    LengthMismatch { secret: usize, guess: usize },

    /// A feedback value that no secret can ever produce for this game
    #[error("invalid feedback {feedback} for a game with {pins} pins")]
    InvalidFeedback { feedback: Feedback, pins: usize },

    /// A decision-tree node was used outside its declared candidate range
    #[error("precondition violated: {0}")]
    PreconditionViolated(String),

    /// Elimination removed every candidate, so the feedback was inconsistent
    #[error("no candidates remain; the feedback given so far is inconsistent")]
    EmptyCandidateSet,

    /// No guess in the universe splits the remaining candidates
    #[error("no guess narrows the {candidates} remaining candidates")]
    NoUsableGuess { candidates: usize },

    /// Game parameters out of range or unparsable combination text
    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),

    /// Rule notation that does not describe a well-formed decision tree
    #[error("rule notation error at offset {offset}: {message}")]
    RuleSyntax { offset: usize, message: String },
}

/// Result alias used throughout the library
pub type Result<T, E = SolverError> = std::result::Result<T, E>;
