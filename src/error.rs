use thiserror::Error;

use crate::cs::dynamic::edit_distance::InputSide;

/// Errors raised at the boundary of the edit distance engine.
///
/// The engine itself cannot fail for two character sequences. These
/// variants come from caller-side policy checks and from replaying a
/// trace against a sequence it was not computed for.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An input exceeds the configured maximum length.
    #[error("{input} input is {len} characters long; the limit is {max}")]
    InputTooLong {
        input: InputSide,
        len: usize,
        max: usize,
    },

    /// Both inputs are empty and the limits forbid it.
    #[error("at least one input must be non-empty")]
    EmptyInputs,

    /// An operation does not line up with the sequence it is replayed on.
    #[error("operation at step {step} does not fit the source sequence")]
    TraceMismatch { step: usize },

    /// The trace ended before the whole source sequence was consumed.
    #[error("trace consumed {consumed} of {len} source characters")]
    IncompleteTrace { consumed: usize, len: usize },
}

/// Result type for edit distance operations.
pub type Result<T> = std::result::Result<T, Error>;
