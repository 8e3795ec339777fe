//! Evaluation error types

use llmops_domain::TaskType;
use thiserror::Error;

/// Errors that can occur while scoring predictions
#[derive(Error, Debug, PartialEq)]
pub enum EvalError {
    /// Ground truth and predictions differ in length
    #[error("Length mismatch: {truth} ground truth rows, {predicted} predictions")]
    LengthMismatch {
        /// Number of ground truth rows
        truth: usize,
        /// Number of predictions
        predicted: usize,
    },

    /// Nothing to score
    #[error("No rows to evaluate")]
    Empty,

    /// A record belongs to a different task than the report
    #[error("Expected {expected} records, found {found}")]
    TaskMismatch {
        /// Task the report scores
        expected: TaskType,
        /// Task of the offending record
        found: TaskType,
    },
}

/// Fail unless both sides have the same, non-zero length
pub(crate) fn check_lengths(truth: usize, predicted: usize) -> Result<(), EvalError> {
    if truth != predicted {
        return Err(EvalError::LengthMismatch { truth, predicted });
    }
    if truth == 0 {
        return Err(EvalError::Empty);
    }
    Ok(())
}
