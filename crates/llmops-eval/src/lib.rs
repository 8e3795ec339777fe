//! LLMOps Evaluation
//!
//! Scores extracted records against labelled ground truth.
//!
//! - [`BinaryConfusionMatrix`]: person / non-person classification quality
//!   (accuracy, precision, recall, F1, per-class accuracy)
//! - [`NameFieldReport`]: exact-match and Jaccard scores per name field
//! - [`jaccard_similarity`]: word-set overlap between two strings
//!
//! # Examples
//!
//! ```
//! use llmops_eval::BinaryConfusionMatrix;
//!
//! let truth = ["Person", "Non-Person", "Non-Person"];
//! let predicted = ["Person", "Non-Person", "Person"];
//!
//! let matrix = BinaryConfusionMatrix::from_labels(&truth, &predicted).unwrap();
//! assert_eq!(matrix.true_positive, 1);
//! assert_eq!(matrix.false_negative, 1);
//! assert_eq!(matrix.report().precision, 1.0);
//! ```

#![warn(missing_docs)]

mod confusion;
mod error;
mod names;
mod similarity;

pub use confusion::{scored_class, BinaryConfusionMatrix, EvaluationReport};
pub use error::EvalError;
pub use names::{FieldScore, NameFieldReport};
pub use similarity::{jaccard_scores, jaccard_similarity};
