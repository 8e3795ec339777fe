//! Word-set similarity between extracted and expected strings

use crate::error::{check_lengths, EvalError};
use std::collections::HashSet;

/// Jaccard similarity of the whitespace-separated word sets of `a` and `b`
///
/// A missing value on either side scores 0. Two strings without any words
/// are identical and score 1.
pub fn jaccard_similarity(a: Option<&str>, b: Option<&str>) -> f64 {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        _ => return 0.0,
    };

    let a_words: HashSet<&str> = a.split_whitespace().collect();
    let b_words: HashSet<&str> = b.split_whitespace().collect();

    let union = a_words.union(&b_words).count();
    if union == 0 {
        return 1.0;
    }
    let intersection = a_words.intersection(&b_words).count();

    intersection as f64 / union as f64
}

/// Element-wise Jaccard similarity
pub fn jaccard_scores(
    truth: &[Option<&str>],
    predicted: &[Option<&str>],
) -> Result<Vec<f64>, EvalError> {
    check_lengths(truth.len(), predicted.len())?;

    Ok(truth
        .iter()
        .zip(predicted)
        .map(|(t, p)| jaccard_similarity(*t, *p))
        .collect())
}
