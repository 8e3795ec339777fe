//! Scoring of fine-tuned classifier responses
//!
//! The sequence classifier returns class probabilities instead of text:
//! `[{"sentence": "...", "probabilities": [p_person, p_non_person]}]`.
//! An address is labelled `Non-Person` only when the non-person probability
//! is strictly above the threshold. Entries past the first two are ignored.

use crate::error::ExtractorError;
use llmops_domain::EmailType;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Deserialize)]
struct RawPrediction {
    sentence: String,
    probabilities: Vec<f64>,
}

/// Class probabilities for one input
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassProbabilities {
    /// Probability the address belongs to a person
    pub person: f64,

    /// Probability the address is generic or departmental
    pub non_person: f64,
}

/// Classifier output for one input string
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifierPrediction {
    /// Input as echoed by the endpoint
    pub input_string: String,

    /// Class probabilities
    pub probabilities: ClassProbabilities,
}

impl ClassifierPrediction {
    /// Label this prediction
    pub fn label(&self, threshold: f64) -> EmailType {
        if self.probabilities.non_person > threshold {
            EmailType::NonPerson
        } else {
            EmailType::Person
        }
    }
}

/// Labelled classifier response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifierOutcome {
    /// Label of the first prediction
    pub pred_email_type: EmailType,

    /// Every prediction in the response
    pub response: Vec<ClassifierPrediction>,
}

/// Decode a classifier response body
pub fn decode_classifier_response(body: &str) -> Result<Vec<ClassifierPrediction>, ExtractorError> {
    let raw: Vec<RawPrediction> = serde_json::from_str(body)?;

    raw.into_iter()
        .map(|p| match p.probabilities.as_slice() {
            [person, non_person, ..] => Ok(ClassifierPrediction {
                input_string: p.sentence,
                probabilities: ClassProbabilities {
                    person: *person,
                    non_person: *non_person,
                },
            }),
            other => Err(ExtractorError::Payload(format!(
                "expected at least 2 class probabilities, found {}",
                other.len()
            ))),
        })
        .collect()
}

/// Decode and label a classifier response
pub fn classify_payload(body: &str, threshold: f64) -> Result<ClassifierOutcome, ExtractorError> {
    let response = decode_classifier_response(body)?;
    let first = response
        .first()
        .ok_or_else(|| ExtractorError::Payload("response contains no predictions".to_string()))?;

    let pred_email_type = first.label(threshold);
    debug!(
        "Classified '{}' as {} (non_person={})",
        first.input_string, pred_email_type, first.probabilities.non_person
    );

    Ok(ClassifierOutcome {
        pred_email_type,
        response,
    })
}
