//! Per-field scoring of name extraction

use crate::error::{check_lengths, EvalError};
use crate::similarity::jaccard_similarity;
use llmops_domain::{ExtractedRecord, TaskType};
use serde::Serialize;
use tracing::debug;

/// Scores for one name field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldScore {
    /// Record field
    pub field: &'static str,

    /// Share of rows where the prediction equals the truth exactly
    pub exact_match: f64,

    /// Mean word-set Jaccard similarity
    pub mean_jaccard: f64,
}

/// Scores for every `email-names` field over a set of rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NameFieldReport {
    /// Number of rows scored
    pub rows: usize,

    /// One entry per field, in declaration order
    pub fields: Vec<FieldScore>,
}

impl NameFieldReport {
    /// Score predicted records against ground truth, row by row
    pub fn evaluate(
        truth: &[ExtractedRecord],
        predicted: &[ExtractedRecord],
    ) -> Result<Self, EvalError> {
        check_lengths(truth.len(), predicted.len())?;
        for record in truth.iter().chain(predicted) {
            if record.task() != TaskType::EmailNames {
                return Err(EvalError::TaskMismatch {
                    expected: TaskType::EmailNames,
                    found: record.task(),
                });
            }
        }

        let rows = truth.len();
        let fields = TaskType::EmailNames
            .fields()
            .iter()
            .map(|&field| {
                let mut exact = 0usize;
                let mut jaccard = 0.0;
                for (t, p) in truth.iter().zip(predicted) {
                    let (t, p) = (t.get(field), p.get(field));
                    if t == p {
                        exact += 1;
                    }
                    jaccard += jaccard_similarity(t, p);
                }
                FieldScore {
                    field,
                    exact_match: exact as f64 / rows as f64,
                    mean_jaccard: jaccard / rows as f64,
                }
            })
            .collect();

        let report = Self { rows, fields };
        debug!("Scored {} name extraction rows", report.rows);
        Ok(report)
    }

    /// Score for one field
    pub fn field(&self, field: &str) -> Option<&FieldScore> {
        self.fields.iter().find(|f| f.field == field)
    }

    /// Exact-match accuracy averaged over fields
    pub fn overall_exact_match(&self) -> f64 {
        if self.fields.is_empty() {
            return 0.0;
        }
        self.fields.iter().map(|f| f.exact_match).sum::<f64>() / self.fields.len() as f64
    }

    /// Generate a summary table
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Name Extraction Evaluation ({} rows)", self.rows),
            "==================================".to_string(),
        ];
        for score in &self.fields {
            lines.push(format!(
                "  {:<12} exact={:.3} jaccard={:.3}",
                score.field, score.exact_match, score.mean_jaccard
            ));
        }
        lines.push(format!("  Overall exact match: {:.3}", self.overall_exact_match()));
        lines.join("\n")
    }
}
