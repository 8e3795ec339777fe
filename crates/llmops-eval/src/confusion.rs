//! Binary confusion matrix for email type predictions
//!
//! `Non-Person` is the positive class. Any label other than `Person`,
//! including the empty string an extraction leaves behind, counts as
//! `Non-Person`.

use crate::error::{check_lengths, EvalError};
use llmops_domain::EmailType;
use serde::Serialize;
use tracing::debug;

/// Map a record label to the class it is scored as
pub fn scored_class(label: &str) -> EmailType {
    match EmailType::parse(label) {
        Some(EmailType::Person) => EmailType::Person,
        _ => EmailType::NonPerson,
    }
}

/// Counts of true/false positives and negatives
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BinaryConfusionMatrix {
    /// Person predicted as Person
    pub true_negative: usize,

    /// Person predicted as Non-Person
    pub false_positive: usize,

    /// Non-Person predicted as Person
    pub false_negative: usize,

    /// Non-Person predicted as Non-Person
    pub true_positive: usize,
}

/// Headline metrics derived from a confusion matrix
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvaluationReport {
    /// Share of correct predictions
    pub accuracy: f64,

    /// TP / (TP + FP)
    pub precision: f64,

    /// TP / (TP + FN)
    pub recall: f64,

    /// Harmonic mean of precision and recall
    pub f1_score: f64,
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

impl BinaryConfusionMatrix {
    /// Create an empty matrix
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally paired ground truth and predicted labels
    pub fn from_labels<T, P>(truth: &[T], predicted: &[P]) -> Result<Self, EvalError>
    where
        T: AsRef<str>,
        P: AsRef<str>,
    {
        check_lengths(truth.len(), predicted.len())?;

        let mut matrix = Self::new();
        for (t, p) in truth.iter().zip(predicted) {
            matrix.record(scored_class(t.as_ref()), scored_class(p.as_ref()));
        }
        debug!("Confusion matrix over {} rows: {:?}", matrix.total(), matrix);
        Ok(matrix)
    }

    /// Record one prediction
    pub fn record(&mut self, truth: EmailType, predicted: EmailType) {
        match (truth, predicted) {
            (EmailType::Person, EmailType::Person) => self.true_negative += 1,
            (EmailType::Person, EmailType::NonPerson) => self.false_positive += 1,
            (EmailType::NonPerson, EmailType::Person) => self.false_negative += 1,
            (EmailType::NonPerson, EmailType::NonPerson) => self.true_positive += 1,
        }
    }

    /// Number of recorded predictions
    pub fn total(&self) -> usize {
        self.true_negative + self.false_positive + self.false_negative + self.true_positive
    }

    /// Share of correct predictions
    pub fn accuracy(&self) -> f64 {
        ratio(self.true_negative + self.true_positive, self.total())
    }

    /// Share of Non-Person predictions that were right
    pub fn precision(&self) -> f64 {
        ratio(self.true_positive, self.true_positive + self.false_positive)
    }

    /// Share of actual Non-Person rows that were found
    pub fn recall(&self) -> f64 {
        ratio(self.true_positive, self.true_positive + self.false_negative)
    }

    /// Harmonic mean of precision and recall, 0 when both are 0
    pub fn f1_score(&self) -> f64 {
        let (p, r) = (self.precision(), self.recall());
        if p + r == 0.0 {
            0.0
        } else {
            2.0 * p * r / (p + r)
        }
    }

    /// Accuracy over rows whose ground truth is `class`, `None` if there are none
    pub fn class_accuracy(&self, class: EmailType) -> Option<f64> {
        let (correct, wrong) = match class {
            EmailType::Person => (self.true_negative, self.false_positive),
            EmailType::NonPerson => (self.true_positive, self.false_negative),
        };
        if correct + wrong == 0 {
            None
        } else {
            Some(ratio(correct, correct + wrong))
        }
    }

    /// Headline metrics
    pub fn report(&self) -> EvaluationReport {
        EvaluationReport {
            accuracy: self.accuracy(),
            precision: self.precision(),
            recall: self.recall(),
            f1_score: self.f1_score(),
        }
    }

    /// Generate a summary report of the matrix and its metrics
    pub fn summary(&self) -> String {
        let total = self.total().max(1) as f64;
        let cell = |name: &str, count: usize| {
            format!("  {:<10} {:>6} ({:.2}%)", name, count, 100.0 * count as f64 / total)
        };

        let mut lines = vec![
            "Email Type Evaluation".to_string(),
            "=====================".to_string(),
            cell("True Neg", self.true_negative),
            cell("False Pos", self.false_positive),
            cell("False Neg", self.false_negative),
            cell("True Pos", self.true_positive),
            String::new(),
            format!("Accuracy={:.3}", self.accuracy()),
            format!("Precision={:.3}", self.precision()),
            format!("Recall={:.3}", self.recall()),
            format!("F1 Score={:.3}", self.f1_score()),
        ];

        for class in [EmailType::Person, EmailType::NonPerson] {
            if let Some(acc) = self.class_accuracy(class) {
                lines.push(format!("Accuracy for {}: {:.3}", class, acc));
            }
        }

        lines.join("\n")
    }
}
