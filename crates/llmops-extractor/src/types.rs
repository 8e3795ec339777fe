//! Request and result types for extraction

use llmops_domain::{ExtractedRecord, TaskType};
use serde::{Deserialize, Serialize};

/// A model completion and the task it should be parsed for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRequest {
    /// Task selecting the field set
    pub task_type: TaskType,

    /// Raw text produced by the model
    pub raw_text: String,
}

impl ExtractionRequest {
    /// Create a new request
    pub fn new(task_type: TaskType, raw_text: impl Into<String>) -> Self {
        Self {
            task_type,
            raw_text: raw_text.into(),
        }
    }
}

/// How much of the record the completion provided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStatus {
    /// Every declared field was resolved
    Complete,

    /// Some fields were resolved, others defaulted
    Partial,

    /// Nothing was resolved, or the payload could not be read
    Failed,
}

/// Why a field was left empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissKind {
    /// The field's pattern did not match
    NotFound,

    /// The pattern matched but the captured value has no mapping
    UnrecognizedValue(String),
}

/// A field that could not be found in the completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionMiss {
    /// Field left at its default
    pub field: String,

    /// Reason for the miss
    pub kind: MissKind,
}

/// Result of an extraction, with the record and what was missed
///
/// The record is always fully populated; `status` and `misses` tell
/// callers how much of it came from the completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// Structured fields, empty where missed
    pub record: ExtractedRecord,

    /// Overall outcome
    pub status: ExtractionStatus,

    /// Fields that defaulted, in declaration order
    pub misses: Vec<ExtractionMiss>,

    /// Reason the completion could not be read at all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

impl Extraction {
    /// All-empty extraction for a payload that could not be decoded
    pub fn failed(task: TaskType, diagnostic: impl Into<String>) -> Self {
        Self {
            record: ExtractedRecord::empty(task),
            status: ExtractionStatus::Failed,
            misses: task
                .fields()
                .iter()
                .map(|field| ExtractionMiss {
                    field: field.to_string(),
                    kind: MissKind::NotFound,
                })
                .collect(),
            diagnostic: Some(diagnostic.into()),
        }
    }

    /// True when every field was resolved
    pub fn is_complete(&self) -> bool {
        self.status == ExtractionStatus::Complete
    }

    /// Consume the extraction, keeping only the record
    pub fn into_record(self) -> ExtractedRecord {
        self.record
    }
}

/// Status implied by how many of `total` fields resolved
pub(crate) fn status_for(resolved: usize, total: usize) -> ExtractionStatus {
    if resolved == 0 {
        ExtractionStatus::Failed
    } else if resolved == total {
        ExtractionStatus::Complete
    } else {
        ExtractionStatus::Partial
    }
}
