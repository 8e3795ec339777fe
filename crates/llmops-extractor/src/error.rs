//! Error types for the Extractor
//!
//! None of these surface from field extraction itself: a missing field is
//! absorbed into an empty value. They cover building the extractor from
//! configuration and decoding endpoint payloads.

use llmops_domain::TaskType;
use thiserror::Error;

/// Errors that can occur while configuring the extractor or decoding payloads
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// A field rule's regex failed to compile or has no capture group
    #[error("Invalid pattern for field '{field}': {message}")]
    InvalidPattern {
        /// Field the rule populates
        field: String,
        /// Compiler or validation message
        message: String,
    },

    /// A field table does not match the fields its task declares
    #[error("Invalid field table for {task}: {reason}")]
    InvalidTable {
        /// Task the table was configured for
        task: TaskType,
        /// What is wrong with it
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Endpoint payload has the wrong shape
    #[error("Invalid endpoint payload: {0}")]
    Payload(String),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Failed to read a configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::JsonParse(e.to_string())
    }
}
