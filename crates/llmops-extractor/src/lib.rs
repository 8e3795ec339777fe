//! LLMOps Extractor
//!
//! Turns model completions from the email classification endpoints into
//! structured records.
//!
//! # Overview
//!
//! Generative endpoints answer in free text that only loosely follows the
//! format the prompt asked for. The [`ResponseExtractor`] searches that text
//! with a pattern table per task type and always returns a record carrying
//! every declared field; anything it cannot find is left empty and listed
//! in the [`Extraction`] report.
//!
//! # Architecture
//!
//! ```text
//! PromptSpec → PromptBuilder → InvocationPayload → (endpoint) → body
//! body → decode_generated_text → ResponseExtractor → Extraction
//! body → classify_payload → ClassifierOutcome
//! ```
//!
//! Endpoint invocation itself lives with the callers.
//!
//! # Example Usage
//!
//! ```
//! use llmops_extractor::{ResponseExtractor, ExtractionStatus};
//! use llmops_domain::TaskType;
//!
//! let extractor = ResponseExtractor::standard();
//!
//! let extraction = extractor.extract_with_report(
//!     TaskType::EmailNames,
//!     "First Name: David\nLast Name: Brown\n",
//! );
//!
//! assert_eq!(extraction.record.get("first_name"), Some("David"));
//! assert_eq!(extraction.record.get("middle_name"), Some(""));
//! assert_eq!(extraction.status, ExtractionStatus::Partial);
//! ```

#![warn(missing_docs)]

mod classifier;
mod config;
mod error;
mod extractor;
mod payload;
mod prompt;
mod table;
mod types;

#[cfg(test)]
mod tests;

pub use classifier::{
    classify_payload, decode_classifier_response, ClassProbabilities, ClassifierOutcome,
    ClassifierPrediction,
};
pub use config::{ExtractorConfig, FieldRuleDef, FieldTable, GenerationConfig};
pub use error::ExtractorError;
pub use extractor::{extract, ResponseExtractor};
pub use payload::decode_generated_text;
pub use prompt::{
    classifier_input, names_context, InvocationPayload, PromptBuilder, PromptSpec,
    PromptTemplate, RESPONSE_MARKER,
};
pub use table::builtin_table;
pub use types::{Extraction, ExtractionMiss, ExtractionRequest, ExtractionStatus, MissKind};
