//! LLMOps Domain Layer
//!
//! Core vocabulary shared by the extraction and evaluation crates.
//!
//! ## Key Concepts
//!
//! - **Task type**: selects which field set a completion is parsed into
//!   (`email-type`, `email-names`)
//! - **Extracted record**: field name to value mapping that always carries
//!   every field its task declares
//! - **Email type**: the `Person` / `Non-Person` label
//!
//! This crate holds no I/O and no pattern logic; it only defines the shapes
//! the other crates agree on.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod label;
pub mod record;
pub mod task;

// Re-exports for convenience
pub use label::EmailType;
pub use record::ExtractedRecord;
pub use task::{TaskType, EMAIL_NAMES_FIELDS, EMAIL_TYPE_FIELDS};
