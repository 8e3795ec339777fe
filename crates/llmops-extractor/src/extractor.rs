//! Core ResponseExtractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::payload::decode_generated_text;
use crate::table::{builtin_table, CompiledTable, RuleMatch};
use crate::types::{status_for, Extraction, ExtractionRequest};
use llmops_domain::{ExtractedRecord, TaskType};
use once_cell::sync::Lazy;
use tracing::{debug, warn};

// Built-in tables are constants; `test_builtin_extractor_builds` covers them.
static STANDARD: Lazy<ResponseExtractor> = Lazy::new(|| {
    ResponseExtractor::new().expect("built-in field tables compile")
});

/// Parses model completions into structured records
///
/// One extractor serves every task type; each task is dispatched to its
/// field table. Extraction never fails: fields that cannot be found are
/// left empty and reported in the [`Extraction`].
///
/// The extractor holds only compiled, immutable patterns and can be shared
/// freely between threads.
#[derive(Debug, Clone)]
pub struct ResponseExtractor {
    email_type: CompiledTable,
    email_names: CompiledTable,
}

impl ResponseExtractor {
    /// Create an extractor with the built-in field tables
    pub fn new() -> Result<Self, ExtractorError> {
        Self::from_config(&ExtractorConfig::default())
    }

    /// Shared extractor with the built-in field tables
    pub fn standard() -> &'static ResponseExtractor {
        &STANDARD
    }

    /// Create an extractor, taking field tables from `config` where given
    pub fn from_config(config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;

        let compile = |task: TaskType| {
            let table = match config.table_for(task) {
                Some(table) => table.clone(),
                None => builtin_table(task),
            };
            CompiledTable::compile(&table).map_err(|e| {
                warn!("Rejected field table for {}: {}", task, e);
                e
            })
        };

        Ok(Self {
            email_type: compile(TaskType::EmailType)?,
            email_names: compile(TaskType::EmailNames)?,
        })
    }

    /// Extract the record for `task` from a model completion
    pub fn extract(&self, task: TaskType, raw_text: &str) -> ExtractedRecord {
        self.extract_with_report(task, raw_text).into_record()
    }

    /// Extract the record along with what was missed
    pub fn extract_with_report(&self, task: TaskType, raw_text: &str) -> Extraction {
        let table = self.table(task);

        let mut values = Vec::with_capacity(table.rules().len());
        let mut misses = Vec::new();
        for rule in table.rules() {
            match rule.apply(raw_text) {
                RuleMatch::Resolved(value) => values.push((rule.field(), value)),
                RuleMatch::Missed(miss) => {
                    debug!("No value for '{}' in {} completion: {:?}", miss.field, task, miss.kind);
                    misses.push(miss);
                }
            }
        }

        let total = table.rules().len();
        let status = status_for(total - misses.len(), total);
        debug!(
            "Extracted {} completion: {}/{} fields, status {:?}",
            task,
            total - misses.len(),
            total,
            status
        );

        Extraction {
            record: ExtractedRecord::from_pairs(task, values),
            status,
            misses,
            diagnostic: None,
        }
    }

    /// Extract from an [`ExtractionRequest`]
    pub fn extract_request(&self, request: &ExtractionRequest) -> Extraction {
        self.extract_with_report(request.task_type, &request.raw_text)
    }

    /// Decode a text-generation endpoint body and extract from its text
    ///
    /// A body that cannot be decoded yields an all-empty record with status
    /// `Failed` and the decode error as diagnostic.
    pub fn extract_from_payload(&self, task: TaskType, body: &str) -> Extraction {
        match decode_generated_text(body) {
            Ok(text) => self.extract_with_report(task, &text),
            Err(e) => {
                warn!("Could not read {} completion payload: {}", task, e);
                Extraction::failed(task, e.to_string())
            }
        }
    }

    fn table(&self, task: TaskType) -> &CompiledTable {
        match task {
            TaskType::EmailType => &self.email_type,
            TaskType::EmailNames => &self.email_names,
        }
    }
}

/// Extract with the shared built-in extractor
pub fn extract(task: TaskType, raw_text: &str) -> ExtractedRecord {
    ResponseExtractor::standard().extract(task, raw_text)
}
