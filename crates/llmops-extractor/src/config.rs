//! Configuration for the Extractor

use crate::error::ExtractorError;
use llmops_domain::TaskType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Sampling parameters sent with every text-generation request
///
/// Serializes to the `parameters` object the endpoint expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Upper bound on generated tokens
    pub max_new_tokens: u32,

    /// Sampling temperature
    pub temperature: f64,

    /// Nucleus sampling cutoff
    pub top_p: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_new_tokens: 100,
            temperature: 0.1,
            top_p: 0.1,
        }
    }
}

/// One field rule as written in configuration
///
/// `pattern` must contain at least one capture group; group 1 is the value.
/// When `values` is set the captured text is looked up in it and anything
/// not listed leaves the field empty. `email-type` rules must set `values`
/// and map only onto `Person` or `Non-Person`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRuleDef {
    /// Record field the rule populates
    pub field: String,

    /// Regex searched for in the completion
    pub pattern: String,

    /// Exact captured text to output value mapping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<BTreeMap<String, String>>,
}

/// Pattern table for one task type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldTable {
    /// Task the table applies to
    pub task: TaskType,

    /// One rule per declared field
    pub rules: Vec<FieldRuleDef>,
}

/// Configuration for the Extractor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Non-person probability above which the classifier labels `Non-Person`
    #[serde(default = "default_person_threshold")]
    pub person_threshold: f64,

    /// Sampling parameters for generated prompts
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Overrides for the built-in pattern tables
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tables: Vec<FieldTable>,
}

fn default_person_threshold() -> f64 {
    0.9
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.person_threshold) {
            return Err(format!(
                "person_threshold {} out of range [0.0, 1.0]",
                self.person_threshold
            ));
        }
        if self.generation.max_new_tokens == 0 {
            return Err("max_new_tokens must be greater than 0".to_string());
        }
        let temperature = self.generation.temperature;
        if temperature.is_nan() || temperature < 0.0 {
            return Err("temperature must not be negative".to_string());
        }
        if !(self.generation.top_p > 0.0 && self.generation.top_p <= 1.0) {
            return Err(format!(
                "top_p {} out of range (0.0, 1.0]",
                self.generation.top_p
            ));
        }
        for (idx, table) in self.tables.iter().enumerate() {
            if self.tables[..idx].iter().any(|t| t.task == table.task) {
                return Err(format!("duplicate field table for {}", table.task));
            }
        }
        Ok(())
    }

    /// Configured table for a task, if one overrides the built-in
    pub fn table_for(&self, task: TaskType) -> Option<&FieldTable> {
        self.tables.iter().find(|t| t.task == task)
    }
}

impl Default for ExtractorConfig {
    /// Settings used by the inference handlers
    fn default() -> Self {
        Self {
            person_threshold: default_person_threshold(),
            generation: GenerationConfig::default(),
            tables: Vec::new(),
        }
    }
}

impl ExtractorConfig {
    /// Exploratory preset: longer, more varied generations for evaluation runs
    pub fn exploratory() -> Self {
        Self {
            person_threshold: default_person_threshold(),
            generation: GenerationConfig {
                max_new_tokens: 256,
                temperature: 0.2,
                top_p: 0.9,
            },
            tables: Vec::new(),
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }

    /// Load and validate configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ExtractorError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents).map_err(ExtractorError::Config)?;
        config.validate().map_err(ExtractorError::Config)?;
        Ok(config)
    }
}
