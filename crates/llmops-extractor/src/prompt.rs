//! Prompt and invocation payload assembly
//!
//! Prompt wording is supplied by callers as a [`PromptSpec`]; this module
//! only lays it out in the chat format a model family expects and wraps it
//! with sampling parameters.

use crate::config::GenerationConfig;
use crate::error::ExtractorError;
use llmops_domain::TaskType;
use serde::{Deserialize, Serialize};

/// Marker appended to instruct-style prompts; the completion follows it
pub const RESPONSE_MARKER: &str = "\n\n### Response:\n";

/// Prompt wording for one task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSpec {
    /// Task the prompt asks for
    pub prompt_type: TaskType,

    /// System prompt with rules and few-shot examples
    pub system_prompt: String,

    /// Final instruction to the model
    pub instruction: String,
}

/// Chat layout for a model family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromptTemplate {
    /// `### Instruction` / `### Input` / `### Response` sections (Mistral)
    Instruct,

    /// `[INST]` with a `<<SYS>>` block (Llama 2 chat); has no input slot
    LlamaChat,
}

/// Builds a prompt from a [`PromptSpec`] and optional input context
pub struct PromptBuilder<'a> {
    spec: &'a PromptSpec,
    template: PromptTemplate,
    context: Option<String>,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(spec: &'a PromptSpec, template: PromptTemplate) -> Self {
        Self {
            spec,
            template,
            context: None,
        }
    }

    /// Set the input the model should work on
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Build the complete prompt
    pub fn build(&self) -> String {
        let system = self.spec.system_prompt.as_str();
        let instruction = self.spec.instruction.as_str();

        match self.template {
            PromptTemplate::Instruct => {
                let context = self.context.as_deref().unwrap_or("");
                format!(
                    "{system}\n\n### Instruction:\n{instruction}\n\n### Input:\n{context}{RESPONSE_MARKER}"
                )
            }
            PromptTemplate::LlamaChat => {
                format!("<s>[INST]\n<<SYS>>\n{system}\n<</SYS>>\n\n{instruction}[/INST]")
            }
        }
    }
}

/// Input block for the name extraction prompt
pub fn names_context(email_address: &str, display_name: &str) -> String {
    format!(
        r#"Input:{{"Email Address": "{}", "Display Name": "{}"}}"#,
        email_address.trim(),
        display_name.trim()
    )
}

/// CSV-style input line for the sequence classifier
pub fn classifier_input(email_address: &str, email_name: &str, display_name: &str) -> String {
    [email_address, email_name, display_name].join(", ")
}

/// Request body for a text-generation endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvocationPayload {
    /// Full prompt text
    pub inputs: String,

    /// Sampling parameters
    pub parameters: GenerationConfig,
}

impl InvocationPayload {
    /// Create a payload for `prompt`
    pub fn new(prompt: impl Into<String>, parameters: &GenerationConfig) -> Self {
        Self {
            inputs: prompt.into(),
            parameters: parameters.clone(),
        }
    }

    /// Serialize to the JSON request body
    pub fn to_json(&self) -> Result<String, ExtractorError> {
        Ok(serde_json::to_string(self)?)
    }
}
