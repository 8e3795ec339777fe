//! Field pattern tables
//!
//! A table holds one rule per field its task declares. Built-in tables
//! cover the prompt formats the deployed models are asked for; configured
//! tables replace them per task.

use crate::config::{FieldRuleDef, FieldTable};
use crate::error::ExtractorError;
use crate::types::{ExtractionMiss, MissKind};
use llmops_domain::{EmailType, TaskType};
use regex::Regex;
use std::collections::BTreeMap;

/// Pattern for the JSON-ish `email_address_type` answer
const EMAIL_TYPE_PATTERN: &str = r#""email_address_type":\s*"([^"]+)""#;

/// `(field, label)` pairs for the name components, in declaration order
const NAME_LABELS: &[(&str, &str)] = &[
    ("first_name", "First Name"),
    ("middle_name", "Middle Name"),
    ("last_name", "Last Name"),
    ("name_prefix", "Name Prefix"),
    ("name_suffix", "Name Suffix"),
];

/// Built-in table for a task
pub fn builtin_table(task: TaskType) -> FieldTable {
    let rules = match task {
        TaskType::EmailType => {
            // Only the lowercase answers map; "Person" and friends stay empty.
            let values = BTreeMap::from([
                ("person".to_string(), "Person".to_string()),
                ("non-person".to_string(), "Non-Person".to_string()),
            ]);
            vec![FieldRuleDef {
                field: "p_email_type".to_string(),
                pattern: EMAIL_TYPE_PATTERN.to_string(),
                values: Some(values),
            }]
        }
        TaskType::EmailNames => NAME_LABELS
            .iter()
            .map(|(field, label)| FieldRuleDef {
                field: field.to_string(),
                pattern: format!("{}: ([^\\n]*)", regex::escape(label)),
                values: None,
            })
            .collect(),
    };

    FieldTable { task, rules }
}

/// Outcome of applying one rule
pub(crate) enum RuleMatch {
    /// Field resolved to this value
    Resolved(String),
    /// Field left empty
    Missed(ExtractionMiss),
}

/// A rule with its regex compiled
#[derive(Debug, Clone)]
pub(crate) struct CompiledRule {
    field: &'static str,
    regex: Regex,
    values: Option<BTreeMap<String, String>>,
}

impl CompiledRule {
    /// Field this rule populates
    pub(crate) fn field(&self) -> &'static str {
        self.field
    }

    /// Search `text` for this rule's field
    pub(crate) fn apply(&self, text: &str) -> RuleMatch {
        let captured = match self.regex.captures(text).and_then(|caps| caps.get(1)) {
            Some(m) => m.as_str(),
            None => {
                return RuleMatch::Missed(ExtractionMiss {
                    field: self.field.to_string(),
                    kind: MissKind::NotFound,
                })
            }
        };

        match &self.values {
            None => RuleMatch::Resolved(captured.to_string()),
            Some(values) => match values.get(captured) {
                Some(mapped) => RuleMatch::Resolved(mapped.clone()),
                None => RuleMatch::Missed(ExtractionMiss {
                    field: self.field.to_string(),
                    kind: MissKind::UnrecognizedValue(captured.to_string()),
                }),
            },
        }
    }
}

/// A validated table, rules ordered as the task declares its fields
#[derive(Debug, Clone)]
pub(crate) struct CompiledTable {
    task: TaskType,
    rules: Vec<CompiledRule>,
}

impl CompiledTable {
    /// Validate and compile a table
    pub(crate) fn compile(table: &FieldTable) -> Result<Self, ExtractorError> {
        let task = table.task;
        let declared = task.fields();

        if table.rules.len() != declared.len() {
            return Err(ExtractorError::InvalidTable {
                task,
                reason: format!(
                    "expected {} rules, found {}",
                    declared.len(),
                    table.rules.len()
                ),
            });
        }

        let mut rules = Vec::with_capacity(declared.len());
        for &field in declared {
            let mut defs = table.rules.iter().filter(|r| r.field == field);
            let def = defs.next().ok_or_else(|| ExtractorError::InvalidTable {
                task,
                reason: format!("no rule for field '{}'", field),
            })?;
            if defs.next().is_some() {
                return Err(ExtractorError::InvalidTable {
                    task,
                    reason: format!("more than one rule for field '{}'", field),
                });
            }
            if task == TaskType::EmailType {
                check_label_values(task, def)?;
            }
            rules.push(compile_rule(field, def)?);
        }

        Ok(Self { task, rules })
    }

    /// Task this table serves
    pub(crate) fn task(&self) -> TaskType {
        self.task
    }

    /// Rules in declaration order
    pub(crate) fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }
}

/// Email type rules must map every capture onto a known label
fn check_label_values(task: TaskType, def: &FieldRuleDef) -> Result<(), ExtractorError> {
    let values = def.values.as_ref().ok_or_else(|| ExtractorError::InvalidTable {
        task,
        reason: format!("rule for '{}' needs a values map", def.field),
    })?;

    if let Some((raw, label)) = values.iter().find(|(_, v)| EmailType::parse(v).is_none()) {
        return Err(ExtractorError::InvalidTable {
            task,
            reason: format!("'{}' maps to unknown label '{}'", raw, label),
        });
    }
    Ok(())
}

fn compile_rule(field: &'static str, def: &FieldRuleDef) -> Result<CompiledRule, ExtractorError> {
    let regex = Regex::new(&def.pattern).map_err(|e| ExtractorError::InvalidPattern {
        field: field.to_string(),
        message: e.to_string(),
    })?;

    // captures_len counts the implicit whole-match group
    if regex.captures_len() < 2 {
        return Err(ExtractorError::InvalidPattern {
            field: field.to_string(),
            message: "pattern has no capture group".to_string(),
        });
    }

    Ok(CompiledRule {
        field,
        regex,
        values: def.values.clone(),
    })
}
