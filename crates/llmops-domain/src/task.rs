//! Task types - which field set a model completion is parsed into

use serde::{Deserialize, Serialize};

/// Field declared for the `email-type` task
pub const EMAIL_TYPE_FIELDS: &[&str] = &["p_email_type"];

/// Fields declared for the `email-names` task, in prompt order
pub const EMAIL_NAMES_FIELDS: &[&str] = &[
    "first_name",
    "middle_name",
    "last_name",
    "name_prefix",
    "name_suffix",
];

/// Classification task a model completion belongs to
///
/// Each task declares a fixed set of output fields. Every record produced
/// for a task carries all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskType {
    /// Person / non-person classification of an email address
    EmailType,

    /// Name component extraction from address and display name
    EmailNames,
}

impl TaskType {
    /// All supported task types
    pub const ALL: [TaskType; 2] = [TaskType::EmailType, TaskType::EmailNames];

    /// Get the task tag as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::EmailType => "email-type",
            TaskType::EmailNames => "email-names",
        }
    }

    /// Parse a task tag. Tags are matched exactly.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "email-type" => Some(TaskType::EmailType),
            "email-names" => Some(TaskType::EmailNames),
            _ => None,
        }
    }

    /// Output fields declared for this task
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            TaskType::EmailType => EMAIL_TYPE_FIELDS,
            TaskType::EmailNames => EMAIL_NAMES_FIELDS,
        }
    }

    /// Check whether `field` is declared for this task
    pub fn declares(&self, field: &str) -> bool {
        self.fields().contains(&field)
    }
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaskType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid task type: {}", s))
    }
}
