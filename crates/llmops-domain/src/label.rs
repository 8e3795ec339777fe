//! Email type labels

use serde::{Deserialize, Serialize};

/// Person / non-person label assigned to an email address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmailType {
    /// Address belongs to an individual
    #[serde(rename = "Person")]
    Person,

    /// Generic, departmental or automated address
    #[serde(rename = "Non-Person")]
    NonPerson,
}

impl EmailType {
    /// Get the label as it appears in records and ground truth
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailType::Person => "Person",
            EmailType::NonPerson => "Non-Person",
        }
    }

    /// Parse a record label. Only the exact display forms are accepted.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Person" => Some(EmailType::Person),
            "Non-Person" => Some(EmailType::NonPerson),
            _ => None,
        }
    }
}

impl std::fmt::Display for EmailType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
