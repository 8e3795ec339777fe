//! Extracted record - the structured result of parsing one completion

use crate::task::TaskType;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// Structured fields parsed out of a model completion
///
/// A record always carries every field its task declares, in declaration
/// order. Fields the completion did not provide hold the empty string.
/// There are no setters: a record is fixed once built.
///
/// # Examples
///
/// ```
/// use llmops_domain::{ExtractedRecord, TaskType};
///
/// let record = ExtractedRecord::from_pairs(
///     TaskType::EmailNames,
///     [("first_name", "David"), ("last_name", "Brown")],
/// );
/// assert_eq!(record.get("first_name"), Some("David"));
/// assert_eq!(record.get("middle_name"), Some(""));
/// assert_eq!(record.get("p_email_type"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedRecord {
    task: TaskType,
    values: Vec<String>,
}

impl ExtractedRecord {
    /// Create a record with every declared field set to `""`
    pub fn empty(task: TaskType) -> Self {
        Self {
            task,
            values: vec![String::new(); task.fields().len()],
        }
    }

    /// Build a record from `(field, value)` pairs
    ///
    /// Fields the task does not declare are ignored. Missing fields default
    /// to `""`. When a field appears twice the last value wins.
    pub fn from_pairs<I, K, V>(task: TaskType, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut record = Self::empty(task);
        for (field, value) in pairs {
            if let Some(idx) = task.fields().iter().position(|f| *f == field.as_ref()) {
                record.values[idx] = value.into();
            }
        }
        record
    }

    /// Task this record was extracted for
    pub fn task(&self) -> TaskType {
        self.task
    }

    /// Value of a declared field, `None` if the task does not declare it
    pub fn get(&self, field: &str) -> Option<&str> {
        self.task
            .fields()
            .iter()
            .position(|f| *f == field)
            .map(|idx| self.values[idx].as_str())
    }

    /// Iterate `(field, value)` in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.task
            .fields()
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }

    /// Number of declared fields
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when every field holds the empty string
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }

    /// Number of fields holding a non-empty value
    pub fn filled_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_empty()).count()
    }

    /// Copy the record into an ordered map
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

impl Serialize for ExtractedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_declares_all_fields() {
        let record = ExtractedRecord::empty(TaskType::EmailNames);
        assert_eq!(record.len(), 5);
        assert!(record.is_empty());
        for field in TaskType::EmailNames.fields() {
            assert_eq!(record.get(field), Some(""));
        }
    }

    #[test]
    fn test_from_pairs_ignores_undeclared_fields() {
        let record = ExtractedRecord::from_pairs(
            TaskType::EmailType,
            [("p_email_type", "Person"), ("Remarks", "oops")],
        );
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("p_email_type"), Some("Person"));
        assert_eq!(record.get("Remarks"), None);
    }

    #[test]
    fn test_filled_count() {
        let record = ExtractedRecord::from_pairs(
            TaskType::EmailNames,
            [("first_name", "Emma"), ("last_name", "Smith"), ("name_suffix", "")],
        );
        assert_eq!(record.filled_count(), 2);
        assert!(!record.is_empty());
    }

    #[test]
    fn test_serializes_in_declaration_order() {
        let record = ExtractedRecord::from_pairs(
            TaskType::EmailNames,
            [("name_suffix", "Jr."), ("first_name", "David")],
        );
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"first_name":"David","middle_name":"","last_name":"","name_prefix":"","name_suffix":"Jr."}"#
        );
    }

    #[test]
    fn test_to_map() {
        let record =
            ExtractedRecord::from_pairs(TaskType::EmailType, [("p_email_type", "Non-Person")]);
        let map = record.to_map();
        assert_eq!(map.len(), 1);
        assert_eq!(map["p_email_type"], "Non-Person");
    }
}
