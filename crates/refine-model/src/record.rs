//! Record types flowing through the pipeline.

use serde::{Deserialize, Serialize};

/// One raw input row: source column name paired with its cell value, in
/// file column order. Immutable once parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub columns: Vec<(String, String)>,
}

impl RawRecord {
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Value for a column, or the empty string when the column is missing.
    #[must_use]
    pub fn value_or_empty(&self, column: Option<&String>) -> String {
        column
            .and_then(|name| self.get(name))
            .unwrap_or_default()
            .to_string()
    }
}

/// A raw row remapped into canonical contact fields, ready for prompting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappedRecord {
    pub full_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
}

/// The typed per-row output of the inference call.
///
/// `title`, `gender`, and `enrichment` exist only when the corresponding
/// setting was active for the batch; the enrichment display name is
/// settings metadata, not part of the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrichment: Option<String>,
    pub email: String,
    pub phone: String,
    pub actions: String,
}

impl NormalizedRecord {
    /// Full name trimmed and case-folded: the deduplication key.
    #[must_use]
    pub fn dedup_key(&self) -> String {
        self.full_name.trim().to_lowercase()
    }
}
