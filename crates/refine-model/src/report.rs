//! The per-input-row audit trail.

use serde::{Deserialize, Serialize};

use crate::labels;
use crate::record::NormalizedRecord;

/// Outcome of a row after validation and deduplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStatus {
    Kept,
    Deleted,
}

impl RowStatus {
    /// Hebrew status label used in the exported detailed report.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Kept => labels::STATUS_KEPT,
            Self::Deleted => labels::STATUS_DELETED,
        }
    }
}

/// One detailed-log entry per input row, regardless of outcome.
///
/// Entries are never deleted; the deduplicator may downgrade a kept entry
/// to deleted, appending to (never replacing) its actions note.
#[derive(Debug, Clone)]
pub struct DetailedLogEntry {
    /// 1-based input row number.
    pub row_number: usize,
    /// Original column values in source order.
    pub original: Vec<(String, String)>,
    /// Corrected values; all-empty for deleted rows.
    pub corrected: NormalizedRecord,
    pub status: RowStatus,
    /// What happened to the row, in the report's own words.
    pub actions: String,
}
