//! Batch-level improvement counts.

use serde::{Deserialize, Serialize};

/// Count of enrichment values produced, together with the display name the
/// batch was configured with (the name keys the exported metric).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentTally {
    pub field_name: String,
    pub count: usize,
}

/// Aggregate counts over the final deduplicated kept-set.
///
/// The optional metrics exist only when their governing setting was active
/// for the batch. Downstream report generation keys off presence, so an
/// inactive setting must yield an absent key, never a zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingSummary {
    /// Kept contacts after dedup (every kept row had its name normalized).
    pub names_fixed: usize,
    /// Kept contacts whose phone matches the Israeli mobile `05` prefix.
    pub phones_formatted: usize,
    /// Kept contacts whose email contains `@`.
    pub emails_validated: usize,
    /// Gender assignments, excluding the unknown sentinel. Present only
    /// when gender assignment was enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genders_assigned: Option<usize>,
    /// Titles moved into the separate field. Present only under
    /// separate-field title handling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub titles_separated: Option<usize>,
    /// Enrichment values filled. Present only when enrichment was enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrichment: Option<EnrichmentTally>,
    /// Rows dropped by the deduplicator.
    pub duplicates_removed: usize,
    /// Total deleted rows: validator deletions plus duplicates.
    pub rows_deleted: usize,
    pub input_rows: usize,
    pub output_rows: usize,
}

impl ProcessingSummary {
    /// Render the summary as ordered Hebrew-labeled metrics, conditional
    /// keys included only when their setting was active.
    #[must_use]
    pub fn labeled(&self) -> Vec<(String, String)> {
        let mut metrics = vec![
            ("סך שמות שתוקנו".to_string(), self.names_fixed.to_string()),
            (
                "סך טלפונים שעוצבו".to_string(),
                self.phones_formatted.to_string(),
            ),
            (
                "סך כתובות אימייל שאומתו".to_string(),
                self.emails_validated.to_string(),
            ),
        ];
        if let Some(count) = self.genders_assigned {
            metrics.push(("סך שיוכי מגדר שבוצעו".to_string(), count.to_string()));
        }
        if let Some(count) = self.titles_separated {
            metrics.push((
                "סך תארים שהועברו לשדה נפרד".to_string(),
                count.to_string(),
            ));
        }
        if let Some(tally) = &self.enrichment {
            metrics.push((
                format!("סך העשרות {}", tally.field_name),
                tally.count.to_string(),
            ));
        }
        metrics.push(("סך כפולים שנוקו".to_string(), self.duplicates_removed.to_string()));
        metrics.push(("סך שורות שנמחקו".to_string(), self.rows_deleted.to_string()));
        metrics.push(("מספר שורות בקלט".to_string(), self.input_rows.to_string()));
        metrics.push(("מספר שורות בפלט".to_string(), self.output_rows.to_string()));
        metrics
    }
}
