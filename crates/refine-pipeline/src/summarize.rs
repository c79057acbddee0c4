//! Batch-level aggregation over the deduplicated kept-set.

use refine_model::{
    DetailedLogEntry, EnrichmentTally, NormalizedRecord, ProcessingSettings, ProcessingSummary,
    RowStatus, labels,
};

fn count<F: Fn(&NormalizedRecord) -> bool>(contacts: &[NormalizedRecord], pred: F) -> usize {
    contacts.iter().filter(|record| pred(record)).count()
}

/// Compute the batch summary.
///
/// The conditional metrics follow the settings shape exactly: an inactive
/// setting yields an absent field, never a zero, because report rendering
/// keys off presence. `rows_deleted` counts every deleted log entry, so
/// validator deletions and duplicates land in one total.
#[must_use]
pub fn summarize(
    contacts: &[NormalizedRecord],
    log: &[DetailedLogEntry],
    settings: &ProcessingSettings,
    duplicates_removed: usize,
) -> ProcessingSummary {
    let rows_deleted = log
        .iter()
        .filter(|entry| entry.status == RowStatus::Deleted)
        .count();

    ProcessingSummary {
        names_fixed: contacts.len(),
        phones_formatted: count(contacts, |r| r.phone.trim().starts_with("05")),
        emails_validated: count(contacts, |r| r.email.contains('@')),
        genders_assigned: settings.gender_assignment.then(|| {
            count(contacts, |r| {
                r.gender
                    .as_deref()
                    .is_some_and(|g| !g.trim().is_empty() && g.trim() != labels::GENDER_UNKNOWN)
            })
        }),
        titles_separated: settings.title_separated().then(|| {
            count(contacts, |r| {
                r.title.as_deref().is_some_and(|t| !t.trim().is_empty())
            })
        }),
        enrichment: settings.enrichment_enabled().then(|| EnrichmentTally {
            field_name: settings.enrichment_field_name().to_string(),
            count: count(contacts, |r| {
                r.enrichment.as_deref().is_some_and(|e| !e.trim().is_empty())
            }),
        }),
        duplicates_removed,
        rows_deleted,
        input_rows: log.len(),
        output_rows: contacts.len(),
    }
}
