//! Batch-wide deduplication over the detailed log.

use std::collections::HashSet;

use tracing::debug;

use refine_model::{DetailedLogEntry, NormalizedRecord, RowStatus};

/// Note appended to a kept row's actions when dedup downgrades it.
pub const DUPLICATE_NOTE: &str = " + נמחק כשורה כפולה";

/// Drop later occurrences of the same contact, first occurrence wins.
///
/// Walks kept log entries in row order, keyed by the trimmed case-folded
/// full name. A later entry sharing a key is downgraded to deleted with
/// the duplicate note appended to (never replacing) its actions. Keys of
/// one character or less are exempt; the validator already handles those.
///
/// Returns the surviving contacts in first-occurrence order and the
/// number of duplicates removed.
pub fn dedupe_contacts(log: &mut [DetailedLogEntry]) -> (Vec<NormalizedRecord>, usize) {
    let mut seen: HashSet<String> = HashSet::new();
    let mut contacts = Vec::new();
    let mut removed = 0usize;

    for entry in log.iter_mut() {
        if entry.status != RowStatus::Kept {
            continue;
        }
        let key = entry.corrected.dedup_key();
        if key.chars().count() <= 1 {
            contacts.push(entry.corrected.clone());
            continue;
        }
        if seen.insert(key) {
            contacts.push(entry.corrected.clone());
        } else {
            debug!(row = entry.row_number, "duplicate contact removed");
            entry.status = RowStatus::Deleted;
            entry.actions.push_str(DUPLICATE_NOTE);
            removed += 1;
        }
    }
    (contacts, removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kept_entry(row_number: usize, full_name: &str) -> DetailedLogEntry {
        DetailedLogEntry {
            row_number,
            original: vec![("שם".to_string(), full_name.to_string())],
            corrected: NormalizedRecord {
                full_name: full_name.to_string(),
                actions: "נוקה".to_string(),
                ..NormalizedRecord::default()
            },
            status: RowStatus::Kept,
            actions: "נוקה".to_string(),
        }
    }

    #[test]
    fn first_occurrence_wins_trimmed_and_folded() {
        let mut log = vec![
            kept_entry(1, "דוד כהן"),
            kept_entry(2, "דוד כהן "),
            kept_entry(3, "David Cohen"),
            kept_entry(4, "david cohen"),
        ];
        let (contacts, removed) = dedupe_contacts(&mut log);
        assert_eq!(removed, 2);
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].full_name, "דוד כהן");
        assert_eq!(contacts[1].full_name, "David Cohen");

        assert_eq!(log[1].status, RowStatus::Deleted);
        assert_eq!(log[1].actions, format!("נוקה{DUPLICATE_NOTE}"));
        assert_eq!(log[3].status, RowStatus::Deleted);
        // first occurrences untouched
        assert_eq!(log[0].status, RowStatus::Kept);
        assert_eq!(log[0].actions, "נוקה");
    }

    #[test]
    fn deleted_entries_are_ignored() {
        let mut log = vec![kept_entry(1, "דוד כהן"), kept_entry(2, "דוד כהן")];
        log[0].status = RowStatus::Deleted;
        let (contacts, removed) = dedupe_contacts(&mut log);
        assert_eq!(removed, 0);
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].full_name, "דוד כהן");
    }

    #[test]
    fn single_character_keys_are_exempt() {
        let mut log = vec![kept_entry(1, "א"), kept_entry(2, "א")];
        let (contacts, removed) = dedupe_contacts(&mut log);
        assert_eq!(removed, 0);
        assert_eq!(contacts.len(), 2);
    }

    #[test]
    fn rerunning_on_own_output_removes_nothing() {
        let mut log = vec![
            kept_entry(1, "דוד כהן"),
            kept_entry(2, "דוד כהן"),
            kept_entry(3, "שרה לוי"),
        ];
        let (first_pass, _) = dedupe_contacts(&mut log);
        let (second_pass, removed) = dedupe_contacts(&mut log);
        assert_eq!(removed, 0);
        assert_eq!(first_pass, second_pass);
    }
}
