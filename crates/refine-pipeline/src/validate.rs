//! Keep/delete decision for a normalized record.

use refine_model::NormalizedRecord;

/// Why the validator deleted a row.
///
/// The reason is synthesized from the record's own actions note, which is
/// where the inference service explains what it saw; when the note is
/// silent the name was simply too short to be a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionReason {
    /// One of the fields was a literal column-header token.
    Header,
    /// Symbols, gibberish, or other non-name content.
    Junk,
    /// Name empty or a single character after trimming.
    TooShort,
}

impl DeletionReason {
    /// Hebrew reason written into the detailed log.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Header => "שורה נמחקה - זוהתה כשורת כותרת",
            Self::Junk => "שורה נמחקה - תוכן זבל או לא תקין",
            Self::TooShort => "שורה נמחקה - שם לא תקין או קצר מדי",
        }
    }
}

/// The validator's verdict on one normalized record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowVerdict {
    Kept,
    Deleted(DeletionReason),
}

/// A record is kept iff its trimmed full name is longer than one character.
///
/// Validity is independent of phone and email presence; a contact with an
/// empty phone is still a contact.
#[must_use]
pub fn validate_record(record: &NormalizedRecord) -> RowVerdict {
    if record.full_name.trim().chars().count() > 1 {
        return RowVerdict::Kept;
    }
    let note = record.actions.as_str();
    let reason = if note.contains("כותרת") {
        DeletionReason::Header
    } else if note.contains("זבל") {
        DeletionReason::Junk
    } else {
        DeletionReason::TooShort
    };
    RowVerdict::Deleted(reason)
}
