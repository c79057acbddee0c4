//! Hebrew display labels shared by the prompt schema, the normalizer, and
//! the CSV/report writers.
//!
//! The inference service is instructed to answer with these exact keys, so
//! the strings here are load-bearing wire format, not presentation.

/// Full name field key.
pub const FULL_NAME: &str = "שם מלא";
/// First name field key.
pub const FIRST_NAME: &str = "שם פרטי";
/// Last name field key.
pub const LAST_NAME: &str = "שם משפחה";
/// Honorific title field key (present only with separate-field handling).
pub const TITLE: &str = "תואר";
/// Gender field key (present only when gender assignment is enabled).
pub const GENDER: &str = "מגדר";
/// Email field key.
pub const EMAIL: &str = "דואל";
/// Phone field key.
pub const PHONE: &str = "טלפון";
/// Address field key (input side only, never requested back).
pub const ADDRESS: &str = "כתובת";
/// Free-text actions note field key.
pub const ACTIONS: &str = "פעולות";

/// Gender sentinel excluded from the assignment count.
pub const GENDER_UNKNOWN: &str = "לא ידוע";

/// Default display name for the enrichment output field.
pub const DEFAULT_ENRICHMENT_FIELD: &str = "שם מ-Truecaller";

/// Detailed-log row number column.
pub const ROW_NUMBER: &str = "מספר שורה";
/// Detailed-log status column.
pub const STATUS: &str = "סטטוס";
/// Suffix appended to original source columns in the detailed log.
pub const ORIGINAL_SUFFIX: &str = " (מקורי)";
/// Suffix appended to corrected columns in the detailed log.
pub const CORRECTED_SUFFIX: &str = " (לאחר תיקון)";

/// Status value for rows retained in the output batch.
pub const STATUS_KEPT: &str = "נשמר";
/// Status value for rows removed by the validator or deduplicator.
pub const STATUS_DELETED: &str = "נמחק";

/// The response keys every parsed row must carry. Used both for
/// missing-key injection during repair and for key/value swap detection.
pub const REQUIRED_FIELDS: [&str; 6] = [FULL_NAME, FIRST_NAME, LAST_NAME, EMAIL, PHONE, ACTIONS];
