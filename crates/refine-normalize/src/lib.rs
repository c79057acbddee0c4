//! Defensive normalization of raw inference output.
//!
//! Row-level inference output is untrusted text: prose around the JSON,
//! fenced code blocks, unquoted phone numbers, truncation mid-object, and
//! key/value inversion all occur in practice. The repair ladder applies
//! increasingly aggressive passes in a fixed order:
//!
//! 1. **fences**: strip prose and code-block markers around the object
//! 2. **repair**: re-quote leading-zero phone numbers, then parse; on
//!    failure trim the incomplete tail, drop dangling commas, balance
//!    brackets, and parse again
//! 3. **swap**: detect key/value inversion and swap back
//! 4. **record**: coerce the surviving object into a typed record,
//!    injecting empty values for required fields the object lost
//!
//! The ladder is total: any input, including the empty string, yields a
//! `NormalizedResponse`; a hard parse failure is reported through
//! [`ParseOutcome::Failed`], never an error.

pub mod fences;
pub mod record;
pub mod repair;
pub mod swap;

use serde_json::Value;
use tracing::{debug, warn};

use refine_model::{NormalizedRecord, ProcessingSettings};

pub use fences::strip_fences;
pub use record::record_from_object;
pub use repair::{
    balance_brackets, quote_leading_zero_phones, strip_dangling_comma, trim_incomplete_tail,
};
pub use swap::unswap_keys;

/// How far down the ladder the parse had to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Parsed after fence stripping and phone re-quoting only.
    Direct,
    /// Parsed only after structural repair of truncated output.
    Repaired,
    /// Unparseable; the record is the empty failure shape.
    Failed,
}

/// A normalized row plus the ladder rung that produced it.
#[derive(Debug, Clone)]
pub struct NormalizedResponse {
    pub record: NormalizedRecord,
    pub outcome: ParseOutcome,
}

impl NormalizedResponse {
    /// True when the row hit the bottom of the ladder.
    #[must_use]
    pub fn parse_failed(&self) -> bool {
        self.outcome == ParseOutcome::Failed
    }
}

fn parse_object(content: &str) -> Option<serde_json::Map<String, Value>> {
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Run the full repair ladder over one raw inference response.
pub fn normalize_response(raw: &str, settings: &ProcessingSettings) -> NormalizedResponse {
    let content = strip_fences(raw);
    let quoted = quote_leading_zero_phones(content);

    if let Some(map) = parse_object(&quoted) {
        let map = unswap_keys(map);
        return NormalizedResponse {
            record: record_from_object(&map, settings),
            outcome: ParseOutcome::Direct,
        };
    }

    let trimmed = trim_incomplete_tail(&quoted);
    let no_comma = strip_dangling_comma(&trimmed);
    let balanced = balance_brackets(&no_comma);
    if let Some(map) = parse_object(&balanced) {
        debug!("inference output repaired after structural fixes");
        let map = unswap_keys(map);
        return NormalizedResponse {
            record: record_from_object(&map, settings),
            outcome: ParseOutcome::Repaired,
        };
    }

    warn!(
        raw_len = raw.len(),
        "inference output unparseable after repair ladder"
    );
    NormalizedResponse {
        record: record_from_object(&serde_json::Map::new(), settings),
        outcome: ParseOutcome::Failed,
    }
}
