//! Batch orchestration: the sequencer, record validator, deduplicator,
//! and summary aggregator.
//!
//! The sequencer owns all mutable batch state (progress counters, the
//! accumulating detailed log); everyone else observes through the watch
//! channel. Row-level anomalies never escape as errors; see
//! [`error::PipelineError`] for the three things that do.

pub mod dedupe;
pub mod error;
pub mod sequencer;
pub mod summarize;
pub mod validate;

pub use dedupe::{DUPLICATE_NOTE, dedupe_contacts};
pub use error::PipelineError;
pub use sequencer::{BatchOptions, DEFAULT_INTER_CALL_DELAY, process_batch};
pub use summarize::summarize;
pub use validate::{DeletionReason, RowVerdict, validate_record};
