//! Batch progress state machine and final result.

use serde::{Deserialize, Serialize};

use crate::record::NormalizedRecord;
use crate::report::DetailedLogEntry;
use crate::summary::ProcessingSummary;

/// Phases of a batch as observed by the UI layer.
///
/// Upload, mapping, and preview are driven by the surrounding application;
/// the sequencer itself only moves `InitialParsing → Processing →
/// {Completed | Error}`. `Completed` and `Error` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingPhase {
    InitialParsing,
    Uploading,
    Mapping,
    Preview,
    Processing,
    Completed,
    Error,
}

/// Progress snapshot: phase plus row counters. Mutated only by the
/// sequencer; everyone else observes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingState {
    pub phase: ProcessingPhase,
    pub processed_rows: usize,
    pub total_rows: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ProcessingState {
    #[must_use]
    pub fn new(total_rows: usize) -> Self {
        Self {
            phase: ProcessingPhase::InitialParsing,
            processed_rows: 0,
            total_rows,
            error_message: None,
        }
    }

    /// Progress percentage, reaching exactly 100 only in `Completed`.
    #[must_use]
    pub fn percent(&self) -> u8 {
        if self.phase == ProcessingPhase::Completed {
            return 100;
        }
        if self.total_rows == 0 {
            return 0;
        }
        let raw = (self.processed_rows * 100 / self.total_rows) as u8;
        raw.min(99)
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.phase,
            ProcessingPhase::Completed | ProcessingPhase::Error
        )
    }
}

/// Everything a finished batch hands to the export and UI collaborators.
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    /// Deduplicated kept contacts, in first-occurrence order.
    pub contacts: Vec<NormalizedRecord>,
    /// One audit entry per input row, deleted rows included.
    pub detailed_log: Vec<DetailedLogEntry>,
    pub summary: ProcessingSummary,
}
