//! The per-row batch sequencer.
//!
//! Rows are processed strictly sequentially: one row is fully resolved
//! (map, prompt, invoke, normalize, validate, log) before the next begins,
//! with a fixed pacing interval between inference calls to respect the
//! provider's per-minute ceiling. Inference transport failures abort the
//! whole batch; everything else becomes per-row bookkeeping.

use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

use refine_infer::{InferenceClient, RequestPacer};
use refine_ingest::{apply_mapping, single_row_csv};
use refine_model::{
    ColumnMapping, DetailedLogEntry, NormalizedRecord, ProcessingPhase, ProcessingResult,
    ProcessingSettings, ProcessingState, RawRecord, RowStatus,
};
use refine_normalize::normalize_response;
use refine_prompt::build_prompt;

use crate::dedupe::dedupe_contacts;
use crate::error::PipelineError;
use crate::summarize::summarize;
use crate::validate::{RowVerdict, validate_record};

/// Default pacing between consecutive inference calls.
pub const DEFAULT_INTER_CALL_DELAY: Duration = Duration::from_millis(650);

/// Actions note for kept rows whose record carried no note of its own.
const DEFAULT_KEPT_NOTE: &str = "עובד";

/// Knobs of a single batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub inter_call_delay: Duration,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            inter_call_delay: DEFAULT_INTER_CALL_DELAY,
        }
    }
}

/// The settings-shaped empty record written for deleted rows.
fn empty_record(settings: &ProcessingSettings) -> NormalizedRecord {
    NormalizedRecord {
        title: settings.title_separated().then(String::new),
        gender: settings.gender_assignment.then(String::new),
        enrichment: settings.enrichment_enabled().then(String::new),
        ..NormalizedRecord::default()
    }
}

/// Process a whole batch of raw rows into a [`ProcessingResult`].
///
/// Progress is published through `progress` after every row; the final
/// snapshot is either `Completed` or `Error`. `cancel` is honored between
/// rows, never mid-call. The mapping is validated before the first
/// inference call is made.
#[instrument(skip_all, fields(rows = rows.len()))]
pub async fn process_batch<C: InferenceClient>(
    rows: &[RawRecord],
    mapping: &ColumnMapping,
    settings: &ProcessingSettings,
    client: &C,
    options: &BatchOptions,
    progress: &watch::Sender<ProcessingState>,
    cancel: &CancellationToken,
) -> Result<ProcessingResult, PipelineError> {
    mapping.validate()?;

    let total = rows.len();
    let mut state = ProcessingState::new(total);
    progress.send_replace(state.clone());

    state.phase = ProcessingPhase::Processing;
    progress.send_replace(state.clone());

    let pacer = RequestPacer::new(options.inter_call_delay);
    let mut log: Vec<DetailedLogEntry> = Vec::with_capacity(total);

    for (index, row) in rows.iter().enumerate() {
        let row_number = index + 1;

        if cancel.is_cancelled() {
            warn!(row = row_number, "batch cancelled");
            state.phase = ProcessingPhase::Error;
            state.error_message = Some(PipelineError::Cancelled.to_string());
            progress.send_replace(state.clone());
            return Err(PipelineError::Cancelled);
        }

        let mapped = apply_mapping(row, mapping);
        let row_csv = single_row_csv(&mapped).map_err(|err| PipelineError::RowRender {
            row: row_number,
            message: err.to_string(),
        })?;
        let prompt = build_prompt(settings, &row_csv, row_number, total);

        pacer.wait().await;
        let raw = match client.invoke(&prompt).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!(row = row_number, error = %err, "inference failed, aborting batch");
                state.phase = ProcessingPhase::Error;
                state.error_message = Some(err.to_string());
                progress.send_replace(state.clone());
                return Err(err.into());
            }
        };

        let normalized = normalize_response(&raw, settings);
        let mut record = normalized.record;
        if record.actions.trim().is_empty() {
            record.actions = DEFAULT_KEPT_NOTE.to_string();
        }

        let entry = match validate_record(&record) {
            RowVerdict::Kept => DetailedLogEntry {
                row_number,
                original: row.columns.clone(),
                actions: record.actions.clone(),
                corrected: record,
                status: RowStatus::Kept,
            },
            RowVerdict::Deleted(reason) => DetailedLogEntry {
                row_number,
                original: row.columns.clone(),
                corrected: empty_record(settings),
                status: RowStatus::Deleted,
                actions: reason.message().to_string(),
            },
        };
        log.push(entry);

        state.processed_rows = row_number;
        progress.send_replace(state.clone());
    }

    let (contacts, duplicates_removed) = dedupe_contacts(&mut log);
    let summary = summarize(&contacts, &log, settings, duplicates_removed);

    state.phase = ProcessingPhase::Completed;
    progress.send_replace(state.clone());
    info!(
        kept = contacts.len(),
        deleted = summary.rows_deleted,
        "batch complete"
    );

    Ok(ProcessingResult {
        contacts,
        detailed_log: log,
        summary,
    })
}
