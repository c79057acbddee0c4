//! End-to-end batch runs against a scripted inference client.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use refine_infer::{InferenceClient, InferenceError};
use refine_model::{
    ColumnMapping, ProcessingPhase, ProcessingSettings, ProcessingState, RawRecord, RowStatus,
};
use refine_pipeline::{BatchOptions, PipelineError, process_batch};

/// Replays a fixed list of responses, one per invocation.
struct ScriptedClient {
    responses: Mutex<VecDeque<Result<String, InferenceError>>>,
}

impl ScriptedClient {
    fn new(responses: Vec<Result<String, InferenceError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
        }
    }

    fn remaining(&self) -> usize {
        self.responses.lock().unwrap().len()
    }
}

impl InferenceClient for ScriptedClient {
    async fn invoke(&self, _prompt: &str) -> Result<String, InferenceError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("script exhausted")
    }
}

fn row(name: &str, phone: &str) -> RawRecord {
    RawRecord {
        columns: vec![
            ("שם".to_string(), name.to_string()),
            ("נייד".to_string(), phone.to_string()),
        ],
    }
}

fn mapping() -> ColumnMapping {
    ColumnMapping {
        full_name: Some("שם".to_string()),
        phone: Some("נייד".to_string()),
        ..ColumnMapping::default()
    }
}

fn options() -> BatchOptions {
    BatchOptions {
        inter_call_delay: Duration::ZERO,
    }
}

fn cleaned(full_name: &str, phone: &str) -> String {
    format!(
        "{{\"שם מלא\":\"{full_name}\",\"שם פרטי\":\"\",\"שם משפחה\":\"\",\"תואר\":\"\",\"דואל\":\"\",\"טלפון\":\"{phone}\",\"מגדר\":\"זכר\",\"פעולות\":\"נוקה\"}}"
    )
}

fn progress_channel() -> (watch::Sender<ProcessingState>, watch::Receiver<ProcessingState>) {
    watch::channel(ProcessingState::new(0))
}

#[tokio::test]
async fn batch_validates_deduplicates_and_summarizes() {
    let rows = vec![
        row("דוד כהן", "0501234567"),
        row("דוד כהן ", "0501234567"),
        row("שם מלא", ""),
    ];
    let client = ScriptedClient::new(vec![
        Ok(cleaned("דוד כהן", "050-1234567")),
        Ok(cleaned("דוד כהן ", "050-1234567")),
        Ok("{\"שם מלא\":\"\",\"פעולות\":\"נמחק - שורת כותרת\"}".to_string()),
    ]);
    let (tx, rx) = progress_channel();

    let result = process_batch(
        &rows,
        &mapping(),
        &ProcessingSettings::default(),
        &client,
        &options(),
        &tx,
        &CancellationToken::new(),
    )
    .await
    .expect("batch succeeds");

    assert_eq!(result.contacts.len(), 1);
    assert_eq!(result.contacts[0].full_name, "דוד כהן");

    assert_eq!(result.detailed_log.len(), 3);
    assert_eq!(result.detailed_log[0].status, RowStatus::Kept);
    assert_eq!(result.detailed_log[1].status, RowStatus::Deleted);
    assert!(result.detailed_log[1].actions.contains("כפולה"));
    assert_eq!(result.detailed_log[2].status, RowStatus::Deleted);
    assert!(result.detailed_log[2].actions.contains("כותרת"));

    assert_eq!(result.summary.input_rows, 3);
    assert_eq!(result.summary.output_rows, 1);
    assert_eq!(result.summary.duplicates_removed, 1);
    assert_eq!(result.summary.rows_deleted, 2);
    assert_eq!(result.summary.phones_formatted, 1);
    assert_eq!(result.summary.genders_assigned, Some(1));

    let state = rx.borrow();
    assert_eq!(state.phase, ProcessingPhase::Completed);
    assert_eq!(state.processed_rows, 3);
    assert_eq!(state.percent(), 100);
}

#[tokio::test]
async fn deleted_rows_keep_the_settings_shaped_empty_record() {
    let rows = vec![row("###", "")];
    let client = ScriptedClient::new(vec![Ok(
        "{\"שם מלא\":\"\",\"פעולות\":\"נמחק - תוכן זבל\"}".to_string(),
    )]);
    let (tx, _rx) = progress_channel();

    let result = process_batch(
        &rows,
        &mapping(),
        &ProcessingSettings::default(),
        &client,
        &options(),
        &tx,
        &CancellationToken::new(),
    )
    .await
    .expect("batch succeeds");

    let entry = &result.detailed_log[0];
    assert_eq!(entry.status, RowStatus::Deleted);
    assert!(entry.actions.contains("זבל"));
    assert_eq!(entry.corrected.full_name, "");
    assert_eq!(entry.corrected.title.as_deref(), Some(""));
    assert_eq!(entry.corrected.gender.as_deref(), Some(""));
    assert!(entry.corrected.enrichment.is_none());
}

#[tokio::test]
async fn malformed_output_is_absorbed_not_fatal() {
    let rows = vec![row("דוד כהן", "0501234567"), row("שרה לוי", "0541112222")];
    let client = ScriptedClient::new(vec![
        Ok("complete nonsense, no json at all".to_string()),
        Ok(cleaned("שרה לוי", "054-1112222")),
    ]);
    let (tx, _rx) = progress_channel();

    let result = process_batch(
        &rows,
        &mapping(),
        &ProcessingSettings::default(),
        &client,
        &options(),
        &tx,
        &CancellationToken::new(),
    )
    .await
    .expect("batch succeeds despite one garbage row");

    // the garbage row fails validation (empty name) and is logged
    assert_eq!(result.detailed_log[0].status, RowStatus::Deleted);
    assert_eq!(result.contacts.len(), 1);
    assert_eq!(result.contacts[0].full_name, "שרה לוי");
}

#[tokio::test]
async fn transport_failure_aborts_the_whole_batch() {
    let rows = vec![row("דוד כהן", "0501234567"), row("שרה לוי", "0541112222")];
    let client = ScriptedClient::new(vec![
        Ok(cleaned("דוד כהן", "050-1234567")),
        Err(InferenceError::RateLimited),
    ]);
    let (tx, rx) = progress_channel();

    let err = process_batch(
        &rows,
        &mapping(),
        &ProcessingSettings::default(),
        &client,
        &options(),
        &tx,
        &CancellationToken::new(),
    )
    .await
    .expect_err("rate limit is fatal");

    assert!(matches!(err, PipelineError::Inference(_)));
    assert!(err.to_string().contains("429"));

    let state = rx.borrow();
    assert_eq!(state.phase, ProcessingPhase::Error);
    assert!(state.error_message.as_deref().unwrap_or("").contains("429"));
}

#[tokio::test]
async fn cancellation_is_honored_before_the_first_call() {
    let rows = vec![row("דוד כהן", "0501234567")];
    let client = ScriptedClient::new(vec![Ok(cleaned("דוד כהן", "050-1234567"))]);
    let (tx, rx) = progress_channel();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = process_batch(
        &rows,
        &mapping(),
        &ProcessingSettings::default(),
        &client,
        &options(),
        &tx,
        &cancel,
    )
    .await
    .expect_err("cancelled batch errors");

    assert!(matches!(err, PipelineError::Cancelled));
    assert_eq!(client.remaining(), 1);
    assert_eq!(rx.borrow().phase, ProcessingPhase::Error);
}

#[tokio::test]
async fn invalid_mapping_is_rejected_before_any_call() {
    let rows = vec![row("דוד כהן", "0501234567")];
    let client = ScriptedClient::new(vec![Ok(cleaned("דוד כהן", "050-1234567"))]);
    let (tx, _rx) = progress_channel();

    let err = process_batch(
        &rows,
        &ColumnMapping::default(),
        &ProcessingSettings::default(),
        &client,
        &options(),
        &tx,
        &CancellationToken::new(),
    )
    .await
    .expect_err("unmapped phone is rejected");

    assert!(matches!(err, PipelineError::Mapping(_)));
    assert_eq!(client.remaining(), 1);
}
