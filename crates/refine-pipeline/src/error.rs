use thiserror::Error;

use refine_infer::InferenceError;
use refine_model::MappingError;

/// Batch-fatal pipeline errors.
///
/// Per-row anomalies (malformed output, invalid content, duplicates) are
/// absorbed into the detailed log and never surface here; only mapping
/// rejection, transport failure, and cancellation abort a batch.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error(transparent)]
    Inference(#[from] InferenceError),

    /// A mapped row could not be rendered into the prompt's CSV snippet.
    #[error("כשל בהכנת שורה {row}: {message}")]
    RowRender { row: usize, message: String },

    #[error("העיבוד בוטל על ידי המשתמש")]
    Cancelled,
}
