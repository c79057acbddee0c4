use thiserror::Error;

/// Inference transport and protocol errors.
///
/// Rate-limit and authorization failures are distinguishable so the batch
/// can surface a specific user-facing message; everything else carries the
/// status code.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("429: חרגת ממכסת הבקשות - נסה שוב בעוד כמה דקות")]
    RateLimited,

    #[error("401: מפתח ה-API לא תקין")]
    Unauthorized,

    #[error("שגיאת שרת: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("שגיאת רשת: {0}")]
    Network(String),

    #[error("תגובה לא תקינה מהשירות: {0}")]
    InvalidResponse(String),
}

impl InferenceError {
    /// True for failures a future per-row retry policy could reasonably
    /// retry; authorization failures are never transient.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::RateLimited | Self::Network(_))
    }
}
