use thiserror::Error;

/// Unified error type for the entire pnl-journal-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Storage / Format ────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Storage I/O error: {0}")]
    StorageIO(String),

    // ── Calendar ────────────────────────────────────────────────────
    #[error("Invalid date key '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    // ── Configuration ───────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    Validation(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::StorageIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
