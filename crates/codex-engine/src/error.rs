use std::path::PathBuf;
use thiserror::Error;

/// Result type for codex-engine operations
pub type Result<T> = std::result::Result<T, LoadError>;

/// Reasons a dataset load can fail.
///
/// The store is always reset to the empty, not-loaded state before one of
/// these is returned.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No candidate path for the default dataset exists
    #[error("No dataset found (looked for {0})")]
    Unresolved(String),

    /// Explicit dataset path does not exist
    #[error("Dataset not found: {}", .0.display())]
    NotFound(PathBuf),

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Top-level document is not a list of records
    #[error("Dataset must be a JSON array of records, found {0}")]
    NotASequence(&'static str),

    /// Every record was malformed, or the list was empty
    #[error("Dataset contains no valid martial soul records")]
    NoValidEntities,
}
