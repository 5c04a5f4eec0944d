use thiserror::Error;

/// Result type for codex-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Error)]
pub enum Error {
    /// Color string is not `#RRGGBB` or `#RRGGBBAA`
    #[error("Invalid hex color: {0:?}")]
    InvalidHex(String),
}
