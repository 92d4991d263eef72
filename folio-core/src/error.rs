//! Error types for core operations.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in the core data model.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The font map does not carry a usable fallback entry.
    #[error("Fallback font misconfigured: {0}")]
    FallbackFont(String),

    /// Schema serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
