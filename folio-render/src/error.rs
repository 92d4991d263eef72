//! Render error types.
//!
//! This layer performs no retries and no local recovery: every failure from a
//! sub-render or target operation is surfaced to the caller as-is. The
//! document target is append-only, so operations issued before a failure
//! remain applied.

use folio_core::CoreError;
use thiserror::Error;

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while rendering schemas.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No plugin is registered for the schema-type discriminator.
    #[error("Unknown schema type: {0}")]
    UnknownSchemaType(String),

    /// A plugin received a schema of the wrong type.
    #[error("Schema mismatch: expected {expected}, found {found}")]
    SchemaMismatch {
        /// The discriminator the plugin handles.
        expected: &'static str,
        /// The discriminator it was given.
        found: String,
    },

    /// A leaf sub-render failed; the composite operation fails as a whole.
    #[error("Sub-render failed: {0}")]
    Leaf(String),

    /// The output target or surface container is unusable.
    #[error("Target error: {0}")]
    Target(String),

    /// Core data-model error.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

impl RenderError {
    /// Build a [`RenderError::SchemaMismatch`].
    #[must_use]
    pub fn mismatch(expected: &'static str, found: &str) -> Self {
        Self::SchemaMismatch {
            expected,
            found: found.to_string(),
        }
    }
}
