//! Error types for the component model.

use thiserror::Error;

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised by the component model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A `parent_id` chain loops back on itself.
    #[error("Cyclic component structure detected at component {id}")]
    CyclicStructure { id: String },

    /// Serialized component list could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Serialized component list was valid JSON but not an array.
    #[error("Expected a JSON array of components")]
    NotAnArray,
}
