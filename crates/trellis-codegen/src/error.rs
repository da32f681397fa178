//! Error types for code generation.

use thiserror::Error;
use trellis_core::ModelError;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during code generation.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Framework name outside the supported set.
    #[error("Unsupported framework: {0}")]
    UnknownFramework(String),

    /// CSS framework name outside the supported set.
    #[error("Unsupported CSS framework: {0}")]
    UnknownCssFramework(String),

    /// Export type name outside the supported set.
    #[error("Unsupported export type: {0}")]
    UnknownExportType(String),

    /// Generator for a known framework was compiled out.
    #[error("Framework '{0}' is not enabled in this build")]
    FrameworkDisabled(String),

    /// A `parent_id` chain loops back on itself.
    #[error("Cyclic component structure detected at component {id}")]
    CyclicStructure { id: String },

    /// Template rendering error.
    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    /// Invalid template.
    #[error("Invalid template: {0}")]
    InvalidTemplate(#[from] handlebars::TemplateError),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error from the component model.
    #[error(transparent)]
    Model(#[from] ModelError),
}
