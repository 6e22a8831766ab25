//! Data model errors.

/// Errors raised by the fallible model entry points.
///
/// Report-level faults never surface here, a report that cannot be built
/// becomes a `None` placeholder inside its mission instead.
#[derive(thiserror::Error, Debug)]
pub enum ModelError {
    /// The snapshot could not be represented by the model types.
    #[error("JSON shaping failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The report discriminant is not one of the known task types.
    #[error("Unknown task type: {0}")]
    UnknownTaskType(String),

    /// The report has no discriminant at all.
    #[error("Missing 'taskType' field in report")]
    MissingTaskType,
}

/// Result type alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
