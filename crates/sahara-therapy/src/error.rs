use thiserror::Error;

use sahara_screening::ScreeningError;
use sahara_store::StoreError;

/// Unified error type for all workflow operations. Every variant is
/// recoverable at the calling layer; none is fatal to the process.
#[derive(Debug, Error)]
pub enum TherapyError {
    /// Missing or malformed input, e.g. an incomplete answer sheet or a task
    /// day outside the curriculum's duration.
    #[error("validation error: {0}")]
    Validation(String),

    /// A precondition on existing records failed, e.g. a second active
    /// assignment for the same child.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The operation targets a record that does not exist.
    #[error("not found: {0}")]
    NotFound(String),
}

impl From<StoreError> for TherapyError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { .. } | StoreError::NotFoundForChild { .. } => {
                TherapyError::NotFound(e.to_string())
            }
            StoreError::ActiveAssignmentExists { .. } => TherapyError::Conflict(e.to_string()),
            StoreError::Serialization(_) => TherapyError::Validation(e.to_string()),
        }
    }
}

impl From<ScreeningError> for TherapyError {
    fn from(e: ScreeningError) -> Self {
        TherapyError::Validation(e.to_string())
    }
}
