//! Storage errors

use thiserror::Error;
use uuid::Uuid;

/// Errors reported by the repositories
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("patient not found: {0}")]
    PatientNotFound(Uuid),

    #[error("visit not found: {0}")]
    VisitNotFound(Uuid),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
