//! Error types for the service layer.

use thiserror::Error;

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors that can occur in service operations.
///
/// Unknown content types are not errors: they resolve to empty results.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Query engine failure, reported by the engine itself.
    #[error("query error: {0}")]
    Query(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A batch run was asked to use pages of zero entries.
    #[error("batch page size must be greater than zero")]
    InvalidPageSize,

    /// Configuration rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
