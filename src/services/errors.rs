use thiserror::Error;

use crate::domain::types::ValidationError;
use crate::repository::RepositoryError;

/// Error type shared by the service layer functions.
///
/// Validation, not-found and cancellation outcomes are distinguishable by
/// variant; repository failures pass through unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// A domain invariant rejected the supplied input.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Requested category was not found.
    #[error("category not found")]
    NotFound,
    /// The caller cancelled the operation before it completed.
    #[error("operation cancelled")]
    Cancelled,
    /// The repository collaborator failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
