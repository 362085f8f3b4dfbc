use thiserror::Error;

use crate::domain::types::ValidationError;

/// Failures surfaced by repository implementations.
///
/// Use cases log these and pass them through unchanged; the core has no retry
/// or fallback policy of its own.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backing store could not be reached.
    #[error("storage connection failed: {0}")]
    Connection(String),
    /// The backing store rejected or failed a query.
    #[error("storage query failed: {0}")]
    Query(String),
    /// A stored record no longer satisfies the domain invariants.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Convenient alias for results returned from repository methods.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
