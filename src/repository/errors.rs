use thiserror::Error;

use crate::domain::types::EntityKind;

/// Errors returned by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The store rejected a write because the name is already taken.
    ///
    /// This is the authoritative uniqueness check and surfaces when the unit
    /// of work is committed.
    #[error("{entity} with name '{name}' already exists")]
    UniqueViolation { entity: EntityKind, name: String },
    /// A staged removal targeted a row that no longer exists.
    #[error("record not found")]
    NotFound,
    /// A stored row could not be converted into a domain value.
    #[error("invalid stored data: {0}")]
    ValidationError(String),
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl RepositoryError {
    pub(crate) fn is_unique_violation(err: &diesel::result::Error) -> bool {
        matches!(
            err,
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _
            )
        )
    }
}
