use thiserror::Error;

use crate::domain::types::{CategoryId, EntityKind};
use crate::forms::FieldErrors;
use crate::repository::errors::RepositoryError;

/// Error type used by service layer functions.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Submitted fields failed validation.
    #[error("validation failed: {0}")]
    Validation(FieldErrors),
    /// The name is already used by another entity of the same kind.
    ///
    /// Raised both by the early existence check and by the store's unique
    /// index at commit time.
    #[error("{entity} with name '{name}' already exists")]
    NameConflict { entity: EntityKind, name: String },
    /// The referenced category does not exist.
    #[error("category with id '{0}' not found")]
    CategoryNotFound(CategoryId),
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// The store failed; passed through unchanged.
    #[error(transparent)]
    Repository(RepositoryError),
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
