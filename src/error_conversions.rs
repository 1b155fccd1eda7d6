//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! conversions live here instead of next to the error definitions.

use crate::domain::types::TypeConstraintError;
use crate::forms::categories::CreateCategoryFormError;
use crate::forms::templates::CreateTemplateFormError;
use crate::repository::errors::RepositoryError;
use crate::services::errors::ServiceError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

/// Commit-time unique index rejections become the same `NameConflict` the
/// services raise from their early checks.
impl From<RepositoryError> for ServiceError {
    fn from(val: RepositoryError) -> Self {
        match val {
            RepositoryError::UniqueViolation { entity, name } => {
                ServiceError::NameConflict { entity, name }
            }
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}

impl From<CreateTemplateFormError> for ServiceError {
    fn from(val: CreateTemplateFormError) -> Self {
        match val {
            CreateTemplateFormError::Validation(errors) => ServiceError::Validation(errors),
        }
    }
}

impl From<CreateCategoryFormError> for ServiceError {
    fn from(val: CreateCategoryFormError) -> Self {
        match val {
            CreateCategoryFormError::Validation(errors) => ServiceError::Validation(errors),
        }
    }
}
