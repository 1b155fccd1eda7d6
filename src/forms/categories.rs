use serde::Deserialize;
use thiserror::Error;
use validator::Validate;

use crate::domain::category::NewCategory;
use crate::domain::types::{CategoryDisplayName, CategoryName};
use crate::forms::FieldErrors;

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 100,
        message = "Display name must be between 1 and 100 characters"
    ))]
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateCategoryPayload {
    pub name: CategoryName,
    pub display_name: CategoryDisplayName,
}

impl CreateCategoryPayload {
    pub fn into_new_category(self) -> NewCategory {
        NewCategory::new(self.name, self.display_name)
    }
}

#[derive(Debug, Error)]
pub enum CreateCategoryFormError {
    #[error("Create category form validation failed: {0}")]
    Validation(FieldErrors),
}

impl TryFrom<CreateCategoryForm> for CreateCategoryPayload {
    type Error = CreateCategoryFormError;

    fn try_from(value: CreateCategoryForm) -> Result<Self, Self::Error> {
        let mut errors = match value.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => FieldErrors::from(&e),
        };

        let name = errors.capture("name", CategoryName::new(value.name));
        let display_name =
            errors.capture("displayName", CategoryDisplayName::new(value.display_name));

        match (name, display_name) {
            (Some(name), Some(display_name)) if errors.is_empty() => {
                Ok(Self { name, display_name })
            }
            _ => Err(CreateCategoryFormError::Validation(errors)),
        }
    }
}
