use serde::Deserialize;
use thiserror::Error;
use validator::Validate;

use crate::domain::types::{CategoryId, JsonMap, TemplateDisplayName, TemplateName};
use crate::forms::{FieldErrors, json_object};
use crate::pagination::Pagination;

/// Raw input of the "create template" operation.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTemplateForm {
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
    #[validate(required(message = "Category ID is required"))]
    pub category_id: Option<i32>,
    pub preview: Option<serde_json::Value>,
    pub template_data: Option<serde_json::Value>,
}

/// Validated input for [`crate::services::templates::create_template`].
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTemplatePayload {
    pub name: TemplateName,
    pub display_name: TemplateDisplayName,
    pub category_id: CategoryId,
    pub preview: JsonMap,
    pub template_data: JsonMap,
}

#[derive(Debug, Error)]
pub enum CreateTemplateFormError {
    #[error("Create template form validation failed: {0}")]
    Validation(FieldErrors),
}

impl TryFrom<CreateTemplateForm> for CreateTemplatePayload {
    type Error = CreateTemplateFormError;

    fn try_from(value: CreateTemplateForm) -> Result<Self, Self::Error> {
        let mut errors = match value.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => FieldErrors::from(&e),
        };

        let name = errors.capture("name", TemplateName::new(value.name));
        let display_name =
            errors.capture("displayName", TemplateDisplayName::new(value.display_name));
        let category_id = value
            .category_id
            .and_then(|id| errors.capture("categoryId", CategoryId::new(id)));
        let preview = json_object(
            value.preview,
            "preview",
            "Preview must be an object",
            &mut errors,
        );
        let template_data = json_object(
            value.template_data,
            "templateData",
            "Template data must be an object",
            &mut errors,
        );

        match (name, display_name, category_id, preview, template_data) {
            (Some(name), Some(display_name), Some(category_id), Some(preview), Some(template_data))
                if errors.is_empty() =>
            {
                Ok(Self {
                    name,
                    display_name,
                    category_id,
                    preview,
                    template_data,
                })
            }
            _ => Err(CreateTemplateFormError::Validation(errors)),
        }
    }
}

/// Raw query of the "list templates" operation.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTemplatesQuery {
    pub category_id: Option<i32>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl ListTemplatesQuery {
    /// Requested page with defaults applied and bounds clamped.
    pub fn pagination(&self) -> Pagination {
        Pagination::clamped(self.page, self.per_page)
    }
}
