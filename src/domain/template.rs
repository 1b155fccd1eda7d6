use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::refreshed_timestamp;
use crate::domain::types::{CategoryId, JsonMap, TemplateDisplayName, TemplateId, TemplateName};

/// A persisted catalog template.
///
/// `preview` and `template_data` are opaque to the catalog and stored as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: TemplateId,
    pub name: TemplateName,
    pub display_name: TemplateDisplayName,
    /// Owning category. `None` once the reference has been cleared.
    pub category_id: Option<CategoryId>,
    pub preview: JsonMap,
    pub template_data: JsonMap,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Template {
    pub fn set_name(&mut self, name: TemplateName) -> &mut Self {
        self.name = name;
        self.touch();
        self
    }

    pub fn set_display_name(&mut self, display_name: TemplateDisplayName) -> &mut Self {
        self.display_name = display_name;
        self.touch();
        self
    }

    pub fn set_preview(&mut self, preview: JsonMap) -> &mut Self {
        self.preview = preview;
        self.touch();
        self
    }

    pub fn set_template_data(&mut self, template_data: JsonMap) -> &mut Self {
        self.template_data = template_data;
        self.touch();
        self
    }

    /// Point the template at another category.
    pub fn assign_category(&mut self, category: &Category) -> &mut Self {
        self.category_id = Some(category.id);
        self.touch();
        self
    }

    /// Drop the category reference.
    ///
    /// The inverse side is derived from `category_id`, so the category no
    /// longer lists this template after the change is persisted.
    pub fn clear_category(&mut self) -> &mut Self {
        self.category_id = None;
        self.touch();
        self
    }

    pub fn belongs_to(&self, category: &Category) -> bool {
        self.category_id == Some(category.id)
    }

    fn touch(&mut self) {
        self.updated_at = refreshed_timestamp(self.created_at);
    }
}

/// A template constructed by the service and staged for insertion.
///
/// The identifier is assigned when the unit of work is committed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTemplate {
    pub name: TemplateName,
    pub display_name: TemplateDisplayName,
    pub category: Category,
    pub preview: JsonMap,
    pub template_data: JsonMap,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewTemplate {
    /// Build a template bound to `category` with empty payloads.
    pub fn new(name: TemplateName, display_name: TemplateDisplayName, category: Category) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            name,
            display_name,
            category,
            preview: JsonMap::new(),
            template_data: JsonMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_preview(mut self, preview: JsonMap) -> Self {
        self.preview = preview;
        self
    }

    pub fn with_template_data(mut self, template_data: JsonMap) -> Self {
        self.template_data = template_data;
        self
    }
}
