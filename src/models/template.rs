use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::template::{NewTemplate as DomainNewTemplate, Template as DomainTemplate};
use crate::domain::types::{
    CategoryId, JsonMap, TemplateDisplayName, TemplateName, TypeConstraintError,
};

/// Diesel model representing the `templates` table.
///
/// `preview` and `template_data` hold JSON object text.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::templates)]
pub struct Template {
    pub id: i32,
    pub name: String,
    pub display_name: String,
    pub category_id: Option<i32>,
    pub preview: String,
    pub template_data: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable/patchable form of [`Template`].
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::templates)]
pub struct NewTemplate {
    pub name: String,
    pub display_name: String,
    pub category_id: Option<i32>,
    pub preview: String,
    pub template_data: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

fn decode_map(raw: &str, field: &str) -> Result<JsonMap, TypeConstraintError> {
    serde_json::from_str(raw)
        .map_err(|e| TypeConstraintError::InvalidValue(format!("{field} is not a JSON object: {e}")))
}

fn encode_map(map: JsonMap) -> String {
    serde_json::Value::Object(map).to_string()
}

impl TryFrom<Template> for DomainTemplate {
    type Error = TypeConstraintError;

    fn try_from(template: Template) -> Result<Self, Self::Error> {
        Ok(Self {
            id: template.id.try_into()?,
            name: TemplateName::new(template.name)?,
            display_name: TemplateDisplayName::new(template.display_name)?,
            category_id: template.category_id.map(CategoryId::new).transpose()?,
            preview: decode_map(&template.preview, "preview")?,
            template_data: decode_map(&template.template_data, "templateData")?,
            created_at: template.created_at,
            updated_at: template.updated_at,
        })
    }
}

impl From<DomainNewTemplate> for NewTemplate {
    fn from(template: DomainNewTemplate) -> Self {
        Self {
            name: template.name.into_inner(),
            display_name: template.display_name.into_inner(),
            category_id: Some(template.category.id.get()),
            preview: encode_map(template.preview),
            template_data: encode_map(template.template_data),
            created_at: template.created_at,
            updated_at: template.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::types::{CategoryDisplayName, CategoryName};
    use chrono::DateTime;
    use serde_json::json;

    fn row(preview: &str) -> Template {
        let epoch = DateTime::from_timestamp(0, 0).unwrap().naive_utc();
        Template {
            id: 3,
            name: "Video Template".into(),
            display_name: "Video Template Display".into(),
            category_id: None,
            preview: preview.into(),
            template_data: "{}".into(),
            created_at: epoch,
            updated_at: epoch,
        }
    }

    #[test]
    fn decodes_nested_payloads() {
        let template: DomainTemplate =
            row(r#"{"aspectRatio":1.77,"media":{"urls":["a","b"]}}"#).try_into().unwrap();
        assert_eq!(template.preview["media"]["urls"], json!(["a", "b"]));
        assert!(template.template_data.is_empty());
        assert_eq!(template.category_id, None);
    }

    #[test]
    fn rejects_non_object_payloads() {
        let err = DomainTemplate::try_from(row("[1, 2]")).unwrap_err();
        assert!(matches!(err, TypeConstraintError::InvalidValue(_)));
    }

    #[test]
    fn encodes_payloads_as_object_text() {
        let epoch = DateTime::from_timestamp(0, 0).unwrap().naive_utc();
        let category = Category {
            id: CategoryId::new(5).unwrap(),
            name: CategoryName::new("Business").unwrap(),
            display_name: CategoryDisplayName::new("Business").unwrap(),
            created_at: epoch,
            updated_at: epoch,
        };
        let template = DomainNewTemplate::new(
            TemplateName::new("SMEG Blender").unwrap(),
            TemplateDisplayName::new("SMEG Blender").unwrap(),
            category,
        )
        .with_template_data(json!({"aiFilter": {"title": "x"}}).as_object().cloned().unwrap());

        let db: NewTemplate = template.into();

        assert_eq!(db.category_id, Some(5));
        assert_eq!(db.preview, "{}");
        assert_eq!(db.template_data, r#"{"aiFilter":{"title":"x"}}"#);
    }
}
