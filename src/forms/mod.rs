//! Boundary forms: raw caller input validated into typed payloads.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::Serialize;
use validator::ValidationErrors;

use crate::domain::types::{JsonMap, TypeConstraintError};

pub mod categories;
pub mod templates;

/// Validation failures keyed by camelCase field name.
///
/// Only the first failure per field is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(camel_case(field))
            .or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Record a constraint failure for `field`, returning the value on success.
    pub(crate) fn capture<T>(
        &mut self,
        field: &str,
        result: Result<T, TypeConstraintError>,
    ) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.insert(field, e.to_string());
                None
            }
        }
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(value: &ValidationErrors) -> Self {
        let mut errors = Self::new();
        for (field, field_errors) in value.field_errors() {
            if let Some(error) = field_errors.first() {
                let message = error
                    .message
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| format!("{field} is invalid ({})", error.code));
                errors.insert(&field, message);
            }
        }
        errors
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for ch in field.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Accept a missing/null payload as an empty map; reject anything that is not
/// a JSON object.
pub(crate) fn json_object(
    value: Option<serde_json::Value>,
    field: &str,
    message: &str,
    errors: &mut FieldErrors,
) -> Option<JsonMap> {
    match value {
        None | Some(serde_json::Value::Null) => Some(JsonMap::new()),
        Some(serde_json::Value::Object(map)) => Some(map),
        Some(_) => {
            errors.insert(field, message);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_camel_cased() {
        let mut errors = FieldErrors::new();
        errors.insert("display_name", "Display name is required");
        errors.insert("category_id", "Category ID is required");
        assert_eq!(errors.get("displayName"), Some("Display name is required"));
        assert_eq!(errors.get("categoryId"), Some("Category ID is required"));
    }

    #[test]
    fn keeps_first_message_per_field() {
        let mut errors = FieldErrors::new();
        errors.insert("name", "first");
        errors.insert("name", "second");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some("first"));
        assert_eq!(errors.to_string(), "name: first");
    }

    #[test]
    fn null_payload_is_an_empty_map() {
        let mut errors = FieldErrors::new();
        let map = json_object(Some(serde_json::Value::Null), "preview", "bad", &mut errors);
        assert_eq!(map, Some(JsonMap::new()));
        assert!(errors.is_empty());
    }
}
