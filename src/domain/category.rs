use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::refreshed_timestamp;
use crate::domain::types::{CategoryDisplayName, CategoryId, CategoryName};

/// Persisted grouping that templates reference.
///
/// A category does not own its templates; they are found by querying
/// templates with a matching `category_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub display_name: CategoryDisplayName,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Category {
    pub fn set_name(&mut self, name: CategoryName) -> &mut Self {
        self.name = name;
        self.touch();
        self
    }

    pub fn set_display_name(&mut self, display_name: CategoryDisplayName) -> &mut Self {
        self.display_name = display_name;
        self.touch();
        self
    }

    fn touch(&mut self) {
        self.updated_at = refreshed_timestamp(self.created_at);
    }
}

/// Data required to insert a new [`Category`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: CategoryName,
    pub display_name: CategoryDisplayName,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewCategory {
    pub fn new(name: CategoryName, display_name: CategoryDisplayName) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            name,
            display_name,
            created_at: now,
            updated_at: now,
        }
    }
}
