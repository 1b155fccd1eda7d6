//! Catalog entities and the value objects they are built from.

use chrono::{NaiveDateTime, Utc};

pub mod category;
pub mod template;
pub mod types;

/// Timestamp for a field mutation that never precedes `created_at`.
pub(crate) fn refreshed_timestamp(created_at: NaiveDateTime) -> NaiveDateTime {
    Utc::now().naive_utc().max(created_at)
}
