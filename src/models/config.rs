use serde::Deserialize;

use crate::db::DEFAULT_POOL_SIZE;

/// Configuration options of the catalog service.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path or URL of the SQLite database.
    pub database_url: String,
    /// Maximum number of pooled connections.
    pub pool_size: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            database_url: "catalog.db".to_string(),
            pool_size: DEFAULT_POOL_SIZE,
        }
    }
}

#[cfg(feature = "server")]
impl CatalogConfig {
    /// Load settings from `config/catalog.yaml` (optional) overridden by
    /// `CATALOG__*` environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config/catalog")
    }

    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("CATALOG")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
