use std::process::ExitCode;

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use log::{error, info};

use template_catalog::db::establish_sized_connection_pool;
use template_catalog::models::config::CatalogConfig;
use template_catalog::pagination::Pagination;
use template_catalog::repository::DieselRepository;
use template_catalog::services::templates::find_all_templates;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match CatalogConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let pool = match establish_sized_connection_pool(&config.database_url, config.pool_size) {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to open database '{}': {e}", config.database_url);
            return ExitCode::FAILURE;
        }
    };

    let applied = match pool.get() {
        Ok(mut conn) => match conn.run_pending_migrations(MIGRATIONS) {
            Ok(applied) => applied.len(),
            Err(e) => {
                error!("Failed to run migrations: {e}");
                return ExitCode::FAILURE;
            }
        },
        Err(e) => {
            error!("Failed to get database connection: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!("Applied {applied} pending migrations to '{}'", config.database_url);

    let repo = DieselRepository::new(pool);
    match find_all_templates(Pagination::default(), &repo) {
        Ok(page) => {
            info!(
                "Catalog ready: {} templates across {} pages",
                page.total,
                page.total_pages()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Catalog check failed: {e}");
            ExitCode::FAILURE
        }
    }
}
