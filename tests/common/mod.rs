//! Helpers for integration tests.

use chrono::{Duration, Utc};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::NamedTempFile;
use template_catalog::db::{DbPool, establish_connection_pool};
use template_catalog::domain::category::{Category, NewCategory};
use template_catalog::domain::template::NewTemplate;
use template_catalog::domain::types::{
    CategoryDisplayName, CategoryName, TemplateDisplayName, TemplateName,
};
use template_catalog::repository::{DieselRepository, UnitOfWork, UnitOfWorkCommitter};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    #[allow(dead_code)]
    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}

/// Commit a category and return it with its assigned id.
#[allow(dead_code)]
pub fn insert_category(repo: &DieselRepository, name: &str) -> Category {
    let mut work = UnitOfWork::new();
    work.persist_category(NewCategory::new(
        CategoryName::new(name).expect("valid category name"),
        CategoryDisplayName::new(name).expect("valid category display name"),
    ));
    repo.commit(work)
        .expect("should commit category")
        .categories
        .remove(0)
}

/// Commit `count` templates in `category`, each created one second after
/// the previous one.
#[allow(dead_code)]
pub fn insert_templates(repo: &DieselRepository, category: &Category, prefix: &str, count: usize) {
    let start = Utc::now().naive_utc();
    let mut work = UnitOfWork::new();
    for i in 0..count {
        let name = format!("{prefix} {i}");
        let mut template = NewTemplate::new(
            TemplateName::new(name.as_str()).expect("valid template name"),
            TemplateDisplayName::new(name.as_str()).expect("valid display name"),
            category.clone(),
        );
        template.created_at = start + Duration::seconds(i as i64);
        template.updated_at = template.created_at;
        work.persist_template(template);
    }
    repo.commit(work).expect("should commit templates");
}
