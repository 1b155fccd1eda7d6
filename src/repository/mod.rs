use crate::db::{DbConnection, DbPool};
use crate::domain::category::Category;
use crate::domain::template::Template;
use crate::domain::types::{CategoryId, CategoryName, TemplateId, TemplateName};
use crate::pagination::{Paginated, Pagination};

pub mod category;
mod commit;
pub mod errors;
pub mod template;
pub mod unit_of_work;

pub use errors::{RepositoryError, RepositoryResult};
pub use unit_of_work::{CommitReceipt, StagedChange, UnitOfWork, UnitOfWorkCommitter};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be shared between request handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateListQuery {
    /// Restrict to templates referencing this category.
    pub category_id: Option<CategoryId>,
    /// Requested page.
    pub pagination: Pagination,
}

impl TemplateListQuery {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Pagination { page, per_page };
        self
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// Retrieve a category by its identifier. Absence is `Ok(None)`.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
    /// Whether a category with exactly this name exists.
    fn category_name_exists(&self, name: &CategoryName) -> RepositoryResult<bool>;
}

/// Read-only operations for template entities.
pub trait TemplateReader {
    /// Retrieve a template by its identifier. Absence is `Ok(None)`.
    fn get_template_by_id(&self, id: TemplateId) -> RepositoryResult<Option<Template>>;
    /// List one page of templates, most recently created first.
    ///
    /// When `query.category_id` is set only templates referencing that
    /// category are counted and returned.
    fn list_templates(&self, query: TemplateListQuery) -> RepositoryResult<Paginated<Template>>;
    /// Whether a template other than `exclude_id` has exactly this name.
    fn template_name_exists(
        &self,
        name: &TemplateName,
        exclude_id: Option<TemplateId>,
    ) -> RepositoryResult<bool>;
}
