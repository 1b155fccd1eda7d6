use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::types::EntityKind;
use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
use crate::models::template::{NewTemplate as DbNewTemplate, Template as DbTemplate};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::unit_of_work::{
    CommitReceipt, StagedChange, UnitOfWork, UnitOfWorkCommitter,
};
use crate::repository::DieselRepository;

/// Tag a unique index rejection with the name that caused it.
fn tag_conflict(err: diesel::result::Error, entity: EntityKind, name: &str) -> RepositoryError {
    if RepositoryError::is_unique_violation(&err) {
        RepositoryError::UniqueViolation {
            entity,
            name: name.to_string(),
        }
    } else {
        RepositoryError::Database(err)
    }
}

fn apply(
    conn: &mut SqliteConnection,
    change: StagedChange,
    receipt: &mut CommitReceipt,
) -> RepositoryResult<()> {
    use crate::schema::{categories, templates};

    match change {
        StagedChange::InsertCategory(category) => {
            let name = category.name.to_string();
            let db_category: DbNewCategory = category.into();
            let row = diesel::insert_into(categories::table)
                .values(db_category)
                .get_result::<DbCategory>(conn)
                .map_err(|e| tag_conflict(e, EntityKind::Category, &name))?;
            receipt.categories.push(row.try_into()?);
        }
        StagedChange::InsertTemplate(template) => {
            let name = template.name.to_string();
            let db_template: DbNewTemplate = template.into();
            let row = diesel::insert_into(templates::table)
                .values(db_template)
                .get_result::<DbTemplate>(conn)
                .map_err(|e| tag_conflict(e, EntityKind::Template, &name))?;
            receipt.templates.push(row.try_into()?);
        }
        StagedChange::DeleteTemplate(id) => {
            let affected = diesel::delete(templates::table.filter(templates::id.eq(id.get())))
                .execute(conn)?;
            if affected == 0 {
                return Err(RepositoryError::NotFound);
            }
            receipt.removed_templates += affected;
        }
    }

    Ok(())
}

impl UnitOfWorkCommitter for DieselRepository {
    fn commit(&self, work: UnitOfWork) -> RepositoryResult<CommitReceipt> {
        if work.is_empty() {
            return Ok(CommitReceipt::default());
        }

        let mut conn = self.conn()?;
        let staged = work.len();

        let receipt = conn.immediate_transaction::<_, RepositoryError, _>(|conn| {
            let mut receipt = CommitReceipt::default();
            for change in work.into_changes() {
                apply(conn, change, &mut receipt)?;
            }
            Ok(receipt)
        })?;

        log::debug!(
            "Committed {staged} staged changes: {} categories, {} templates inserted, {} templates removed",
            receipt.categories.len(),
            receipt.templates.len(),
            receipt.removed_templates
        );

        Ok(receipt)
    }
}
