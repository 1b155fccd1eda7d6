use crate::domain::category::{Category, NewCategory};
use crate::domain::types::{CategoryId, EntityKind};
use crate::forms::categories::CreateCategoryPayload;
use crate::repository::{CategoryReader, UnitOfWork};

use super::{ServiceError, ServiceResult};

/// Stage a new category after checking that its name is free.
///
/// The unique index on `categories.name` remains the authoritative check at
/// commit time.
pub fn create_category<R>(
    payload: CreateCategoryPayload,
    repo: &R,
    work: &mut UnitOfWork,
) -> ServiceResult<NewCategory>
where
    R: CategoryReader,
{
    match repo.category_name_exists(&payload.name) {
        Ok(false) => {}
        Ok(true) => {
            log::warn!("Rejected category with duplicate name '{}'", payload.name);
            return Err(ServiceError::NameConflict {
                entity: EntityKind::Category,
                name: payload.name.into_inner(),
            });
        }
        Err(e) => {
            log::error!("Failed to check category name: {e}");
            return Err(e.into());
        }
    }

    let category = payload.into_new_category();
    work.persist_category(category.clone());
    Ok(category)
}

pub fn find_category_by_id<R>(id: CategoryId, repo: &R) -> ServiceResult<Option<Category>>
where
    R: CategoryReader,
{
    repo.get_category_by_id(id).map_err(|e| {
        log::error!("Failed to get category: {e}");
        e.into()
    })
}
