use crate::domain::template::{NewTemplate, Template};
use crate::domain::types::{CategoryId, EntityKind, TemplateId};
use crate::forms::templates::{CreateTemplatePayload, ListTemplatesQuery};
use crate::pagination::{Paginated, Pagination};
use crate::repository::{CategoryReader, TemplateListQuery, TemplateReader, UnitOfWork};

use super::{ServiceError, ServiceResult};

/// Build a template from `payload` and stage it for insertion.
///
/// Name uniqueness is checked before the category is resolved, so a duplicate
/// name on a missing category reports the conflict. Nothing is staged when
/// either check fails. The returned value has no identifier until `work` is
/// committed.
pub fn create_template<R>(
    payload: CreateTemplatePayload,
    repo: &R,
    work: &mut UnitOfWork,
) -> ServiceResult<NewTemplate>
where
    R: TemplateReader + CategoryReader,
{
    match repo.template_name_exists(&payload.name, None) {
        Ok(false) => {}
        Ok(true) => {
            log::warn!("Rejected template with duplicate name '{}'", payload.name);
            return Err(ServiceError::NameConflict {
                entity: EntityKind::Template,
                name: payload.name.into_inner(),
            });
        }
        Err(e) => {
            log::error!("Failed to check template name: {e}");
            return Err(e.into());
        }
    }

    let category = match repo.get_category_by_id(payload.category_id) {
        Ok(Some(category)) => category,
        Ok(None) => return Err(ServiceError::CategoryNotFound(payload.category_id)),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(e.into());
        }
    };

    let template = NewTemplate::new(payload.name, payload.display_name, category)
        .with_preview(payload.preview)
        .with_template_data(payload.template_data);

    work.persist_template(template.clone());
    Ok(template)
}

pub fn find_template_by_id<R>(id: TemplateId, repo: &R) -> ServiceResult<Option<Template>>
where
    R: TemplateReader,
{
    repo.get_template_by_id(id).map_err(|e| {
        log::error!("Failed to get template: {e}");
        e.into()
    })
}

/// All templates, most recently created first.
pub fn find_all_templates<R>(pagination: Pagination, repo: &R) -> ServiceResult<Paginated<Template>>
where
    R: TemplateReader,
{
    let query = TemplateListQuery::new().paginate(pagination.page, pagination.per_page);
    repo.list_templates(query).map_err(|e| {
        log::error!("Failed to list templates: {e}");
        e.into()
    })
}

/// Templates of one category. An unknown category yields an empty page, not
/// an error.
pub fn find_templates_by_category<R>(
    category_id: CategoryId,
    pagination: Pagination,
    repo: &R,
) -> ServiceResult<Paginated<Template>>
where
    R: TemplateReader + CategoryReader,
{
    let category = match repo.get_category_by_id(category_id) {
        Ok(Some(category)) => category,
        Ok(None) => return Ok(Paginated::empty(pagination.page, pagination.per_page)),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(e.into());
        }
    };

    let query = TemplateListQuery::new()
        .category(category.id)
        .paginate(pagination.page, pagination.per_page);
    repo.list_templates(query).map_err(|e| {
        log::error!("Failed to list templates for category {}: {e}", category.id);
        e.into()
    })
}

/// Stage removal of `template`. The caller commits.
pub fn delete_template(template: &Template, work: &mut UnitOfWork) {
    work.remove_template(template);
}

/// The "list templates" operation: clamps the raw query and lists either all
/// templates or those of the requested category.
pub fn list_templates<R>(query: &ListTemplatesQuery, repo: &R) -> ServiceResult<Paginated<Template>>
where
    R: TemplateReader + CategoryReader,
{
    let pagination = query.pagination();
    match query.category_id {
        None => find_all_templates(pagination, repo),
        Some(raw_id) => match CategoryId::new(raw_id) {
            Ok(category_id) => find_templates_by_category(category_id, pagination, repo),
            Err(_) => Ok(Paginated::empty(pagination.page, pagination.per_page)),
        },
    }
}

/// The "delete template" operation: resolves `template_id` and stages its
/// removal.
pub fn delete_template_by_id<R>(
    template_id: i32,
    repo: &R,
    work: &mut UnitOfWork,
) -> ServiceResult<()>
where
    R: TemplateReader,
{
    let template_id = TemplateId::new(template_id).map_err(|_| ServiceError::NotFound)?;

    let template = match find_template_by_id(template_id, repo)? {
        Some(template) => template,
        None => return Err(ServiceError::NotFound),
    };

    delete_template(&template, work);
    Ok(())
}
