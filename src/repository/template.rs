use diesel::prelude::*;

use crate::domain::template::Template;
use crate::domain::types::{TemplateId, TemplateName};
use crate::models::template::Template as DbTemplate;
use crate::pagination::Paginated;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, TemplateListQuery, TemplateReader};

impl TemplateReader for DieselRepository {
    fn get_template_by_id(&self, id: TemplateId) -> RepositoryResult<Option<Template>> {
        use crate::schema::templates;

        let mut conn = self.conn()?;

        let template = templates::table
            .filter(templates::id.eq(id.get()))
            .first::<DbTemplate>(&mut conn)
            .optional()?;

        let template = template.map(TryInto::try_into).transpose()?;
        Ok(template)
    }

    fn list_templates(&self, query: TemplateListQuery) -> RepositoryResult<Paginated<Template>> {
        use crate::schema::templates;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = templates::table.into_boxed::<diesel::sqlite::Sqlite>();
            if let Some(category_id) = query.category_id {
                items = items.filter(templates::category_id.eq(Some(category_id.get())));
            }
            items
        };

        let pagination = query.pagination;
        let offset = pagination.offset();
        let limit = i64::try_from(pagination.per_page).unwrap_or(i64::MAX);

        let (total, rows) = conn.transaction::<_, RepositoryError, _>(|conn| {
            let total = query_builder().count().get_result::<i64>(conn)?;
            // Past the last row; also keeps the offset within i64.
            let offset = match i64::try_from(offset) {
                Ok(offset) if offset < total => offset,
                _ => return Ok((total, Vec::new())),
            };
            let rows = query_builder()
                .order((templates::created_at.desc(), templates::id.desc()))
                .offset(offset)
                .limit(limit)
                .load::<DbTemplate>(conn)?;
            Ok((total, rows))
        })?;
        let total = usize::try_from(total).unwrap_or_default();

        let items = rows
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Template>, _>>()?;

        Ok(Paginated::new(
            items,
            total,
            pagination.page,
            pagination.per_page,
        ))
    }

    fn template_name_exists(
        &self,
        name: &TemplateName,
        exclude_id: Option<TemplateId>,
    ) -> RepositoryResult<bool> {
        use crate::schema::templates;

        let mut conn = self.conn()?;

        let mut matching = templates::table
            .filter(templates::name.eq(name.as_str()))
            .into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(exclude_id) = exclude_id {
            matching = matching.filter(templates::id.ne(exclude_id.get()));
        }

        let count = matching.count().get_result::<i64>(&mut conn)?;
        Ok(count > 0)
    }
}
