//! Staged mutations committed together at an explicit boundary.

use crate::domain::category::{Category, NewCategory};
use crate::domain::template::{NewTemplate, Template};
use crate::domain::types::TemplateId;
use crate::repository::errors::RepositoryResult;

/// A single mutation registered in a [`UnitOfWork`].
#[derive(Debug, Clone, PartialEq)]
pub enum StagedChange {
    InsertCategory(NewCategory),
    InsertTemplate(NewTemplate),
    DeleteTemplate(TemplateId),
}

/// Mutations accumulated by one logical request.
///
/// Nothing is durable until the work is handed to a
/// [`UnitOfWorkCommitter`]. Changes are applied in the order they were
/// staged.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UnitOfWork {
    changes: Vec<StagedChange>,
}

impl UnitOfWork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn persist_category(&mut self, category: NewCategory) {
        log::debug!("Staging category '{}' for insert", category.name);
        self.changes.push(StagedChange::InsertCategory(category));
    }

    pub fn persist_template(&mut self, template: NewTemplate) {
        log::debug!("Staging template '{}' for insert", template.name);
        self.changes.push(StagedChange::InsertTemplate(template));
    }

    /// Stage removal of an existing template. The entity itself is left
    /// untouched.
    pub fn remove_template(&mut self, template: &Template) {
        log::debug!("Staging template {} for removal", template.id);
        self.changes.push(StagedChange::DeleteTemplate(template.id));
    }

    pub fn changes(&self) -> &[StagedChange] {
        &self.changes
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn into_changes(self) -> Vec<StagedChange> {
        self.changes
    }
}

/// Outcome of a successful commit.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CommitReceipt {
    /// Inserted categories with their assigned identifiers.
    pub categories: Vec<Category>,
    /// Inserted templates with their assigned identifiers.
    pub templates: Vec<Template>,
    /// Number of template rows removed.
    pub removed_templates: usize,
}

/// Commit boundary of a store.
pub trait UnitOfWorkCommitter {
    /// Apply every staged change atomically. On error nothing is written.
    fn commit(&self, work: UnitOfWork) -> RepositoryResult<CommitReceipt>;
}
