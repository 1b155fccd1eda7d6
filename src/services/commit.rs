use crate::repository::{CommitReceipt, UnitOfWork, UnitOfWorkCommitter};

use super::ServiceResult;

/// Make every change staged in `work` durable.
///
/// A unique index rejection surfaces as [`super::ServiceError::NameConflict`],
/// the same error the early existence checks raise. Nothing is written when
/// the commit fails.
pub fn commit<R>(work: UnitOfWork, repo: &R) -> ServiceResult<CommitReceipt>
where
    R: UnitOfWorkCommitter,
{
    repo.commit(work).map_err(|e| {
        log::error!("Failed to commit unit of work: {e}");
        e.into()
    })
}
