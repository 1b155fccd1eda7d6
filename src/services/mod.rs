pub use errors::{ServiceError, ServiceResult};

pub mod categories;
pub mod commit;
pub mod errors;
pub mod templates;
