pub mod api_outcome;
pub mod pagination;
pub mod record;
pub mod validation;

pub use api_outcome::ApiOutcome;
pub use pagination::{ListPayload, ListQuery, PageNav, PaginatedResponse, PaginationMeta};
pub use record::Record;
pub use validation::{FieldError, ValidationErrors, ValidationRules};
