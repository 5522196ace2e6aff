//! Common types and traits for all school entities

pub mod aggregate_id;
pub mod entity_kind;
pub mod role;

// Re-exports
pub use aggregate_id::RecordId;
pub use entity_kind::EntityKind;
pub use role::{Role, RowAction};

use crate::shared::{Record, ValidationErrors};
use serde::{de::DeserializeOwned, Serialize};

/// Typed view over one entity's record shape
pub trait SchoolEntity: Serialize + DeserializeOwned {
    /// Field-level validation of a create/update form
    fn validate(&self) -> Result<(), ValidationErrors>;

    /// Parse a form record into the typed entity and validate it.
    ///
    /// A record whose values cannot be decoded into the entity at all yields a
    /// single form-level error instead of a panic.
    fn validate_record(record: &Record) -> Result<(), ValidationErrors> {
        let entity: Self = record
            .to_entity()
            .map_err(|e| ValidationErrors::form(format!("Invalid form data: {}", e)))?;
        entity.validate()
    }
}
