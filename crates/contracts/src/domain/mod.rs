pub mod a101_student;
pub mod a102_teacher;
pub mod a103_parent;
pub mod a104_school_class;
pub mod a105_course;
pub mod a106_exam;
pub mod common;

use crate::shared::{Record, ValidationErrors};
use common::{EntityKind, SchoolEntity};

/// Validate a create/update form record against the entity's typed rules
pub fn validate_record(kind: EntityKind, record: &Record) -> Result<(), ValidationErrors> {
    match kind {
        EntityKind::Student => a101_student::aggregate::Student::validate_record(record),
        EntityKind::Teacher => a102_teacher::aggregate::Teacher::validate_record(record),
        EntityKind::Parent => a103_parent::aggregate::Parent::validate_record(record),
        EntityKind::SchoolClass => {
            a104_school_class::aggregate::SchoolClass::validate_record(record)
        }
        EntityKind::Course => a105_course::aggregate::Course::validate_record(record),
        EntityKind::Exam => a106_exam::aggregate::Exam::validate_record(record),
    }
}
