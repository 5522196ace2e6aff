pub mod a101_student;
pub mod a102_teacher;
pub mod a103_parent;
pub mod a104_school_class;
pub mod a105_course;
pub mod a106_exam;

use crate::shared::data_table::ColumnDef;
use crate::shared::forms::FormField;
use contracts::domain::common::EntityKind;

/// Column set of an entity list
pub fn columns_for(kind: EntityKind) -> Vec<ColumnDef> {
    match kind {
        EntityKind::Student => a101_student::ui::list::columns(),
        EntityKind::Teacher => a102_teacher::ui::list::columns(),
        EntityKind::Parent => a103_parent::ui::list::columns(),
        EntityKind::SchoolClass => a104_school_class::ui::list::columns(),
        EntityKind::Course => a105_course::ui::list::columns(),
        EntityKind::Exam => a106_exam::ui::list::columns(),
    }
}

/// Create/edit form fields of an entity
pub fn form_fields_for(kind: EntityKind) -> Vec<FormField> {
    match kind {
        EntityKind::Student => a101_student::ui::details::form_fields(),
        EntityKind::Teacher => a102_teacher::ui::details::form_fields(),
        EntityKind::Parent => a103_parent::ui::details::form_fields(),
        EntityKind::SchoolClass => a104_school_class::ui::details::form_fields(),
        EntityKind::Course => a105_course::ui::details::form_fields(),
        EntityKind::Exam => a106_exam::ui::details::form_fields(),
    }
}
