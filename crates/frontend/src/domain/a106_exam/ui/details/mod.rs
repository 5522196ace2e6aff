use contracts::domain::a106_exam::aggregate::EXAM_STATUSES;
use crate::shared::forms::{FieldKind, FormField};

/// Fields of the exam create/edit form
pub fn form_fields() -> Vec<FormField> {
    vec![
        FormField::text("title", "Title").required(),
        FormField::text("course_name", "Course"),
        FormField::text("class_name", "Class"),
        FormField::new("exam_date", "Exam date", FieldKind::Date).required(),
        FormField::new("total_marks", "Total marks", FieldKind::Number).required(),
        FormField::new("passing_marks", "Passing marks", FieldKind::Number),
        FormField::new("status", "Status", FieldKind::Select(&EXAM_STATUSES)),
    ]
}
