use contracts::domain::a101_student::aggregate::GENDERS;
use crate::shared::forms::{FieldKind, FormField};

/// Fields of the student create/edit form
pub fn form_fields() -> Vec<FormField> {
    vec![
        FormField::text("admission_no", "Admission number"),
        FormField::text("first_name", "First name").required(),
        FormField::text("last_name", "Last name").required(),
        FormField::new("email", "Email", FieldKind::Email).required(),
        FormField::new("phone", "Phone", FieldKind::Phone),
        FormField::new("gender", "Gender", FieldKind::Select(&GENDERS)),
        FormField::new("date_of_birth", "Date of birth", FieldKind::Date),
        FormField::text("class_name", "Class"),
        FormField::new("address", "Address", FieldKind::TextArea),
    ]
}
