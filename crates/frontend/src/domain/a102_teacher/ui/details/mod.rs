use crate::shared::forms::{FieldKind, FormField};

/// Fields of the teacher create/edit form
pub fn form_fields() -> Vec<FormField> {
    vec![
        FormField::text("first_name", "First name").required(),
        FormField::text("last_name", "Last name").required(),
        FormField::new("email", "Email", FieldKind::Email).required(),
        FormField::new("phone", "Phone", FieldKind::Phone),
        FormField::text("subject", "Subject"),
        FormField::text("qualification", "Qualification"),
        FormField::new("hire_date", "Hire date", FieldKind::Date),
    ]
}
