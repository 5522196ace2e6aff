use crate::shared::forms::{FieldKind, FormField};

/// Fields of the course create/edit form
pub fn form_fields() -> Vec<FormField> {
    vec![
        FormField::text("code", "Code").required(),
        FormField::text("name", "Name").required(),
        FormField::new("credits", "Credits", FieldKind::Number),
        FormField::text("teacher_name", "Teacher"),
        FormField::new("description", "Description", FieldKind::TextArea),
    ]
}
