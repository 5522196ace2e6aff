use crate::shared::forms::{FieldKind, FormField};

/// Fields of the school class create/edit form
pub fn form_fields() -> Vec<FormField> {
    vec![
        FormField::text("name", "Name").required(),
        FormField::text("section", "Section"),
        FormField::text("room", "Room"),
        FormField::new("capacity", "Capacity", FieldKind::Number),
        FormField::text("class_teacher", "Class teacher"),
    ]
}
