use crate::shared::forms::{FieldKind, FormField};

/// Fields of the parent create/edit form
pub fn form_fields() -> Vec<FormField> {
    vec![
        FormField::text("first_name", "First name").required(),
        FormField::text("last_name", "Last name").required(),
        FormField::new("phone", "Phone", FieldKind::Phone).required(),
        FormField::new("email", "Email", FieldKind::Email),
        FormField::text("occupation", "Occupation"),
        FormField::new("address", "Address", FieldKind::TextArea),
    ]
}
