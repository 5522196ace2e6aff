use crate::shared::data_table::ColumnDef;

/// Columns of the teacher list, left to right
pub fn columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::person_name("name", "Name"),
        ColumnDef::email("email", "Email"),
        ColumnDef::text("phone", "Phone").not_sortable(),
        ColumnDef::text("subject", "Subject"),
        ColumnDef::text("qualification", "Qualification").hidden(),
        ColumnDef::date("hire_date", "Hired"),
        ColumnDef::boolean("is_active", "Active").not_sortable(),
        ColumnDef::actions(),
    ]
}
