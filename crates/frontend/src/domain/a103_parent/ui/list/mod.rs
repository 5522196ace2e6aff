use crate::shared::data_table::ColumnDef;

/// Columns of the parent list, left to right
pub fn columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::person_name("name", "Name"),
        ColumnDef::text("phone", "Phone").not_sortable(),
        ColumnDef::email("email", "Email"),
        ColumnDef::text("occupation", "Occupation"),
        ColumnDef::text("address", "Address").not_sortable().hidden(),
        ColumnDef::actions(),
    ]
}
