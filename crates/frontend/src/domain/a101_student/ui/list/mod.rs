use crate::shared::data_table::ColumnDef;

/// Columns of the student list, left to right
pub fn columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::text("admission_no", "Adm. No").with_min_width(90.0),
        ColumnDef::person_name("name", "Name"),
        ColumnDef::email("email", "Email"),
        ColumnDef::text("phone", "Phone").not_sortable(),
        ColumnDef::badge("gender", "Gender"),
        ColumnDef::date("date_of_birth", "Date of birth").hidden(),
        ColumnDef::text("class_name", "Class"),
        ColumnDef::text("address", "Address").not_sortable().hidden(),
        ColumnDef::actions(),
    ]
}
