use crate::shared::data_table::ColumnDef;

/// Columns of the course list, left to right
pub fn columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::text("code", "Code").with_min_width(90.0),
        ColumnDef::text("name", "Course"),
        ColumnDef::number("credits", "Credits", 1).with_min_width(80.0),
        ColumnDef::text("teacher_name", "Teacher"),
        ColumnDef::text("description", "Description").not_sortable().hidden(),
        ColumnDef::actions(),
    ]
}
