use crate::shared::data_table::ColumnDef;

/// Columns of the school class list, left to right
pub fn columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::text("name", "Class"),
        ColumnDef::text("section", "Section").with_min_width(80.0),
        ColumnDef::text("room", "Room").with_min_width(80.0),
        ColumnDef::number("capacity", "Capacity", 0).with_min_width(80.0),
        ColumnDef::text("class_teacher", "Class teacher"),
        ColumnDef::actions(),
    ]
}
