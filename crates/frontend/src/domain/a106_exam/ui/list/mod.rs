use crate::shared::data_table::ColumnDef;

/// Columns of the exam list, left to right
pub fn columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::text("title", "Title").with_min_width(180.0),
        ColumnDef::text("course_name", "Course"),
        ColumnDef::text("class_name", "Class"),
        ColumnDef::date("exam_date", "Date"),
        ColumnDef::number("total_marks", "Total marks", 0),
        ColumnDef::number("passing_marks", "Passing marks", 0).hidden(),
        ColumnDef::badge("status", "Status"),
        ColumnDef::actions(),
    ]
}
