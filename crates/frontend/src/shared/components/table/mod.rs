pub mod column_visibility_menu;
pub mod sortable_header_cell;

pub use column_visibility_menu::ColumnVisibilityMenu;
pub use sortable_header_cell::SortableHeaderCell;
