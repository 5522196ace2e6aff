pub mod pagination_controls;
pub mod record_form;
pub mod side_panel;
pub mod table;
pub mod ui;

pub use pagination_controls::PaginationControls;
pub use record_form::RecordForm;
pub use side_panel::SidePanel;
