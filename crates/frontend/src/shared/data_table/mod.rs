//! Generic data table for entity lists: column definitions, local table
//! state, row action handling and the table component.

pub mod cells;
pub mod column;
pub mod reconcile;
pub mod row_actions;
pub mod state;
pub mod view;

pub use column::{CellKind, ColumnDef};
pub use reconcile::PendingActions;
pub use row_actions::RowActionController;
pub use state::{SortDirection, TablePhase, TableState};
pub use view::DataTable;
