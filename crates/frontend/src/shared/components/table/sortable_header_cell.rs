//! Sortable table header cell

use crate::shared::data_table::state::{get_sort_class, get_sort_indicator, SortDirection};
use leptos::prelude::*;
use thaw::*;

/// Header cell that shows the sort indicator (▲▼) and reports clicks.
///
/// Non-sortable columns render a plain label.
#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Column key passed to `on_sort`
    #[prop(into)]
    sort_key: String,

    /// Direction if this column is the active sort column
    #[prop(into)]
    direction: Signal<Option<SortDirection>>,

    on_sort: Callback<String>,

    #[prop(optional, default = true)]
    sortable: bool,

    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// left / center / right
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let handle_click = move |_| {
        if !sortable {
            return;
        }
        on_sort.run(sort_key.clone());
    };

    let header_style = format!(
        "cursor: {}; justify-content: {}; padding-right: 12px; max-width: calc(100% - 12px);",
        if sortable { "pointer" } else { "default" },
        match align {
            "right" => "flex-end",
            "center" => "center",
            _ => "flex-start",
        }
    );

    view! {
        <TableHeaderCell resizable=true min_width=min_width class="resizable">
            <div class="table__sortable-header" style=header_style on:click=handle_click>
                {label}
                {sortable.then(|| view! {
                    <span class=move || get_sort_class(direction.get())>
                        {move || get_sort_indicator(direction.get())}
                    </span>
                })}
            </div>
        </TableHeaderCell>
    }
}
