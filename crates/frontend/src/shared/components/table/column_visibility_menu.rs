use crate::shared::data_table::column::ColumnDef;
use crate::shared::data_table::state::TableState;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Dropdown with one checkbox per column. Hiding the last visible column is refused.
#[component]
pub fn ColumnVisibilityMenu(
    columns: StoredValue<Vec<ColumnDef>>,
    state: RwSignal<TableState>,
) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class="column-menu">
            <button
                class="button button--secondary"
                title="Columns"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                {icon("columns")}
                " Columns"
            </button>
            {move || open.get().then(|| view! {
                <div class="column-menu__dropdown">
                    {columns.get_value().into_iter().filter(|c| !c.is_actions()).map(|column| {
                        let key = column.key;
                        view! {
                            <label class="column-menu__item">
                                <input
                                    type="checkbox"
                                    prop:checked=move || state.with(|s| s.is_visible(key))
                                    on:change=move |_| {
                                        state.update(|s| columns.with_value(|cols| s.toggle_visibility(cols, key)));
                                    }
                                />
                                <span>{column.header}</span>
                            </label>
                        }
                    }).collect_view()}
                </div>
            })}
        </div>
    }
}
