use super::cells::render_cell;
use super::column::{validate_columns, ColumnDef};
use super::reconcile::PendingActions;
use super::state::{TablePhase, TableState};
use crate::shared::components::table::{ColumnVisibilityMenu, SortableHeaderCell};
use crate::shared::components::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::table_utils::{restore_column_visibility, save_column_visibility};
use contracts::domain::common::{RecordId, RowAction};
use contracts::shared::{PaginationMeta, Record};
use leptos::prelude::*;
use thaw::*;

/// Generic entity table.
///
/// Renders the records the parent holds against a column set. Sorting,
/// column filters and search work on those records only; the table never
/// fetches and never writes to `records`. Page navigation is reported
/// through the callbacks and the parent refetches.
///
/// Row actions are reported by id. Edit/delete triggers are disabled while
/// an action on their row is pending.
#[component]
pub fn DataTable(
    #[prop(into)]
    records: Signal<Vec<Record>>,
    columns: Vec<ColumnDef>,
    #[prop(optional, into)]
    pagination: MaybeProp<PaginationMeta>,
    #[prop(into)]
    is_loading: Signal<bool>,
    on_page_change: Callback<u32>,
    on_page_size_change: Callback<u32>,
    /// Row actions to offer; empty hides the actions column
    #[prop(optional)]
    row_actions: Vec<RowAction>,
    #[prop(optional)]
    on_edit: Option<Callback<RecordId>>,
    #[prop(optional)]
    on_delete: Option<Callback<RecordId>>,
    /// In-flight row actions, owned by the caller
    #[prop(optional)]
    pending: Option<RwSignal<PendingActions>>,
    #[prop(optional)]
    page_size_options: Option<Vec<u32>>,
    /// localStorage key for column visibility; `None` keeps it in memory
    #[prop(optional, into)]
    storage_key: Option<String>,
    #[prop(optional, into)]
    empty_message: Option<String>,
) -> impl IntoView {
    if let Err(e) = validate_columns(&columns) {
        log::error!("Invalid column set: {}", e);
        debug_assert!(false, "invalid column set: {}", e);
    }

    let show_edit = row_actions.contains(&RowAction::Edit) && on_edit.is_some();
    let show_delete = row_actions.contains(&RowAction::Delete) && on_delete.is_some();
    let columns: Vec<ColumnDef> = columns
        .into_iter()
        .filter(|c| !c.is_actions() || show_edit || show_delete)
        .collect();

    let state = RwSignal::new(TableState::for_columns(&columns));
    if let Some(key) = storage_key.as_deref() {
        if let Some(saved) = restore_column_visibility(key) {
            state.update(|s| s.restore_visibility(&columns, &saved));
        }
    }
    let columns = StoredValue::new(columns);

    if let Some(key) = storage_key {
        Effect::new(move |_| {
            let visibility = state.with(|s| s.visibility.clone());
            save_column_visibility(&key, &visibility);
        });
    }

    let rows = Memo::new(move |_| {
        state.with(|s| columns.with_value(|cols| records.with(|r| s.apply(cols, r))))
    });
    let visible_columns =
        Memo::new(move |_| state.with(|s| columns.with_value(|cols| s.visible_columns(cols))));
    let phase = Memo::new(move |_| state.with(|s| s.phase(is_loading.get(), records.with(Vec::len))));

    let on_sort = Callback::new(move |key: String| {
        state.update(|s| columns.with_value(|cols| s.toggle_sort(cols, &key)));
    });
    let search = Signal::derive(move || state.with(|s| s.search.clone()));
    let on_search = Callback::new(move |value: String| state.update(|s| s.set_search(&value)));
    let empty_message = empty_message.unwrap_or_else(|| "No records found".to_string());

    let actions_cell = move |id: Option<RecordId>| {
        let Some(id) = id else {
            return view! { <span class="table__muted">"-"</span> }.into_any();
        };
        let busy_id = id.clone();
        let busy = move || pending.is_some_and(|p| p.with(|p| p.is_row_busy(&busy_id)));
        let edit_id = id.clone();
        let delete_id = id;

        view! {
            <div class="table__actions">
                {show_edit.then(|| view! {
                    <button
                        class="button button--icon"
                        title="Edit"
                        disabled=busy.clone()
                        on:click=move |_| {
                            if let Some(cb) = on_edit {
                                cb.run(edit_id.clone());
                            }
                        }
                    >
                        {icon("edit")}
                    </button>
                })}
                {show_delete.then(|| view! {
                    <button
                        class="button button--icon button--danger"
                        title="Delete"
                        disabled=busy
                        on:click=move |_| {
                            if let Some(cb) = on_delete {
                                cb.run(delete_id.clone());
                            }
                        }
                    >
                        {icon("delete")}
                    </button>
                })}
            </div>
        }
        .into_any()
    };

    let filter_row = move || {
        let has_filterable = visible_columns.with(|cols| cols.iter().any(ColumnDef::can_filter));
        has_filterable.then(|| {
            view! {
                <TableRow>
                    {visible_columns.get().into_iter().map(|column| {
                        let key = column.key;
                        let cell = if column.can_filter() {
                            view! {
                                <input
                                    class="table__filter"
                                    type="text"
                                    placeholder="Filter..."
                                    prop:value=move || state.with(|s| s.filters.get(key).cloned().unwrap_or_default())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        state.update(|s| s.set_filter(key, &value));
                                    }
                                />
                            }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        };
                        view! { <TableCell>{cell}</TableCell> }
                    }).collect_view()}
                </TableRow>
            }
        })
    };

    let table = move || {
        view! {
            <Table>
                <TableHeader>
                    <TableRow>
                        {visible_columns.get().into_iter().map(|column| {
                            let key = column.key;
                            view! {
                                <SortableHeaderCell
                                    label=column.header
                                    sort_key=key
                                    direction=Signal::derive(move || state.with(|s| s.sort_direction_of(key)))
                                    on_sort=on_sort
                                    sortable=column.can_sort()
                                    min_width=column.min_width
                                    align=column.align.as_str()
                                />
                            }
                        }).collect_view()}
                    </TableRow>
                    {filter_row}
                </TableHeader>
                <TableBody>
                    {move || {
                        let search = state.with(|s| if s.is_search_active() { s.search.trim().to_string() } else { String::new() });
                        let columns = visible_columns.get();
                        rows.get().into_iter().map(|record| {
                            let cells = columns.iter().map(|column| {
                                let content = if column.is_actions() {
                                    actions_cell(record.id())
                                } else {
                                    render_cell(column, &record, &search)
                                };
                                view! {
                                    <TableCell class={format!("table__cell table__cell--{}", column.align.as_str())}>
                                        <TableCellLayout>{content}</TableCellLayout>
                                    </TableCell>
                                }
                            }).collect_view();
                            view! { <TableRow>{cells}</TableRow> }
                        }).collect_view()
                    }}
                </TableBody>
            </Table>
        }
    };

    view! {
        <div class="data-table">
            <div class="data-table__toolbar">
                <SearchInput value=search on_change=on_search />
                {move || state.with(|s| s.has_active_filters()).then(|| view! {
                    <button
                        class="button button--secondary"
                        title="Clear filters"
                        on:click=move |_| state.update(|s| s.clear_filters())
                    >
                        {icon("filter-x")}
                        " Clear"
                    </button>
                })}
                <ColumnVisibilityMenu columns=columns state=state />
            </div>

            {move || match phase.get() {
                TablePhase::Loading => view! {
                    <div class="data-table__loading">
                        <Spinner />
                        <span>"Loading..."</span>
                    </div>
                }.into_any(),
                TablePhase::Empty => view! {
                    <div class="data-table__empty">{empty_message.clone()}</div>
                }.into_any(),
                _ => view! {
                    <div class="table-wrapper">
                        {table}
                        {move || rows.with(Vec::is_empty).then(|| view! {
                            <div class="data-table__empty">"No rows match the current filters"</div>
                        })}
                    </div>
                }.into_any(),
            }}

            {move || pagination.get().map(|meta| view! {
                <PaginationControls
                    meta=Signal::stored(meta)
                    on_page_change=on_page_change
                    on_page_size_change=on_page_size_change
                    page_size_options=page_size_options.clone().unwrap_or_else(|| vec![10, 25, 50, 100])
                />
            })}
        </div>
    }
}
