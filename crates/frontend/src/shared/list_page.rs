//! Entity list page: owns the record list of one entity and wires the data
//! table, pagination, row actions and the create/edit side panel together.

use crate::domain::{columns_for, form_fields_for};
use crate::shared::api_client::ApiClient;
use crate::shared::components::{RecordForm, SidePanel};
use crate::shared::config::use_config;
use crate::shared::data_table::row_actions::new_record_id;
use crate::shared::data_table::{DataTable, PendingActions, RowActionController};
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{page_id, PageFrame, PAGE_CAT_LIST};
use contracts::domain::common::{EntityKind, RecordId, RowAction};
use contracts::shared::{ListQuery, PaginationMeta, Record};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// What the side panel is editing
#[derive(Debug, Clone, PartialEq)]
pub enum EditTarget {
    Create,
    Edit { id: RecordId, record: Record },
}

impl EditTarget {
    fn title(&self, kind: EntityKind) -> String {
        match self {
            EditTarget::Create => format!("New {}", kind.singular().to_lowercase()),
            EditTarget::Edit { .. } => format!("Edit {}", kind.singular().to_lowercase()),
        }
    }
}

/// Starts a list fetch: bumps the request sequence and raises the loading flag.
///
/// Returns `None` once the page's reactive owner is disposed, so a mutation
/// that resolves after unmount cannot trigger a reload.
fn begin_load(
    request_seq: StoredValue<u64>,
    query: RwSignal<ListQuery>,
    set_is_loading: WriteSignal<bool>,
) -> Option<(u64, ListQuery)> {
    let seq = request_seq.try_update_value(|seq| {
        *seq += 1;
        *seq
    })?;
    let q = query.try_get_untracked()?;
    set_is_loading.try_set(true);
    Some((seq, q))
}

#[component]
pub fn EntityListPage(kind: EntityKind) -> impl IntoView {
    let config = use_config();
    let notifications = use_notifications();
    let role = config.role;

    let api = StoredValue::new(ApiClient::new(config.api_base.clone()));
    let records = RwSignal::new(Vec::<Record>::new());
    let pagination = RwSignal::new(None::<PaginationMeta>);
    let query = RwSignal::new(ListQuery::new(config.default_per_page));
    let (is_loading, set_is_loading) = signal(false);
    let (load_error, set_load_error) = signal(None::<String>);
    let pending = RwSignal::new(PendingActions::default());
    let editing = RwSignal::new(None::<EditTarget>);
    let (form_error, set_form_error) = signal(None::<String>);

    // Only the latest list request may write its result
    let request_seq = StoredValue::new(0u64);

    let controller = RowActionController::new(kind, records, pending, notifications, api);

    let load = move || {
        let Some((seq, q)) = begin_load(request_seq, query, set_is_loading) else {
            log::debug!("{} list page is gone, skipping reload", kind.api_segment());
            return;
        };
        let Some(client) = api.try_get_value() else {
            return;
        };

        spawn_local(async move {
            let result = client.list(kind, q).await;
            if request_seq.try_get_value() != Some(seq) {
                log::debug!("Discarding stale {} page {}", kind.api_segment(), q.page);
                return;
            }
            match result {
                Ok(page) => {
                    log::debug!(
                        "Loaded {} {} (page {}/{})",
                        page.data.len(),
                        kind.api_segment(),
                        page.meta.current_page,
                        page.meta.last_page
                    );
                    records.try_set(page.data);
                    pagination.try_set(Some(page.meta));
                    set_load_error.try_set(None);
                }
                Err(e) => {
                    log::error!("Failed to load {}: {}", kind.api_segment(), e);
                    set_load_error.try_set(Some(e.to_string()));
                }
            }
            set_is_loading.try_set(false);
        });
    };

    load();

    let on_page_change = Callback::new(move |page: u32| {
        query.update(|q| *q = q.with_page(page));
        load();
    });
    let on_page_size_change = Callback::new(move |per_page: u32| {
        query.update(|q| *q = q.with_per_page(per_page));
        load();
    });

    let on_edit = Callback::new(move |id: RecordId| {
        let record = records.with_untracked(|r| r.iter().find(|rec| rec.id().as_ref() == Some(&id)).cloned());
        if let Some(record) = record {
            set_form_error.set(None);
            editing.set(Some(EditTarget::Edit { id, record }));
        }
    });
    let on_delete = Callback::new(move |id: RecordId| controller.delete(id));

    let close_panel = Callback::new(move |_: ()| editing.set(None));

    let on_submit = Callback::new(move |values: Record| {
        set_form_error.set(None);
        match editing.get_untracked() {
            Some(EditTarget::Edit { id, .. }) => controller.update(id, values, move |outcome| {
                if outcome.ok {
                    editing.try_set(None);
                } else {
                    set_form_error.try_set(Some(outcome.message));
                }
            }),
            Some(EditTarget::Create) => controller.create(values, move |outcome| {
                if outcome.ok {
                    editing.try_set(None);
                    load();
                } else {
                    set_form_error.try_set(Some(outcome.message));
                }
            }),
            None => {}
        }
    });

    let submitting = Signal::derive(move || match editing.get() {
        Some(EditTarget::Edit { id, .. }) => pending.with(|p| p.is_pending(&id, RowAction::Edit)),
        Some(EditTarget::Create) => pending.with(|p| p.is_pending(&new_record_id(), RowAction::Create)),
        None => false,
    });

    let can_create = role.allows(kind, RowAction::Create);
    let row_actions = role.row_actions(kind);

    view! {
        <PageFrame page_id=page_id(kind.api_segment(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon(kind.api_segment())}
                    <h1 class="page__title">{kind.title()}</h1>
                </div>
                <div class="page__header-right">
                    <Flex gap=FlexGap::Small>
                        {can_create.then(|| view! {
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| {
                                    set_form_error.set(None);
                                    editing.set(Some(EditTarget::Create));
                                }
                            >
                                {icon("plus")}
                                {format!(" New {}", kind.singular().to_lowercase())}
                            </Button>
                        })}
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=is_loading
                            on_click=move |_| load()
                        >
                            {icon("refresh")}
                            " Refresh"
                        </Button>
                    </Flex>
                </div>
            </div>

            <div class="page__content">
                {move || load_error.get().map(|e| view! {
                    <div class="alert alert--error">{format!("Could not load {}: {}", kind.title().to_lowercase(), e)}</div>
                })}

                <DataTable
                    records=records
                    columns=columns_for(kind)
                    pagination=Signal::derive(move || pagination.get())
                    is_loading=is_loading
                    on_page_change=on_page_change
                    on_page_size_change=on_page_size_change
                    row_actions=row_actions
                    on_edit=on_edit
                    on_delete=on_delete
                    pending=pending
                    page_size_options=config.page_size_options.clone()
                    storage_key=kind.storage_key()
                    empty_message=format!("No {} found", kind.title().to_lowercase())
                />
            </div>

            <SidePanel
                open=Signal::derive(move || editing.with(Option::is_some))
                title=Signal::derive(move || editing.with(|t| t.as_ref().map(|t| t.title(kind)).unwrap_or_default()))
                on_close=close_panel
            >
                {move || editing.get().map(|target| {
                    let (initial, submit_label) = match target {
                        EditTarget::Create => (Record::new(), "Create".to_string()),
                        EditTarget::Edit { record, .. } => (record, "Save".to_string()),
                    };
                    view! {
                        <RecordForm
                            kind=kind
                            fields=form_fields_for(kind)
                            initial=initial
                            submitting=submitting
                            server_error=form_error
                            on_submit=on_submit
                            on_cancel=close_panel
                            submit_label=submit_label
                        />
                    }
                })}
            </SidePanel>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_begin_load_bumps_sequence_and_sets_loading() {
        let owner = Owner::new();
        owner.with(|| {
            let request_seq = StoredValue::new(0u64);
            let query = RwSignal::new(ListQuery::new(25).with_page(3));
            let (is_loading, set_is_loading) = signal(false);

            let (seq, q) = begin_load(request_seq, query, set_is_loading).unwrap();
            assert_eq!(seq, 1);
            assert_eq!(q.page, 3);
            assert!(is_loading.get_untracked());

            let (seq, _) = begin_load(request_seq, query, set_is_loading).unwrap();
            assert_eq!(seq, 2);
        });
    }

    #[test]
    fn test_begin_load_after_unmount_is_discarded() {
        let owner = Owner::new();
        let (request_seq, query, set_is_loading) = owner.with(|| {
            let (_, set_is_loading) = signal(false);
            (
                StoredValue::new(0u64),
                RwSignal::new(ListQuery::new(10)),
                set_is_loading,
            )
        });
        owner.cleanup();

        assert_eq!(begin_load(request_seq, query, set_is_loading), None);
    }
}
