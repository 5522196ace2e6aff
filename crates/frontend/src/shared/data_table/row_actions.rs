//! Row action handlers: delete, update and create against the API, followed by
//! reconciliation of the parent's record list.
//!
//! Every result lands through `try_update`/`try_set`, so a call that resolves
//! after its page was unmounted changes nothing.

use super::reconcile::{contains_id, merge_by_id, remove_by_id, PendingActions};
use crate::shared::api_client::ApiClient;
use crate::shared::notifications::NotificationService;
use contracts::domain::common::{EntityKind, RecordId, RowAction};
use contracts::shared::{ApiOutcome, Record};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Pending-guard key of a create call (no id exists yet)
pub const NEW_RECORD_KEY: &str = "__new__";

pub fn new_record_id() -> RecordId {
    RecordId::new(NEW_RECORD_KEY)
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[derive(Clone, Copy)]
pub struct RowActionController {
    kind: EntityKind,
    records: RwSignal<Vec<Record>>,
    pending: RwSignal<PendingActions>,
    notifications: NotificationService,
    api: StoredValue<ApiClient>,
}

impl RowActionController {
    pub fn new(
        kind: EntityKind,
        records: RwSignal<Vec<Record>>,
        pending: RwSignal<PendingActions>,
        notifications: NotificationService,
        api: StoredValue<ApiClient>,
    ) -> Self {
        Self {
            kind,
            records,
            pending,
            notifications,
            api,
        }
    }

    pub fn pending(&self) -> RwSignal<PendingActions> {
        self.pending
    }

    /// Confirm, call `DELETE`, then drop the row by id.
    ///
    /// An id the list no longer holds is a no-op, as is a second click while
    /// the first call is pending.
    pub fn delete(&self, id: RecordId) {
        if !self.records.with_untracked(|r| contains_id(r, &id)) {
            log::debug!("Delete of {} ignored: not in list", id);
            return;
        }
        if self.pending.with_untracked(|p| p.is_pending(&id, RowAction::Delete)) {
            return;
        }
        let prompt = format!("Delete this {}? This cannot be undone.", self.kind.singular().to_lowercase());
        if !confirm(&prompt) {
            return;
        }
        if !self.begin(&id, RowAction::Delete) {
            return;
        }

        let this = *self;
        let api = self.api.get_value();
        spawn_local(async move {
            let result = api.delete(this.kind, &id).await;
            this.finish(&id, RowAction::Delete);

            if result.outcome.ok {
                let removed = this.records.try_update(|r| remove_by_id(r, &id));
                log::info!("Deleted {} {} (list updated: {:?})", this.kind.singular(), id, removed);
                this.notifications.success(result.outcome.message);
            } else {
                this.notifications.error(result.outcome.message);
            }
        });
    }

    /// Call `PUT` with the edited fields and merge the result into the row in
    /// place. The server's echoed record wins over the submitted patch.
    pub fn update(&self, id: RecordId, patch: Record, on_finished: impl FnOnce(ApiOutcome) + 'static) {
        if !self.begin(&id, RowAction::Edit) {
            return;
        }

        let this = *self;
        let api = self.api.get_value();
        spawn_local(async move {
            let result = api.update(this.kind, &id, &patch).await;
            this.finish(&id, RowAction::Edit);

            if result.outcome.ok {
                let merged = result.record.unwrap_or(patch);
                this.records.try_update(|r| merge_by_id(r, &id, &merged));
                this.notifications.success(result.outcome.message.clone());
            } else {
                this.notifications.error(result.outcome.message.clone());
            }
            on_finished(result.outcome);
        });
    }

    /// Call `POST`. The caller refetches the current page on success, since
    /// the server decides where the new record lands.
    pub fn create(&self, record: Record, on_finished: impl FnOnce(ApiOutcome) + 'static) {
        let key = new_record_id();
        if !self.begin(&key, RowAction::Create) {
            return;
        }

        let this = *self;
        let api = self.api.get_value();
        spawn_local(async move {
            let result = api.create(this.kind, &record).await;
            this.finish(&key, RowAction::Create);

            if result.outcome.ok {
                this.notifications.success(result.outcome.message.clone());
            } else {
                this.notifications.error(result.outcome.message.clone());
            }
            on_finished(result.outcome);
        });
    }

    fn begin(&self, id: &RecordId, action: RowAction) -> bool {
        self.pending
            .try_update(|p| p.try_begin(id, action))
            .unwrap_or(false)
    }

    fn finish(&self, id: &RecordId, action: RowAction) {
        self.pending.try_update(|p| p.finish(id, action));
    }
}
