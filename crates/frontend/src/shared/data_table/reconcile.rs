//! Keeping the parent's record list consistent after a row action succeeded.

use contracts::domain::common::{RecordId, RowAction};
use contracts::shared::Record;
use std::collections::HashSet;

/// Remove the record with `id`, keeping the relative order of the rest.
/// Returns `false` (and changes nothing) when no such record is held.
pub fn remove_by_id(records: &mut Vec<Record>, id: &RecordId) -> bool {
    let before = records.len();
    records.retain(|r| r.id().as_ref() != Some(id));
    records.len() != before
}

/// Merge `patch` into the record with `id` in place. Position and fields the
/// patch does not mention are preserved. Returns `false` when the id is unknown.
pub fn merge_by_id(records: &mut [Record], id: &RecordId, patch: &Record) -> bool {
    match records.iter_mut().find(|r| r.id().as_ref() == Some(id)) {
        Some(record) => {
            record.merge(patch);
            true
        }
        None => false,
    }
}

pub fn contains_id(records: &[Record], id: &RecordId) -> bool {
    records.iter().any(|r| r.id().as_ref() == Some(id))
}

/// Row actions whose API call has not resolved yet.
///
/// A trigger is disabled while its own call is pending, so one click issues
/// exactly one request. Calls on different rows are independent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingActions(HashSet<(RecordId, RowAction)>);

impl PendingActions {
    /// Mark an action as started. `false` means it is already in flight and the
    /// caller must not issue another request.
    pub fn try_begin(&mut self, id: &RecordId, action: RowAction) -> bool {
        self.0.insert((id.clone(), action))
    }

    pub fn finish(&mut self, id: &RecordId, action: RowAction) {
        self.0.remove(&(id.clone(), action));
    }

    pub fn is_pending(&self, id: &RecordId, action: RowAction) -> bool {
        self.0.contains(&(id.clone(), action))
    }

    /// Any action on the row is in flight
    pub fn is_row_busy(&self, id: &RecordId) -> bool {
        self.0.iter().any(|(pending_id, _)| pending_id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Vec<Record> {
        vec![
            Record::new().with("id", 1).with("name", "A"),
            Record::new().with("id", 2).with("name", "B"),
            Record::new().with("id", 3).with("name", "C"),
        ]
    }

    #[test]
    fn test_delete_keeps_relative_order() {
        let mut records = abc();
        assert!(remove_by_id(&mut records, &RecordId::from(2)));

        assert_eq!(records.len(), 2);
        assert!(!contains_id(&records, &RecordId::from(2)));
        assert_eq!(records[0].display("name"), "A");
        assert_eq!(records[1].display("name"), "C");
    }

    #[test]
    fn test_repeated_delete_is_a_no_op() {
        let mut records = abc();
        assert!(remove_by_id(&mut records, &RecordId::from(2)));
        let snapshot = records.clone();

        assert!(!remove_by_id(&mut records, &RecordId::from(2)));
        assert_eq!(records, snapshot);
    }

    #[test]
    fn test_string_and_numeric_ids_reconcile() {
        let mut records = abc();
        assert!(remove_by_id(&mut records, &RecordId::new("3")));
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_update_merges_in_place() {
        let mut records = abc();
        records[1].insert("grade", serde_json::json!("7B"));
        let patch = Record::new().with("name", "Bee");

        assert!(merge_by_id(&mut records, &RecordId::from(2), &patch));
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].display("name"), "Bee");
        assert_eq!(records[1].display("grade"), "7B");
        assert_eq!(records[1].id(), Some(RecordId::from(2)));
        assert_eq!(records[0].display("name"), "A");
    }

    #[test]
    fn test_update_of_unknown_id_changes_nothing() {
        let mut records = abc();
        let patch = Record::new().with("name", "Z");
        assert!(!merge_by_id(&mut records, &RecordId::from(9), &patch));
        assert_eq!(records, abc());
    }

    #[test]
    fn test_pending_guard_blocks_double_submit() {
        let mut pending = PendingActions::default();
        let id = RecordId::from(5);

        assert!(pending.try_begin(&id, RowAction::Delete));
        assert!(!pending.try_begin(&id, RowAction::Delete));
        assert!(pending.try_begin(&RecordId::from(6), RowAction::Delete));
        assert!(pending.is_row_busy(&id));
        assert!(!pending.is_pending(&id, RowAction::Edit));

        pending.finish(&id, RowAction::Delete);
        assert!(!pending.is_row_busy(&id));
        assert!(pending.try_begin(&id, RowAction::Delete));
    }
}
