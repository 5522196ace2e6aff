//! Local UI state of one table instance: sort, filters, search, column visibility.
//!
//! Everything here works on the records the table currently holds. Nothing in
//! this module asks the server for data; only pagination does that.

use super::column::ColumnDef;
use contracts::shared::Record;
use std::collections::{BTreeMap, HashMap};

/// Global search becomes active from this many characters
pub const SEARCH_MIN_CHARS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

/// Derived display phase of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TablePhase {
    Loading,
    Empty,
    Populated,
    Sorted,
    Filtered,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableState {
    pub sort: Option<SortSpec>,
    pub filters: BTreeMap<String, String>,
    pub search: String,
    pub visibility: HashMap<String, bool>,
}

impl TableState {
    /// Fresh state with the columns' default visibility
    pub fn for_columns(columns: &[ColumnDef]) -> Self {
        Self {
            visibility: columns
                .iter()
                .map(|c| (c.key.to_string(), !c.hidden_by_default))
                .collect(),
            ..Self::default()
        }
    }

    /// Header click: a new column sorts ascending, the same column flips.
    /// Columns that cannot sort are ignored.
    pub fn toggle_sort(&mut self, columns: &[ColumnDef], key: &str) {
        let Some(column) = columns.iter().find(|c| c.key == key) else {
            return;
        };
        if !column.can_sort() {
            return;
        }
        self.sort = match self.sort.take() {
            Some(spec) if spec.key == key => Some(SortSpec {
                key: spec.key,
                direction: spec.direction.toggled(),
            }),
            _ => Some(SortSpec {
                key: key.to_string(),
                direction: SortDirection::Asc,
            }),
        };
    }

    pub fn sort_direction_of(&self, key: &str) -> Option<SortDirection> {
        self.sort
            .as_ref()
            .filter(|spec| spec.key == key)
            .map(|spec| spec.direction)
    }

    /// Set a column filter; a blank value removes it
    pub fn set_filter(&mut self, key: &str, value: &str) {
        if value.trim().is_empty() {
            self.filters.remove(key);
        } else {
            self.filters.insert(key.to_string(), value.to_string());
        }
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.search.clear();
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_string();
    }

    pub fn is_search_active(&self) -> bool {
        self.search.trim().chars().count() >= SEARCH_MIN_CHARS
    }

    pub fn has_active_filters(&self) -> bool {
        self.is_search_active() || self.filters.values().any(|v| !v.trim().is_empty())
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.visibility.get(key).copied().unwrap_or(true)
    }

    /// Show/hide a column. The last visible column cannot be hidden.
    pub fn toggle_visibility(&mut self, columns: &[ColumnDef], key: &str) {
        let currently_visible = self.is_visible(key);
        if currently_visible && self.visible_columns(columns).len() <= 1 {
            return;
        }
        self.visibility.insert(key.to_string(), !currently_visible);
    }

    /// Apply a saved visibility map. Unknown keys are ignored; if nothing would
    /// stay visible the saved map is discarded.
    pub fn restore_visibility(&mut self, columns: &[ColumnDef], saved: &HashMap<String, bool>) {
        let mut restored = self.visibility.clone();
        for column in columns {
            if let Some(visible) = saved.get(column.key) {
                restored.insert(column.key.to_string(), *visible);
            }
        }
        if columns
            .iter()
            .any(|c| restored.get(c.key).copied().unwrap_or(true))
        {
            self.visibility = restored;
        }
    }

    /// Columns to render, in definition order
    pub fn visible_columns(&self, columns: &[ColumnDef]) -> Vec<ColumnDef> {
        columns
            .iter()
            .filter(|c| self.is_visible(c.key))
            .cloned()
            .collect()
    }

    fn matches(&self, columns: &[ColumnDef], record: &Record) -> bool {
        let column_filters_pass = self.filters.iter().all(|(key, value)| {
            let needle = value.trim().to_lowercase();
            if needle.is_empty() {
                return true;
            }
            match columns.iter().find(|c| c.key == key.as_str()) {
                Some(column) if column.can_filter() => column
                    .cell_text(record)
                    .to_lowercase()
                    .contains(&needle),
                _ => true,
            }
        });
        if !column_filters_pass {
            return false;
        }

        if !self.is_search_active() {
            return true;
        }
        let needle = self.search.trim().to_lowercase();
        columns
            .iter()
            .filter(|c| c.can_filter())
            .any(|c| c.cell_text(record).to_lowercase().contains(&needle))
    }

    /// The rows to display: filtered, then stably sorted. Always a sub-permutation
    /// of `records`; the input is never modified.
    pub fn apply(&self, columns: &[ColumnDef], records: &[Record]) -> Vec<Record> {
        let mut rows: Vec<Record> = records
            .iter()
            .filter(|r| self.matches(columns, r))
            .cloned()
            .collect();

        if let Some(spec) = &self.sort {
            if let Some(column) = columns.iter().find(|c| c.key == spec.key && c.can_sort()) {
                rows.sort_by(|a, b| {
                    let ordering = column.compare(a, b);
                    match spec.direction {
                        SortDirection::Asc => ordering,
                        SortDirection::Desc => ordering.reverse(),
                    }
                });
            }
        }
        rows
    }

    pub fn phase(&self, is_loading: bool, records_len: usize) -> TablePhase {
        if is_loading {
            TablePhase::Loading
        } else if records_len == 0 {
            TablePhase::Empty
        } else if self.has_active_filters() {
            TablePhase::Filtered
        } else if self.sort.is_some() {
            TablePhase::Sorted
        } else {
            TablePhase::Populated
        }
    }
}

/// Sort indicator for a header
pub fn get_sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => " ▲",
        Some(SortDirection::Desc) => " ▼",
        None => " ⇅",
    }
}

/// CSS class of the sort indicator
pub fn get_sort_class(direction: Option<SortDirection>) -> &'static str {
    if direction.is_some() {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::RecordId;

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::text("name", "Name"),
            ColumnDef::number("age", "Age", 0),
            ColumnDef::text("notes", "Notes").not_filterable().hidden(),
            ColumnDef::actions(),
        ]
    }

    fn records() -> Vec<Record> {
        vec![
            Record::new().with("id", 1).with("name", "Charlie").with("age", 12),
            Record::new().with("id", 2).with("name", "alice").with("age", 14),
            Record::new().with("id", 3).with("name", "Bob").with("age", 12),
            Record::new().with("id", 4).with("name", "Dana"),
        ]
    }

    fn ids(rows: &[Record]) -> Vec<RecordId> {
        rows.iter().filter_map(Record::id).collect()
    }

    #[test]
    fn test_unsorted_unfiltered_view_keeps_every_row() {
        let state = TableState::for_columns(&columns());
        let rows = state.apply(&columns(), &records());
        assert_eq!(rows, records());
    }

    #[test]
    fn test_toggle_sort_cycles_direction() {
        let cols = columns();
        let mut state = TableState::for_columns(&cols);

        state.toggle_sort(&cols, "name");
        assert_eq!(state.sort_direction_of("name"), Some(SortDirection::Asc));
        state.toggle_sort(&cols, "name");
        assert_eq!(state.sort_direction_of("name"), Some(SortDirection::Desc));
        state.toggle_sort(&cols, "age");
        assert_eq!(state.sort_direction_of("age"), Some(SortDirection::Asc));
        assert_eq!(state.sort_direction_of("name"), None);
    }

    #[test]
    fn test_actions_column_does_not_sort() {
        let cols = columns();
        let mut state = TableState::for_columns(&cols);
        state.toggle_sort(&cols, "actions");
        state.toggle_sort(&cols, "unknown");
        assert_eq!(state.sort, None);
    }

    #[test]
    fn test_sort_asc_then_desc_is_a_permutation() {
        let cols = columns();
        let input = records();
        let mut state = TableState::for_columns(&cols);

        state.toggle_sort(&cols, "name");
        let asc = state.apply(&cols, &input);
        assert_eq!(
            ids(&asc),
            vec![RecordId::from(2), RecordId::from(3), RecordId::from(1), RecordId::from(4)]
        );

        state.toggle_sort(&cols, "name");
        let desc = state.apply(&cols, &asc);
        assert_eq!(desc.len(), input.len());

        let mut sorted_ids = ids(&desc);
        sorted_ids.sort();
        let mut original_ids = ids(&input);
        original_ids.sort();
        assert_eq!(sorted_ids, original_ids);
    }

    #[test]
    fn test_sort_is_stable_and_missing_values_last() {
        let cols = columns();
        let mut state = TableState::for_columns(&cols);
        state.toggle_sort(&cols, "age");

        let rows = state.apply(&cols, &records());
        assert_eq!(
            ids(&rows),
            vec![RecordId::from(1), RecordId::from(3), RecordId::from(2), RecordId::from(4)]
        );
    }

    #[test]
    fn test_column_filter_is_case_insensitive() {
        let cols = columns();
        let mut state = TableState::for_columns(&cols);
        state.set_filter("name", "AL");

        let rows = state.apply(&cols, &records());
        assert_eq!(ids(&rows), vec![RecordId::from(2)]);
        assert_eq!(state.phase(false, records().len()), TablePhase::Filtered);

        state.set_filter("name", "  ");
        assert!(state.filters.is_empty());
    }

    #[test]
    fn test_search_needs_min_chars_and_skips_unfilterable_columns() {
        let cols = columns();
        let input = vec![
            Record::new().with("id", 1).with("name", "Eve").with("notes", "needs bus"),
            Record::new().with("id", 2).with("name", "Frank"),
        ];
        let mut state = TableState::for_columns(&cols);

        state.set_search("bu");
        assert_eq!(state.apply(&cols, &input).len(), 2);

        state.set_search("bus");
        assert!(state.apply(&cols, &input).is_empty());

        state.set_search("fra");
        assert_eq!(ids(&state.apply(&cols, &input)), vec![RecordId::from(2)]);
    }

    #[test]
    fn test_visibility_defaults_and_last_column_guard() {
        let cols = vec![ColumnDef::text("a", "A"), ColumnDef::text("b", "B").hidden()];
        let mut state = TableState::for_columns(&cols);
        assert_eq!(state.visible_columns(&cols).len(), 1);

        state.toggle_visibility(&cols, "a");
        assert!(state.is_visible("a"));

        state.toggle_visibility(&cols, "b");
        state.toggle_visibility(&cols, "a");
        let visible: Vec<_> = state.visible_columns(&cols).iter().map(|c| c.key).collect();
        assert_eq!(visible, vec!["b"]);
    }

    #[test]
    fn test_restore_visibility_ignores_unknown_and_all_hidden() {
        let cols = vec![ColumnDef::text("a", "A"), ColumnDef::text("b", "B")];
        let mut state = TableState::for_columns(&cols);

        let saved = HashMap::from([("b".to_string(), false), ("gone".to_string(), false)]);
        state.restore_visibility(&cols, &saved);
        assert!(state.is_visible("a"));
        assert!(!state.is_visible("b"));
        assert!(!state.visibility.contains_key("gone"));

        let all_hidden = HashMap::from([("a".to_string(), false), ("b".to_string(), false)]);
        state.restore_visibility(&cols, &all_hidden);
        assert!(state.is_visible("a"));
    }

    #[test]
    fn test_phase_transitions() {
        let cols = columns();
        let mut state = TableState::for_columns(&cols);
        assert_eq!(state.phase(true, 3), TablePhase::Loading);
        assert_eq!(state.phase(false, 0), TablePhase::Empty);
        assert_eq!(state.phase(false, 3), TablePhase::Populated);

        state.toggle_sort(&cols, "name");
        assert_eq!(state.phase(false, 3), TablePhase::Sorted);
        // Loading hides but keeps the sort
        assert_eq!(state.phase(true, 3), TablePhase::Loading);
        assert!(state.sort.is_some());
    }
}
