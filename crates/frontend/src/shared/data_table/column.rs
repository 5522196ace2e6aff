//! Column definitions shared by every entity list.
//!
//! A column set is an ordered `Vec<ColumnDef>`; the order is the left-to-right
//! display order. How a cell looks is chosen by its `CellKind`, never by a
//! callback stored in the column.

use contracts::shared::record::display_value;
use contracts::shared::validation::parse_date;
use contracts::shared::Record;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Reserved key of the row controls column
pub const ACTIONS_KEY: &str = "actions";

/// Render strategy of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Text,
    /// Number with thousands separator and fixed decimals
    Number { decimals: u8 },
    /// `YYYY-MM-DD` (or RFC 3339) shown as `dd.mm.yyyy`
    Date,
    Boolean,
    Email,
    /// Short status value rendered as a badge
    Badge,
    /// `first_name` + `last_name` of the record
    PersonName,
    /// Edit/delete triggers instead of a field value
    Actions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub key: &'static str,
    pub header: &'static str,
    pub kind: CellKind,
    pub sortable: bool,
    pub filterable: bool,
    pub align: Align,
    pub hidden_by_default: bool,
    pub min_width: f64,
}

impl ColumnDef {
    pub fn new(key: &'static str, header: &'static str, kind: CellKind) -> Self {
        let align = match kind {
            CellKind::Number { .. } => Align::Right,
            CellKind::Boolean | CellKind::Badge => Align::Center,
            _ => Align::Left,
        };
        Self {
            key,
            header,
            kind,
            sortable: true,
            filterable: true,
            align,
            hidden_by_default: false,
            min_width: 100.0,
        }
    }

    pub fn text(key: &'static str, header: &'static str) -> Self {
        Self::new(key, header, CellKind::Text)
    }

    pub fn number(key: &'static str, header: &'static str, decimals: u8) -> Self {
        Self::new(key, header, CellKind::Number { decimals })
    }

    pub fn date(key: &'static str, header: &'static str) -> Self {
        Self::new(key, header, CellKind::Date)
    }

    pub fn boolean(key: &'static str, header: &'static str) -> Self {
        Self::new(key, header, CellKind::Boolean)
    }

    pub fn email(key: &'static str, header: &'static str) -> Self {
        Self::new(key, header, CellKind::Email)
    }

    pub fn badge(key: &'static str, header: &'static str) -> Self {
        Self::new(key, header, CellKind::Badge)
    }

    pub fn person_name(key: &'static str, header: &'static str) -> Self {
        Self::new(key, header, CellKind::PersonName).with_min_width(180.0)
    }

    /// Row controls column; never sortable or filterable
    pub fn actions() -> Self {
        Self {
            key: ACTIONS_KEY,
            header: "Actions",
            kind: CellKind::Actions,
            sortable: false,
            filterable: false,
            align: Align::Center,
            hidden_by_default: false,
            min_width: 110.0,
        }
    }

    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn not_filterable(mut self) -> Self {
        self.filterable = false;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden_by_default = true;
        self
    }

    pub fn with_min_width(mut self, min_width: f64) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn is_actions(&self) -> bool {
        self.kind == CellKind::Actions || self.key == ACTIONS_KEY
    }

    pub fn can_sort(&self) -> bool {
        self.sortable && !self.is_actions()
    }

    pub fn can_filter(&self) -> bool {
        self.filterable && !self.is_actions()
    }

    /// Plain text of this column's cell for a record
    pub fn cell_text(&self, record: &Record) -> String {
        format_cell(self.kind, self.key, record)
    }

    /// Ordering of two records by this column (ascending)
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        sort_key(self.kind, self.key, a).cmp(&sort_key(self.kind, self.key, b))
    }
}

/// Duplicate keys are a programming error in a column set
pub fn validate_columns(columns: &[ColumnDef]) -> Result<(), String> {
    let mut seen = HashSet::new();
    for column in columns {
        if !seen.insert(column.key) {
            return Err(format!("Duplicate column key: {}", column.key));
        }
    }
    Ok(())
}

/// Text form of a cell, shared by rendering, filtering and sorting
pub fn format_cell(kind: CellKind, key: &str, record: &Record) -> String {
    match kind {
        CellKind::Actions => String::new(),
        CellKind::PersonName => person_name(record).unwrap_or_else(|| record.display(key)),
        CellKind::Number { decimals } => match record.get(key).and_then(as_number) {
            Some(n) => format_number_with_decimals(n, decimals),
            None => record.display(key),
        },
        CellKind::Date => match record.get(key) {
            Some(Value::String(s)) => format_date(s),
            Some(other) => display_value(other),
            None => String::new(),
        },
        CellKind::Badge => capitalize(&record.display(key)),
        CellKind::Text | CellKind::Boolean | CellKind::Email => record.display(key),
    }
}

fn person_name(record: &Record) -> Option<String> {
    let first = record.display("first_name");
    let last = record.display("last_name");
    let full = format!("{} {}", first.trim(), last.trim()).trim().to_string();
    (!full.is_empty()).then_some(full)
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `2024-05-01` or `2024-05-01T08:30:00Z` -> `01.05.2024`; anything else is shown as is
pub fn format_date(value: &str) -> String {
    if let Some(date) = parse_date(value) {
        return date.format("%d.%m.%Y").to_string();
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(value.trim()) {
        return dt.format("%d.%m.%Y").to_string();
    }
    value.to_string()
}

/// Formats a number with a space thousands separator and the given decimals
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.*}", decimals.min(6) as usize, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Space every 3 digits from the end of the integer part
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(' ');
        }
        result.push(*c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Comparable projection of a cell. Variant order puts numbers before text and
/// missing values last.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
enum SortKey {
    Bool(bool),
    Number(f64),
    Text(String),
    Missing,
}

impl Eq for SortKey {}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            _ => self.partial_cmp(other).unwrap_or(Ordering::Equal),
        }
    }
}

fn sort_key(kind: CellKind, key: &str, record: &Record) -> SortKey {
    match kind {
        CellKind::Actions => SortKey::Missing,
        CellKind::PersonName => match person_name(record) {
            Some(name) => SortKey::Text(name.to_lowercase()),
            None => value_key(record.get(key)),
        },
        // ISO dates already order lexicographically
        _ => value_key(record.get(key)),
    }
}

fn value_key(value: Option<&Value>) -> SortKey {
    match value {
        None | Some(Value::Null) => SortKey::Missing,
        Some(Value::Bool(b)) => SortKey::Bool(*b),
        Some(Value::Number(n)) => n.as_f64().map(SortKey::Number).unwrap_or(SortKey::Missing),
        Some(Value::String(s)) if s.trim().is_empty() => SortKey::Missing,
        Some(Value::String(s)) => match s.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => SortKey::Number(n),
            _ => SortKey::Text(s.to_lowercase()),
        },
        Some(other) => SortKey::Text(display_value(other).to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        Record::new()
            .with("id", 1)
            .with("first_name", "Ada")
            .with("last_name", "Lovelace")
            .with("fee", 12345.5)
            .with("enrolled_on", "2023-09-01")
            .with("status", "scheduled")
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
        assert_eq!(format_number_with_decimals(-1234.0, 0), "-1 234");
        assert_eq!(format_number_with_decimals(0.0, 1), "0.0");
    }

    #[test]
    fn test_cell_text_by_kind() {
        let r = record();
        assert_eq!(ColumnDef::person_name("name", "Name").cell_text(&r), "Ada Lovelace");
        assert_eq!(ColumnDef::number("fee", "Fee", 2).cell_text(&r), "12 345.50");
        assert_eq!(ColumnDef::date("enrolled_on", "Enrolled").cell_text(&r), "01.09.2023");
        assert_eq!(ColumnDef::badge("status", "Status").cell_text(&r), "Scheduled");
        assert_eq!(ColumnDef::text("missing", "Missing").cell_text(&r), "");
        assert_eq!(ColumnDef::actions().cell_text(&r), "");
    }

    #[test]
    fn test_actions_column_is_never_sortable_or_filterable() {
        let actions = ColumnDef {
            sortable: true,
            filterable: true,
            ..ColumnDef::actions()
        };
        assert!(!actions.can_sort());
        assert!(!actions.can_filter());
    }

    #[test]
    fn test_duplicate_keys_are_rejected() {
        let columns = vec![ColumnDef::text("email", "Email"), ColumnDef::email("email", "E-mail")];
        assert!(validate_columns(&columns).is_err());
        assert!(validate_columns(&columns[..1]).is_ok());
    }

    #[test]
    fn test_compare_numbers_numerically_and_missing_last() {
        let column = ColumnDef::number("capacity", "Capacity", 0);
        let small = Record::new().with("capacity", 9);
        let big = Record::new().with("capacity", "30");
        let missing = Record::new();

        assert_eq!(column.compare(&small, &big), Ordering::Less);
        assert_eq!(column.compare(&big, &missing), Ordering::Less);
        assert_eq!(column.compare(&missing, &missing), Ordering::Equal);
    }

    #[test]
    fn test_compare_text_case_insensitive() {
        let column = ColumnDef::text("name", "Name");
        let a = Record::new().with("name", "alpha");
        let b = Record::new().with("name", "Beta");
        assert_eq!(column.compare(&a, &b), Ordering::Less);
    }
}
