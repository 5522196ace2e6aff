//! Field definitions for the create/edit surface and conversion of raw input
//! strings into a JSON record.

use contracts::shared::record::display_value;
use contracts::shared::{Record, ValidationErrors};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    TextArea,
    Email,
    Phone,
    /// `YYYY-MM-DD`
    Date,
    Number,
    Select(&'static [&'static str]),
}

impl FieldKind {
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Phone => "tel",
            FieldKind::Date => "date",
            FieldKind::Number => "number",
            _ => "text",
        }
    }
}

/// Option of a select list matching `value` case-insensitively
pub fn match_option(options: &[&'static str], value: &str) -> Option<&'static str> {
    let value = value.trim();
    options.iter().copied().find(|o| o.eq_ignore_ascii_case(value))
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FormField {
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
        }
    }

    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Raw input string for the field's current value in `record`
    pub fn raw_value(&self, record: &Record) -> String {
        match record.get(self.key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::String(s)) => match self.kind {
                // "Female" from the server pre-selects the "female" option
                FieldKind::Select(options) => match_option(options, s).unwrap_or(s.as_str()).to_string(),
                // RFC 3339 timestamps still pre-fill a date input
                FieldKind::Date => s.get(..10).unwrap_or(s).to_string(),
                _ => s.clone(),
            },
            Some(other) => display_value(other),
        }
    }

    /// JSON value of a raw input; blank inputs become `null`
    pub fn parse(&self, raw: &str) -> Result<Value, String> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Value::Null);
        }
        match self.kind {
            FieldKind::Number => raw
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .and_then(serde_json::Number::from_f64)
                .map(|n| {
                    // Whole numbers go out as integers
                    if n.as_f64().is_some_and(|f| f.fract() == 0.0 && f.abs() < 9e15) {
                        Value::from(n.as_f64().unwrap_or_default() as i64)
                    } else {
                        Value::Number(n)
                    }
                })
                .ok_or_else(|| format!("{} must be a number", self.label)),
            FieldKind::Select(options) => match_option(options, raw)
                .map(Value::from)
                .ok_or_else(|| format!("{} must be one of: {}", self.label, options.join(", "))),
            _ => Ok(Value::String(raw.to_string())),
        }
    }
}

/// Raw input strings of every field, keyed by field key
pub fn raw_values(fields: &[FormField], record: &Record) -> HashMap<String, String> {
    fields
        .iter()
        .map(|f| (f.key.to_string(), f.raw_value(record)))
        .collect()
}

/// Convert raw inputs into a record of exactly the form's fields.
/// Required-field and type errors are collected per field.
pub fn collect_form(
    fields: &[FormField],
    raw: &HashMap<String, String>,
) -> Result<Record, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let mut record = Record::new();

    for field in fields {
        let input = raw.get(field.key).map(String::as_str).unwrap_or_default();
        match field.parse(input) {
            Ok(Value::Null) if field.required => {
                errors.push(field.key, format!("{} is required", field.label));
            }
            Ok(value) => record.insert(field.key, value),
            Err(message) => errors.push(field.key, message),
        }
    }

    errors.into_result().map(|_| record)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUSES: &[&str] = &["scheduled", "completed"];

    fn fields() -> Vec<FormField> {
        vec![
            FormField::text("title", "Title").required(),
            FormField::new("total_marks", "Total marks", FieldKind::Number),
            FormField::new("exam_date", "Exam date", FieldKind::Date),
            FormField::new("status", "Status", FieldKind::Select(STATUSES)),
        ]
    }

    fn raw(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_collect_converts_types() {
        let record = collect_form(
            &fields(),
            &raw(&[
                ("title", " Finals "),
                ("total_marks", "100"),
                ("exam_date", "2025-06-01"),
                ("status", ""),
            ]),
        )
        .unwrap();

        assert_eq!(record.get("title"), Some(&Value::from("Finals")));
        assert_eq!(record.get("total_marks"), Some(&Value::from(100)));
        assert_eq!(record.get("status"), Some(&Value::Null));
        assert_eq!(record.len(), 4);
    }

    #[test]
    fn test_collect_reports_each_bad_field() {
        let errors = collect_form(
            &fields(),
            &raw(&[("total_marks", "lots"), ("status", "lost")]),
        )
        .unwrap_err();

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.for_field("title"), Some("Title is required"));
        assert_eq!(errors.for_field("total_marks"), Some("Total marks must be a number"));
        assert!(errors.for_field("status").is_some());
    }

    #[test]
    fn test_raw_values_prefill_from_record() {
        let record = Record::new()
            .with("title", "Midterm")
            .with("total_marks", 50)
            .with("exam_date", "2025-03-14T09:00:00Z");
        let values = raw_values(&fields(), &record);

        assert_eq!(values["title"], "Midterm");
        assert_eq!(values["total_marks"], "50");
        assert_eq!(values["exam_date"], "2025-03-14");
        assert_eq!(values["status"], "");
    }

    #[test]
    fn test_select_matches_options_ignoring_case() {
        let record = Record::new().with("title", "Finals").with("status", "Completed");
        let values = raw_values(&fields(), &record);
        assert_eq!(values["status"], "completed");

        let collected = collect_form(&fields(), &raw(&[("title", "Finals"), ("status", "SCHEDULED")]))
            .unwrap();
        assert_eq!(collected.get("status"), Some(&Value::from("scheduled")));
        assert_eq!(match_option(STATUSES, "lost"), None);
    }

    #[test]
    fn test_decimal_numbers_are_kept() {
        let field = FormField::new("credits", "Credits", FieldKind::Number);
        assert_eq!(field.parse("2.5"), Ok(Value::from(2.5)));
    }
}
