//! Opaque row data as received from the REST API.

use crate::domain::common::RecordId;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of any entity list: field name -> JSON value.
///
/// The shape is defined by the backend; the table trusts it to match the
/// column definitions. Only the `id` field is interpreted here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub const ID_FIELD: &'static str = "id";

    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Wrap a JSON value; anything other than an object is rejected.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn to_entity<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(Value::Object(self.0.clone()))
    }

    /// Builder used by forms and fixtures
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn id(&self) -> Option<RecordId> {
        self.0.get(Self::ID_FIELD).and_then(RecordId::from_value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Overwrite the fields present in `patch`, keeping every other field.
    /// The identifier is never rewritten by a patch.
    pub fn merge(&mut self, patch: &Record) {
        for (key, value) in patch.fields() {
            if key == Self::ID_FIELD && self.0.contains_key(Self::ID_FIELD) {
                continue;
            }
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Plain text of a field, used for filtering and text cells
    pub fn display(&self, key: &str) -> String {
        self.get(key).map(display_value).unwrap_or_default()
    }
}

/// Plain text rendering of a JSON value.
///
/// Nested objects show their `name` (or `title`) when they have one, which is
/// how the API embeds related entities such as a student's class.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "Yes".to_string(),
        Value::Bool(false) => "No".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(map) => map
            .get("name")
            .or_else(|| map.get("title"))
            .map(display_value)
            .unwrap_or_else(|| value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn student() -> Record {
        Record::new()
            .with("id", 1)
            .with("first_name", "Ada")
            .with("last_name", "Lovelace")
            .with("email", "ada@school.test")
    }

    #[test]
    fn test_merge_overwrites_only_patched_fields() {
        let mut record = student();
        record.merge(&Record::new().with("email", "ada@new.test"));

        assert_eq!(record.display("email"), "ada@new.test");
        assert_eq!(record.display("first_name"), "Ada");
        assert_eq!(record.display("last_name"), "Lovelace");
        assert_eq!(record.len(), 4);
    }

    #[test]
    fn test_merge_keeps_identifier() {
        let mut record = student();
        record.merge(&Record::new().with("id", 99).with("first_name", "Augusta"));

        assert_eq!(record.id(), Some(RecordId::from(1)));
        assert_eq!(record.display("first_name"), "Augusta");
    }

    #[test]
    fn test_display_values() {
        assert_eq!(display_value(&json!(null)), "");
        assert_eq!(display_value(&json!(true)), "Yes");
        assert_eq!(display_value(&json!(12.5)), "12.5");
        assert_eq!(display_value(&json!(["Math", null, "Art"])), "Math, Art");
        assert_eq!(display_value(&json!({"id": 3, "name": "Grade 5"})), "Grade 5");
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        assert!(Record::from_value(json!([1, 2])).is_none());
        assert!(Record::from_value(json!({"id": 1})).is_some());
    }
}
