use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifier of a row, normalized from whatever the backend sends in `id`.
///
/// The API mixes numeric ids (`42`) and string ids (`"42"`, uuids); both collapse
/// to the same string form so delete/update reconciliation compares like with like.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "String")]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Extract an id from a JSON value. Only numbers and non-blank strings qualify.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(Self(n.to_string())),
            Value::String(s) if !s.trim().is_empty() => Some(Self(s.trim().to_string())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl TryFrom<Value> for RecordId {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value).ok_or_else(|| format!("Invalid record id: {}", value))
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_and_string_ids_match() {
        assert_eq!(RecordId::from_value(&json!(7)), RecordId::from_value(&json!("7")));
        assert_eq!(RecordId::from_value(&json!(7)), Some(RecordId::from(7)));
    }

    #[test]
    fn test_rejects_non_id_values() {
        assert_eq!(RecordId::from_value(&json!(null)), None);
        assert_eq!(RecordId::from_value(&json!("  ")), None);
        assert_eq!(RecordId::from_value(&json!({"id": 1})), None);
    }

    #[test]
    fn test_deserialize_accepts_numbers_and_strings() {
        let ids: Vec<RecordId> = serde_json::from_value(json!([5, "5", "a-b"])).unwrap();
        assert_eq!(ids[0], ids[1]);
        assert_eq!(serde_json::to_value(&ids[2]).unwrap(), json!("a-b"));
    }
}
