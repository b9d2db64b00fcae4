//! Opaque resource records.
//!
//! A `Record` is an immutable snapshot of one element of a collection
//! response. Apart from `id`, no field is structurally required; accessors
//! return `None` for missing or null members instead of failing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One element of a collection response, kept as the raw JSON value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Value);

impl Record {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The record identifier rendered as a string.
    ///
    /// The API serializes ids as strings, but numeric ids are accepted too.
    pub fn id(&self) -> Option<String> {
        self.text("id")
    }

    /// Raw member access; `None` when absent, null, or when the record is not an object.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name).filter(|value| !value.is_null())
    }

    /// A member rendered as text. Empty strings count as missing.
    pub fn text(&self, name: &str) -> Option<String> {
        match self.field(name)? {
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        match self.field(name)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn id_accepts_strings_and_numbers() {
        assert_eq!(Record::new(json!({"id": "7"})).id().as_deref(), Some("7"));
        assert_eq!(Record::new(json!({"id": 7})).id().as_deref(), Some("7"));
        assert_eq!(Record::new(json!({"id": null})).id(), None);
        assert_eq!(Record::new(json!({"name": "x"})).id(), None);
    }

    #[test]
    fn empty_text_counts_as_missing() {
        let record = Record::new(json!({"team_id": "", "name": "Thor"}));
        assert_eq!(record.text("team_id"), None);
        assert_eq!(record.text("name").as_deref(), Some("Thor"));
    }

    #[test]
    fn number_parses_numeric_strings() {
        let record = Record::new(json!({"calories": "300", "distance": 5.5, "note": "n/a"}));
        assert_eq!(record.number("calories"), Some(300.0));
        assert_eq!(record.number("distance"), Some(5.5));
        assert_eq!(record.number("note"), None);
    }

    #[test]
    fn non_object_records_have_no_fields() {
        let record = Record::new(json!(42));
        assert_eq!(record.id(), None);
        assert_eq!(record.field("id"), None);
    }
}
