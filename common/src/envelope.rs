//! Collection response normalization.
//!
//! The API answers a collection GET either with a bare JSON array or with a
//! paginated envelope `{ "count": .., "next": .., "previous": .., "results": [..] }`
//! depending on server configuration. Both shapes are reduced to an ordered
//! list of [`Record`]s here. Any other shape degrades to "no records" rather
//! than an error; callers that care can inspect the detected [`EnvelopeShape`].

use serde_json::Value;

use crate::model::record::Record;

/// The shape a collection body was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeShape {
    /// The body itself is the array of records.
    Bare,
    /// The body is an object carrying the records under `results`.
    Paginated,
    /// Neither of the above; treated as an empty collection.
    Unrecognized,
}

/// Returns the records of a collection body, preserving server order.
pub fn normalize(body: Value) -> Vec<Record> {
    normalize_with_shape(body).1
}

/// Same as [`normalize`], also reporting which shape was detected.
pub fn normalize_with_shape(body: Value) -> (EnvelopeShape, Vec<Record>) {
    match body {
        Value::Array(items) => (EnvelopeShape::Bare, into_records(items)),
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(items)) => (EnvelopeShape::Paginated, into_records(items)),
            _ => (EnvelopeShape::Unrecognized, Vec::new()),
        },
        _ => (EnvelopeShape::Unrecognized, Vec::new()),
    }
}

fn into_records(items: Vec<Value>) -> Vec<Record> {
    items.into_iter().map(Record::new).collect()
}
