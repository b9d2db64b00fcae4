//! Status and body interpretation for API responses, kept free of any
//! browser type so it can be exercised directly.

use common::envelope::{normalize_with_shape, EnvelopeShape};
use common::model::record::Record;
use serde_json::Value;

use crate::error::{FetchError, SaveError};

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Turns a collection GET response into records.
///
/// A body of the wrong shape is not an error; it is reported through the
/// returned [`EnvelopeShape`] and yields no records.
pub fn interpret_collection(
    status: u16,
    body: &str,
) -> Result<(EnvelopeShape, Vec<Record>), FetchError> {
    if !is_success(status) {
        return Err(FetchError::HttpStatus(status));
    }
    let value: Value =
        serde_json::from_str(body).map_err(|err| FetchError::Decode(err.to_string()))?;
    Ok(normalize_with_shape(value))
}

/// Classifies a user PATCH response.
///
/// A failure body whose `email` entry is truthy (non-empty string, non-zero
/// number, `true`, any array or object) is a uniqueness conflict; every other
/// failure, parseable or not, is a generic rejection.
pub fn interpret_save(status: u16, body: &str) -> Result<(), SaveError> {
    if is_success(status) {
        return Ok(());
    }
    let names_email = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("email").map(is_truthy))
        .unwrap_or(false);
    if names_email {
        Err(SaveError::Conflict)
    } else {
        Err(SaveError::Rejected(status))
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_statuses_normalize_the_body() {
        let (shape, records) =
            interpret_collection(200, r#"{"count":2,"results":[{"id":"1"},{"id":"2"}]}"#).unwrap();
        assert_eq!(shape, EnvelopeShape::Paginated);
        assert_eq!(records.len(), 2);

        let (shape, records) = interpret_collection(204, "[]").unwrap();
        assert_eq!(shape, EnvelopeShape::Bare);
        assert!(records.is_empty());
    }

    #[test]
    fn non_success_status_fails_with_code() {
        for status in [199, 301, 400, 404, 500, 503] {
            let err = interpret_collection(status, "[]").unwrap_err();
            assert_eq!(err, FetchError::HttpStatus(status));
            assert!(err.to_string().contains(&status.to_string()));
        }
    }

    #[test]
    fn wrong_shape_is_ready_and_empty() {
        let (shape, records) = interpret_collection(200, r#"{"detail":"ok"}"#).unwrap();
        assert_eq!(shape, EnvelopeShape::Unrecognized);
        assert!(records.is_empty());
    }

    #[test]
    fn non_json_success_body_is_a_decode_error() {
        assert!(matches!(
            interpret_collection(200, "<html>"),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn email_in_failure_body_is_a_conflict() {
        let body = json!({"email": ["exists"]}).to_string();
        assert_eq!(interpret_save(400, &body), Err(SaveError::Conflict));
    }

    #[test]
    fn falsy_email_entries_are_generic() {
        for body in [r#"{"email":""}"#, r#"{"email":false}"#, r#"{"email":0}"#] {
            assert_eq!(interpret_save(400, body), Err(SaveError::Rejected(400)), "{body}");
        }
        for body in [r#"{"email":[]}"#, r#"{"email":"taken"}"#, r#"{"email":{}}"#] {
            assert_eq!(interpret_save(400, body), Err(SaveError::Conflict), "{body}");
        }
    }

    #[test]
    fn other_failures_are_generic() {
        assert_eq!(interpret_save(400, r#"{"name":["required"]}"#), Err(SaveError::Rejected(400)));
        assert_eq!(interpret_save(400, r#"{"email":null}"#), Err(SaveError::Rejected(400)));
        assert_eq!(interpret_save(500, "Internal Server Error"), Err(SaveError::Rejected(500)));
        assert_eq!(interpret_save(404, ""), Err(SaveError::Rejected(404)));
    }

    #[test]
    fn success_ignores_the_body() {
        assert_eq!(interpret_save(200, r#"{"id":"7"}"#), Ok(()));
        assert_eq!(interpret_save(200, ""), Ok(()));
    }
}
