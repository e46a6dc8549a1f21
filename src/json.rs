//! Tagged JSON encoding for [`Outcome`].
//!
//! The wire shape is adjacently tagged:
//!
//! ```json
//! { "type": "ok", "value": 42 }
//! { "type": "err", "value": "boom" }
//! { "type": "ok" }
//! ```
//!
//! `value` is omitted when the payload encodes to `null`. Decoding only
//! interprets the outermost tag; a nested outcome is decoded by `T`'s own
//! `Deserialize` impl.
//!
//! Decoding never returns `Err`: malformed input is reported as the failure
//! payload of an outer `Outcome`, so the caller can chain on it like any
//! other outcome.
//!
//! `Outcome` also implements `Deserialize` directly. A missing `value`
//! decodes from `null` at every layer, so nested outcomes written by
//! [`serialize`] read back through serde as well.

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::DecodeError;
use crate::outcome::Outcome;

const TAG_FIELD: &str = "type";
const VALUE_FIELD: &str = "value";
const SUCCESS_TAG: &str = "ok";
const FAILURE_TAG: &str = "err";

/// Encodes `outcome` as a tagged JSON value.
///
/// # Errors
///
/// Returns an error if a payload fails to serialize.
///
/// # Examples
///
/// ```rust
/// use rustresult::factory::{failure, success};
/// use rustresult::json::serialize;
/// use serde_json::json;
///
/// let encoded = serialize(&success::<_, String>(1)).unwrap();
/// assert_eq!(encoded, json!({"type": "ok", "value": 1}));
///
/// let encoded = serialize(&failure::<(), _>(())).unwrap();
/// assert_eq!(encoded, json!({"type": "err"}));
/// ```
pub fn serialize<T, E>(outcome: &Outcome<T, E>) -> serde_json::Result<Value>
where
    T: Serialize,
    E: Serialize,
{
    let mut encoded = serde_json::to_value(outcome)?;
    omit_absent_values(&mut encoded);
    Ok(encoded)
}

/// Drops `"value": null` from a tagged object and from every tagged layer
/// nested directly under it.
fn omit_absent_values(encoded: &mut Value) {
    let Value::Object(fields) = encoded else {
        return;
    };
    if tag_of(fields).is_none() {
        return;
    }
    match fields.get_mut(VALUE_FIELD) {
        Some(Value::Null) => {
            fields.remove(VALUE_FIELD);
        }
        Some(inner) => omit_absent_values(inner),
        None => {}
    }
}

fn tag_of(fields: &Map<String, Value>) -> Option<&'static str> {
    match fields.get(TAG_FIELD)?.as_str()? {
        SUCCESS_TAG => Some(SUCCESS_TAG),
        FAILURE_TAG => Some(FAILURE_TAG),
        _ => None,
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decodes a tagged JSON value into an `Outcome`.
///
/// The result is `Success(outcome)` on a well-formed input and
/// `Failure(DecodeError)` otherwise:
///
/// - a number, string, boolean or `null` gives [`DecodeError::NotAnObject`]
/// - an object or array without an `ok`/`err` tag gives
///   [`DecodeError::UnrecognizedShape`]
/// - a payload that does not fit `T` or `E` gives [`DecodeError::Payload`]
///
/// A missing `value` field decodes as `null`.
///
/// # Examples
///
/// ```rust
/// use rustresult::json::deserialize;
/// use rustresult::outcome::Outcome;
/// use serde_json::json;
///
/// let decoded = deserialize::<i32, String>(json!({"type": "ok", "value": 1}));
/// assert_eq!(decoded.ok(), Some(Outcome::Success(1)));
///
/// let decoded = deserialize::<Option<i32>, String>(json!({"type": "ok"}));
/// assert_eq!(decoded.ok(), Some(Outcome::Success(None)));
///
/// let decoded = deserialize::<i32, String>(json!({"kind": "ok"}));
/// assert!(decoded.is_failure());
/// ```
pub fn deserialize<T, E>(encoded: Value) -> Outcome<Outcome<T, E>, DecodeError>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
{
    let mut fields = match encoded {
        Value::Object(fields) => fields,
        Value::Array(_) => return Outcome::Failure(DecodeError::UnrecognizedShape),
        other => {
            return Outcome::Failure(DecodeError::NotAnObject {
                found: json_type_name(&other),
            });
        }
    };

    let Some(tag) = tag_of(&fields) else {
        return Outcome::Failure(DecodeError::UnrecognizedShape);
    };
    let payload = fields.remove(VALUE_FIELD).unwrap_or(Value::Null);

    let decoded = if tag == SUCCESS_TAG {
        serde_json::from_value::<T>(payload).map(Outcome::Success)
    } else {
        serde_json::from_value::<E>(payload).map(Outcome::Failure)
    };

    match decoded {
        Ok(outcome) => Outcome::Success(outcome),
        Err(error) => Outcome::Failure(DecodeError::Payload(error.to_string())),
    }
}

// =============================================================================
// Deserialize Implementation
// =============================================================================

#[derive(Deserialize)]
enum WireTag {
    #[serde(rename = "ok")]
    Success,
    #[serde(rename = "err")]
    Failure,
}

#[derive(Deserialize)]
struct WireOutcome {
    #[serde(rename = "type")]
    tag: WireTag,
    #[serde(default)]
    value: Value,
}

impl<'de, T, E> Deserialize<'de> for Outcome<T, E>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = WireOutcome::deserialize(deserializer)?;
        match wire.tag {
            WireTag::Success => serde_json::from_value(wire.value)
                .map(Outcome::Success)
                .map_err(de::Error::custom),
            WireTag::Failure => serde_json::from_value(wire.value)
                .map(Outcome::Failure)
                .map_err(de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn test_nested_absent_value_is_omitted() {
        let nested: Outcome<Outcome<Option<i32>, String>, String> =
            Outcome::Success(Outcome::Success(None));
        let encoded = serialize(&nested).unwrap();
        assert_eq!(encoded, json!({"type": "ok", "value": {"type": "ok"}}));
    }

    #[rstest]
    #[case(json!(1), "number")]
    #[case(json!("ok"), "string")]
    #[case(json!(true), "boolean")]
    #[case(json!(null), "null")]
    fn test_non_object_input(#[case] encoded: Value, #[case] expected: &str) {
        match deserialize::<i32, String>(encoded) {
            Outcome::Failure(DecodeError::NotAnObject { found }) => assert_eq!(found, expected),
            other => panic!("unexpected decode result: {other:?}"),
        }
    }

    #[rstest]
    #[case(json!({}))]
    #[case(json!({"type": "maybe", "value": 1}))]
    #[case(json!([1, 2]))]
    fn test_unrecognized_shape(#[case] encoded: Value) {
        assert!(matches!(
            deserialize::<i32, String>(encoded),
            Outcome::Failure(DecodeError::UnrecognizedShape)
        ));
    }

    #[rstest]
    fn test_missing_value_decodes_unit_at_every_layer() {
        let nested: Outcome<Outcome<(), String>, String> = Outcome::Success(Outcome::Success(()));
        let encoded = serialize(&nested).unwrap();
        assert_eq!(encoded, json!({"type": "ok", "value": {"type": "ok"}}));

        let decoded = deserialize::<Outcome<(), String>, String>(encoded.clone());
        assert_eq!(decoded.ok(), Some(nested.clone()));

        let through_serde: Outcome<Outcome<(), String>, String> =
            serde_json::from_value(encoded).unwrap();
        assert_eq!(through_serde, nested);
    }

    #[rstest]
    fn test_payload_mismatch() {
        assert!(matches!(
            deserialize::<i32, String>(json!({"type": "ok", "value": "one"})),
            Outcome::Failure(DecodeError::Payload(_))
        ));
    }
}
