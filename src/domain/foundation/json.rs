//! Type guards and coercers for persisted JSON blobs.
//!
//! The `trips.inputs` column and the destination-history `payload` column
//! arrive either as already-parsed JSON or as a JSON string, and their
//! shapes are not enforced upstream. These helpers narrow such values
//! without ever panicking: a field is accepted only when its runtime type
//! matches the expected shape, and is dropped otherwise. Nothing past this
//! boundary handles `serde_json::Value` directly.

use serde_json::{Map, Value};
use tracing::debug;

/// Parses a blob that may be a JSON object or a JSON string.
///
/// Returns `None` when the value is absent, is a malformed JSON string, or
/// parses to something other than an object. Callers treat `None` as "no
/// data", never as an error.
pub fn parse_json_blob(raw: Option<&Value>) -> Option<Map<String, Value>> {
    match raw? {
        Value::Object(map) => Some(map.clone()),
        Value::String(s) => match serde_json::from_str::<Value>(s) {
            Ok(Value::Object(map)) => Some(map),
            Ok(_) => None,
            Err(err) => {
                debug!(error = %err, "discarding malformed JSON blob");
                None
            }
        },
        _ => None,
    }
}

/// Narrows `obj[key]` to an owned string, dropping any other shape.
pub fn str_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Narrows `obj[key]` to a finite number, dropping any other shape.
pub fn f64_field(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    obj.get(key).and_then(Value::as_f64).filter(|n| n.is_finite())
}

/// Narrows `obj[key]` to a string array.
///
/// Every element must be a string; a single non-string element drops the
/// whole field rather than coercing it.
pub fn string_array_field(obj: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    let arr = obj.get(key)?.as_array()?;
    let mut out = Vec::with_capacity(arr.len());
    for element in arr {
        out.push(element.as_str()?.to_string());
    }
    Some(out)
}

/// Normalizes a list-ish value into a string array.
///
/// Upstream stores fields like `languages` and `plugs` as either a string
/// array or a single comma-separated string. Both forms normalize to the
/// array: split on commas, trim, drop empties. Anything else is dropped.
pub fn string_list(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(arr) => {
            let mut out = Vec::with_capacity(arr.len());
            for element in arr {
                out.push(element.as_str()?.to_string());
            }
            Some(out)
        }
        Value::String(s) => Some(
            s.split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        _ => None,
    }
}

/// [`string_list`] applied to `obj[key]`.
pub fn string_list_field(obj: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    obj.get(key).and_then(string_list)
}
