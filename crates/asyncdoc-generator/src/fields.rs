//! Typed reads from loosely-shaped descriptor mappings.

use serde_json::{Map, Value};

/// Read a scalar field as text.
///
/// Numbers and booleans are rendered with their canonical text. Empty
/// strings, nulls, mappings and sequences count as absent.
pub(crate) fn text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(scalar_text)
}

/// Read a sequence field as a list of texts, dropping non-scalar items.
///
/// Returns `None` when the field is missing or not a sequence.
pub(crate) fn text_list(obj: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    obj.get(key)
        .and_then(|v| v.as_array())
        .map(|items| items.iter().filter_map(scalar_text).collect())
}

/// Read a mapping field.
pub(crate) fn object<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    obj.get(key).and_then(|v| v.as_object())
}

/// Read a sequence field.
pub(crate) fn array<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Vec<Value>> {
    obj.get(key).and_then(|v| v.as_array())
}

/// Whether a value counts as set: null, `false`, zero and `""` do not.
pub(crate) fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
