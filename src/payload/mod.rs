//! Turning the declarative field-entry list and the raw static-data blob into
//! the flat payload record sent on create and update.

use serde_json::{Map, Value};
use tracing::warn;

/// Formats the raw field-entry list into a flat payload record.
///
/// Entries that are not objects carrying a non-empty string `field` are
/// skipped. Later entries overwrite earlier ones with the same field name, so
/// the declared list order determines precedence. An entry without a `value`
/// key writes nothing and unsets the field, so the key stays off the wire
/// (an explicit null still lands in the record). A non-array input formats
/// to an empty record.
pub fn format_fields(data: &Value) -> Map<String, Value> {
    let mut record = Map::new();
    let Value::Array(entries) = data else {
        return record;
    };
    for entry in entries {
        let Value::Object(entry) = entry else {
            continue;
        };
        let Some(field) = entry.get("field").and_then(Value::as_str) else {
            continue;
        };
        if field.is_empty() {
            continue;
        }
        match entry.get("value") {
            Some(value) => {
                record.insert(field.to_string(), format_value(value));
            }
            None => {
                record.remove(field);
            }
        }
    }
    record
}

/// Formats one field value for the wire.
///
/// Strings are trimmed; a trimmed string opening with `{` or `[` is parsed as
/// JSON when possible and kept as text otherwise. Arrays format element-wise.
/// Objects get the relation treatment: a shallow copy with `id` mirrored from
/// `value` (dropped entirely when `value` is absent). Anything else passes
/// through.
pub fn format_value(value: &Value) -> Value {
    match value {
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.starts_with('{') || trimmed.starts_with('[') {
                match serde_json::from_str(trimmed) {
                    Ok(parsed) => parsed,
                    Err(_) => Value::String(trimmed.to_string()),
                }
            } else {
                Value::String(trimmed.to_string())
            }
        }
        Value::Array(items) => Value::Array(items.iter().map(format_value).collect()),
        Value::Object(entries) => {
            let mut copy = entries.clone();
            match entries.get("value") {
                Some(id) => {
                    copy.insert("id".to_string(), id.clone());
                }
                None => {
                    copy.remove("id");
                }
            }
            Value::Object(copy)
        }
        other => other.clone(),
    }
}

/// Parses the static-data JSON blob.
///
/// Lenient by contract: malformed JSON and JSON that is not an object both
/// yield an empty record, never an error. The caller merges the result on top
/// of the field-derived record, static data winning on collisions.
pub fn parse_static_object(raw: &str) -> Map<String, Value> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(entries)) => entries,
        Ok(other) => {
            warn!("static data parsed to a non-object ({other}), using an empty object");
            Map::new()
        }
        Err(err) => {
            warn!("static data is not valid JSON, using an empty object: {err}");
            Map::new()
        }
    }
}
