use super::coerce::coerce_value;
use super::comparator::normalize_comparator;
use serde_json::Value;

/// Normalizes a filter tree in place, visiting every condition leaf.
///
/// Policy per node:
/// - arrays: each element is normalized (a bare list of conditions acts as an
///   implicit conjunction);
/// - objects tagged `type: "condition"`: the comparator is rewritten through
///   the alias table when that yields a usable token, and the value is coerced;
/// - objects with an array `conditions` key: treated as a conjunction whatever
///   their declared type, recursing into each child;
/// - everything else (null, scalars, foreign object shapes): left untouched,
///   so malformed nodes pass through instead of failing the whole filter.
///
/// Idempotent: applying it twice yields the same tree as applying it once.
pub fn normalize_filter(node: &mut Value) {
    match node {
        Value::Array(items) => {
            for item in items {
                normalize_filter(item);
            }
        }
        Value::Object(entries) => {
            if entries.get("type").and_then(Value::as_str) == Some("condition") {
                if let Some(comparator) = entries.get("comparator").and_then(normalize_comparator) {
                    entries.insert("comparator".to_string(), Value::String(comparator));
                }
                if let Some(coerced) = entries.get("value").map(coerce_value) {
                    entries.insert("value".to_string(), coerced);
                }
            } else if let Some(Value::Array(children)) = entries.get_mut("conditions") {
                for child in children {
                    normalize_filter(child);
                }
            }
        }
        _ => {}
    }
}
