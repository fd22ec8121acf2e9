use serde_json::{Map, Value};

/// Combines the basic and advanced filter trees into one canonical filter
/// object.
///
/// Condition lists are concatenated basic-first, advanced-second, and that
/// order is preserved exactly. Every other key is unioned, the advanced side
/// winning on collision. The `conditions` key appears in the result only when
/// the concatenation is non-empty, so merging two empty filters yields an
/// empty object.
///
/// A basic filter that is not a plain object (arrays included) contributes
/// nothing. An advanced filter may be a plain object or a bare array of
/// conditions; any other shape contributes nothing.
pub fn merge_filters(basic: Value, advanced: Value) -> Map<String, Value> {
    let (basic_conditions, basic_rest) = split_filter(basic);
    let (advanced_conditions, advanced_rest) = match advanced {
        Value::Array(list) => (list, Map::new()),
        Value::Object(_) => split_filter(advanced),
        _ => (Vec::new(), Map::new()),
    };

    let mut merged = basic_rest;
    for (key, value) in advanced_rest {
        merged.insert(key, value);
    }

    let mut conditions = basic_conditions;
    conditions.extend(advanced_conditions);
    if !conditions.is_empty() {
        merged.insert("conditions".to_string(), Value::Array(conditions));
    }
    merged
}

/// Splits a filter object into its condition list and its remaining keys.
/// Non-objects split into nothing; a non-array `conditions` value is dropped.
fn split_filter(filter: Value) -> (Vec<Value>, Map<String, Value>) {
    let Value::Object(mut entries) = filter else {
        return (Vec::new(), Map::new());
    };
    let conditions = match entries.remove("conditions") {
        Some(Value::Array(list)) => list,
        _ => Vec::new(),
    };
    (conditions, entries)
}
