use serde_json::Value;

/// Recursion bound for pathologically deep value trees; anything deeper passes
/// through untouched.
const MAX_DEPTH: usize = 128;

/// Converts one filter value into backend-ready form.
///
/// Arrays are coerced element-wise. Objects get a shallow copy with `id`
/// mirrored from their `value` key: the backend references relation values by
/// `id`, while UI option widgets carry `value`. When `value` is absent the
/// copy carries no `id` at all (the mirror of a missing value is nothing, not
/// null). Scalars and null are returned unchanged.
pub fn coerce_value(value: &Value) -> Value {
    coerce_at_depth(value, 0)
}

fn coerce_at_depth(value: &Value, depth: usize) -> Value {
    if depth >= MAX_DEPTH {
        return value.clone();
    }
    match value {
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| coerce_at_depth(item, depth + 1))
                .collect(),
        ),
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
