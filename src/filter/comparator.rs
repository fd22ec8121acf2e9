use serde_json::Value;

/// Fixed alias table from UI comparator tokens to backend symbols.
fn alias_symbol(key: &str) -> Option<&'static str> {
    match key {
        "eq" | "equals" | "==" => Some("="),
        "neq" | "!==" | "<>" => Some("!="),
        "gt" => Some(">"),
        "gte" => Some(">="),
        "lt" => Some("<"),
        "lte" => Some("<="),
        _ => None,
    }
}

/// Translates one comparator token into the symbol the backend expects.
///
/// The lookup trims and lower-cases the token; tokens outside the alias table
/// (including already-canonical symbols such as `=`) come back unchanged.
pub fn backend_comparator(token: &str) -> String {
    let key = token.trim().to_lowercase();
    match alias_symbol(&key) {
        Some(symbol) => symbol.to_string(),
        None => token.to_string(),
    }
}

/// JSON-level wrapper around [`backend_comparator`].
///
/// Missing, empty, or non-string tokens yield `None`; the caller must then
/// leave the comparator field untouched rather than overwrite it.
pub fn normalize_comparator(token: &Value) -> Option<String> {
    match token {
        Value::String(raw) if !raw.is_empty() => Some(backend_comparator(raw)),
        _ => None,
    }
}
