//! Unit tests for payload formatting: field-entry lists, value shaping, and
//! the lenient static-data parse.
use daicho::prelude::*;

#[test]
fn test_format_value_parses_json_substrings() {
    assert_eq!(format_value(&json!("  {\"x\": 1} ")), json!({"x": 1}));
    assert_eq!(format_value(&json!("[1, 2]")), json!([1, 2]));
    assert_eq!(format_value(&json!("\n[\"a\"]")), json!(["a"]));
}

#[test]
fn test_format_value_keeps_broken_json_as_text() {
    // Looks like JSON, is not: the trimmed text survives verbatim.
    assert_eq!(format_value(&json!(" {not json ")), json!("{not json"));
    assert_eq!(format_value(&json!("[1, 2")), json!("[1, 2"));
}

#[test]
fn test_format_value_trims_plain_strings() {
    assert_eq!(format_value(&json!("  hello  ")), json!("hello"));
    assert_eq!(format_value(&json!("plain")), json!("plain"));
}

#[test]
fn test_format_value_mirrors_relation_ids() {
    assert_eq!(
        format_value(&json!({"name": "Ada", "value": "u1"})),
        json!({"name": "Ada", "value": "u1", "id": "u1"})
    );
    assert_eq!(
        format_value(&json!({"name": "Ada", "id": "stale"})),
        json!({"name": "Ada"})
    );
}

#[test]
fn test_format_value_recurses_into_arrays() {
    assert_eq!(
        format_value(&json!(["  x ", {"value": 1}, 7])),
        json!(["x", {"value": 1, "id": 1}, 7])
    );
}

#[test]
fn test_format_value_passes_scalars_through() {
    assert_eq!(format_value(&json!(42)), json!(42));
    assert_eq!(format_value(&json!(true)), json!(true));
    assert_eq!(format_value(&Value::Null), Value::Null);
}

#[test]
fn test_format_fields_last_write_wins() {
    let data = json!([
        {"field": "a", "value": "{\"x\": 1}"},
        {"field": "b", "value": "{\"x\": 1}"},
        {"field": "a", "value": "plain"}
    ]);
    let record = format_fields(&data);
    assert_eq!(Value::Object(record), json!({"a": "plain", "b": {"x": 1}}));
}

#[test]
fn test_format_fields_skips_unusable_entries() {
    let data = json!([
        5,
        {"value": 1},
        {"field": "", "value": 2},
        {"field": 3, "value": 3},
        {"field": "ok", "value": 4},
        {"field": "bare"}
    ]);
    let record = format_fields(&data);
    assert_eq!(Value::Object(record), json!({"ok": 4}));
}

#[test]
fn test_format_fields_keeps_null_and_absent_values_apart() {
    // A value-less entry leaves the key off the wire and unsets an earlier
    // value; an explicit null stays in the record.
    let data = json!([
        {"field": "cleared", "value": null},
        {"field": "bare"},
        {"field": "erased", "value": 1},
        {"field": "erased"}
    ]);
    let record = format_fields(&data);
    assert_eq!(Value::Object(record), json!({"cleared": null}));
}

#[test]
fn test_format_fields_rejects_non_array_data() {
    assert!(format_fields(&json!({"field": "a", "value": 1})).is_empty());
    assert!(format_fields(&json!("nope")).is_empty());
    assert!(format_fields(&Value::Null).is_empty());
}

#[test]
fn test_parse_static_object_happy_path() {
    let record = parse_static_object("{\"source\": \"import\", \"count\": 2}");
    assert_eq!(
        Value::Object(record),
        json!({"source": "import", "count": 2})
    );
}

#[test]
fn test_parse_static_object_is_lenient() {
    assert!(parse_static_object("not json at all").is_empty());
    assert!(parse_static_object("[1, 2]").is_empty());
    assert!(parse_static_object("42").is_empty());
    assert!(parse_static_object("").is_empty());
}
