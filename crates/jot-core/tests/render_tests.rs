use std::collections::HashMap;

use jot_core::{parse, render, render_pretty, Value};

fn object(entries: &[(&str, Value)]) -> Value {
    let map: HashMap<String, Value> = entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    Value::Object(map)
}

// ============================================================================
// Compact Form
// ============================================================================

#[test]
fn scalars_render_compactly() {
    assert_eq!(render(&Value::Null), "null");
    assert_eq!(render(&Value::Bool(true)), "true");
    assert_eq!(render(&Value::Bool(false)), "false");
    assert_eq!(render(&Value::Integer(-42)), "-42");
    assert_eq!(render(&Value::Float(3.25)), "3.25");
    assert_eq!(render(&Value::Text("hi".to_string())), "\"hi\"");
}

#[test]
fn text_specials_are_escaped() {
    assert_eq!(
        render(&Value::Text("a\nb\t\"c\"\\d\x07".to_string())),
        r#""a\nb\t\"c\"\\d\a""#
    );
}

#[test]
fn lists_render_without_spaces() {
    let value = Value::List(vec![Value::Integer(1), Value::Text("x".to_string())]);
    assert_eq!(render(&value), r#"[1,"x"]"#);
    assert_eq!(render(&Value::List(vec![])), "[]");
}

#[test]
fn object_keys_render_sorted() {
    let value = object(&[("b", Value::Integer(2)), ("a", Value::Integer(1))]);
    assert_eq!(render(&value), r#"{"a":1,"b":2}"#);
    assert_eq!(render(&object(&[])), "{}");
}

#[test]
fn display_matches_compact_render() {
    let value = object(&[("k", Value::List(vec![Value::Integer(1)]))]);
    assert_eq!(value.to_string(), render(&value));
}

#[test]
fn compact_output_reparses_to_the_same_tree() {
    let value = object(&[
        ("text", Value::Text("line1\nline2".to_string())),
        ("nums", Value::List(vec![Value::Integer(1), Value::Float(0.5)])),
        ("inner", object(&[("deep", Value::Text("".to_string()))])),
    ]);
    let rendered = render(&value);
    assert_eq!(parse(&rendered), (value, rendered.len()));
}

// ============================================================================
// Pretty Form
// ============================================================================

#[test]
fn pretty_form_indents_by_two_spaces() {
    let value = object(&[
        ("a", Value::Integer(1)),
        ("b", Value::List(vec![Value::Integer(1), Value::Integer(2)])),
    ]);
    assert_eq!(
        render_pretty(&value),
        "{\n  \"a\": 1,\n  \"b\": [\n    1,\n    2\n  ]\n}"
    );
}

#[test]
fn pretty_form_keeps_empty_containers_inline() {
    let value = object(&[("a", Value::List(vec![])), ("b", object(&[]))]);
    assert_eq!(render_pretty(&value), "{\n  \"a\": [],\n  \"b\": {}\n}");
}

#[test]
fn pretty_form_of_a_scalar_is_the_compact_form() {
    assert_eq!(render_pretty(&Value::Integer(7)), "7");
}
