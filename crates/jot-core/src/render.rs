//! Diagnostic rendering of a [`Value`] tree back to text.
//!
//! This is a debugging facility, not a serializer with format guarantees.
//! Two forms:
//!
//! - [`render`]: compact single line. Text is quoted with the escape table
//!   inverted and objects put the colon immediately after the key, so the
//!   output of a parser-producible tree is accepted back by the parser.
//! - [`render_pretty`]: 2-space indentation for human eyes. Not re-parsable
//!   in general (the object grammar rejects whitespace between a key and its
//!   colon, and pretty lists pick up stray elements), so never feed it back.
//!
//! Object keys are emitted in sorted order; key order carries no meaning, and
//! sorting keeps output deterministic. `Null` and `Bool` render as `null`,
//! `true`, `false` even though the parser never produces them.

use std::collections::HashMap;
use std::fmt;

use crate::value::Value;

/// Render a value as a compact single line.
pub fn render(value: &Value) -> String {
    let mut out = String::new();
    render_into(value, &mut out);
    out
}

/// Render a value with 2-space indentation.
pub fn render_pretty(value: &Value) -> String {
    let mut out = String::new();
    render_pretty_into(value, 0, &mut out);
    out
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

fn render_into(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Integer(n) => out.push_str(&n.to_string()),
        Value::Float(f) => out.push_str(&f.to_string()),
        Value::Text(s) => render_text(s, out),
        Value::List(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                render_into(item, out);
            }
            out.push(']');
        }
        Value::Object(entries) => {
            out.push('{');
            for (i, key) in sorted_keys(entries).iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                render_text(key, out);
                out.push(':');
                render_into(&entries[*key], out);
            }
            out.push('}');
        }
    }
}

fn render_pretty_into(value: &Value, depth: usize, out: &mut String) {
    match value {
        Value::List(items) if !items.is_empty() => {
            let indent = "  ".repeat(depth + 1);
            out.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(",\n");
                }
                out.push_str(&indent);
                render_pretty_into(item, depth + 1, out);
            }
            out.push('\n');
            out.push_str(&"  ".repeat(depth));
            out.push(']');
        }
        Value::Object(entries) if !entries.is_empty() => {
            let indent = "  ".repeat(depth + 1);
            out.push_str("{\n");
            for (i, key) in sorted_keys(entries).iter().enumerate() {
                if i > 0 {
                    out.push_str(",\n");
                }
                out.push_str(&indent);
                render_text(key, out);
                out.push_str(": ");
                render_pretty_into(&entries[*key], depth + 1, out);
            }
            out.push('\n');
            out.push_str(&"  ".repeat(depth));
            out.push('}');
        }
        other => render_into(other, out),
    }
}

fn sorted_keys(entries: &HashMap<String, Value>) -> Vec<&String> {
    let mut keys: Vec<&String> = entries.keys().collect();
    keys.sort();
    keys
}

/// Quote a text payload, escaping through the inverse of the parse-time
/// escape table. Control chars outside the table pass through verbatim,
/// which the string lexer also copies verbatim.
fn render_text(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\x08' => out.push_str("\\b"),
            '\x0C' => out.push_str("\\f"),
            '\0' => out.push_str("\\0"),
            '\x0B' => out.push_str("\\v"),
            '\x07' => out.push_str("\\a"),
            other => out.push(other),
        }
    }
    out.push('"');
}
