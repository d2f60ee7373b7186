//! JSON renderer: pretty (4-space indent) and compact variants, selected by
//! one `compact` flag.

use crate::escape::{escape_json_string, push_indent};
use crate::value::{Entry, Object, Value};

/// Render `value` as a complete JSON document. The top level always starts
/// unindented.
pub(crate) fn write_document(value: &Value, out: &mut String, compact: bool) {
    write_value(value, out, 0, false, compact);
}

/// Render root fragments: one fragment is a plain object document, several
/// are wrapped in an array.
pub(crate) fn write_fragments(fragments: &[Object], out: &mut String, compact: bool) {
    if let [only] = fragments {
        write_object(only, out, 0, compact);
        return;
    }
    out.push('[');
    if !compact {
        out.push('\n');
    }
    for (i, obj) in fragments.iter().enumerate() {
        push_indent(out, 1, compact);
        write_object(obj, out, 1, compact);
        if i + 1 < fragments.len() {
            out.push(',');
        }
        if !compact {
            out.push('\n');
        }
    }
    out.push(']');
}

fn write_value(value: &Value, out: &mut String, depth: usize, start_tabs: bool, compact: bool) {
    // UserData renders as zero bytes, leading indentation included.
    if start_tabs && !matches!(value, Value::UserData) {
        push_indent(out, depth, compact);
    }
    match value {
        Value::Integer(i) => out.push_str(&i.to_string()),
        Value::Float(f) | Value::Time(f) => out.push_str(&format!("{f:.6}")),
        Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::String(s) => escape_json_string(s, out),
        Value::Object(obj) => write_object(obj, out, depth, compact),
        Value::Array(items) => write_elements(items, out, depth, compact),
        Value::UserData => {}
    }
}

fn write_object(obj: &Object, out: &mut String, depth: usize, compact: bool) {
    out.push('{');
    if !compact {
        out.push('\n');
    }
    let mut members = obj.iter().peekable();
    while let Some((key, entry)) = members.next() {
        push_indent(out, depth + 1, compact);
        escape_json_string(key, out);
        out.push(':');
        if !compact {
            out.push(' ');
        }
        write_entry(entry, out, depth + 1, compact);
        if members.peek().is_some() {
            out.push(',');
        }
        if !compact {
            out.push('\n');
        }
    }
    push_indent(out, depth, compact);
    out.push('}');
}

/// A `Multi` entry renders as an array purely because it is `Multi` — the
/// element kinds are never inspected.
fn write_entry(entry: &Entry, out: &mut String, depth: usize, compact: bool) {
    match entry {
        Entry::Single(value) => write_value(value, out, depth, false, compact),
        Entry::Multi(values) => write_elements(values, out, depth, compact),
    }
}

/// Bracketed element list, shared by explicit arrays and implicit `Multi`
/// chains.
fn write_elements(items: &[Value], out: &mut String, depth: usize, compact: bool) {
    out.push('[');
    if !compact {
        out.push('\n');
    }
    for (i, item) in items.iter().enumerate() {
        write_value(item, out, depth + 1, true, compact);
        if i + 1 < items.len() {
            out.push(',');
        }
        if !compact {
            out.push('\n');
        }
    }
    push_indent(out, depth, compact);
    out.push(']');
}
