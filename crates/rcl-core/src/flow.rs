//! Shared walker for the two flow-style formats: native RCL and the
//! YAML-flavored variant.
//!
//! The two formats traverse the tree identically — same top-level brace
//! suppression, same merging of chained object values, same implicit-array
//! handling, same four-decimal floats — and differ only in surface tokens.
//! A token table per format keeps one walker honest for both.

use crate::escape::{escape_json_string, push_indent};
use crate::value::{Entry, Object, Value};

/// The tokens that distinguish one flow-style format from the other.
pub(crate) struct Style {
    /// Between a key and a scalar value.
    scalar_sep: &'static str,
    /// After a scalar member.
    scalar_end: &'static str,
    /// Opening token of a nested (non-top-level) object.
    object_open: &'static str,
    /// Opening token of an array.
    array_open: &'static str,
}

pub(crate) const RCL: Style = Style {
    scalar_sep: " = ",
    scalar_end: ";\n",
    object_open: "{\n",
    array_open: "[\n",
};

pub(crate) const YAML: Style = Style {
    scalar_sep: " : ",
    scalar_end: ",\n",
    object_open: ": {\n",
    array_open: ": [\n",
};

/// Render `value` as a complete flow-style document.
///
/// A root object is flattened: no enclosing braces, members at indent zero.
/// Any other root kind renders as its plain value form.
pub(crate) fn write_document(value: &Value, out: &mut String, style: &Style) {
    match value {
        Value::Object(obj) => write_object(&[obj], out, 0, true, style),
        other => write_value(other, out, 0, false, style),
    }
}

/// Render root fragments as one flattened top-level member sequence.
pub(crate) fn write_fragments(fragments: &[Object], out: &mut String, style: &Style) {
    let objects: Vec<&Object> = fragments.iter().collect();
    write_object(&objects, out, 0, true, style);
}

/// How a member entry is rendered: scalars take `key = value;` form, while
/// objects and arrays bring their own delimiters.
enum Shape<'a> {
    Scalar(&'a Value),
    /// One object, or a `Multi` chain made entirely of objects — the chain
    /// case merges all member lists into a single block.
    Objects(Vec<&'a Object>),
    /// An explicit array, or a `Multi` chain with at least one non-object.
    Array(&'a [Value]),
}

fn entry_shape(entry: &Entry) -> Shape<'_> {
    match entry {
        Entry::Single(Value::Object(obj)) => Shape::Objects(vec![obj]),
        Entry::Single(Value::Array(items)) => Shape::Array(items),
        Entry::Single(value) => Shape::Scalar(value),
        Entry::Multi(values) => {
            let objects: Option<Vec<&Object>> = values
                .iter()
                .map(|v| match v {
                    Value::Object(obj) => Some(obj),
                    _ => None,
                })
                .collect();
            match objects {
                Some(objects) => Shape::Objects(objects),
                None => Shape::Array(values),
            }
        }
    }
}

/// Emit the members of `objects` as one block. `is_top` suppresses the
/// enclosing delimiters and keeps members at the current indent level, so a
/// whole document reads as a flat statement sequence.
fn write_object(objects: &[&Object], out: &mut String, depth: usize, is_top: bool, style: &Style) {
    if !is_top {
        out.push_str(style.object_open);
    }
    for obj in objects {
        for (key, entry) in obj.iter() {
            push_indent(out, depth + 1, is_top);
            out.push_str(key);
            let child_depth = if is_top { depth } else { depth + 1 };
            match entry_shape(entry) {
                Shape::Scalar(value) => {
                    out.push_str(style.scalar_sep);
                    write_value(value, out, child_depth, false, style);
                    out.push_str(style.scalar_end);
                }
                Shape::Objects(nested) => {
                    out.push(' ');
                    write_object(&nested, out, child_depth, false, style);
                    out.push('\n');
                }
                Shape::Array(items) => {
                    out.push(' ');
                    write_array(items, out, child_depth, style);
                    out.push('\n');
                }
            }
        }
    }
    push_indent(out, depth, is_top);
    if !is_top {
        out.push('}');
    }
}

/// Bracketed array, one element per line, trailing comma after every element
/// including the last.
fn write_array(items: &[Value], out: &mut String, depth: usize, style: &Style) {
    out.push_str(style.array_open);
    for item in items {
        write_value(item, out, depth + 1, true, style);
        out.push_str(",\n");
    }
    push_indent(out, depth, false);
    out.push(']');
}

fn write_value(value: &Value, out: &mut String, depth: usize, start_tabs: bool, style: &Style) {
    // UserData renders as zero bytes, leading indentation included.
    if start_tabs && !matches!(value, Value::UserData) {
        push_indent(out, depth, false);
    }
    match value {
        Value::Integer(i) => out.push_str(&i.to_string()),
        Value::Float(f) | Value::Time(f) => out.push_str(&format!("{f:.4}")),
        Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::String(s) => escape_json_string(s, out),
        Value::Object(obj) => write_object(&[obj], out, depth, false, style),
        Value::Array(items) => write_array(items, out, depth, style),
        Value::UserData => {}
    }
}
