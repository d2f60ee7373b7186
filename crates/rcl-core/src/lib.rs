//! # rcl-core
//!
//! Emitter for **RCL** configuration document trees. A tree built from
//! dynamically-typed [`Value`] nodes can be rendered into three textual
//! representations:
//!
//! - native RCL (`key = value;` statements with nested `{ }` blocks),
//! - JSON, in a pretty (4-space indent) or compact variant,
//! - a flow-style YAML-flavored syntax.
//!
//! The emitter consumes an already-built, immutable tree and produces the
//! whole document as one owned string. It does not parse RCL, validate
//! schemas, or mutate its input.
//!
//! ## Quick start
//!
//! ```rust
//! use rcl_core::{emit, Format, Object, Value};
//!
//! let mut root = Object::new();
//! root.insert("host", "127.0.0.1");
//! root.insert("port", 8080i64);
//! let root = Value::Object(root);
//!
//! assert_eq!(emit(&root, Format::Rcl), "host = \"127.0.0.1\";\nport = 8080;\n");
//! assert_eq!(emit(&root, Format::JsonCompact), r#"{"host":"127.0.0.1","port":8080}"#);
//! ```
//!
//! Inserting a second value under an existing key never overwrites: the key
//! becomes an *implicit array* and every format renders it as one
//! array-shaped region (see [`Entry`]).
//!
//! ## Modules
//!
//! - [`value`] — the [`Value`] tree, insertion-ordered [`Object`] maps, and
//!   JSON ingestion
//! - [`error`] — error type for the JSON ingestion path (emission itself is
//!   infallible)
//! - [`escape`] — the shared quoted-string escaper

pub mod error;
pub mod escape;
pub mod value;

mod flow;
mod json;

pub use error::{RclError, Result};
pub use escape::escape_json_string;
pub use value::{Entry, Object, Value};

/// Output format selector for [`emit`].
///
/// `Rcl` is the [`Default`]: callers that do not care about the wire format
/// get the native syntax, mirroring the library's historical contract where
/// every unrecognized selector fell through to RCL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// Pretty-printed JSON, four spaces per nesting level.
    Json,
    /// JSON with no whitespace outside string literals.
    JsonCompact,
    /// Flow-style YAML-flavored output (`key : value,` and `: { }` blocks).
    Yaml,
    /// Native RCL (`key = value;` statements, top-level braces suppressed).
    #[default]
    Rcl,
}

/// Render `value` as a complete document in the given `format`.
///
/// Emission is total: every node kind has a defined rendering (which is
/// zero bytes for [`Value::UserData`]), so no `Result` is involved. The
/// caller owns the returned string.
pub fn emit(value: &Value, format: Format) -> String {
    let mut out = String::new();
    match format {
        Format::Json => json::write_document(value, &mut out, false),
        Format::JsonCompact => json::write_document(value, &mut out, true),
        Format::Yaml => flow::write_document(value, &mut out, &flow::YAML),
        Format::Rcl => flow::write_document(value, &mut out, &flow::RCL),
    }
    out
}

/// Render several root object fragments as one document.
///
/// JSON wraps the fragments in an array (a single fragment stays a plain
/// object); RCL and YAML flatten them into one top-level member sequence,
/// the same way they merge chained object values below the root.
pub fn emit_fragments(fragments: &[Object], format: Format) -> String {
    let mut out = String::new();
    match format {
        Format::Json => json::write_fragments(fragments, &mut out, false),
        Format::JsonCompact => json::write_fragments(fragments, &mut out, true),
        Format::Yaml => flow::write_fragments(fragments, &mut out, &flow::YAML),
        Format::Rcl => flow::write_fragments(fragments, &mut out, &flow::RCL),
    }
    out
}
