//! Quoted-string escaping shared by all three output formats.

/// Append `s` to `out` as a quoted string literal, JSON-style.
///
/// Exactly seven characters are escaped to their two-character forms:
/// `\n`, `\r`, `\b`, `\t`, `\f`, `\\` and `\"`. Every other character —
/// including control characters outside that set and all non-ASCII text —
/// passes through verbatim. UTF-8 payloads therefore remain valid JSON,
/// while unlisted control characters are emitted raw; that gap is kept on
/// purpose for wire compatibility with existing consumers of this format.
///
/// Total over any input; the empty string yields `""`.
pub fn escape_json_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{0008}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\u{000C}' => out.push_str("\\f"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(ch),
        }
    }
    out.push('"');
}

/// Append `4 * depth` spaces, or nothing at all in compact mode.
pub(crate) fn push_indent(out: &mut String, depth: usize, compact: bool) {
    if !compact {
        for _ in 0..depth {
            out.push_str("    ");
        }
    }
}
