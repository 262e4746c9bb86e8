//! Identifier escaping and hierarchical-name joining.
//!
//! A plain Verilog identifier matches `[A-Za-z_][A-Za-z0-9_$]*`. Anything
//! else is written in escaped form: a backslash, the name, and one trailing
//! space that terminates the escaped identifier.
//!
//! Names handed over by the front-end may be hierarchical, with segments
//! separated by single spaces (`"top u1 sig"`). Each segment is escaped on
//! its own and the segments are joined with `.`.

use crate::output::OutputSink;
use std::io::Write;

/// Returns `true` if `segment` must be written as an escaped identifier.
///
/// The empty string never needs escaping; it renders as nothing.
pub fn needs_escape(segment: &str) -> bool {
    let mut chars = segment.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return true;
    }
    chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_' || c == '$'))
}

/// Writes `raw` in printable form, escaping and joining hierarchy segments.
pub fn write_identifier<W: Write>(out: &mut OutputSink<W>, raw: &str) {
    for (i, segment) in raw.split(' ').enumerate() {
        if i > 0 {
            out.write_str(".");
        }
        write_segment(out, segment);
    }
}

fn write_segment<W: Write>(out: &mut OutputSink<W>, segment: &str) {
    if needs_escape(segment) {
        out.write_str("\\");
        out.write_str(segment);
        out.write_str(" ");
    } else {
        out.write_str(segment);
    }
}
