//! Structured trace line emitter

use std::io::{self, Write};

/// Emits one-line JSON trace events.
///
/// Lines go to stderr so they never mix with the expanded state a command
/// prints on stdout. Fields are sorted alphabetically for deterministic
/// output; the event name always comes first.
pub struct Trace;

impl Trace {
    /// Emit an event to stderr.
    pub fn emit(event: &str, fields: &[(&str, &str)]) {
        Self::emit_to_writer(event, fields, &mut io::stderr());
    }

    /// Internal implementation writing to an arbitrary writer.
    pub(crate) fn emit_to_writer<W: Write>(event: &str, fields: &[(&str, &str)], writer: &mut W) {
        // Build JSON manually to ensure deterministic ordering
        let mut output = String::with_capacity(256);

        output.push_str("{\"event\":\"");
        Self::escape_json_string(&mut output, event);
        output.push('"');

        let mut sorted_fields: Vec<_> = fields.iter().collect();
        sorted_fields.sort_by_key(|(k, _)| *k);

        for (key, value) in sorted_fields {
            output.push_str(",\"");
            Self::escape_json_string(&mut output, key);
            output.push_str("\":\"");
            Self::escape_json_string(&mut output, value);
            output.push('"');
        }

        output.push('}');
        output.push('\n');

        // One syscall per line
        let _ = writer.write_all(output.as_bytes());
        let _ = writer.flush();
    }

    /// Escape special characters for JSON strings
    fn escape_json_string(output: &mut String, s: &str) {
        for c in s.chars() {
            match c {
                '"' => output.push_str("\\\""),
                '\\' => output.push_str("\\\\"),
                '\n' => output.push_str("\\n"),
                '\r' => output.push_str("\\r"),
                '\t' => output.push_str("\\t"),
                c if c.is_control() => {
                    output.push_str(&format!("\\u{:04x}", c as u32));
                }
                c => output.push(c),
            }
        }
    }
}

#[cfg(test)]
pub fn capture_trace(event: &str, fields: &[(&str, &str)]) -> String {
    let mut buffer = Vec::new();
    Trace::emit_to_writer(event, fields, &mut buffer);
    String::from_utf8(buffer).unwrap()
}
