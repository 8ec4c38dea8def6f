//! Record rendering.
//!
//! Every record renders to exactly one `\n`-terminated line. Rendering is a
//! pure function of the record and the format, so logging the same record
//! twice appends two identical lines.
//!
//! - Text: `[IO_FAILURE] fs.rs:12 in open: permission denied`
//! - JSON: `{"code":"IO_FAILURE","file":"fs.rs","function":"open","line":12,"message":"permission denied"}`

use std::fmt::Write;

use errlog_record::ErrorRecord;

/// Line format for logged records.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum RecordFormat {
    /// Human-readable `[CODE] file:line in function: message`.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Render `record` as a single line, including the trailing newline.
pub fn render(record: &ErrorRecord, format: RecordFormat) -> String {
    match format {
        RecordFormat::Text => render_text(record),
        RecordFormat::Json => render_json(record),
    }
}

fn render_text(record: &ErrorRecord) -> String {
    let mut out = String::with_capacity(
        32 + record.file().len() + record.function().len() + record.message().len(),
    );
    let _ = write!(out, "[{}] ", record.code());
    escape_into(&mut out, record.file(), false);
    let _ = write!(out, ":{} in ", record.line());
    escape_into(&mut out, record.function(), false);
    out.push_str(": ");
    escape_into(&mut out, record.message(), false);
    out.push('\n');
    out
}

fn render_json(record: &ErrorRecord) -> String {
    // Build JSON manually (fixed shape, flat fields)
    let mut out = String::with_capacity(
        64 + record.file().len() + record.function().len() + record.message().len(),
    );
    let _ = write!(out, "{{\"code\":\"{}\",\"file\":\"", record.code());
    escape_into(&mut out, record.file(), true);
    out.push_str("\",\"function\":\"");
    escape_into(&mut out, record.function(), true);
    let _ = write!(out, "\",\"line\":{},\"message\":\"", record.line());
    escape_into(&mut out, record.message(), true);
    out.push_str("\"}\n");
    out
}

/// Escape `s` so it cannot break the line.
///
/// Backslashes and control characters are always escaped; double quotes
/// only when `quote` is set.
pub(crate) fn escape_into(out: &mut String, s: &str, quote: bool) {
    for c in s.chars() {
        match c {
            '"' if quote => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
}
