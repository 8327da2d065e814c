//! Timestamp and entry formatting

use chrono::Local;

/// Separator line opening fresh log files and framing multi-line entries.
pub const SEPARATOR: &str =
    "----------------------------------------------------------------";

/// Local wall-clock timestamp.
///
/// Day and month are zero-padded, hour/minute/second are not. Filename mode
/// swaps the `DD-MM-YYYY HH:MM:SS` punctuation for `-` and `_` so the result
/// is safe to use as a file name.
pub fn date_as_string(for_file_name: bool) -> String {
    let now = Local::now();
    if for_file_name {
        now.format("%d-%m-%Y_%-H-%-M-%-S").to_string()
    } else {
        now.format("%d-%m-%Y %-H:%-M:%-S").to_string()
    }
}

/// Render one entry line: `[<timestamp>] <tag>[ [<label>]] | <message>\n`.
///
/// The label segment is omitted entirely when the label is absent or empty.
pub fn message_as_string(tag: &str, message: &str, label: Option<&str>) -> String {
    match label {
        Some(label) if !label.is_empty() => format!(
            "[{}] {} [{}] | {}\n",
            date_as_string(false),
            tag,
            label,
            message
        ),
        _ => format!("[{}] {} | {}\n", date_as_string(false), tag, message),
    }
}

/// Render a full entry, framing multi-line bodies between separator lines.
///
/// Multi-line bodies produce: separator, a header line with an empty body,
/// each body line verbatim in original order, closing separator.
pub(crate) fn render_entry(tag: &str, body: &str, label: Option<&str>) -> String {
    if !body.contains('\n') {
        return message_as_string(tag, body, label);
    }

    let mut out = String::with_capacity(body.len() + 2 * SEPARATOR.len() + 64);
    out.push_str(SEPARATOR);
    out.push('\n');
    out.push_str(&message_as_string(tag, "", label));
    for line in body.split('\n') {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(SEPARATOR);
    out.push('\n');
    out
}
