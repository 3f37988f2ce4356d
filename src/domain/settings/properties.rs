//! Reader for `key=value` property files

use std::collections::HashMap;

/// Parse property-file text into a key/value map
///
/// Follows the usual property-file layout: blank lines and lines starting
/// with `#` or `!` are ignored, the key ends at the first `=`, `:` or
/// blank (space, tab or form feed), separator blanks are skipped, and the rest of the line is
/// the value. A key that appears twice keeps its last value. Escape
/// sequences are not interpreted.
pub fn parse_properties(text: &str) -> HashMap<String, String> {
    let mut properties = HashMap::new();

    for line in text.split(['\n', '\r']) {
        let line = line.trim_start_matches(is_blank);

        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let (key, value) = split_key_value(line);
        properties.insert(key.to_string(), value.to_string());
    }

    properties
}

fn split_key_value(line: &str) -> (&str, &str) {
    let key_end = line
        .find(|c: char| c == '=' || c == ':' || is_blank(c))
        .unwrap_or(line.len());
    let key = &line[..key_end];
    let rest = line[key_end..].trim_start_matches(is_blank);

    // Whitespace may be followed by an explicit separator
    let value = match rest.chars().next() {
        Some('=') | Some(':') => rest[1..].trim_start_matches(is_blank),
        _ => rest,
    };

    (key, value)
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}
