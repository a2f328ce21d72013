/// Pull the raw value for `marker` out of `line`. Returns `None` when the
/// line does not contain the marker at all; an empty string means the marker
/// was there but carried no extractable value.
pub fn extract_field(line: &str, marker: &str) -> Option<String> {
    if !line.contains(marker) {
        return None;
    }
    Some(extract_value(line))
}

// Bracketed values win over colon suffixes: dump lines routinely contain
// more than one colon, and the value the firmware writes sits in the first
// `[...]` pair on the line.
fn extract_value(line: &str) -> String {
    if let Some(open) = line.find('[') {
        if let Some(close) = line[open + 1..].find(']') {
            return line[open + 1..open + 1 + close].trim().to_string();
        }
    }
    if let Some(colon) = line.find(':') {
        return line[colon + 1..].trim().to_string();
    }
    String::new()
}
