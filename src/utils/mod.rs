use crate::errors::WikiError;

/// Escape HTML special characters
pub fn escape_html(text: &str) -> String {
    text.replace("&", "&amp;")
        .replace("<", "&lt;")
        .replace(">", "&gt;")
        .replace("\"", "&quot;")
        .replace("'", "&#39;")
}

/// Escape HTML attribute values
pub fn escape_attr(text: &str) -> String {
    escape_html(text)
}

/// Percent-encode a title so it can be used as a single URL path segment
pub fn encode_path_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Reject titles that cannot name a single file inside the pages directory
pub fn ensure_valid_title(title: &str) -> Result<(), WikiError> {
    if title.is_empty() || title == "." || title == ".." {
        return Err(WikiError::InvalidTitle);
    }
    if title.contains(['/', '\\', '\0']) {
        return Err(WikiError::InvalidTitle);
    }
    Ok(())
}
